use std::fmt::Debug;
use std::ops::{BitXor, Not, Shr};

use crate::endianness::Endianness;

/// Reflected CRC-32 (ISO-HDLC) generator polynomial.
pub const POLY32: u32 = 0xEDB88320;
/// Reflected CRC-64 (ECMA-182, as used by xz) generator polynomial.
pub const POLY64: u64 = 0xC96C5795D7870F42;

/// An unsigned register width the table-driven CRC can run on.
pub trait CrcWord:
    Copy + Eq + Debug + Not<Output = Self> + BitXor<Output = Self> + Shr<u32, Output = Self>
{
    const ZERO: Self;
    /// Width of the register in bytes.
    const BYTES: usize;

    fn from_byte(b: u8) -> Self;
    fn low_byte(self) -> u8;
    fn is_odd(self) -> bool;
    /// Writes the word into the first `BYTES` bytes of `buf`.
    fn write_as(self, order: Endianness, buf: &mut [u8]);
}

macro_rules! impl_crc_word {
    ($word:ident, $write:ident) => {
        impl CrcWord for $word {
            const ZERO: $word = 0;
            const BYTES: usize = ::std::mem::size_of::<$word>();

            #[inline]
            fn from_byte(b: u8) -> $word {
                $word::from(b)
            }

            #[inline]
            fn low_byte(self) -> u8 {
                (self & 0xFF) as u8
            }

            #[inline]
            fn is_odd(self) -> bool {
                (self & 1) != 0
            }

            #[inline]
            fn write_as(self, order: Endianness, buf: &mut [u8]) {
                order.$write(buf, self)
            }
        }
    };
}

impl_crc_word!(u32, write_u32);
impl_crc_word!(u64, write_u64);

/// Builds the LSB-first lookup table for an already reflected polynomial.
///
/// Entry `i` is the register left after shifting the byte `i` through eight
/// rounds of conditional shift-and-XOR.
pub fn build_table<W: CrcWord>(poly: W) -> [W; 256] {
    let mut table = [W::ZERO; 256];

    for (i, entry) in table.iter_mut().enumerate() {
        let mut crc = W::from_byte(i as u8);

        for _ in 0..8 {
            crc = if crc.is_odd() {
                (crc >> 1u32) ^ poly
            } else {
                crc >> 1u32
            };
        }

        *entry = crc;
    }
    table
}

/// An immutable 256-entry lookup table for one polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrcTable<W: CrcWord> {
    entries: [W; 256],
}

impl<W: CrcWord> CrcTable<W> {
    pub fn new(poly: W) -> CrcTable<W> {
        CrcTable {
            entries: build_table(poly),
        }
    }

    pub fn entries(&self) -> &[W; 256] {
        &self.entries
    }

    /// Folds `bytes` into `state` and returns the new state.
    ///
    /// The incoming state is complemented on entry and the result is
    /// complemented again on return. Chained calls must therefore pass the
    /// value returned by the previous call unchanged; a session starts from 0.
    /// An empty input returns `state` as is.
    pub fn update<'a, I: IntoIterator<Item = &'a u8>>(&self, bytes: I, state: W) -> W {
        let mut crc = !state;
        for &b in bytes {
            let idx = b ^ crc.low_byte();
            crc = self.entries[idx as usize] ^ (crc >> 8u32);
        }
        !crc
    }
}

/// The CRC-32 and CRC-64 tables, built together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    pub crc32: CrcTable<u32>,
    pub crc64: CrcTable<u64>,
}

impl Tables {
    pub fn build() -> Tables {
        tracing::trace!(poly32 = POLY32, poly64 = POLY64, "building crc tables");
        Tables {
            crc32: CrcTable::new(POLY32),
            crc64: CrcTable::new(POLY64),
        }
    }
}

lazy_static! {
    /// Shared tables for callers that don't carry their own.
    pub static ref TABLES: Tables = Tables::build();
}

pub fn crc32<'a, I: IntoIterator<Item = &'a u8>>(iter: I, init: u32) -> u32 {
    TABLES.crc32.update(iter, init)
}

pub fn crc64<'a, I: IntoIterator<Item = &'a u8>>(iter: I, init: u64) -> u64 {
    TABLES.crc64.update(iter, init)
}
