use std::io::{self, Read, Write};

use crate::crc::{CrcTable, CrcWord, TABLES};
use crate::endianness::Endianness;
use crate::error::{CrcError, CrcResult};

const BUFFER_SIZE: usize = 64 * 1024;

/// A running CRC over one table.
///
/// Every append continues from the value the previous append returned, so
/// feeding a stream in any number of pieces yields the same checksum as
/// feeding it at once.
#[derive(Debug, Clone)]
pub struct Checksum<'t, W: CrcWord> {
    table: &'t CrcTable<W>,
    init: W,
    value: W,
}

pub type Crc32Checksum<'t> = Checksum<'t, u32>;
pub type Crc64Checksum<'t> = Checksum<'t, u64>;

impl Crc32Checksum<'static> {
    pub fn new() -> Self {
        Checksum::with_table(&TABLES.crc32, 0)
    }
}

impl Default for Crc32Checksum<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc64Checksum<'static> {
    pub fn new() -> Self {
        Checksum::with_table(&TABLES.crc64, 0)
    }
}

impl Default for Crc64Checksum<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t, W: CrcWord> Checksum<'t, W> {
    pub fn with_table(table: &'t CrcTable<W>, init: W) -> Self {
        Checksum {
            table,
            init,
            value: init,
        }
    }

    pub fn value(&self) -> W {
        self.value
    }

    pub fn init(&self) -> W {
        self.init
    }

    pub fn append(&mut self, bytes: &[u8]) -> W {
        if !bytes.is_empty() {
            self.value = self.table.update(bytes, self.value);
        }
        self.value
    }

    /// Appends everything `reader` yields until it reports end of input.
    ///
    /// Returns the number of bytes consumed. On error, the bytes read so far
    /// are already part of the checksum.
    pub fn append_reader<R: Read>(&mut self, mut reader: R) -> CrcResult<u64> {
        let mut buf = vec![0u8; BUFFER_SIZE];
        let mut total = 0u64;

        loop {
            let count = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(count) => count,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            self.append(&buf[..count]);
            total += count as u64;
        }
        Ok(total)
    }

    pub fn reset(&mut self) {
        self.value = self.init;
    }

    /// Resumes from a previously returned checksum value.
    pub fn reset_to(&mut self, value: W) {
        self.value = value;
    }

    pub fn to_bytes(&self, order: Endianness) -> Vec<u8> {
        let mut out = vec![0u8; W::BYTES];
        self.value.write_as(order, &mut out);
        out
    }

    /// Writes the checksum into the front of `out`, returning the bytes written.
    pub fn write_digest(&self, out: &mut [u8], order: Endianness) -> CrcResult<usize> {
        if out.len() < W::BYTES {
            return Err(CrcError::BufferTooSmall {
                needed: W::BYTES,
                actual: out.len(),
            });
        }
        self.value.write_as(order, &mut out[..W::BYTES]);
        Ok(W::BYTES)
    }
}

impl<'t, W: CrcWord> Write for Checksum<'t, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
