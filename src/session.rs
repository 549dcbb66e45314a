use std::fmt;
use std::io::{self, Read};

use crate::checksum::{Checksum, Crc32Checksum, Crc64Checksum};
use crate::crc::Tables;
use crate::error::CrcResult;

/// Drives both checksums and the byte counter over one stream.
#[derive(Debug, Clone)]
pub struct Session<'t> {
    crc32: Crc32Checksum<'t>,
    crc64: Crc64Checksum<'t>,
    total: u64,
}

impl<'t> Session<'t> {
    pub fn new(tables: &'t Tables) -> Session<'t> {
        Session {
            crc32: Checksum::with_table(&tables.crc32, 0),
            crc64: Checksum::with_table(&tables.crc64, 0),
            total: 0,
        }
    }

    pub fn update(&mut self, chunk: &[u8]) {
        self.crc32.append(chunk);
        self.crc64.append(chunk);
        self.total += chunk.len() as u64;
    }

    /// Reads `reader` in `chunk_size` pieces until a zero-length read.
    ///
    /// Returns the bytes consumed by this call. A read error is returned as
    /// is; everything read before it stays in the session.
    pub fn consume<R: Read>(&mut self, mut reader: R, chunk_size: usize) -> CrcResult<u64> {
        let mut buf = vec![0u8; chunk_size.max(1)];
        let start = self.total;

        loop {
            let count = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(count) => count,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::debug!(total = self.total, "read failed: {}", e);
                    return Err(e.into());
                }
            };
            self.update(&buf[..count]);
            tracing::debug!(chunk = count, total = self.total, "folded chunk");
        }
        Ok(self.total - start)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn report(&self) -> Report {
        Report {
            bytes: self.total,
            crc32: self.crc32.value(),
            crc64: self.crc64.value(),
        }
    }
}

/// Final figures for a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub bytes: u64,
    pub crc32: u32,
    pub crc64: u64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Bytes:  {}", self.bytes)?;
        writeln!(f, "CRC-32: 0x{:08X}", self.crc32)?;
        write!(f, "CRC-64: 0x{:016X}", self.crc64)
    }
}
