//! Table-driven CRC-32 and CRC-64 over byte streams.
//!
//! Produces the reference checksums (`Bytes`, `CRC-32`, `CRC-64`) used to
//! validate xz test fixtures.

#[macro_use]
extern crate lazy_static;

mod checksum;
mod crc;
mod endianness;
mod error;
mod session;

pub use checksum::{Checksum, Crc32Checksum, Crc64Checksum};
pub use crc::{build_table, crc32, crc64, CrcTable, CrcWord, Tables, POLY32, POLY64, TABLES};
pub use endianness::Endianness;
pub use error::{CrcError, CrcResult};
pub use session::{Report, Session};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_agrees_with_checksums() {
        let mut session = Session::new(&TABLES);
        session.update(b"1234");
        session.update(b"56789");

        let mut c32 = Crc32Checksum::new();
        let mut c64 = Crc64Checksum::new();
        c32.append(b"123456789");
        c64.append(b"123456789");

        let report = session.report();
        assert_eq!(report.crc32, c32.value());
        assert_eq!(report.crc64, c64.value());
        assert_eq!(report.bytes, 9);
    }
}
