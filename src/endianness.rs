use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Byte order used when a checksum is serialized as a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

macro_rules! impl_write {
    ($name:ident, $orig:ident, $write:ident) => {
        pub(crate) fn $name(self, buf: &mut [u8], val: $orig) {
            match self {
                Endianness::Little => LittleEndian::$write(buf, val),
                Endianness::Big => BigEndian::$write(buf, val),
            }
        }
    };
}

impl Endianness {
    impl_write!(write_u32, u32, write_u32);
    impl_write!(write_u64, u64, write_u64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_in_order() {
        let mut buf = [0u8; 4];
        Endianness::Little.write_u32(&mut buf, 0xCBF43926);
        assert_eq!(buf, [0x26, 0x39, 0xF4, 0xCB]);
        Endianness::Big.write_u32(&mut buf, 0xCBF43926);
        assert_eq!(buf, [0xCB, 0xF4, 0x39, 0x26]);

        let mut buf = [0u8; 8];
        Endianness::Big.write_u64(&mut buf, 0x0102030405060708);
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
