//! Frame trailer checksums.
//!
//! Both algorithms are table driven by way of the [crc] crate.
use crc::{Crc, CRC_16_IBM_3740, CRC_32_ISO_HDLC};

/// CRC-32 as used by Ethernet and zlib (IEEE 802.3 polynomial, reflected).
pub const CRC32_IEEE: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// CRC-16/CCITT with initial value `0xffff`, no reflection and no final xor, often
/// called CRC-16/CCITT-FALSE. This is the checksum used by PUS packets.
pub const CRC16_CCITT: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

/// Compute the IEEE CRC-32 over all of `dat`.
#[must_use]
pub fn crc32_ieee(dat: &[u8]) -> u32 {
    CRC32_IEEE.checksum(dat)
}

/// Compute the CRC-16/CCITT over all of `dat`.
#[must_use]
pub fn crc16_ccitt(dat: &[u8]) -> u16 {
    CRC16_CCITT.checksum(dat)
}

/// The checksum algorithm protecting a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checksum {
    Crc32Ieee,
    Crc16Ccitt,
}

impl Checksum {
    /// Number of trailer bytes used to store this checksum.
    #[must_use]
    pub const fn width(&self) -> usize {
        match self {
            Self::Crc32Ieee => 4,
            Self::Crc16Ccitt => 2,
        }
    }

    /// Compute the checksum, widened to `u32`.
    #[must_use]
    pub fn compute(&self, dat: &[u8]) -> u32 {
        match self {
            Self::Crc32Ieee => crc32_ieee(dat),
            Self::Crc16Ccitt => u32::from(crc16_ccitt(dat)),
        }
    }

    /// Split `dat` into the bytes covered by the checksum and the big-endian checksum
    /// value stored in its final [Self::width] bytes. `None` if `dat` is shorter than
    /// the checksum.
    #[must_use]
    pub fn split<'a>(&self, dat: &'a [u8]) -> Option<(&'a [u8], u32)> {
        match self {
            Self::Crc32Ieee => dat
                .split_last_chunk::<4>()
                .map(|(body, crc)| (body, u32::from_be_bytes(*crc))),
            Self::Crc16Ccitt => dat
                .split_last_chunk::<2>()
                .map(|(body, crc)| (body, u32::from(u16::from_be_bytes(*crc)))),
        }
    }

    /// Append the big-endian checksum of everything currently in `buf`.
    pub fn append(&self, buf: &mut Vec<u8>) {
        match self {
            Self::Crc32Ieee => {
                let crc = crc32_ieee(buf);
                buf.extend_from_slice(&crc.to_be_bytes());
            }
            Self::Crc16Ccitt => {
                let crc = crc16_ccitt(buf);
                buf.extend_from_slice(&crc.to_be_bytes());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    /// Bit-at-a-time CRC-16/CCITT.
    fn crc16_bitwise(dat: &[u8]) -> u16 {
        let mut crc: u16 = 0xffff;
        for b in dat {
            crc ^= u16::from(*b) << 8;
            for _ in 0..8 {
                if crc & 0x8000 != 0 {
                    crc = (crc << 1) ^ 0x1021;
                } else {
                    crc <<= 1;
                }
            }
        }
        crc
    }

    #[test]
    fn test_check_values() {
        assert_eq!(crc32_ieee(b"123456789"), 0xcbf4_3926);
        assert_eq!(crc16_ccitt(b"123456789"), 0x29b1);
    }

    #[test]
    fn test_empty() {
        assert_eq!(crc32_ieee(&[]), 0);
        assert_eq!(crc16_ccitt(&[]), 0xffff);
    }

    #[test]
    fn test_crc16_matches_bitwise() {
        let mut rng = rand::thread_rng();
        for len in [0usize, 1, 2, 17, 255, 1024] {
            let dat: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            assert_eq!(crc16_ccitt(&dat), crc16_bitwise(&dat), "len={len}");
        }
    }

    #[test]
    fn test_append_and_split() {
        let mut buf = b"123456789".to_vec();
        Checksum::Crc16Ccitt.append(&mut buf);
        assert_eq!(&buf[9..], &[0x29, 0xb1]);
        assert_eq!(
            Checksum::Crc16Ccitt.split(&buf),
            Some((&b"123456789"[..], 0x29b1))
        );

        let mut buf = b"123456789".to_vec();
        Checksum::Crc32Ieee.append(&mut buf);
        assert_eq!(&buf[9..], &[0xcb, 0xf4, 0x39, 0x26]);
        assert_eq!(
            Checksum::Crc32Ieee.split(&buf),
            Some((&b"123456789"[..], 0xcbf4_3926))
        );

        assert_eq!(Checksum::Crc32Ieee.split(&[0, 1, 2]), None);
    }
}
