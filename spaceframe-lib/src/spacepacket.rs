//! CCSDS space packets.
//!
//! Only a subset of the primary header is modeled. The packet type occupies a full byte
//! and the APID and length follow the 6 byte primary block rather than being packed
//! into it.
//!
//! ```text
//! +------+------+------+------+---------+------+--------+---------+---------------+
//! | zero | type | zero | zero | seqcnt  | apid | length | payload | crc-32 (ieee) |
//! |  1   |  1   |  1   |  1   |    2    |  1   |   2    |   ...   |       4       |
//! +------+------+------+------+---------+------+--------+---------+---------------+
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codec::FrameCodec;
use crate::Protocol;

pub type Apid = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpacePacketHeader {
    pub packet_type: u8,
    pub sequence_count: u16,
    pub apid: Apid,
    /// Length field as written by the producer. It is not checked against the actual
    /// payload size.
    pub packet_length: u16,
}

impl SpacePacketHeader {
    /// Length of the primary block, which is also the base of the length field.
    pub const PRIMARY_LEN: usize = 6;
    /// Full header length in bytes, including APID and length
    pub const LEN: usize = 9;

    /// Decode from bytes. Returns `None` if there are not enough bytes to construct the
    /// header.
    #[must_use]
    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::LEN {
            return None;
        }
        Some(SpacePacketHeader {
            packet_type: buf[1],
            sequence_count: u16::from_be_bytes([buf[4], buf[5]]),
            apid: buf[6],
            packet_length: u16::from_be_bytes([buf[7], buf[8]]),
        })
    }

    /// The length field value written for a payload of `payload_len` bytes.
    ///
    /// The value wraps for payloads that do not fit in the 16-bit field.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn packet_length(payload_len: usize) -> u16 {
        (payload_len + Self::PRIMARY_LEN) as u16
    }
}

/// Header values used when encoding space packets. Defaults to zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpacePacketParams {
    pub packet_type: u8,
    pub apid: Apid,
    pub sequence_count: u16,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SpacePacketCodec;

impl FrameCodec for SpacePacketCodec {
    const PROTOCOL: Protocol = Protocol::Ccsds;
    type Params = SpacePacketParams;

    fn write_header(&self, buf: &mut Vec<u8>, payload_len: usize, params: &SpacePacketParams) {
        buf.extend_from_slice(&[0x00, params.packet_type, 0x00, 0x00]);
        buf.extend_from_slice(&params.sequence_count.to_be_bytes());
        buf.push(params.apid);
        buf.extend_from_slice(&SpacePacketHeader::packet_length(payload_len).to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::crc32_ieee;
    use crate::Error;

    #[test]
    fn test_encode_example() {
        let dat = SpacePacketCodec.encode(&[0x41, 0x42], &SpacePacketParams::default());

        #[rustfmt::skip]
        let expected_header: &[u8] = &[
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // primary block
            0x00, // apid
            0x00, 0x08, // length; payload + primary block
        ];
        assert_eq!(&dat[..9], expected_header);
        assert_eq!(&dat[9..11], &[0x41, 0x42]);
        assert_eq!(&dat[11..], &crc32_ieee(&dat[..11]).to_be_bytes());

        let msg = SpacePacketCodec.decode(&dat).unwrap();
        assert_eq!(msg.payload, vec![0x41, 0x42]);
        assert_eq!(msg.header[1], 0x00);
    }

    #[test]
    fn test_encode_params() {
        let params = SpacePacketParams {
            packet_type: 1,
            apid: 0x55,
            sequence_count: 0x1234,
        };
        let dat = SpacePacketCodec.encode(b"hello", &params);
        let msg = SpacePacketCodec.decode(&dat).unwrap();
        let hdr = SpacePacketHeader::decode(&msg.header).unwrap();

        assert_eq!(hdr.packet_type, 1);
        assert_eq!(hdr.apid, 0x55);
        assert_eq!(hdr.sequence_count, 0x1234);
        assert_eq!(hdr.packet_length, 11);
        assert_eq!(msg.payload, b"hello".to_vec());
    }

    #[test]
    fn test_packet_length_not_validated() {
        let mut dat = vec![0u8, 0, 0, 0, 0, 0, 9, 0xff, 0xff, 1, 2, 3];
        let crc = crc32_ieee(&dat);
        dat.extend_from_slice(&crc.to_be_bytes());

        let msg = SpacePacketCodec.decode(&dat).unwrap();
        assert_eq!(msg.payload, vec![1, 2, 3]);
        assert_eq!(
            SpacePacketHeader::decode(&msg.header).unwrap().packet_length,
            0xffff
        );
    }

    #[test]
    fn test_packet_length_wraps() {
        assert_eq!(SpacePacketHeader::packet_length(0), 6);
        assert_eq!(SpacePacketHeader::packet_length(0xffff - 6), 0xffff);
        assert_eq!(SpacePacketHeader::packet_length(0xffff - 5), 0);
    }

    #[test]
    fn test_decode_too_short() {
        assert_eq!(
            SpacePacketCodec.decode(&[0u8; 12]),
            Err(Error::TooShort {
                protocol: Protocol::Ccsds,
                actual: 12,
                minimum: 13
            })
        );
    }

    #[test]
    fn test_text_prefix_not_accepted() {
        let zult = SpacePacketCodec.decode(b"CCSDS:some payload");
        assert!(
            matches!(zult, Err(Error::ChecksumMismatch { .. })),
            "got {zult:?}"
        );
    }
}
