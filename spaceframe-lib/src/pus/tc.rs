#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Service, Subservice};
use crate::codec::FrameCodec;
use crate::Protocol;

/// PUS telecommand header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TcHeader {
    pub service: Service,
    pub subservice: Subservice,
}

impl TcHeader {
    /// Telecommand header length in bytes
    pub const LEN: usize = 10;

    /// Construct from the provided bytes, or `None` if there are not enough bytes.
    #[must_use]
    pub fn decode(dat: &[u8]) -> Option<Self> {
        if dat.len() < Self::LEN {
            return None;
        }
        Some(TcHeader {
            service: dat[0],
            subservice: dat[1],
        })
    }
}

/// Header values used when encoding telecommand packets. Defaults to zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TcParams {
    pub service: Service,
    pub subservice: Subservice,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TcCodec;

impl FrameCodec for TcCodec {
    const PROTOCOL: Protocol = Protocol::PusTc;
    type Params = TcParams;

    fn write_header(&self, buf: &mut Vec<u8>, _payload_len: usize, params: &TcParams) {
        let mut header = [0u8; TcHeader::LEN];
        header[0] = params.service;
        header[1] = params.subservice;
        buf.extend_from_slice(&header);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::crc16_ccitt;
    use crate::Error;

    #[test]
    fn test_encode_decode() {
        let params = TcParams {
            service: 8,
            subservice: 1,
        };
        let dat = TcCodec.encode(&[0xca, 0xfe], &params);

        assert_eq!(dat.len(), 14);
        assert_eq!(&dat[..2], &[8, 1]);
        assert_eq!(&dat[2..10], &[0u8; 8]);
        assert_eq!(&dat[12..], &crc16_ccitt(&dat[..12]).to_be_bytes());

        let msg = TcCodec.decode(&dat).unwrap();
        assert_eq!(msg.payload, vec![0xca, 0xfe]);
        assert_eq!(
            TcHeader::decode(&msg.header).unwrap(),
            TcHeader {
                service: 8,
                subservice: 1
            }
        );
    }

    #[test]
    fn test_decode_too_short() {
        assert_eq!(
            TcCodec.decode(&[0u8; 11]),
            Err(Error::TooShort {
                protocol: Protocol::PusTc,
                actual: 11,
                minimum: 12
            })
        );
    }
}
