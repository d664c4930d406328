//! AOS transfer frames.
//!
//! ```text
//! +------+------+---------------+---------------+
//! | scid | vcid |    payload    | crc-32 (ieee) |
//! |  2   |  1   |      ...      |       4       |
//! +------+------+---------------+---------------+
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codec::FrameCodec;
use crate::Protocol;

pub type Scid = u16;
pub type Vcid = u8;

/// Marker some producers place before the payload. It is removed on decode.
pub const PAYLOAD_PREFIX: [u8; 3] = [0x00, 0x7b, 0x7c];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AosHeader {
    pub scid: Scid,
    pub vcid: Vcid,
}

impl AosHeader {
    /// AOS header length in bytes
    pub const LEN: usize = 3;

    /// Construct from the provided bytes, or `None` if there are not enough bytes.
    #[must_use]
    pub fn decode(dat: &[u8]) -> Option<Self> {
        if dat.len() < Self::LEN {
            return None;
        }
        Some(AosHeader {
            scid: u16::from_be_bytes([dat[0], dat[1]]),
            vcid: dat[2],
        })
    }
}

/// Header values used when encoding AOS frames. Defaults to zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AosParams {
    pub scid: Scid,
    pub vcid: Vcid,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AosCodec;

impl FrameCodec for AosCodec {
    const PROTOCOL: Protocol = Protocol::Aos;
    type Params = AosParams;

    fn write_header(&self, buf: &mut Vec<u8>, _payload_len: usize, params: &AosParams) {
        buf.extend_from_slice(&params.scid.to_be_bytes());
        buf.push(params.vcid);
    }

    fn payload<'a>(&self, dat: &'a [u8]) -> &'a [u8] {
        dat.strip_prefix(&PAYLOAD_PREFIX[..]).unwrap_or(dat)
    }
}
