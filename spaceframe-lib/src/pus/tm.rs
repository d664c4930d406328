#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Service, Subservice};
use crate::codec::FrameCodec;
use crate::Protocol;

/// PUS telemetry header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TmHeader {
    pub service: Service,
    pub subservice: Subservice,
    /// Single byte at offset 2 some producers use to mark a time reference.
    pub timestamp_marker: u8,
}

impl TmHeader {
    /// Telemetry header length in bytes
    pub const LEN: usize = 12;

    const TIMESTAMP_OFFSET: usize = 2;
    const SERVICE_OFFSET: usize = 6;
    const SUBSERVICE_OFFSET: usize = 7;

    /// Construct from the provided bytes, or `None` if there are not enough bytes.
    #[must_use]
    pub fn decode(dat: &[u8]) -> Option<Self> {
        if dat.len() < Self::LEN {
            return None;
        }
        Some(TmHeader {
            service: dat[Self::SERVICE_OFFSET],
            subservice: dat[Self::SUBSERVICE_OFFSET],
            timestamp_marker: dat[Self::TIMESTAMP_OFFSET],
        })
    }
}

/// Header values used when encoding telemetry packets. Defaults to zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TmParams {
    pub service: Service,
    pub subservice: Subservice,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TmCodec;

impl FrameCodec for TmCodec {
    const PROTOCOL: Protocol = Protocol::PusTm;
    type Params = TmParams;

    fn write_header(&self, buf: &mut Vec<u8>, _payload_len: usize, params: &TmParams) {
        let mut header = [0u8; TmHeader::LEN];
        header[TmHeader::SERVICE_OFFSET] = params.service;
        header[TmHeader::SUBSERVICE_OFFSET] = params.subservice;
        buf.extend_from_slice(&header);
    }
}
