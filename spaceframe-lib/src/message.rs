use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::aos::AosHeader;
use crate::pus::{TcHeader, TmHeader};
use crate::spacepacket::SpacePacketHeader;
use crate::Protocol;

/// A decoded frame, normalized across all protocols.
///
/// Only the payload is carried into another protocol by a conversion. The header bytes
/// are kept for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message {
    /// Protocol specific header bytes
    #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
    pub header: Vec<u8>,
    /// Frame user data, excluding the header and trailer checksum
    #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
    pub payload: Vec<u8>,
    /// Trailer checksum as received. 16-bit checksums are zero extended.
    pub crc: u32,
}

/// Header fields decoded according to the protocol of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "protocol", rename_all = "snake_case"))]
pub enum HeaderFields {
    Aos(AosHeader),
    Ccsds(SpacePacketHeader),
    PusTm(TmHeader),
    PusTc(TcHeader),
}

impl HeaderFields {
    /// Decode `header` as a header for `protocol`, or `None` if there are not enough bytes.
    #[must_use]
    pub fn decode(protocol: Protocol, header: &[u8]) -> Option<Self> {
        Some(match protocol {
            Protocol::Aos => Self::Aos(AosHeader::decode(header)?),
            Protocol::Ccsds => Self::Ccsds(SpacePacketHeader::decode(header)?),
            Protocol::PusTm => Self::PusTm(TmHeader::decode(header)?),
            Protocol::PusTc => Self::PusTc(TcHeader::decode(header)?),
        })
    }
}

/// Display oriented summary of a decoded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameInfo {
    pub protocol: Protocol,
    pub header: HeaderFields,
    /// Lowercase hex of the payload
    pub payload_hex: String,
    /// Payload as text, with invalid UTF-8 replaced
    pub payload_text: String,
    pub crc: u32,
}

impl FrameInfo {
    /// Summarize `message` as decoded for `protocol`. `None` if the message header is
    /// too short for the protocol.
    #[must_use]
    pub fn new(protocol: Protocol, message: &Message) -> Option<Self> {
        Some(FrameInfo {
            protocol,
            header: HeaderFields::decode(protocol, &message.header)?,
            payload_hex: hex::encode(&message.payload),
            payload_text: String::from_utf8_lossy(&message.payload).into_owned(),
            crc: message.crc,
        })
    }
}

impl Display for FrameInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "protocol:        {}", self.protocol)?;
        match self.header {
            HeaderFields::Aos(h) => {
                writeln!(f, "spacecraft id:   {}", h.scid)?;
                writeln!(f, "virtual channel: {}", h.vcid)?;
            }
            HeaderFields::Ccsds(h) => {
                writeln!(f, "packet type:     {}", h.packet_type)?;
                writeln!(f, "sequence count:  {}", h.sequence_count)?;
                writeln!(f, "apid:            {}", h.apid)?;
                writeln!(f, "packet length:   {}", h.packet_length)?;
            }
            HeaderFields::PusTm(h) => {
                writeln!(f, "service:         {}", h.service)?;
                writeln!(f, "subservice:      {}", h.subservice)?;
                writeln!(f, "time marker:     {}", h.timestamp_marker)?;
            }
            HeaderFields::PusTc(h) => {
                writeln!(f, "service:         {}", h.service)?;
                writeln!(f, "subservice:      {}", h.subservice)?;
            }
        }
        writeln!(f, "payload (hex):   {}", self.payload_hex)?;
        writeln!(f, "payload (text):  {}", self.payload_text)?;
        let width = self.protocol.layout().crc_len() * 2;
        write!(f, "crc:             {:0width$x}", self.crc)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::pus::TmHeader;
    use serde_json::json;

    #[test]
    fn test_frame_info_json() {
        let msg = Message {
            header: vec![0x00, 0x05, 0x02],
            payload: b"hi".to_vec(),
            crc: 0x1234,
        };
        let info = FrameInfo::new(Protocol::Aos, &msg).unwrap();

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(
            value,
            json!({
                "protocol": "aos",
                "header": {"protocol": "aos", "scid": 5, "vcid": 2},
                "payload_hex": "6869",
                "payload_text": "hi",
                "crc": 0x1234,
            })
        );
    }

    #[test]
    fn test_header_fields_tagged() {
        let fields = HeaderFields::PusTm(TmHeader {
            service: 3,
            subservice: 25,
            timestamp_marker: 0,
        });
        let value = serde_json::to_value(fields).unwrap();
        assert_eq!(
            value,
            json!({"protocol": "pus_tm", "service": 3, "subservice": 25, "timestamp_marker": 0})
        );

        let back: HeaderFields = serde_json::from_value(value).unwrap();
        assert_eq!(back, fields);
    }

    #[test]
    fn test_protocol_tags() {
        for protocol in Protocol::ALL {
            let value = serde_json::to_value(protocol).unwrap();
            assert_eq!(value, json!(protocol.tag()));
            assert_eq!(serde_json::from_value::<Protocol>(value).unwrap(), protocol);
        }
        assert_eq!(
            serde_json::from_str::<Protocol>("\"pus_tm\"").unwrap(),
            Protocol::PusTm
        );
    }
}
