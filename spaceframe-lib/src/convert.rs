//! Decode, encode and cross-protocol conversion.
use tracing::{debug, info, trace};
use typed_builder::TypedBuilder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::aos::{AosCodec, AosParams};
use crate::codec::FrameCodec;
use crate::pus::{TcCodec, TcParams, TmCodec, TmParams};
use crate::spacepacket::{SpacePacketCodec, SpacePacketParams};
use crate::{Error, FrameInfo, Message, Protocol, Result};

/// Header values used for each protocol when encoding.
///
/// A conversion never carries header values from the source frame to the target frame,
/// so any target header fields come from here. All values default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncodeParams {
    pub aos: AosParams,
    pub ccsds: SpacePacketParams,
    pub pus_tm: TmParams,
    pub pus_tc: TcParams,
}

/// Receives every message successfully decoded by a [Converter].
pub trait DecodeObserver: Send + Sync {
    fn observe(&self, protocol: Protocol, message: &Message);
}

impl<F> DecodeObserver for F
where
    F: Fn(Protocol, &Message) + Send + Sync,
{
    fn observe(&self, protocol: Protocol, message: &Message) {
        self(protocol, message);
    }
}

/// [DecodeObserver] that emits the decoded header fields and payload as an `INFO`
/// tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DecodeObserver for TracingObserver {
    fn observe(&self, protocol: Protocol, message: &Message) {
        let Some(info) = FrameInfo::new(protocol, message) else {
            return;
        };
        info!(
            protocol = %info.protocol,
            header = ?info.header,
            payload_hex = %info.payload_hex,
            payload_text = %info.payload_text,
            crc = %format_args!("{:x}", info.crc),
            "decoded frame"
        );
    }
}

/// Converts frames between protocols.
///
/// # Example
/// ```
/// use spaceframe::{Converter, EncodeParams, Protocol};
///
/// let mut params = EncodeParams::default();
/// params.pus_tm.service = 3;
/// let converter = Converter::builder().params(params).build();
///
/// let aos = converter.encode(Protocol::Aos, b"hello");
/// let tm = converter.convert(Protocol::Aos, Protocol::PusTm, &aos).unwrap();
/// let msg = converter.decode(Protocol::PusTm, &tm).unwrap();
/// assert_eq!(msg.payload, b"hello");
/// assert_eq!(msg.header[6], 3);
/// ```
#[derive(TypedBuilder)]
pub struct Converter {
    /// Header values used for encoded frames.
    #[builder(default)]
    params: EncodeParams,
    /// Called after each successful decode.
    #[builder(default, setter(strip_option))]
    observer: Option<Box<dyn DecodeObserver>>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Converter {
    #[must_use]
    pub fn params(&self) -> &EncodeParams {
        &self.params
    }

    /// Validate and decode `raw` as a `protocol` frame.
    ///
    /// # Errors
    /// [Error::TooShort] or [Error::ChecksumMismatch] if `raw` is not a valid frame.
    pub fn decode(&self, protocol: Protocol, raw: &[u8]) -> Result<Message> {
        let zult = match protocol {
            Protocol::Aos => AosCodec.decode(raw),
            Protocol::Ccsds => SpacePacketCodec.decode(raw),
            Protocol::PusTm => TmCodec.decode(raw),
            Protocol::PusTc => TcCodec.decode(raw),
        };
        match &zult {
            Ok(msg) => {
                trace!(%protocol, len = raw.len(), payload_len = msg.payload.len(), "decoded");
                if let Some(observer) = &self.observer {
                    observer.observe(protocol, msg);
                }
            }
            Err(err) => debug!(%protocol, len = raw.len(), "decode failed: {err}"),
        }
        zult
    }

    /// Encode `payload` as a `protocol` frame using this converter's header values.
    #[must_use]
    pub fn encode(&self, protocol: Protocol, payload: &[u8]) -> Vec<u8> {
        match protocol {
            Protocol::Aos => AosCodec.encode(payload, &self.params.aos),
            Protocol::Ccsds => SpacePacketCodec.encode(payload, &self.params.ccsds),
            Protocol::PusTm => TmCodec.encode(payload, &self.params.pus_tm),
            Protocol::PusTc => TcCodec.encode(payload, &self.params.pus_tc),
        }
    }

    /// Convert `raw` from a `from` frame into a `to` frame.
    ///
    /// If `from` and `to` are the same, `raw` is returned as-is without being decoded
    /// or checked. Otherwise only the payload is kept, and the new header is written
    /// from this converter's [EncodeParams].
    ///
    /// # Errors
    /// [Error::ConversionFailed] if `raw` cannot be decoded as a `from` frame.
    pub fn convert(&self, from: Protocol, to: Protocol, raw: &[u8]) -> Result<Vec<u8>> {
        if from == to {
            trace!(protocol = %from, len = raw.len(), "same protocol, passing through");
            return Ok(raw.to_vec());
        }
        let msg = self
            .decode(from, raw)
            .map_err(|err| Error::ConversionFailed {
                from,
                to,
                cause: Box::new(err),
            })?;
        debug!(%from, %to, payload_len = msg.payload.len(), "converting");
        Ok(self.encode(to, &msg.payload))
    }

    /// Decode `raw` and summarize it for display.
    ///
    /// # Errors
    /// Any error from [Self::decode].
    #[allow(clippy::missing_panics_doc)]
    pub fn inspect(&self, protocol: Protocol, raw: &[u8]) -> Result<FrameInfo> {
        let msg = self.decode(protocol, raw)?;
        // A decoded header is always exactly `layout().header_len` bytes, so this
        // cannot fail.
        Ok(FrameInfo::new(protocol, &msg).expect("decoded header to be complete"))
    }
}

/// Decode `raw` as a `protocol` frame. See [Converter::decode].
///
/// # Errors
/// [Error::TooShort] or [Error::ChecksumMismatch] if `raw` is not a valid frame.
pub fn decode(protocol: Protocol, raw: &[u8]) -> Result<Message> {
    Converter::default().decode(protocol, raw)
}

/// Encode `payload` as a `protocol` frame. See [Converter::encode].
#[must_use]
pub fn encode(protocol: Protocol, payload: &[u8], params: &EncodeParams) -> Vec<u8> {
    Converter::builder().params(*params).build().encode(protocol, payload)
}

/// Convert `raw` between protocols using default header values. See [Converter::convert].
///
/// # Errors
/// [Error::ConversionFailed] if `raw` cannot be decoded as a `from` frame.
pub fn convert(from: Protocol, to: Protocol, raw: &[u8]) -> Result<Vec<u8>> {
    Converter::default().convert(from, to, raw)
}

/// Decode and summarize `raw`. See [Converter::inspect].
///
/// # Errors
/// Any error from [decode].
pub fn inspect(protocol: Protocol, raw: &[u8]) -> Result<FrameInfo> {
    Converter::default().inspect(protocol, raw)
}
