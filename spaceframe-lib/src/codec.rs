//! Common frame layout handling shared by all protocol codecs.
use crate::{Error, Message, Protocol, Result};

/// Decodes and encodes a single protocol's frame layout.
///
/// Every layout is a fixed length header, the payload, and a big-endian trailer checksum
/// computed over the header and payload. Implementations provide only the header
/// serialization; length and checksum handling is provided here.
pub trait FrameCodec {
    /// The protocol implemented.
    const PROTOCOL: Protocol;

    /// Header field values used when encoding.
    type Params: Default;

    /// Write exactly `PROTOCOL.layout().header_len` header bytes into `buf`.
    fn write_header(&self, buf: &mut Vec<u8>, payload_len: usize, params: &Self::Params);

    /// Select the payload from the bytes following the header.
    fn payload<'a>(&self, dat: &'a [u8]) -> &'a [u8] {
        dat
    }

    /// Decode `raw` into a [Message].
    ///
    /// # Errors
    /// [Error::TooShort] if `raw` is smaller than the minimum frame size, or
    /// [Error::ChecksumMismatch] if the trailer checksum does not match the frame.
    fn decode(&self, raw: &[u8]) -> Result<Message> {
        let (header, rest, crc) = unseal(Self::PROTOCOL, raw)?;
        Ok(Message {
            header: header.to_vec(),
            payload: self.payload(rest).to_vec(),
            crc,
        })
    }

    /// Encode `payload` into a complete frame using the header values in `params`.
    fn encode(&self, payload: &[u8], params: &Self::Params) -> Vec<u8> {
        let layout = Self::PROTOCOL.layout();
        let mut buf = Vec::with_capacity(layout.min_len() + payload.len());
        self.write_header(&mut buf, payload.len(), params);
        debug_assert_eq!(buf.len(), layout.header_len, "bad {} header", Self::PROTOCOL);
        buf.extend_from_slice(payload);
        layout.checksum.append(&mut buf);
        buf
    }
}

/// Verify the length and trailer checksum of `raw` for `protocol`, returning the header,
/// the bytes between the header and trailer, and the trailer checksum.
fn unseal(protocol: Protocol, raw: &[u8]) -> Result<(&[u8], &[u8], u32)> {
    let layout = protocol.layout();
    let too_short = || Error::TooShort {
        protocol,
        actual: raw.len(),
        minimum: layout.min_len(),
    };
    if raw.len() < layout.min_len() {
        return Err(too_short());
    }
    let (body, expected) = layout.checksum.split(raw).ok_or_else(too_short)?;
    let actual = layout.checksum.compute(body);
    if expected != actual {
        return Err(Error::ChecksumMismatch {
            protocol,
            expected,
            actual,
        });
    }
    let (header, rest) = body.split_at(layout.header_len);
    Ok((header, rest, expected))
}
