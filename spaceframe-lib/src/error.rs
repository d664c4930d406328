use crate::Protocol;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The protocol tag is not one of the supported formats.
    #[error("unknown format {0:?}; expected one of aos, pus_tm, pus_tc, ccsds")]
    FormatUnknown(String),

    #[error("{protocol} frame too short; got {actual} bytes, need at least {minimum}")]
    TooShort {
        protocol: Protocol,
        /// Number of bytes we got
        actual: usize,
        /// Minimum number of expected bytes
        minimum: usize,
    },

    #[error("{protocol} checksum mismatch; frame has {expected:#x}, computed {actual:#x}")]
    ChecksumMismatch {
        protocol: Protocol,
        /// Checksum carried in the frame trailer
        expected: u32,
        /// Checksum computed over the frame
        actual: u32,
    },

    /// Decoding the source frame failed during a conversion.
    #[error("converting {from} to {to}")]
    ConversionFailed {
        from: Protocol,
        to: Protocol,
        #[source]
        cause: Box<Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
