//! The closed set of supported frame formats and their static wire layouts.
use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::crc::Checksum;
use crate::Error;

/// Supported frame protocols.
///
/// The string form of each variant is the exact, lowercase tag accepted by
/// [Protocol::from_str].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Protocol {
    /// AOS transfer frame
    Aos,
    /// CCSDS space packet
    Ccsds,
    /// PUS telemetry packet
    PusTm,
    /// PUS telecommand packet
    PusTc,
}

impl Protocol {
    pub const ALL: [Protocol; 4] = [Self::Aos, Self::Ccsds, Self::PusTm, Self::PusTc];

    /// The tag used to name this protocol.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Aos => "aos",
            Self::Ccsds => "ccsds",
            Self::PusTm => "pus_tm",
            Self::PusTc => "pus_tc",
        }
    }

    #[must_use]
    pub const fn layout(&self) -> FrameLayout {
        match self {
            Self::Aos => FrameLayout::new(3, Checksum::Crc32Ieee),
            Self::Ccsds => FrameLayout::new(9, Checksum::Crc32Ieee),
            Self::PusTm => FrameLayout::new(12, Checksum::Crc16Ccitt),
            Self::PusTc => FrameLayout::new(10, Checksum::Crc16Ccitt),
        }
    }
}

impl Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    /// Tags are matched exactly; `"AOS"` or `"tm"` are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.tag() == s)
            .ok_or_else(|| Error::FormatUnknown(s.to_string()))
    }
}

/// Fixed header and trailer sizes for a protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    /// Header length in bytes
    pub header_len: usize,
    /// Trailer checksum algorithm
    pub checksum: Checksum,
}

impl FrameLayout {
    const fn new(header_len: usize, checksum: Checksum) -> Self {
        Self {
            header_len,
            checksum,
        }
    }

    /// Trailer checksum length in bytes
    #[must_use]
    pub const fn crc_len(&self) -> usize {
        self.checksum.width()
    }

    /// Smallest valid frame, i.e., header and checksum with an empty payload.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.header_len + self.crc_len()
    }
}
