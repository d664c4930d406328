//! PUS telemetry and telecommand packets.
//!
//! Both packet kinds use a fixed length header carrying the service type and subtype
//! and are protected by a CRC-16/CCITT trailer. Only the service identifiers are
//! modeled; the remaining header bytes are reserved and written as zero.
mod tc;
mod tm;

pub use tc::*;
pub use tm::*;

/// Service type identifier
pub type Service = u8;
/// Service subtype identifier
pub type Subservice = u8;
