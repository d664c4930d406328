#![doc = include_str!("../README.md")]

mod codec;
mod error;
mod message;

pub mod aos;
pub mod convert;
pub mod crc;
pub mod format;
pub mod pus;
pub mod spacepacket;

pub use codec::FrameCodec;
pub use convert::{
    convert, decode, encode, inspect, Converter, DecodeObserver, EncodeParams, TracingObserver,
};
pub use error::{Error, Result};
pub use format::{FrameLayout, Protocol};
pub use message::{FrameInfo, HeaderFields, Message};
