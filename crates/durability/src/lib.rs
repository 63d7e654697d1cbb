//! Durability layer for the event engine
//!
//! This crate implements the write-ahead log that makes an accepted event
//! permanent before its effect runs:
//! - WalEntry types: one `Append` frame per accepted event
//! - Entry encoding/decoding with CRC32 checksums
//! - Durability modes: Ephemeral, Buffered (default), Strict
//! - Replay: rebuild the in-memory store from the log on startup

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoding;
pub mod wal;

mod error;

pub use encoding::{decode_frame, encode_frame, FrameRead};
pub use error::WalError;
pub use wal::{DurabilityMode, Wal, WalEntry};
