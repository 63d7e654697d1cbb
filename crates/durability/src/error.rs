//! WAL error type

use thiserror::Error;

/// Failures raised by the write-ahead log
#[derive(Debug, Error)]
pub enum WalError {
    /// Underlying file I/O failed
    #[error("wal io error: {0}")]
    Io(#[from] std::io::Error),

    /// An entry could not be serialized for the log
    #[error("wal encode error: {0}")]
    Encode(String),

    /// A logged frame could not be deserialized
    #[error("wal decode error: {0}")]
    Decode(String),

    /// A frame in the interior of the log failed its checksum
    ///
    /// Interior corruption means the log cannot be trusted; unlike a torn
    /// tail (which is truncated and tolerated), this is fatal to recovery.
    #[error("wal corrupt at offset {offset}: {reason}")]
    Corrupt {
        /// Byte offset of the bad frame
        offset: u64,
        /// What failed about it
        reason: String,
    },
}
