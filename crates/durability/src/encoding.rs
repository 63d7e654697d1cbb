//! Frame encoding for WAL entries
//!
//! Each entry is written as one self-delimiting frame:
//!
//! ```text
//! [payload_len: u32 LE][crc32(payload): u32 LE][payload: bincode]
//! ```
//!
//! The checksum covers the payload bytes only; the length prefix lets a
//! reader skip to the next frame without parsing the payload first.

use crate::error::WalError;
use crate::wal::WalEntry;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::Read;

/// Size of the fixed frame header (length + checksum)
pub const FRAME_HEADER_LEN: u64 = 8;

/// Upper bound on a single frame's payload
///
/// A length prefix above this is treated as corruption rather than an
/// allocation request.
pub const MAX_FRAME_LEN: u32 = 16 * 1024 * 1024;

/// Encode an entry into a framed byte vector
pub fn encode_frame(entry: &WalEntry) -> Result<Vec<u8>, WalError> {
    let payload = bincode::serialize(entry).map_err(|e| WalError::Encode(e.to_string()))?;
    let crc = crc32fast::hash(&payload);

    let mut frame = Vec::with_capacity(FRAME_HEADER_LEN as usize + payload.len());
    frame
        .write_u32::<LittleEndian>(payload.len() as u32)
        .map_err(WalError::Io)?;
    frame.write_u32::<LittleEndian>(crc).map_err(WalError::Io)?;
    frame.extend_from_slice(&payload);
    Ok(frame)
}

/// Outcome of reading one frame from the log
#[derive(Debug)]
pub enum FrameRead {
    /// A complete, checksum-valid entry; `next_offset` is where the
    /// following frame starts
    Entry {
        /// The decoded entry
        entry: WalEntry,
        /// Offset of the next frame
        next_offset: u64,
    },
    /// The bytes at `valid_len` do not form a complete frame
    ///
    /// The caller decides what this means: at the end of the file it is the
    /// torn tail of an interrupted append (truncate and tolerate); the
    /// replay loop never calls into a frame that starts past the file end,
    /// so a clean EOF is detected before decoding.
    Incomplete {
        /// Offset of the last complete frame boundary
        valid_len: u64,
    },
}

/// Decode the next frame starting at `offset`
///
/// A frame cut short by end-of-file is reported as [`FrameRead::Incomplete`],
/// not an error: an interrupted append leaves exactly this shape behind and
/// the log is intact up to the previous frame boundary. A complete frame
/// whose checksum does not match is corruption and fails with
/// [`WalError::Corrupt`].
pub fn decode_frame(reader: &mut impl Read, offset: u64) -> Result<FrameRead, WalError> {
    let len = match reader.read_u32::<LittleEndian>() {
        Ok(len) => len,
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            return Ok(FrameRead::Incomplete { valid_len: offset })
        }
        Err(e) => return Err(WalError::Io(e)),
    };
    if len > MAX_FRAME_LEN {
        return Err(WalError::Corrupt {
            offset,
            reason: format!("frame length {} exceeds maximum", len),
        });
    }
    let crc = match reader.read_u32::<LittleEndian>() {
        Ok(crc) => crc,
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            return Ok(FrameRead::Incomplete { valid_len: offset })
        }
        Err(e) => return Err(WalError::Io(e)),
    };

    let mut payload = vec![0u8; len as usize];
    if let Err(e) = reader.read_exact(&mut payload) {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            return Ok(FrameRead::Incomplete { valid_len: offset });
        }
        return Err(WalError::Io(e));
    }

    if crc32fast::hash(&payload) != crc {
        return Err(WalError::Corrupt {
            offset,
            reason: "checksum mismatch".to_string(),
        });
    }

    let entry = bincode::deserialize(&payload).map_err(|e| WalError::Decode(e.to_string()))?;
    Ok(FrameRead::Entry {
        entry,
        next_offset: offset + FRAME_HEADER_LEN + len as u64,
    })
}
