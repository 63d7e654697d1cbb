//! WAL entry types and file operations
//!
//! The write-ahead log is the durability checkpoint of the apply protocol:
//! an event's `Append` frame must be in the log (fsynced per mode) before the
//! execution engine runs the event's effect. On startup the log is replayed
//! to rebuild the in-memory store.
//!
//! # Durability Modes
//!
//! | Mode | WAL | fsync | Data Loss Window |
//! |------|-----|-------|------------------|
//! | Ephemeral | None | None | All (on drop) |
//! | Buffered | Append | On flush/close | Bounded |
//! | Strict | Append | Every append | Zero |

use crate::encoding::{decode_frame, encode_frame, FrameRead};
use crate::error::WalError;
use seqhost_core::AppName;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// WAL entry types
///
/// Each entry represents one state-changing operation that must be persisted
/// before it takes effect. Every entry carries its application name so replay
/// can rebuild the per-application logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalEntry {
    /// An accepted event append
    Append {
        /// Application whose log the event joins
        app: AppName,
        /// Position in that application's log (1-based, dense)
        sequence: u64,
        /// Function the event invokes
        func: String,
        /// Pre-encoded argument blob
        args: String,
        /// Milliseconds since epoch at acceptance time
        timestamp: i64,
    },
}

impl WalEntry {
    /// Application this entry belongs to
    pub fn app(&self) -> &AppName {
        match self {
            WalEntry::Append { app, .. } => app,
        }
    }

    /// Sequence number carried by this entry
    pub fn sequence(&self) -> u64 {
        match self {
            WalEntry::Append { sequence, .. } => *sequence,
        }
    }
}

/// When the WAL forces bytes to stable storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurabilityMode {
    /// No log at all; everything is lost on drop. For tests and caches.
    Ephemeral,
    /// Append without fsync; fsync on [`Wal::flush`] and on close.
    #[default]
    Buffered,
    /// fsync after every append. Zero loss window, highest latency.
    Strict,
}

impl DurabilityMode {
    /// Whether this mode writes a log file at all
    pub fn requires_wal(&self) -> bool {
        !matches!(self, DurabilityMode::Ephemeral)
    }
}

/// Append-only write-ahead log file
///
/// All mutation goes through `&mut self`; the engine serializes access via
/// its commit lock. Reads never go through `Wal` — replay happens once at
/// open, and the in-memory store serves all queries afterwards.
#[derive(Debug)]
pub struct Wal {
    writer: Option<BufWriter<File>>,
    path: Option<PathBuf>,
    mode: DurabilityMode,
}

impl Wal {
    /// Create a WAL that never touches disk
    pub fn ephemeral() -> Self {
        Wal {
            writer: None,
            path: None,
            mode: DurabilityMode::Ephemeral,
        }
    }

    /// Open (or create) the log at `path` and replay its entries
    ///
    /// Returns the opened log positioned for appending plus every intact
    /// entry, in write order. A torn tail left by an interrupted append is
    /// truncated away; corruption before the tail fails the open.
    pub fn open(path: impl AsRef<Path>, mode: DurabilityMode) -> Result<(Self, Vec<WalEntry>), WalError> {
        let path = path.as_ref().to_path_buf();

        let (entries, valid_len, file_len) = replay_file(&path)?;
        if valid_len < file_len {
            tracing::warn!(
                path = %path.display(),
                valid_len,
                file_len,
                "truncating torn tail left by interrupted append"
            );
            let file = OpenOptions::new().write(true).open(&path)?;
            file.set_len(valid_len)?;
            file.sync_data()?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok((
            Wal {
                writer: Some(BufWriter::new(file)),
                path: Some(path),
                mode,
            },
            entries,
        ))
    }

    /// The mode this log was opened with
    pub fn mode(&self) -> DurabilityMode {
        self.mode
    }

    /// Path of the backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append one entry
    ///
    /// In `Strict` mode the entry is fsynced before this returns; in
    /// `Buffered` mode it is staged for the next [`flush`](Self::flush).
    /// Once this returns in `Strict` mode the entry is permanent.
    pub fn append(&mut self, entry: &WalEntry) -> Result<(), WalError> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(()); // Ephemeral
        };

        let frame = encode_frame(entry)?;
        writer.write_all(&frame)?;

        if self.mode == DurabilityMode::Strict {
            writer.flush()?;
            writer.get_ref().sync_data()?;
        }
        Ok(())
    }

    /// Force all staged appends to stable storage
    pub fn flush(&mut self) -> Result<(), WalError> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
            writer.get_ref().sync_data()?;
        }
        Ok(())
    }
}

impl Drop for Wal {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::error!(error = %e, "failed to flush wal on drop");
        }
    }
}

/// Read every intact frame from the file at `path`
///
/// Returns `(entries, valid_len, file_len)`. A missing file is an empty log.
fn replay_file(path: &Path) -> Result<(Vec<WalEntry>, u64, u64), WalError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok((Vec::new(), 0, 0)),
        Err(e) => return Err(WalError::Io(e)),
    };
    let file_len = file.metadata()?.len();
    let mut reader = BufReader::new(file);

    let mut entries = Vec::new();
    let mut offset = 0u64;
    while offset < file_len {
        match decode_frame(&mut reader, offset)? {
            FrameRead::Entry { entry, next_offset } => {
                entries.push(entry);
                offset = next_offset;
            }
            FrameRead::Incomplete { valid_len } => {
                return Ok((entries, valid_len, file_len));
            }
        }
    }
    Ok((entries, offset, file_len))
}
