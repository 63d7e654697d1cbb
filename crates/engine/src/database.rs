//! Host bootstrap and lifecycle
//!
//! [`Database`] owns the single top-level store shared by every application
//! on the host, the write-ahead log behind it, and the handle to the
//! execution engine. It is provisioned exactly once per host lifetime;
//! opening the same directory twice yields two independent hosts that do not
//! coordinate, so single invocation at startup is the caller's
//! responsibility.

use crate::vm::AppVm;
use parking_lot::Mutex;
use seqhost_core::{AppName, HostError, Result};
use seqhost_durability::{DurabilityMode, Wal, WalEntry};
use seqhost_store::EventStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const WAL_FILE: &str = "events.wal";

/// The event engine of one application host
///
/// Create one with [`Database::open`] (disk-backed, recovered from the WAL)
/// or [`Database::ephemeral`] (no disk, for tests and caches).
pub struct Database {
    pub(crate) store: Arc<EventStore>,
    pub(crate) wal: Mutex<Wal>,
    pub(crate) vm: Arc<dyn AppVm>,
    /// Serializes the whole apply protocol, host-wide. Events for two
    /// different applications do not apply concurrently either; see the
    /// crate docs for the granularity trade-off.
    pub(crate) commit_lock: Mutex<()>,
    dir: Option<PathBuf>,
    mode: DurabilityMode,
}

impl Database {
    /// Open a disk-backed host at `dir` with the default (buffered) mode
    ///
    /// Replays the WAL and rebuilds the in-memory store before returning.
    /// Any failure here is fatal to host startup. Not idempotent: callers
    /// must open a given directory once per host lifetime.
    pub fn open(dir: impl AsRef<Path>, vm: Arc<dyn AppVm>) -> Result<Self> {
        Self::builder().path(dir).open(vm)
    }

    /// Create a host with no disk at all
    ///
    /// No WAL, no recovery; everything is lost on drop.
    pub fn ephemeral(vm: Arc<dyn AppVm>) -> Result<Self> {
        Ok(Database {
            store: Arc::new(EventStore::new()),
            wal: Mutex::new(Wal::ephemeral()),
            vm,
            commit_lock: Mutex::new(()),
            dir: None,
            mode: DurabilityMode::Ephemeral,
        })
    }

    /// Configure a host before opening it
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::default()
    }

    /// The shared sequenced store
    ///
    /// Reads (`next_sequence`, `range`, `len`) go straight to the store and
    /// are lock-free with respect to the commit lock.
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// The sequence the named application's log would accept next
    pub fn next_sequence(&self, app: &AppName) -> u64 {
        self.store.next_sequence(app)
    }

    /// Force staged WAL appends to stable storage
    pub fn flush(&self) -> Result<()> {
        self.wal.lock().flush().map_err(storage_fault)
    }

    /// Flush and release the host
    ///
    /// The database must not be used afterwards.
    pub fn close(&self) -> Result<()> {
        self.flush()
    }

    /// Directory backing this host, if any
    pub fn data_dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// The durability mode this host runs with
    pub fn durability_mode(&self) -> DurabilityMode {
        self.mode
    }

    /// True if this host was created with [`Database::ephemeral`]
    pub fn is_ephemeral(&self) -> bool {
        self.dir.is_none()
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("dir", &self.dir)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// Builder for host configuration
///
/// # Example
///
/// ```ignore
/// let db = Database::builder()
///     .path("./host-data")
///     .strict()
///     .open(vm)?;
/// ```
#[derive(Debug, Default)]
pub struct DatabaseBuilder {
    path: Option<PathBuf>,
    mode: DurabilityMode,
}

impl DatabaseBuilder {
    /// Set the directory for the WAL
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Buffered mode (default): append without fsync, fsync on flush/close
    pub fn buffered(mut self) -> Self {
        self.mode = DurabilityMode::Buffered;
        self
    }

    /// Strict mode: fsync every accepted event before its effect runs
    pub fn strict(mut self) -> Self {
        self.mode = DurabilityMode::Strict;
        self
    }

    /// Open the host, replaying any existing WAL
    pub fn open(self, vm: Arc<dyn AppVm>) -> Result<Database> {
        let Some(dir) = self.path else {
            return Err(HostError::Storage {
                message: "no data directory configured; use Database::ephemeral for a disk-free host"
                    .to_string(),
            });
        };

        std::fs::create_dir_all(&dir).map_err(|e| HostError::Storage {
            message: format!("create {}: {}", dir.display(), e),
        })?;

        let (wal, entries) = Wal::open(dir.join(WAL_FILE), self.mode).map_err(storage_fault)?;

        let store = Arc::new(EventStore::new());
        let replayed = entries.len();
        for entry in entries {
            let WalEntry::Append {
                app,
                sequence,
                func,
                args,
                ..
            } = entry;
            // Replay must rebuild a dense log; a gap means the file was
            // tampered with or mis-assembled, which recovery cannot repair.
            store
                .append(&app, sequence, &func, args)
                .map_err(|e| HostError::Storage {
                    message: format!("wal replay: {}", e),
                })?;
        }

        if replayed > 0 {
            tracing::info!(
                dir = %dir.display(),
                events = replayed,
                apps = store.app_names().len(),
                "recovered event log"
            );
        }

        Ok(Database {
            store,
            wal: Mutex::new(wal),
            vm,
            commit_lock: Mutex::new(()),
            dir: Some(dir),
            mode: self.mode,
        })
    }
}

pub(crate) fn storage_fault(err: seqhost_durability::WalError) -> HostError {
    HostError::Storage {
        message: err.to_string(),
    }
}
