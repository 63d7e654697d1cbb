//! Main host entry point
//!
//! This module provides the [`Host`] struct, the primary entry point for
//! embedding the event engine.

use crate::events::Events;
use crate::Result;
use seqhost_engine::{AppVm, Database, DurabilityMode};
use std::path::Path;
use std::sync::Arc;

/// An application host's event engine
///
/// Create one with [`Host::open`] or [`Host::builder`]. Provisioning is a
/// one-time act per host lifetime: opening the same directory twice yields
/// two independent hosts, so do it once at startup.
///
/// # Example
///
/// ```ignore
/// use seqhost::prelude::*;
///
/// let host = Host::open("./host-data", vm)?;
/// host.events.submit(event)?;
/// host.close()?;
/// ```
pub struct Host {
    inner: Arc<Database>,

    /// Event submission and queries
    pub events: Events,
}

impl Host {
    /// Open a disk-backed host with default (buffered) durability
    ///
    /// Replays the event log and rebuilds in-memory state before returning.
    /// Failure is fatal to host startup.
    pub fn open(path: impl AsRef<Path>, vm: Arc<dyn AppVm>) -> Result<Self> {
        Self::builder().path(path).open(vm)
    }

    /// Create a host with no disk I/O at all
    ///
    /// No log files, no recovery; all events are lost on drop. For tests
    /// and throwaway hosts.
    pub fn ephemeral(vm: Arc<dyn AppVm>) -> Result<Self> {
        Ok(Self::from_engine(Arc::new(Database::ephemeral(vm)?)))
    }

    /// Create a builder for host configuration
    pub fn builder() -> HostBuilder {
        HostBuilder::new()
    }

    /// Force pending log writes to stable storage
    ///
    /// In buffered mode, accepted events are staged for performance; call
    /// `flush()` to pin them down.
    pub fn flush(&self) -> Result<()> {
        self.inner.flush()
    }

    /// Gracefully close the host
    ///
    /// Flushes pending log writes. The host should not be used afterwards.
    pub fn close(&self) -> Result<()> {
        self.inner.close()
    }

    /// The directory backing this host, if it has one
    pub fn path(&self) -> Option<&Path> {
        self.inner.data_dir()
    }

    /// The durability mode this host runs with
    pub fn durability_mode(&self) -> DurabilityMode {
        self.inner.durability_mode()
    }

    /// True if this host never touches disk
    pub fn is_ephemeral(&self) -> bool {
        self.inner.is_ephemeral()
    }

    fn from_engine(db: Arc<Database>) -> Self {
        Host {
            events: Events::new(db.clone()),
            inner: db,
        }
    }
}

/// Builder for host configuration
///
/// # Example
///
/// ```ignore
/// // Production: disk-backed, fsync on every accepted event
/// let host = Host::builder()
///     .path("./host-data")
///     .strict()
///     .open(vm)?;
/// ```
#[derive(Debug, Default)]
pub struct HostBuilder {
    inner: seqhost_engine::DatabaseBuilder,
}

impl HostBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host data directory
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.inner = self.inner.path(path.as_ref());
        self
    }

    /// Buffered mode (default): stage log writes, fsync on flush/close
    pub fn buffered(mut self) -> Self {
        self.inner = self.inner.buffered();
        self
    }

    /// Strict mode: fsync every accepted event before its effect runs
    ///
    /// Zero loss window; use for hosts whose event logs must survive any
    /// crash.
    pub fn strict(mut self) -> Self {
        self.inner = self.inner.strict();
        self
    }

    /// Open the host
    pub fn open(self, vm: Arc<dyn AppVm>) -> Result<Host> {
        Ok(Host::from_engine(Arc::new(self.inner.open(vm)?)))
    }
}
