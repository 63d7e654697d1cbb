//! The sequenced event store

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use seqhost_core::{AppName, HostError, Result, StoredEvent};
use std::collections::BTreeMap;

/// One application's log
///
/// Invariant: sequences are dense and 1-based, so the size of the map always
/// equals the highest sequence stored in it. Records are immutable once
/// inserted; the log is append-only with no deletions.
#[derive(Debug, Default)]
struct AppLog {
    records: BTreeMap<u64, StoredEvent>,
}

impl AppLog {
    fn next_sequence(&self) -> u64 {
        self.records.len() as u64 + 1
    }
}

/// Per-application sequenced event log
///
/// The store holds a single top-level mapping from application name to that
/// application's ordered log. The top-level mapping is created once at host
/// bootstrap; per-application logs are created lazily on the first accepted
/// event and never destroyed.
///
/// # Example
///
/// ```
/// use seqhost_core::AppName;
/// use seqhost_store::EventStore;
///
/// let store = EventStore::new();
/// let app = AppName::new("counter");
///
/// assert_eq!(store.next_sequence(&app), 1);
/// store.append(&app, 1, "Inc", "").unwrap();
/// assert_eq!(store.next_sequence(&app), 2);
/// ```
#[derive(Debug, Default)]
pub struct EventStore {
    apps: DashMap<AppName, AppLog>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        EventStore {
            apps: DashMap::new(),
        }
    }

    /// The sequence the given application's log would accept next
    ///
    /// Returns 1 if no log exists for the application yet, otherwise
    /// `len + 1`. Pure read, no side effects: asking never creates a log.
    pub fn next_sequence(&self, app: &AppName) -> u64 {
        self.apps.get(app).map_or(1, |log| log.next_sequence())
    }

    /// Append a record at `sequence`, verifying contiguity
    ///
    /// Fails with [`HostError::OutOfOrder`] if `sequence` is not exactly the
    /// value [`next_sequence`](Self::next_sequence) would return; the error
    /// carries the expected sequence. On success, the per-application log is
    /// created lazily if absent, the record is inserted, and `sequence` is
    /// returned.
    ///
    /// The check and the insert happen under the application's shard write
    /// guard, so concurrent appends for one application serialize and cannot
    /// both succeed with sequences that violate contiguity.
    pub fn append(
        &self,
        app: &AppName,
        sequence: u64,
        func: &str,
        args: impl Into<String>,
    ) -> Result<u64> {
        let record = StoredEvent {
            sequence,
            func: func.to_string(),
            args: args.into(),
        };

        match self.apps.entry(app.clone()) {
            Entry::Occupied(mut occupied) => {
                let log = occupied.get_mut();
                let expected = log.next_sequence();
                if sequence != expected {
                    return Err(HostError::OutOfOrder {
                        app: app.clone(),
                        expected,
                        got: sequence,
                    });
                }
                log.records.insert(sequence, record);
                debug_assert_eq!(log.records.len() as u64, sequence);
            }
            Entry::Vacant(vacant) => {
                // Sequences start from 1 to avoid confusion with zero values.
                if sequence != 1 {
                    return Err(HostError::OutOfOrder {
                        app: app.clone(),
                        expected: 1,
                        got: sequence,
                    });
                }
                let mut log = AppLog::default();
                log.records.insert(sequence, record);
                vacant.insert(log);
            }
        }

        Ok(sequence)
    }

    /// Records with sequence in `[start, min(end, len)]`, ascending
    ///
    /// Returns an empty vector if no log exists for the application, if
    /// `end == 0`, or if `start` exceeds the clamped end. Requesting a window
    /// entirely beyond the current log size is not an error — the events may
    /// simply not have arrived yet.
    ///
    /// Each call re-derives the result from current committed state; the
    /// returned records are clones, never aliases into the log.
    pub fn range(&self, app: &AppName, start: u64, end: u64) -> Vec<StoredEvent> {
        let Some(log) = self.apps.get(app) else {
            return Vec::new();
        };

        let end = end.min(log.records.len() as u64);
        if end == 0 || start > end {
            return Vec::new();
        }

        log.records
            .range(start..=end)
            .map(|(_, record)| record.clone())
            .collect()
    }

    /// Number of events stored for the application
    ///
    /// Equal to the highest accepted sequence (sequences are dense).
    pub fn len(&self, app: &AppName) -> u64 {
        self.apps.get(app).map_or(0, |log| log.records.len() as u64)
    }

    /// True if the application has no accepted events
    pub fn is_empty(&self, app: &AppName) -> bool {
        self.len(app) == 0
    }

    /// Names of all applications with at least one accepted event
    pub fn app_names(&self) -> Vec<AppName> {
        self.apps.iter().map(|entry| entry.key().clone()).collect()
    }
}
