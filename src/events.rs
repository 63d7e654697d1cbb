//! Event submission and queries

use crate::Result;
use seqhost_core::{AppName, Event, EventRequest, StoredEvent};
use seqhost_engine::Database;
use seqhost_wire::encode_records;
use std::sync::Arc;

/// Handle for submitting and querying events
///
/// Obtained from [`Host::events`](crate::Host). Submission goes through the
/// full persist-then-apply protocol; queries read committed state without
/// taking the commit lock.
pub struct Events {
    inner: Arc<Database>,
}

impl Events {
    pub(crate) fn new(inner: Arc<Database>) -> Self {
        Events { inner }
    }

    /// Submit one event for application
    ///
    /// Verifies the claimed sequence, durably records the event, then runs
    /// it against the application's live state through the execution engine.
    /// On success the application's next sequence has advanced by exactly
    /// one.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfOrder`](crate::Error::OutOfOrder): the claimed
    ///   sequence is not the next one; the error carries the expected value
    ///   for retry.
    /// - [`Error::Storage`](crate::Error::Storage): the log could not record
    ///   the event; nothing took effect.
    /// - [`Error::ApplicationEffect`](crate::Error::ApplicationEffect): the
    ///   execution engine rejected the event *after* the durable append. The
    ///   log keeps the entry and the sequence stays advanced — callers that
    ///   need log and state to agree must reconcile out of band.
    pub fn submit(&self, event: Event) -> Result<()> {
        self.inner.apply(&event)
    }

    /// The sequence the named application's log would accept next
    ///
    /// Returns 1 for an application with no accepted events.
    pub fn next_sequence(&self, app: &AppName) -> u64 {
        self.inner.next_sequence(app)
    }

    /// Number of accepted events for the application
    pub fn len(&self, app: &AppName) -> u64 {
        self.inner.store().len(app)
    }

    /// True if the application has no accepted events
    pub fn is_empty(&self, app: &AppName) -> bool {
        self.inner.store().is_empty(app)
    }

    /// Query a window of one application's log
    ///
    /// The request window is first resolved: `end == 0` means "a full page
    /// from `start`", an explicit end wider than a page is respected, and an
    /// end before the start is an
    /// [`Error::InvalidRange`](crate::Error::InvalidRange). The resolved
    /// window is then clamped to the log's current size; a window entirely
    /// beyond the log yields an empty result, not an error.
    ///
    /// Records come back in ascending sequence order. Re-running the same
    /// query with no intervening events returns identical results.
    pub fn query(&self, request: &EventRequest) -> Result<Vec<StoredEvent>> {
        let (start, end) = request.resolve()?;
        Ok(self.inner.store().range(&request.app, start, end))
    }

    /// Query a window and render it as a JSON array
    ///
    /// Same semantics as [`query`](Self::query), encoded as
    /// `[{"sequence":1,"app_name":"counter","func":"Inc","args":""},...]`.
    pub fn query_json(&self, request: &EventRequest) -> Result<String> {
        let records = self.query(request)?;
        Ok(encode_records(&request.app, &records))
    }
}
