//! Event and query types
//!
//! An [`Event`] is a request to invoke one named function of one application,
//! tagged with the sequence number it must occupy in that application's log.
//! An [`EventRequest`] is a read query over one application's log; its
//! [`resolve`](EventRequest::resolve) method is the request range resolver,
//! a pure function that bounds and validates the requested window without
//! consulting the store.

use crate::error::{HostError, Result};
use crate::types::AppName;
use serde::{Deserialize, Serialize};

/// Maximum number of events a single query window may span
///
/// Bounding the page size prevents an unbounded range query from forcing the
/// store to materialize arbitrarily large result sequences.
pub const MAX_EVENTS_REQUESTABLE: u64 = 100;

/// An event submitted for application to one app's live state
///
/// Sequence numbers are 1-based and, once accepted, form a contiguous run per
/// application with no gaps and no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Target application
    #[serde(rename = "app_name")]
    pub app: AppName,
    /// Claimed position in the application's log (1-based)
    pub sequence: u64,
    /// Function to invoke on the application
    pub func: String,
    /// Arguments passed to the function, already string-encoded
    pub args: Vec<String>,
}

/// A range query over one application's event log
///
/// `end == 0` means "unspecified"; the resolver widens it to a full page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRequest {
    /// Starting sequence, inclusive
    #[serde(rename = "start")]
    pub start: u64,
    /// Ending sequence, inclusive; 0 is the unbounded sentinel
    #[serde(rename = "end")]
    pub end: u64,
    /// Application whose log is queried
    #[serde(rename = "app_name")]
    pub app: AppName,
}

impl EventRequest {
    /// Resolve the request into a bounded, validated `[start, end]` window
    ///
    /// Fails with [`HostError::InvalidRange`] if `end < start` and `end != 0`.
    /// Otherwise the resolved end is
    /// `max(end, start + MAX_EVENTS_REQUESTABLE - 1)`: at least wide enough
    /// for a full page starting at `start`, never narrower than an explicit
    /// `end`.
    ///
    /// This is a pure function of the request and the page-size constant; it
    /// does not consult the store.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqhost_core::{AppName, EventRequest};
    ///
    /// let req = EventRequest { start: 10, end: 0, app: AppName::new("counter") };
    /// assert_eq!(req.resolve().unwrap(), (10, 109));
    /// ```
    pub fn resolve(&self) -> Result<(u64, u64)> {
        if self.end < self.start && self.end != 0 {
            return Err(HostError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }

        let mut end = self.end;
        let max_end = self.start.saturating_add(MAX_EVENTS_REQUESTABLE - 1);
        if max_end > end {
            end = max_end;
        }

        Ok((self.start, end))
    }
}

/// The persisted form of an event inside one application's log
///
/// Records are immutable once written and exclusively owned by the store;
/// reads hand out clones. The argument list has already been collapsed into a
/// single encoded blob safe for embedding in generated source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEvent {
    /// Position in the application's log (1-based)
    pub sequence: u64,
    /// Function the event invokes
    pub func: String,
    /// Pre-encoded argument blob
    pub args: String,
}
