//! Application identifiers
//!
//! Applications are named, independently-addressed units of live state hosted
//! by the external execution engine. The event engine partitions everything it
//! owns (logs, sequences) by [`AppName`].

use serde::{Deserialize, Serialize};

/// Name of a hosted application
///
/// AppName is used throughout the system to scope event logs and sequence
/// counters. It appears in:
/// - Store shard keys (one log per application)
/// - WAL entries for replay
/// - Errors, so callers know which application rejected an event
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppName(String);

impl AppName {
    /// Create an application name
    ///
    /// # Examples
    ///
    /// ```
    /// use seqhost_core::AppName;
    ///
    /// let app = AppName::new("counter");
    /// assert_eq!(app.as_str(), "counter");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        AppName(name.into())
    }

    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AppName {
    fn from(name: &str) -> Self {
        AppName::new(name)
    }
}

impl From<String> for AppName {
    fn from(name: String) -> Self {
        AppName(name)
    }
}

impl std::fmt::Display for AppName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
