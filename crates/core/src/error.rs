//! Error taxonomy for the event engine
//!
//! Every error surfaced to a caller of the engine is a [`HostError`]. The
//! variants are structured, not stringly-typed: an out-of-order rejection
//! carries the expected next sequence so a caller can retry with the right
//! one instead of parsing a message.
//!
//! ## Error Codes (Canonical)
//!
//! These codes are frozen and must not change:
//!
//! | Code | Description |
//! |------|-------------|
//! | OutOfOrder | Claimed sequence is not the expected next sequence |
//! | InvalidRange | Query end precedes start with no unbounded sentinel |
//! | ApplicationEffect | Execution-engine call failed after the durable append |
//! | Storage | Underlying persistence failure during append or bootstrap |
//! | Internal | Bug or invariant violation |

use crate::types::AppName;
use thiserror::Error;

/// Convenience result alias used across the workspace
pub type Result<T> = std::result::Result<T, HostError>;

/// Error type surfaced by the event engine
///
/// ## Recoverability
///
/// - [`HostError::OutOfOrder`]: recoverable — retry with
///   [`HostError::expected_sequence`].
/// - [`HostError::InvalidRange`]: recoverable — fix the request.
/// - [`HostError::ApplicationEffect`]: the event is durably logged but its
///   effect did not run; see the applier documentation for the consistency
///   implications.
/// - [`HostError::Storage`]: fatal to the in-flight operation. During
///   bootstrap, fatal to host startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    /// Claimed sequence does not equal the expected next sequence
    #[error("out of order for app '{app}': expected sequence {expected} but got {got}")]
    OutOfOrder {
        /// Application that rejected the event
        app: AppName,
        /// The sequence the log would accept next
        expected: u64,
        /// The sequence the caller claimed
        got: u64,
    },

    /// A query's ending sequence precedes its starting sequence
    ///
    /// `end == 0` is the "unbounded" sentinel and never produces this error.
    #[error("ending sequence {end} is less than starting sequence {start}")]
    InvalidRange {
        /// Requested starting sequence (inclusive)
        start: u64,
        /// Requested ending sequence (inclusive)
        end: u64,
    },

    /// The execution-engine call failed after the event was durably logged
    ///
    /// The log entry is **not** rolled back; the log says the event happened
    /// while the application state says it did not.
    #[error("error applying event: app '{app}' func '{func}': {message}")]
    ApplicationEffect {
        /// Target application
        app: AppName,
        /// Function whose invocation failed
        func: String,
        /// Failure reported by the execution engine
        message: String,
    },

    /// Underlying persistence failure
    #[error("storage fault: {message}")]
    Storage {
        /// Description of the fault
        message: String,
    },

    /// Bug or invariant violation inside the engine
    #[error("internal error: {message}")]
    Internal {
        /// Description of the violated invariant
        message: String,
    },
}

impl HostError {
    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            HostError::OutOfOrder { .. } => "OutOfOrder",
            HostError::InvalidRange { .. } => "InvalidRange",
            HostError::ApplicationEffect { .. } => "ApplicationEffect",
            HostError::Storage { .. } => "Storage",
            HostError::Internal { .. } => "Internal",
        }
    }

    /// The sequence the log would accept next, for out-of-order rejections
    ///
    /// Callers use this to retry a rejected submission with the correct
    /// sequence number.
    pub fn expected_sequence(&self) -> Option<u64> {
        match self {
            HostError::OutOfOrder { expected, .. } => Some(*expected),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_order_is_structured() {
        let err = HostError::OutOfOrder {
            app: AppName::new("counter"),
            expected: 2,
            got: 5,
        };
        assert_eq!(err.error_code(), "OutOfOrder");
        assert_eq!(err.expected_sequence(), Some(2));
    }

    #[test]
    fn test_out_of_order_message_names_both_sequences() {
        let err = HostError::OutOfOrder {
            app: AppName::new("counter"),
            expected: 2,
            got: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("expected sequence 2"));
        assert!(msg.contains("got 5"));
    }

    #[test]
    fn test_invalid_range_message() {
        let err = HostError::InvalidRange { start: 10, end: 5 };
        assert_eq!(err.error_code(), "InvalidRange");
        assert!(err.to_string().contains("less than starting sequence"));
    }

    #[test]
    fn test_expected_sequence_absent_on_other_variants() {
        let err = HostError::Storage {
            message: "disk full".into(),
        };
        assert_eq!(err.expected_sequence(), None);
    }

    #[test]
    fn test_error_codes_are_frozen() {
        let errs = [
            (
                HostError::OutOfOrder {
                    app: AppName::new("a"),
                    expected: 1,
                    got: 2,
                },
                "OutOfOrder",
            ),
            (HostError::InvalidRange { start: 2, end: 1 }, "InvalidRange"),
            (
                HostError::ApplicationEffect {
                    app: AppName::new("a"),
                    func: "F".into(),
                    message: "boom".into(),
                },
                "ApplicationEffect",
            ),
            (
                HostError::Storage {
                    message: "io".into(),
                },
                "Storage",
            ),
            (
                HostError::Internal {
                    message: "bug".into(),
                },
                "Internal",
            ),
        ];
        for (err, code) in errs {
            assert_eq!(err.error_code(), code);
        }
    }
}
