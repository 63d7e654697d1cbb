//! Execution-engine boundary
//!
//! The engine that actually interprets application code is an external
//! collaborator. This crate consumes it through a single synchronous call
//! operation and never looks inside: gas, state representation, and the
//! hosted language are all someone else's concern.

use seqhost_core::AppName;
use thiserror::Error;

/// Failure reported by the execution engine for one call
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct VmError {
    /// What the engine reported
    pub message: String,
}

impl VmError {
    /// Create an error from the engine's report
    pub fn new(message: impl Into<String>) -> Self {
        VmError {
            message: message.into(),
        }
    }
}

/// Synchronous call interface to the execution engine
///
/// Implementations run `func` in the named application with the given
/// arguments, mutating that application's live state, and return the
/// engine's textual result. The applier only ever inspects success or
/// failure.
pub trait AppVm: Send + Sync {
    /// Invoke one function of one application
    fn call(&self, app: &AppName, func: &str, args: &[String]) -> Result<String, VmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vm_error_message_passthrough() {
        let err = VmError::new("gas exhausted");
        assert_eq!(err.to_string(), "gas exhausted");
    }

    #[test]
    fn test_trait_is_object_safe() {
        fn _assert_object_safe(_: &dyn AppVm) {}
    }
}
