//! Wire error representation
//!
//! All errors encode to JSON as:
//!
//! ```json
//! {
//!   "code": "OutOfOrder",
//!   "message": "out of order for app 'counter': expected sequence 2 but got 5",
//!   "details": {"app": "counter", "expected": 2, "got": 5}
//! }
//! ```
//!
//! The codes come from [`HostError::error_code`] and are frozen.

use crate::json::encode_string;
use seqhost_core::HostError;
use serde_json::{json, Value};

/// Wire form of a [`HostError`]
#[derive(Debug, Clone, PartialEq)]
pub struct WireError {
    /// Canonical error code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Structured details mirroring the variant's fields
    pub details: Value,
}

impl WireError {
    /// Render as a compact JSON object
    pub fn to_json(&self) -> String {
        format!(
            "{{\"code\":{},\"message\":{},\"details\":{}}}",
            encode_string(&self.code),
            encode_string(&self.message),
            self.details,
        )
    }
}

/// Convert an engine error to its wire form
///
/// The details object carries the structured fields of the variant, so a
/// client can, for example, read the expected next sequence out of an
/// out-of-order rejection without parsing the message.
pub fn wire_error(err: &HostError) -> WireError {
    let details = match err {
        HostError::OutOfOrder { app, expected, got } => json!({
            "app": app.as_str(),
            "expected": expected,
            "got": got,
        }),
        HostError::InvalidRange { start, end } => json!({
            "start": start,
            "end": end,
        }),
        HostError::ApplicationEffect { app, func, message } => json!({
            "app": app.as_str(),
            "func": func,
            "message": message,
        }),
        HostError::Storage { message } => json!({ "message": message }),
        HostError::Internal { message } => json!({ "message": message }),
    };

    WireError {
        code: err.error_code().to_string(),
        message: err.to_string(),
        details,
    }
}
