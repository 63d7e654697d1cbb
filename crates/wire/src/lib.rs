//! JSON wire encoding for the event engine
//!
//! Query results and errors leave the engine as JSON text with a frozen
//! shape:
//! - records: `[{"sequence":1,"app_name":"counter","func":"Inc","args":""}]`
//! - errors: `{"code":"OutOfOrder","message":"...","details":{...}}`
//!
//! The `args` field of a record is the pre-encoded argument blob produced by
//! [`encode_args`]; it is embedded verbatim, never escaped a second time.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod args;
mod error;
mod json;

pub use args::encode_args;
pub use error::{wire_error, WireError};
pub use json::{encode_records, encode_string};
