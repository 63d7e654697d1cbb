//! Event applier and host bootstrap
//!
//! This crate coordinates the two resources an event touches:
//! the sequenced store (with its write-ahead log) and the external
//! execution engine that mutates live application state.
//!
//! The apply protocol guarantees that an event is never applied without
//! first being durably recorded, and never applied out of order:
//!
//! ```text
//! 1. Acquire the host-wide commit lock
//! 2. Validate the claimed sequence against the store
//! 3. Append to the WAL (DURABILITY POINT)
//! 4. Insert into the in-memory store (visibility)
//! 5. Call the execution engine (effect)
//! 6. Release the lock
//! ```
//!
//! If step 5 fails the log entry from steps 3–4 is kept: there is no
//! rollback, and readers of the log may observe an event whose effect never
//! ran. [`Database::apply`] documents this window.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod applier;
mod database;
mod vm;

pub use database::{Database, DatabaseBuilder};
pub use seqhost_durability::DurabilityMode;
pub use vm::{AppVm, VmError};
