//! Sequenced store for per-application event logs
//!
//! This crate owns the ordered log backing the event engine: one log per
//! application, keyed by a dense, 1-based sequence number.
//!
//! # Design
//!
//! - DashMap: sharded by application name, lock-free reads
//! - BTreeMap: ordered by sequence within each log, cheap range scans
//! - Per-app: different applications never contend with each other
//!
//! # Thread Safety
//!
//! - `next_sequence()` / `range()` / `len()`: lock-free reads of committed
//!   state; they may run concurrently with an append but never observe a
//!   partially-written record (insertion happens under the shard write guard).
//! - `append()`: atomic per application. Two concurrent appends for the same
//!   application serialize on the shard entry; the loser observes the
//!   winner's effect and fails as out-of-order.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod store;

pub use store::EventStore;
