//! # seqhost
//!
//! Embedded ordered-event application engine for a small application host.
//!
//! seqhost takes a stream of named events destined for specific application
//! instances and guarantees three things: every accepted event gets a
//! strictly increasing, gapless per-application sequence number; every event
//! is durably persisted before it takes effect; and every event is applied
//! to the application's live state exactly once, in sequence order, through
//! the host's execution engine.
//!
//! ## Quick Start
//!
//! ```ignore
//! use seqhost::prelude::*;
//!
//! // The execution engine is yours; seqhost only needs `call`.
//! let vm: Arc<dyn AppVm> = Arc::new(MyVm::new());
//!
//! // Open a host (replays the event log from disk)
//! let host = Host::open("./host-data", vm)?;
//!
//! // Submit an event at the next sequence
//! host.events.submit(Event {
//!     app: AppName::new("counter"),
//!     sequence: host.events.next_sequence(&AppName::new("counter")),
//!     func: "Inc".into(),
//!     args: vec![],
//! })?;
//!
//! // Query a window of the log
//! let records = host.events.query(&EventRequest {
//!     start: 1,
//!     end: 0,
//!     app: AppName::new("counter"),
//! })?;
//!
//! // Graceful shutdown
//! host.close()?;
//! ```
//!
//! ## Guarantees
//!
//! - **Ordering**: an event whose claimed sequence is not exactly the next
//!   one is rejected with a structured error carrying the expected value.
//! - **Durability before effect**: the write-ahead log records an event
//!   before the execution engine runs it; a host restart replays the log.
//! - **Serialized applies**: one host-wide commit lock orders all applies;
//!   log reads are lock-free against committed state.
//!
//! One inherited caveat: if the execution engine fails *after* the durable
//! append, the log entry is kept — see [`Events::submit`].

#![warn(missing_docs)]

mod events;
mod host;

pub mod prelude;

// Re-export main entry points
pub use events::Events;
pub use host::{Host, HostBuilder};

// Re-export the shared vocabulary
pub use seqhost_core::{
    AppName, Event, EventRequest, HostError as Error, Result, StoredEvent, MAX_EVENTS_REQUESTABLE,
};
pub use seqhost_engine::{AppVm, DurabilityMode, VmError};
pub use seqhost_wire::{encode_args, encode_records, wire_error, WireError};
