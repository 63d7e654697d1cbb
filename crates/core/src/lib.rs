//! Core types for the seqhost event engine
//!
//! This crate defines the vocabulary shared by every other crate in the
//! workspace:
//! - [`AppName`]: identifier of a hosted application
//! - [`Event`]: a submitted event (function call plus claimed sequence)
//! - [`EventRequest`]: a bounded range query over one application's log
//! - [`StoredEvent`]: the persisted, immutable form of an event
//! - [`HostError`]: the error taxonomy surfaced to callers

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod event;
mod types;

pub use error::{HostError, Result};
pub use event::{Event, EventRequest, StoredEvent, MAX_EVENTS_REQUESTABLE};
pub use types::AppName;
