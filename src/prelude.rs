//! Convenience re-exports for embedding the host
//!
//! ```ignore
//! use seqhost::prelude::*;
//! ```

pub use crate::{
    AppName, AppVm, DurabilityMode, Error, Event, EventRequest, Events, Host, HostBuilder, Result,
    StoredEvent, VmError,
};
pub use std::sync::Arc;
