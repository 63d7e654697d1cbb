//! Shared test fixtures

#![allow(dead_code)] // each test binary uses a different subset

use parking_lot::Mutex;
use seqhost::{AppName, AppVm, VmError};
use std::collections::HashMap;
use std::sync::Arc;

/// Execution-engine stand-in: keeps one integer of live state per app.
///
/// `Inc`/`Dec` mutate the counter; any function named by `fail_on` errors
/// without touching state, which is exactly the shape needed to observe the
/// persist-then-apply window.
#[derive(Default)]
pub struct CounterVm {
    state: Mutex<HashMap<AppName, i64>>,
    fail_on: Mutex<Option<String>>,
    calls: Mutex<u64>,
}

impl CounterVm {
    pub fn new() -> Arc<Self> {
        Arc::new(CounterVm::default())
    }

    /// Make every call to `func` fail from now on.
    pub fn fail_on(&self, func: &str) {
        *self.fail_on.lock() = Some(func.to_string());
    }

    /// Current live state for the app (0 if never touched).
    pub fn value(&self, app: &AppName) -> i64 {
        self.state.lock().get(app).copied().unwrap_or(0)
    }

    /// Total successful engine calls.
    pub fn calls(&self) -> u64 {
        *self.calls.lock()
    }
}

impl AppVm for CounterVm {
    fn call(&self, app: &AppName, func: &str, _args: &[String]) -> Result<String, VmError> {
        if self.fail_on.lock().as_deref() == Some(func) {
            return Err(VmError::new(format!("{} refused by engine", func)));
        }

        let mut state = self.state.lock();
        let slot = state.entry(app.clone()).or_insert(0);
        match func {
            "Inc" => *slot += 1,
            "Dec" => *slot -= 1,
            _ => {}
        }
        *self.calls.lock() += 1;
        Ok(slot.to_string())
    }
}

/// Build an event at the given sequence with no arguments.
pub fn event(app: &str, sequence: u64, func: &str) -> seqhost::Event {
    seqhost::Event {
        app: AppName::new(app),
        sequence,
        func: func.to_string(),
        args: Vec::new(),
    }
}

/// Build a range request.
pub fn request(app: &str, start: u64, end: u64) -> seqhost::EventRequest {
    seqhost::EventRequest {
        start,
        end,
        app: AppName::new(app),
    }
}
