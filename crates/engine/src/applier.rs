//! The apply protocol
//!
//! Applying an event is the only operation that mutates both the event log
//! and live application state, and this module defines what it means
//! end-to-end. Durability of intent precedes effect: the WAL append is the
//! point after which the event is permanently part of the log, even if the
//! execution-engine call that follows fails.

use crate::database::{storage_fault, Database};
use chrono::Utc;
use seqhost_core::{Event, HostError, Result};
use seqhost_durability::WalEntry;
use seqhost_wire::encode_args;

impl Database {
    /// Apply one event: verify order, persist, then run its effect
    ///
    /// The full protocol runs under the host-wide commit lock and blocks the
    /// caller until it completes; there is no mid-operation cancellation.
    ///
    /// 1. Validate the claimed sequence against the store. A mismatch fails
    ///    with [`HostError::OutOfOrder`] (carrying the expected sequence)
    ///    before anything is written.
    /// 2. Append to the WAL. This is the durability checkpoint; a failure
    ///    here is a [`HostError::Storage`] fault and nothing takes effect.
    /// 3. Insert the record into the in-memory store, making it visible to
    ///    `range`/`next_sequence` readers.
    /// 4. Call the execution engine to run the event against the
    ///    application's live state.
    /// 5. Release the lock. In `Strict` mode the WAL entry was fsynced in
    ///    step 2; in `Buffered` mode it rides the next flush.
    ///
    /// # Inconsistency window
    ///
    /// If step 4 fails, the call returns [`HostError::ApplicationEffect`]
    /// but the log entry from steps 2–3 is **kept**: the log says the event
    /// happened while the application state says it did not, and the next
    /// accepted sequence has still advanced. No compensating rollback is
    /// attempted; see DESIGN.md for the recorded decision.
    ///
    /// A successful apply advances the application's sequence by exactly one
    /// and calls the execution engine exactly once.
    pub fn apply(&self, event: &Event) -> Result<()> {
        let _commit_guard = self.commit_lock.lock();

        // Step 1: validate ordering against committed state.
        let expected = self.store.next_sequence(&event.app);
        if event.sequence != expected {
            return Err(HostError::OutOfOrder {
                app: event.app.clone(),
                expected,
                got: event.sequence,
            });
        }

        // Step 2: durability checkpoint.
        let args = encode_args(&event.args);
        let entry = WalEntry::Append {
            app: event.app.clone(),
            sequence: event.sequence,
            func: event.func.clone(),
            args: args.clone(),
            timestamp: Utc::now().timestamp_millis(),
        };
        self.wal.lock().append(&entry).map_err(storage_fault)?;

        // Step 3: visibility. Under the commit lock the sequence cannot have
        // moved since step 1, so a mismatch here is an engine bug.
        self.store
            .append(&event.app, event.sequence, &event.func, args)
            .map_err(|e| match e {
                HostError::OutOfOrder { app, expected, got } => HostError::Internal {
                    message: format!(
                        "store moved under the commit lock: app '{}' expected {} got {}",
                        app, expected, got
                    ),
                },
                other => other,
            })?;

        // Step 4: effect.
        if let Err(e) = self.vm.call(&event.app, &event.func, &event.args) {
            tracing::error!(
                app = %event.app,
                sequence = event.sequence,
                func = %event.func,
                error = %e,
                "execution engine call failed after durable append; log entry kept"
            );
            return Err(HostError::ApplicationEffect {
                app: event.app.clone(),
                func: event.func.clone(),
                message: e.to_string(),
            });
        }

        tracing::debug!(app = %event.app, sequence = event.sequence, "event applied");
        Ok(())
    }
}
