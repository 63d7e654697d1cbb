//! The persist-then-apply contract, observed from outside

mod common;

use common::{event, request, CounterVm};
use seqhost::{AppName, Host};

#[test]
fn engine_failure_after_durable_append_keeps_the_record() {
    // The documented inconsistency window: the store accepted and persisted
    // the event, the engine refused it, and nothing rolls back. The log says
    // the event happened; the live state says it did not.
    let vm = CounterVm::new();
    let host = Host::ephemeral(vm.clone()).unwrap();
    let counter = AppName::new("counter");

    host.events.submit(event("counter", 1, "Inc")).unwrap();
    vm.fail_on("Inc");

    let err = host.events.submit(event("counter", 2, "Inc")).unwrap_err();
    assert_eq!(err.error_code(), "ApplicationEffect");

    // Log: two records, sequence advanced past the failed effect.
    let records = host.events.query(&request("counter", 1, 0)).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].sequence, 2);
    assert_eq!(host.events.next_sequence(&counter), 3);

    // Live state: only the first event ever ran.
    assert_eq!(vm.value(&counter), 1);
}

#[test]
fn sequencing_continues_past_a_failed_effect() {
    let vm = CounterVm::new();
    let host = Host::ephemeral(vm.clone()).unwrap();
    let counter = AppName::new("counter");

    host.events.submit(event("counter", 1, "Inc")).unwrap();
    vm.fail_on("Poke");
    host.events.submit(event("counter", 2, "Poke")).unwrap_err();

    // The log consumed sequence 2, so the next accepted event is 3.
    host.events.submit(event("counter", 3, "Inc")).unwrap();

    assert_eq!(host.events.len(&counter), 3);
    assert_eq!(vm.value(&counter), 2);
}

#[test]
fn one_engine_call_per_accepted_event() {
    let vm = CounterVm::new();
    let host = Host::ephemeral(vm.clone()).unwrap();

    for seq in 1..=7 {
        host.events.submit(event("counter", seq, "Inc")).unwrap();
    }
    // Rejections never reach the engine.
    host.events.submit(event("counter", 1, "Inc")).unwrap_err();
    host.events.submit(event("counter", 99, "Inc")).unwrap_err();

    assert_eq!(vm.calls(), 7);
}

#[test]
fn rejected_submission_reports_the_expected_sequence_for_retry() {
    let vm = CounterVm::new();
    let host = Host::ephemeral(vm).unwrap();

    host.events.submit(event("counter", 1, "Inc")).unwrap();
    host.events.submit(event("counter", 2, "Inc")).unwrap();

    let err = host.events.submit(event("counter", 9, "Inc")).unwrap_err();
    let retry_at = err.expected_sequence().unwrap();

    host.events.submit(event("counter", retry_at, "Inc")).unwrap();
    assert_eq!(host.events.len(&AppName::new("counter")), 3);
}
