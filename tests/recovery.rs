//! Durability and recovery across host restarts

mod common;

use common::{event, request, CounterVm};
use seqhost::{AppName, DurabilityMode, Host};

#[test]
fn strict_host_recovers_its_log_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let counter = AppName::new("counter");

    {
        let host = Host::builder()
            .path(dir.path())
            .strict()
            .open(CounterVm::new())
            .unwrap();
        assert_eq!(host.durability_mode(), DurabilityMode::Strict);

        for seq in 1..=5 {
            host.events.submit(event("counter", seq, "Inc")).unwrap();
        }
        host.events.submit(event("gauge", 1, "Dec")).unwrap();
        // No close: strict mode fsyncs each accepted event.
    }

    let host = Host::builder()
        .path(dir.path())
        .strict()
        .open(CounterVm::new())
        .unwrap();

    assert_eq!(host.events.next_sequence(&counter), 6);
    assert_eq!(host.events.next_sequence(&AppName::new("gauge")), 2);

    let records = host.events.query(&request("counter", 1, 0)).unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[4].sequence, 5);
    assert_eq!(records[4].func, "Inc");
}

#[test]
fn buffered_host_recovers_after_close() {
    let dir = tempfile::tempdir().unwrap();

    {
        let host = Host::open(dir.path(), CounterVm::new()).unwrap();
        assert_eq!(host.durability_mode(), DurabilityMode::Buffered);
        host.events.submit(event("counter", 1, "Inc")).unwrap();
        host.events.submit(event("counter", 2, "Inc")).unwrap();
        host.close().unwrap();
    }

    let host = Host::open(dir.path(), CounterVm::new()).unwrap();
    assert_eq!(host.events.len(&AppName::new("counter")), 2);
}

#[test]
fn sequencing_continues_where_recovery_left_off() {
    let dir = tempfile::tempdir().unwrap();

    {
        let host = Host::open(dir.path(), CounterVm::new()).unwrap();
        host.events.submit(event("counter", 1, "Inc")).unwrap();
        host.events.submit(event("counter", 2, "Inc")).unwrap();
        host.close().unwrap();
    }

    let vm = CounterVm::new();
    let host = Host::open(dir.path(), vm.clone()).unwrap();

    // A replayed log only restores the store; the engine's live state is its
    // own concern. New events keep sequencing from the recovered position.
    host.events.submit(event("counter", 3, "Inc")).unwrap();
    assert_eq!(host.events.len(&AppName::new("counter")), 3);
    assert_eq!(vm.calls(), 1);

    let err = host.events.submit(event("counter", 2, "Inc")).unwrap_err();
    assert_eq!(err.expected_sequence(), Some(4));
}

#[test]
fn recovered_records_keep_their_payloads() {
    let dir = tempfile::tempdir().unwrap();

    {
        let host = Host::open(dir.path(), CounterVm::new()).unwrap();
        let mut ev = event("chat", 1, "Post");
        ev.args = vec!["hello".to_string(), "world".to_string()];
        host.events.submit(ev).unwrap();
        host.close().unwrap();
    }

    let host = Host::open(dir.path(), CounterVm::new()).unwrap();
    let records = host.events.query(&request("chat", 1, 1)).unwrap();
    assert_eq!(records[0].func, "Post");
    assert_eq!(records[0].args, "hello,world");
}

#[test]
fn ephemeral_host_leaves_no_trace() {
    let vm = CounterVm::new();
    let host = Host::ephemeral(vm).unwrap();
    assert!(host.is_ephemeral());
    assert!(host.path().is_none());

    host.events.submit(event("counter", 1, "Inc")).unwrap();
    host.flush().unwrap();
}
