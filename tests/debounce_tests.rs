use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use action_wiring::schedule::Debouncer;

fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}

#[test]
fn scheduled_job_runs_after_the_delay() {
    let debouncer = Debouncer::new(Duration::from_millis(20));
    let runs = counter();

    let runs_in_job = Arc::clone(&runs);
    let handle = debouncer.schedule(move || {
        runs_in_job.fetch_add(1, Ordering::SeqCst);
    });

    assert!(handle.join(), "The only scheduled job must run");
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn only_the_last_request_in_a_burst_runs() {
    let debouncer = Debouncer::new(Duration::from_millis(100));
    let runs = counter();
    let last_seen = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for i in 1..=4 {
        let runs = Arc::clone(&runs);
        let last_seen = Arc::clone(&last_seen);
        handles.push(debouncer.schedule(move || {
            runs.fetch_add(1, Ordering::SeqCst);
            last_seen.store(i, Ordering::SeqCst);
        }));
    }

    let outcomes: Vec<bool> = handles.into_iter().map(|h| h.join()).collect();

    assert_eq!(
        outcomes,
        vec![false, false, false, true],
        "Only the most recent request may fire"
    );
    assert_eq!(runs.load(Ordering::SeqCst), 1);
    assert_eq!(last_seen.load(Ordering::SeqCst), 4);
}

#[test]
fn cancelled_task_never_runs() {
    let debouncer = Debouncer::new(Duration::from_millis(20));
    let runs = counter();

    let runs_in_job = Arc::clone(&runs);
    let handle = debouncer.schedule(move || {
        runs_in_job.fetch_add(1, Ordering::SeqCst);
    });

    handle.cancel();
    assert!(handle.is_cancelled());
    assert!(!handle.join(), "A cancelled job must report not-run");
    assert_eq!(runs.load(Ordering::SeqCst), 0);
}

#[test]
fn cancelling_one_call_does_not_affect_a_later_one() {
    let debouncer = Debouncer::new(Duration::from_millis(20));
    let runs = counter();

    let first = debouncer.schedule(|| {});
    first.cancel();

    let runs_in_job = Arc::clone(&runs);
    let second = debouncer.schedule(move || {
        runs_in_job.fetch_add(1, Ordering::SeqCst);
    });

    assert!(!first.join());
    assert!(second.join(), "Per-call cancellation must not leak across calls");
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn separate_debouncers_do_not_interfere() {
    let a = Debouncer::new(Duration::from_millis(20));
    let b = Debouncer::new(Duration::from_millis(20));
    let runs = counter();

    let runs_a = Arc::clone(&runs);
    let runs_b = Arc::clone(&runs);
    let ha = a.schedule(move || {
        runs_a.fetch_add(1, Ordering::SeqCst);
    });
    let hb = b.schedule(move || {
        runs_b.fetch_add(1, Ordering::SeqCst);
    });

    assert!(ha.join());
    assert!(hb.join(), "Schedulers are caller-owned, not global");
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[test]
fn delay_accessor_reports_the_configured_quiet_period() {
    let debouncer = Debouncer::new(Duration::from_millis(250));
    assert_eq!(debouncer.delay(), Duration::from_millis(250));
}
