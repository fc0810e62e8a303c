//! Integration test: panic hook handling during a run.
//!
//! Validates that a panicking case does not reach the installed panic hook
//! while the runner is active, and that the hook is restored afterwards.
//! Kept in its own test binary because the panic hook is process-global.
//!
//! Run: cargo test -p libcheck-harness --test panic_hook_test

use std::panic::catch_unwind;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use libcheck_harness::assert::CaseResult;
use libcheck_harness::{CaseStatus, Registry, RunConfig, Runner, TestGroup};

fn panics(_: &mut ()) -> CaseResult {
    panic!("case blew up")
}

fn passes(_: &mut ()) -> CaseResult {
    Ok(())
}

#[test]
fn case_panics_bypass_the_hook_and_hook_is_restored() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    std::panic::set_hook(Box::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    let mut registry = Registry::new();
    registry.register(
        TestGroup::new("panicky", || ())
            .case("panics", panics)
            .case("passes", passes),
    );
    let summary = Runner::new(RunConfig::default())
        .run(&registry)
        .expect("run should succeed");

    assert_eq!(summary.errors, 1);
    assert_eq!(summary.outcomes[0].status, CaseStatus::Error);
    assert_eq!(
        summary.outcomes[0].message.as_deref(),
        Some("panicked: case blew up")
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0, "hook ran during the run");

    let _ = catch_unwind(|| panic!("after the run"));
    assert_eq!(calls.load(Ordering::SeqCst), 1, "hook was not restored");

    let _ = std::panic::take_hook();
}
