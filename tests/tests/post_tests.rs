//! End-to-end POST orchestrator behavior against the mock provider

use fipspost_selftest::{in_fips_err, run_post, FipsStatusNode, IntegrityPolicy, IntegrityStatus};
use fipspost_tests::mock::{MockIntegrity, MockProvider};
use fipspost_tests::{module_lock, reset_module_state};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn clean_start_comes_up_approved() {
    let _guard = module_lock();
    init();
    reset_module_state();

    let provider = MockProvider::new();
    let integrity = MockIntegrity::passing();
    let node = FipsStatusNode::register();

    let outcome = run_post(&provider, &integrity, IntegrityPolicy::Enforce);

    assert!(outcome.kats_passed);
    assert_eq!(outcome.integrity, IntegrityStatus::Passed);
    assert!(outcome.approved);
    assert!(!in_fips_err());
    assert_eq!(node.read(), 0);
    assert_eq!(integrity.calls(), 1);

    reset_module_state();
}

#[test]
fn broken_hash_backend_fails_closed_and_skips_integrity() {
    let _guard = module_lock();
    init();
    reset_module_state();

    let provider = MockProvider::with_broken_driver("sha256-generic");
    let integrity = MockIntegrity::passing();
    let node = FipsStatusNode::register();

    let outcome = run_post(&provider, &integrity, IntegrityPolicy::Enforce);

    assert!(!outcome.kats_passed);
    // Fail-fast ordering: the integrity checker never ran
    assert_eq!(outcome.integrity, IntegrityStatus::Skipped);
    assert_eq!(integrity.calls(), 0);
    assert!(!outcome.approved);
    assert!(in_fips_err());
    assert_eq!(node.read(), 1);

    reset_module_state();
}

#[test]
fn integrity_failure_trips_the_latch_under_enforce() {
    let _guard = module_lock();
    init();
    reset_module_state();

    let provider = MockProvider::new();
    let integrity = MockIntegrity::failing();

    let outcome = run_post(&provider, &integrity, IntegrityPolicy::Enforce);

    assert!(outcome.kats_passed);
    assert_eq!(outcome.integrity, IntegrityStatus::Failed);
    assert!(!outcome.approved);
    assert!(in_fips_err());

    reset_module_state();
}

#[test]
fn identical_integrity_failure_is_ignored_under_bypass() {
    let _guard = module_lock();
    init();
    reset_module_state();

    let provider = MockProvider::new();
    let integrity = MockIntegrity::failing();

    let outcome = run_post(&provider, &integrity, IntegrityPolicy::Bypass);

    assert!(outcome.kats_passed);
    assert_eq!(outcome.integrity, IntegrityStatus::Bypassed);
    // The checker is never consulted, so its failing verdict cannot trip
    // the latch
    assert_eq!(integrity.calls(), 0);
    assert!(outcome.approved);
    assert!(!in_fips_err());

    reset_module_state();
}

#[test]
fn post_reports_error_state_without_clearing_it() {
    let _guard = module_lock();
    init();
    reset_module_state();

    fipspost_selftest::set_in_fips_err();

    let provider = MockProvider::new();
    let integrity = MockIntegrity::passing();
    let outcome = run_post(&provider, &integrity, IntegrityPolicy::Enforce);

    // Allocation is refused while the latch is set, so every KAT fails
    // and the run cannot come up approved.
    assert!(!outcome.kats_passed);
    assert!(!outcome.approved);
    assert!(in_fips_err());

    reset_module_state();
}
