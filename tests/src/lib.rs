//! Test support for the fipspost workspace
//!
//! Provides the table-driven mock capability provider the integration
//! tests drive the self-test core with, plus helpers for serializing
//! tests that touch the process-wide latch and selector state.

pub mod mock;

use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;

static MODULE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Serializes tests that touch the process-wide latch or injection
/// selector. Hold the guard for the whole test body.
pub fn module_lock() -> MutexGuard<'static, ()> {
    match MODULE_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Returns the module to its boot state: latch clear, no selector active
pub fn reset_module_state() {
    fipspost_selftest::functest::clear_selector();
    fipspost_selftest::reset_in_fips_err();
}
