//! FIPS error latch
//!
//! A single process-wide flag, clear at start, set on the first detected
//! self-test or integrity failure. In production builds the transition is
//! one-way: no code path clears the flag short of a restart. The backing
//! atomic is private to this module; the functions below are the only
//! access path.

use core::sync::atomic::{AtomicBool, Ordering};

static IN_FIPS_ERR: AtomicBool = AtomicBool::new(false);

/// Returns whether the module is in the FIPS error state.
///
/// A plain atomic load: never blocks, never allocates, callable from any
/// context. Every crypto-capability allocation path checks this before
/// handing out an instance.
pub fn in_fips_err() -> bool {
    IN_FIPS_ERR.load(Ordering::SeqCst)
}

/// Puts the module into the FIPS error state. Idempotent.
pub fn set_in_fips_err() {
    IN_FIPS_ERR.store(true, Ordering::SeqCst);
}

/// Clears the FIPS error state between controlled fault-injection runs.
///
/// Only compiled under the `functest` feature; a production binary has no
/// path out of the error state.
#[cfg(feature = "functest")]
pub fn reset_in_fips_err() {
    IN_FIPS_ERR.store(false, Ordering::SeqCst);
}
