//! FIPS 140 power-on self-test core
//!
//! This crate drives the mandatory start-up sequence for a FIPS 140 crypto
//! module: known-answer tests for every compiled-in approved algorithm,
//! followed by a keyed-hash integrity check over the loaded module, with a
//! sticky process-wide error latch as the single source of truth the wider
//! crypto API consults before handing out new capability instances.
//!
//! The cryptographic engines themselves live behind the traits in
//! `fipspost-api`; this crate allocates them by driver name through the
//! same gate runtime users go through, so a passing self-test vouches for
//! the real allocation path and not a test-only bypass.
//!
//! The whole sequence is synchronous and runs once, late in process
//! start-up, after every backend has registered with the provider. A
//! failure anywhere degrades the module to the error state but never
//! aborts the process: the system stays alive to report the failure.

#![forbid(unsafe_code)]

pub mod gate;
pub mod integrity;
pub mod kat;
pub mod latch;
pub mod post;
pub mod registry;
pub mod status;

#[cfg(feature = "functest")]
pub mod functest;

pub use integrity::IntegrityPolicy;
pub use latch::{in_fips_err, set_in_fips_err};
pub use post::{run_post, IntegrityStatus, PostOutcome, PRODUCT};
pub use status::{FipsStatusNode, FIPS_STATUS_PATH};

#[cfg(feature = "functest")]
pub use latch::reset_in_fips_err;
