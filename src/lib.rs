//! # fipspost
//!
//! FIPS 140 power-on self-test suite: known-answer tests for every
//! compiled-in approved algorithm, a module integrity check, and a sticky
//! error latch that gates the surrounding crypto API once any test fails.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! fipspost = "0.3"
//! ```
//!
//! Run the POST once, late in start-up, after every crypto backend has
//! registered with your [`api::Provider`] implementation:
//!
//! ```ignore
//! use fipspost::prelude::*;
//!
//! let node = FipsStatusNode::register();
//! let outcome = run_post(&provider, &integrity, IntegrityPolicy::default());
//! if !outcome.approved {
//!     // The latch is tripped; crypto allocations are refused until
//!     // restart. The process stays up so the failure can be observed.
//! }
//! ```
//!
//! ## Features
//!
//! - `block`, `aead`, `hash`, `drbg`, `kdf` (default): algorithm families
//!   compiled into the self-test registry
//! - `accel`: additionally test the hardware-accelerated backend variants
//! - `trace-bypass`: ignore the integrity verdict, as a function-tracing
//!   build must
//! - `functest`: the fault-injection harness and the latch reset path it
//!   needs. Never enable in production builds.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`fipspost-api`]: capability-provider traits and error types
//! - [`fipspost-vectors`]: known-answer vector suites
//! - [`fipspost-selftest`]: the POST core (KAT runner, latch, orchestrator)
//! - [`fipspost-functest`]: the fault-injection harness (optional)

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use fipspost_api as api;
pub use fipspost_selftest as selftest;
pub use fipspost_vectors as vectors;

// Feature-gated re-exports
#[cfg(feature = "functest")]
pub use fipspost_functest as functest;

/// Common imports for fipspost users
pub mod prelude {
    pub use fipspost_api::{
        AeadEngine, CipherEngine, DrbgEngine, Error, HashEngine, IntegrityCheck, KbkdfParams,
        Provider, Result,
    };
    pub use fipspost_selftest::{
        in_fips_err, run_post, set_in_fips_err, FipsStatusNode, IntegrityPolicy, IntegrityStatus,
        PostOutcome, FIPS_STATUS_PATH,
    };

    #[cfg(feature = "functest")]
    pub use fipspost_functest::{run_functional_tests, FunctestReport};
}
