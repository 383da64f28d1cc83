//! Known-answer test runner
//!
//! One sub-module per algorithm family. Each family runner allocates its
//! engine through the latch gate, replays every vector in the suite, and
//! stops at the first failing vector; `run_all_kats` keeps going across
//! suites so one broken backend cannot mask another. Failures are logged
//! with the driver name, vector index and engine-reported error, then
//! aggregated into the overall verdict.

mod aead;
mod cipher;
mod drbg;
mod hash;
mod kdf;

pub use aead::test_aead;
pub use cipher::test_cipher;
pub use drbg::test_drbg;
pub use hash::test_hash;
pub use kdf::test_kdf;

use fipspost_api::Provider;
use log::info;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::registry::{self, Suite};

/// Compares a computed output against the known answer.
///
/// Constant-time over the bytes; the length check alone may leak, which is
/// fine for public vector geometry.
pub(crate) fn outputs_match(computed: &[u8], expected: &[u8]) -> bool {
    computed.len() == expected.len() && bool::from(computed.ct_eq(expected))
}

/// Copies an input through the corruption hook.
///
/// Under `functest` the copy's first byte is incremented when `driver`
/// matches the active injection selector.
#[cfg(feature = "functest")]
pub(crate) fn tampered_copy(driver: &str, input: &[u8]) -> Zeroizing<Vec<u8>> {
    crate::functest::maybe_corrupt(crate::functest::active_selector_name(), driver, input)
}

/// Copies an input into a zeroize-on-drop scratch buffer; production
/// builds carry no corruption path.
#[cfg(not(feature = "functest"))]
pub(crate) fn tampered_copy(_driver: &str, input: &[u8]) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(input.to_vec())
}

/// KDF input-key length through the corruption hook (forced to one byte
/// when `driver` matches the active injection selector)
#[cfg(feature = "functest")]
pub(crate) fn tampered_kdf_key_len(driver: &str, key_len: usize) -> usize {
    crate::functest::maybe_corrupt_kdf_key_len(
        crate::functest::active_selector_name(),
        driver,
        key_len,
    )
}

/// KDF input-key length, used as-is in production builds
#[cfg(not(feature = "functest"))]
pub(crate) fn tampered_kdf_key_len(_driver: &str, key_len: usize) -> usize {
    key_len
}

/// Runs the known-answer tests for every algorithm variant compiled into
/// this build, in registry order. Returns whether all of them passed.
pub fn run_all_kats(provider: &dyn Provider) -> bool {
    let mut failures = 0usize;

    for algo in registry::algorithms() {
        let result = match algo.suite {
            Suite::Cipher(vecs) => test_cipher(provider, vecs, algo.driver),
            Suite::Aead(vecs) => test_aead(provider, vecs, algo.driver),
            Suite::Hash(vecs) => test_hash(provider, vecs, algo.driver),
            Suite::Drbg { vecs, pr } => test_drbg(provider, vecs, algo.driver, pr),
            Suite::Kdf(vecs) => test_kdf(provider, vecs, algo.driver),
        };
        if result.is_err() {
            failures += 1;
        }
    }

    if failures == 0 {
        info!("FIPS: all algorithm self-tests passed");
    }
    failures == 0
}
