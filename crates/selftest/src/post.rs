//! Power-on self-test orchestrator
//!
//! Single pass, no retries: run every known-answer test, then — only if
//! they all passed — apply the integrity policy, then report. Failures are
//! fatal to approved mode but never to the process; the system keeps
//! running so the failure can be observed, it just refuses new crypto
//! capability instances through the latch.

use fipspost_api::{IntegrityCheck, Provider};
use log::{error, info};

use crate::integrity::{self, IntegrityPolicy};
use crate::kat;
use crate::latch;

/// Product tag carried by every operator-visible log line
pub const PRODUCT: &str = concat!("fipspost ", env!("CARGO_PKG_VERSION"));

/// How the integrity stage concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityStatus {
    /// Verdict obtained and it passed
    Passed,
    /// Verdict obtained and it failed; the latch is tripped
    Failed,
    /// Verdict ignored under the tracing-build policy
    Bypassed,
    /// Never reached: the algorithm tests already failed
    Skipped,
}

/// Outcome of one POST pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostOutcome {
    /// Whether every known-answer test passed
    pub kats_passed: bool,
    /// How the integrity stage concluded
    pub integrity: IntegrityStatus,
    /// Whether the module came up in approved mode (latch clear)
    pub approved: bool,
}

/// Runs one full power-on self-test pass.
///
/// Call once, late in start-up, after every backend has registered with
/// the provider. With the latch already tripped the run reports the error
/// state rather than clearing it: there is no path out of the error state
/// in a production build.
pub fn run_post(
    provider: &dyn Provider,
    checker: &dyn IntegrityCheck,
    policy: IntegrityPolicy,
) -> PostOutcome {
    info!("FIPS: {} power-on self-test", PRODUCT);

    let kats_passed = kat::run_all_kats(provider);
    let integrity = if !kats_passed {
        latch::set_in_fips_err();
        error!("FIPS: algorithm known-answer tests failed");
        IntegrityStatus::Skipped
    } else {
        info!("FIPS: algorithm known-answer tests passed");
        match integrity::run_check(checker, policy) {
            None => IntegrityStatus::Bypassed,
            Some(Ok(())) => {
                info!("FIPS: integrity check passed");
                IntegrityStatus::Passed
            }
            Some(Err(err)) => {
                latch::set_in_fips_err();
                error!("FIPS: integrity check failed, err={}", err);
                IntegrityStatus::Failed
            }
        }
    };

    let approved = !latch::in_fips_err();
    if approved {
        info!("FIPS: started in FIPS approved mode");
    } else {
        error!("FIPS: CRYPTO API in FIPS error");
    }

    PostOutcome {
        kats_passed,
        integrity,
        approved,
    }
}

/// Runs [`run_post`] with this build's default integrity policy
pub fn run_post_default(provider: &dyn Provider, checker: &dyn IntegrityCheck) -> PostOutcome {
    run_post(provider, checker, IntegrityPolicy::default())
}
