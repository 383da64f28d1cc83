//! Integrity-check trust decision
//!
//! The keyed hash over the module's code and data ranges is computed
//! externally (see `fipspost_api::IntegrityCheck`); this module owns the
//! decision of whether to trust the verdict. Function-tracing builds patch
//! code bytes at runtime and would fail the check spuriously, so under
//! that configuration the verdict is never consulted and a distinct
//! "bypassed" status is logged instead.

use fipspost_api::{IntegrityCheck, Result};
use log::info;

/// How the orchestrator treats the integrity verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityPolicy {
    /// A failed check trips the latch
    Enforce,
    /// The check is skipped and logged as bypassed
    Bypass,
}

impl Default for IntegrityPolicy {
    fn default() -> Self {
        if cfg!(feature = "trace-bypass") {
            IntegrityPolicy::Bypass
        } else {
            IntegrityPolicy::Enforce
        }
    }
}

/// Obtains the integrity verdict under `Enforce`; `Bypass` returns `None`
/// without invoking the checker.
pub(crate) fn run_check(checker: &dyn IntegrityCheck, policy: IntegrityPolicy) -> Option<Result<()>> {
    match policy {
        IntegrityPolicy::Bypass => {
            info!("FIPS: integrity check bypassed");
            None
        }
        IntegrityPolicy::Enforce => {
            let verdict = checker.verify();
            #[cfg(feature = "functest")]
            let verdict = crate::functest::maybe_corrupt_integrity(
                crate::functest::active_selector_name(),
                verdict,
            );
            Some(verdict)
        }
    }
}
