//! Module integrity-check hook

use crate::error::Result;

/// Computes the keyed hash over the module's loaded code and data ranges
/// and compares it against the build-time expected tag.
///
/// The computation is owned by the build/loader side; the self-test core
/// only decides whether to trust the verdict (see the orchestrator's
/// integrity policy).
pub trait IntegrityCheck {
    /// Returns `Ok(())` when the computed tag matches the expected tag
    fn verify(&self) -> Result<()>;
}
