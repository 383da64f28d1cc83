//! DRBG engine trait

use crate::error::Result;

/// A deterministic random bit generator instance bound to one driver.
///
/// [`DrbgEngine::instantiate`] takes entropy from the caller instead of the
/// live entropy source. That path exists for known-answer testing only: it
/// makes the generator a deterministic function of the vector's seed
/// material. Implementations must zeroize retained seed state on drop.
pub trait DrbgEngine {
    /// Seeds the generator from caller-supplied test entropy and an optional
    /// personalization string
    fn instantiate(&mut self, pers: &[u8], test_entropy: &[u8]) -> Result<()>;

    /// Fills `out` with generated bytes. `addtl` is mixed into the request;
    /// `fresh_entropy` is consumed first when the driver operates with
    /// prediction resistance (`None` otherwise).
    fn generate(&mut self, out: &mut [u8], addtl: &[u8], fresh_entropy: Option<&[u8]>)
        -> Result<()>;

    /// Reseeds the generator from its entropy source, mixing in `addtl`
    /// when present. Used by the conditional self-tests; the continuous
    /// entropy health test runs inside this call.
    fn reseed(&mut self, addtl: Option<&[u8]>) -> Result<()>;
}
