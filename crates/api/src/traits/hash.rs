//! Hash and keyed-hash engine trait

use crate::error::Result;

/// A (possibly keyed) hash instance bound to one driver.
///
/// For HMAC drivers the key is loaded with [`HashEngine::set_key`] before
/// [`HashEngine::init`]; plain hash drivers reject keys.
pub trait HashEngine {
    /// Loads an HMAC key. Plain hash engines return an error.
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Digest length in bytes for this driver
    fn digest_len(&self) -> usize;

    /// Resets the engine to a fresh hashing state
    fn init(&mut self) -> Result<()>;

    /// Absorbs message bytes
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Finalizes the digest into `out`, which must be at least
    /// [`HashEngine::digest_len`] bytes; only that many bytes are written.
    fn finalize(&mut self, out: &mut [u8]) -> Result<()>;
}
