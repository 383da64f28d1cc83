//! Symmetric block-cipher engine trait

use crate::error::Result;

/// A keyed symmetric-cipher instance bound to one driver.
///
/// Engines are synchronous from the caller's point of view; an
/// implementation that defers work internally must not return until the
/// operation has completed or failed. Implementations holding key schedules
/// must zeroize them on drop.
pub trait CipherEngine {
    /// Loads a key into the engine, replacing any previous key
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Cipher block size in bytes
    fn block_size(&self) -> usize;

    /// Encrypts `src` into `dst` under the given IV. `dst` must be exactly
    /// `src.len()` bytes.
    fn encrypt(&mut self, iv: &[u8], src: &[u8], dst: &mut [u8]) -> Result<()>;

    /// Decrypts `src` into `dst` under the given IV. `dst` must be exactly
    /// `src.len()` bytes.
    fn decrypt(&mut self, iv: &[u8], src: &[u8], dst: &mut [u8]) -> Result<()>;
}
