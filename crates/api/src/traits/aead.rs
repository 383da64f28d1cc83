//! AEAD engine trait

use crate::error::Result;

/// An authenticated-encryption instance bound to one driver.
///
/// The authentication tag is appended to the ciphertext; its length is set
/// by [`AeadEngine::set_tag_len`] before any seal/open call. Associated data
/// is authenticated but never encrypted, and is absent (`None`) rather than
/// empty when a request carries none.
pub trait AeadEngine {
    /// Loads a key into the engine, replacing any previous key
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Sets the authentication-tag length in bytes for subsequent requests
    fn set_tag_len(&mut self, tag_len: usize) -> Result<()>;

    /// Encrypts and authenticates `src` into `dst`. `dst` must be exactly
    /// `src.len()` plus the configured tag length.
    fn seal(&mut self, iv: &[u8], assoc: Option<&[u8]>, src: &[u8], dst: &mut [u8]) -> Result<()>;

    /// Verifies and decrypts `src` (ciphertext plus tag) into `dst`. `dst`
    /// must be exactly `src.len()` minus the configured tag length. Fails
    /// without producing output if authentication fails.
    fn open(&mut self, iv: &[u8], assoc: Option<&[u8]>, src: &[u8], dst: &mut [u8]) -> Result<()>;
}
