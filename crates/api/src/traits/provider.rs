//! Provider allocation surface

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::boxed::Box;

use crate::error::Result;
use crate::traits::{AeadEngine, CipherEngine, DrbgEngine, HashEngine};

/// Parameters for one counter-mode KBKDF derivation (NIST SP 800-108,
/// HMAC-SHA512 PRF)
#[derive(Debug, Clone, Copy)]
pub struct KbkdfParams<'a> {
    /// Counter length in bits (8, 16, 24 or 32)
    pub counter_bits: u32,
    /// Input keying material
    pub key_in: &'a [u8],
    /// Label (the "Purpose" field of the fixed input data)
    pub label: &'a [u8],
    /// Context bound into the derivation
    pub context: &'a [u8],
    /// Requested output length in bytes
    pub out_len: usize,
}

/// Allocates engine instances by driver name.
///
/// Driver names are the provider's own registry keys (for example
/// `"cbc(aes-generic)"` or `"sha256-ce"`); an unknown name yields
/// [`crate::Error::CapabilityUnavailable`]. Each allocation returns a fresh
/// engine carrying no state from previous users.
pub trait Provider {
    /// Allocates a symmetric-cipher engine
    fn alloc_cipher(&self, driver: &str) -> Result<Box<dyn CipherEngine>>;

    /// Allocates an AEAD engine
    fn alloc_aead(&self, driver: &str) -> Result<Box<dyn AeadEngine>>;

    /// Allocates a hash or HMAC engine
    fn alloc_hash(&self, driver: &str) -> Result<Box<dyn HashEngine>>;

    /// Allocates a DRBG engine
    fn alloc_drbg(&self, driver: &str) -> Result<Box<dyn DrbgEngine>>;

    /// Derives `params.out_len` bytes into `out` via the counter-mode KBKDF.
    /// This is a direct function of its inputs; no engine object is
    /// allocated.
    fn kbkdf_hmac_sha512_ctr(&self, params: &KbkdfParams<'_>, out: &mut [u8]) -> Result<()>;
}
