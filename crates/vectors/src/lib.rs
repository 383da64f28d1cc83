//! Known-answer test vectors for the fipspost self-test runner
//!
//! Each suite is a compiled-in constant table for one algorithm/mode pair.
//! Cipher, hash and AEAD answers come from the NIST/RFC reference documents
//! cited on each table; DRBG and KBKDF seed material follows the CAVP
//! request-file layout. Suites are read-only data: the runner borrows them
//! and never mutates or frees them.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "block")]
mod aes;
#[cfg(feature = "drbg")]
mod drbg;
#[cfg(feature = "aead")]
mod gcm;
#[cfg(feature = "hash")]
mod hmac;
#[cfg(feature = "kdf")]
mod kbkdf;
#[cfg(feature = "hash")]
mod sha;

#[cfg(feature = "block")]
pub use aes::{AES_CBC_TV, AES_ECB_TV};
#[cfg(feature = "drbg")]
pub use drbg::{DRBG_NOPR_HMAC_SHA256_TV, DRBG_PR_HMAC_SHA256_TV};
#[cfg(feature = "aead")]
pub use gcm::AES_GCM_TV;
#[cfg(feature = "hash")]
pub use hmac::{
    HMAC_SHA1_TV, HMAC_SHA224_TV, HMAC_SHA256_TV, HMAC_SHA384_TV, HMAC_SHA512_TV,
};
#[cfg(feature = "kdf")]
pub use kbkdf::KBKDF_HMAC_SHA512_CTR_TV;
#[cfg(feature = "hash")]
pub use sha::{SHA1_TV, SHA224_TV, SHA256_TV, SHA384_TV, SHA512_TV};

/// One symmetric-cipher known answer.
///
/// An empty `iv` means the mode takes no IV (or the runner zero-fills one
/// to the block size, matching how the suites encode ECB alongside CBC).
#[derive(Debug)]
pub struct CipherVector {
    /// Cipher key
    pub key: &'static [u8],
    /// Initialization vector, possibly empty
    pub iv: &'static [u8],
    /// Plaintext
    pub ptext: &'static [u8],
    /// Expected ciphertext, same length as `ptext`
    pub ctext: &'static [u8],
}

/// One AEAD known answer.
///
/// `input` and `result` have different lengths; the difference is the
/// authentication-tag length. On the encrypt pass `input` is the plaintext
/// and `result` the ciphertext plus tag; the decrypt pass feeds `result`
/// back and expects `input`.
#[derive(Debug)]
pub struct AeadVector {
    /// AEAD key
    pub key: &'static [u8],
    /// Nonce
    pub iv: &'static [u8],
    /// Associated data, possibly empty
    pub assoc: &'static [u8],
    /// Plaintext side of the answer
    pub input: &'static [u8],
    /// Ciphertext-plus-tag side of the answer
    pub result: &'static [u8],
}

/// One hash or HMAC known answer. An empty `key` means an unkeyed hash.
#[derive(Debug)]
pub struct HashVector {
    /// HMAC key, empty for plain hashes
    pub key: &'static [u8],
    /// Message
    pub ptext: &'static [u8],
    /// Expected digest
    pub digest: &'static [u8],
}

/// One DRBG known answer for the two-call generate sequence.
///
/// `entropy` seeds instantiation (entropy input concatenated with the
/// nonce, CAVP layout). The two generate calls mix in `addtl_a` then
/// `addtl_b`; prediction-resistant drivers additionally consume
/// `entropy_pr_a`/`entropy_pr_b` before each call. `expected` is the
/// second call's output.
#[derive(Debug)]
pub struct DrbgVector {
    /// Instantiation entropy input plus nonce
    pub entropy: &'static [u8],
    /// Personalization string, possibly empty
    pub pers: &'static [u8],
    /// Additional input for the first generate call
    pub addtl_a: &'static [u8],
    /// Additional input for the second generate call
    pub addtl_b: &'static [u8],
    /// Fresh entropy for the first call (prediction resistance only)
    pub entropy_pr_a: &'static [u8],
    /// Fresh entropy for the second call (prediction resistance only)
    pub entropy_pr_b: &'static [u8],
    /// Expected output of the second generate call
    pub expected: &'static [u8],
}

/// One counter-mode KBKDF known answer (NIST SP 800-108)
#[derive(Debug)]
pub struct KdfVector {
    /// Counter length in bits
    pub counter_bits: u32,
    /// Input keying material
    pub key_in: &'static [u8],
    /// Label half of the fixed input data
    pub label: &'static [u8],
    /// Context half of the fixed input data
    pub context: &'static [u8],
    /// Expected derived keying material
    pub expected: &'static [u8],
}
