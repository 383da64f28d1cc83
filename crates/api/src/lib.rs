//! Public API traits and types for the fipspost self-test suite
//!
//! This crate defines the capability surface the self-test core drives:
//! engine traits for symmetric ciphers, AEAD, hashes and DRBGs, the provider
//! that allocates them by driver name, and the integrity-check hook. The
//! cryptographic implementations themselves live behind these traits; the
//! self-test core is purely a consumer.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{AeadEngine, CipherEngine, DrbgEngine, HashEngine, IntegrityCheck};

#[cfg(feature = "alloc")]
pub use traits::{KbkdfParams, Provider};

// Re-exported so provider implementations can honor the key-zeroization
// contract without declaring their own dependency.
pub use zeroize;
