//! Capability traits consumed by the self-test core
//!
//! An implementation of [`Provider`] hands out engine instances by driver
//! name, mirroring how runtime crypto users obtain theirs: the self-test
//! exercises exactly the allocation path it is guarding, never a bypass.

mod aead;
mod cipher;
mod drbg;
mod hash;
mod integrity;
#[cfg(feature = "alloc")]
mod provider;

pub use aead::AeadEngine;
pub use cipher::CipherEngine;
pub use drbg::DrbgEngine;
pub use hash::HashEngine;
pub use integrity::IntegrityCheck;
#[cfg(feature = "alloc")]
pub use provider::{KbkdfParams, Provider};
