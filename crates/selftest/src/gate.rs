//! Latch-gated capability allocation
//!
//! Every engine the self-test drives is obtained through these helpers,
//! which refuse service once the error latch is set. Runtime crypto users
//! elsewhere in the system go through the same refusal, so a self-test
//! pass vouches for the path they actually use.

use fipspost_api::{AeadEngine, CipherEngine, DrbgEngine, Error, HashEngine, Provider, Result};

use crate::latch;

fn check_latch() -> Result<()> {
    if latch::in_fips_err() {
        return Err(Error::unavailable("crypto API in FIPS error"));
    }
    Ok(())
}

/// Allocates a symmetric-cipher engine unless the latch is set
pub fn alloc_cipher(provider: &dyn Provider, driver: &str) -> Result<Box<dyn CipherEngine>> {
    check_latch()?;
    provider.alloc_cipher(driver)
}

/// Allocates an AEAD engine unless the latch is set
pub fn alloc_aead(provider: &dyn Provider, driver: &str) -> Result<Box<dyn AeadEngine>> {
    check_latch()?;
    provider.alloc_aead(driver)
}

/// Allocates a hash engine unless the latch is set
pub fn alloc_hash(provider: &dyn Provider, driver: &str) -> Result<Box<dyn HashEngine>> {
    check_latch()?;
    provider.alloc_hash(driver)
}

/// Allocates a DRBG engine unless the latch is set
pub fn alloc_drbg(provider: &dyn Provider, driver: &str) -> Result<Box<dyn DrbgEngine>> {
    check_latch()?;
    provider.alloc_drbg(driver)
}
