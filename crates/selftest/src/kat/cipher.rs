//! Symmetric block-cipher known-answer tests

use fipspost_api::{CipherEngine, Error, Provider, Result};
use fipspost_vectors::CipherVector;
use log::{error, info};

use super::{outputs_match, tampered_copy};
use crate::gate;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn run_vector(
    tfm: &mut dyn CipherEngine,
    driver: &str,
    dir: Direction,
    tv: &CipherVector,
) -> Result<()> {
    let key = tampered_copy(driver, tv.key);
    tfm.set_key(&key)?;

    // Modes that take no IV get a zero-filled one sized to the block, so
    // the engine never sees an uninitialized buffer.
    let zero_iv = vec![0u8; tfm.block_size()];
    let iv: &[u8] = if tv.iv.is_empty() { &zero_iv } else { tv.iv };

    let (src, expected) = match dir {
        Direction::Encrypt => (tv.ptext, tv.ctext),
        Direction::Decrypt => (tv.ctext, tv.ptext),
    };

    let mut out = vec![0u8; src.len()];
    match dir {
        Direction::Encrypt => tfm.encrypt(iv, src, &mut out)?,
        Direction::Decrypt => tfm.decrypt(iv, src, &mut out)?,
    }

    if !outputs_match(&out, expected) {
        return Err(Error::self_test("cipher output mismatch"));
    }
    Ok(())
}

/// Runs one cipher suite against one driver: every vector encrypted, then
/// every vector decrypted. Stops at the first failing vector.
pub fn test_cipher(provider: &dyn Provider, suite: &[CipherVector], driver: &str) -> Result<()> {
    let mut tfm = match gate::alloc_cipher(provider, driver) {
        Ok(tfm) => tfm,
        Err(err) => {
            error!("FIPS: cipher allocation error for {}, err={}", driver, err);
            return Err(err);
        }
    };

    for (i, tv) in suite.iter().enumerate() {
        if let Err(err) = run_vector(tfm.as_mut(), driver, Direction::Encrypt, tv) {
            error!("FIPS: {}, test {} encrypt failed, err={}", driver, i, err);
            return Err(err);
        }
    }

    for (i, tv) in suite.iter().enumerate() {
        if let Err(err) = run_vector(tfm.as_mut(), driver, Direction::Decrypt, tv) {
            error!("FIPS: {}, test {} decrypt failed, err={}", driver, i, err);
            return Err(err);
        }
    }

    info!("FIPS: self-tests for {} passed", driver);
    Ok(())
}
