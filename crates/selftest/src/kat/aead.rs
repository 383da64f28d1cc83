//! AEAD known-answer tests

use fipspost_api::{AeadEngine, Error, Provider, Result};
use fipspost_vectors::AeadVector;
use log::{error, info};

use super::{outputs_match, tampered_copy};
use crate::gate;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Authentication-tag length implied by vector geometry: the input and
/// result sides differ by exactly the tag.
pub(crate) fn derived_tag_len(input_len: usize, result_len: usize) -> usize {
    input_len.abs_diff(result_len)
}

/// Associated data occupies its own segment only when non-empty; an empty
/// slice never reaches the engine as a zero-length segment.
pub(crate) fn assoc_segment(assoc: &[u8]) -> Option<&[u8]> {
    if assoc.is_empty() {
        None
    } else {
        Some(assoc)
    }
}

fn run_vector(
    tfm: &mut dyn AeadEngine,
    driver: &str,
    dir: Direction,
    tv: &AeadVector,
) -> Result<()> {
    let key = tampered_copy(driver, tv.key);
    tfm.set_key(&key)?;
    tfm.set_tag_len(derived_tag_len(tv.input.len(), tv.result.len()))?;

    let (src, expected) = match dir {
        Direction::Encrypt => (tv.input, tv.result),
        Direction::Decrypt => (tv.result, tv.input),
    };

    let mut out = vec![0u8; expected.len()];
    match dir {
        Direction::Encrypt => tfm.seal(tv.iv, assoc_segment(tv.assoc), src, &mut out)?,
        Direction::Decrypt => tfm.open(tv.iv, assoc_segment(tv.assoc), src, &mut out)?,
    }

    if !outputs_match(&out, expected) {
        return Err(Error::self_test("aead output mismatch"));
    }
    Ok(())
}

/// Runs one AEAD suite against one driver: every vector sealed, then every
/// vector opened. Stops at the first failing vector.
pub fn test_aead(provider: &dyn Provider, suite: &[AeadVector], driver: &str) -> Result<()> {
    let mut tfm = match gate::alloc_aead(provider, driver) {
        Ok(tfm) => tfm,
        Err(err) => {
            error!("FIPS: aead allocation error for {}, err={}", driver, err);
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
