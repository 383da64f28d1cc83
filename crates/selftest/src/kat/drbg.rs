//! DRBG known-answer tests
//!
//! Each vector instantiates a fresh generator from caller-supplied test
//! entropy, then issues two generate requests; only the second output is
//! compared. Prediction-resistant drivers additionally consume fresh
//! entropy before each request — the `pr` flag comes from the registry
//! table, not from the driver name.

use fipspost_api::{Error, Provider, Result};
use fipspost_vectors::DrbgVector;
use log::{error, info};

use super::{outputs_match, tampered_copy};
use crate::gate;

fn run_vector(provider: &dyn Provider, driver: &str, pr: bool, tv: &DrbgVector) -> Result<()> {
    let mut drng = gate::alloc_drbg(provider, driver)?;

    let entropy = tampered_copy(driver, tv.entropy);
    drng.instantiate(tv.pers, &entropy)?;

    let mut buf = vec![0u8; tv.expected.len()];

    // First request advances internal state only; its output is unused.
    drng.generate(&mut buf, tv.addtl_a, pr.then_some(tv.entropy_pr_a))?;
    drng.generate(&mut buf, tv.addtl_b, pr.then_some(tv.entropy_pr_b))?;

    if !outputs_match(&buf, tv.expected) {
        return Err(Error::self_test("drbg output mismatch"));
    }
    Ok(())
}

/// Runs one DRBG suite against one driver. Stops at the first failing
/// vector; every vector gets a fresh generator instance.
pub fn test_drbg(
    provider: &dyn Provider,
    suite: &[DrbgVector],
    driver: &str,
    pr: bool,
) -> Result<()> {
    for (i, tv) in suite.iter().enumerate() {
        if let Err(err) = run_vector(provider, driver, pr, tv) {
            error!("FIPS: {}, test {} failed, err={}", driver, i, err);
            return Err(err);
        }
    }

    info!("FIPS: self-tests for {} passed", driver);
    Ok(())
}
