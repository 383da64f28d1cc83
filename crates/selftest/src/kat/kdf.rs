//! Counter-mode KBKDF known-answer tests
//!
//! The KDF is a pure function of its inputs, so there is no engine object
//! to allocate: each vector is one direct provider call.

use fipspost_api::{Error, KbkdfParams, Provider, Result};
use fipspost_vectors::KdfVector;
use log::{error, info};
use zeroize::Zeroizing;

use super::{outputs_match, tampered_kdf_key_len};

fn run_vector(provider: &dyn Provider, driver: &str, tv: &KdfVector) -> Result<()> {
    let key_len = tampered_kdf_key_len(driver, tv.key_in.len());
    let params = KbkdfParams {
        counter_bits: tv.counter_bits,
        key_in: &tv.key_in[..key_len],
        label: tv.label,
        context: tv.context,
        out_len: tv.expected.len(),
    };

    let mut out = Zeroizing::new(vec![0u8; tv.expected.len()]);
    provider.kbkdf_hmac_sha512_ctr(&params, &mut out)?;

    if !outputs_match(&out, tv.expected) {
        return Err(Error::self_test("kdf output mismatch"));
    }
    Ok(())
}

/// Runs the KBKDF suite. Stops at the first failing vector.
pub fn test_kdf(provider: &dyn Provider, suite: &[KdfVector], driver: &str) -> Result<()> {
    for (i, tv) in suite.iter().enumerate() {
        if let Err(err) = run_vector(provider, driver, tv) {
            error!("FIPS: {}, test {} failed, err={}", driver, i, err);
            return Err(err);
        }
    }

    info!("FIPS: self-tests for {} passed", driver);
    Ok(())
}
