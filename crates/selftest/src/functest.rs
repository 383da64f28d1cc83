//! Injection-selector state and corruption hooks
//!
//! Compiled only under the `functest` feature. The fault-injection harness
//! selects one algorithm at a time by ordinal index; the KAT runners call
//! [`maybe_corrupt`] at exactly one point per test, and the corruption
//! fires only when the driver under test matches the active selector
//! textually. Everything else in the same pass runs untampered.

use std::sync::Mutex;

use zeroize::Zeroizing;

/// Sentinel name meaning no injection is active
pub const NO_TEST: &str = "NO_TEST";

/// Ordinal list of KAT injection targets, one POST run each.
///
/// The order is operator-visible: test procedures refer to entries by
/// index. `"integrity"` selects the integrity-check stage rather than an
/// algorithm KAT.
pub const KAT_SELECTORS: &[&str] = &[
    "ecb(aes-generic)",
    "cbc(aes-generic)",
    "gcm_base(ctr(aes-generic),ghash-generic)",
    "ecb(aes-ce)",
    "cbc(aes-ce)",
    "gcm_base(ctr(aes-ce),ghash-generic)",
    "sha1-generic",
    "hmac(sha1-generic)",
    "sha1-ce",
    "hmac(sha1-ce)",
    "sha224-generic",
    "sha256-generic",
    "hmac(sha224-generic)",
    "hmac(sha256-generic)",
    "sha224-ce",
    "sha256-ce",
    "hmac(sha224-ce)",
    "hmac(sha256-ce)",
    "sha384-generic",
    "sha512-generic",
    "hmac(sha384-generic)",
    "hmac(sha512-generic)",
    "drbg_nopr_hmac_sha256",
    "drbg_pr_hmac_sha256",
    "kbkdf_hmac_sha512_ctr",
    "integrity",
];

/// Ordinal list of conditional-test injection targets, exercised through
/// the RNG reseed path rather than a KAT
pub const CONDITIONAL_SELECTORS: &[&str] = &["ndrng_crngt", "zeroization"];

static ACTIVE: Mutex<&'static str> = Mutex::new(NO_TEST);

fn store(name: &'static str) {
    match ACTIVE.lock() {
        Ok(mut guard) => *guard = name,
        Err(poisoned) => *poisoned.into_inner() = name,
    }
}

/// Activates the KAT selector at `index`; out-of-range indices select the
/// [`NO_TEST`] sentinel. Replaces any previously active selector.
pub fn set_kat_selector(index: usize) {
    store(KAT_SELECTORS.get(index).copied().unwrap_or(NO_TEST));
}

/// Activates the conditional selector at `index`; out-of-range indices
/// select the [`NO_TEST`] sentinel. Replaces any previously active
/// selector.
pub fn set_conditional_selector(index: usize) {
    store(CONDITIONAL_SELECTORS.get(index).copied().unwrap_or(NO_TEST));
}

/// Deactivates injection
pub fn clear_selector() {
    store(NO_TEST);
}

/// Name of the active selector, or [`NO_TEST`]
pub fn active_selector_name() -> &'static str {
    match ACTIVE.lock() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Returns `input`, with its first byte incremented iff `driver` is the
/// active injection target.
///
/// This is the single corruption rule for key, message and entropy
/// tampering: one byte, one field, one name-matched algorithm per pass.
/// The returned buffer is zeroized on drop since it may hold key material.
pub fn maybe_corrupt(active: &str, driver: &str, input: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut buf = Zeroizing::new(input.to_vec());
    if active == driver {
        if let Some(first) = buf.first_mut() {
            *first = first.wrapping_add(1);
        }
    }
    buf
}

/// Returns the KDF input-key length to use: forced down to a single byte
/// iff `driver` is the active injection target.
pub fn maybe_corrupt_kdf_key_len(active: &str, driver: &str, key_len: usize) -> usize {
    if active == driver {
        1
    } else {
        key_len
    }
}

/// Forces an integrity-check failure iff the `"integrity"` selector is
/// active.
pub fn maybe_corrupt_integrity(
    active: &str,
    verdict: fipspost_api::Result<()>,
) -> fipspost_api::Result<()> {
    if active == "integrity" {
        return Err(fipspost_api::Error::IntegrityMismatch {
            context: "verdict forced by functional test",
        });
    }
    verdict
}
