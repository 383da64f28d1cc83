//! Table-driven mock capability provider
//!
//! Engines answer from the same vector tables the runner tests against:
//! an input that matches a vector exactly reproduces that vector's known
//! answer, anything else yields deterministic garbage (or an
//! authentication failure on the AEAD open path). That makes an
//! untampered POST pass and makes any single-byte corruption detectable,
//! without shipping cryptographic primitives in the test tree.
//!
//! The DRBG reseed path consults the active injection selector the same
//! way a real backend consults the functional-test mode, so the
//! conditional (continuous-test / zeroization) injections are observable
//! through it.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use fipspost_api::{
    AeadEngine, CipherEngine, DrbgEngine, Error, HashEngine, IntegrityCheck, KbkdfParams,
    Provider, Result,
};
use fipspost_vectors::{AeadVector, CipherVector, DrbgVector, HashVector, KdfVector};

fn garbage_fill(out: &mut [u8], seed: u8) {
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = seed ^ (i as u8) ^ 0xa5;
    }
}

fn digest_len_for(driver: &str) -> usize {
    if driver.contains("sha512") {
        64
    } else if driver.contains("sha384") {
        48
    } else if driver.contains("sha256") {
        32
    } else if driver.contains("sha224") {
        28
    } else {
        20
    }
}

fn cipher_suite(driver: &str) -> Option<&'static [CipherVector]> {
    match driver {
        "ecb(aes-generic)" | "ecb(aes-ce)" => Some(fipspost_vectors::AES_ECB_TV),
        "cbc(aes-generic)" | "cbc(aes-ce)" => Some(fipspost_vectors::AES_CBC_TV),
        _ => None,
    }
}

fn aead_suite(driver: &str) -> Option<&'static [AeadVector]> {
    match driver {
        "gcm_base(ctr(aes-generic),ghash-generic)" | "gcm_base(ctr(aes-ce),ghash-generic)" => {
            Some(fipspost_vectors::AES_GCM_TV)
        }
        _ => None,
    }
}

fn hash_suite(driver: &str) -> Option<&'static [HashVector]> {
    match driver {
        "sha1-generic" | "sha1-ce" => Some(fipspost_vectors::SHA1_TV),
        "sha224-generic" | "sha224-ce" => Some(fipspost_vectors::SHA224_TV),
        "sha256-generic" | "sha256-ce" => Some(fipspost_vectors::SHA256_TV),
        "sha384-generic" => Some(fipspost_vectors::SHA384_TV),
        "sha512-generic" => Some(fipspost_vectors::SHA512_TV),
        "hmac(sha1-generic)" | "hmac(sha1-ce)" => Some(fipspost_vectors::HMAC_SHA1_TV),
        "hmac(sha224-generic)" | "hmac(sha224-ce)" => Some(fipspost_vectors::HMAC_SHA224_TV),
        "hmac(sha256-generic)" | "hmac(sha256-ce)" => Some(fipspost_vectors::HMAC_SHA256_TV),
        "hmac(sha384-generic)" => Some(fipspost_vectors::HMAC_SHA384_TV),
        "hmac(sha512-generic)" => Some(fipspost_vectors::HMAC_SHA512_TV),
        _ => None,
    }
}

fn drbg_suite(driver: &str) -> Option<&'static [DrbgVector]> {
    match driver {
        "drbg_nopr_hmac_sha256" => Some(fipspost_vectors::DRBG_NOPR_HMAC_SHA256_TV),
        "drbg_pr_hmac_sha256" => Some(fipspost_vectors::DRBG_PR_HMAC_SHA256_TV),
        _ => None,
    }
}

struct MockCipher {
    suite: &'static [CipherVector],
    key: Vec<u8>,
    broken: bool,
}

impl MockCipher {
    fn lookup(&self, iv: &[u8], src: &[u8], encrypt: bool) -> Option<&'static CipherVector> {
        self.suite.iter().find(|tv| {
            let iv_ok = if tv.iv.is_empty() {
                iv.iter().all(|b| *b == 0)
            } else {
                tv.iv == iv
            };
            let src_ok = if encrypt { tv.ptext == src } else { tv.ctext == src };
            tv.key == self.key.as_slice() && iv_ok && src_ok
        })
    }

    fn run(&self, iv: &[u8], src: &[u8], dst: &mut [u8], encrypt: bool) -> Result<()> {
        if dst.len() != src.len() {
            return Err(Error::InvalidLength {
                context: "cipher destination",
                expected: src.len(),
                actual: dst.len(),
            });
        }
        match self.lookup(iv, src, encrypt) {
            Some(tv) if !self.broken => {
                dst.copy_from_slice(if encrypt { tv.ctext } else { tv.ptext });
            }
            _ => garbage_fill(dst, self.key.first().copied().unwrap_or(0)),
        }
        Ok(())
    }
}

impl CipherEngine for MockCipher {
    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        self.key = key.to_vec();
        Ok(())
    }

    fn block_size(&self) -> usize {
        16
    }

    fn encrypt(&mut self, iv: &[u8], src: &[u8], dst: &mut [u8]) -> Result<()> {
        self.run(iv, src, dst, true)
    }

    fn decrypt(&mut self, iv: &[u8], src: &[u8], dst: &mut [u8]) -> Result<()> {
        self.run(iv, src, dst, false)
    }
}

struct MockAead {
    suite: &'static [AeadVector],
    key: Vec<u8>,
    tag_len: usize,
    broken: bool,
}

impl MockAead {
    fn lookup(
        &self,
        iv: &[u8],
        assoc: Option<&[u8]>,
        src: &[u8],
        seal: bool,
    ) -> Option<&'static AeadVector> {
        self.suite.iter().find(|tv| {
            let assoc_ok = match assoc {
                None => tv.assoc.is_empty(),
                Some(ad) => tv.assoc == ad,
            };
            let src_ok = if seal { tv.input == src } else { tv.result == src };
            tv.key == self.key.as_slice()
                && tv.iv == iv
                && assoc_ok
                && src_ok
                && tv.input.len().abs_diff(tv.result.len()) == self.tag_len
        })
    }
}

impl AeadEngine for MockAead {
    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        self.key = key.to_vec();
        Ok(())
    }

    fn set_tag_len(&mut self, tag_len: usize) -> Result<()> {
        self.tag_len = tag_len;
        Ok(())
    }

    fn seal(&mut self, iv: &[u8], assoc: Option<&[u8]>, src: &[u8], dst: &mut [u8]) -> Result<()> {
        if dst.len() != src.len() + self.tag_len {
            return Err(Error::InvalidLength {
                context: "aead seal destination",
                expected: src.len() + self.tag_len,
                actual: dst.len(),
            });
        }
        match self.lookup(iv, assoc, src, true) {
            Some(tv) if !self.broken => dst.copy_from_slice(tv.result),
            _ => garbage_fill(dst, self.key.first().copied().unwrap_or(0)),
        }
        Ok(())
    }

    fn open(&mut self, iv: &[u8], assoc: Option<&[u8]>, src: &[u8], dst: &mut [u8]) -> Result<()> {
        match self.lookup(iv, assoc, src, false) {
            Some(tv) if !self.broken => {
                if dst.len() != tv.input.len() {
                    return Err(Error::InvalidLength {
                        context: "aead open destination",
                        expected: tv.input.len(),
                        actual: dst.len(),
                    });
                }
                dst.copy_from_slice(tv.input);
                Ok(())
            }
            // A real AEAD refuses to release unauthenticated plaintext.
            _ => Err(Error::Other {
                context: "aead authentication failed",
                message: String::new(),
            }),
        }
    }
}

struct MockHash {
    suite: &'static [HashVector],
    digest_len: usize,
    key: Vec<u8>,
    buf: Vec<u8>,
    broken: bool,
}

impl HashEngine for MockHash {
    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        self.key = key.to_vec();
        Ok(())
    }

    fn digest_len(&self) -> usize {
        self.digest_len
    }

    fn init(&mut self) -> Result<()> {
        self.buf.clear();
        Ok(())
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        self.buf.extend_from_slice(data);
        Ok(())
    }

    fn finalize(&mut self, out: &mut [u8]) -> Result<()> {
        if out.len() < self.digest_len {
            return Err(Error::InvalidLength {
                context: "digest output",
                expected: self.digest_len,
                actual: out.len(),
            });
        }
        let found = self
            .suite
            .iter()
            .find(|tv| tv.key == self.key.as_slice() && tv.ptext == self.buf.as_slice());
        match found {
            Some(tv) if !self.broken => {
                out[..self.digest_len].copy_from_slice(&tv.digest[..self.digest_len]);
            }
            _ => garbage_fill(
                &mut out[..self.digest_len],
                self.buf.first().copied().unwrap_or(0),
            ),
        }
        Ok(())
    }
}

struct MockDrbg {
    suite: &'static [DrbgVector],
    seeded: Option<&'static DrbgVector>,
    calls: usize,
    sequence_ok: bool,
    broken: bool,
}

fn expected_fresh(entropy_pr: &'static [u8]) -> Option<&'static [u8]> {
    if entropy_pr.is_empty() {
        None
    } else {
        Some(entropy_pr)
    }
}

impl DrbgEngine for MockDrbg {
    fn instantiate(&mut self, pers: &[u8], test_entropy: &[u8]) -> Result<()> {
        self.seeded = self
            .suite
            .iter()
            .find(|tv| tv.entropy == test_entropy && tv.pers == pers);
        self.calls = 0;
        self.sequence_ok = true;
        Ok(())
    }

    fn generate(
        &mut self,
        out: &mut [u8],
        addtl: &[u8],
        fresh_entropy: Option<&[u8]>,
    ) -> Result<()> {
        self.calls += 1;
        let tv = match self.seeded {
            Some(tv) => tv,
            None => {
                garbage_fill(out, 0x3c);
                return Ok(());
            }
        };

        let (want_addtl, want_fresh) = if self.calls == 1 {
            (tv.addtl_a, expected_fresh(tv.entropy_pr_a))
        } else {
            (tv.addtl_b, expected_fresh(tv.entropy_pr_b))
        };
        if addtl != want_addtl || fresh_entropy != want_fresh || out.len() != tv.expected.len() {
            self.sequence_ok = false;
        }

        if self.calls >= 2 && self.sequence_ok && !self.broken {
            out.copy_from_slice(tv.expected);
        } else {
            garbage_fill(out, self.calls as u8);
        }
        Ok(())
    }

    fn reseed(&mut self, _addtl: Option<&[u8]>) -> Result<()> {
        // A real backend consults the functional-test mode exactly like
        // this when deciding whether to fail its continuous health test.
        match fipspost_selftest::functest::active_selector_name() {
            "ndrng_crngt" => Err(Error::RandomGenerationError {
                context: "continuous rng test failed",
                message: String::new(),
            }),
            "zeroization" => Err(Error::RandomGenerationError {
                context: "drbg state zeroized",
                message: String::new(),
            }),
            _ => Ok(()),
        }
    }
}

fn kdf_lookup(params: &KbkdfParams<'_>) -> Option<&'static KdfVector> {
    fipspost_vectors::KBKDF_HMAC_SHA512_CTR_TV.iter().find(|tv| {
        tv.counter_bits == params.counter_bits
            && tv.key_in == params.key_in
            && tv.label == params.label
            && tv.context == params.context
            && tv.expected.len() == params.out_len
    })
}

/// Table-driven provider over the workspace vector suites.
///
/// `with_broken_driver` marks one driver as defective: its engines keep
/// allocating but always produce wrong output, the way a miscompiled or
/// corrupted backend would.
#[derive(Default)]
pub struct MockProvider {
    broken: HashSet<String>,
}

impl MockProvider {
    /// A provider where every known driver answers correctly
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider where `driver`'s engines always produce wrong output
    pub fn with_broken_driver(driver: &str) -> Self {
        let mut broken = HashSet::new();
        broken.insert(driver.to_string());
        Self { broken }
    }

    fn is_broken(&self, driver: &str) -> bool {
        self.broken.contains(driver)
    }
}

impl Provider for MockProvider {
    fn alloc_cipher(&self, driver: &str) -> Result<Box<dyn CipherEngine>> {
        let suite = cipher_suite(driver).ok_or(Error::unavailable("unknown cipher driver"))?;
        Ok(Box::new(MockCipher {
            suite,
            key: Vec::new(),
            broken: self.is_broken(driver),
        }))
    }

    fn alloc_aead(&self, driver: &str) -> Result<Box<dyn AeadEngine>> {
        let suite = aead_suite(driver).ok_or(Error::unavailable("unknown aead driver"))?;
        Ok(Box::new(MockAead {
            suite,
            key: Vec::new(),
            tag_len: 0,
            broken: self.is_broken(driver),
        }))
    }

    fn alloc_hash(&self, driver: &str) -> Result<Box<dyn HashEngine>> {
        let suite = hash_suite(driver).ok_or(Error::unavailable("unknown hash driver"))?;
        Ok(Box::new(MockHash {
            suite,
            digest_len: digest_len_for(driver),
            key: Vec::new(),
            buf: Vec::new(),
            broken: self.is_broken(driver),
        }))
    }

    fn alloc_drbg(&self, driver: &str) -> Result<Box<dyn DrbgEngine>> {
        let suite = drbg_suite(driver).ok_or(Error::unavailable("unknown rng driver"))?;
        Ok(Box::new(MockDrbg {
            suite,
            seeded: None,
            calls: 0,
            sequence_ok: true,
            broken: self.is_broken(driver),
        }))
    }

    fn kbkdf_hmac_sha512_ctr(&self, params: &KbkdfParams<'_>, out: &mut [u8]) -> Result<()> {
        if out.len() != params.out_len {
            return Err(Error::InvalidLength {
                context: "kdf output",
                expected: params.out_len,
                actual: out.len(),
            });
        }
        match kdf_lookup(params) {
            Some(tv) if !self.is_broken("kbkdf_hmac_sha512_ctr") => {
                out.copy_from_slice(tv.expected)
            }
            _ => garbage_fill(out, params.key_in.first().copied().unwrap_or(0)),
        }
        Ok(())
    }
}

/// Integrity checker with a fixed verdict and an invocation counter
pub struct MockIntegrity {
    fail: bool,
    calls: AtomicUsize,
}

impl MockIntegrity {
    /// A checker whose verdict is always pass
    pub fn passing() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// A checker whose verdict is always fail
    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `verify` ran
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IntegrityCheck for MockIntegrity {
    fn verify(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(Error::IntegrityMismatch {
                context: "module hmac tag mismatch",
            })
        } else {
            Ok(())
        }
    }
}
