//! Compiled-in algorithm registry
//!
//! A closed table of every algorithm variant the build can self-test: the
//! provider driver name, the vector suite to run against it, and for DRBGs
//! whether the driver operates with prediction resistance. Generic and
//! hardware-accelerated backends are separate entries tested
//! independently; the `accel` feature compiles the accelerated rows in,
//! the family features compile whole groups out.
//!
//! Iteration order is fixed and operator-visible: block ciphers, then
//! AEAD, then hash/HMAC, then DRBG, then KDF, generic rows before their
//! accelerated doubles within each family.

use fipspost_vectors as tv;

/// Which family runner exercises an entry, together with its vectors
#[derive(Debug, Clone, Copy)]
pub enum Suite {
    /// Symmetric block cipher, encrypt and decrypt passes
    Cipher(&'static [tv::CipherVector]),
    /// AEAD, seal and open passes
    Aead(&'static [tv::AeadVector]),
    /// Hash or HMAC digest pass
    Hash(&'static [tv::HashVector]),
    /// DRBG two-call generate sequence
    Drbg {
        /// Vector table
        vecs: &'static [tv::DrbgVector],
        /// Whether the driver reseeds from fresh entropy before every
        /// request
        pr: bool,
    },
    /// Counter-mode KBKDF, direct function call
    Kdf(&'static [tv::KdfVector]),
}

/// One self-testable algorithm variant
#[derive(Debug, Clone, Copy)]
pub struct Algorithm {
    /// Provider registry key for this backend
    pub driver: &'static str,
    /// Vector suite and family dispatch
    pub suite: Suite,
}

#[cfg(feature = "block")]
const BLOCK_GENERIC: &[Algorithm] = &[
    Algorithm {
        driver: "cbc(aes-generic)",
        suite: Suite::Cipher(tv::AES_CBC_TV),
    },
    Algorithm {
        driver: "ecb(aes-generic)",
        suite: Suite::Cipher(tv::AES_ECB_TV),
    },
];

#[cfg(feature = "aead")]
const AEAD_GENERIC: &[Algorithm] = &[Algorithm {
    driver: "gcm_base(ctr(aes-generic),ghash-generic)",
    suite: Suite::Aead(tv::AES_GCM_TV),
}];

#[cfg(all(feature = "block", feature = "accel"))]
const BLOCK_ACCEL: &[Algorithm] = &[
    Algorithm {
        driver: "ecb(aes-ce)",
        suite: Suite::Cipher(tv::AES_ECB_TV),
    },
    Algorithm {
        driver: "cbc(aes-ce)",
        suite: Suite::Cipher(tv::AES_CBC_TV),
    },
];

#[cfg(all(feature = "aead", feature = "accel"))]
const AEAD_ACCEL: &[Algorithm] = &[Algorithm {
    driver: "gcm_base(ctr(aes-ce),ghash-generic)",
    suite: Suite::Aead(tv::AES_GCM_TV),
}];

#[cfg(feature = "hash")]
const SHA1_GENERIC: &[Algorithm] = &[
    Algorithm {
        driver: "sha1-generic",
        suite: Suite::Hash(tv::SHA1_TV),
    },
    Algorithm {
        driver: "hmac(sha1-generic)",
        suite: Suite::Hash(tv::HMAC_SHA1_TV),
    },
];

#[cfg(all(feature = "hash", feature = "accel"))]
const SHA1_ACCEL: &[Algorithm] = &[
    Algorithm {
        driver: "sha1-ce",
        suite: Suite::Hash(tv::SHA1_TV),
    },
    Algorithm {
        driver: "hmac(sha1-ce)",
        suite: Suite::Hash(tv::HMAC_SHA1_TV),
    },
];

#[cfg(feature = "hash")]
const SHA2_GENERIC: &[Algorithm] = &[
    Algorithm {
        driver: "sha224-generic",
        suite: Suite::Hash(tv::SHA224_TV),
    },
    Algorithm {
        driver: "sha256-generic",
        suite: Suite::Hash(tv::SHA256_TV),
    },
    Algorithm {
        driver: "hmac(sha224-generic)",
        suite: Suite::Hash(tv::HMAC_SHA224_TV),
    },
    Algorithm {
        driver: "hmac(sha256-generic)",
        suite: Suite::Hash(tv::HMAC_SHA256_TV),
    },
];

#[cfg(all(feature = "hash", feature = "accel"))]
const SHA2_ACCEL: &[Algorithm] = &[
    Algorithm {
        driver: "sha224-ce",
        suite: Suite::Hash(tv::SHA224_TV),
    },
    Algorithm {
        driver: "sha256-ce",
        suite: Suite::Hash(tv::SHA256_TV),
    },
    Algorithm {
        driver: "hmac(sha224-ce)",
        suite: Suite::Hash(tv::HMAC_SHA224_TV),
    },
    Algorithm {
        driver: "hmac(sha256-ce)",
        suite: Suite::Hash(tv::HMAC_SHA256_TV),
    },
];

#[cfg(feature = "hash")]
const SHA512_GENERIC: &[Algorithm] = &[
    Algorithm {
        driver: "sha384-generic",
        suite: Suite::Hash(tv::SHA384_TV),
    },
    Algorithm {
        driver: "sha512-generic",
        suite: Suite::Hash(tv::SHA512_TV),
    },
    Algorithm {
        driver: "hmac(sha384-generic)",
        suite: Suite::Hash(tv::HMAC_SHA384_TV),
    },
    Algorithm {
        driver: "hmac(sha512-generic)",
        suite: Suite::Hash(tv::HMAC_SHA512_TV),
    },
];

#[cfg(feature = "drbg")]
const DRBG: &[Algorithm] = &[
    Algorithm {
        driver: "drbg_nopr_hmac_sha256",
        suite: Suite::Drbg {
            vecs: tv::DRBG_NOPR_HMAC_SHA256_TV,
            pr: false,
        },
    },
    Algorithm {
        driver: "drbg_pr_hmac_sha256",
        suite: Suite::Drbg {
            vecs: tv::DRBG_PR_HMAC_SHA256_TV,
            pr: true,
        },
    },
];

#[cfg(feature = "kdf")]
const KDF: &[Algorithm] = &[Algorithm {
    driver: "kbkdf_hmac_sha512_ctr",
    suite: Suite::Kdf(tv::KBKDF_HMAC_SHA512_CTR_TV),
}];

/// Every algorithm variant compiled into this build, in test order
pub fn algorithms() -> impl Iterator<Item = &'static Algorithm> {
    let mut groups: Vec<&'static [Algorithm]> = Vec::new();
    #[cfg(feature = "block")]
    groups.push(BLOCK_GENERIC);
    #[cfg(feature = "aead")]
    groups.push(AEAD_GENERIC);
    #[cfg(all(feature = "block", feature = "accel"))]
    groups.push(BLOCK_ACCEL);
    #[cfg(all(feature = "aead", feature = "accel"))]
    groups.push(AEAD_ACCEL);
    #[cfg(feature = "hash")]
    groups.push(SHA1_GENERIC);
    #[cfg(all(feature = "hash", feature = "accel"))]
    groups.push(SHA1_ACCEL);
    #[cfg(feature = "hash")]
    groups.push(SHA2_GENERIC);
    #[cfg(all(feature = "hash", feature = "accel"))]
    groups.push(SHA2_ACCEL);
    #[cfg(feature = "hash")]
    groups.push(SHA512_GENERIC);
    #[cfg(feature = "drbg")]
    groups.push(DRBG);
    #[cfg(feature = "kdf")]
    groups.push(KDF);
    groups.into_iter().flatten()
}
