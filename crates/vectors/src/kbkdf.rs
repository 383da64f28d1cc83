//! Counter-mode KBKDF suite (NIST SP 800-108, HMAC-SHA512 PRF)

use crate::KdfVector;

/// Counter-mode KBKDF known answers, HMAC-SHA512 PRF (NIST SP 800-108)
pub const KBKDF_HMAC_SHA512_CTR_TV: &[KdfVector] = &[
    KdfVector {
        counter_bits: 32,
        key_in: &[
            0x87, 0xd1, 0x1b, 0xaa, 0x61, 0x9a, 0x0c, 0x2a, 0xda, 0x70, 0xc5, 0x6e,
            0xe8, 0x84, 0x1d, 0xc4, 0xe9, 0x7e, 0x82, 0xe7, 0xec, 0x9d, 0xc1, 0xbc,
            0x44, 0x27, 0x82, 0x61, 0x55, 0x79, 0xc2, 0x47, 0xcd, 0x55, 0xf9, 0xf5,
            0xb7, 0xe1, 0xba, 0x89, 0x51, 0xcb, 0xe5, 0x6f, 0x43, 0xe5, 0xce, 0x79,
            0xc8, 0x00, 0x31, 0x11, 0xb7, 0x95, 0x22, 0xce, 0x53, 0xf4, 0xb2, 0xb6,
            0xc2, 0xe6, 0x0b, 0xe0,
        ],
        label: &[
            0xa5, 0x55, 0xe1, 0x07, 0xf9, 0xf4, 0xfb, 0xd7, 0x59, 0xe6, 0xbb, 0x47,
            0xe3, 0xbe, 0x4a, 0xeb,
        ],
        context: &[
            0xa4, 0x69, 0xbc, 0xde, 0x7f, 0x4a, 0x35, 0xe9, 0x56, 0xed, 0xc9, 0xb5,
            0xa1, 0xbc, 0x5d, 0x3c,
        ],
        expected: &[
            0x92, 0x2e, 0x32, 0x6c, 0x49, 0x7d, 0x12, 0x80, 0x08, 0xfd, 0xa0, 0x8e,
            0xbc, 0xa5, 0x3b, 0x0c, 0x99, 0x74, 0xa3, 0x03, 0xb9, 0x52, 0xb5, 0x55,
            0x15, 0x9c, 0x5d, 0x1a, 0xbe, 0x1a, 0x1e, 0x96, 0xf6, 0x55, 0x6e, 0x26,
            0xaa, 0xaa, 0x35, 0x8f, 0xbf, 0xa9, 0x22, 0x95, 0xac, 0x64, 0xd0, 0x45,
            0xa9, 0x42, 0x5b, 0xcd, 0xee, 0xf9, 0xfa, 0x6d, 0x7b, 0x4e, 0x67, 0xfe,
            0xed, 0x7c, 0xc9, 0x17,
        ],
    },
    KdfVector {
        counter_bits: 32,
        key_in: &[
            0x19, 0x37, 0xb0, 0x02, 0x7d, 0xff, 0x16, 0x48, 0x5d, 0x8b, 0x6c, 0xd2,
            0xb7, 0x75, 0x20, 0xf0, 0xff, 0xcb, 0x03, 0xb3, 0xda, 0x98, 0xd2, 0xd7,
            0x4d, 0x11, 0xf1, 0x6b, 0xbf, 0x38, 0xc0, 0x7c, 0x4f, 0xb8, 0xd0, 0x95,
            0x83, 0xac, 0x03, 0x0d, 0x2e, 0x60, 0x8e, 0xaf, 0x26, 0x3c, 0xa4, 0xf8,
            0x1d, 0x6c, 0xa7, 0x08, 0x76, 0xbb, 0x84, 0x59, 0xc3, 0x36, 0x29, 0xc8,
            0x93, 0xd6, 0x6f, 0x6d,
        ],
        label: &[
            0x95, 0x5c, 0xd2, 0x15, 0xf2, 0x02, 0xa4, 0x56, 0xeb, 0x05, 0x3e, 0x83,
            0xcf, 0xb2, 0xe0, 0x3a, 0xdd, 0xb5, 0xad, 0x4d, 0x6f, 0x02, 0xb1, 0xbf,
        ],
        context: &[
            0xa4, 0x1e, 0x9d, 0x7a, 0x78, 0xdf, 0x65, 0x9c, 0x90, 0x39, 0xd0, 0xd1,
            0x2b, 0x87, 0xa7, 0x66,
        ],
        expected: &[
            0xf3, 0x2b, 0x8a, 0x32, 0x86, 0xda, 0x66, 0xab, 0x9b, 0x1b, 0x02, 0xd8,
            0x3a, 0x26, 0xab, 0xe3, 0x35, 0xa6, 0xdd, 0x60, 0x55, 0xc6, 0x4e, 0x8a,
            0xf6, 0xc3, 0xa7, 0x51, 0x3f, 0x00, 0x91, 0xd3,
        ],
    },
];
