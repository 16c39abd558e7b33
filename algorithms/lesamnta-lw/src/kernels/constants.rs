//! Lesamnta-LW Constants
//!
//! Parameters, S-box, round constants and initial value as published in
//! Hirose et al., "An AES based 256-bit hash function for lightweight
//! applications: Lesamnta-LW", IEICE Trans. Fundamentals, vol. E95-A, no. 1,
//! 2012, p. 97.

// =============================================================================
// HASH PARAMETERS
// =============================================================================

/// Digest length in bits. Lesamnta-LW defines no other output length.
pub const OUTPUT_BITS: usize = 256;

/// Digest length in bytes.
pub const HASH_SIZE: usize = OUTPUT_BITS / 8;

/// Chaining value length in 32-bit words.
pub const HASH_WORDS: usize = OUTPUT_BITS / 32;

/// Message block length in bits.
pub const BLOCK_BITS: usize = 128;

/// Message block length in bytes.
pub const BLOCK_SIZE: usize = BLOCK_BITS / 8;

/// Message block length in 32-bit words.
pub const BLOCK_WORDS: usize = BLOCK_BITS / 32;

// =============================================================================
// BLOCK CIPHER PARAMETERS
// =============================================================================

/// Number of rounds of the key schedule and of the message mixing.
pub const ROUNDS: usize = 64;

/// Block cipher key length in 32-bit words (128 bits).
pub const KEY_WORDS: usize = 4;

/// Block cipher state length in 32-bit words (256 bits).
pub const STATE_WORDS: usize = 8;

// =============================================================================
// INITIAL VALUE
// =============================================================================

/// Initial chaining value: every word encodes the output length.
pub const INITIAL_VALUE: [u32; HASH_WORDS] = [0x0000_0256; HASH_WORDS];

// =============================================================================
// AES S-BOX
// =============================================================================

/// AES encryption S-box.
#[rustfmt::skip]
pub static SBOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

/// Reduction constant for doubling in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
pub const GF_POLY: u8 = 0x1b;

// =============================================================================
// ROUND CONSTANTS
// =============================================================================

/// Key schedule round constants, one per round.
#[rustfmt::skip]
pub static ROUND_CONSTANTS: [u32; ROUNDS] = [
    0xa432_337f, 0x945e_1f8f, 0x9253_9a11, 0x24b9_0062,
    0x6971_c64c, 0xd6e3_f449, 0x2c2f_0da9, 0x3376_9295,
    0xeb50_6df2, 0x708c_ebfe, 0xb83a_b7bf, 0x97df_0f17,
    0x9223_b802, 0x7fa2_9140, 0x0ff4_5228, 0x01fe_8a45,
    0xed01_6ee8, 0x1da0_2ddd, 0xee8a_ba1b, 0x46c4_c223,
    0x53cd_0d24, 0xd1b4_6d24, 0xc1fb_4124, 0xc3f2_a4a4,
    0xc3b3_9814, 0xc3bb_bf82, 0x7591_91b0, 0x0eb2_3236,
    0xb7fd_6c86, 0xa0d4_8750, 0x141a_90ea, 0x6f65_b45d,
    0xe0d2_092b, 0x470f_d445, 0xe5df_4528, 0x1cbb_e8a5,
    0xeea9_c2b4, 0xc618_f4d6, 0xaee8_345a, 0x783b_e0cb,
    0x5412_e979, 0x3c71_2e0f, 0x8756_7c21, 0x2619_bca4,
    0xdf0e_fb14, 0xc02c_13e2, 0x75e3_643c, 0xd571_a007,
    0x9a76_6de0, 0x134e_cdbc, 0xd9a4_1537, 0x9bec_db46,
    0xa556_b1a8, 0x14aa_d635, 0xefab_e566, 0xabde_566c,
    0xceb6_064d, 0xf4e8_7f69, 0x286e_7ccd, 0xe833_7039,
    0x2bf5_1d27, 0x85a6_fa44, 0xcb79_13c8, 0x196f_2279,
];
