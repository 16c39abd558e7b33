//! AES building blocks: `SubBytes` on a single byte and `MixColumns` on a
//! single 4-byte column.

use crate::kernels::constants::{GF_POLY, SBOX};

/// AES S-box lookup.
#[inline]
pub fn substitute(b: u8) -> u8 {
    SBOX[usize::from(b)]
}

/// GF(2^8) multiplication by 2.
///
/// Shift left; on carry out of bit 7 reduce with `GF_POLY`.
#[inline]
pub const fn mul02(b: u8) -> u8 {
    let (shifted, carry) = (b << 1, b & 0x80 != 0);
    if carry {
        shifted ^ GF_POLY
    } else {
        shifted
    }
}

/// GF(2^8) multiplication by 3.
#[inline]
pub const fn mul03(b: u8) -> u8 {
    mul02(b) ^ b
}

/// AES `MixColumns` on one column.
pub const fn mix_column(c: [u8; 4]) -> [u8; 4] {
    let [s0, s1, s2, s3] = c;
    [
        mul02(s0) ^ mul03(s1) ^ s2 ^ s3,
        s0 ^ mul02(s1) ^ mul03(s2) ^ s3,
        s0 ^ s1 ^ mul02(s2) ^ mul03(s3),
        mul03(s0) ^ s1 ^ s2 ^ mul02(s3),
    ]
}
