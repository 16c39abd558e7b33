//! Lesamnta-LW Block Cipher
//!
//! A 256-bit block, 128-bit key cipher built from a single AES-like round
//! function `Q` on 32-bit words. The key schedule is a 4-word nonlinear shift
//! register; the data path is an 8-word shift register (four 2-word lanes)
//! with feedback through the step function `G`.
//!
//! Only encryption is needed by the hash, so no inverse is provided.

use crate::kernels::codec::{from_word, to_word};
use crate::kernels::constants::{KEY_WORDS, ROUNDS, ROUND_CONSTANTS, STATE_WORDS};
use crate::kernels::primitives::{mix_column, substitute};

/// Expanded key: one 32-bit round key per round.
pub type RoundKeys = [u32; ROUNDS];

// =============================================================================
// ROUND FUNCTIONS
// =============================================================================

/// Function Q: `SubBytes` on each byte of the word, then `MixColumns`.
#[inline]
pub fn q(x: u32) -> u32 {
    let [s0, s1, s2, s3] = from_word(x);
    to_word(mix_column([
        substitute(s0),
        substitute(s1),
        substitute(s2),
        substitute(s3),
    ]))
}

/// Function R: byte transposition between the two words.
///
/// `(s0 s1 s2 s3, s4 s5 s6 s7) -> (s4 s5 s2 s3, s0 s1 s6 s7)`, i.e. the upper
/// halves of the two words are swapped.
#[inline]
pub const fn r(x: [u32; 2]) -> [u32; 2] {
    const HI: u32 = 0xffff_0000;
    const LO: u32 = 0x0000_ffff;
    [(x[1] & HI) | (x[0] & LO), (x[0] & HI) | (x[1] & LO)]
}

/// Function G: key addition into the first word, Q on both words, then R.
#[inline]
pub fn g(key: u32, x: [u32; 2]) -> [u32; 2] {
    r([q(x[0] ^ key), q(x[1])])
}

// =============================================================================
// KEY SCHEDULE
// =============================================================================

/// Expand a 128-bit key into 64 round keys.
pub fn key_schedule(key: &[u32; KEY_WORDS]) -> RoundKeys {
    let mut round_keys = [0u32; ROUNDS];
    let [mut k0, mut k1, mut k2, mut k3] = *key;

    for (rk, &c) in round_keys.iter_mut().zip(ROUND_CONSTANTS.iter()) {
        *rk = k0;
        let t = q(c ^ k2) ^ k3;
        k3 = k2;
        k2 = k1;
        k1 = k0;
        k0 = t;
    }

    round_keys
}

// =============================================================================
// MESSAGE MIXING
// =============================================================================

/// One round of the data path.
///
/// Lane (4,5) goes through G, lane (6,7) is XORed into the result, and the
/// register shifts right by one lane with the result entering at the front.
#[inline]
pub fn mixing_round(block: &mut [u32; STATE_WORDS], rk: u32) {
    let [g0, g1] = g(rk, [block[4], block[5]]);
    let (t0, t1) = (g0 ^ block[6], g1 ^ block[7]);
    block.copy_within(0..6, 2);
    block[0] = t0;
    block[1] = t1;
}

/// Run all 64 rounds of the data path over the 8-word register in place.
pub fn message_mixing(block: &mut [u32; STATE_WORDS], round_keys: &RoundKeys) {
    for &rk in round_keys {
        mixing_round(block, rk);
    }
}

/// Encrypt one 256-bit block under a 128-bit key.
pub fn encrypt(key: &[u32; KEY_WORDS], plaintext: &[u32; STATE_WORDS]) -> [u32; STATE_WORDS] {
    let round_keys = key_schedule(key);
    let mut block = *plaintext;
    message_mixing(&mut block, &round_keys);
    block
}
