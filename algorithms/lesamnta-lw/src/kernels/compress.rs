//! Compression Function
//!
//! Matyas-Meyer-Oseas style wiring: the first half of the chaining value keys
//! the block cipher, the plaintext is the message block followed by the
//! second half of the chaining value, and the ciphertext becomes the next
//! chaining value.

use crate::kernels::cipher::encrypt;
use crate::kernels::constants::{BLOCK_WORDS, HASH_WORDS, KEY_WORDS, STATE_WORDS};

/// Absorb one 128-bit message block, returning the next chaining value.
pub fn compress(chain: &[u32; HASH_WORDS], block: &[u32; BLOCK_WORDS]) -> [u32; HASH_WORDS] {
    let mut key = [0u32; KEY_WORDS];
    key.copy_from_slice(&chain[..KEY_WORDS]);

    let mut plaintext = [0u32; STATE_WORDS];
    plaintext[..BLOCK_WORDS].copy_from_slice(block);
    plaintext[BLOCK_WORDS..].copy_from_slice(&chain[KEY_WORDS..]);

    encrypt(&key, &plaintext)
}
