//! Big-endian byte/word conversions.
//!
//! Lesamnta-LW is specified on 32-bit words with the most significant byte
//! first, both for message blocks and for the serialized digest.

use crate::kernels::constants::{BLOCK_SIZE, BLOCK_WORDS, HASH_SIZE, HASH_WORDS};

/// Pack 4 bytes (most significant first) into one word.
#[inline]
pub const fn to_word(bytes: [u8; 4]) -> u32 {
    u32::from_be_bytes(bytes)
}

/// Unpack one word into 4 bytes (most significant first).
#[inline]
pub const fn from_word(word: u32) -> [u8; 4] {
    word.to_be_bytes()
}

/// Load a 16-byte message block as 4 words.
pub fn block_to_words(block: &[u8; BLOCK_SIZE]) -> [u32; BLOCK_WORDS] {
    let mut words = [0u32; BLOCK_WORDS];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = to_word([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

/// Serialize a chaining value into the 32-byte digest.
pub fn words_to_digest(words: &[u32; HASH_WORDS]) -> [u8; HASH_SIZE] {
    let mut out = [0u8; HASH_SIZE];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&from_word(*word));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_byte_order() {
        assert_eq!(to_word([0x01, 0x23, 0x45, 0x67]), 0x0123_4567);
        assert_eq!(from_word(0x89ab_cdef), [0x89, 0xab, 0xcd, 0xef]);
    }

    #[test]
    fn test_block_to_words() {
        let mut block = [0u8; BLOCK_SIZE];
        block[0] = 0x80;
        block[7] = 0x01;
        block[15] = 0xff;
        assert_eq!(block_to_words(&block), [0x8000_0000, 0x0000_0001, 0, 0x0000_00ff]);
    }

    #[test]
    fn test_digest_layout() {
        let words = [0x0000_0256, 1, 2, 3, 4, 5, 6, 0xdead_beef];
        let digest = words_to_digest(&words);
        assert_eq!(&digest[..4], &[0x00, 0x00, 0x02, 0x56]);
        assert_eq!(&digest[28..], &[0xde, 0xad, 0xbe, 0xef]);
    }
}
