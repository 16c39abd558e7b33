//! Streaming Hasher
//!
//! Merkle-Damgard iteration of the compression function over 128-bit blocks.
//! Input may arrive in any number of pieces, split at arbitrary bit
//! positions; the digest only depends on the concatenated bit string.

use core::fmt;

use crate::kernels::codec::{block_to_words, words_to_digest};
use crate::kernels::compress::compress;
use crate::kernels::constants::{
    BLOCK_BITS, BLOCK_SIZE, BLOCK_WORDS, HASH_SIZE, HASH_WORDS, INITIAL_VALUE,
};
use crate::types::{check_output_bits, Result};

#[cfg(feature = "digest-trait")]
use digest::typenum::U32;
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, FixedOutputReset, HashMarker, OutputSizeUser, Reset, Update};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Incremental Lesamnta-LW hasher.
///
/// Invariant between calls: fewer than 128 bits are buffered and every buffer
/// bit past `buffered_bits` is zero.
#[derive(Clone)]
pub struct LesamntaHasher {
    /// Chaining value
    chain: [u32; HASH_WORDS],
    /// Current partial block, MSB-first
    buffer: [u8; BLOCK_SIZE],
    /// Valid bits in `buffer` (always < `BLOCK_BITS`)
    buffered_bits: usize,
    /// Total message bits absorbed (mod 2^64)
    total_bits: u64,
}

impl LesamntaHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a new hasher producing the 256-bit digest.
    pub const fn new() -> Self {
        Self {
            chain: INITIAL_VALUE,
            buffer: [0; BLOCK_SIZE],
            buffered_bits: 0,
            total_bits: 0,
        }
    }

    /// Create a new hasher for an explicitly requested digest length.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedOutputLength`](crate::Error::UnsupportedOutputLength)
    /// unless `output_bits` is 256.
    pub const fn init(output_bits: usize) -> Result<Self> {
        match check_output_bits(output_bits) {
            Ok(()) => Ok(Self::new()),
            Err(e) => Err(e),
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Absorb whole bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.absorb_bytes(data);
        self.total_bits = self.total_bits.wrapping_add(bytes_to_bits(data.len()));
    }

    /// Absorb the first `bit_len` bits of `data`, most significant bit first.
    ///
    /// Bits of a trailing partial byte beyond `bit_len` are ignored.
    ///
    /// # Panics
    /// Panics if `bit_len` exceeds `8 * data.len()`.
    #[allow(clippy::cast_possible_truncation)] // bounded by data.len()
    pub fn update_bits(&mut self, data: &[u8], bit_len: u64) {
        assert!(
            bit_len <= bytes_to_bits(data.len()),
            "bit length {bit_len} exceeds the {} bytes supplied",
            data.len()
        );

        let full = (bit_len / 8) as usize;
        let tail = (bit_len % 8) as usize;

        self.absorb_bytes(&data[..full]);
        if tail != 0 {
            self.absorb_bits(data[full] & (0xff << (8 - tail)), tail);
        }
        self.total_bits = self.total_bits.wrapping_add(bit_len);
    }

    /// Finalize and return the digest.
    #[must_use]
    pub fn finalize(mut self) -> [u8; HASH_SIZE] {
        self.finalize_words();
        words_to_digest(&self.chain)
    }

    /// Finalize, return the digest and reset the hasher for reuse.
    pub fn finalize_reset(&mut self) -> [u8; HASH_SIZE] {
        self.finalize_words();
        let out = words_to_digest(&self.chain);
        self.reset();
        out
    }

    /// Reset hasher for reuse.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    /// Compress the buffered block and clear the buffer.
    fn compress_buffer(&mut self) {
        self.chain = compress(&self.chain, &block_to_words(&self.buffer));
        self.buffer = [0; BLOCK_SIZE];
        self.buffered_bits = 0;
    }

    fn absorb_bytes(&mut self, mut data: &[u8]) {
        if self.buffered_bits % 8 != 0 {
            // A previous fractional update left the buffer misaligned.
            for &b in data {
                self.absorb_bits(b, 8);
            }
            return;
        }

        let pos = self.buffered_bits / 8;
        if pos > 0 {
            let take = (BLOCK_SIZE - pos).min(data.len());
            self.buffer[pos..pos + take].copy_from_slice(&data[..take]);
            self.buffered_bits += take * 8;
            data = &data[take..];
            if self.buffered_bits < BLOCK_BITS {
                return;
            }
            self.compress_buffer();
        }

        // Fast path: whole blocks straight from the input
        let (blocks, remainder) = data.as_chunks::<BLOCK_SIZE>();
        for block in blocks {
            self.chain = compress(&self.chain, &block_to_words(block));
        }

        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffered_bits = remainder.len() * 8;
    }

    /// Append `n` (1..=8) bits held MSB-aligned in `bits`; lower bits are zero.
    fn absorb_bits(&mut self, bits: u8, n: usize) {
        let idx = self.buffered_bits / 8;
        let off = self.buffered_bits % 8;
        let spill = (off + n).saturating_sub(8);

        self.buffer[idx] |= bits >> off;
        self.buffered_bits += n;

        if self.buffered_bits >= BLOCK_BITS {
            self.compress_buffer();
            if spill > 0 {
                self.buffer[0] = bits << (8 - off);
                self.buffered_bits = spill;
            }
        } else if spill > 0 {
            self.buffer[idx + 1] = bits << (8 - off);
        }
    }

    /// Apply the padding and length blocks to the chaining value.
    #[allow(clippy::cast_possible_truncation)] // splitting the counter into words
    fn finalize_words(&mut self) {
        let mut length_block = [0u32; BLOCK_WORDS];

        if self.buffered_bits == 0 {
            // Marker bit shares the block with the length.
            length_block[0] = 0x8000_0000;
        } else {
            let pos = self.buffered_bits;
            self.buffer[pos / 8] |= 0x80 >> (pos % 8);
            self.compress_buffer();
        }

        length_block[2] = (self.total_bits >> 32) as u32;
        length_block[3] = self.total_bits as u32;
        self.chain = compress(&self.chain, &length_block);
    }
}

/// Byte count to bit count, wrapping like the 64-bit length counter.
#[inline]
const fn bytes_to_bits(len: usize) -> u64 {
    (len as u64).wrapping_mul(8)
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for LesamntaHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LesamntaHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LesamntaHasher")
            .field("total_bits", &self.total_bits)
            .field("buffered_bits", &self.buffered_bits)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for LesamntaHasher {
    type OutputSize = U32;
}

#[cfg(feature = "digest-trait")]
impl Update for LesamntaHasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for LesamntaHasher {
    fn finalize_into(self, out: &mut Output<Self>) {
        let res = self.finalize();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutputReset for LesamntaHasher {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        let res = self.finalize_reset();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for LesamntaHasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for LesamntaHasher {}
