//! Public API Layer
//!
//! One-shot hashing, bit-length hashing and constant-time verification.

use crate::kernels::constants::HASH_SIZE;
use crate::streaming::LesamntaHasher;
use crate::types::Result;
use subtle::ConstantTimeEq;

// =============================================================================
// HASHING
// =============================================================================

/// Compute the Lesamnta-LW digest of a byte string.
///
/// # Example
/// ```rust
/// let hash = lesamnta_lw::hash(b"abc");
/// assert_eq!(hash[..4], [0xab, 0x32, 0xca, 0x45]);
/// ```
#[must_use]
pub fn hash(input: &[u8]) -> [u8; HASH_SIZE] {
    let mut hasher = LesamntaHasher::new();
    hasher.update(input);
    hasher.finalize()
}

/// Compute the digest of the first `bit_len` bits of `data`.
///
/// `output_bits` states the requested digest length; only 256 is defined.
///
/// # Errors
/// Returns [`Error::UnsupportedOutputLength`](crate::Error::UnsupportedOutputLength)
/// if `output_bits != 256`.
///
/// # Panics
/// Panics if `bit_len` exceeds `8 * data.len()`.
///
/// # Example
/// ```rust
/// use lesamnta_lw::{hash, hash_bits, Error};
///
/// assert_eq!(hash_bits(256, b"abc", 24)?, hash(b"abc"));
/// assert_eq!(hash_bits(512, b"abc", 24), Err(Error::UnsupportedOutputLength(512)));
/// # Ok::<(), lesamnta_lw::Error>(())
/// ```
pub fn hash_bits(output_bits: usize, data: &[u8], bit_len: u64) -> Result<[u8; HASH_SIZE]> {
    let mut hasher = LesamntaHasher::init(output_bits)?;
    hasher.update_bits(data, bit_len);
    Ok(hasher.finalize())
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify a digest in constant time.
///
/// # Example
/// ```rust
/// let data = b"firmware image";
/// let digest = lesamnta_lw::hash(data);
/// assert!(lesamnta_lw::verify(data, &digest));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &[u8; HASH_SIZE]) -> bool {
    let computed = hash(input);
    computed.ct_eq(expected).into()
}
