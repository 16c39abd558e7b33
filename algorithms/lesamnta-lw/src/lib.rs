#![cfg_attr(not(feature = "std"), no_std)]

//! # Lesamnta-LW
//!
//! AES-based 256-bit hash function for lightweight applications
//! (Hirose, Ideguchi, Kuwakado, Owada, Preneel, Yoshida; IEICE Trans. 2012).
//!
//! A 256-bit block cipher with a 128-bit key, driven by the AES S-box and
//! `MixColumns`, is iterated over 128-bit message blocks. Portable, `no_std`
//! and allocation free.

//! # Usage
//! ```rust
//! // 1. One-shot
//! let digest = lesamnta_lw::hash(b"abc");
//! println!("{:02x?}", digest);
//!
//! // 2. Verification
//! assert!(lesamnta_lw::verify(b"abc", &digest));
//!
//! // 3. Streaming
//! use lesamnta_lw::Hasher;
//!
//! let mut hasher = Hasher::init(256)?;
//! hasher.update(b"a");
//! hasher.update(b"bc");
//! assert_eq!(hasher.finalize(), digest);
//! # Ok::<(), lesamnta_lw::Error>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[doc(hidden)]
pub mod kernels; // Public for test/bench use only
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use kernels::constants::{BLOCK_SIZE, HASH_SIZE as DIGEST_SIZE, OUTPUT_BITS};
pub use oneshot::{hash, hash_bits, verify};
pub use streaming::LesamntaHasher as Hasher;
pub use types::{Error, Result};
