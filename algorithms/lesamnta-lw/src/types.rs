//! Shared types used across the Lesamnta-LW library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::OUTPUT_BITS;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors reported by the Lesamnta-LW API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested digest length is not 256 bits.
    UnsupportedOutputLength(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOutputLength(bits) => write!(
                f,
                "unsupported output length: {bits} bits (Lesamnta-LW only defines {OUTPUT_BITS})"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

/// Result alias for fallible Lesamnta-LW operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Reject any output length other than 256 bits.
pub(crate) const fn check_output_bits(bits: usize) -> Result<()> {
    if bits == OUTPUT_BITS {
        Ok(())
    } else {
        Err(Error::UnsupportedOutputLength(bits))
    }
}
