//! Lesamnta-LW Kernels
//!
//! Portable word-oriented implementation of the block cipher and the
//! compression function. Everything here is pure and allocation free.

pub mod cipher;
pub mod codec;
pub mod compress;
pub mod constants;
pub mod primitives;
