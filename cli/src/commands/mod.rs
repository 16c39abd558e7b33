//! CLI Commands
//!
//! All lesamnta-lw CLI commands organized as separate modules.

mod check;
mod hash;
mod vectors;

pub use check::check_mode;
pub use hash::hash_files;
pub use vectors::show_test_vectors;
