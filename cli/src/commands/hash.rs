//! Hash Command
//!
//! File hashing, one file per Rayon task.

use anyhow::{Context, Result};
use lesamnta_lw::Hasher;
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read buffer size for streaming file contents into the hasher.
const READ_BUFFER_SIZE: usize = 128 * 1024;

/// Stream everything from `reader` into a fresh hasher.
pub fn hash_reader<R: Read>(mut reader: R) -> std::io::Result<[u8; lesamnta_lw::DIGEST_SIZE]> {
    let mut hasher = Hasher::new();
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..n]);
    }

    Ok(hasher.finalize())
}

/// Hash a path; `-` is standard input.
pub fn hash_path(path: &Path) -> Result<String> {
    let digest = if path.as_os_str() == "-" {
        hash_reader(std::io::stdin().lock()).context("Failed to read standard input")?
    } else {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open: {}", path.display()))?;
        hash_reader(file).with_context(|| format!("Failed to read: {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), "hashed");
    Ok(hex::encode(digest))
}

/// Hash files in parallel and print `digest  path` lines in argument order.
pub fn hash_files(files: &[PathBuf]) -> Result<()> {
    tracing::debug!(count = files.len(), "hashing files");

    let results: Vec<(&PathBuf, Result<String>)> = files
        .par_iter()
        .map(|file_path| (file_path, hash_path(file_path)))
        .collect();

    let mut failed = 0usize;
    for (file_path, result) in results {
        match result {
            Ok(hex_hash) => println!("{}  {}", hex_hash, file_path.display()),
            Err(e) => {
                tracing::error!("{}: {:#}", file_path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}
