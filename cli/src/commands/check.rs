//! Check Command
//!
//! Verify checksums from file (like sha256sum -c).

use super::hash::hash_path;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One parsed `digest  filename` line.
#[derive(Debug, PartialEq, Eq)]
pub struct ChecksumLine<'a> {
    pub expected: &'a str,
    pub path: &'a str,
}

/// Parse a checksum line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Option<Result<ChecksumLine<'_>, &str>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    // Format: "hash  filename" (two spaces)
    Some(match line.split_once("  ") {
        Some((expected, path)) => Ok(ChecksumLine {
            expected: expected.trim(),
            path: path.trim(),
        }),
        None => Err(line),
    })
}

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &PathBuf) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let entry = match parse_line(&line) {
            None => continue,
            Some(Ok(entry)) => entry,
            Some(Err(bad)) => {
                tracing::warn!("Invalid format: {bad}");
                continue;
            }
        };
        total += 1;

        match hash_path(Path::new(entry.path)) {
            Ok(actual) if actual.eq_ignore_ascii_case(entry.expected) => {
                println!("{}: OK", entry.path);
            }
            Ok(_) => {
                println!("{}: FAILED", entry.path);
                failed += 1;
            }
            Err(e) => {
                println!("{}: FAILED ({:#})", entry.path, e);
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
        std::process::exit(1);
    }

    Ok(())
}
