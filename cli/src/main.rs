//! Lesamnta-LW CLI
//!
//! Hash files with the Lesamnta-LW 256-bit hash function.

mod commands;
mod logging;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{check_mode, hash_files, show_test_vectors};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "lesamnta-lw")]
#[command(about = "AES-based 256-bit hash function for lightweight applications", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash ("-" reads standard input)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Print the reference test vectors and exit
    #[arg(long, alias = "testVector")]
    test_vector: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.test_vector {
        show_test_vectors();
        return Ok(());
    }

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: lesamnta-lw [FILE]... or lesamnta-lw --help");
                std::process::exit(1);
            }

            hash_files(&cli.files)?;
        }
    }

    Ok(())
}
