//! # `PractRand` Stream Generator
//!
//! Writes an endless stream of Lesamnta-LW digests of an incrementing 64-bit
//! counter to stdout, for piping into `RNG_test stdin`.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Counter repeated to a fixed input size
    Fixed,
    /// Cycle the input size through 8, 15, 16 and 33 bytes
    Cyclic,
    /// Hash only the low `--bits` bits of the counter
    Bits,
}

#[derive(Parser)]
#[command(name = "lesamnta_lw_stream")]
#[command(about = "Emit Lesamnta-LW digests of a counter for statistical testing")]
struct Args {
    #[arg(value_enum, default_value_t = Mode::Fixed)]
    mode: Mode,

    /// Input size in bytes for fixed mode
    #[arg(long, default_value_t = 16)]
    size: usize,

    /// Message length in bits for bits mode (1..=64)
    #[arg(long, default_value_t = 61, value_parser = clap::value_parser!(u64).range(1..=64))]
    bits: u64,
}

fn counter_input(counter: u64, size: usize) -> Vec<u8> {
    let counter_bytes = counter.to_be_bytes();
    (0..size).map(|i| counter_bytes[i % 8]).collect()
}

/// Entry point for the `PractRand` stream generator.
fn main() -> Result<()> {
    let args = Args::parse();

    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    let mut counter: u64 = 0;

    loop {
        let digest = match args.mode {
            Mode::Fixed => lesamnta_lw::hash(&counter_input(counter, args.size)),
            Mode::Cyclic => {
                let size = match counter % 4 {
                    0 => 8,
                    1 => 15,
                    2 => 16,
                    _ => 33,
                };
                lesamnta_lw::hash(&counter_input(counter, size))
            }
            Mode::Bits => {
                // Left-align the low `bits` bits so they are the first bits hashed.
                let aligned = counter << (64 - args.bits);
                lesamnta_lw::hash_bits(
                    lesamnta_lw::OUTPUT_BITS,
                    &aligned.to_be_bytes(),
                    args.bits,
                )?
            }
        };

        if handle.write_all(&digest).is_err() {
            break;
        }

        counter = counter.wrapping_add(1);
    }

    Ok(())
}
