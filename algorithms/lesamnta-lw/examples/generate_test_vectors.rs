//! Generator for Lesamnta-LW test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Covers the two published messages, empty input, block boundaries and
//! bit-granular lengths.
#![allow(clippy::unwrap_used)]
use serde_json::{json, Value};

fn vector(name: &str, input: &[u8], bits: u64) -> Value {
    json!({
        "name": name,
        "input": hex::encode(input),
        "bits": bits,
        "hash": hex::encode(lesamnta_lw::hash_bits(256, input, bits).unwrap())
    })
}

fn main() {
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. PUBLISHED MESSAGES
    // =========================================================================

    vectors.push(vector("reference_abc", b"abc", 24));
    vectors.push(vector("reference_32_L", &[b'L'; 32], 256));

    // =========================================================================
    // 2. BOUNDARY CONDITIONS
    // =========================================================================

    // Padding marker merged into the length block
    vectors.push(vector("empty", b"", 0));
    vectors.push(vector("exact_block_zero", &[0u8; 16], 128));

    // One byte spills into a second data block
    vectors.push(vector("block_plus_one", &[b'A'; 17], 136));

    // Many blocks; too long to inline, so the test expands the marker
    let seq: Vec<u8> = (0..1000u32).map(|i| (i % 256) as u8).collect();
    let mut long = vector("sequence_1000", &seq, 8000);
    long["input"] = json!("SEQ_1000");
    vectors.push(long);

    vectors.push(vector(
        "quick_brown_fox",
        b"The quick brown fox jumps over the lazy dog",
        344,
    ));

    // =========================================================================
    // 3. BIT-GRANULAR LENGTHS
    // =========================================================================

    vectors.push(vector("three_bits", &[0xa0], 3));
    let mut almost_block = [0xffu8; 16];
    almost_block[15] = 0xfe;
    vectors.push(vector("block_minus_one_bit", &almost_block, 127));

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
