//! Comparison Benchmark
//!
//! Lesamnta-LW against SHA-256 and BLAKE3 on identical inputs. The
//! lightweight design trades speed for a small state, so expect it well behind
//! both.

#![allow(missing_docs)]
#![allow(clippy::pedantic, clippy::nursery)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use sha2::Digest;
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hash Comparison");

    // Scenarios:
    // - Tiny (7B): Padding and finalization dominate
    // - Small (64B): A few blocks
    // - Medium (8KB): Steady-state compression
    let sizes = [7, 64, 8 * 1024];

    for size in sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("Lesamnta-LW - {size} bytes"), |b| {
            b.iter(|| lesamnta_lw::hash(black_box(&input)));
        });

        group.bench_function(format!("SHA-256 - {size} bytes"), |b| {
            b.iter(|| sha2::Sha256::digest(black_box(&input)));
        });

        group.bench_function(format!("BLAKE3 - {size} bytes"), |b| {
            b.iter(|| blake3::hash(black_box(&input)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
