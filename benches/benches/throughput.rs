//! Lesamnta-LW Criterion Benchmark
//!
//! Latency and throughput of the one-shot, streaming and bit-granular paths.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Short messages: sensor readings, identifiers, tags.
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (0, "0B"),
        (3, "3B"),
        (15, "15B"),
        (16, "16B"),
        (32, "32B"),
        (64, "64B"),
        (256, "256B"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| lesamnta_lw::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: MESSAGES
// =============================================================================

/// Bulk throughput; one compression per 16-byte block.
fn bench_messages(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Messages");
    group.sample_size(50);

    let sizes = [
        (KB, "1KB"),
        (4 * KB, "4KB"),
        (16 * KB, "16KB"),
        (64 * KB, "64KB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| lesamnta_lw::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Incremental updates with chunk sizes on and off the block boundary.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");
    group.sample_size(50);

    let test_cases = [
        (16 * KB, 1, "16KB-1B-chunks"),
        (16 * KB, 7, "16KB-7B-chunks"),
        (16 * KB, 16, "16KB-16B-chunks"),
        (16 * KB, KB, "16KB-1KB-chunks"),
    ];

    for (total_size, chunk_size, name) in test_cases {
        let input = random_input(total_size);
        group.throughput(Throughput::Bytes(total_size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(input, chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut hasher = lesamnta_lw::Hasher::new();
                    for chunk in data.chunks(*chunk_sz) {
                        hasher.update(black_box(chunk));
                    }
                    hasher.finalize()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: BIT-GRANULAR INPUT
// =============================================================================

/// Cost of a misaligned buffer: one leading bit shifts every later byte.
fn bench_bit_granular(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Bit-Granular");

    let size = 4 * KB;
    let input = random_input(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("aligned", |b| {
        b.iter(|| {
            let mut hasher = lesamnta_lw::Hasher::new();
            hasher.update(black_box(&input));
            hasher.finalize()
        })
    });

    group.bench_function("misaligned-by-1-bit", |b| {
        b.iter(|| {
            let mut hasher = lesamnta_lw::Hasher::new();
            hasher.update_bits(&[0x80], 1);
            hasher.update(black_box(&input));
            hasher.finalize()
        })
    });

    let bit_len = (size as u64) * 8 - 3;
    group.bench_function("hash-bits", |b| {
        b.iter(|| lesamnta_lw::hash_bits(256, black_box(&input), bit_len).unwrap())
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 5: VERIFICATION
// =============================================================================

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Verify");

    let input = random_input(KB);
    let digest = lesamnta_lw::hash(&input);
    group.throughput(Throughput::Bytes(KB as u64));

    group.bench_function("verify", |b| {
        b.iter(|| lesamnta_lw::verify(black_box(&input), black_box(&digest)))
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_messages,
    bench_streaming,
    bench_bit_granular,
    bench_verify,
);
criterion_main!(benches);
