//! Benchmarks for Pontifex cipher operations.
//!
//! Measures passphrase keying, a single round, keystream generation and
//! full encryption across message lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pontifex::deck::Deck;
use pontifex::keystream::Keystream;
use pontifex::round::round;
use pontifex::trace::Silent;
use pontifex::Pontifex;

/// Passphrase used consistently across all benchmarks.
const BENCH_PASSPHRASE: &str = "CRYPTONOMICON";

/// Benchmarks keying a fresh deck from the passphrase.
fn bench_keying(c: &mut Criterion) {
    c.bench_function("keying", |b| {
        b.iter(|| Pontifex::new(black_box(BENCH_PASSPHRASE)));
    });
}

/// Benchmarks one round on a deck that keeps advancing between iterations.
fn bench_round(c: &mut Criterion) {
    let mut deck = Deck::new();
    c.bench_function("round", |b| {
        b.iter(|| round(black_box(&mut deck), &mut Silent));
    });
}

/// Benchmarks single-letter keystream throughput.
fn bench_keystream(c: &mut Criterion) {
    let mut stream = Keystream::new(*Pontifex::new(BENCH_PASSPHRASE).keyed_deck());

    let mut group = c.benchmark_group("keystream");
    group.throughput(Throughput::Elements(1));
    group.bench_function("next_letter", |b| {
        b.iter(|| black_box(stream.next_letter()));
    });
    group.finish();
}

/// Benchmarks `encrypt()` including keying across message lengths.
fn bench_encrypt_lengths(c: &mut Criterion) {
    let lengths: &[usize] = &[10, 100, 1000];

    let mut group = c.benchmark_group("encrypt");
    for &len in lengths {
        let message = "ATTACKATDAWN".repeat(len / 12 + 1)[..len].to_string();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &message, |b, message| {
            b.iter(|| pontifex::encrypt(black_box(message), BENCH_PASSPHRASE));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_keying,
    bench_round,
    bench_keystream,
    bench_encrypt_lengths,
);
criterion_main!(benches);
