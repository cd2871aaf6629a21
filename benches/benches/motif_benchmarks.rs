//! Benchmarks for ori-core using Criterion.
//!
//! Run with: cargo bench -p ori-benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ori_benchmarks::synthetic_genome;
use ori_core::*;

/// Sparse table versus dense array for growing k.
fn benchmark_frequency_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency_counting");
    let genome = synthetic_genome(100_000, 7);
    let limits = Limits::default();
    group.throughput(Throughput::Bytes(genome.len() as u64));

    for k in [4, 8, 11] {
        group.bench_with_input(BenchmarkId::new("table", k), &k, |b, &k| {
            b.iter(|| black_box(frequency_table(black_box(&genome), k)))
        });
        group.bench_with_input(BenchmarkId::new("array", k), &k, |b, &k| {
            b.iter(|| black_box(frequency_array(black_box(&genome), k, &limits)))
        });
    }

    group.finish();
}

/// The three exact frequent-word strategies on the same text.
fn benchmark_frequent_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequent_words");
    let genome = synthetic_genome(20_000, 11);
    let limits = Limits::default();
    let k = 9;

    group.bench_function("table", |b| b.iter(|| black_box(frequent_words(&genome, k))));
    group.bench_function("array", |b| {
        b.iter(|| black_box(faster_frequent_words(&genome, k, &limits)))
    });
    group.bench_function("sorting", |b| {
        b.iter(|| black_box(frequent_words_by_sorting(&genome, k)))
    });

    group.finish();
}

/// Neighborhood generation for growing d.
fn benchmark_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");
    let pattern = Sequence::new("ACGTTGCATG").unwrap();
    let limits = Limits::default();

    for d in [1, 2, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(d), &d, |b, &d| {
            b.iter(|| black_box(neighbors(black_box(&pattern), d, &limits)))
        });
    }

    group.finish();
}

/// Mismatch-tolerant frequent words on each strand policy.
fn benchmark_frequent_words_with_mismatches(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequent_words_with_mismatches");
    let genome = synthetic_genome(2_000, 3);
    let limits = Limits::default();

    for strand in [Strand::Forward, Strand::Both] {
        group.bench_with_input(
            BenchmarkId::from_parameter(strand),
            &strand,
            |b, &strand| {
                b.iter(|| black_box(frequent_words_with_mismatches(&genome, 8, 2, strand, &limits)))
            },
        );
    }

    group.finish();
}

/// Sequential versus rayon clump finding.
fn benchmark_clump_finding(c: &mut Criterion) {
    let mut group = c.benchmark_group("clump_finding");
    group.sample_size(10);

    for size in [5_000, 20_000] {
        let genome = synthetic_genome(size, 42);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &genome, |b, genome| {
            b.iter(|| black_box(clump_finding(genome, 9, 500, 3)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &genome, |b, genome| {
            b.iter(|| black_box(par_clump_finding(genome, 9, 500, 3)))
        });
    }

    group.finish();
}

/// Skew scan and approximate matching over long genomes.
fn benchmark_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("scans");
    let pattern = Sequence::new("ATTCTGGA").unwrap();

    for size in [10_000, 100_000, 1_000_000] {
        let genome = synthetic_genome(size, 5);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("minimum_skew", size), &genome, |b, genome| {
            b.iter(|| black_box(minimum_skew_positions(genome)))
        });
        group.bench_with_input(
            BenchmarkId::new("approximate_matching", size),
            &genome,
            |b, genome| b.iter(|| black_box(approximate_pattern_matching(&pattern, genome, 2))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_frequency_counting,
    benchmark_frequent_words,
    benchmark_neighbors,
    benchmark_frequent_words_with_mismatches,
    benchmark_clump_finding,
    benchmark_scans,
);

criterion_main!(benches);
