use criterion::{black_box, criterion_group, criterion_main, Criterion};

use std::collections::BTreeSet;

use plenum::{cardinality, enumerate, Exhaustive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Exhaustive)]
enum Channel {
    Red,
    Green,
    Blue,
    Alpha(bool),
}

fn leaf_bench(c: &mut Criterion) {
    c.bench_function("enumerate_u16", |b| {
        b.iter(|| black_box(enumerate::<u16>()))
    });
    c.bench_function("enumerate_char", |b| {
        b.iter(|| black_box(enumerate::<char>()))
    });
}

fn composite_bench(c: &mut Criterion) {
    c.bench_function("enumerate_pair_u8", |b| {
        b.iter(|| black_box(enumerate::<(u8, u8)>()))
    });
    c.bench_function("enumerate_derived", |b| {
        b.iter(|| black_box(enumerate::<(Channel, Channel)>()))
    });
    c.bench_function("enumerate_powerset", |b| {
        b.iter(|| black_box(enumerate::<BTreeSet<Channel>>()))
    });
}

fn cardinality_bench(c: &mut Criterion) {
    // Closed forms only; no values are materialized.
    c.bench_function("cardinality_big_array", |b| {
        b.iter(|| black_box(cardinality::<[u16; 64]>()))
    });
    c.bench_function("cardinality_nested_powerset", |b| {
        b.iter(|| black_box(cardinality::<BTreeSet<(u8, bool)>>()))
    });
}

criterion_group!(benches, leaf_bench, composite_bench, cardinality_bench);
criterion_main!(benches);
