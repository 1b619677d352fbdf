#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use fraction_types::Fraction;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("regular i32 mul", |b| b.iter(|| black_box(2i32) * black_box(3i32)));
    c.bench_function("fraction new", |b| b.iter(|| Fraction::new(black_box(12), black_box(-18))));
    c.bench_function("fraction mul int", |b| b.iter(|| black_box(Fraction::new(1, 3)) * black_box(2)));
    c.bench_function("fraction mul", |b| b.iter(|| black_box(Fraction::new(1, 3)) * black_box(Fraction::new(3, 7))));
    c.bench_function("fraction add int", |b| b.iter(|| black_box(Fraction::new(1, 3)) + black_box(2)));
    c.bench_function("fraction add", |b| b.iter(|| black_box(Fraction::new(1, 3)) + black_box(Fraction::new(2, 6))));
    c.bench_function("fraction cmp", |b| b.iter(|| black_box(Fraction::new(1, 3)) < black_box(Fraction::new(1, 4))));
    c.bench_function("fraction display", |b| b.iter(|| black_box(Fraction::new(-7, 3)).to_string()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
