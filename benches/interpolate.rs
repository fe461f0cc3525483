use criterion::{Criterion, criterion_group, criterion_main};
use num_bigint::BigInt;
use std::hint::black_box;
use unveil::recovery::{Point, interpolate_at_zero};

/// Evaluates `f(x) = Σ cᵢ·xⁱ` with 256-bit-scale coefficients.
fn sample_points(k: usize) -> Vec<Point> {
    let coeffs: Vec<BigInt> = (0..k)
        .map(|i| BigInt::from(i as u64 + 3).pow(80))
        .collect();

    (1..=k as i64)
        .map(|x| {
            let y = coeffs
                .iter()
                .rev()
                .fold(BigInt::from(0u8), |acc, c| acc * x + c);

            Point { x, y }
        })
        .collect()
}

pub fn bench_interpolate(c: &mut Criterion) {
    let points = sample_points(16);

    c.bench_function("interpolate_at_zero 16 points", |b| {
        b.iter(|| interpolate_at_zero(black_box(&points)))
    });
}

criterion_group!(benches, bench_interpolate);
criterion_main!(benches);
