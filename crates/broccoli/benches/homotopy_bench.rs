//! Criterion benchmarks for the circle-image sampler.
//! One frame of the animation is 400 samples; degree and sample count vary.

use broccoli::homotopy::{circle_image_segments, ComplexPolynomial};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_polynomial(degree: usize, seed: u64) -> ComplexPolynomial {
    let mut rng = StdRng::seed_from_u64(seed);
    let coefficients = (0..=degree).map(|_| rng.gen_range(-1.0..1.0)).collect();
    ComplexPolynomial::new(coefficients).unwrap()
}

fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_image");
    for &degree in &[1usize, 6, 20] {
        for &samples in &[100usize, 400, 2000] {
            let id = BenchmarkId::new(format!("degree_{degree}"), samples);
            group.bench_with_input(id, &samples, |b, &samples| {
                b.iter_batched(
                    || random_polynomial(degree, 7),
                    |p| black_box(circle_image_segments(&p, 1.5, samples).unwrap()),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sampler);
criterion_main!(benches);
