//! Criterion benchmarks for the subdivision generators.
//! Depths cover the interactive range; draw calls go to a counting closure so
//! only geometry is measured.

use broccoli::fractal::{
    barycentric_split, broccoli, quadrilateral_split, BaseShape, BroccoliCfg, QuadSplitCfg,
    SeedTree, SplitCfg, SPLIT_MAX_DEPTH,
};
use broccoli::shapes::DrawInstructions;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_broccoli(c: &mut Criterion) {
    let mut group = c.benchmark_group("broccoli");
    for &depth in &[4u32, 8, 12] {
        let base = BaseShape::default_triangle();
        let cfg = BroccoliCfg {
            iterations: depth,
            ..BroccoliCfg::default_triangle()
        };
        group.bench_with_input(BenchmarkId::new("triangle", depth), &depth, |b, _| {
            b.iter(|| {
                let mut n = 0usize;
                broccoli(&base, &cfg, &mut |_: DrawInstructions| n += 1).unwrap();
                black_box(n)
            })
        });

        let base = BaseShape::default_quadrilateral();
        let cfg = BroccoliCfg {
            iterations: depth.min(9),
            ..BroccoliCfg::default_quadrilateral()
        };
        group.bench_with_input(BenchmarkId::new("quadrilateral", depth), &depth, |b, _| {
            b.iter(|| {
                let mut n = 0usize;
                broccoli(&base, &cfg, &mut |_: DrawInstructions| n += 1).unwrap();
                black_box(n)
            })
        });
    }
    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    let tree = SeedTree::generate(SPLIT_MAX_DEPTH as usize, 3, 42);
    let tri = SplitCfg::default_triangle();
    for &depth in &[4u32, 7, 10] {
        let cfg = SplitCfg {
            iterations: depth,
            ..SplitCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("barycentric", depth), &depth, |b, _| {
            b.iter(|| {
                let mut n = 0usize;
                barycentric_split(&tri, &cfg, &tree, &mut |_: DrawInstructions| n += 1).unwrap();
                black_box(n)
            })
        });
    }
    let quad = BaseShape::default_quadrilateral().polygon().clone();
    for &depth in &[2u32, 4] {
        let cfg = QuadSplitCfg {
            iterations: depth,
            ..QuadSplitCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("quadrilateral", depth), &depth, |b, _| {
            b.iter(|| {
                let mut n = 0usize;
                quadrilateral_split(&quad, &cfg, &mut |_: DrawInstructions| n += 1).unwrap();
                black_box(n)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_broccoli, bench_split);
criterion_main!(benches);
