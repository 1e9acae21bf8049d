//! Criterion benchmarks for drag dispatch and SVG serialisation.
//! Focus: the annotated tutorial block, where every move redraws points and angles.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use geodiag::demos::Example;
use nalgebra::Vector2;

fn drag_path(steps: usize) -> Vec<Vector2<f64>> {
    // Sweep the grip around the pivot b = (5, 4).
    (0..steps)
        .map(|k| {
            let theta = (k as f64) / (steps as f64) * std::f64::consts::TAU;
            Vector2::new(5.0 + 2.0 * theta.cos(), 4.0 + 2.0 * theta.sin())
        })
        .collect()
}

fn bench_diagram(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagram");
    for &steps in &[1usize, 10, 100] {
        group.bench_with_input(BenchmarkId::new("drag_annotated", steps), &steps, |b, &steps| {
            let path = drag_path(steps);
            b.iter_batched(
                || Example::Annotated.build().unwrap(),
                |mut d| {
                    d.drag_first_to(&path).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.bench_function("to_svg_annotated", |b| {
        let d = Example::Annotated.build().unwrap();
        b.iter(|| d.to_svg())
    });
    group.finish();
}

criterion_group!(benches, bench_diagram);
criterion_main!(benches);
