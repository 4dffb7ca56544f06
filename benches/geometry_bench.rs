use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use race_waypoint_editor::{compute, write_trajectory_csv};
use std::hint::black_box;

/// Ellipsenförmiger Rundkurs mit `count` Punkten.
fn build_loop(count: usize) -> (Vec<DVec2>, Vec<f64>) {
    let points = (0..count)
        .map(|i| {
            let t = i as f64 / count as f64 * std::f64::consts::TAU;
            DVec2::new(40.0 * t.cos(), 25.0 * t.sin())
        })
        .collect();
    let velocities = (0..count).map(|i| 1.0 + (i % 10) as f64 * 0.1).collect();
    (points, velocities)
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("trajectory_compute");

    for &count in &[100usize, 10_000usize] {
        let (points, velocities) = build_loop(count);
        group.bench_with_input(BenchmarkId::new("loop", count), &count, |b, _| {
            b.iter(|| {
                let samples = compute(black_box(&points), black_box(&velocities))
                    .expect("Trajektorie fehlgeschlagen");
                black_box(samples.len())
            })
        });
    }

    group.finish();
}

fn bench_writer(c: &mut Criterion) {
    let (points, velocities) = build_loop(10_000);
    let samples = compute(&points, &velocities).expect("Trajektorie fehlgeschlagen");

    c.bench_function("write_trajectory_csv_10k", |b| {
        b.iter(|| black_box(write_trajectory_csv(black_box(&samples)).len()))
    });
}

criterion_group!(geometry_benches, bench_compute, bench_writer);
criterion_main!(geometry_benches);
