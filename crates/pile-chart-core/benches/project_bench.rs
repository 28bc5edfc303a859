use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use pile_chart_core::geometry::PlotRect;
use pile_chart_core::mapper::map_point;
use pile_chart_core::types::{RenderRegion, BACKGROUND_MARGINS};
use pile_chart_core::DataPoint;

fn gen_points(n: usize) -> Vec<DataPoint> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // walk the domain diagonally with a small wobble
        let x = (i % 101) as f64 * 0.1;
        let y = ((i * 37) % 101) as f64 * 0.1;
        v.push(DataPoint::new(format!("No. {i}"), x, y));
    }
    v
}

fn bench_projection(c: &mut Criterion) {
    let region = RenderRegion::new(60.0, 80.0, 600.0, 600.0);
    let plot = PlotRect::from_region(&region, &BACKGROUND_MARGINS);

    let mut group = c.benchmark_group("projection");
    for &n in &[100usize, 10_000usize] {
        let points = gen_points(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, pts| {
            b.iter_batched(
                || pts.clone(),
                |pts| {
                    for p in &pts {
                        let _ = black_box(map_point(p, &plot));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
