use criterion::{black_box, criterion_group, criterion_main, Criterion};
use terminal_chart::{CanvasSize, ChartRenderer, RecordingContext};

fn random_walk(n: usize) -> Vec<f64> {
    let mut price = 100.0f64;
    (0..n)
        .map(|i| {
            price += (i as f64 * 0.37).sin() * 1.5 + (100.0 - price) * 0.07;
            price
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let renderer = ChartRenderer::default();
    let size = CanvasSize::new(720, 320);
    let mut group = c.benchmark_group("layout");
    for &n in &[64usize, 10_000usize] {
        let series = random_walk(n);
        group.bench_function(format!("layout_{n}"), |b| {
            b.iter(|| black_box(renderer.layout(black_box(&series), size)));
        });
        group.bench_function(format!("record_{n}"), |b| {
            b.iter(|| {
                let mut ctx = RecordingContext::new();
                renderer.draw(&mut ctx, &series, size);
                black_box(ctx.commands().len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
