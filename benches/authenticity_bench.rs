//! Performance benchmarks for image authenticity analysis

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pixelproof::features::pixel_stats::{
    gradient_roughness, normalized_entropy, tonal_variability,
};
use pixelproof::io::pixel_buffer::PixelBuffer;
use pixelproof::{analyze_features, AnalysisConfig, Engine};

fn synthetic_buffer(width: u32, height: u32) -> PixelBuffer {
    let data: Vec<u8> = (0..width as usize * height as usize)
        .map(|i| ((i * 31 + i / width as usize * 17) % 256) as u8)
        .collect();
    PixelBuffer::from_raw(width, height, data).unwrap()
}

fn bench_pixel_stats(c: &mut Criterion) {
    let buffer = synthetic_buffer(1024, 1024);

    c.bench_function("entropy_1024", |b| {
        b.iter(|| normalized_entropy(black_box(&buffer)));
    });

    c.bench_function("gradient_1024", |b| {
        b.iter(|| gradient_roughness(black_box(&buffer)));
    });

    c.bench_function("variability_1024", |b| {
        b.iter(|| tonal_variability(black_box(&buffer)));
    });
}

fn bench_feature_ensemble(c: &mut Criterion) {
    let config = AnalysisConfig::default();
    let engine = Engine::with_defaults(&config);
    let vector = [0.5, 0.5, 0.5, 0.55, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0];

    c.bench_function("analyze_features", |b| {
        b.iter(|| analyze_features(black_box(&vector), &engine, &config, None));
    });
}

criterion_group!(benches, bench_pixel_stats, bench_feature_ensemble);
criterion_main!(benches);
