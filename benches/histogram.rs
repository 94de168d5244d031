use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use imrank::histogram::{block_histogram, pixel_histogram};

fn test_image() -> RgbaImage {
    RgbaImage::from_fn(800, 600, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    })
}

fn benchmark_histogram(c: &mut Criterion) {
    let img = test_image();

    let mut group = c.benchmark_group("histogram");
    group.throughput(Throughput::Elements(u64::from(img.width() * img.height())));
    group.bench_function("block", |b| b.iter(|| block_histogram(black_box(&img))));
    group.bench_function("pixel", |b| b.iter(|| pixel_histogram(black_box(&img))));
    group.finish();
}

criterion_group!(benches, benchmark_histogram);
criterion_main!(benches);
