//! Benchmarks comparing the four resampling algorithms.
//!
//! Run with: cargo bench -p rescale-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rescale_core::{resize, Algorithm, PixelBuffer};

fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut samples = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            samples.push((x % 256) as u8);
            samples.push((y % 256) as u8);
            samples.push(((x + y) % 256) as u8);
        }
    }
    PixelBuffer::from_raw(width, height, samples).expect("valid bench fixture")
}

fn benchmark_downscale(c: &mut Criterion) {
    let src = gradient(640, 480);
    let mut group = c.benchmark_group("downscale_640x480_to_320x240");
    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.as_str(), |b| {
            b.iter(|| resize(black_box(algorithm), black_box(&src), 320, 240))
        });
    }
    group.finish();
}

fn benchmark_upscale(c: &mut Criterion) {
    let src = gradient(640, 480);
    let mut group = c.benchmark_group("upscale_640x480_to_1280x960");
    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.as_str(), |b| {
            b.iter(|| resize(black_box(algorithm), black_box(&src), 1280, 960))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_downscale, benchmark_upscale);
criterion_main!(benches);
