//! Benchmarks for Iris filters.
//!
//! Run with: `cargo bench -p iris-bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use iris_core::ImageBuffer;
use iris_ops::{grayscale, BlurMethod, BoxBlur};
use std::hint::black_box;

fn noise(size: usize, channels: usize) -> ImageBuffer {
    // xorshift, deterministic across runs
    let mut state = 0x9e37_79b9u32;
    ImageBuffer::from_fn(size, size, channels, |_, _, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as u8
    })
    .expect("valid benchmark image")
}

/// Benchmark in-place grayscale conversion.
fn bench_grayscale(c: &mut Criterion) {
    let mut group = c.benchmark_group("grayscale");

    for size in [64usize, 256, 1024] {
        for channels in [3usize, 4] {
            let image = noise(size, channels);
            group.throughput(Throughput::Elements((size * size) as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("convert_c{channels}"), size),
                &image,
                |b, img| {
                    b.iter_batched_ref(
                        || img.clone(),
                        |img| grayscale::convert(black_box(img)),
                        criterion::BatchSize::LargeInput,
                    )
                },
            );
        }
    }

    group.finish();
}

/// Benchmark box blur, naive scan against summed-area table.
fn bench_blur(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_blur");

    for size in [64usize, 256] {
        let image = noise(size, 4);
        group.throughput(Throughput::Elements((size * size) as u64));

        for radius in [1i64, 4, 16] {
            for method in BlurMethod::ALL {
                let blur = BoxBlur::new(radius).expect("valid radius").with_method(method);
                group.bench_with_input(
                    BenchmarkId::new(format!("{method}_r{radius}"), size),
                    &image,
                    |b, img| b.iter(|| blur.apply(black_box(img))),
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_grayscale, bench_blur);
criterion_main!(benches);
