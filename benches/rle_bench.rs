// In benches/rle_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use run_length_encoder::kernels::rle::{encode_into, encode_str};

// --- Mock Data Generation ---

/// Generates text made of long runs, the best case for the encoder.
fn generate_long_runs(size: usize) -> String {
    let mut rng = StdRng::seed_from_u64(7);
    let mut data = String::with_capacity(size);
    while data.len() < size {
        let ch = rng.random_range(b'a'..=b'z') as char;
        let len = rng.random_range(8..64);
        data.extend(std::iter::repeat(ch).take(len));
    }
    data.truncate(size);
    data
}

/// Generates text with no repeated neighbours, the worst case for the encoder.
fn generate_no_runs(size: usize) -> String {
    let pattern = "abcdefgABCDEFG12345";
    let mut data = String::with_capacity(size);
    while data.len() < size {
        data.push_str(pattern);
    }
    data.truncate(size);
    data
}

// --- Benchmark Suite ---

const BENCH_DATA_SIZE: usize = 65536; // 64 KB

fn bench_rle_kernel(c: &mut Criterion) {
    let long_runs = generate_long_runs(BENCH_DATA_SIZE);
    let no_runs = generate_no_runs(BENCH_DATA_SIZE);

    let mut group = c.benchmark_group("RLE Text Kernel");
    group.throughput(criterion::Throughput::Bytes(BENCH_DATA_SIZE as u64));

    group.bench_function("Encode (Long Runs)", |b| {
        b.iter(|| black_box(encode_str(black_box(&long_runs))))
    });
    group.bench_function("Encode (No Runs)", |b| {
        b.iter(|| black_box(encode_str(black_box(&no_runs))))
    });

    // Reusing one buffer across iterations removes allocation from the measurement.
    let mut output_buf = String::new();
    group.bench_function("Encode Into Reused Buffer (Long Runs)", |b| {
        b.iter(|| {
            encode_into(black_box(&long_runs), &mut output_buf);
            black_box(output_buf.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_rle_kernel);
criterion_main!(benches);
