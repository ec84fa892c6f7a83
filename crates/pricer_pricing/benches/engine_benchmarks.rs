//! Criterion benchmarks for the Monte Carlo engine.
//!
//! Measures end-to-end pricing throughput across path counts and normal
//! transforms, and the reducer on its own over a materialised buffer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
use pricer_pricing::reduce::PairwiseReducer;
use pricer_pricing::rng::NormalMethod;
use pricer_pricing::SimulationParams;

fn reference_params() -> SimulationParams {
    SimulationParams::new(106.162, 95.0, 0.01, 0.5, 2.0 / 12.0)
}

/// Benchmark full pricing runs at increasing path counts.
fn bench_price_european_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_european_call");
    group.sample_size(10);
    let params = reference_params();

    for n_paths in [1usize << 14, 1 << 17, 1 << 20] {
        group.throughput(Throughput::Elements(n_paths as u64));

        for method in [NormalMethod::Ziggurat, NormalMethod::BoxMuller] {
            let config = MonteCarloConfig::builder()
                .n_paths(n_paths)
                .seed(1234)
                .normal_method(method)
                .build()
                .unwrap();
            let pricer = MonteCarloPricer::new(config).unwrap();

            group.bench_with_input(
                BenchmarkId::new(method.as_str(), n_paths),
                &pricer,
                |b, pricer| {
                    b.iter(|| pricer.price_european_call(black_box(&params)).unwrap());
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the reducer over a materialised buffer at several block sizes.
fn bench_pairwise_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise_reduce");
    let n = 1usize << 20;
    let values: Vec<f64> = (0..n).map(|i| (i as f64 * 0.618).sin().abs()).collect();
    group.throughput(Throughput::Elements(n as u64));

    for block_size in [64usize, 1024, 16_384] {
        let reducer = PairwiseReducer::new(block_size).unwrap();
        group.bench_with_input(
            BenchmarkId::new("block", block_size),
            &reducer,
            |b, reducer| {
                b.iter(|| reducer.reduce(black_box(&values)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_price_european_call, bench_pairwise_reduce);
criterion_main!(benches);
