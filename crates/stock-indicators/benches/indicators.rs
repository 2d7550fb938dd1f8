//! Benchmarks for indicator implementations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stock_core::traits::{Indicator, MultiOutputIndicator};
use stock_indicators::{Ema, Macd, Rsi, Sma};

fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn benchmark_sma(c: &mut Criterion) {
    let mut group = c.benchmark_group("SMA");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);
        let sma = Sma::new(20).unwrap();

        group.bench_with_input(BenchmarkId::new("running_sum", size), &data, |b, data| {
            b.iter(|| sma.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_ema(c: &mut Criterion) {
    let mut group = c.benchmark_group("EMA");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);
        let ema = Ema::new(50).unwrap();

        group.bench_with_input(BenchmarkId::new("recurrence", size), &data, |b, data| {
            b.iter(|| ema.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSI");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);
        let rsi = Rsi::new(14).unwrap();

        group.bench_with_input(BenchmarkId::new("trailing_mean", size), &data, |b, data| {
            b.iter(|| rsi.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_macd(c: &mut Criterion) {
    let mut group = c.benchmark_group("MACD");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);
        let macd = Macd::new();

        group.bench_with_input(BenchmarkId::new("12_26_9", size), &data, |b, data| {
            b.iter(|| macd.calculate(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_sma, benchmark_ema, benchmark_rsi, benchmark_macd);
criterion_main!(benches);
