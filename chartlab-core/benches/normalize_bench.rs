//! Criterion benchmarks for the normalization hot path.
//!
//! The pipeline runs on every input change in a reactive UI, so the full
//! prepare() pass over a realistic backtest (tens of thousands of candles,
//! hundreds of trades) is the number that matters.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chartlab_core::domain::{Candle, ExecutedTrade, TradeAction};
use chartlab_core::normalize::normalize_candles;
use chartlab_core::snapshot::ChartSnapshot;

fn make_candles(n: usize) -> Vec<Candle> {
    (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            Candle {
                // Shuffled-ish order with occasional duplicates
                time: ((i * 7919) % n) as i64,
                open: close - 0.3,
                high: close + 1.5,
                low: close - 1.5,
                close,
            }
        })
        .collect()
}

fn make_trades(n: usize) -> Vec<ExecutedTrade> {
    (0..n)
        .map(|i| ExecutedTrade {
            entry_id: i as i64 * 2,
            exit_id: i as i64 * 2 + 1,
            entry_action: TradeAction::Buy,
            exit_action: TradeAction::Sell,
            entry_price: 100.0,
            exit_price: 101.0,
            profit: if i % 3 == 0 { -1.0 } else { 1.0 },
            open_timestamp: (i * 60) as i64,
            close_timestamp: (i * 60) as i64 + if i % 5 == 0 { 0 } else { 30 },
            sl_price: Some(95.0),
            tp_price: Some(110.0),
        })
        .collect()
}

fn bench_normalize_candles(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_candles");
    for n in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let candles = make_candles(n);
            b.iter(|| normalize_candles(black_box(candles.clone())));
        });
    }
    group.finish();
}

fn bench_full_prepare(c: &mut Criterion) {
    let candles = make_candles(50_000);
    let trades = make_trades(500);
    c.bench_function("snapshot_prepare_50k_candles_500_trades", |b| {
        b.iter(|| ChartSnapshot::prepare(black_box(candles.clone()), black_box(trades.clone())));
    });
}

criterion_group!(benches, bench_normalize_candles, bench_full_prepare);
criterion_main!(benches);
