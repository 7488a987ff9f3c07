//! Deterministic sample data for the demo binary.
//!
//! A sine-walk candle series with a few trades over it, including a
//! same-timestamp trade and a duplicated candle so the demo exercises the
//! normalization rules, not just the happy path.

use chartlab_core::domain::{Candle, ExecutedTrade, TradeAction};

/// One hour of minute candles around a drifting sine wave.
pub fn sample_candles() -> Vec<Candle> {
    let base_time = 1_700_000_000i64;
    let mut candles: Vec<Candle> = (0..60)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.35).sin() * 4.0 + i as f64 * 0.05;
            Candle {
                time: base_time + i * 60,
                open: close - 0.4,
                high: close + 0.9,
                low: close - 1.1,
                close,
            }
        })
        .collect();
    // A duplicate and an out-of-order record, so normalization has work to do
    candles.push(candles[10].clone());
    candles.swap(3, 40);
    candles
}

/// Three trades: a winning long, a losing long, and a same-bar scalp whose
/// close timestamp needs widening.
pub fn sample_trades() -> Vec<ExecutedTrade> {
    let base_time = 1_700_000_000i64;
    vec![
        ExecutedTrade {
            entry_id: 1,
            exit_id: 2,
            entry_action: TradeAction::Buy,
            exit_action: TradeAction::Sell,
            entry_price: 99.2,
            exit_price: 103.4,
            profit: 4.2,
            open_timestamp: base_time + 5 * 60,
            close_timestamp: base_time + 25 * 60,
            sl_price: Some(97.5),
            tp_price: Some(104.0),
        },
        ExecutedTrade {
            entry_id: 3,
            exit_id: 4,
            entry_action: TradeAction::Buy,
            exit_action: TradeAction::Sell,
            entry_price: 103.0,
            exit_price: 101.1,
            profit: -1.9,
            open_timestamp: base_time + 30 * 60,
            close_timestamp: base_time + 45 * 60,
            sl_price: None,
            tp_price: None,
        },
        ExecutedTrade {
            entry_id: 5,
            exit_id: 6,
            entry_action: TradeAction::Sell,
            exit_action: TradeAction::Buy,
            entry_price: 102.0,
            exit_price: 101.8,
            profit: 0.2,
            open_timestamp: base_time + 50 * 60,
            close_timestamp: base_time + 50 * 60,
            sl_price: None,
            tp_price: None,
        },
    ]
}
