//! End-to-end scenarios for the candle/trade normalization pipeline, driven
//! through raw JSON the way the rendering layer receives it.

use serde_json::json;
use chartlab_core::decode::decode_candles;
use chartlab_core::domain::{
    Candle, ColorClass, ExecutedTrade, MarkerPosition, MarkerShape, TradeAction,
};
use chartlab_core::snapshot::ChartSnapshot;

fn candle(time: i64, close: f64) -> Candle {
    Candle {
        time,
        open: close - 0.5,
        high: close + 1.0,
        low: close - 1.0,
        close,
    }
}

#[test]
fn duplicate_and_unordered_candles_collapse_to_strict_series() {
    let candles = vec![candle(100, 5.0), candle(50, 3.0), candle(100, 9.0)];
    let snap = ChartSnapshot::prepare(candles, vec![]);

    let times: Vec<i64> = snap.candles.iter().map(|c| c.time).collect();
    assert_eq!(times, vec![50, 100]);
}

#[test]
fn same_bar_trade_becomes_one_second_interval() {
    let trade = ExecutedTrade {
        entry_id: 10,
        exit_id: 11,
        entry_action: TradeAction::Buy,
        exit_action: TradeAction::Sell,
        entry_price: 100.0,
        exit_price: 100.0,
        profit: 0.0,
        open_timestamp: 1000,
        close_timestamp: 1000,
        sl_price: None,
        tp_price: None,
    };
    let snap = ChartSnapshot::prepare(vec![], vec![trade]);

    assert_eq!(snap.connectors[0].start.time, 1000);
    assert_eq!(snap.connectors[0].end.time, 1001);
    assert_eq!(snap.markers[1].time, 1001);
}

#[test]
fn losing_long_trade_overlay_shape() {
    let trade = ExecutedTrade {
        entry_id: 1,
        exit_id: 2,
        entry_action: TradeAction::Buy,
        exit_action: TradeAction::Sell,
        entry_price: 100.0,
        exit_price: 95.0,
        profit: -5.0,
        open_timestamp: 1000,
        close_timestamp: 2000,
        sl_price: None,
        tp_price: None,
    };
    let snap = ChartSnapshot::prepare(vec![], vec![trade]);

    let entry = &snap.markers[0];
    assert_eq!(entry.position, MarkerPosition::BelowBar);
    assert_eq!(entry.shape, MarkerShape::ArrowUp);
    assert_eq!(entry.color, ColorClass::Gain);

    let exit = &snap.markers[1];
    assert_eq!(exit.position, MarkerPosition::AboveBar);
    assert_eq!(exit.shape, MarkerShape::ArrowDown);
    assert_eq!(exit.color, ColorClass::Loss);
    assert_eq!(exit.label, "SELL -5");

    assert_eq!(snap.connectors[0].color, ColorClass::Loss);
}

#[test]
fn empty_inputs_yield_empty_snapshot_without_error() {
    let snap = ChartSnapshot::prepare(vec![], vec![]);
    assert!(snap.is_empty());
    assert!(snap.price_lines.is_empty());
}

#[test]
fn raw_json_with_string_fields_flows_through_pipeline() {
    let raw = vec![
        json!({"time": "200", "open": "10", "high": "12", "low": "9", "close": "11"}),
        json!({"time": 100.8, "open": 10, "high": 12, "low": 9, "close": 10.5}),
        json!({"time": 150, "open": "bad", "high": 12, "low": 9, "close": 10.5}),
    ];
    let decoded = decode_candles(&raw);
    assert_eq!(decoded.rejected.len(), 1);

    let snap = ChartSnapshot::prepare(decoded.candles, vec![]);
    let times: Vec<i64> = snap.candles.iter().map(|c| c.time).collect();
    assert_eq!(times, vec![100, 200]);
}
