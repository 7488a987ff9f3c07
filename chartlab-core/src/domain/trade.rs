//! ExecutedTrade — a completed round-trip trade as reported by the backtest API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a single execution leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeAction {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "BUY"),
            TradeAction::Sell => write!(f, "SELL"),
        }
    }
}

/// A complete round-trip trade: entry leg → exit leg.
///
/// Produced upstream by the backtest execution service and consumed here as
/// opaque results — profit is reported, never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutedTrade {
    pub entry_id: i64,
    pub exit_id: i64,
    pub entry_action: TradeAction,
    pub exit_action: TradeAction,
    pub entry_price: f64,
    pub exit_price: f64,
    /// Signed profit, as reported by the backend.
    pub profit: f64,
    /// Entry time, epoch seconds. Accepts floats or numeric strings on the
    /// wire; truncated to whole seconds.
    #[serde(deserialize_with = "crate::decode::de_epoch_secs")]
    pub open_timestamp: i64,
    /// Exit time, epoch seconds. Same wire leniency as `open_timestamp`.
    #[serde(deserialize_with = "crate::decode::de_epoch_secs")]
    pub close_timestamp: i64,
    /// Stop-loss price, when the strategy placed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sl_price: Option<f64>,
    /// Take-profit price, when the strategy placed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tp_price: Option<f64>,
}

impl ExecutedTrade {
    pub fn is_winner(&self) -> bool {
        self.profit >= 0.0
    }

    /// Trade duration in seconds. Meaningful only after time normalization,
    /// which guarantees close > open.
    pub fn duration_secs(&self) -> i64 {
        self.close_timestamp - self.open_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trade() -> ExecutedTrade {
        ExecutedTrade {
            entry_id: 1,
            exit_id: 2,
            entry_action: TradeAction::Buy,
            exit_action: TradeAction::Sell,
            entry_price: 100.0,
            exit_price: 110.0,
            profit: 10.0,
            open_timestamp: 1_700_000_000,
            close_timestamp: 1_700_003_600,
            sl_price: Some(95.0),
            tp_price: None,
        }
    }

    #[test]
    fn action_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&TradeAction::Buy).unwrap(), "\"BUY\"");
        assert_eq!(
            serde_json::from_str::<TradeAction>("\"SELL\"").unwrap(),
            TradeAction::Sell
        );
    }

    #[test]
    fn action_display_matches_wire_format() {
        assert_eq!(TradeAction::Buy.to_string(), "BUY");
        assert_eq!(TradeAction::Sell.to_string(), "SELL");
    }

    #[test]
    fn winner_includes_breakeven() {
        let mut trade = sample_trade();
        assert!(trade.is_winner());
        trade.profit = 0.0;
        assert!(trade.is_winner());
        trade.profit = -0.01;
        assert!(!trade.is_winner());
    }

    #[test]
    fn trade_deserializes_without_optional_prices() {
        let json = r#"{
            "entry_id": 5, "exit_id": 6,
            "entry_action": "SELL", "exit_action": "BUY",
            "entry_price": 50.0, "exit_price": 48.0,
            "profit": 2.0,
            "open_timestamp": 1000, "close_timestamp": 2000
        }"#;
        let trade: ExecutedTrade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.entry_action, TradeAction::Sell);
        assert_eq!(trade.sl_price, None);
        assert_eq!(trade.tp_price, None);
    }

    #[test]
    fn trade_timestamps_truncate_fractional_seconds() {
        let json = r#"{
            "entry_id": 1, "exit_id": 2,
            "entry_action": "BUY", "exit_action": "SELL",
            "entry_price": 1.0, "exit_price": 2.0,
            "profit": 1.0,
            "open_timestamp": 1000.9, "close_timestamp": "2000.3"
        }"#;
        let trade: ExecutedTrade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.open_timestamp, 1000);
        assert_eq!(trade.close_timestamp, 2000);
    }

    #[test]
    fn duration_after_normalization() {
        assert_eq!(sample_trade().duration_secs(), 3600);
    }
}
