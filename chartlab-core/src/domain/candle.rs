//! Candle — the fundamental chart data unit.

use serde::{Deserialize, Serialize};

/// OHLC candle for a single time slot.
///
/// `time` is epoch seconds. Sub-second precision carries no meaning for this
/// series and is truncated away at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    /// Returns true if any price field is NaN or infinite.
    pub fn has_non_finite(&self) -> bool {
        !(self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite())
    }

    /// Basic OHLC sanity check: high >= low, high bounds open/close from above,
    /// low bounds them from below.
    pub fn is_sane(&self) -> bool {
        if self.has_non_finite() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
    }

    /// Whether the candle closed at or above its open.
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_candle() -> Candle {
        Candle {
            time: 1_700_000_000,
            open: 100.0,
            high: 105.0,
            low: 98.0,
            close: 103.0,
        }
    }

    #[test]
    fn candle_is_sane() {
        assert!(sample_candle().is_sane());
    }

    #[test]
    fn candle_detects_non_finite() {
        let mut candle = sample_candle();
        candle.open = f64::NAN;
        assert!(candle.has_non_finite());
        assert!(!candle.is_sane());
    }

    #[test]
    fn candle_detects_inverted_high_low() {
        let mut candle = sample_candle();
        candle.high = 97.0; // below low
        assert!(!candle.is_sane());
    }

    #[test]
    fn candle_direction() {
        assert!(sample_candle().is_up());
        let mut down = sample_candle();
        down.close = 99.0;
        assert!(!down.is_up());
    }

    #[test]
    fn candle_serialization_roundtrip() {
        let candle = sample_candle();
        let json = serde_json::to_string(&candle).unwrap();
        let deser: Candle = serde_json::from_str(&json).unwrap();
        assert_eq!(candle, deser);
    }
}
