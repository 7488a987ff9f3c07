//! Price axis bounds with padding, so candles and curves never touch the
//! chart edges.

use crate::domain::Candle;

/// Padded lower/upper bounds for a price axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    pub lower: f64,
    pub upper: f64,
}

impl PriceBounds {
    /// Bounds over a candle series: min low to max high, padded by 5% of the
    /// range (1.0 absolute when the series is flat). Returns `None` for an
    /// empty series.
    pub fn from_candles(candles: &[Candle]) -> Option<Self> {
        if candles.is_empty() {
            return None;
        }
        let min = candles.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
        let max = candles
            .iter()
            .map(|c| c.high)
            .fold(f64::NEG_INFINITY, f64::max);
        Some(Self::padded(min, max, 0.0))
    }

    /// Bounds over a plain value series (balance curves), with a floor on the
    /// padding so near-flat curves keep visible headroom.
    pub fn from_values(values: &[f64], min_pad: f64) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self::padded(min, max, min_pad))
    }

    fn padded(min: f64, max: f64, min_pad: f64) -> Self {
        let range = max - min;
        let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
        let pad = pad.max(min_pad);
        Self {
            lower: min - pad,
            upper: max + pad,
        }
    }

    pub fn range(&self) -> f64 {
        self.upper - self.lower
    }
}
