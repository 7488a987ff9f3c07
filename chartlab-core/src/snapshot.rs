//! ChartSnapshot — the rendering-ready bundle produced by the full pipeline.

use crate::domain::{Candle, ConnectorSegment, ExecutedTrade, Marker, PriceLine};
use crate::normalize::{normalize_candles, normalize_trades};
use crate::overlay::{derive_connectors, derive_markers, derive_price_lines};
use serde::{Deserialize, Serialize};

/// Everything a chart surface needs to draw one backtest: the normalized
/// candle series plus the trade overlay annotations.
///
/// Recomputed from scratch whenever either input changes; nothing is mutated
/// in place and nothing persists across render cycles. Same inputs always
/// yield an identical snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub candles: Vec<Candle>,
    pub markers: Vec<Marker>,
    pub connectors: Vec<ConnectorSegment>,
    pub price_lines: Vec<PriceLine>,
}

impl ChartSnapshot {
    /// Run the full pipeline: normalize candles, normalize trade times,
    /// derive overlays. Pure and synchronous; cost is linear in input size
    /// plus the candle sort.
    pub fn prepare(candles: Vec<Candle>, trades: Vec<ExecutedTrade>) -> Self {
        let candles = normalize_candles(candles);
        let trades = normalize_trades(trades);
        let markers = derive_markers(&trades);
        let connectors = derive_connectors(&trades);
        let price_lines = derive_price_lines(&trades);
        Self {
            candles,
            markers,
            connectors,
            price_lines,
        }
    }

    /// True when there is nothing to draw; the renderer shows its
    /// "no data" state.
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty() && self.markers.is_empty() && self.connectors.is_empty()
    }
}
