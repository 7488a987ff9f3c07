//! Trade time normalization: guarantee a nonzero-width interval per trade.

use crate::domain::ExecutedTrade;

/// Force every trade's close time strictly after its open time.
///
/// A trade reported with `close_timestamp <= open_timestamp` (same-bar exit,
/// or inverted upstream data) is widened to a one-second interval so it is
/// still representable on the chart. This is a rendering accommodation, not a
/// claim about real trade duration. All other fields and the input order are
/// preserved.
pub fn normalize_trades(trades: Vec<ExecutedTrade>) -> Vec<ExecutedTrade> {
    trades
        .into_iter()
        .map(|mut trade| {
            if trade.close_timestamp <= trade.open_timestamp {
                trade.close_timestamp = trade.open_timestamp + 1;
            }
            trade
        })
        .collect()
}
