//! Candle series normalization: sort + deduplicate into a strict time axis.

use crate::domain::Candle;

/// Normalize a raw candle sequence into a strictly time-ascending series with
/// unique timestamps, suitable for a chronological chart axis.
///
/// The sort is stable, so among records sharing a timestamp the one earliest
/// in input order survives. This is the deterministic tie-break the series
/// contract requires; callers that want a different survivor must reorder
/// before calling.
///
/// Empty input yields an empty output. Already-normalized input passes
/// through unchanged (idempotent).
pub fn normalize_candles(mut candles: Vec<Candle>) -> Vec<Candle> {
    candles.sort_by_key(|c| c.time);

    let mut out: Vec<Candle> = Vec::with_capacity(candles.len());
    for candle in candles {
        // Keep only candles strictly later than the previously kept one
        let keep = out.last().map_or(true, |kept| candle.time > kept.time);
        if keep {
            out.push(candle);
        }
    }
    out
}
