//! Decoding of raw backend JSON into domain types.
//!
//! The backend is loose about numeric fields: a candle's `time` or prices may
//! arrive as JSON numbers or as numeric strings. Coercion happens here, at the
//! boundary. A record that fails coercion on any required field is rejected
//! individually and decoding continues — a single bad record must never abort
//! the whole series, and must never leak NaN into the chart.

use crate::domain::Candle;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// A single candle record failed numeric coercion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("candle record {index}: field '{field}' {reason}")]
pub struct InvalidCandleError {
    /// Index of the record in the raw input array.
    pub index: usize,
    /// Name of the offending field.
    pub field: &'static str,
    pub reason: CoercionFailure,
}

/// Why a field could not be coerced to a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionFailure {
    #[error("is missing")]
    Missing,
    #[error("is not a number or numeric string")]
    NotNumeric,
    #[error("is not finite")]
    NotFinite,
}

/// Result of decoding a raw candle array: the candles that survived, plus one
/// error per rejected record.
#[derive(Debug, Clone, Default)]
pub struct DecodedCandles {
    pub candles: Vec<Candle>,
    pub rejected: Vec<InvalidCandleError>,
}

/// Decode a raw JSON array of candle objects.
///
/// Fields accepted as numbers or numeric strings; `time` is truncated toward
/// zero to whole seconds. Rejected records are dropped, not fatal. An empty
/// input yields an empty result.
pub fn decode_candles(raw: &[Value]) -> DecodedCandles {
    let mut out = DecodedCandles::default();
    for (index, value) in raw.iter().enumerate() {
        match decode_candle(index, value) {
            Ok(candle) => out.candles.push(candle),
            Err(err) => out.rejected.push(err),
        }
    }
    out
}

fn decode_candle(index: usize, value: &Value) -> Result<Candle, InvalidCandleError> {
    let field = |name: &'static str| -> Result<f64, InvalidCandleError> {
        coerce_f64(value.get(name)).map_err(|reason| InvalidCandleError {
            index,
            field: name,
            reason,
        })
    };
    Ok(Candle {
        time: field("time")? as i64,
        open: field("open")?,
        high: field("high")?,
        low: field("low")?,
        close: field("close")?,
    })
}

/// Coerce a JSON value to a finite f64: numbers pass through, strings are
/// parsed. Anything else (or a non-finite result) is a failure.
fn coerce_f64(value: Option<&Value>) -> Result<f64, CoercionFailure> {
    let value = value.ok_or(CoercionFailure::Missing)?;
    let num = match value {
        Value::Number(n) => n.as_f64().ok_or(CoercionFailure::NotNumeric)?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| CoercionFailure::NotNumeric)?,
        _ => return Err(CoercionFailure::NotNumeric),
    };
    if !num.is_finite() {
        return Err(CoercionFailure::NotFinite);
    }
    Ok(num)
}

/// Serde adapter for epoch-second fields that may arrive as integers, floats,
/// or numeric strings. Fractional seconds are truncated toward zero.
pub fn de_epoch_secs<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let num = coerce_f64(Some(&value)).map_err(serde::de::Error::custom)?;
    Ok(num as i64)
}
