//! ChartLab Core — pure chart-data transforms for backtest visualization.
//!
//! This crate is the normalization layer between a backtest backend's raw
//! JSON and a rendering surface:
//! - Domain types (candles, executed trades, markers, connectors, price lines)
//! - Boundary decoding with per-record rejection of malformed candles
//! - Candle series normalization (stable sort + strict dedup by timestamp)
//! - Trade time normalization (close forced strictly after open)
//! - Overlay derivation (entry/exit markers, trade connectors, SL/TP levels)
//! - Chart-shaping helpers (axis bounds, balance-curve filtering, pagination)
//!
//! Everything is synchronous, allocation-fresh, and idempotent; there is no
//! I/O, no shared state, and no rendering here.

pub mod axis;
pub mod curve;
pub mod decode;
pub mod domain;
pub mod normalize;
pub mod overlay;
pub mod page;
pub mod snapshot;
