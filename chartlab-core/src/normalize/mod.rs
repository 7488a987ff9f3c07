//! Input normalization — the first two derivation steps of the pipeline.

mod candles;
mod trades;

pub use candles::normalize_candles;
pub use trades::normalize_trades;
