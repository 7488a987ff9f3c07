//! Domain types: candles, executed trades, and derived overlay annotations.

mod candle;
mod overlay;
mod trade;

pub use candle::Candle;
pub use overlay::{
    ColorClass, ConnectorSegment, Marker, MarkerPosition, MarkerShape, PriceLine, PricePoint,
};
pub use trade::{ExecutedTrade, TradeAction};
