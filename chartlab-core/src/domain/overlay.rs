//! Overlay output types — markers, connector segments, and price lines.
//!
//! These are derived, rendering-ready annotations. A rendering surface
//! (terminal panel, GUI chart) consumes them as-is; nothing here knows how
//! pixels or cells are drawn.

use serde::{Deserialize, Serialize};

/// Vertical anchoring of a marker relative to its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPosition {
    AboveBar,
    BelowBar,
}

/// Marker glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    ArrowUp,
    ArrowDown,
}

/// Semantic color class. The rendering surface maps these to actual colors.
///
/// Entry markers use this to encode trade direction (Buy = Gain tint),
/// exit markers and connectors to encode profitability. The asymmetry is
/// intentional and observable behavior; do not unify the two rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorClass {
    Gain,
    Loss,
}

/// A point annotation anchored to a time on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Epoch seconds.
    pub time: i64,
    pub position: MarkerPosition,
    pub color: ColorClass,
    pub shape: MarkerShape,
    pub label: String,
}

/// A (time, price) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: i64,
    pub price: f64,
}

/// A line from a trade's entry point to its exit point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectorSegment {
    pub start: PricePoint,
    pub end: PricePoint,
    pub color: ColorClass,
}

/// A horizontal price level (stop-loss or take-profit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLine {
    pub price: f64,
    pub label: String,
    pub color: ColorClass,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_position_wire_format() {
        assert_eq!(
            serde_json::to_string(&MarkerPosition::AboveBar).unwrap(),
            "\"above_bar\""
        );
        assert_eq!(
            serde_json::to_string(&MarkerShape::ArrowDown).unwrap(),
            "\"arrow_down\""
        );
        assert_eq!(serde_json::to_string(&ColorClass::Gain).unwrap(), "\"gain\"");
    }

    #[test]
    fn marker_roundtrip() {
        let marker = Marker {
            time: 1000,
            position: MarkerPosition::BelowBar,
            color: ColorClass::Gain,
            shape: MarkerShape::ArrowUp,
            label: "BUY".into(),
        };
        let json = serde_json::to_string(&marker).unwrap();
        let deser: Marker = serde_json::from_str(&json).unwrap();
        assert_eq!(marker, deser);
    }
}
