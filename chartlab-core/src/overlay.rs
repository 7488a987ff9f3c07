//! Overlay derivation: trade list → markers, connector segments, price lines.
//!
//! Two markers per trade (entry, exit), one connector per trade, and one
//! price line per populated SL/TP level. Output order is input order; any
//! reordering for z-layering is the renderer's business.
//!
//! Color rules differ on purpose between the two markers: the entry marker's
//! color encodes trade direction (Buy reads as Gain), the exit marker's color
//! encodes profitability. Unifying them would change observable behavior.

use crate::domain::{
    ColorClass, ConnectorSegment, ExecutedTrade, Marker, MarkerPosition, MarkerShape, PriceLine,
    PricePoint, TradeAction,
};

/// Derive entry/exit markers for every trade, entry first.
///
/// Expects time-normalized trades (close strictly after open); entry and exit
/// markers of one trade otherwise collapse onto the same time slot.
pub fn derive_markers(trades: &[ExecutedTrade]) -> Vec<Marker> {
    let mut markers = Vec::with_capacity(trades.len() * 2);
    for trade in trades {
        markers.push(entry_marker(trade));
        markers.push(exit_marker(trade));
    }
    markers
}

fn entry_marker(trade: &ExecutedTrade) -> Marker {
    let is_buy = trade.entry_action == TradeAction::Buy;
    Marker {
        time: trade.open_timestamp,
        position: if is_buy {
            MarkerPosition::BelowBar
        } else {
            MarkerPosition::AboveBar
        },
        color: if is_buy { ColorClass::Gain } else { ColorClass::Loss },
        shape: if is_buy {
            MarkerShape::ArrowUp
        } else {
            MarkerShape::ArrowDown
        },
        label: trade.entry_action.to_string(),
    }
}

fn exit_marker(trade: &ExecutedTrade) -> Marker {
    let is_sell = trade.exit_action == TradeAction::Sell;
    Marker {
        time: trade.close_timestamp,
        position: if is_sell {
            MarkerPosition::AboveBar
        } else {
            MarkerPosition::BelowBar
        },
        color: profit_color(trade.profit),
        shape: if is_sell {
            MarkerShape::ArrowDown
        } else {
            MarkerShape::ArrowUp
        },
        label: format!("{} {}", trade.exit_action, format_signed(trade.profit)),
    }
}

/// One connector per trade: entry point → exit point, colored by profit sign.
pub fn derive_connectors(trades: &[ExecutedTrade]) -> Vec<ConnectorSegment> {
    trades
        .iter()
        .map(|trade| ConnectorSegment {
            start: PricePoint {
                time: trade.open_timestamp,
                price: trade.entry_price,
            },
            end: PricePoint {
                time: trade.close_timestamp,
                price: trade.exit_price,
            },
            color: profit_color(trade.profit),
        })
        .collect()
}

/// Horizontal price levels for stop-loss and take-profit, when the trade
/// carries them. SL before TP within a trade, trades in input order.
pub fn derive_price_lines(trades: &[ExecutedTrade]) -> Vec<PriceLine> {
    let mut lines = Vec::new();
    for trade in trades {
        if let Some(sl) = trade.sl_price {
            lines.push(PriceLine {
                price: sl,
                label: "SL".into(),
                color: ColorClass::Loss,
            });
        }
        if let Some(tp) = trade.tp_price {
            lines.push(PriceLine {
                price: tp,
                label: "TP".into(),
                color: ColorClass::Gain,
            });
        }
    }
    lines
}

fn profit_color(profit: f64) -> ColorClass {
    if profit >= 0.0 {
        ColorClass::Gain
    } else {
        ColorClass::Loss
    }
}

/// Format a profit value with an explicit `+` for non-negative amounts.
/// Negative values keep the sign their representation already carries.
fn format_signed(profit: f64) -> String {
    if profit >= 0.0 {
        format!("+{profit}")
    } else {
        profit.to_string()
    }
}
