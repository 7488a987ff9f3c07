//! Overlay chart panel - OHLC candles with trade annotations
//!
//! Renders a `ChartSnapshot` using direct buffer writes:
//! - Each candle = 1 terminal column (tail window when the series is wider)
//! - Body: block char, green if close >= open, pink otherwise
//! - Wicks: vertical line chars to high/low
//! - Trade markers: ▲/▼ glyphs above/below the anchored candle column
//! - Connector segments: dotted interpolated lines entry → exit
//! - SL/TP price lines: horizontal dashed lines with labels

use chartlab_core::axis::PriceBounds;
use chartlab_core::domain::{Candle, MarkerPosition, MarkerShape};
use chartlab_core::snapshot::ChartSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::theme::Theme;

/// Chart panel widget over a prepared snapshot.
pub struct OverlayChartPanel<'a> {
    snapshot: &'a ChartSnapshot,
    symbol: &'a str,
    theme: &'a Theme,
}

/// Geometry of the visible plot: which candle slice is shown and where.
struct PlotWindow<'a> {
    candles: &'a [Candle],
    left: u16,
    top: u16,
    width: u16,
    height: u16,
    bounds: PriceBounds,
}

impl PlotWindow<'_> {
    /// Map a price to a Y offset in the plot area (0 = top).
    fn price_to_y(&self, price: f64) -> u16 {
        if self.bounds.range().abs() < 1e-9 || self.height == 0 {
            return 0;
        }
        let frac = (price - self.bounds.lower) / self.bounds.range();
        let y = self.height.saturating_sub(1) as f64 * (1.0 - frac);
        y.round().max(0.0).min(self.height.saturating_sub(1) as f64) as u16
    }

    /// Map an epoch time to a plot column: the column of the last visible
    /// candle at or before `time`. Times before the window are off-plot.
    fn time_to_x(&self, time: i64) -> Option<u16> {
        let at_or_before = self.candles.partition_point(|c| c.time <= time);
        if at_or_before == 0 {
            return None;
        }
        let idx = (at_or_before - 1).min(self.candles.len() - 1);
        Some(self.left + idx as u16)
    }

    fn contains_price(&self, price: f64) -> bool {
        price >= self.bounds.lower && price <= self.bounds.upper
    }
}

impl<'a> OverlayChartPanel<'a> {
    pub fn new(snapshot: &'a ChartSnapshot, symbol: &'a str, theme: &'a Theme) -> Self {
        Self {
            snapshot,
            symbol,
            theme,
        }
    }

    fn render_candles(&self, window: &PlotWindow, area: Rect, buf: &mut Buffer) {
        for (i, candle) in window.candles.iter().enumerate() {
            let x = window.left + i as u16;
            if x >= area.right() {
                break;
            }

            let color = if candle.is_up() {
                self.theme.positive
            } else {
                self.theme.negative
            };
            let style = Style::default().fg(color);

            let high_y = window.price_to_y(candle.high);
            let low_y = window.price_to_y(candle.low);
            let body_top_y = window.price_to_y(candle.open.max(candle.close));
            let body_bot_y = window.price_to_y(candle.open.min(candle.close));

            // Upper wick
            for y in high_y..body_top_y {
                let py = window.top + y;
                if py < area.bottom() {
                    buf.set_string(x, py, "|", style);
                }
            }

            // Body
            let body_char = if candle.is_up() { "\u{2588}" } else { "\u{2593}" };
            for y in body_top_y..=body_bot_y {
                let py = window.top + y;
                if py < area.bottom() {
                    buf.set_string(x, py, body_char, style);
                }
            }

            // Lower wick
            for y in (body_bot_y + 1)..=low_y {
                let py = window.top + y;
                if py < area.bottom() {
                    buf.set_string(x, py, "|", style);
                }
            }
        }
    }

    fn render_connectors(&self, window: &PlotWindow, area: Rect, buf: &mut Buffer) {
        for segment in &self.snapshot.connectors {
            let (Some(x1), Some(x2)) = (
                window.time_to_x(segment.start.time),
                window.time_to_x(segment.end.time),
            ) else {
                continue;
            };
            if !window.contains_price(segment.start.price)
                || !window.contains_price(segment.end.price)
            {
                continue;
            }

            let style = Style::default()
                .fg(self.theme.color_for(segment.color))
                .add_modifier(Modifier::DIM);

            let y1 = window.price_to_y(segment.start.price) as f64;
            let y2 = window.price_to_y(segment.end.price) as f64;
            let (lo_x, hi_x, from_y, to_y) = if x1 <= x2 {
                (x1, x2, y1, y2)
            } else {
                (x2, x1, y2, y1)
            };

            let span = (hi_x - lo_x) as f64;
            for x in lo_x..=hi_x {
                if x >= area.right() {
                    break;
                }
                let frac = if span > 0.0 { (x - lo_x) as f64 / span } else { 0.0 };
                let y = (from_y + (to_y - from_y) * frac).round() as u16;
                let py = window.top + y.min(window.height.saturating_sub(1));
                if py < area.bottom() {
                    buf.set_string(x, py, "\u{00b7}", style);
                }
            }
        }
    }

    fn render_price_lines(&self, window: &PlotWindow, area: Rect, buf: &mut Buffer) {
        for line in &self.snapshot.price_lines {
            if !window.contains_price(line.price) {
                continue;
            }
            let py = window.top + window.price_to_y(line.price);
            if py >= area.bottom() {
                continue;
            }

            let color = self.theme.color_for(line.color);
            let style = Style::default().fg(color).add_modifier(Modifier::DIM);
            for x in window.left..window.left + window.width {
                if x < area.right() {
                    let ch = if (x - window.left) % 3 == 0 { "-" } else { " " };
                    buf.set_string(x, py, ch, style);
                }
            }

            let label_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
            buf.set_string(window.left, py, &line.label, label_style);
        }
    }

    fn render_markers(&self, window: &PlotWindow, area: Rect, buf: &mut Buffer) {
        for marker in &self.snapshot.markers {
            let Some(x) = window.time_to_x(marker.time) else {
                continue;
            };
            if x >= area.right() {
                continue;
            }
            let candle = &window.candles[(x - window.left) as usize];

            // Anchor one row above the high / below the low, clamped to plot
            let y = match marker.position {
                MarkerPosition::AboveBar => window.price_to_y(candle.high).saturating_sub(1),
                MarkerPosition::BelowBar => (window.price_to_y(candle.low) + 1)
                    .min(window.height.saturating_sub(1)),
            };
            let glyph = match marker.shape {
                MarkerShape::ArrowUp => "\u{25b2}",
                MarkerShape::ArrowDown => "\u{25bc}",
            };
            let style = Style::default()
                .fg(self.theme.color_for(marker.color))
                .add_modifier(Modifier::BOLD);

            let py = window.top + y;
            if py < area.bottom() {
                buf.set_string(x, py, glyph, style);
            }
        }
    }
}

impl Widget for OverlayChartPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.snapshot.candles.is_empty() {
            let block = Block::default()
                .title(format!(" Chart: {} [No Data] ", self.symbol))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.muted))
                .style(Style::default().bg(self.theme.background));
            block.render(area, buf);
            return;
        }

        let candles = &self.snapshot.candles;
        let up_count = candles.iter().filter(|c| c.is_up()).count();
        let title = format!(
            " {} | {} candles | {} up {} down | {} trades ",
            self.symbol,
            candles.len(),
            up_count,
            candles.len() - up_count,
            self.snapshot.connectors.len(),
        );

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));

        let inner = block.inner(area);
        block.render(area, buf);

        // Left margin for Y-axis labels, one row at the bottom for info
        let label_width: u16 = 8;
        let plot_width = inner.width.saturating_sub(label_width);
        let plot_height = inner.height.saturating_sub(1);
        if plot_width == 0 || plot_height == 0 {
            return;
        }

        // Tail window when the series is wider than the plot
        let visible = plot_width as usize;
        let start = candles.len().saturating_sub(visible);
        let visible_candles = &candles[start..];

        let Some(bounds) = PriceBounds::from_candles(visible_candles) else {
            return;
        };

        let window = PlotWindow {
            candles: visible_candles,
            left: inner.x + label_width,
            top: inner.y,
            width: plot_width,
            height: plot_height,
            bounds,
        };

        // Y-axis labels
        let y_labels = [
            bounds.upper,
            (bounds.upper + bounds.lower) / 2.0,
            bounds.lower,
        ];
        let y_positions = [0u16, plot_height / 2, plot_height.saturating_sub(1)];
        for (value, y) in y_labels.iter().zip(y_positions.iter()) {
            let py = window.top + y;
            if py < inner.y + inner.height {
                buf.set_string(
                    inner.x,
                    py,
                    format!("{value:>7.1}"),
                    Style::default().fg(self.theme.muted),
                );
            }
        }

        // Draw order: candles, then lines beneath markers, markers on top
        self.render_candles(&window, area, buf);
        self.render_price_lines(&window, area, buf);
        self.render_connectors(&window, area, buf);
        self.render_markers(&window, area, buf);

        // Bottom info row
        let info_y = window.top + plot_height;
        if info_y < area.bottom() {
            let info = format!(
                "{} markers | {} connectors | {} price lines",
                self.snapshot.markers.len(),
                self.snapshot.connectors.len(),
                self.snapshot.price_lines.len(),
            );
            buf.set_string(window.left, info_y, info, Style::default().fg(self.theme.muted));
        }
    }
}
