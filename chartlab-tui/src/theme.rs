//! Color tokens for the chart panel.
//!
//! Dark background with neon accents; gains in green, losses in pink, so the
//! overlay color classes read instantly against the candle colors.

use chartlab_core::domain::ColorClass;
use ratatui::style::Color;

/// Chart panel theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (borders, focus)
    pub accent: Color,
    /// Neon green (up candles, gains)
    pub positive: Color,
    /// Hot pink (down candles, losses)
    pub negative: Color,
    /// Steel blue (axis labels, secondary text)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
        }
    }
}

impl Theme {
    /// Map an overlay color class to a terminal color.
    pub fn color_for(&self, class: ColorClass) -> Color {
        match class {
            ColorClass::Gain => self.positive,
            ColorClass::Loss => self.negative,
        }
    }
}
