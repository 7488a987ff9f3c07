//! Chart panels.

mod overlay_chart;

pub use overlay_chart::OverlayChartPanel;
