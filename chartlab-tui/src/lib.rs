//! ChartLab TUI — terminal rendering surface for chart snapshots.
//!
//! A thin adapter over `chartlab-core`: the panel consumes a prepared
//! `ChartSnapshot` and writes cells; all data shaping stays in the core so
//! the chart logic is testable without a terminal.

pub mod panels;
pub mod sample_data;
pub mod theme;
