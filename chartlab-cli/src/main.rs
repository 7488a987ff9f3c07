//! ChartLab CLI — turn raw backtest output files into a rendering-ready
//! chart snapshot.
//!
//! Reads a candle file (JSON array or CSV) and optionally a trade file
//! (JSON array), runs the normalization pipeline, and writes the resulting
//! `ChartSnapshot` as JSON to stdout or `--out`. Malformed candle records
//! are dropped and reported on stderr; they never abort the run.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use chartlab_core::decode::{decode_candles, CoercionFailure, DecodedCandles, InvalidCandleError};
use chartlab_core::domain::{Candle, ExecutedTrade};
use chartlab_core::snapshot::ChartSnapshot;

#[derive(Parser)]
#[command(
    name = "chartlab",
    about = "ChartLab — normalize backtest candles and trades for charting"
)]
struct Cli {
    /// Candle file: JSON array of OHLC objects, or CSV with a
    /// time,open,high,low,close header (chosen by extension).
    #[arg(long)]
    candles: PathBuf,

    /// Trade file: JSON array of executed trades. Omit for a candles-only
    /// snapshot.
    #[arg(long)]
    trades: Option<PathBuf>,

    /// Write the snapshot JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the snapshot JSON.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let decoded = load_candles(&cli.candles)?;
    for err in &decoded.rejected {
        eprintln!("WARNING: dropped {err}");
    }

    let trades = match &cli.trades {
        Some(path) => load_trades(path)?,
        None => Vec::new(),
    };

    let raw_candle_count = decoded.candles.len();
    let trade_count = trades.len();
    let snapshot = ChartSnapshot::prepare(decoded.candles, trades);

    print_summary(&snapshot, raw_candle_count, decoded.rejected.len(), trade_count);

    let json = if cli.pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };

    match &cli.out {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
            eprintln!("Snapshot written to: {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// One CSV candle row. csv's serde support already parses quoted numerics,
/// so the flexible coercion lives in the type; `time` keeps fractional input
/// and is truncated on conversion.
#[derive(Debug, Deserialize)]
struct CsvCandle {
    time: f64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

impl From<CsvCandle> for Candle {
    fn from(row: CsvCandle) -> Self {
        Candle {
            time: row.time as i64,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
        }
    }
}

fn load_candles(path: &Path) -> Result<DecodedCandles> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        load_candles_csv(path)
    } else {
        load_candles_json(path)
    }
}

fn load_candles_json(path: &Path) -> Result<DecodedCandles> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read candle file {}", path.display()))?;
    let raw: Vec<Value> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array", path.display()))?;
    Ok(decode_candles(&raw))
}

fn load_candles_csv(path: &Path) -> Result<DecodedCandles> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to read candle file {}", path.display()))?;

    // Same policy as JSON: a bad row is dropped, not fatal
    let mut out = DecodedCandles::default();
    for (index, record) in reader.deserialize::<CsvCandle>().enumerate() {
        let reject = |reason| InvalidCandleError {
            index,
            field: "record",
            reason,
        };
        match record {
            Ok(row) if !row.time.is_finite() => {
                out.rejected.push(reject(CoercionFailure::NotFinite));
            }
            Ok(row) => {
                let candle = Candle::from(row);
                if candle.has_non_finite() {
                    out.rejected.push(reject(CoercionFailure::NotFinite));
                } else {
                    out.candles.push(candle);
                }
            }
            Err(_) => out.rejected.push(reject(CoercionFailure::NotNumeric)),
        }
    }
    Ok(out)
}

fn load_trades(path: &Path) -> Result<Vec<ExecutedTrade>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read trade file {}", path.display()))?;
    let trades: Vec<ExecutedTrade> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of executed trades", path.display()))?;
    Ok(trades)
}

fn print_summary(snapshot: &ChartSnapshot, decoded: usize, rejected: usize, trades: usize) {
    eprintln!("=== Chart Snapshot ===");
    eprintln!(
        "Candles:     {} decoded, {} rejected, {} after dedup",
        decoded,
        rejected,
        snapshot.candles.len()
    );
    eprintln!("Trades:      {trades}");
    eprintln!("Markers:     {}", snapshot.markers.len());
    eprintln!("Connectors:  {}", snapshot.connectors.len());
    eprintln!("Price lines: {}", snapshot.price_lines.len());
}
