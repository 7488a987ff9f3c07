//! ChartLab demo — renders the sample snapshot and exits on any key.

use std::io::{self, stdout};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use chartlab_core::snapshot::ChartSnapshot;
use chartlab_tui::panels::OverlayChartPanel;
use chartlab_tui::sample_data::{sample_candles, sample_trades};
use chartlab_tui::theme::Theme;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let snapshot = ChartSnapshot::prepare(sample_candles(), sample_trades());
    let theme = Theme::default();

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = (|| -> Result<()> {
        terminal.draw(|frame| {
            let panel = OverlayChartPanel::new(&snapshot, "SAMPLE", &theme);
            frame.render_widget(panel, frame.area());
        })?;

        // Block until any input event, then exit
        loop {
            if matches!(event::read()?, Event::Key(_)) {
                break;
            }
        }
        Ok(())
    })();

    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    result
}
