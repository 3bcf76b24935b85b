//! Application state and TUI event loop for the sales report.
//!
//! [`App`] owns the theme and the screen to show.  The report is static, so
//! the loop only redraws and waits for `q` / `Ctrl+C`.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use sales_core::error::{Result, SalesError};
use sales_core::models::MonthOrder;
use sales_data::analysis::SalesAnalysis;

use crate::report_view::{self, MonthRowData, ReportTotals};
use crate::themes::Theme;

// ── Screen ────────────────────────────────────────────────────────────────────

/// What the TUI is currently rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// The monthly table.
    Report {
        rows: Vec<MonthRowData>,
        totals: ReportTotals,
    },
    /// The file loaded but held no valid sales.
    NoData,
    /// The file could not be loaded.
    LoadError(String),
}

impl Screen {
    /// Pick the screen for a finished pipeline run.
    pub fn from_result(
        result: &Result<SalesAnalysis>,
        order: MonthOrder,
    ) -> Self {
        match result {
            Err(e) => Screen::LoadError(e.display_message()),
            Ok(analysis) if analysis.summary.is_empty() => Screen::NoData,
            Ok(analysis) => Screen::Report {
                rows: report_view::build_rows(&analysis.summary, order),
                totals: ReportTotals {
                    total_store_sales: analysis.summary.total_store_sales,
                    months: analysis.summary.months.len(),
                    rows_skipped: analysis.metadata.rows_skipped,
                },
            },
        }
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the sales TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Table title.
    pub title: String,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    pub fn new(theme_name: &str, title: impl Into<String>) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            title: title.into(),
            should_quit: false,
        }
    }

    /// Draw `screen` until the user quits.
    ///
    /// The terminal is restored on every exit path, including a failed setup.
    pub async fn run(mut self, screen: Screen) -> Result<()> {
        let result = match setup_terminal() {
            Ok(mut terminal) => self.event_loop(&mut terminal, &screen),
            Err(e) => Err(e),
        };
        let restored = restore_terminal();

        result.and(restored).map_err(terminal_error)
    }

    fn event_loop(
        &mut self,
        terminal: &mut CrosstermTerminal,
        screen: &Screen,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame, screen))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Render `screen` into `frame`.
    pub fn render(&self, frame: &mut Frame, screen: &Screen) {
        let area = frame.area();
        match screen {
            Screen::Report { rows, totals } => {
                report_view::render_report_view(frame, area, &self.title, rows, totals, &self.theme)
            }
            Screen::NoData => report_view::render_no_data(frame, area, &self.theme),
            Screen::LoadError(message) => {
                report_view::render_load_error(frame, area, message, &self.theme)
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> io::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leave raw mode and the alternate screen and show the cursor. Every step
/// runs even when an earlier one fails.
fn restore_terminal() -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        execute!(io::stdout(), LeaveAlternateScreen),
        execute!(io::stdout(), Show),
    ])
}

fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().fold(Ok(()), |acc, step| acc.and(step))
}

fn terminal_error(e: io::Error) -> SalesError {
    SalesError::Terminal(e.to_string())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
