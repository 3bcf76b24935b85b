use clap::Parser;
use std::path::PathBuf;

use crate::error::{Result, SalesError};
use crate::models::MonthOrder;

/// Default location of the sales file, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "assets/sales_data.txt";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Monthly sales report from a CSV transaction file
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sales-report",
    about = "Monthly sales report from a CSV transaction file",
    version
)]
pub struct Settings {
    /// Sales file path or http(s) URL
    #[arg(long, env = "SALES_REPORT_SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Output mode
    #[arg(long, default_value = "table", value_parser = ["table", "text", "json"])]
    pub output: String,

    /// Month ordering
    #[arg(long, default_value = "input", value_parser = ["input", "chronological"])]
    pub order: String,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply derived values.
    ///
    /// `--help`, `--version` and malformed arguments are handled by clap,
    /// which prints and exits.
    pub fn load() -> Result<Self> {
        Settings::parse().resolve().validate()
    }

    /// Same as [`Settings::load`] but with an explicit argument list, so tests
    /// can drive it without spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let settings = Settings::try_parse_from(args)
            .map_err(|e| SalesError::Config(e.to_string()))?;
        settings.resolve().validate()
    }

    /// Apply the `--debug` flag.
    fn resolve(mut self) -> Self {
        if self.debug {
            self.log_level = "DEBUG".to_string();
        }
        self
    }

    fn validate(self) -> Result<Self> {
        if self.source.trim().is_empty() {
            return Err(SalesError::Config("--source must not be empty".to_string()));
        }
        Ok(self)
    }

    pub fn month_order(&self) -> MonthOrder {
        MonthOrder::from_name(&self.order)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
