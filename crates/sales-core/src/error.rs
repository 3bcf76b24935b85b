use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the sales report.
#[derive(Error, Debug)]
pub enum SalesError {
    /// The sales file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The remote resource answered with a non-success status.
    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// The remote resource could not be reached or its body not read.
    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },

    /// A JSON document could not be produced.
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl SalesError {
    /// `true` for the variants raised while fetching the sales resource.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            SalesError::FileRead { .. } | SalesError::HttpStatus { .. } | SalesError::Http { .. }
        )
    }

    /// The single human-readable line shown to the user when loading fails.
    pub fn display_message(&self) -> String {
        format!("Error fetching the file: {}", self)
    }
}

/// Convenience alias used throughout the sales crates.
pub type Result<T> = std::result::Result<T, SalesError>;
