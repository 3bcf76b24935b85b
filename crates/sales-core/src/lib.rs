//! Shared domain types for the sales report.
//!
//! Holds the sale record and summary models, the error type, CLI settings
//! and number formatting used by the data and UI crates.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
