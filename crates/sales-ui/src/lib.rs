//! Presentation layer for the sales report.
//!
//! Provides themes, the monthly report table and the main application event
//! loop built on top of [`ratatui`], plus a plain-text renderer for
//! non-interactive output.

pub mod app;
pub mod report_view;
pub mod text_view;
pub mod themes;

pub use sales_core as core;
