//! Data pipeline for the sales report.
//!
//! Loads the sales file, parses it into typed records, folds them into
//! monthly accumulators and derives the per-month summary statistics.

pub mod aggregator;
pub mod analysis;
pub mod loader;
pub mod parser;
pub mod summarizer;

pub use sales_core as core;
