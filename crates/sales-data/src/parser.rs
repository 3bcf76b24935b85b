//! CSV parsing of the sales file into [`SaleRecord`]s.
//!
//! The first line is a header and is always discarded. Every following line
//! must have the shape `date,sku,unitPrice,quantity,totalPrice`; quoting is
//! not supported. Blank lines are ignored, malformed rows are dropped and
//! counted.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use sales_core::models::SaleRecord;
use tracing::debug;

/// Number of columns in a data row.
pub const EXPECTED_FIELDS: usize = 5;

/// Accepted format of the `date` column (ISO-8601 calendar date).
pub const SALE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parser output: valid records in input order plus the number of rows that
/// were dropped as malformed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSales {
    pub records: Vec<SaleRecord>,
    /// Non-blank rows rejected for a wrong field count, an empty field, or an
    /// unparseable value.
    pub skipped_rows: usize,
}

/// Parse the full text of a sales file.
pub fn parse_sales(content: &str) -> ParsedSales {
    let mut parsed = ParsedSales::default();

    let Some((_header, body)) = content.split_once('\n') else {
        return parsed;
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                debug!("Skipping unreadable row: {}", e);
                parsed.skipped_rows += 1;
                continue;
            }
        };

        if is_blank(&record) {
            continue;
        }

        let fields: Vec<&str> = record.iter().collect();
        match parse_row(&fields) {
            Some(sale) => parsed.records.push(sale),
            None => {
                // +1 for the header line split off above.
                let line = record.position().map(|p| p.line() + 1).unwrap_or_default();
                debug!("Skipping malformed row at line {}: {:?}", line, fields);
                parsed.skipped_rows += 1;
            }
        }
    }

    debug!(
        "Parsed {} sale records, skipped {} rows",
        parsed.records.len(),
        parsed.skipped_rows
    );

    parsed
}

/// Build a [`SaleRecord`] from the trimmed fields of one row.
///
/// Returns `None` unless there are exactly [`EXPECTED_FIELDS`] non-empty
/// fields that all parse.
pub fn parse_row(fields: &[&str]) -> Option<SaleRecord> {
    let [date, sku, unit_price, quantity, total_price] = fields else {
        return None;
    };

    if fields.iter().any(|f| f.trim().is_empty()) {
        return None;
    }

    Some(SaleRecord {
        date: parse_sale_date(date)?,
        sku: sku.trim().to_string(),
        unit_price: parse_decimal(unit_price)?,
        quantity: quantity.trim().parse::<u32>().ok()?,
        total_price: parse_decimal(total_price)?,
    })
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_sale_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), SALE_DATE_FORMAT).ok()
}

/// Parse a finite decimal such as `"10.00"`.
fn parse_decimal(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A line with nothing but whitespace comes through as one empty field.
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(str::is_empty)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
