//! Monthly report table for the sales TUI.
//!
//! Renders a bordered [`ratatui::widgets::Table`] with one row per month
//! plus a highlighted store-total row at the bottom, and the panels shown
//! when there is no data or the sales file could not be loaded.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use sales_core::formatting;
use sales_core::models::{MonthKey, MonthOrder, MonthSummary, StoreSummary};

use crate::themes::Theme;

/// Data for a single month row in the report table.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRowData {
    /// Month label, e.g. `"1-2023"`.
    pub month: String,
    pub total_sales: f64,
    pub most_popular_item: Option<String>,
    pub highest_revenue_item: Option<String>,
    pub min_orders: u32,
    pub max_orders: u32,
    pub avg_orders: f64,
}

impl MonthRowData {
    pub fn from_summary(key: &MonthKey, summary: &MonthSummary) -> Self {
        Self {
            month: key.to_string(),
            total_sales: summary.total_sales,
            most_popular_item: summary.most_popular_item.clone(),
            highest_revenue_item: summary.highest_revenue_item.clone(),
            min_orders: summary.min_orders,
            max_orders: summary.max_orders,
            avg_orders: summary.avg_orders,
        }
    }
}

/// Store-wide figures shown in the totals row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTotals {
    /// Sum of sales across all months.
    pub total_store_sales: f64,
    /// Number of months (rows) represented.
    pub months: usize,
    /// Rows the parser dropped as malformed.
    pub rows_skipped: usize,
}

/// Flatten a [`StoreSummary`] into table rows in the requested order.
pub fn build_rows(summary: &StoreSummary, order: MonthOrder) -> Vec<MonthRowData> {
    summary
        .ordered(order)
        .into_iter()
        .map(|(key, month)| MonthRowData::from_summary(key, month))
        .collect()
}

/// Render the monthly report table into `area`.
pub fn render_report_view(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[MonthRowData],
    totals: &ReportTotals,
    theme: &Theme,
) {
    let header_cells = [
        "Month",
        "Total Sales",
        "Most Popular",
        "Top Revenue",
        "Min Orders",
        "Max Orders",
        "Avg Orders",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            let popular = row.most_popular_item.as_deref();
            let revenue = row.highest_revenue_item.as_deref();
            Row::new(vec![
                Cell::from(row.month.clone()),
                Cell::from(formatting::format_currency(row.total_sales)),
                Cell::from(formatting::format_item(popular).to_string())
                    .style(theme.item_style(popular)),
                Cell::from(formatting::format_item(revenue).to_string())
                    .style(theme.item_style(revenue)),
                Cell::from(row.min_orders.to_string()),
                Cell::from(row.max_orders.to_string()),
                Cell::from(formatting::format_average(row.avg_orders)),
            ])
            .style(style)
        })
        .collect();

    let skipped = if totals.rows_skipped == 0 {
        String::new()
    } else {
        format!("{} rows skipped", totals.rows_skipped)
    };

    let total_row = Row::new(vec![
        Cell::from("TOTAL").style(theme.table_total),
        Cell::from(formatting::format_currency(totals.total_store_sales)),
        Cell::from(format!("{} months", totals.months)),
        Cell::from(skipped),
        Cell::from(""),
        Cell::from(""),
        Cell::from(""),
    ])
    .style(theme.table_total);

    let mut all_rows = data_rows;
    all_rows.push(total_row);

    let widths = [
        Constraint::Length(10),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(11),
    ];

    let table = Table::new(all_rows, widths)
        .header(header)
        .block(panel_block(title, theme))
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Render a "no data" placeholder when the file held no valid sales.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No sales data found", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "Rows need the shape date,sku,unitPrice,quantity,totalPrice.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text))
            .block(panel_block("Sales Report", theme)),
        area,
    );
}

/// Render the load failure message.
pub fn render_load_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme.error)),
        Line::from(""),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text))
            .wrap(Wrap { trim: true })
            .block(panel_block("Sales Report", theme)),
        area,
    );
}

/// Bordered block with the title drawn in the theme's header style.
fn panel_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.table_border)
        .title(format!(" {} ", title))
        .title_style(theme.header)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
