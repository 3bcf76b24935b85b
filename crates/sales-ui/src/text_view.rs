//! Plain-text rendering of the report, for pipes and non-interactive use.

use std::fmt::Write;

use sales_core::formatting::{format_average, format_currency, format_item};
use sales_core::models::{MonthOrder, StoreSummary};

/// Render one block per month followed by the store total.
///
/// ```text
/// Month: 1-2023
/// Total Sales: $30.00
/// Most Popular Item: A1
/// Highest Revenue Item: A1
/// Min Orders: 2
/// Max Orders: 2
/// Avg Orders: 2.00
/// ```
pub fn render_text(summary: &StoreSummary, order: MonthOrder) -> String {
    let mut out = String::from("Sales Report\n");

    if summary.is_empty() {
        out.push_str("\nNo sales data found\n");
    }

    for (key, month) in summary.ordered(order) {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "\nMonth: {}\n\
             Total Sales: {}\n\
             Most Popular Item: {}\n\
             Highest Revenue Item: {}\n\
             Min Orders: {}\n\
             Max Orders: {}\n\
             Avg Orders: {}\n",
            key,
            format_currency(month.total_sales),
            format_item(month.most_popular_item.as_deref()),
            format_item(month.highest_revenue_item.as_deref()),
            month.min_orders,
            month.max_orders,
            format_average(month.avg_orders),
        );
    }

    let _ = write!(
        out,
        "\nTotal Store Sales: {}\n",
        format_currency(summary.total_store_sales)
    );
    out
}

/// Render the load failure line.
pub fn render_error_text(message: &str) -> String {
    format!("Sales Report\n\n{}\n", message)
}
