//! Derivation of per-month statistics from the monthly accumulators.

use indexmap::IndexMap;
use sales_core::models::{MonthSummary, StoreSummary};

use crate::aggregator::{ItemAccumulator, MonthAccumulator, MonthlyAggregation};

/// Build the [`StoreSummary`] handed to presenters.
pub fn summarize(aggregation: &MonthlyAggregation) -> StoreSummary {
    let months: IndexMap<_, _> = aggregation
        .months
        .iter()
        .map(|(key, month)| (*key, summarize_month(month)))
        .collect();

    StoreSummary {
        months,
        total_store_sales: aggregation.total_store_sales,
    }
}

/// Statistics for a single month.
///
/// Ties on quantity or revenue go to the SKU that appeared first. A month
/// without items yields [`MonthSummary::empty`].
pub fn summarize_month(month: &MonthAccumulator) -> MonthSummary {
    if month.items.is_empty() {
        return MonthSummary::empty(month.total_sales);
    }

    let most_popular_item = first_max_by(month, |item| item.quantity);
    let highest_revenue_item = first_max_by(month, |item| item.revenue);

    let orders = month.items.values().map(|item| item.orders);
    let min_orders = orders.clone().min().unwrap_or_default();
    let max_orders = orders.clone().max().unwrap_or_default();
    let total_orders: u64 = orders.map(u64::from).sum();
    let item_count = month.items.len();

    MonthSummary {
        total_sales: month.total_sales,
        most_popular_item,
        highest_revenue_item,
        min_orders,
        max_orders,
        avg_orders: total_orders as f64 / item_count as f64,
        item_count,
    }
}

/// SKU with the strictly greatest `metric`; the earliest one wins a tie.
fn first_max_by<T: PartialOrd + Copy>(
    month: &MonthAccumulator,
    metric: impl Fn(&ItemAccumulator) -> T,
) -> Option<String> {
    let mut best: Option<(&String, T)> = None;
    for (sku, item) in &month.items {
        let value = metric(item);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((sku, value)),
        }
    }
    best.map(|(sku, _)| sku.clone())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
