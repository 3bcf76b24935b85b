//! Folding sale records into per-month, per-SKU accumulators.

use indexmap::IndexMap;
use sales_core::models::{MonthKey, SaleRecord};
use serde::Serialize;

// ── ItemAccumulator ───────────────────────────────────────────────────────────

/// Running totals for one SKU within one month.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemAccumulator {
    /// Units sold.
    pub quantity: u64,
    /// Sum of line totals.
    pub revenue: f64,
    /// Number of sale rows.
    pub orders: u32,
}

impl ItemAccumulator {
    /// Add a single sale's counts to the running totals.
    pub fn add_sale(&mut self, sale: &SaleRecord) {
        self.quantity += u64::from(sale.quantity);
        self.revenue += sale.total_price;
        self.orders += 1;
    }
}

// ── MonthAccumulator ──────────────────────────────────────────────────────────

/// All sales within one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthAccumulator {
    /// Sum of line totals for the month.
    pub total_sales: f64,
    /// Per-SKU totals, in order of first appearance.
    pub items: IndexMap<String, ItemAccumulator>,
}

impl MonthAccumulator {
    /// Accumulate `sale` into the month and its SKU.
    pub fn add_sale(&mut self, sale: &SaleRecord) {
        self.total_sales += sale.total_price;
        // Avoid allocating a key for SKUs already present.
        match self.items.get_mut(&sale.sku) {
            Some(item) => item.add_sale(sale),
            None => {
                let mut item = ItemAccumulator::default();
                item.add_sale(sale);
                self.items.insert(sale.sku.clone(), item);
            }
        }
    }
}

// ── MonthlyAggregation ────────────────────────────────────────────────────────

/// Aggregator output: month accumulators plus the store-wide total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyAggregation {
    /// Months in order of first appearance, not calendar order.
    pub months: IndexMap<MonthKey, MonthAccumulator>,
    /// Sum of every record's `total_price`.
    pub total_store_sales: f64,
}

// ── SalesAggregator ───────────────────────────────────────────────────────────

/// Stateless helper that groups sale records by calendar month.
pub struct SalesAggregator;

impl SalesAggregator {
    /// Fold `records` into monthly accumulators.
    pub fn aggregate(records: &[SaleRecord]) -> MonthlyAggregation {
        let mut aggregation = MonthlyAggregation::default();

        for sale in records {
            aggregation
                .months
                .entry(sale.month_key())
                .or_default()
                .add_sale(sale);
            aggregation.total_store_sales += sale.total_price;
        }

        aggregation
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sale(date: &str, sku: &str, unit_price: f64, quantity: u32, total_price: f64) -> SaleRecord {
        SaleRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            sku: sku.to_string(),
            unit_price,
            quantity,
            total_price,
        }
    }

    fn key(year: i32, month: u32) -> MonthKey {
        MonthKey::new(year, month).unwrap()
    }

    fn reference_records() -> Vec<SaleRecord> {
        vec![
            sale("2023-01-05", "A1", 10.0, 2, 20.0),
            sale("2023-01-06", "A1", 10.0, 1, 10.0),
            sale("2023-02-01", "B2", 5.0, 4, 20.0),
        ]
    }

    // ── aggregate ─────────────────────────────────────────────────────────────

    #[test]
    fn test_groups_by_month() {
        let agg = SalesAggregator::aggregate(&reference_records());

        assert_eq!(agg.months.len(), 2);
        let jan = &agg.months[&key(2023, 1)];
        assert_eq!(jan.total_sales, 30.0);
        assert_eq!(jan.items.len(), 1);

        let a1 = &jan.items["A1"];
        assert_eq!(a1.quantity, 3);
        assert_eq!(a1.revenue, 30.0);
        assert_eq!(a1.orders, 2);

        let feb = &agg.months[&key(2023, 2)];
        assert_eq!(feb.total_sales, 20.0);
        assert_eq!(feb.items["B2"].orders, 1);

        assert_eq!(agg.total_store_sales, 50.0);
    }

    #[test]
    fn test_empty_records() {
        let agg = SalesAggregator::aggregate(&[]);
        assert!(agg.months.is_empty());
        assert_eq!(agg.total_store_sales, 0.0);
    }

    #[test]
    fn test_months_keep_first_appearance_order() {
        let records = vec![
            sale("2023-03-01", "A1", 1.0, 1, 1.0),
            sale("2022-12-01", "A1", 1.0, 1, 1.0),
            sale("2023-03-15", "B2", 1.0, 1, 1.0),
            sale("2023-01-01", "A1", 1.0, 1, 1.0),
        ];
        let agg = SalesAggregator::aggregate(&records);

        let keys: Vec<String> = agg.months.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["3-2023", "12-2022", "1-2023"]);
    }

    #[test]
    fn test_same_month_different_years_are_separate() {
        let records = vec![
            sale("2022-01-10", "A1", 1.0, 1, 1.0),
            sale("2023-01-10", "A1", 1.0, 1, 1.0),
        ];
        let agg = SalesAggregator::aggregate(&records);
        assert_eq!(agg.months.len(), 2);
    }

    #[test]
    fn test_items_keep_first_appearance_order() {
        let records = vec![
            sale("2023-01-01", "Z9", 1.0, 1, 1.0),
            sale("2023-01-02", "A1", 1.0, 1, 1.0),
            sale("2023-01-03", "M5", 1.0, 1, 1.0),
            sale("2023-01-04", "A1", 1.0, 1, 1.0),
        ];
        let agg = SalesAggregator::aggregate(&records);

        let skus: Vec<&str> = agg.months[&key(2023, 1)]
            .items
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(skus, vec!["Z9", "A1", "M5"]);
    }

    // ── invariants ────────────────────────────────────────────────────────────

    #[test]
    fn test_month_totals_sum_to_store_total() {
        let records = vec![
            sale("2023-01-05", "A1", 10.0, 2, 20.0),
            sale("2023-01-20", "B2", 2.5, 3, 7.5),
            sale("2023-02-01", "B2", 2.5, 1, 2.5),
            sale("2023-03-09", "C3", 99.99, 1, 99.99),
            sale("2023-03-10", "A1", 10.0, 5, 50.0),
        ];
        let agg = SalesAggregator::aggregate(&records);

        let month_sum: f64 = agg.months.values().map(|m| m.total_sales).sum();
        assert!((month_sum - agg.total_store_sales).abs() < 1e-9);
    }

    #[test]
    fn test_item_revenue_sums_to_month_total() {
        let records = vec![
            sale("2023-01-05", "A1", 10.0, 2, 20.0),
            sale("2023-01-20", "B2", 2.5, 3, 7.5),
            sale("2023-01-21", "C3", 1.1, 3, 3.3),
            sale("2023-01-22", "B2", 2.5, 2, 5.0),
        ];
        let agg = SalesAggregator::aggregate(&records);
        let jan = &agg.months[&key(2023, 1)];

        let revenue: f64 = jan.items.values().map(|i| i.revenue).sum();
        let quantity: u64 = jan.items.values().map(|i| i.quantity).sum();
        let orders: u32 = jan.items.values().map(|i| i.orders).sum();

        assert!((revenue - jan.total_sales).abs() < 1e-9);
        assert_eq!(quantity, 10);
        assert_eq!(orders, 4);
    }

    // ── accumulators ──────────────────────────────────────────────────────────

    #[test]
    fn test_item_accumulator_add_sale() {
        let mut item = ItemAccumulator::default();
        item.add_sale(&sale("2023-01-05", "A1", 10.0, 2, 20.0));
        item.add_sale(&sale("2023-01-06", "A1", 10.0, 0, 0.0));

        assert_eq!(item.quantity, 2);
        assert_eq!(item.revenue, 20.0);
        assert_eq!(item.orders, 2);
    }
}
