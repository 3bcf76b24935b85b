use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// One valid row of the sales file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRecord {
    /// Calendar date of the sale.
    pub date: NaiveDate,
    /// Stock-keeping unit of the item sold.
    pub sku: String,
    /// Price of a single unit.
    pub unit_price: f64,
    /// Number of units sold.
    pub quantity: u32,
    /// Price of the whole line.
    pub total_price: f64,
}

impl SaleRecord {
    /// The calendar month this sale is reported under.
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

// ── MonthKey ──────────────────────────────────────────────────────────────────

/// Calendar month grouping key, displayed as `"<month>-<year>"` (e.g. `"1-2023"`).
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Build a key from a year and a 1-based month. Returns `None` when
    /// `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month of the year.
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.month, self.year)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── MonthOrder ────────────────────────────────────────────────────────────────

/// Order in which months are handed to a presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthOrder {
    /// Order of first appearance in the sales file.
    #[default]
    Input,
    /// Calendar order, oldest first.
    Chronological,
}

impl MonthOrder {
    /// Resolve a CLI value; unknown names fall back to [`MonthOrder::Input`].
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "chronological" => MonthOrder::Chronological,
            _ => MonthOrder::Input,
        }
    }
}

// ── Summaries ─────────────────────────────────────────────────────────────────

/// Statistics derived for one month.
///
/// A month without items reports `None` for both item fields and zero for
/// every order statistic; `item_count` tells the two cases apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    /// Sum of `total_price` over the month's sales.
    pub total_sales: f64,
    /// SKU with the largest quantity sold.
    pub most_popular_item: Option<String>,
    /// SKU with the largest revenue.
    pub highest_revenue_item: Option<String>,
    /// Fewest orders recorded for a single SKU.
    pub min_orders: u32,
    /// Most orders recorded for a single SKU.
    pub max_orders: u32,
    /// Mean number of orders per distinct SKU.
    pub avg_orders: f64,
    /// Number of distinct SKUs sold in the month.
    pub item_count: usize,
}

impl MonthSummary {
    /// Summary of a month that has no items.
    pub fn empty(total_sales: f64) -> Self {
        Self {
            total_sales,
            most_popular_item: None,
            highest_revenue_item: None,
            min_orders: 0,
            max_orders: 0,
            avg_orders: 0.0,
            item_count: 0,
        }
    }
}

/// Final output of the pipeline: per-month summaries plus the store total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreSummary {
    /// Month summaries in first-appearance order.
    pub months: IndexMap<MonthKey, MonthSummary>,
    /// Sum of every valid sale's `total_price`.
    pub total_store_sales: f64,
}

impl StoreSummary {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Look up a month by its display form, e.g. `"2-2023"`.
    pub fn get(&self, key: &str) -> Option<&MonthSummary> {
        self.months
            .iter()
            .find(|(k, _)| k.to_string() == key)
            .map(|(_, v)| v)
    }

    /// Months sorted by calendar date, oldest first.
    pub fn chronological(&self) -> Vec<(&MonthKey, &MonthSummary)> {
        let mut months: Vec<_> = self.months.iter().collect();
        months.sort_by_key(|(k, _)| **k);
        months
    }

    /// Months in the requested presentation order.
    pub fn ordered(&self, order: MonthOrder) -> Vec<(&MonthKey, &MonthSummary)> {
        match order {
            MonthOrder::Input => self.months.iter().collect(),
            MonthOrder::Chronological => self.chronological(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
