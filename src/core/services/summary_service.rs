//! Per-category aggregation behind the dashboard charts.

use crate::domain::{category::Category, transaction::Transaction};

/// Colours assigned to chart slices by position.
pub const CHART_PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#AF19FF"];

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Category totals in the order each category was first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    totals: Vec<CategoryTotal>,
}

impl CategoryTotals {
    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.totals.iter()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn get(&self, category: &Category) -> Option<f64> {
        self.totals
            .iter()
            .find(|entry| &entry.category == category)
            .map(|entry| entry.total)
    }

    pub fn grand_total(&self) -> f64 {
        self.totals.iter().map(|entry| entry.total).sum()
    }

    fn add(&mut self, category: &Category, amount: f64) {
        match self.totals.iter_mut().find(|entry| &entry.category == category) {
            Some(entry) => entry.total += amount,
            None => self.totals.push(CategoryTotal {
                category: category.clone(),
                total: amount,
            }),
        }
    }
}

/// One bar or wedge of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub category: Category,
    pub total: f64,
    pub color: &'static str,
}

pub struct SummaryService;

impl SummaryService {
    pub fn aggregate(transactions: &[Transaction]) -> CategoryTotals {
        let mut totals = CategoryTotals::default();
        for txn in transactions {
            totals.add(&txn.category, txn.amount.value());
        }
        totals
    }

    /// Bar chart projection: largest total first, ties in first-seen order.
    pub fn bar_chart(totals: &CategoryTotals) -> Vec<ChartSlice> {
        let mut ordered: Vec<&CategoryTotal> = totals.iter().collect();
        ordered.sort_by(|a, b| b.total.total_cmp(&a.total));
        colorize(ordered)
    }

    /// Pie chart projection: first-seen order.
    pub fn pie_chart(totals: &CategoryTotals) -> Vec<ChartSlice> {
        colorize(totals.iter().collect())
    }

    pub fn total_expenses(transactions: &[Transaction]) -> f64 {
        transactions.iter().map(|txn| txn.amount.value()).sum()
    }
}

fn colorize(entries: Vec<&CategoryTotal>) -> Vec<ChartSlice> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| ChartSlice {
            category: entry.category.clone(),
            total: entry.total,
            color: CHART_PALETTE[index % CHART_PALETTE.len()],
        })
        .collect()
}
