//! Spending aggregates over a set of expenses.

use std::collections::BTreeMap;

use chrono::Datelike;

use super::{Category, Expense};

/// Total spend and record count for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub total: i64,
    pub count: u64,
}

/// Total spend and record count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    /// Month in `YYYY-MM` form.
    pub month: String,
    pub total: i64,
    pub count: u64,
}

#[derive(Default)]
struct Tally {
    total: i64,
    count: u64,
}

impl Tally {
    fn add(&mut self, amount: i64) {
        self.total = self.total.saturating_add(amount);
        self.count = self.count.saturating_add(1);
    }
}

/// Group expenses by category.
///
/// Only categories with at least one expense appear, in [`Category::ALL`]
/// order.
#[must_use]
pub fn summarize_by_category(expenses: &[Expense]) -> Vec<CategorySummary> {
    let mut tallies: BTreeMap<Category, Tally> = BTreeMap::new();
    for expense in expenses {
        tallies
            .entry(expense.category())
            .or_default()
            .add(expense.amount());
    }
    tallies
        .into_iter()
        .map(|(category, tally)| CategorySummary {
            category,
            total: tally.total,
            count: tally.count,
        })
        .collect()
}

/// Group expenses by the calendar month of their `expense_date`, oldest
/// month first.
#[must_use]
pub fn summarize_by_month(expenses: &[Expense]) -> Vec<MonthlySummary> {
    let mut tallies: BTreeMap<(i32, u32), Tally> = BTreeMap::new();
    for expense in expenses {
        let date = expense.expense_date();
        tallies
            .entry((date.year(), date.month()))
            .or_default()
            .add(expense.amount());
    }
    tallies
        .into_iter()
        .map(|((year, month), tally)| MonthlySummary {
            month: format!("{year:04}-{month:02}"),
            total: tally.total,
            count: tally.count,
        })
        .collect()
}
