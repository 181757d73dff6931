//! Records loaded into a fresh store at start-up.

use chrono::NaiveDate;

use super::{ExpenseDraft, ExpensePayload, ExpenseValidationError};

struct SeedRow {
    title: &'static str,
    amount: i64,
    category: &'static str,
    expense_date: &'static str,
    description: &'static str,
    payment_method: &'static str,
}

const SEED_ROWS: [SeedRow; 5] = [
    SeedRow {
        title: "Grocery Shopping",
        amount: 50,
        category: "Food",
        expense_date: "2026-02-11",
        description: "Weekly groceries",
        payment_method: "Card",
    },
    SeedRow {
        title: "Gas",
        amount: 40,
        category: "Transport",
        expense_date: "2026-02-09",
        description: "Fuel for car",
        payment_method: "Card",
    },
    SeedRow {
        title: "Movie Tickets",
        amount: 25,
        category: "Entertainment",
        expense_date: "2026-02-06",
        description: "Cinema visit",
        payment_method: "Cash",
    },
    SeedRow {
        title: "Electricity Bill",
        amount: 120,
        category: "Bills",
        expense_date: "2026-02-04",
        description: "Monthly electricity",
        payment_method: "Online",
    },
    SeedRow {
        title: "Restaurant",
        amount: 60,
        category: "Food",
        expense_date: "2026-02-03",
        description: "Dinner out",
        payment_method: "Card",
    },
];

/// The five seed expenses, in insertion order.
///
/// Rows pass through the same normalisation as client input so a seed can
/// never hold a value a client could not have stored.
///
/// # Errors
/// Returns the first row that fails validation.
pub fn seed_drafts() -> Result<Vec<ExpenseDraft>, ExpenseValidationError> {
    SEED_ROWS
        .iter()
        .map(|row| {
            let payload = ExpensePayload {
                title: row.title.to_owned(),
                amount: row.amount,
                category: row.category.to_owned(),
                expense_date: Some(row.expense_date.to_owned()),
                description: row.description.to_owned(),
                payment_method: row.payment_method.to_owned(),
            };
            // Every row carries a date, so the fallback is never consulted.
            payload.into_draft(NaiveDate::MIN)
        })
        .collect()
}
