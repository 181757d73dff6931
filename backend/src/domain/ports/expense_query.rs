//! Driving port for expense read operations.

use async_trait::async_trait;

use crate::domain::{CategorySummary, Error, Expense, ExpenseId, MonthlySummary};

/// Every stored expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListExpensesResponse {
    pub expenses: Vec<Expense>,
}

/// Request to fetch one expense by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetExpenseRequest {
    pub id: ExpenseId,
}

/// Response for a single expense lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetExpenseResponse {
    pub expense: Expense,
}

/// Spend grouped by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummaryResponse {
    pub categories: Vec<CategorySummary>,
}

/// Spend grouped by calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummaryResponse {
    pub months: Vec<MonthlySummary>,
}

/// Driving port for expense read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpenseQuery: Send + Sync {
    /// Every record in insertion order.
    async fn list_expenses(&self) -> Result<ListExpensesResponse, Error>;

    /// One record by identifier.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn get_expense(&self, request: GetExpenseRequest) -> Result<GetExpenseResponse, Error>;

    /// Totals per category, for categories with at least one record.
    async fn summarize_by_category(&self) -> Result<CategorySummaryResponse, Error>;

    /// Totals per calendar month, oldest first.
    async fn summarize_by_month(&self) -> Result<MonthlySummaryResponse, Error>;
}
