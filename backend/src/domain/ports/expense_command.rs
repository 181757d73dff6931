//! Driving port for expense mutations.
//!
//! Inbound adapters hand over untrusted [`ExpensePayload`] values; the
//! implementation normalises them, assigns identifiers, and returns the
//! stored record.

use async_trait::async_trait;

use crate::domain::{Error, Expense, ExpenseId, ExpensePayload};

/// Request to create an expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateExpenseRequest {
    pub expense: ExpensePayload,
}

/// Response from creating an expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateExpenseResponse {
    pub expense: Expense,
}

/// Request to overwrite every mutable field of an existing expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateExpenseRequest {
    pub id: ExpenseId,
    pub expense: ExpensePayload,
}

/// Response from updating an expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateExpenseResponse {
    pub expense: Expense,
}

/// Driving port for expense write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpenseCommand: Send + Sync {
    /// Normalise the payload and append it under a fresh identifier.
    ///
    /// Fails with [`crate::domain::ErrorCode::ValidationFailed`] when a
    /// field breaks a normalisation rule; nothing is stored in that case.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use spendwise_backend::domain::{ExpensePayload, ExpenseService};
    /// # use spendwise_backend::domain::ports::{CreateExpenseRequest, ExpenseCommand};
    /// # use spendwise_backend::outbound::memory::InMemoryExpenseRepository;
    /// # async fn example() -> Result<(), spendwise_backend::domain::Error> {
    /// let service = ExpenseService::new(
    ///     Arc::new(InMemoryExpenseRepository::seeded().expect("seed rows are valid")),
    ///     Arc::new(mockable::DefaultClock),
    /// );
    /// let response = service
    ///     .create_expense(CreateExpenseRequest {
    ///         expense: ExpensePayload {
    ///             title: "Coffee".to_owned(),
    ///             amount: 5,
    ///             category: "food".to_owned(),
    ///             expense_date: None,
    ///             description: "Morning".to_owned(),
    ///             payment_method: "cash".to_owned(),
    ///         },
    ///     })
    ///     .await?;
    /// assert_eq!(response.expense.id().get(), 6);
    /// # Ok(())
    /// # }
    /// ```
    async fn create_expense(
        &self,
        request: CreateExpenseRequest,
    ) -> Result<CreateExpenseResponse, Error>;

    /// Normalise the payload and replace the record's fields.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when no record has
    /// the requested identifier.
    async fn update_expense(
        &self,
        request: UpdateExpenseRequest,
    ) -> Result<UpdateExpenseResponse, Error>;
}
