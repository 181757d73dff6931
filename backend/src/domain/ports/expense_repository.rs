//! Port for expense storage.

use async_trait::async_trait;

use crate::domain::{Expense, ExpenseDraft, ExpenseId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by expense repository adapters.
    pub enum ExpenseRepositoryError {
        /// The backing store cannot serve requests.
        Unavailable { message: String } =>
            "expense repository unavailable: {message}",
        /// A read or write failed during execution.
        Query { message: String } =>
            "expense repository query failed: {message}",
    }
}

/// Port for reading and writing expense records.
///
/// Adapters own identifier assignment. Every operation is atomic with
/// respect to every other, so concurrent appends never hand out the same
/// [`ExpenseId`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Every stored record in insertion order.
    async fn list_all(&self) -> Result<Vec<Expense>, ExpenseRepositoryError>;

    /// Find a record by identifier.
    async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseRepositoryError>;

    /// Store a draft under the next identifier, one greater than the largest
    /// already held (or [`ExpenseId::FIRST`] when empty).
    async fn append(&self, draft: ExpenseDraft) -> Result<Expense, ExpenseRepositoryError>;

    /// Replace every field of an existing record, keeping its identifier.
    ///
    /// Returns `Ok(None)` when no record has `id`; nothing is inserted.
    async fn apply_update(
        &self,
        id: ExpenseId,
        draft: ExpenseDraft,
    ) -> Result<Option<Expense>, ExpenseRepositoryError>;
}
