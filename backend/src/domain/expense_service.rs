//! Expense domain service.
//!
//! [`ExpenseService`] implements both expense driving ports on top of an
//! [`ExpenseRepository`]. It owns the normalisation step, so every record a
//! repository sees has already passed validation.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    CategorySummaryResponse, CreateExpenseRequest, CreateExpenseResponse, ExpenseCommand,
    ExpenseQuery, ExpenseRepository, ExpenseRepositoryError, GetExpenseRequest,
    GetExpenseResponse, ListExpensesResponse, MonthlySummaryResponse, UpdateExpenseRequest,
    UpdateExpenseResponse,
};
use crate::domain::{
    Error, ExpenseDraft, ExpensePayload, ExpenseValidationError, summarize_by_category,
    summarize_by_month,
};

fn map_repository_error(error: ExpenseRepositoryError) -> Error {
    match error {
        ExpenseRepositoryError::Unavailable { message } => {
            Error::internal(format!("expense repository unavailable: {message}"))
        }
        ExpenseRepositoryError::Query { message } => {
            Error::internal(format!("expense repository error: {message}"))
        }
    }
}

fn map_validation_error(error: ExpenseValidationError) -> Error {
    let details = json!({
        "field": error.field(),
        "value": error.value(),
        "code": error.code(),
    });
    debug!(field = error.field(), code = error.code(), "expense payload rejected");
    Error::validation_failed(error.to_string()).with_details(details)
}

/// Expense service implementing [`ExpenseCommand`] and [`ExpenseQuery`].
#[derive(Clone)]
pub struct ExpenseService<R> {
    expense_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ExpenseService<R> {
    /// Create a service over `expense_repo`.
    ///
    /// `clock` supplies the local calendar date used when a payload omits
    /// `expense_date`.
    pub fn new(expense_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            expense_repo,
            clock,
        }
    }

    fn normalise(&self, payload: ExpensePayload) -> Result<ExpenseDraft, Error> {
        payload
            .into_draft(self.clock.local().date_naive())
            .map_err(map_validation_error)
    }
}

#[async_trait]
impl<R> ExpenseCommand for ExpenseService<R>
where
    R: ExpenseRepository,
{
    async fn create_expense(
        &self,
        request: CreateExpenseRequest,
    ) -> Result<CreateExpenseResponse, Error> {
        let draft = self.normalise(request.expense)?;
        let expense = self
            .expense_repo
            .append(draft)
            .await
            .map_err(map_repository_error)?;
        info!(id = %expense.id(), "expense created");
        Ok(CreateExpenseResponse { expense })
    }

    async fn update_expense(
        &self,
        request: UpdateExpenseRequest,
    ) -> Result<UpdateExpenseResponse, Error> {
        let UpdateExpenseRequest { id, expense } = request;
        let draft = self.normalise(expense)?;
        let updated = self
            .expense_repo
            .apply_update(id, draft)
            .await
            .map_err(map_repository_error)?;
        match updated {
            Some(expense) => {
                info!(%id, "expense updated");
                Ok(UpdateExpenseResponse { expense })
            }
            None => Err(Error::not_found(format!("expense {id} not found"))),
        }
    }
}

#[async_trait]
impl<R> ExpenseQuery for ExpenseService<R>
where
    R: ExpenseRepository,
{
    async fn list_expenses(&self) -> Result<ListExpensesResponse, Error> {
        let expenses = self
            .expense_repo
            .list_all()
            .await
            .map_err(map_repository_error)?;
        Ok(ListExpensesResponse { expenses })
    }

    async fn get_expense(&self, request: GetExpenseRequest) -> Result<GetExpenseResponse, Error> {
        let id = request.id;
        self.expense_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .map(|expense| GetExpenseResponse { expense })
            .ok_or_else(|| Error::not_found(format!("expense {id} not found")))
    }

    async fn summarize_by_category(&self) -> Result<CategorySummaryResponse, Error> {
        let expenses = self
            .expense_repo
            .list_all()
            .await
            .map_err(map_repository_error)?;
        Ok(CategorySummaryResponse {
            categories: summarize_by_category(&expenses),
        })
    }

    async fn summarize_by_month(&self) -> Result<MonthlySummaryResponse, Error> {
        let expenses = self
            .expense_repo
            .list_all()
            .await
            .map_err(map_repository_error)?;
        Ok(MonthlySummaryResponse {
            months: summarize_by_month(&expenses),
        })
    }
}

#[cfg(test)]
#[path = "expense_service_tests.rs"]
mod tests;
