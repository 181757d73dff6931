//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`ExpenseCommand`], [`ExpenseQuery`]) are what inbound
//! adapters call. The driven port ([`ExpenseRepository`]) is what storage
//! adapters implement; its errors are typed so the service maps them into
//! predictable [`crate::domain::Error`] values.

mod macros;
pub(crate) use macros::define_port_error;

mod expense_command;
mod expense_query;
mod expense_repository;

#[cfg(test)]
pub use expense_command::MockExpenseCommand;
pub use expense_command::{
    CreateExpenseRequest, CreateExpenseResponse, ExpenseCommand, UpdateExpenseRequest,
    UpdateExpenseResponse,
};
#[cfg(test)]
pub use expense_query::MockExpenseQuery;
pub use expense_query::{
    CategorySummaryResponse, ExpenseQuery, GetExpenseRequest, GetExpenseResponse,
    ListExpensesResponse, MonthlySummaryResponse,
};
#[cfg(test)]
pub use expense_repository::MockExpenseRepository;
pub use expense_repository::{ExpenseRepository, ExpenseRepositoryError};
