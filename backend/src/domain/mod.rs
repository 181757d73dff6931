//! Domain primitives, aggregates, and services.
//!
//! Purpose: define the expense record, the normalisation rules applied to
//! client input, and the services that drive the repository port. Nothing in
//! here knows about HTTP.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - TraceId: request-scoped correlation identifier.
//! - Expense, ExpenseDraft, ExpenseId, ExpensePayload: the expense aggregate
//!   and its input form.
//! - ExpenseService: implements the expense driving ports.

pub mod error;
pub mod expense;
mod expense_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::expense::{
    Category, CategorySummary, Expense, ExpenseDraft, ExpenseId, ExpensePayload,
    ExpenseValidationError, MonthlySummary, ParseCategoryError, ParsePaymentMethodError,
    PaymentMethod, seed_drafts, summarize_by_category, summarize_by_month, title_case,
};
pub use self::expense_service::ExpenseService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

