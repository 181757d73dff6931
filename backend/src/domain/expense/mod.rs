//! Expense records and the rules that turn untrusted input into them.
//!
//! An [`ExpensePayload`] carries the text-typed fields a client sent. Calling
//! [`ExpensePayload::into_draft`] normalises and validates every field and
//! yields an [`ExpenseDraft`]; a store pairs that draft with an
//! [`ExpenseId`] to produce a stored [`Expense`].

use std::fmt;

use chrono::NaiveDate;

mod category;
mod normalize;
mod payload;
mod seed;
mod summary;

pub use category::{Category, ParseCategoryError, ParsePaymentMethodError, PaymentMethod};
pub use normalize::title_case;
pub use payload::{ExpensePayload, ExpenseValidationError};
pub use seed::seed_drafts;
pub use summary::{CategorySummary, MonthlySummary, summarize_by_category, summarize_by_month};

/// Store-assigned expense identifier.
///
/// Identifiers start at 1 and grow by one for every record appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Identifier given to the first record of an empty store.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Identifier following this one, or `None` on overflow.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated mutable fields of an expense.
///
/// Construct through [`ExpensePayload::into_draft`] so the category,
/// payment method, title, and date rules always hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub(crate) title: String,
    pub(crate) amount: i64,
    pub(crate) category: Category,
    pub(crate) expense_date: NaiveDate,
    pub(crate) description: String,
    pub(crate) payment_method: PaymentMethod,
}

/// A stored expense record.
///
/// The identifier is fixed at creation; [`Expense::replace_fields`] swaps
/// every other field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    id: ExpenseId,
    fields: ExpenseDraft,
}

impl Expense {
    /// Pair a draft with its store-assigned identifier.
    #[must_use]
    pub fn new(id: ExpenseId, fields: ExpenseDraft) -> Self {
        Self { id, fields }
    }

    /// Overwrite every mutable field, keeping the identifier.
    pub fn replace_fields(&mut self, fields: ExpenseDraft) {
        self.fields = fields;
    }

    #[must_use]
    pub fn id(&self) -> ExpenseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.fields.title
    }

    #[must_use]
    pub fn amount(&self) -> i64 {
        self.fields.amount
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.fields.category
    }

    #[must_use]
    pub fn expense_date(&self) -> NaiveDate {
        self.fields.expense_date
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.fields.description
    }

    #[must_use]
    pub fn payment_method(&self) -> PaymentMethod {
        self.fields.payment_method
    }
}
