//! Untrusted expense input and its normalisation into a draft.

use chrono::NaiveDate;

use super::{Category, ExpenseDraft, PaymentMethod};

/// Calendar date format accepted for `expense_date`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Text-typed expense fields as supplied by a client.
///
/// Every field except `id` is present; `expense_date` may be omitted and
/// then defaults to the caller-supplied current date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpensePayload {
    pub title: String,
    pub amount: i64,
    pub category: String,
    pub expense_date: Option<String>,
    pub description: String,
    pub payment_method: String,
}

/// Reasons an [`ExpensePayload`] cannot become an [`ExpenseDraft`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseValidationError {
    /// The title was empty once trimmed.
    #[error("title must not be empty")]
    EmptyTitle,
    /// The category did not match any member after normalisation.
    #[error("category '{value}' is not one of {expected}")]
    UnknownCategory { value: String, expected: String },
    /// The payment method did not match any member after normalisation.
    #[error("payment_method '{value}' is not one of {expected}")]
    UnknownPaymentMethod { value: String, expected: String },
    /// The date was not a valid `YYYY-MM-DD` calendar date.
    #[error("expense_date '{value}' must be a calendar date in YYYY-MM-DD form")]
    InvalidDate { value: String },
}

impl ExpenseValidationError {
    /// Wire name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::UnknownCategory { .. } => "category",
            Self::UnknownPaymentMethod { .. } => "payment_method",
            Self::InvalidDate { .. } => "expense_date",
        }
    }

    /// Stable machine-readable reason code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "empty_title",
            Self::UnknownCategory { .. } => "unknown_category",
            Self::UnknownPaymentMethod { .. } => "unknown_payment_method",
            Self::InvalidDate { .. } => "invalid_date",
        }
    }

    /// Rejected input, when there is one worth echoing.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::EmptyTitle => None,
            Self::UnknownCategory { value, .. }
            | Self::UnknownPaymentMethod { value, .. }
            | Self::InvalidDate { value } => Some(value.as_str()),
        }
    }
}

/// Parse a zero-padded `YYYY-MM-DD` date.
///
/// chrono's `%Y-%m-%d` also accepts unpadded fields and signed years, so the
/// shape is checked byte by byte first.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

fn joined<T: ToString>(members: impl IntoIterator<Item = T>) -> String {
    members
        .into_iter()
        .map(|member| member.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ExpensePayload {
    /// Normalise and validate every field.
    ///
    /// `today` fills in a missing `expense_date`.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use spendwise_backend::domain::{Category, ExpensePayload, PaymentMethod};
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");
    /// let draft = ExpensePayload {
    ///     title: "Coffee".to_owned(),
    ///     amount: 5,
    ///     category: "food".to_owned(),
    ///     expense_date: None,
    ///     description: "Morning".to_owned(),
    ///     payment_method: "cash".to_owned(),
    /// }
    /// .into_draft(today)
    /// .expect("payload is valid");
    /// assert_eq!(draft.category(), Category::Food);
    /// assert_eq!(draft.payment_method(), PaymentMethod::Cash);
    /// assert_eq!(draft.expense_date(), today);
    /// ```
    pub fn into_draft(self, today: NaiveDate) -> Result<ExpenseDraft, ExpenseValidationError> {
        let Self {
            title,
            amount,
            category,
            expense_date,
            description,
            payment_method,
        } = self;

        let title = title.trim().to_owned();
        if title.is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }
        let category = Category::normalize(&category).map_err(|_| {
            ExpenseValidationError::UnknownCategory {
                value: category.clone(),
                expected: joined(Category::ALL),
            }
        })?;
        let payment_method = PaymentMethod::normalize(&payment_method).map_err(|_| {
            ExpenseValidationError::UnknownPaymentMethod {
                value: payment_method.clone(),
                expected: joined(PaymentMethod::ALL),
            }
        })?;
        let expense_date = match expense_date {
            None => today,
            Some(raw) => parse_calendar_date(raw.trim())
                .ok_or(ExpenseValidationError::InvalidDate { value: raw })?,
        };

        Ok(ExpenseDraft {
            title,
            amount,
            category,
            expense_date,
            description,
            payment_method,
        })
    }
}

impl ExpenseDraft {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn amount(&self) -> i64 {
        self.amount
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn expense_date(&self) -> NaiveDate {
        self.expense_date
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }
}
