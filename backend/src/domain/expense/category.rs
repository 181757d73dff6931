//! Enumerated expense fields: category and payment method.

use std::fmt;
use std::str::FromStr;

use super::normalize::title_case;

/// Spending category of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Health,
    Other,
}

/// Error returned when text does not name a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCategoryError;

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 7] = [
        Self::Food,
        Self::Transport,
        Self::Shopping,
        Self::Bills,
        Self::Entertainment,
        Self::Health,
        Self::Other,
    ];

    /// Canonical display text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }

    /// Trim and title-case `raw`, then match it against the canonical text.
    ///
    /// # Examples
    /// ```
    /// use spendwise_backend::domain::Category;
    ///
    /// assert_eq!(Category::normalize(" FOOD "), Ok(Category::Food));
    /// assert!(Category::normalize("Unknown").is_err());
    /// ```
    pub fn normalize(raw: &str) -> Result<Self, ParseCategoryError> {
        title_case(raw.trim()).parse()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid expense category")
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or(ParseCategoryError)
    }
}

/// How an expense was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Cash,
    Card,
    Online,
}

/// Error returned when text does not name a [`PaymentMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsePaymentMethodError;

impl PaymentMethod {
    /// Every payment method in display order.
    pub const ALL: [Self; 3] = [Self::Cash, Self::Card, Self::Online];

    /// Canonical display text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Card => "Card",
            Self::Online => "Online",
        }
    }

    /// Trim and title-case `raw`, then match it against the canonical text.
    pub fn normalize(raw: &str) -> Result<Self, ParsePaymentMethodError> {
        title_case(raw.trim()).parse()
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ParsePaymentMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid payment method")
    }
}

impl std::error::Error for ParsePaymentMethodError {}

impl FromStr for PaymentMethod {
    type Err = ParsePaymentMethodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or(ParsePaymentMethodError)
    }
}
