//! Shared traits, filter selectors, and parse errors for ledger primitives.

use std::{fmt, str::FromStr};

use crate::{
    category::Category,
    transaction::{TransactionId, TransactionKind},
};

/// Exposes a stable identifier for entities stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> TransactionId;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// A filter selector that either accepts everything or a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

/// Selector over transaction types.
pub type TypeFilter = Selection<TransactionKind>;

/// Selector over categories.
pub type CategoryFilter = Selection<Category>;

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = ParseValueError>,
{
    type Err = ParseValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            value.parse().map(Selection::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Only(value) => value.fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raised when text cannot be mapped onto one of the fixed domain enums.
pub struct ParseValueError {
    kind: &'static str,
    value: String,
}

impl ParseValueError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for ParseValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.value)
    }
}

impl std::error::Error for ParseValueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_selection_matches_everything() {
        let filter: Selection<TransactionKind> = Selection::All;
        assert!(filter.matches(&TransactionKind::Income));
        assert!(filter.matches(&TransactionKind::Expense));
    }

    #[test]
    fn only_selection_matches_single_value() {
        let filter = Selection::Only(Category::Food);
        assert!(filter.matches(&Category::Food));
        assert!(!filter.matches(&Category::Bills));
    }

    #[test]
    fn selection_parses_all_keyword_and_values() {
        assert_eq!(
            "ALL".parse::<Selection<TransactionKind>>().unwrap(),
            Selection::All
        );
        assert_eq!(
            "expense".parse::<Selection<TransactionKind>>().unwrap(),
            Selection::Only(TransactionKind::Expense)
        );
        let err = "rent".parse::<Selection<Category>>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category `rent`");
    }
}
