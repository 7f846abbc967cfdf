//! The fixed set of transaction categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::common::ParseValueError;

/// Categorises ledger activity for reporting. Any category may be used with
/// either transaction type.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub enum Category {
    #[default]
    Salary,
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 7] = [
        Category::Salary,
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseValueError::new("category", needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(
            " Entertainment ".parse::<Category>().unwrap(),
            Category::Entertainment
        );
        assert!("Rent".parse::<Category>().is_err());
    }

    #[test]
    fn serializes_with_display_name() {
        let json = serde_json::to_string(&Category::Transport).unwrap();
        assert_eq!(json, "\"Transport\"");
    }
}
