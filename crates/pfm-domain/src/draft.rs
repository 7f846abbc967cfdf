//! Editable transaction input that has not been validated yet.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{category::Category, transaction::TransactionKind};

/// Form state for a transaction being entered. The amount stays as raw text
/// until it is coerced at submission time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Category,
    pub description: String,
    pub amount: String,
}

impl TransactionDraft {
    /// A blank form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            kind: TransactionKind::Income,
            category: Category::Salary,
            description: String::new(),
            amount: String::new(),
        }
    }

    /// Restores the default form values.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// Numeric value of the amount text. Blank text reads as zero; anything
    /// unparsable or non-finite yields `None`.
    pub fn coerced_amount(&self) -> Option<f64> {
        let raw = self.amount.trim();
        if raw.is_empty() {
            return Some(0.0);
        }
        raw.parse::<f64>().ok().filter(|value| value.is_finite())
    }

    /// The positive amount this draft would record, if it is acceptable.
    pub fn accepted_amount(&self) -> Option<f64> {
        if self.description.is_empty() {
            return None;
        }
        self.coerced_amount().filter(|amount| *amount > 0.0)
    }
}
