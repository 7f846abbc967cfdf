//! Domain model for recorded income and expense entries.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{category::Category, common::*};

/// Millisecond-timestamp derived identifier, unique within a ledger.
pub type TransactionId = u64;

/// A single recorded entry. Immutable once stored; it is only ever replaced by deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Category,
    pub description: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        date: NaiveDate,
        kind: TransactionKind,
        category: Category,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id,
            date,
            kind,
            category,
            description: description.into(),
            amount,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> TransactionId {
        self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "{} {} {} [{}] {:.2}",
            self.date, self.kind, self.description, self.category, self.amount
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
/// Direction of money flow for a transaction.
pub enum TransactionKind {
    #[default]
    Income,
    Expense,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ParseValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(ParseValueError::new("transaction type", other)),
        }
    }
}
