//! Read views derived from the ledger on every query.

use pfm_domain::{Amounted, Category, CategoryFilter, Transaction, TransactionKind, TypeFilter};

/// Income, expense, and balance figures for a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LedgerSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

/// Expense totals per category, in order of first appearance in the ledger.
/// Categories without expenses are absent rather than zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryBreakdown {
    entries: Vec<(Category, f64)>,
}

impl CategoryBreakdown {
    fn add(&mut self, category: Category, amount: f64) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category, amount)),
        }
    }

    pub fn get(&self, category: Category) -> Option<f64> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == category)
            .map(|(_, total)| *total)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, total)| total).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.entries.iter().copied()
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn total_for(transactions: &[Transaction], kind: TransactionKind) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .map(Amounted::amount)
            .sum()
    }

    pub fn total_income(transactions: &[Transaction]) -> f64 {
        Self::total_for(transactions, TransactionKind::Income)
    }

    pub fn total_expense(transactions: &[Transaction]) -> f64 {
        Self::total_for(transactions, TransactionKind::Expense)
    }

    pub fn balance(transactions: &[Transaction]) -> f64 {
        Self::total_income(transactions) - Self::total_expense(transactions)
    }

    pub fn summarize(transactions: &[Transaction]) -> LedgerSummary {
        let total_income = Self::total_income(transactions);
        let total_expense = Self::total_expense(transactions);
        LedgerSummary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    pub fn expense_by_category(transactions: &[Transaction]) -> CategoryBreakdown {
        let mut breakdown = CategoryBreakdown::default();
        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            breakdown.add(txn.category, txn.amount);
        }
        breakdown
    }

    /// Rows matching both selectors, in ledger order.
    pub fn filtered<'a>(
        transactions: &'a [Transaction],
        type_filter: TypeFilter,
        category_filter: CategoryFilter,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|txn| type_filter.matches(&txn.kind) && category_filter.matches(&txn.category))
            .collect()
    }
}
