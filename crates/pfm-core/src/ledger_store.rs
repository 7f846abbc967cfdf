//! The single owned store for the session's transactions.

use std::collections::HashSet;

use chrono::NaiveDate;
use pfm_domain::{
    CategoryFilter, Identifiable, Transaction, TransactionDraft, TransactionId, TypeFilter,
};

use crate::{
    chart_service::{BarChart, ChartService, PieChart},
    storage::{KeyValueStorage, STORAGE_KEY},
    summary_service::{CategoryBreakdown, LedgerSummary, SummaryService},
    time::Clock,
    CoreError,
};

/// Holds the ordered ledger and mirrors every change into a storage slot.
///
/// Mutations are staged, written to storage, and only then committed to
/// memory, so the stored blob always matches [`LedgerStore::transactions`].
pub struct LedgerStore {
    transactions: Vec<Transaction>,
    storage: Box<dyn KeyValueStorage>,
    clock: Box<dyn Clock>,
    key: String,
    last_id: TransactionId,
}

impl LedgerStore {
    /// Loads the ledger from the default storage slot. Absent or malformed
    /// data yields an empty ledger.
    pub fn initialize(storage: Box<dyn KeyValueStorage>, clock: Box<dyn Clock>) -> Self {
        Self::initialize_with_key(storage, clock, STORAGE_KEY)
    }

    pub fn initialize_with_key(
        storage: Box<dyn KeyValueStorage>,
        clock: Box<dyn Clock>,
        key: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let transactions = match storage.get(&key) {
            Ok(Some(blob)) => decode_ledger(&blob),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(%key, error = %err, "storage read failed; starting with an empty ledger");
                Vec::new()
            }
        };
        let last_id = transactions.iter().map(|txn| txn.id).max().unwrap_or(0);
        tracing::info!(%key, count = transactions.len(), "ledger loaded");
        Self {
            transactions,
            storage,
            clock,
            key,
            last_id,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// A blank form dated today.
    pub fn new_draft(&self) -> TransactionDraft {
        TransactionDraft::new(self.today())
    }

    /// Appends a transaction built from `draft`.
    ///
    /// Returns `Ok(None)` without touching the ledger when the description is
    /// empty or the amount is not strictly positive.
    pub fn add(&mut self, draft: &TransactionDraft) -> Result<Option<TransactionId>, CoreError> {
        let Some(amount) = draft.accepted_amount() else {
            tracing::debug!("draft rejected");
            return Ok(None);
        };
        let id = self.next_id();
        let transaction = Transaction::new(
            id,
            draft.date,
            draft.kind,
            draft.category,
            draft.description.clone(),
            amount,
        );
        let mut next = self.transactions.clone();
        next.push(transaction);
        self.commit(next)?;
        self.last_id = id;
        tracing::debug!(id, count = self.transactions.len(), "transaction added");
        Ok(Some(id))
    }

    /// Adds the draft and, on success, resets it to the default form values.
    /// A rejected draft is left as entered.
    pub fn submit(
        &mut self,
        draft: &mut TransactionDraft,
    ) -> Result<Option<TransactionId>, CoreError> {
        let added = self.add(draft)?;
        if added.is_some() {
            draft.reset(self.today());
        }
        Ok(added)
    }

    /// Removes the transaction with `id`. Returns whether a record matched;
    /// survivors keep their order.
    pub fn remove(&mut self, id: TransactionId) -> Result<bool, CoreError> {
        let next: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|txn| txn.id != id)
            .cloned()
            .collect();
        let removed = next.len() != self.transactions.len();
        self.commit(next)?;
        tracing::debug!(id, removed, count = self.transactions.len(), "remove applied");
        Ok(removed)
    }

    pub fn summary(&self) -> LedgerSummary {
        SummaryService::summarize(&self.transactions)
    }

    pub fn total_income(&self) -> f64 {
        SummaryService::total_income(&self.transactions)
    }

    pub fn total_expense(&self) -> f64 {
        SummaryService::total_expense(&self.transactions)
    }

    pub fn balance(&self) -> f64 {
        SummaryService::balance(&self.transactions)
    }

    pub fn expense_by_category(&self) -> CategoryBreakdown {
        SummaryService::expense_by_category(&self.transactions)
    }

    pub fn filtered(
        &self,
        type_filter: TypeFilter,
        category_filter: CategoryFilter,
    ) -> Vec<&Transaction> {
        SummaryService::filtered(&self.transactions, type_filter, category_filter)
    }

    pub fn expense_pie(&self) -> PieChart {
        ChartService::expense_pie(&self.transactions)
    }

    pub fn income_vs_expense(&self) -> BarChart {
        ChartService::income_vs_expense(&self.transactions)
    }

    fn next_id(&self) -> TransactionId {
        let now = self.clock.now_millis();
        if now > self.last_id {
            now
        } else {
            self.last_id + 1
        }
    }

    fn commit(&mut self, next: Vec<Transaction>) -> Result<(), CoreError> {
        self.persist(&next)?;
        self.transactions = next;
        Ok(())
    }

    fn persist(&self, transactions: &[Transaction]) -> Result<(), CoreError> {
        let blob = serde_json::to_string(transactions)?;
        self.storage.set(&self.key, &blob)
    }
}

/// Parses a stored blob, dropping records that break ledger invariants.
fn decode_ledger(blob: &str) -> Vec<Transaction> {
    let parsed: Vec<Transaction> = match serde_json::from_str(blob) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(error = %err, "stored ledger is malformed; starting with an empty ledger");
            return Vec::new();
        }
    };
    let mut seen = HashSet::new();
    parsed
        .into_iter()
        .filter(|txn| {
            let valid = txn.amount > 0.0
                && txn.amount.is_finite()
                && !txn.description.is_empty()
                && seen.insert(txn.id());
            if !valid {
                tracing::warn!(id = txn.id, "dropping invalid stored transaction");
            }
            valid
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{storage::MemoryStorage, time::FixedClock};
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };
    use pfm_domain::{Category, Selection, TransactionKind};

    fn clock() -> Box<FixedClock> {
        Box::new(FixedClock::at_date(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        ))
    }

    fn draft(
        kind: TransactionKind,
        category: Category,
        description: &str,
        amount: &str,
    ) -> TransactionDraft {
        TransactionDraft {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            kind,
            category,
            description: description.into(),
            amount: amount.into(),
        }
    }

    fn store_with(storage: &MemoryStorage) -> LedgerStore {
        LedgerStore::initialize(Box::new(storage.clone()), clock())
    }

    #[test]
    fn starts_empty_without_stored_data() {
        let store = store_with(&MemoryStorage::new());
        assert!(store.is_empty());
        assert_eq!(store.storage_key(), STORAGE_KEY);
    }

    #[test]
    fn malformed_blob_yields_empty_ledger() {
        let storage = MemoryStorage::with_value(STORAGE_KEY, "{not json");
        let store = store_with(&storage);
        assert!(store.is_empty());
    }

    #[test]
    fn invalid_stored_records_are_dropped() {
        let blob = r#"[
            {"id":1,"date":"2024-01-01","type":"income","category":"Salary","description":"Pay","amount":10},
            {"id":1,"date":"2024-01-01","type":"income","category":"Salary","description":"Dup","amount":10},
            {"id":2,"date":"2024-01-01","type":"expense","category":"Food","description":"","amount":5},
            {"id":3,"date":"2024-01-01","type":"expense","category":"Food","description":"Neg","amount":-5}
        ]"#;
        let store = store_with(&MemoryStorage::with_value(STORAGE_KEY, blob));
        assert_eq!(store.len(), 1);
        assert_eq!(store.transactions()[0].description, "Pay");
    }

    #[test]
    fn add_assigns_clock_derived_ids_and_persists() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        let first = store
            .add(&draft(TransactionKind::Income, Category::Salary, "Pay", "5000"))
            .unwrap()
            .expect("accepted");
        let second = store
            .add(&draft(TransactionKind::Expense, Category::Food, "Food", "150"))
            .unwrap()
            .expect("accepted");
        assert_eq!(first, 1_704_067_200_000);
        assert_eq!(second, first + 1);

        let blob = storage.get(STORAGE_KEY).unwrap().expect("blob written");
        let stored: Vec<Transaction> = serde_json::from_str(&blob).unwrap();
        assert_eq!(stored, store.transactions());
    }

    #[test]
    fn rejected_drafts_leave_ledger_and_storage_untouched() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        let outcome = store
            .add(&draft(TransactionKind::Expense, Category::Food, "Refund", "-5"))
            .unwrap();
        assert_eq!(outcome, None);
        assert!(store.is_empty());
        assert_eq!(storage.get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn submit_resets_form_only_on_success() {
        let mut store = store_with(&MemoryStorage::new());
        let mut form = draft(TransactionKind::Expense, Category::Bills, "", "20");
        assert_eq!(store.submit(&mut form).unwrap(), None);
        assert_eq!(form.amount, "20");
        assert_eq!(form.category, Category::Bills);

        form.description = "Power".into();
        assert!(store.submit(&mut form).unwrap().is_some());
        assert_eq!(form, store.new_draft());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = store_with(&MemoryStorage::new());
        let id = store
            .add(&draft(TransactionKind::Income, Category::Other, "Gift", "12"))
            .unwrap()
            .unwrap();
        assert!(store.remove(id).unwrap());
        assert!(!store.remove(id).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = store_with(&MemoryStorage::new());
        let first = store
            .add(&draft(TransactionKind::Income, Category::Other, "A", "1"))
            .unwrap()
            .unwrap();
        store.remove(first).unwrap();
        let second = store
            .add(&draft(TransactionKind::Income, Category::Other, "B", "1"))
            .unwrap()
            .unwrap();
        assert!(second > first);
    }

    #[test]
    fn derived_views_delegate_to_summary() {
        let mut store = store_with(&MemoryStorage::new());
        store
            .add(&draft(TransactionKind::Income, Category::Salary, "Pay", "100"))
            .unwrap();
        store
            .add(&draft(TransactionKind::Expense, Category::Food, "Lunch", "30"))
            .unwrap();
        assert_eq!(store.total_income(), 100.0);
        assert_eq!(store.total_expense(), 30.0);
        assert_eq!(store.balance(), 70.0);
        assert_eq!(store.expense_by_category().get(Category::Food), Some(30.0));
        assert_eq!(
            store
                .filtered(Selection::Only(TransactionKind::Income), Selection::All)
                .len(),
            1
        );
        assert_eq!(store.expense_pie().slices.len(), 1);
        assert_eq!(store.income_vs_expense().bars[1].value, 30.0);
    }

    struct FailingStorage;

    impl KeyValueStorage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, CoreError> {
            Err(CoreError::Storage("unavailable".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), CoreError> {
            Err(CoreError::Storage("disk full".into()))
        }

        fn remove(&self, _key: &str) -> Result<(), CoreError> {
            Ok(())
        }
    }

    #[test]
    fn failed_writes_keep_memory_unchanged() {
        let mut store = LedgerStore::initialize(Box::new(FailingStorage), clock());
        assert!(store.is_empty());
        let err = store
            .add(&draft(TransactionKind::Income, Category::Salary, "Pay", "1"))
            .expect_err("write should fail");
        assert!(err.to_string().contains("disk full"));
        assert!(store.is_empty());
    }

    /// Memory-backed storage whose writes can be switched off mid-test.
    #[derive(Clone, Default)]
    struct SwitchableStorage {
        inner: MemoryStorage,
        fail_writes: Arc<AtomicBool>,
    }

    impl KeyValueStorage for SwitchableStorage {
        fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(CoreError::Storage("disk full".into()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), CoreError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn failed_remove_keeps_the_record() {
        let storage = SwitchableStorage::default();
        let mut store = LedgerStore::initialize(Box::new(storage.clone()), clock());
        let id = store
            .add(&draft(TransactionKind::Income, Category::Salary, "Pay", "10"))
            .unwrap()
            .unwrap();
        let before = storage.get(STORAGE_KEY).unwrap();

        storage.fail_writes.store(true, Ordering::SeqCst);
        assert!(store.remove(id).is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).map(|txn| txn.description.as_str()), Some("Pay"));
        assert_eq!(storage.get(STORAGE_KEY).unwrap(), before);
    }

    #[test]
    fn remove_rewrites_the_slot_with_survivors() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        let keep = store
            .add(&draft(TransactionKind::Income, Category::Salary, "Keep", "10"))
            .unwrap()
            .unwrap();
        let gone = store
            .add(&draft(TransactionKind::Expense, Category::Food, "Drop", "4"))
            .unwrap()
            .unwrap();

        assert!(store.remove(gone).unwrap());
        let stored: Vec<Transaction> =
            serde_json::from_str(&storage.get(STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, keep);
    }

    #[test]
    fn unmatched_remove_still_rewrites_the_slot() {
        let storage = MemoryStorage::with_value(STORAGE_KEY, "stale");
        let mut store = store_with(&storage);
        assert!(!store.remove(999).unwrap());
        assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }
}
