use chrono::NaiveDate;
use pfm_core::{FixedClock, KeyValueStorage, LedgerStore, STORAGE_KEY};
use pfm_domain::{Category, TransactionDraft, TransactionKind};
use pfm_storage_json::JsonFileStorage;
use std::fs;
use tempfile::tempdir;

fn clock() -> Box<FixedClock> {
    Box::new(FixedClock::at_date(
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    ))
}

#[test]
fn json_storage_reads_back_written_values() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonFileStorage::new(dir.path().join("slots")).expect("create storage");

    assert_eq!(storage.get("missing").expect("get"), None);
    storage.set(STORAGE_KEY, "[]").expect("set");
    assert_eq!(storage.get(STORAGE_KEY).expect("get").as_deref(), Some("[]"));

    let path = storage.slot_path(STORAGE_KEY);
    assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());

    storage.remove(STORAGE_KEY).expect("remove");
    assert_eq!(storage.get(STORAGE_KEY).expect("get"), None);
}

#[test]
fn ledger_survives_a_restart_on_disk() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().to_path_buf();

    {
        let storage = JsonFileStorage::new(root.clone()).expect("create storage");
        let mut ledger = LedgerStore::initialize(Box::new(storage), clock());
        let mut form = ledger.new_draft();
        form.description = "Paycheck".into();
        form.amount = "5000".into();
        ledger.submit(&mut form).expect("submit").expect("accepted");

        let groceries = TransactionDraft {
            kind: TransactionKind::Expense,
            category: Category::Food,
            description: "Groceries".into(),
            amount: "150".into(),
            ..ledger.new_draft()
        };
        ledger.add(&groceries).expect("add").expect("accepted");
    }

    let storage = JsonFileStorage::new(root).expect("reopen storage");
    let ledger = LedgerStore::initialize(Box::new(storage), clock());
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.balance(), 4850.0);
    assert_eq!(ledger.transactions()[1].description, "Groceries");
}

#[test]
fn corrupted_file_starts_empty_and_is_replaced_on_next_write() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonFileStorage::new(dir.path().to_path_buf()).expect("create storage");
    let path = storage.slot_path(STORAGE_KEY);
    fs::write(&path, "[{\"id\": oops").expect("write corrupt file");

    let mut ledger = LedgerStore::initialize(Box::new(storage.clone()), clock());
    assert!(ledger.is_empty());

    let mut form = ledger.new_draft();
    form.description = "Bonus".into();
    form.amount = "20".into();
    ledger.submit(&mut form).expect("submit");

    let raw = fs::read_to_string(&path).expect("read slot");
    assert!(raw.contains("\"Bonus\""));
    assert!(raw.contains("\"type\":\"income\""));
}
