mod common;

use common::{date, transaction};
use ledger_core::ledger::{Category, Frequency, Ledger, TransactionKind};
use ledger_core::utils::persistence::{load_ledger_from_file, save_ledger_to_file};
use tempfile::TempDir;

#[test]
fn ledger_round_trips_through_json() {
    let mut ledger = Ledger::new("Household");
    ledger.add_transaction(transaction(
        "Salary",
        2500.0,
        TransactionKind::Income,
        Category::Salary,
        date(2024, 4, 1),
    ));
    ledger.add_transaction(
        transaction(
            "Rent",
            900.0,
            TransactionKind::Expense,
            Category::Bills,
            date(2024, 4, 2),
        )
        .with_recurrence(Frequency::Monthly, date(2024, 4, 2)),
    );

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.json");
    save_ledger_to_file(&ledger, &path).unwrap();

    let loaded = load_ledger_from_file(&path).unwrap();
    assert_eq!(loaded.id, ledger.id);
    assert_eq!(loaded.name, "Household");
    assert_eq!(loaded.transactions, ledger.transactions);

    let recurrence = loaded.transactions[1].recurrence.as_ref().unwrap();
    assert_eq!(recurrence.frequency, Frequency::Monthly);
    assert_eq!(recurrence.next_date, recurrence.start_date);
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn remove_transaction_reports_whether_anything_was_deleted() {
    let mut ledger = Ledger::new("Household");
    let id = ledger.add_transaction(transaction(
        "Coffee",
        3.5,
        TransactionKind::Expense,
        Category::Food,
        date(2024, 4, 3),
    ));

    assert!(ledger.remove_transaction(id));
    assert!(!ledger.remove_transaction(id));
    assert_eq!(ledger.transaction_count(), 0);
}

#[test]
fn loading_a_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let result = load_ledger_from_file(&dir.path().join("missing.json"));
    assert!(matches!(
        result,
        Err(ledger_core::errors::LedgerError::Io(_))
    ));
}
