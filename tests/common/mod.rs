#![allow(dead_code)]

use chrono::NaiveDate;
use ledger_core::ledger::{Category, Ledger, Transaction, TransactionKind};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn transaction(
    description: &str,
    amount: f64,
    kind: TransactionKind,
    category: Category,
    on: NaiveDate,
) -> Transaction {
    Transaction::new(description, amount, kind, category, on).expect("valid test transaction")
}

/// Three-record ledger used across the engine suites: one January salary,
/// one January food expense, one February food expense.
pub fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new("Sample");
    ledger.add_transaction(transaction(
        "Salary",
        1000.0,
        TransactionKind::Income,
        Category::Salary,
        date(2024, 1, 5),
    ));
    ledger.add_transaction(transaction(
        "Groceries",
        50.0,
        TransactionKind::Expense,
        Category::Food,
        date(2024, 1, 10),
    ));
    ledger.add_transaction(transaction(
        "Restaurant",
        30.0,
        TransactionKind::Expense,
        Category::Food,
        date(2024, 2, 1),
    ));
    ledger
}
