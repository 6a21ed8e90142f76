//! The transaction filtering, aggregation, and export engine.
//!
//! Every operation is a pure, synchronous transform over an in-memory
//! sequence: it takes a snapshot of the ledger's records and returns a
//! freshly allocated result, never mutating the ledger itself. Charts and
//! export therefore always consume the same filtered view.

pub mod aggregate;
pub mod export;
pub mod filter;

pub use aggregate::{summarize, totals, CategoryTotal, LedgerTotals, MonthBucket, Summary};
pub use export::{export_rows, save_csv_to_file, write_csv, ExportRow, EXPORT_FILE_NAME};
pub use filter::{build, DateRangePreset, FilterConfig};

use crate::ledger::{Ledger, Transaction};

/// Applies a filter configuration to the ledger and returns the matching
/// records as a freshly allocated snapshot, ledger order preserved.
pub fn filter(ledger: &Ledger, config: &FilterConfig) -> Vec<Transaction> {
    let predicate = filter::build(config);
    let filtered: Vec<Transaction> = ledger
        .transactions()
        .iter()
        .filter(|txn| predicate(txn))
        .cloned()
        .collect();
    tracing::debug!(
        total = ledger.transaction_count(),
        matched = filtered.len(),
        "filtered ledger"
    );
    filtered
}
