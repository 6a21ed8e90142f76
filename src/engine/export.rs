use std::{fs, io, path::Path};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::ledger::{Category, Transaction, TransactionKind};

/// Default file name offered for a CSV download.
pub const EXPORT_FILE_NAME: &str = "transactions.csv";

/// A flat export record. Lossless over the five named fields; `Amount` stays
/// raw numeric, formatting is the serializer's concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Type")]
    pub kind: TransactionKind,
    #[serde(rename = "Category")]
    pub category: Category,
}

impl From<&Transaction> for ExportRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date,
            description: txn.description.clone(),
            amount: txn.amount,
            kind: txn.kind,
            category: txn.category,
        }
    }
}

/// Maps a filtered sequence into export rows, one per transaction, input
/// order preserved.
pub fn export_rows(transactions: &[Transaction]) -> Vec<ExportRow> {
    transactions.iter().map(ExportRow::from).collect()
}

/// Serializes rows as comma-separated text with a header row and standard
/// quoting for values containing the delimiter.
pub fn write_csv<W: io::Write>(rows: &[ExportRow], writer: W) -> Result<(), LedgerError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(LedgerError::Io)?;
    Ok(())
}

/// Writes the CSV export atomically by staging to a temporary file.
pub fn save_csv_to_file(rows: &[ExportRow], path: &Path) -> Result<(), LedgerError> {
    let tmp = path.with_extension("tmp");
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    fs::write(&tmp, buffer)?;
    fs::rename(tmp, path)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "exported transactions");
    Ok(())
}
