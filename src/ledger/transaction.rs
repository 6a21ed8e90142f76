use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use crate::errors::LedgerError;

/// A single immutable ledger entry. Records are replaced wholesale on edit;
/// this system only supports create and delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    /// Always stored non-negative; `kind` carries the sign semantics.
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

impl Transaction {
    /// Creation-time enforcement point for record invariants: a trimmed,
    /// non-empty description and a strictly positive amount.
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: Category,
        date: NaiveDate,
    ) -> Result<Self, LedgerError> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(LedgerError::InvalidTransaction(
                "description must not be empty".into(),
            ));
        }
        if !(amount > 0.0) {
            return Err(LedgerError::InvalidTransaction(format!(
                "amount must be positive, got {amount}"
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            description,
            amount,
            kind,
            category,
            date,
            recurrence: None,
        })
    }

    pub fn with_recurrence(mut self, frequency: Frequency, start_date: NaiveDate) -> Self {
        self.recurrence = Some(Recurrence::new(frequency, start_date));
        self
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

/// Descriptive metadata attached to a recurring transaction. No component in
/// this crate advances `next_date` or materializes future occurrences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recurrence {
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    /// Initialized equal to `start_date`; advancing it is a scheduler's job.
    pub next_date: NaiveDate,
}

impl Recurrence {
    pub fn new(frequency: Frequency, start_date: NaiveDate) -> Self {
        Self {
            frequency,
            start_date,
            next_date: start_date,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Monthly,
}

impl Frequency {
    /// The date one period after `from`. Monthly steps clamp to the last day
    /// of shorter months.
    pub fn next_after(&self, from: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Weekly => from + Duration::weeks(1),
            Frequency::Monthly => {
                let (mut year, mut month) = (from.year(), from.month() + 1);
                if month > 12 {
                    month = 1;
                    year += 1;
                }
                let day = from.day().min(days_in_month(year, month));
                NaiveDate::from_ymd_opt(year, month, day).unwrap_or(from)
            }
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first_next| (first_next - Duration::days(1)).day())
        .unwrap_or(28)
}
