use std::collections::BTreeMap;

use serde::Serialize;

use crate::ledger::{Category, Transaction, TransactionKind};

/// Chart-ready aggregates over a filtered view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Expense totals per category, in order of first occurrence in the
    /// input. Categories without expenses are omitted.
    pub by_category: Vec<CategoryTotal>,
    /// Income/expense totals per `YYYY-MM` bucket, ascending by month key.
    pub by_month: Vec<MonthBucket>,
}

/// A slice of the expense-breakdown proportion chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// One point of the income-vs-expense trend series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

/// Derives the fixed-width month key used to group and chronologically sort
/// monthly aggregates.
pub fn month_key(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Consumes a filtered sequence and produces per-category expense totals and
/// month-bucketed income/expense totals. Amounts accumulate exactly as
/// stored; rounding to display precision is the presentation layer's job.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut category_order: Vec<Category> = Vec::new();
    let mut category_totals: BTreeMap<Category, f64> = BTreeMap::new();
    // BTreeMap keyed by the zero-padded month string sorts the series
    // chronologically for free.
    let mut months: BTreeMap<String, MonthBucket> = BTreeMap::new();

    for txn in transactions {
        if txn.kind == TransactionKind::Expense {
            if !category_totals.contains_key(&txn.category) {
                category_order.push(txn.category);
            }
            *category_totals.entry(txn.category).or_insert(0.0) += txn.amount;
        }

        let key = month_key(txn.date);
        let bucket = months.entry(key.clone()).or_insert(MonthBucket {
            month: key,
            income: 0.0,
            expense: 0.0,
        });
        match txn.kind {
            TransactionKind::Income => bucket.income += txn.amount,
            TransactionKind::Expense => bucket.expense += txn.amount,
        }
    }

    let by_category = category_order
        .into_iter()
        .map(|category| CategoryTotal {
            category,
            total: category_totals[&category],
        })
        .collect();

    Summary {
        by_category,
        by_month: months.into_values().collect(),
    }
}

/// Headline totals over a filtered view, for the summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LedgerTotals {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

pub fn totals(transactions: &[Transaction]) -> LedgerTotals {
    let mut out = LedgerTotals::default();
    for txn in transactions {
        match txn.kind {
            TransactionKind::Income => out.income += txn.amount,
            TransactionKind::Expense => out.expense += txn.amount,
        }
    }
    out.net = out.income - out.expense;
    out
}
