//! Ledger domain models, persistence-friendly types, and helpers.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use category::{Category, CategoryFilter, UnknownCategory};
pub use ledger::Ledger;
pub use transaction::{Frequency, Recurrence, Transaction, TransactionKind};
