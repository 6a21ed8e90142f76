#![doc(test(attr(deny(warnings))))]

//! Ledger Core offers the filtering, aggregation, and export primitives that
//! power a personal finance tracker's views, charts, and CSV downloads.

pub mod engine;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Core tracing initialized.");
    });
}
