mod common;

use ledger_core::{engine, engine::FilterConfig, init};

#[test]
fn ledger_engine_smoke() {
    init();

    let ledger = common::sample_ledger();
    assert_eq!(ledger.transaction_count(), 3);

    let filtered = engine::filter(&ledger, &FilterConfig::default());
    assert_eq!(filtered.len(), 3);

    let summary = engine::summarize(&filtered);
    assert_eq!(summary.by_month.len(), 2);

    let rows = engine::export_rows(&filtered);
    assert_eq!(rows.len(), filtered.len());
}
