#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use pharmacy_ledger::domain::{Order, StatsSnapshot};
use pharmacy_ledger::testkit::{domain, storefront::TestStorefront};
use rust_decimal::Decimal;

/// Place one single-item order of `total` on the storefront's current day.
pub fn place(ts: &TestStorefront, total: Decimal) -> Order {
    ts.shop
        .create_order(domain::checkout_of(total))
        .expect("place order")
}

/// Overwrite the persisted stats document.
pub fn overwrite_stats(ts: &TestStorefront, stats: &StatsSnapshot) {
    ts.store
        .insert_raw("stats", serde_json::to_string_pretty(stats).expect("encode stats"));
}

/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write test file");
    path
}
