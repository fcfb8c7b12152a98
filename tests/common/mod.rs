use std::sync::Mutex;

use chrono::NaiveDate;
use expense_tracker::{
    config::Config,
    core::tracker::ExpenseTracker,
    domain::{category::Category, transaction::TransactionDraft},
    storage::{JsonStorage, MemoryStorage},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A fresh data directory that outlives the calling test.
#[allow(dead_code)]
pub fn temp_base() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

#[allow(dead_code)]
pub fn memory_tracker() -> ExpenseTracker {
    ExpenseTracker::load(Box::new(MemoryStorage::new()), &Config::default())
        .expect("load in-memory tracker")
}

#[allow(dead_code)]
pub fn json_tracker(base: &std::path::Path) -> ExpenseTracker {
    let storage = JsonStorage::new(Some(base.to_path_buf())).expect("create json storage");
    ExpenseTracker::load(Box::new(storage), &Config::default()).expect("load json tracker")
}

#[allow(dead_code)]
pub fn draft(title: &str, amount: f64, category: Category, day: u32) -> TransactionDraft {
    TransactionDraft {
        title: title.into(),
        amount,
        category,
        date: NaiveDate::from_ymd_opt(2024, 1, day).expect("valid day"),
    }
}
