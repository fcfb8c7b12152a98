#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records income and expense entries, persists them through a
//! key-value storage port, and derives the chart and table data a dashboard
//! renders.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense tracker tracing initialized.");
    });
}
