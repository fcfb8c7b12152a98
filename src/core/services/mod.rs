pub mod balance_service;
pub mod summary_service;
pub mod transaction_service;

pub use balance_service::BalanceService;
pub use summary_service::{CategoryTotal, CategoryTotals, ChartSlice, SummaryService, CHART_PALETTE};
pub use transaction_service::TransactionService;

use crate::domain::transaction::TransactionId;
use crate::errors::TrackerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Cannot add expense, insufficient balance (balance {balance}, requested {requested})")]
    InsufficientFunds { balance: f64, requested: f64 },
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),
    #[error(transparent)]
    Storage(#[from] TrackerError),
}
