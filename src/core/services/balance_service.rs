//! Income and expense arithmetic on the spendable balance.

use crate::core::services::{summary_service::SummaryService, ServiceError, ServiceResult};
use crate::domain::transaction::{parse_decimal, Transaction};

pub struct BalanceService;

impl BalanceService {
    /// Adds an income entered as text. Blank or non-numeric input is rejected
    /// and the caller keeps its current balance.
    pub fn add_income(current: f64, input: &str) -> ServiceResult<f64> {
        let delta = parse_decimal(input).ok_or_else(|| {
            ServiceError::Validation(format!("income `{}` is not a number", input.trim()))
        })?;
        tracing::debug!(current, delta, "applying income");
        Ok(current + delta)
    }

    /// Subtracts an expense, refusing any amount larger than the balance.
    pub fn add_expense(current: f64, delta: f64) -> ServiceResult<f64> {
        if delta > current {
            return Err(ServiceError::InsufficientFunds {
                balance: current,
                requested: delta,
            });
        }
        tracing::debug!(current, delta, "applying expense");
        Ok(current - delta)
    }

    /// Spendable balance implied by the income-adjusted total and the
    /// recorded expenses.
    pub fn reconcile(total_balance: f64, transactions: &[Transaction]) -> f64 {
        total_balance - SummaryService::total_expenses(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{category::Category, transaction::TransactionDraft};
    use chrono::NaiveDate;

    #[test]
    fn expense_larger_than_balance_is_rejected() {
        let err = BalanceService::add_expense(1000.0, 1500.0).expect_err("must fail");
        assert!(
            matches!(err, ServiceError::InsufficientFunds { balance, requested } if balance == 1000.0 && requested == 1500.0),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn expense_equal_to_balance_empties_it() {
        assert_eq!(BalanceService::add_expense(250.0, 250.0).unwrap(), 0.0);
    }

    #[test]
    fn income_accepts_numeric_text_only() {
        let balance = BalanceService::add_income(1000.0, "500").unwrap();
        assert_eq!(balance, 1500.0);

        for input in ["abc", "", "   ", "12abc"] {
            let err = BalanceService::add_income(balance, input).expect_err("invalid income");
            assert!(matches!(err, ServiceError::Validation(_)), "{input:?}: {err:?}");
        }
    }

    #[test]
    fn income_accepts_decimals_and_padding() {
        assert_eq!(BalanceService::add_income(10.0, " 2.5 ").unwrap(), 12.5);
    }

    #[test]
    fn reconcile_subtracts_all_expenses() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let txns: Vec<Transaction> = [100.0, 250.0]
            .into_iter()
            .map(|amount| {
                Transaction::from_draft(TransactionDraft {
                    title: "Item".into(),
                    amount,
                    category: Category::Shopping,
                    date,
                })
            })
            .collect();
        assert_eq!(BalanceService::reconcile(5000.0, &txns), 4650.0);
        assert_eq!(BalanceService::reconcile(5000.0, &[]), 5000.0);
    }
}
