//! Owner of the dashboard state: balance, transactions and the table pager.
//!
//! Every mutation is computed on a copy, written through the storage port and
//! only then committed to memory, so a failed write leaves the tracker as it
//! was.

use crate::config::Config;
use crate::core::pagination::{PageWindow, Pager};
use crate::core::services::{
    BalanceService, CategoryTotals, ChartSlice, ServiceError, ServiceResult, SummaryService,
    TransactionService,
};
use crate::domain::transaction::{
    Transaction, TransactionDraft, TransactionId, TransactionPatch, TransactionStore,
};
use crate::storage::{
    read_json, write_json, StorageBackend, BALANCE_KEY, EXPENSES_KEY, TOTAL_BALANCE_KEY,
};

pub struct ExpenseTracker {
    storage: Box<dyn StorageBackend>,
    balance: f64,
    total_balance: f64,
    transactions: TransactionStore,
    pager: Pager,
}

impl ExpenseTracker {
    /// Reads the persisted state, seeding the balances from
    /// `config.starting_balance` when nothing is stored.
    pub fn load(mut storage: Box<dyn StorageBackend>, config: &Config) -> ServiceResult<Self> {
        let balance = read_json::<f64>(storage.as_ref(), BALANCE_KEY)?.unwrap_or(config.starting_balance);

        let total_balance = match read_json::<f64>(storage.as_ref(), TOTAL_BALANCE_KEY)? {
            Some(total) => total,
            None => {
                write_json(storage.as_mut(), TOTAL_BALANCE_KEY, &config.starting_balance)?;
                config.starting_balance
            }
        };

        let transactions =
            read_json::<TransactionStore>(storage.as_ref(), EXPENSES_KEY)?.unwrap_or_default();

        tracing::info!(
            balance,
            total_balance,
            transactions = transactions.len(),
            "expense tracker loaded"
        );

        Ok(Self {
            storage,
            balance,
            total_balance,
            transactions,
            pager: Pager::new(config.page_size),
        })
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn total_balance(&self) -> f64 {
        self.total_balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.transactions.entries()
    }

    pub fn total_expenses(&self) -> f64 {
        SummaryService::total_expenses(self.transactions.entries())
    }

    /// Adds income entered as text to both balances.
    pub fn add_income(&mut self, input: &str) -> ServiceResult<f64> {
        let balance = BalanceService::add_income(self.balance, input)?;
        let total_balance = self.total_balance + (balance - self.balance);

        write_json(self.storage.as_mut(), TOTAL_BALANCE_KEY, &total_balance)?;
        write_json(self.storage.as_mut(), BALANCE_KEY, &balance)?;

        self.balance = balance;
        self.total_balance = total_balance;
        tracing::info!(balance, total_balance, "income added");
        Ok(balance)
    }

    /// Records an expense if the balance covers it and returns its new id.
    pub fn add_expense(&mut self, draft: TransactionDraft) -> ServiceResult<TransactionId> {
        ensure_finite(draft.amount)?;
        let balance = BalanceService::add_expense(self.balance, draft.amount)?;

        let mut next = self.transactions.clone();
        let id = match TransactionService::append(&mut next, draft).last() {
            Some(txn) => txn.id.clone(),
            None => return Err(ServiceError::Validation("expense was not recorded".into())),
        };

        write_json(self.storage.as_mut(), BALANCE_KEY, &balance)?;
        write_json(self.storage.as_mut(), EXPENSES_KEY, &next)?;

        self.balance = balance;
        self.transactions = next;
        tracing::info!(%id, balance, "expense added");
        Ok(id)
    }

    /// Replaces the supplied fields of the transaction `id` and re-derives the
    /// spendable balance from the total.
    pub fn edit(
        &mut self,
        id: &TransactionId,
        patch: TransactionPatch,
    ) -> ServiceResult<&[Transaction]> {
        if let Some(amount) = patch.amount {
            ensure_finite(amount)?;
        }
        let mut next = self.transactions.clone();
        TransactionService::update(&mut next, id, patch)?;
        self.commit(next)?;
        tracing::info!(%id, balance = self.balance, "transaction edited");
        Ok(self.transactions.entries())
    }

    /// Deletes every transaction carrying `id`. Unknown ids change nothing.
    pub fn delete(&mut self, id: &TransactionId) -> ServiceResult<&[Transaction]> {
        let mut next = self.transactions.clone();
        let remaining = TransactionService::delete(&mut next, id).len();
        if remaining == self.transactions.len() {
            tracing::debug!(%id, "nothing to delete");
            return Ok(self.transactions.entries());
        }
        self.commit(next)?;
        tracing::info!(%id, balance = self.balance, "transaction deleted");
        Ok(self.transactions.entries())
    }

    fn commit(&mut self, next: TransactionStore) -> ServiceResult<()> {
        let balance = BalanceService::reconcile(self.total_balance, next.entries());

        write_json(self.storage.as_mut(), EXPENSES_KEY, &next)?;
        write_json(self.storage.as_mut(), BALANCE_KEY, &balance)?;

        self.balance = balance;
        self.transactions = next;
        self.pager.clamp(self.transactions.len());
        Ok(())
    }

    /// Resolves a full id or an unambiguous id prefix to a stored id.
    pub fn resolve_id(&self, token: &str) -> ServiceResult<TransactionId> {
        let needle = token.trim();
        if needle.is_empty() {
            return Err(ServiceError::Validation("transaction id is required".into()));
        }
        let ids = || self.transactions.entries().iter().map(|txn| &txn.id);
        if let Some(id) = ids().find(|id| id.as_str() == needle) {
            return Ok(id.clone());
        }

        let lowered = needle.to_ascii_lowercase();
        let mut matches = ids().filter(|id| id.as_str().to_ascii_lowercase().starts_with(&lowered));
        match (matches.next(), matches.next()) {
            (Some(id), None) => Ok(id.clone()),
            (Some(_), Some(_)) => Err(ServiceError::Validation(format!(
                "id prefix `{needle}` matches more than one transaction"
            ))),
            (None, _) => Err(ServiceError::Validation(format!(
                "no transaction id starts with `{needle}`"
            ))),
        }
    }

    pub fn category_totals(&self) -> CategoryTotals {
        SummaryService::aggregate(self.transactions.entries())
    }

    pub fn bar_chart(&self) -> Vec<ChartSlice> {
        SummaryService::bar_chart(&self.category_totals())
    }

    pub fn pie_chart(&self) -> Vec<ChartSlice> {
        SummaryService::pie_chart(&self.category_totals())
    }

    pub fn page(&self) -> PageWindow {
        self.pager.window(self.transactions.len())
    }

    pub fn page_items(&self) -> &[Transaction] {
        self.pager.slice(self.transactions.entries())
    }

    pub fn go_to_page(&mut self, page: usize) -> PageWindow {
        self.pager.go_to(page, self.transactions.len());
        self.page()
    }

    pub fn next_page(&mut self) -> PageWindow {
        self.pager.next(self.transactions.len());
        self.page()
    }

    pub fn previous_page(&mut self) -> PageWindow {
        self.pager.previous(self.transactions.len());
        self.page()
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pager.set_page_size(page_size, self.transactions.len());
    }
}

fn ensure_finite(amount: f64) -> ServiceResult<()> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(ServiceError::Validation(format!(
            "expense amount `{amount}` is not a number"
        )))
    }
}
