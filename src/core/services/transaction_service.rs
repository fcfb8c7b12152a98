//! Business logic helpers for managing transactions.

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::transaction::{
    Transaction, TransactionDraft, TransactionId, TransactionPatch, TransactionStore,
};

/// Append, edit and delete over the ordered transaction store. Each operation
/// hands back the full sequence so the caller can persist it whole.
pub struct TransactionService;

impl TransactionService {
    /// Assigns a fresh id to the draft and appends it to the end.
    pub fn append(store: &mut TransactionStore, draft: TransactionDraft) -> &[Transaction] {
        let txn = Transaction::from_draft(draft);
        tracing::debug!(id = %txn.id, title = %txn.title, "appending transaction");
        store.push(txn);
        store.entries()
    }

    /// Applies `patch` to the first transaction carrying `id`.
    pub fn update<'a>(
        store: &'a mut TransactionStore,
        id: &TransactionId,
        patch: TransactionPatch,
    ) -> ServiceResult<&'a [Transaction]> {
        let Some(txn) = store.first_mut(id) else {
            tracing::warn!(%id, "Transaction not found");
            return Err(ServiceError::NotFound(id.clone()));
        };
        patch.apply(txn);
        tracing::debug!(%id, "transaction updated");
        Ok(store.entries())
    }

    /// Removes every transaction carrying `id`; a missing id is a no-op.
    pub fn delete<'a>(store: &'a mut TransactionStore, id: &TransactionId) -> &'a [Transaction] {
        let removed = store.remove_all(id);
        tracing::debug!(%id, removed, "transactions deleted");
        store.entries()
    }
}
