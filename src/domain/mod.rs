pub mod category;
pub mod transaction;

pub use category::Category;
pub use transaction::{
    Amount, Transaction, TransactionDraft, TransactionId, TransactionPatch, TransactionStore,
};
