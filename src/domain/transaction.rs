use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;

/// Monetary amount as it was persisted: a JSON number or a numeric string.
///
/// The value is parsed on use. Anything that is not a finite decimal counts as
/// zero and leaves a warning in the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn value(&self) -> f64 {
        match self.parsed() {
            Some(value) => value,
            None => {
                tracing::warn!(raw = %self, "amount is not numeric; counting it as 0");
                0.0
            }
        }
    }

    /// Returns the parsed amount, or `None` when the raw value is not numeric.
    pub fn parsed(&self) -> Option<f64> {
        match self {
            Amount::Number(value) => Some(*value).filter(|v| v.is_finite()),
            Amount::Text(raw) => parse_decimal(raw),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(value) => write!(f, "{value}"),
            Amount::Text(raw) => f.write_str(raw),
        }
    }
}

/// Parses user or stored text as a finite decimal number.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Opaque record identifier. New records get a v4 UUID; stored records keep
/// whatever string they were saved with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub title: String,
    pub amount: Amount,
    pub category: Category,
    pub date: NaiveDate,
}

impl Transaction {
    /// Materializes a draft with a freshly generated identifier.
    pub fn from_draft(draft: TransactionDraft) -> Self {
        Self {
            id: TransactionId::generate(),
            title: draft.title,
            amount: Amount::Number(draft.amount),
            category: draft.category,
            date: draft.date,
        }
    }
}

/// User-supplied fields for a new transaction; the id is assigned on append.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
}

/// Partial replacement applied by an edit. `None` keeps the stored field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.amount.is_none() && self.category.is_none() && self.date.is_none()
    }

    pub fn apply(self, txn: &mut Transaction) {
        if let Some(title) = self.title {
            txn.title = title;
        }
        if let Some(amount) = self.amount {
            txn.amount = Amount::Number(amount);
        }
        if let Some(category) = self.category {
            txn.category = category;
        }
        if let Some(date) = self.date {
            txn.date = date;
        }
    }
}

/// Ordered sequence of transactions, serialized as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionStore {
    entries: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, txn: Transaction) {
        self.entries.push(txn);
    }

    /// First record carrying `id`, if any.
    pub(crate) fn first_mut(&mut self, id: &TransactionId) -> Option<&mut Transaction> {
        self.entries.iter_mut().find(|txn| &txn.id == id)
    }

    /// Drops every record carrying `id` and returns how many were removed.
    pub(crate) fn remove_all(&mut self, id: &TransactionId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|txn| &txn.id != id);
        before - self.entries.len()
    }
}

impl From<Vec<Transaction>> for TransactionStore {
    fn from(entries: Vec<Transaction>) -> Self {
        Self { entries }
    }
}
