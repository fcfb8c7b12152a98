pub mod report;
pub mod system;
pub mod transaction;

use chrono::NaiveDate;

use crate::cli::core::CommandError;
use crate::cli::registry::CommandRegistry;
use crate::domain::{category::Category, transaction::parse_decimal};

pub fn register_all(registry: &mut CommandRegistry) {
    transaction::register(registry);
    report::register(registry);
    system::register(registry);
}

pub(crate) fn usage(text: &str) -> CommandError {
    CommandError::InvalidArguments(format!("Usage: {text}"))
}

pub(crate) fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    parse_decimal(raw)
        .ok_or_else(|| CommandError::InvalidArguments(format!("`{raw}` is not a valid amount")))
}

/// Expense amounts must be strictly positive.
pub(crate) fn parse_positive_amount(raw: &str) -> Result<f64, CommandError> {
    let amount = parse_amount(raw)?;
    if amount <= 0.0 {
        return Err(CommandError::InvalidArguments(format!(
            "amount must be greater than zero, got `{}`",
            raw.trim()
        )));
    }
    Ok(amount)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("`{raw}` is not a date; use YYYY-MM-DD"))
    })
}

pub(crate) fn parse_category(raw: &str) -> Result<Category, CommandError> {
    raw.parse::<Category>()
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))
}

pub(crate) fn parse_title(raw: &str) -> Result<String, CommandError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(CommandError::InvalidArguments("title must not be empty".into()));
    }
    Ok(title.to_string())
}
