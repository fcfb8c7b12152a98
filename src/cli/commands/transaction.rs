use crate::cli::commands::{parse_category, parse_date, parse_positive_amount, parse_title, usage};
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::shell_context::ShellContext;
use crate::domain::transaction::{TransactionDraft, TransactionPatch};

const INCOME_USAGE: &str = "income <amount>";
const EXPENSE_USAGE: &str = "expense <title> <amount> <category> <YYYY-MM-DD>";
const EDIT_USAGE: &str = "edit <id> [title=..] [amount=..] [category=..] [date=YYYY-MM-DD]";
const DELETE_USAGE: &str = "delete <id>";

pub fn register(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "income",
        "Add income to the balance",
        INCOME_USAGE,
        cmd_income,
    ));
    registry.register(CommandEntry::new(
        "expense",
        "Record an expense",
        EXPENSE_USAGE,
        cmd_expense,
    ));
    registry.register(CommandEntry::new(
        "edit",
        "Change fields of a transaction",
        EDIT_USAGE,
        cmd_edit,
    ));
    registry.register(CommandEntry::new(
        "delete",
        "Remove a transaction",
        DELETE_USAGE,
        cmd_delete,
    ));
}

fn cmd_income(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [amount] = args else {
        return Err(usage(INCOME_USAGE));
    };
    let balance = ctx.tracker.add_income(amount)?;
    output::success(format!("Income added. Balance: {}", ctx.config.format_amount(balance)));
    Ok(())
}

fn cmd_expense(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [title, amount, category, date] = args else {
        return Err(usage(EXPENSE_USAGE));
    };
    let draft = TransactionDraft {
        title: parse_title(title)?,
        amount: parse_positive_amount(amount)?,
        category: parse_category(category)?,
        date: parse_date(date)?,
    };
    let id = ctx.tracker.add_expense(draft)?;
    output::success(format!(
        "Expense {} added. Balance: {}",
        short_id(id.as_str()),
        ctx.config.format_amount(ctx.tracker.balance())
    ));
    Ok(())
}

fn cmd_edit(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((id_token, fields)) = args.split_first() else {
        return Err(usage(EDIT_USAGE));
    };
    let patch = parse_patch(fields)?;
    let id = ctx.tracker.resolve_id(id_token)?;
    ctx.tracker.edit(&id, patch)?;
    output::success(format!(
        "Transaction {} updated. Balance: {}",
        short_id(id.as_str()),
        ctx.config.format_amount(ctx.tracker.balance())
    ));
    Ok(())
}

fn cmd_delete(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [id_token] = args else {
        return Err(usage(DELETE_USAGE));
    };
    let id = ctx.tracker.resolve_id(id_token)?;
    let before = ctx.tracker.transactions().len();
    let after = ctx.tracker.delete(&id)?.len();
    if after == before {
        output::info(format!("No transaction with id {id}; nothing deleted."));
    } else {
        output::success(format!(
            "Transaction {} deleted. Balance: {}",
            short_id(id.as_str()),
            ctx.config.format_amount(ctx.tracker.balance())
        ));
    }
    Ok(())
}

/// Builds a patch from `field=value` words.
fn parse_patch(fields: &[&str]) -> Result<TransactionPatch, CommandError> {
    let mut patch = TransactionPatch::default();
    for field in fields {
        let Some((key, value)) = field.split_once('=') else {
            return Err(usage(EDIT_USAGE));
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "title" => patch.title = Some(parse_title(value)?),
            "amount" => patch.amount = Some(parse_positive_amount(value)?),
            "category" => patch.category = Some(parse_category(value)?),
            "date" => patch.date = Some(parse_date(value)?),
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown field `{other}`; expected title, amount, category or date"
                )))
            }
        }
    }
    if patch.is_empty() {
        return Err(usage(EDIT_USAGE));
    }
    Ok(patch)
}

pub(crate) fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
