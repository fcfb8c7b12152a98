use crate::cli::commands::transaction::short_id;
use crate::cli::commands::usage;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::{render_bar_chart, render_pie_chart, Alignment, Table, TableColumn};
use crate::core::pagination::PageWindow;
use crate::domain::category::Category;

pub fn register(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "list",
        "Show one page of transactions",
        "list [page]",
        cmd_list,
    ));
    registry.register(CommandEntry::new("next", "Show the next page", "next", cmd_next));
    registry.register(CommandEntry::new(
        "prev",
        "Show the previous page",
        "prev",
        cmd_prev,
    ));
    registry.register(CommandEntry::new(
        "chart",
        "Chart expenses per category",
        "chart [bar|pie]",
        cmd_chart,
    ));
    registry.register(CommandEntry::new(
        "balance",
        "Show balances and total expenses",
        "balance",
        cmd_balance,
    ));
    registry.register(CommandEntry::new(
        "categories",
        "List the expense categories",
        "categories",
        cmd_categories,
    ));
}

fn cmd_list(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {}
        [page] => {
            let page = page.parse::<usize>().map_err(|_| {
                CommandError::InvalidArguments(format!("`{page}` is not a page number"))
            })?;
            ctx.tracker.go_to_page(page);
        }
        _ => return Err(usage("list [page]")),
    }
    print_page(ctx);
    Ok(())
}

fn cmd_next(ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    ctx.tracker.next_page();
    print_page(ctx);
    Ok(())
}

fn cmd_prev(ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    ctx.tracker.previous_page();
    print_page(ctx);
    Ok(())
}

fn print_page(ctx: &ShellContext) {
    output::section("Transactions");
    if ctx.tracker.transactions().is_empty() {
        output::info("No transactions recorded.");
        return;
    }

    let mut table = Table::new(vec![
        TableColumn::new("Id", Alignment::Left),
        TableColumn::new("Date", Alignment::Left),
        TableColumn::new("Title", Alignment::Left).with_max_width(32),
        TableColumn::new("Category", Alignment::Left),
        TableColumn::new("Amount", Alignment::Right),
    ]);
    for txn in ctx.tracker.page_items() {
        table.push_row(vec![
            short_id(txn.id.as_str()).to_string(),
            txn.date.format("%B %-d, %Y").to_string(),
            txn.title.clone(),
            txn.category.to_string(),
            ctx.config.format_amount(txn.amount.value()),
        ]);
    }
    output::info(table.render());
    output::info(page_links(&ctx.tracker.page()));
}

/// Navigation line such as `« [2] 3 4 »  Page 2 of 6`.
fn page_links(window: &PageWindow) -> String {
    let mut parts = Vec::with_capacity(window.visible_pages.len() + 2);
    if window.has_previous() {
        parts.push("«".to_string());
    }
    parts.extend(window.visible_pages.iter().map(|page| {
        if *page == window.current_page {
            format!("[{page}]")
        } else {
            page.to_string()
        }
    }));
    if window.has_next() {
        parts.push("»".to_string());
    }
    format!(
        "{}  Page {} of {}",
        parts.join(" "),
        window.current_page,
        window.total_pages
    )
}

fn cmd_chart(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kind = args.first().map(|arg| arg.to_ascii_lowercase());
    let rendered = match kind.as_deref() {
        None | Some("bar") => {
            output::section("Expenses by category");
            render_bar_chart(&ctx.tracker.bar_chart(), &ctx.config)
        }
        Some("pie") => {
            output::section("Share of expenses");
            render_pie_chart(&ctx.tracker.pie_chart(), &ctx.config)
        }
        Some(_) => return Err(usage("chart [bar|pie]")),
    };

    if rendered.is_empty() {
        output::info("No expenses to chart.");
    } else {
        output::info(rendered);
    }
    Ok(())
}

fn cmd_balance(ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let tracker = &ctx.tracker;
    output::section("Balance");
    output::info(format!(
        "Balance:        {}",
        ctx.config.format_amount(tracker.balance())
    ));
    output::info(format!(
        "Total balance:  {}",
        ctx.config.format_amount(tracker.total_balance())
    ));
    output::info(format!(
        "Total expenses: {}",
        ctx.config.format_amount(tracker.total_expenses())
    ));
    Ok(())
}

fn cmd_categories(_ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Categories");
    let names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    output::info(names.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_links_mark_current_page() {
        let window = PageWindow::compute(30, 5, 2);
        assert_eq!(page_links(&window), "« 1 [2] 3 »  Page 2 of 6");
    }

    #[test]
    fn page_links_pin_to_last_pages() {
        let window = PageWindow::compute(30, 5, 6);
        assert_eq!(page_links(&window), "« 4 5 [6]  Page 6 of 6");
    }

    #[test]
    fn single_page_has_no_arrows() {
        let window = PageWindow::compute(0, 5, 1);
        assert_eq!(page_links(&window), "[1]  Page 1 of 1");
    }
}
