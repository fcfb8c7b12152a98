use crate::cli::commands::usage;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::{Alignment, Table, TableColumn};
use crate::config::Config;
use crate::utils::build_info;

const CONFIG_USAGE: &str = "config [show | set <key> <value>]";

pub fn register(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "config",
        "Show or change preferences",
        CONFIG_USAGE,
        cmd_config,
    ));
    registry.register(CommandEntry::new(
        "version",
        "Show build information",
        "version",
        cmd_version,
    ));
    registry.register(CommandEntry::new("help", "List commands", "help", cmd_help));
    registry.register(CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit));
}

fn cmd_config(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            show_config(ctx);
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            let value = value.join(" ");
            ctx.config.set_field(key, &value)?;
            if *key == "page_size" {
                ctx.tracker.set_page_size(ctx.config.page_size);
            }
            ctx.save_config()?;
            output::success(format!("{key} set to {value}"));
            Ok(())
        }
        _ => Err(usage(CONFIG_USAGE)),
    }
}

fn show_config(ctx: &ShellContext) {
    let config = &ctx.config;
    output::section("Configuration");
    for key in Config::KEYS {
        let value = match key {
            "currency_symbol" => config.currency_symbol.clone(),
            "locale" => config.locale.clone(),
            "page_size" => config.page_size.to_string(),
            "starting_balance" => format!("{:.2}", config.starting_balance),
            _ => continue,
        };
        output::info(format!("{key:<17} {value}"));
    }
    match ctx.config_path() {
        Some(path) => output::info(format!("Stored at {path}")),
        None => output::info("Not persisted for this session."),
    }
}

fn cmd_version(_ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(build_info::current().describe());
    Ok(())
}

fn cmd_help(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let [name] = args {
        let entry = ctx.registry().get(&name.to_ascii_lowercase()).ok_or_else(|| {
            CommandError::InvalidArguments(format!("no help for unknown command `{name}`"))
        })?;
        output::info(format!("{}\n  Usage: {}", entry.description, entry.usage));
        return Ok(());
    }

    output::section("Commands");
    let mut table = Table::new(vec![
        TableColumn::new("Command", Alignment::Left),
        TableColumn::new("Usage", Alignment::Left),
        TableColumn::new("Description", Alignment::Left),
    ]);
    for entry in ctx.registry().list() {
        table.push_row(vec![
            entry.name.to_string(),
            entry.usage.to_string(),
            entry.description.to_string(),
        ]);
    }
    output::info(table.render());
    Ok(())
}

fn cmd_exit(_ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
