use pfm_config::Config;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

const CONFIG_USAGE: &str = "config [show|set <currency|color|data_dir> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_ascii_lowercase().as_str() {
        "set" if args.len() >= 3 => {
            let key = args[1];
            let value = args[2..].join(" ");
            set_config_value(context, key, value.trim())
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: {}",
            CONFIG_USAGE
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    output::section("Configuration");
    io::print_info(format!("  currency : {}", config.currency_symbol));
    io::print_info(format!(
        "  color    : {}",
        if config.ui_color_enabled { "on" } else { "off" }
    ));
    io::print_info(format!(
        "  data_dir : {}",
        config.resolve_data_dir().display()
    ));
    if let Some(manager) = &context.config_manager {
        io::print_info(format!("  file     : {}", manager.config_path().display()));
    }
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated: Config = context.config.clone();
    updated.set(key, value)?;

    if let Some(manager) = &context.config_manager {
        manager.save(&updated)?;
    }
    let data_dir_changed = updated.data_dir != context.config.data_dir;
    context.config = updated;
    context.apply_output_preferences();

    io::print_success(format!("Updated `{}`.", key));
    if data_dir_changed {
        io::print_info("The new data directory is used on the next start.");
    }
    Ok(())
}
