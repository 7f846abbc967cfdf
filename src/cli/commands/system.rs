use crate::build_info;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        match context.registry.get(&name) {
            Some(entry) => {
                output::section(entry.name);
                io::print_info(entry.description);
                io::print_info(format!("Usage: {}", entry.usage));
            }
            None => context.suggest_command(args[0]),
        }
        return Ok(());
    }

    print_overview(&context.registry);
    Ok(())
}

fn print_overview(registry: &CommandRegistry) {
    output::section("Commands");
    let width = registry.names().map(str::len).max().unwrap_or(0);
    for entry in registry.list() {
        io::print_info(format!(
            "{:<width$}  {}",
            entry.name,
            entry.description,
            width = width
        ));
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info(build_info());
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
