use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::{render_bar_chart, render_pie_chart};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show total income, total expense, and balance",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "chart",
            "Draw the expense breakdown and income vs expense charts",
            "chart [pie|bar]",
            cmd_chart,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.store.summary();
    output::section("Summary");
    io::print_info(format!(
        "Total income  : {}",
        context.format_amount(summary.total_income)
    ));
    io::print_info(format!(
        "Total expense : {}",
        context.format_amount(summary.total_expense)
    ));
    io::print_info(format!(
        "Balance       : {}",
        context.format_amount(summary.balance)
    ));
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (pie, bar) = match args.first().map(|arg| arg.to_ascii_lowercase()).as_deref() {
        None => (true, true),
        Some("pie") => (true, false),
        Some("bar") => (false, true),
        Some(other) => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown chart `{}` (use pie or bar)",
                other
            )))
        }
    };

    if pie {
        output::section("Expenses by category");
        output::block(render_pie_chart(&context.store.expense_pie(), &context.config));
    }
    if bar {
        output::section("Income vs expense");
        output::block(render_bar_chart(
            &context.store.income_vs_expense(),
            &context.config,
        ));
    }
    Ok(())
}
