use pfm_domain::{CategoryFilter, TypeFilter};

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::{Alignment, Table, TableColumn};

const FILTER_USAGE: &str = "filter [type <all|income|expense>] [category <all|name>] | filter reset";
const DESCRIPTION_WIDTH: usize = 32;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "filter",
            "Set the type and category selectors used by `list`",
            FILTER_USAGE,
            cmd_filter,
        ),
        CommandEntry::new("list", "Show transactions matching the filters", "list", cmd_list),
    ]
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        show_filters(context);
        return Ok(());
    }
    if args.len() == 1 && args[0].eq_ignore_ascii_case("reset") {
        context.type_filter = TypeFilter::All;
        context.category_filter = CategoryFilter::All;
        show_filters(context);
        return Ok(());
    }
    if args.len() % 2 != 0 {
        return Err(CommandError::InvalidArguments(format!(
            "usage: {}",
            FILTER_USAGE
        )));
    }

    // Parse everything before applying so a bad pair changes nothing.
    let mut type_filter = context.type_filter;
    let mut category_filter = context.category_filter;
    for pair in args.chunks(2) {
        match pair[0].to_ascii_lowercase().as_str() {
            "type" => type_filter = pair[1].parse()?,
            "category" => category_filter = pair[1].parse()?,
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown filter `{}`",
                    other
                )))
            }
        }
    }
    context.type_filter = type_filter;
    context.category_filter = category_filter;
    show_filters(context);
    Ok(())
}

fn show_filters(context: &ShellContext) {
    io::print_info(format!(
        "Filters: type={} category={}",
        context.type_filter, context.category_filter
    ));
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let rows = context
        .store
        .filtered(context.type_filter, context.category_filter);
    if rows.is_empty() {
        io::print_info("No transactions to show.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::new("Date", Alignment::Left),
        TableColumn::new("Type", Alignment::Left),
        TableColumn::new("Category", Alignment::Left),
        TableColumn::new("Description", Alignment::Left).max_width(DESCRIPTION_WIDTH),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Id", Alignment::Right),
    ]);
    for txn in &rows {
        table.push_row(vec![
            txn.date.format("%Y-%m-%d").to_string(),
            txn.kind.to_string(),
            txn.category.to_string(),
            txn.description.clone(),
            context.format_amount(txn.amount),
            txn.id.to_string(),
        ]);
    }

    output::section(format!(
        "Transactions ({} of {})",
        rows.len(),
        context.store.len()
    ));
    output::block(table.render());
    Ok(())
}
