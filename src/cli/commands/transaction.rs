use pfm_domain::{Category, Displayable, TransactionDraft, TransactionId, TransactionKind};

use crate::cli::core::{parse_date, CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CliMode, ShellContext};

const ADD_USAGE: &str = "add [<YYYY-MM-DD> <income|expense> <category> <description> <amount>]";
const FORM_USAGE: &str = "form [show|reset|set <date|type|category|description|amount> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record a transaction", ADD_USAGE, cmd_add),
        CommandEntry::new("delete", "Delete a transaction by id", "delete <id>", cmd_delete),
        CommandEntry::new("form", "Inspect or edit the entry form", FORM_USAGE, cmd_form),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.len() {
        0 => {
            if context.mode == CliMode::Interactive {
                context.form = io::prompt_draft(&context.theme, &context.form)?;
            }
        }
        5 => {
            context.form = TransactionDraft {
                date: parse_date(args[0])?,
                kind: args[1].parse::<TransactionKind>()?,
                category: args[2].parse::<Category>()?,
                description: args[3].to_string(),
                amount: args[4].to_string(),
            };
        }
        _ => {
            return Err(CommandError::InvalidArguments(format!(
                "usage: {}",
                ADD_USAGE
            )))
        }
    }
    submit_form(context)
}

/// A rejected form produces no output and stays filled in.
fn submit_form(context: &mut ShellContext) -> CommandResult {
    match context.store.submit(&mut context.form)? {
        Some(id) => io::print_success(format!("Transaction added (id {})", id)),
        None => tracing::debug!(form = ?context.form, "add ignored"),
    }
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(CommandError::InvalidArguments("usage: delete <id>".into()));
    };
    let id: TransactionId = raw
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid id `{}`", raw)))?;

    let label = context.store.get(id).map(Displayable::display_label);
    if context.store.remove(id)? {
        io::print_success(format!(
            "Deleted {}",
            label.unwrap_or_else(|| id.to_string())
        ));
    } else {
        io::print_info(format!("No transaction with id {}", id));
    }
    Ok(())
}

fn cmd_form(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_ascii_lowercase()).as_deref() {
        None | Some("show") => {
            show_form(&context.form);
            Ok(())
        }
        Some("reset") => {
            context.form = context.store.new_draft();
            io::print_info("Form reset.");
            Ok(())
        }
        Some("set") if args.len() >= 3 => {
            set_form_field(&mut context.form, args[1], &args[2..].join(" "))
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: {}",
            FORM_USAGE
        ))),
    }
}

fn set_form_field(form: &mut TransactionDraft, field: &str, value: &str) -> CommandResult {
    match field.to_ascii_lowercase().as_str() {
        "date" => form.date = parse_date(value)?,
        "type" => form.kind = value.parse()?,
        "category" => form.category = value.parse()?,
        "description" => form.description = value.to_string(),
        "amount" => form.amount = value.to_string(),
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown form field `{}`",
                other
            )))
        }
    }
    Ok(())
}

fn show_form(form: &TransactionDraft) {
    output::section("Form");
    io::print_info(format!("  Date        : {}", form.date.format("%Y-%m-%d")));
    io::print_info(format!("  Type        : {}", form.kind));
    io::print_info(format!("  Category    : {}", form.category));
    io::print_info(format!("  Description : {}", form.description));
    io::print_info(format!("  Amount      : {}", form.amount));
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pfm_core::{KeyValueStorage, MemoryStorage, STORAGE_KEY};

    use crate::cli::core::testing::{context_with, run_lines};
    use crate::cli::core::CommandError;

    #[test]
    fn add_with_arguments_records_and_resets_form() {
        let storage = MemoryStorage::new();
        let mut context = context_with(&storage);
        let errors = run_lines(
            &mut context,
            &[
                "add 2024-01-01 income Salary Paycheck 5000",
                r#"add 2024-01-02 expense food "Weekly groceries" 150"#,
            ],
        );
        assert!(errors.is_empty());
        assert_eq!(context.store.len(), 2);
        assert_eq!(context.store.balance(), 4850.0);
        assert_eq!(context.form, context.store.new_draft());

        let raw = storage.get(STORAGE_KEY).unwrap().unwrap();
        assert!(raw.contains("Weekly groceries"));
    }

    #[test]
    fn rejected_add_keeps_the_form() {
        let mut context = context_with(&MemoryStorage::new());
        let errors = run_lines(&mut context, &["add 2024-01-01 expense Food Lunch -5"]);
        assert!(errors.is_empty());
        assert!(context.store.is_empty());
        assert_eq!(context.form.description, "Lunch");
        assert_eq!(context.form.amount, "-5");
    }

    #[test]
    fn bad_type_is_an_argument_error() {
        let mut context = context_with(&MemoryStorage::new());
        let errors = run_lines(&mut context, &["add 2024-01-01 refund Food Lunch 5"]);
        assert!(matches!(
            errors.as_slice(),
            [CommandError::InvalidArguments(_)]
        ));
        assert!(context.store.is_empty());
    }

    #[test]
    fn form_set_then_bare_add_submits_in_script_mode() {
        let mut context = context_with(&MemoryStorage::new());
        let errors = run_lines(
            &mut context,
            &[
                "form set type expense",
                "form set category Bills",
                "form set description Electricity bill",
                "form set amount 42.5",
                "form set date 2024-01-10",
                "add",
            ],
        );
        assert!(errors.is_empty());
        let txn = &context.store.transactions()[0];
        assert_eq!(txn.description, "Electricity bill");
        assert_eq!(txn.amount, 42.5);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert!(txn.is_expense());
    }

    #[test]
    fn delete_removes_by_id_and_ignores_unknown_ids() {
        let mut context = context_with(&MemoryStorage::new());
        run_lines(
            &mut context,
            &[
                "add 2024-01-01 income Salary Pay 100",
                "add 2024-01-02 expense Food Snack 10",
            ],
        );
        let first = context.store.transactions()[0].id;

        let delete_first = format!("delete {}", first);
        let errors = run_lines(&mut context, &[delete_first.as_str(), "delete 1"]);
        assert!(errors.is_empty());
        assert_eq!(context.store.len(), 1);
        assert_eq!(context.store.transactions()[0].description, "Snack");

        let errors = run_lines(&mut context, &["delete abc"]);
        assert_eq!(errors.len(), 1);
    }
}
