use std::fmt;

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use pfm_domain::{Category, TransactionDraft, TransactionKind};

use crate::cli::core::CommandError;
use crate::cli::output;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Walks through every form field, using the draft's current values as
/// defaults. The draft is only updated once all prompts complete.
pub fn prompt_draft(
    theme: &ColorfulTheme,
    draft: &TransactionDraft,
) -> Result<TransactionDraft, CommandError> {
    let date_text = Input::<String>::with_theme(theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(draft.date.format("%Y-%m-%d").to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| "use YYYY-MM-DD".to_string())
        })
        .interact_text()?;
    let date = crate::cli::core::parse_date(&date_text)?;

    let kind = TransactionKind::ALL[select_index(
        theme,
        "Type",
        &TransactionKind::ALL,
        &draft.kind,
    )?];
    let category = Category::ALL[select_index(theme, "Category", &Category::ALL, &draft.category)?];

    let description = Input::<String>::with_theme(theme)
        .with_prompt("Description")
        .with_initial_text(draft.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let amount = Input::<String>::with_theme(theme)
        .with_prompt("Amount")
        .with_initial_text(draft.amount.clone())
        .allow_empty(true)
        .interact_text()?;

    Ok(TransactionDraft {
        date,
        kind,
        category,
        description,
        amount,
    })
}

fn select_index<T: fmt::Display + PartialEq>(
    theme: &ColorfulTheme,
    prompt: &str,
    options: &[T],
    current: &T,
) -> Result<usize, CommandError> {
    let default = options
        .iter()
        .position(|option| option == current)
        .unwrap_or(0);
    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}
