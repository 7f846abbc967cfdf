pub mod commands;
pub mod core;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod ui;

pub use self::core::{CliError, CommandError};
pub use shell::{run_cli_with, CliOptions};
pub use shell_context::{CliMode, ShellContext};
