use dialoguer::theme::ColorfulTheme;
use pfm_config::{model::default_data_dir, Config, ConfigManager};
use pfm_core::{LedgerStore, MemoryStorage, SystemClock};
use pfm_domain::{CategoryFilter, TransactionDraft, TypeFilter};
use pfm_storage_json::JsonFileStorage;

use super::commands;
use super::core::CliError;
use super::output::{self, OutputPreferences};
use super::registry::CommandRegistry;
use super::shell::CliOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler can see: the ledger, the entry form, the two
/// list selectors, and user preferences.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub store: LedgerStore,
    pub form: TransactionDraft,
    pub type_filter: TypeFilter,
    pub category_filter: CategoryFilter,
    pub theme: ColorfulTheme,
    pub config: Config,
    pub config_manager: Option<ConfigManager>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    /// Opens the on-disk ledger (or an in-memory one) and loads preferences.
    pub fn new(mode: CliMode, options: &CliOptions) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(default_data_dir())?;
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "unreadable configuration; using defaults");
                Config::default()
            }
        };

        let store = if options.ephemeral {
            LedgerStore::initialize(Box::new(MemoryStorage::new()), Box::new(SystemClock))
        } else {
            let storage = JsonFileStorage::new(config.resolve_data_dir())?;
            tracing::debug!(root = %storage.root().display(), "using json storage");
            LedgerStore::initialize(Box::new(storage), Box::new(SystemClock))
        };

        Ok(Self::with_store(mode, store, config, Some(config_manager)))
    }

    /// Builds a context around an already initialized store.
    pub fn with_store(
        mode: CliMode,
        store: LedgerStore,
        config: Config,
        config_manager: Option<ConfigManager>,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        let form = store.new_draft();
        let context = Self {
            mode,
            registry,
            store,
            form,
            type_filter: TypeFilter::All,
            category_filter: CategoryFilter::All,
            theme: ColorfulTheme::default(),
            config,
            config_manager,
            last_command: None,
            running: true,
        };
        context.apply_output_preferences();
        context
    }

    pub fn apply_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            color_enabled: self.config.ui_color_enabled,
        });
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        format!("pfm [{}]> ", self.store.len())
    }

    pub fn format_amount(&self, amount: f64) -> String {
        self.config.format_amount(amount)
    }
}
