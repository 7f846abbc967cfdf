use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

use crate::ConfigError;

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "PFM_HOME";
const DEFAULT_DIR_NAME: &str = ".pfm";

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the ledger slot. Defaults to `~/.pfm`.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Base directory for application data: the configured `data_dir`, then
    /// `PFM_HOME`, then `~/.pfm`.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }
        default_data_dir()
    }

    /// Formats an amount with the configured symbol and two decimals.
    pub fn format_amount(&self, amount: f64) -> String {
        if amount < 0.0 {
            format!("-{}{:.2}", self.currency_symbol, amount.abs())
        } else {
            format!("{}{:.2}", self.currency_symbol, amount)
        }
    }

    /// Updates a single setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "currency" | "currency_symbol" => {
                if value.trim().is_empty() {
                    return Err(invalid());
                }
                self.currency_symbol = value.trim().to_string();
            }
            "color" | "ui_color_enabled" => {
                self.ui_color_enabled = parse_flag(value).ok_or_else(invalid)?;
            }
            "data_dir" => {
                let trimmed = value.trim();
                self.data_dir = if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("default") {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                };
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

/// `PFM_HOME` if set, otherwise `~/.pfm`.
pub fn default_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
