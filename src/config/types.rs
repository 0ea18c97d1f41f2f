//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DebtbookResult;
use crate::infrastructure::fs::debtbook_config_dir;
use crate::infrastructure::repositories::DATA_FILE_NAME;

use super::loader::{self, ConfigWarning};

/// Where the ledger document lives
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataConfig {
    /// Overrides `<config dir>/debtbook/debts.json`. `~/` is expanded.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Color mode for terminal output
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Terminal output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> DebtbookResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> DebtbookResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the user config (if any) with environment overrides applied.
    ///
    /// Failures are logged and fall back to defaults.
    pub fn load_or_default() -> Self {
        loader::load_or_default()
    }

    /// Path of the user config file
    pub fn user_config_path() -> Option<PathBuf> {
        debtbook_config_dir().map(|d| d.join("config.toml"))
    }

    /// Resolved location of the ledger document
    pub fn data_path(&self) -> PathBuf {
        if let Some(path) = &self.data.path {
            return expand_home(path);
        }
        debtbook_config_dir()
            .map(|d| d.join(DATA_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
    }
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
