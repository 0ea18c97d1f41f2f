//! Configuration module for debtbook
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEBTBOOK_*)
//! 3. User config (`<config dir>/debtbook/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_with_warnings, with_env_overrides, ConfigWarning, DATA_PATH_VAR, COLOR_VAR,
};
pub use types::{ColorMode, Config, DataConfig, OutputConfig};
