//! Config directory resolution with test isolation support.
//!
//! `dirs::config_dir()` uses platform APIs on Windows and macOS, so setting
//! `HOME` in a test does not redirect it everywhere. All debtbook-internal
//! paths (data file, config file) go through [`debtbook_config_dir`], which
//! checks `DEBTBOOK_CONFIG_HOME` first.

use std::path::PathBuf;

/// Environment variable that overrides the per-user config directory.
pub const DEBTBOOK_CONFIG_HOME_VAR: &str = "DEBTBOOK_CONFIG_HOME";

/// Directory holding `config.toml` and, by default, `debts.json`.
///
/// Returns `None` only when neither the override is set nor the platform
/// exposes a config directory.
pub fn debtbook_config_dir() -> Option<PathBuf> {
    config_dir_with(|key| std::env::var(key).ok(), dirs::config_dir)
}

fn config_dir_with(
    get_env: impl Fn(&str) -> Option<String>,
    platform_dir: impl FnOnce() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(dir) = get_env(DEBTBOOK_CONFIG_HOME_VAR).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    platform_dir().map(|d| d.join("debtbook"))
}
