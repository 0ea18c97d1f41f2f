//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{BookUseCase, Opened};
use crate::config::Config;
use crate::domain::ports::LedgerStore;
use crate::infrastructure::JsonLedgerStore;

/// Resolve the ledger document location: explicit override, then config
/// (which already carries `DEBTBOOK_DATA_PATH`), then the default.
pub fn data_path(config: &Config, override_path: Option<PathBuf>) -> PathBuf {
    override_path.unwrap_or_else(|| config.data_path())
}

/// Create the JSON store at the resolved location
pub fn create_store(config: &Config, override_path: Option<PathBuf>) -> Arc<dyn LedgerStore> {
    Arc::new(JsonLedgerStore::with_path(data_path(config, override_path)))
}

/// Open the book with all dependencies wired up
pub fn create_book_use_case(config: &Config, override_path: Option<PathBuf>) -> Opened {
    BookUseCase::open(create_store(config, override_path))
}
