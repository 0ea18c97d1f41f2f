//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Config directory resolution and atomic file writes
//! - `repositories/` - The JSON ledger store (persistence codec)

pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use fs::{debtbook_config_dir, write_atomic, DEBTBOOK_CONFIG_HOME_VAR};
pub use repositories::JsonLedgerStore;
