//! Error types for debtbook
//!
//! Ledger validation and storage errors live next to the domain
//! (`LedgerError`, `StoreError`); this module covers the remaining
//! library-level failures such as configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for debtbook operations
pub type DebtbookResult<T> = Result<T, DebtbookError>;

/// Main error type for non-ledger operations
#[derive(Error, Debug)]
pub enum DebtbookError {
    /// Config file present but unparseable
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Unknown value for an environment override
    #[error("invalid value '{value}' for {var}")]
    InvalidEnvValue { var: String, value: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
