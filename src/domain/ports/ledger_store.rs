//! LedgerStore port
//!
//! Persists the whole registry as one document. The default location is
//! `<config dir>/debtbook/debts.json`.

use std::path::{Path, PathBuf};

use crate::domain::entities::Registry;

pub trait LedgerStore: Send + Sync {
    /// Read the registry. A missing document yields an empty registry.
    fn load(&self) -> Result<Registry, StoreError>;

    /// Replace the stored document with `registry`.
    fn save(&self, registry: &Registry) -> Result<(), StoreError>;

    /// Where the document lives, for diagnostics.
    fn location(&self) -> &Path;

    /// Move an unreadable document aside. Returns the new location, or `None`
    /// when there was nothing to move.
    fn quarantine(&self) -> Result<Option<PathBuf>, StoreError>;
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("failed to access ledger file: {message}")]
    Access { message: String },

    #[error("failed to serialize ledger: {message}")]
    Serialization { message: String },

    #[error("ledger file corrupted: {path}\n  → Details: {message}")]
    Corrupted { path: PathBuf, message: String },

    #[error("failed to move corrupted ledger file {path} aside: {message}")]
    Quarantine { path: PathBuf, message: String },
}

impl StoreError {
    pub fn is_corrupted(&self) -> bool {
        matches!(self, StoreError::Corrupted { .. })
    }
}
