//! Debtbook - pairwise debt tracking for groups
//!
//! Each group keeps a ledger: a square matrix of gross amounts lent between
//! its members. Net balances ("who is owed, who owes") are derived from the
//! matrix on demand, and the whole registry of groups is saved to a JSON
//! document after every change.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BookCommand, BookError, BookUseCase, CommandOutcome, LoadRecovery, Opened};
pub use config::Config;
pub use domain::entities::{Group, Ledger, Registry, DEFAULT_GROUP_NAME, SEED_MEMBER};
pub use domain::ports::{LedgerStore, StoreError};
pub use domain::value_objects::{Amount, GroupRef, MemberName, MemberRef};
pub use domain::LedgerError;
pub use error::{DebtbookError, DebtbookResult};
pub use infrastructure::JsonLedgerStore;
