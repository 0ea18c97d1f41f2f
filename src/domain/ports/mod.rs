//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod ledger_store;

pub use ledger_store::{LedgerStore, StoreError};
