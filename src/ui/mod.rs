//! Terminal presentation: rendering ledger state and reporting errors.
//!
//! Views are stateless. They read members, gross entries and net balances
//! from a `Ledger` and never hold balances of their own.

pub mod context;
pub mod error;
pub mod json;
pub mod logging;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
