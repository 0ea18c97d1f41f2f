//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json_ledger;

pub use json_ledger::{decode, decode_bytes, encode, JsonLedgerStore, DATA_FILE_NAME};
