//! Domain Layer
//!
//! The debt-ledger model - pure data and rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Ledger (per-group debt matrix), Group, Registry
//! - `value_objects/` - Validated inputs (Amount, MemberName, Reference)
//! - `ports/` - Interface definitions for infrastructure (LedgerStore)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Gross storage** - Pairwise entries only ever accumulate; nets are derived
//! 3. **Ports & Adapters** - Persistence goes through the `LedgerStore` port

pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::LedgerError;
