//! Domain Entities
//!
//! - `Ledger` - The pairwise debt matrix and member list of one group
//! - `Group` - A named ledger
//! - `Registry` - Ordered collection of groups

mod ledger;
mod registry;

pub use ledger::{Ledger, SEED_MEMBER};
pub use registry::{Group, Registry, DEFAULT_GROUP_NAME};
