//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BookUseCase` - Applies typed commands to the registry and autosaves

pub mod book;

pub use book::{BookCommand, BookError, BookUseCase, CommandOutcome, LoadRecovery, Opened};
