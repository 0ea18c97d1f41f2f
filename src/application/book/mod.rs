//! Book Use Case
//!
//! The collaborator interface a presentation adapter drives:
//!
//! - Loading the registry on startup, with fallback to a default group
//! - Applying typed commands (create group, add member, rename member,
//!   record transaction, clear)
//! - Saving the full registry synchronously after every mutation

mod command;
mod use_case;


pub use command::{BookCommand, CommandOutcome};
pub use use_case::{BookError, BookUseCase, LoadRecovery, Opened};
