//! File System Helpers
//!
//! Directory resolution and crash-safe writes used by the repositories.

mod atomic;
mod home;

pub use atomic::write_atomic;
pub use home::{debtbook_config_dir, DEBTBOOK_CONFIG_HOME_VAR};
