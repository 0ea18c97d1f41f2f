//! Domain Value Objects
//!
//! Validated input types. Constructing one of these is the validation step;
//! the entities only ever see values that passed it.

mod amount;
mod member_name;
mod reference;

pub use amount::Amount;
pub use member_name::MemberName;
pub use reference::{GroupRef, MemberRef, Reference};
