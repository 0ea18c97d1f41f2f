//! Validation errors raised by the ledger model.

/// Rejected input. No state is mutated when one of these is returned.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum LedgerError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("member '{name}' already exists in this group")]
    DuplicateMember { name: String },

    #[error("member index {index} is out of range (group has {len} members)")]
    MemberOutOfRange { index: usize, len: usize },

    #[error("no member matches '{reference}'")]
    UnknownMember { reference: String },

    #[error("lender and borrower must be different members (both are '{member}')")]
    SelfTransaction { member: String },

    #[error("'{input}' is not a valid amount")]
    InvalidAmount { input: String },

    #[error("amount must be greater than zero (got {amount})")]
    NonPositiveAmount { amount: f64 },

    #[error("recording this amount from '{lender}' to '{borrower}' would exceed the largest representable total")]
    AmountOverflow { lender: String, borrower: String },

    #[error("malformed debt matrix: {message}")]
    InvalidShape { message: String },
}
