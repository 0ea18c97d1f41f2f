//! Typed commands accepted by [`BookUseCase::execute`](super::BookUseCase::execute).

use crate::domain::value_objects::{Amount, GroupRef, MemberRef};

#[derive(Debug, Clone, PartialEq)]
pub enum BookCommand {
    CreateGroup {
        name: String,
    },
    AddMember {
        group: GroupRef,
        name: String,
    },
    RenameMember {
        group: GroupRef,
        member: MemberRef,
        name: String,
    },
    RecordTransaction {
        group: GroupRef,
        lender: MemberRef,
        borrower: MemberRef,
        amount: Amount,
    },
    ClearAll,
}

/// What a successful command changed. Indices refer to the registry after
/// the command ran.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    GroupCreated {
        group: usize,
    },
    MemberAdded {
        group: usize,
        member: usize,
    },
    MemberRenamed {
        group: usize,
        member: usize,
        previous: String,
    },
    TransactionRecorded {
        group: usize,
        lender: usize,
        borrower: usize,
        amount: Amount,
    },
    Cleared,
}

impl CommandOutcome {
    /// Group the command touched, if any.
    pub fn group(&self) -> Option<usize> {
        match self {
            CommandOutcome::GroupCreated { group }
            | CommandOutcome::MemberAdded { group, .. }
            | CommandOutcome::MemberRenamed { group, .. }
            | CommandOutcome::TransactionRecorded { group, .. } => Some(*group),
            CommandOutcome::Cleared => None,
        }
    }
}
