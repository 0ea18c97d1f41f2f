//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --data) are inherited by all subcommands
//! - Groups and members are addressed by exact name, or by zero-based index
//! - Running without a subcommand lists the groups

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::BookCommand;
use crate::domain::value_objects::{Amount, GroupRef, MemberRef};
use crate::domain::LedgerError;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Debtbook - track who owes whom across groups
#[derive(Parser, Debug)]
#[command(name = "debtbook")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Groups and members can be given by name or by index (0 = first).")]
pub struct Cli {
    /// Emit one JSON object on stdout instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Ledger file to use instead of the configured location
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// List groups with their member counts
    Groups,

    /// Show a group's debt matrix with net balances on the diagonal
    Show {
        /// Group name or index (defaults to the first group)
        group: Option<String>,
    },

    /// Create a group seeded with the member "You"
    AddGroup {
        /// Name of the new group
        name: String,
    },

    /// Add a member to a group
    AddMember {
        /// Group name or index
        group: String,

        /// Name of the new member
        name: String,
    },

    /// Change a member's display name (balances are unaffected)
    RenameMember {
        /// Group name or index
        group: String,

        /// Current member name or index
        member: String,

        /// New display name
        name: String,
    },

    /// Record that LENDER lent AMOUNT to BORROWER
    Lend {
        /// Group name or index
        group: String,

        /// Member who paid
        lender: String,

        /// Member who received
        borrower: String,

        /// Positive amount, e.g. 12.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Delete every group and start over with a single default group
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the location of the ledger file
    Path,
}

impl Commands {
    /// The book command this subcommand performs, if it mutates anything.
    ///
    /// Fails when the amount text does not parse.
    pub fn to_book_command(&self) -> Result<Option<BookCommand>, LedgerError> {
        let command = match self {
            Commands::AddGroup { name } => BookCommand::CreateGroup { name: name.clone() },
            Commands::AddMember { group, name } => BookCommand::AddMember {
                group: GroupRef::new(group.as_str()),
                name: name.clone(),
            },
            Commands::RenameMember {
                group,
                member,
                name,
            } => BookCommand::RenameMember {
                group: GroupRef::new(group.as_str()),
                member: MemberRef::new(member.as_str()),
                name: name.clone(),
            },
            Commands::Lend {
                group,
                lender,
                borrower,
                amount,
            } => BookCommand::RecordTransaction {
                group: GroupRef::new(group.as_str()),
                lender: MemberRef::new(lender.as_str()),
                borrower: MemberRef::new(borrower.as_str()),
                amount: Amount::parse(amount)?,
            },
            Commands::Clear { .. } => BookCommand::ClearAll,
            Commands::Groups | Commands::Show { .. } | Commands::Path => return Ok(None),
        };
        Ok(Some(command))
    }
}
