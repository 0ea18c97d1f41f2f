use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::{Group, Ledger, Registry};
use crate::domain::ports::{LedgerStore, StoreError};
use crate::domain::value_objects::{Amount, GroupRef, MemberRef};
use crate::domain::LedgerError;

use super::command::{BookCommand, CommandOutcome};

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum BookError {
    #[error(transparent)]
    Validation(#[from] LedgerError),

    #[error("no group matches '{reference}'")]
    UnknownGroup { reference: String },

    /// The mutation was applied in memory; only the write failed.
    #[error("change applied but not saved: {0}")]
    Save(StoreError),

    /// The stored document could not be read and is still in place. Nothing
    /// was changed.
    #[error("ledger file could not be read, so it will not be overwritten: {0}")]
    ReadOnly(StoreError),
}

impl BookError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BookError::Validation(_) | BookError::UnknownGroup { .. }
        )
    }
}

/// Why startup fell back to a fresh default group.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRecovery {
    pub error: StoreError,
    /// Where the unreadable file was moved, if it was.
    pub moved_to: Option<PathBuf>,
    /// The unreadable file is still at its location, so the book refuses
    /// every change until it is fixed or moved.
    pub read_only: bool,
}

pub struct Opened {
    pub book: BookUseCase,
    pub recovered: Option<LoadRecovery>,
}

/// Owns the in-memory registry and mirrors it to the store.
///
/// Every mutating method saves the whole registry before returning.
pub struct BookUseCase {
    registry: Registry,
    store: Arc<dyn LedgerStore>,
    /// Set when the stored document could not be read and was not moved.
    blocked: Option<StoreError>,
}

impl BookUseCase {
    /// Load the registry from `store`.
    ///
    /// An empty store yields one default group. An unreadable one also yields
    /// one default group and the cause is returned in [`Opened::recovered`].
    /// A corrupted document is moved aside first. Any other unreadable
    /// document (or one that could not be moved) stays where it is and the
    /// book refuses changes, so an autosave never replaces data it could not
    /// read.
    pub fn open(store: Arc<dyn LedgerStore>) -> Opened {
        match store.load() {
            Ok(registry) if registry.is_empty() => {
                tracing::info!(path = %store.location().display(), "starting with default group");
                Opened {
                    book: Self::with_registry(store, Registry::with_default_group()),
                    recovered: None,
                }
            }
            Ok(registry) => Opened {
                book: Self::with_registry(store, registry),
                recovered: None,
            },
            Err(error) => {
                let (moved_to, blocked) = if error.is_corrupted() {
                    match store.quarantine() {
                        Ok(moved) => (moved, None),
                        Err(e) => {
                            tracing::warn!("{}", e);
                            (None, Some(e))
                        }
                    }
                } else {
                    (None, Some(error.clone()))
                };
                tracing::warn!(
                    error = %error,
                    read_only = blocked.is_some(),
                    "falling back to default group"
                );

                let read_only = blocked.is_some();
                let mut book = Self::with_registry(store, Registry::with_default_group());
                book.blocked = blocked;
                Opened {
                    book,
                    recovered: Some(LoadRecovery {
                        error,
                        moved_to,
                        read_only,
                    }),
                }
            }
        }
    }

    /// Wrap an already-built registry. Nothing is written until the first
    /// mutation or an explicit [`save`](Self::save).
    pub fn with_registry(store: Arc<dyn LedgerStore>, registry: Registry) -> Self {
        Self {
            registry,
            store,
            blocked: None,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn location(&self) -> &Path {
        self.store.location()
    }

    pub fn group(&self, reference: &GroupRef) -> Result<(usize, &Group), BookError> {
        let index = self.resolve_group(reference)?;
        Ok((index, &self.registry.groups()[index]))
    }

    pub fn ledger(&self, reference: &GroupRef) -> Result<&Ledger, BookError> {
        self.group(reference).map(|(_, g)| &g.ledger)
    }

    pub fn execute(&mut self, command: BookCommand) -> Result<CommandOutcome, BookError> {
        match command {
            BookCommand::CreateGroup { name } => {
                let group = self.create_group(&name)?;
                Ok(CommandOutcome::GroupCreated { group })
            }
            BookCommand::AddMember { group, name } => {
                let (group, member) = self.add_member(&group, &name)?;
                Ok(CommandOutcome::MemberAdded { group, member })
            }
            BookCommand::RenameMember {
                group,
                member,
                name,
            } => {
                let (group, member, previous) = self.rename_member(&group, &member, &name)?;
                Ok(CommandOutcome::MemberRenamed {
                    group,
                    member,
                    previous,
                })
            }
            BookCommand::RecordTransaction {
                group,
                lender,
                borrower,
                amount,
            } => {
                let (group, lender, borrower) =
                    self.record_transaction(&group, &lender, &borrower, amount)?;
                Ok(CommandOutcome::TransactionRecorded {
                    group,
                    lender,
                    borrower,
                    amount,
                })
            }
            BookCommand::ClearAll => {
                self.clear_all()?;
                Ok(CommandOutcome::Cleared)
            }
        }
    }

    /// Append a group seeded with "You". Returns its index.
    pub fn create_group(&mut self, name: &str) -> Result<usize, BookError> {
        self.ensure_writable()?;
        self.registry.create_group(name)?;
        let index = self.registry.len() - 1;
        tracing::info!(group = index, name = name.trim(), "created group");
        self.save()?;
        Ok(index)
    }

    /// Returns `(group index, member index)`.
    pub fn add_member(
        &mut self,
        group: &GroupRef,
        name: &str,
    ) -> Result<(usize, usize), BookError> {
        self.ensure_writable()?;
        let g = self.resolve_group(group)?;
        let member = self.ledger_mut(g).add_member(name)?;
        tracing::info!(group = g, member, name = name.trim(), "added member");
        self.save()?;
        Ok((g, member))
    }

    /// Returns `(group index, member index, previous name)`.
    pub fn rename_member(
        &mut self,
        group: &GroupRef,
        member: &MemberRef,
        name: &str,
    ) -> Result<(usize, usize, String), BookError> {
        self.ensure_writable()?;
        let g = self.resolve_group(group)?;
        let ledger = self.ledger_mut(g);
        let index = ledger.resolve(member)?;
        let previous = ledger.members()[index].clone();
        ledger.rename_member(index, name)?;
        tracing::info!(group = g, member = index, from = %previous, to = name.trim(), "renamed member");
        self.save()?;
        Ok((g, index, previous))
    }

    /// Returns `(group index, lender index, borrower index)`.
    pub fn record_transaction(
        &mut self,
        group: &GroupRef,
        lender: &MemberRef,
        borrower: &MemberRef,
        amount: Amount,
    ) -> Result<(usize, usize, usize), BookError> {
        self.ensure_writable()?;
        let g = self.resolve_group(group)?;
        let ledger = self.ledger_mut(g);
        let l = ledger.resolve(lender)?;
        let b = ledger.resolve(borrower)?;
        ledger.record(l, b, amount)?;
        tracing::info!(group = g, lender = l, borrower = b, amount = amount.value(), "recorded transaction");
        self.save()?;
        Ok((g, l, b))
    }

    /// Drop every group, re-seed the default group, and overwrite the store.
    pub fn clear_all(&mut self) -> Result<(), BookError> {
        self.ensure_writable()?;
        self.registry.clear_all();
        tracing::info!("cleared all groups");
        self.save()
    }

    /// Write the whole registry. Safe to call again after a failed autosave.
    pub fn save(&self) -> Result<(), BookError> {
        self.ensure_writable()?;
        self.store.save(&self.registry).map_err(|e| {
            tracing::error!(error = %e, "autosave failed");
            BookError::Save(e)
        })
    }

    /// False when an unreadable document is still in place.
    pub fn is_writable(&self) -> bool {
        self.blocked.is_none()
    }

    fn ensure_writable(&self) -> Result<(), BookError> {
        match &self.blocked {
            Some(error) => Err(BookError::ReadOnly(error.clone())),
            None => Ok(()),
        }
    }

    fn resolve_group(&self, reference: &GroupRef) -> Result<usize, BookError> {
        self.registry
            .resolve(reference)
            .ok_or_else(|| BookError::UnknownGroup {
                reference: reference.to_string(),
            })
    }

    fn ledger_mut(&mut self, index: usize) -> &mut Ledger {
        &mut self.registry.groups_mut()[index].ledger
    }
}
