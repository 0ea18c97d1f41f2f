//! Registry entity
//!
//! The ordered collection of groups. Insertion order is display order and the
//! whole registry is the unit of persistence.

use crate::domain::value_objects::{GroupRef, MemberName};
use crate::domain::LedgerError;

use super::Ledger;

/// Name of the group seeded on first run and after `clear_all`.
pub const DEFAULT_GROUP_NAME: &str = "Default Group";

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub ledger: Ledger,
}

impl Group {
    /// A new group whose ledger holds only the seed member.
    pub fn new(name: &str) -> Result<Self, LedgerError> {
        let name = MemberName::new(name)?;
        Ok(Self {
            name: name.into_string(),
            ledger: Ledger::new(),
        })
    }

    pub fn from_parts(name: String, ledger: Ledger) -> Self {
        Self { name, ledger }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    groups: Vec<Group>,
}

impl Registry {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn with_default_group() -> Self {
        let mut registry = Self::new();
        registry.seed_default();
        registry
    }

    pub fn from_groups(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Append a group named `name`. Group names need not be unique.
    pub fn create_group(&mut self, name: &str) -> Result<&mut Group, LedgerError> {
        let group = Group::new(name)?;
        self.groups.push(group);
        let last = self.groups.len() - 1;
        Ok(&mut self.groups[last])
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    pub fn group_mut(&mut self, index: usize) -> Option<&mut Group> {
        self.groups.get_mut(index)
    }

    pub fn groups_mut(&mut self) -> &mut [Group] {
        &mut self.groups
    }

    pub fn resolve(&self, reference: &GroupRef) -> Option<usize> {
        reference.resolve(self.groups.iter().map(|g| g.name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drop every group and re-seed exactly one default group.
    pub fn clear_all(&mut self) {
        self.groups.clear();
        self.seed_default();
    }

    fn seed_default(&mut self) {
        self.groups.push(Group {
            name: DEFAULT_GROUP_NAME.to_string(),
            ledger: Ledger::new(),
        });
    }
}
