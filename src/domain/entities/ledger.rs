//! Ledger entity
//!
//! The debt matrix for one group. `matrix[i][j]` is the cumulative amount
//! member `i` lent directly to member `j`. Entries are gross: a loan from
//! `j` back to `i` is recorded in its own cell and never offsets this one.
//!
//! The diagonal is not a ledger entry. It stays `0.0` in storage and is only
//! filled with net balances in [`Ledger::display_matrix`].

use crate::domain::value_objects::{Amount, MemberName, MemberRef};
use crate::domain::LedgerError;

/// Member every new ledger starts with.
pub const SEED_MEMBER: &str = "You";

#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    members: Vec<String>,
    matrix: Vec<Vec<f64>>,
}

impl Ledger {
    /// A ledger holding only [`SEED_MEMBER`] and a 1x1 zero matrix.
    pub fn new() -> Self {
        Self {
            members: vec![SEED_MEMBER.to_string()],
            matrix: vec![vec![0.0]],
        }
    }

    /// Rebuild a ledger from persisted state.
    ///
    /// The matrix must be square and sized to `members`. Off-diagonal entries
    /// must be finite and non-negative. Diagonal values are discarded.
    pub fn from_parts(members: Vec<String>, matrix: Vec<Vec<f64>>) -> Result<Self, LedgerError> {
        let n = members.len();
        if matrix.len() != n {
            return Err(LedgerError::InvalidShape {
                message: format!("{} rows for {} members", matrix.len(), n),
            });
        }

        let mut matrix = matrix;
        for (i, row) in matrix.iter_mut().enumerate() {
            if row.len() != n {
                return Err(LedgerError::InvalidShape {
                    message: format!("row {} has {} columns, expected {}", i, row.len(), n),
                });
            }
            for (j, cell) in row.iter_mut().enumerate() {
                if i == j {
                    *cell = 0.0;
                    continue;
                }
                if !cell.is_finite() || *cell < 0.0 {
                    return Err(LedgerError::InvalidShape {
                        message: format!("entry [{}][{}] is {}, expected a non-negative amount", i, j, cell),
                    });
                }
            }
        }

        let ledger = Self { members, matrix };
        if !ledger.total_lent().is_finite() {
            return Err(LedgerError::InvalidShape {
                message: "entries sum past the largest representable amount".to_string(),
            });
        }
        Ok(ledger)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member names in index order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Name of the member at `index`.
    pub fn member(&self, index: usize) -> Option<&str> {
        self.members.get(index).map(String::as_str)
    }

    /// Index of the member named exactly `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.members.iter().position(|m| m == name)
    }

    /// Index of the member `reference` names, by name first, then by index.
    pub fn resolve(&self, reference: &MemberRef) -> Result<usize, LedgerError> {
        reference
            .resolve(self.members.iter().map(String::as_str))
            .ok_or_else(|| LedgerError::UnknownMember {
                reference: reference.to_string(),
            })
    }

    /// Raw gross entries, diagonal zeroed.
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    /// Gross amount `lender` has lent `borrower`.
    pub fn entry(&self, lender: usize, borrower: usize) -> Option<f64> {
        self.matrix.get(lender).and_then(|row| row.get(borrower)).copied()
    }

    /// Append a member with a zero row and zero column. Returns its index.
    ///
    /// A name already present is rejected with `DuplicateMember` and the
    /// ledger is left untouched.
    pub fn add_member(&mut self, name: &str) -> Result<usize, LedgerError> {
        let name = MemberName::new(name)?;
        if self.index_of(name.as_str()).is_some() {
            return Err(LedgerError::DuplicateMember {
                name: name.into_string(),
            });
        }

        let index = self.members.len();
        self.members.push(name.into_string());
        for row in &mut self.matrix {
            row.push(0.0);
        }
        self.matrix.push(vec![0.0; index + 1]);
        Ok(index)
    }

    /// Change a member's display name. Rows and columns stay where they are.
    ///
    /// Renaming onto another member's name is rejected.
    pub fn rename_member(&mut self, index: usize, new_name: &str) -> Result<(), LedgerError> {
        self.check_index(index)?;
        let name = MemberName::new(new_name)?;
        if let Some(other) = self.index_of(name.as_str()) {
            if other != index {
                return Err(LedgerError::DuplicateMember {
                    name: name.into_string(),
                });
            }
        }
        self.members[index] = name.into_string();
        Ok(())
    }

    /// Record that `lender` lent `amount` to `borrower`.
    ///
    /// Adds to `matrix[lender][borrower]` and nothing else. An amount that
    /// would push the ledger's total past `f64::MAX` is rejected with
    /// `AmountOverflow`.
    pub fn record_transaction(
        &mut self,
        lender: usize,
        borrower: usize,
        amount: f64,
    ) -> Result<(), LedgerError> {
        let amount = Amount::new(amount)?;
        self.record(lender, borrower, amount)
    }

    pub fn record(&mut self, lender: usize, borrower: usize, amount: Amount) -> Result<(), LedgerError> {
        self.check_index(lender)?;
        self.check_index(borrower)?;
        if lender == borrower {
            return Err(LedgerError::SelfTransaction {
                member: self.members[lender].clone(),
            });
        }

        // Every entry is non-negative, so a finite total keeps every cell
        // and every net balance finite too.
        if !(self.total_lent() + amount.value()).is_finite() {
            return Err(LedgerError::AmountOverflow {
                lender: self.members[lender].clone(),
                borrower: self.members[borrower].clone(),
            });
        }

        self.matrix[lender][borrower] += amount.value();
        Ok(())
    }

    /// Amount owed to `index` minus amount `index` owes. `None` when out of range.
    pub fn net_balance(&self, index: usize) -> Option<f64> {
        if index >= self.len() {
            return None;
        }

        let owed_to_me: f64 = self.matrix[index]
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != index)
            .map(|(_, v)| v)
            .sum();
        let i_owe: f64 = self
            .matrix
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != index)
            .map(|(_, row)| row[index])
            .sum();

        Some(owed_to_me - i_owe)
    }

    /// Net balance of every member, in member order.
    pub fn all_net_balances(&self) -> Vec<f64> {
        (0..self.len())
            .filter_map(|i| self.net_balance(i))
            .collect()
    }

    /// Matrix for rendering: gross entries off the diagonal, net balances on it.
    pub fn display_matrix(&self) -> Vec<Vec<f64>> {
        let mut out = self.matrix.clone();
        for (i, net) in self.all_net_balances().into_iter().enumerate() {
            out[i][i] = net;
        }
        out
    }

    /// Sum of every gross entry.
    pub fn total_lent(&self) -> f64 {
        self.matrix
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |(j, _)| *j != i)
                    .map(|(_, v)| *v)
            })
            .sum()
    }

    fn check_index(&self, index: usize) -> Result<(), LedgerError> {
        if index >= self.len() {
            return Err(LedgerError::MemberOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
