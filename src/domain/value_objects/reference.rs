//! Reference value object
//!
//! Outer surfaces (the CLI, a UI) name members and groups by text. A reference
//! resolves to the first entry whose name matches exactly; if none does and
//! the text is a zero-based index within range, it resolves to that index.
//! Names win over indices so a member literally called "1" stays reachable.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference(String);

/// Reference to a member within one ledger.
pub type MemberRef = Reference;

/// Reference to a group within the registry.
pub type GroupRef = Reference;

impl Reference {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn index(index: usize) -> Self {
        Self(index.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn resolve<'a, I>(&self, names: I) -> Option<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let wanted = self.0.trim();
        if wanted.is_empty() {
            return None;
        }

        let mut len = 0;
        for (i, name) in names.into_iter().enumerate() {
            if name == wanted {
                return Some(i);
            }
            len = i + 1;
        }

        wanted.parse::<usize>().ok().filter(|i| *i < len)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Reference {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Reference {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<usize> for Reference {
    fn from(value: usize) -> Self {
        Self::index(value)
    }
}
