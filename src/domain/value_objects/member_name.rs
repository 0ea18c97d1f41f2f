use std::fmt;

use crate::domain::LedgerError;

/// Display name for a member or group: trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberName(String);

impl MemberName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, LedgerError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LedgerError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MemberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
