//! Amount value object
//!
//! A currency amount for a single loan. Always finite and strictly positive.

use std::fmt;

use crate::domain::LedgerError;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, LedgerError> {
        if !value.is_finite() {
            return Err(LedgerError::InvalidAmount {
                input: value.to_string(),
            });
        }
        if value <= 0.0 {
            return Err(LedgerError::NonPositiveAmount { amount: value });
        }
        Ok(Self(value))
    }

    /// Parse user-entered text such as `" 12.50 "`.
    pub fn parse(input: &str) -> Result<Self, LedgerError> {
        let trimmed = input.trim();
        let value: f64 = trimmed.parse().map_err(|_| LedgerError::InvalidAmount {
            input: trimmed.to_string(),
        })?;
        if !value.is_finite() {
            return Err(LedgerError::InvalidAmount {
                input: trimmed.to_string(),
            });
        }
        Self::new(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl std::str::FromStr for Amount {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
