//! Application identifier validation.
//!
//! Lookups are keyed by a numeric app ID. Validation happens before any
//! network call; the locator only ever sees an `AppId` that parsed.

use std::fmt;
use std::str::FromStr;

/// Validated numeric application identifier (one or more ASCII digits).
///
/// Stored as the original digit string so leading zeros survive and there is
/// no upper bound on its length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppId(String);

/// Why an input string is not a valid app ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppIdError {
    #[error("app ID is empty")]
    Empty,
    #[error("app ID must be numeric, got {input:?}")]
    NonDigit { input: String },
}

impl AppId {
    /// Parses user input, trimming surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, AppIdError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AppIdError::Empty);
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppIdError::NonDigit {
                input: trimmed.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AppId {
    type Err = AppIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for AppId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
