//! INN format validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a candidate INN fails format validation.
#[derive(Debug, Clone)]
pub struct InnFormatError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for InnFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid INN '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InnFormatError {}

/// Check whether a string is a syntactically valid INN.
///
/// Valid means 10 or 12 decimal digits, not starting with "00".
/// No checksum is computed; the registry does its own deeper checks.
/// Pure and total; performs no trimming (the caller trims).
pub fn is_valid_inn(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    (bytes.len() == 10 || bytes.len() == 12)
        && bytes.iter().all(|b| b.is_ascii_digit())
        && !(bytes[0] == b'0' && bytes[1] == b'0')
}

/// A syntactically valid taxpayer identification number.
///
/// 10 digits for organizations, 12 for individual entrepreneurs.
/// Can only be constructed through [`Inn::parse`], so every value of this
/// type is safe to put into a query.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inn(String);

impl Inn {
    /// Parse a candidate INN, already trimmed of surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, InnFormatError> {
        if is_valid_inn(raw) {
            return Ok(Self(raw.to_string()));
        }
        let char_count = raw.chars().count();
        let reason = if char_count != 10 && char_count != 12 {
            format!("expected 10 or 12 digits, got {char_count} characters")
        } else if !raw.bytes().all(|b| b.is_ascii_digit()) {
            "contains non-digit characters".into()
        } else {
            "must not start with 00".into()
        };
        Err(InnFormatError {
            value: raw.to_string(),
            reason,
        })
    }

    /// The digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Inn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
