//! Validated resource names.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::{DomainError, MAX_RESOURCE_NAME_LEN};

static NAME_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("Invalid regex"));

/// A resource name that passed every validation rule.
///
/// Checks run in a fixed order (blank, length, format, reserved word) so the
/// reported error is deterministic for any input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    pub fn parse<S: AsRef<str>>(raw: &str, reserved_words: &[S]) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }

        if raw.len() > MAX_RESOURCE_NAME_LEN {
            return Err(DomainError::NameTooLong {
                name: raw.to_string(),
                length: raw.len(),
                max: MAX_RESOURCE_NAME_LEN,
            });
        }

        if !NAME_FORMAT.is_match(raw) {
            return Err(DomainError::InvalidNameFormat {
                name: raw.to_string(),
            });
        }

        if reserved_words
            .iter()
            .any(|w| w.as_ref().eq_ignore_ascii_case(raw))
        {
            return Err(DomainError::ReservedWord {
                name: raw.to_string(),
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
