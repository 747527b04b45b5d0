//! Identifier newtypes with smart constructors.
//!
//! All identifiers validate at construction time, including when they are
//! deserialized from content files.

use serde::Deserialize;
use std::fmt;

/// Stable key of a rotatable item (slide, article, update).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct ItemKey(String);

impl ItemKey {
    /// Smart constructor: rejects empty and whitespace-only keys.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidItemKey> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidItemKey::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemKey {
    type Error = InvalidItemKey;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short code of an institution (e.g. `"north-campus"`).
///
/// Lowercase ASCII letters, digits and `-` only, so it can double as a
/// directory name under the content root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct InstitutionCode(String);

impl InstitutionCode {
    /// Smart constructor: validates the code alphabet.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidInstitutionCode> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidInstitutionCode::Empty);
        }
        if let Some(ch) = raw
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(InvalidInstitutionCode::InvalidChar { code: raw, ch });
        }
        Ok(Self(raw))
    }

    /// Borrow the code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for InstitutionCode {
    type Error = InvalidInstitutionCode;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for InstitutionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Rejected item key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItemKey {
    /// Key was empty or whitespace.
    #[error("Item key cannot be empty")]
    Empty,
}

/// Rejected institution code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInstitutionCode {
    /// Code was empty.
    #[error("Institution code cannot be empty")]
    Empty,
    /// Code contained a character outside `[a-z0-9-]`.
    #[error("Institution code {code:?} contains invalid character {ch:?}")]
    InvalidChar {
        /// The rejected code.
        code: String,
        /// First offending character.
        ch: char,
    },
}

// ===== Tests =====
