//! Proposition names.
//!
//! A [`Symbol`] identifies one boolean proposition in the knowledge base.
//! Names are canonicalized at construction (trimmed, uppercased) so that
//! every later comparison—rule premises against fact-table keys, goals
//! against conclusions—is a plain equality check. The resolver itself never
//! case-folds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A canonical proposition name.
///
/// # Examples
///
/// ```
/// use entail::Symbol;
///
/// let a = Symbol::new("  socrates_is_mortal ")?;
/// let b = Symbol::new("SOCRATES_IS_MORTAL")?;
/// assert_eq!(a, b);
/// # Ok::<(), entail::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Construct a canonical symbol from a raw name.
    ///
    /// The name is trimmed and uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySymbol`] if the name is empty after
    /// trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// Returns the canonical name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Symbol::new(raw).map_err(serde::de::Error::custom)
    }
}
