//! Student identity
//!
//! A student is identified by `(name, class)` after trimming surrounding
//! whitespace. Comparison is exact: no case-folding.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trimmed `(name, class)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentIdentity {
    name: String,
    class: String,
}

impl StudentIdentity {
    /// Create identity, trimming both fields
    ///
    /// # Errors
    /// - `CatalogError::BlankIdentity` if either field is blank after trimming
    pub fn new(name: &str, class: &str) -> Result<Self, CatalogError> {
        let name = name.trim();
        let class = class.trim();
        if name.is_empty() {
            return Err(CatalogError::BlankIdentity { field: "name" });
        }
        if class.is_empty() {
            return Err(CatalogError::BlankIdentity { field: "class" });
        }
        Ok(Self {
            name: name.to_string(),
            class: class.to_string(),
        })
    }

    /// Student name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class label
    #[inline]
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Storage key of this identity
    ///
    /// Backslashes and hyphens in the name are escaped with a backslash, so
    /// the first bare `-` always separates name from class.
    #[must_use]
    pub fn key(&self) -> IdentityKey {
        let mut key = String::with_capacity(self.name.len() + self.class.len() + 1);
        for c in self.name.chars() {
            if matches!(c, '\\' | '-') {
                key.push('\\');
            }
            key.push(c);
        }
        key.push('-');
        key.push_str(&self.class);
        IdentityKey(key)
    }
}

impl fmt::Display for StudentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.class)
    }
}

/// Mapping key of a student's results (`"<name>-<class>"`, name escaped)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityKey(String);

impl IdentityKey {
    /// Key as stored
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Opaque, URL-safe token used to address remote storage
    #[inline]
    #[must_use]
    pub fn token(&self) -> String {
        hex::encode(self.0.as_bytes())
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
