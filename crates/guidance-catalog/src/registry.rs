//! Class-scoped name registry
//!
//! Append-only: names are never removed. Duplicates are detected after
//! trimming and compared case-sensitively.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping of class label to its ordered roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    classes: BTreeMap<String, Vec<String>>,
}

impl Registry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with empty rosters for `classes`
    #[must_use]
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes = classes
            .into_iter()
            .map(|c| c.as_ref().trim().to_string())
            .filter(|c| !c.is_empty())
            .map(|c| (c, Vec::new()))
            .collect();
        Self { classes }
    }

    /// Class labels in sorted order
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Roster of `class` (empty when unknown)
    #[must_use]
    pub fn names(&self, class: &str) -> &[String] {
        self.classes.get(class.trim()).map_or(&[], Vec::as_slice)
    }

    /// Whether `name` is registered in `class`
    #[must_use]
    pub fn contains(&self, class: &str, name: &str) -> bool {
        self.names(class).iter().any(|n| n == name.trim())
    }

    /// Total number of registered names
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.values().map(Vec::len).sum()
    }

    /// No names registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `name` to `class`, creating the class if needed.
    ///
    /// Returns `true` when the name was added, `false` when it was already
    /// present.
    ///
    /// # Errors
    /// - `CatalogError::BlankIdentity` if name or class is blank
    pub fn register(&mut self, class: &str, name: &str) -> Result<bool, CatalogError> {
        let class = class.trim();
        let name = name.trim();
        if class.is_empty() {
            return Err(CatalogError::BlankIdentity { field: "class" });
        }
        if name.is_empty() {
            return Err(CatalogError::BlankIdentity { field: "name" });
        }
        let roster = self.classes.entry(class.to_string()).or_default();
        if roster.iter().any(|n| n == name) {
            return Ok(false);
        }
        roster.push(name.to_string());
        Ok(true)
    }

    /// Union with `other`, keeping this registry's order and appending
    /// unseen names.
    pub fn merge(&mut self, other: &Registry) {
        for (class, names) in &other.classes {
            let roster = self.classes.entry(class.clone()).or_default();
            for name in names {
                if !roster.contains(name) {
                    roster.push(name.clone());
                }
            }
        }
    }
}
