//! Completed answer sets of one student

use crate::answer::AnswerSet;
use crate::instrument::InstrumentKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping of instrument to its completed answers
///
/// Serialized as a JSON object keyed by instrument storage key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    entries: BTreeMap<InstrumentKey, AnswerSet>,
}

impl ResultSet {
    /// Create empty result set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers of `key`
    #[inline]
    #[must_use]
    pub fn get(&self, key: InstrumentKey) -> Option<&AnswerSet> {
        self.entries.get(&key)
    }

    /// Whether `key` was completed
    #[inline]
    #[must_use]
    pub fn is_completed(&self, key: InstrumentKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Record answers for `key` unless already present.
    ///
    /// Returns `false` (and leaves the stored answers untouched) when the
    /// instrument was already completed.
    pub fn insert_once(&mut self, key: InstrumentKey, answers: AnswerSet) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, answers);
        true
    }

    /// Add every instrument of `other` missing here; existing entries win.
    pub fn merge_missing(&mut self, other: &ResultSet) {
        for (key, answers) in &other.entries {
            self.entries.entry(*key).or_insert_with(|| answers.clone());
        }
    }

    /// Completed instruments with their answers, in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (InstrumentKey, &AnswerSet)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Number of completed instruments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Nothing completed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
