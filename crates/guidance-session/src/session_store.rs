//! In-memory result store owned by the controller

use guidance_catalog::{AnswerSet, IdentityKey, InstrumentKey, ResultSet};
use std::collections::HashMap;

/// Completed answer sets per identity; append-only per instrument
#[derive(Debug, Default)]
pub struct SessionStore {
    results: HashMap<IdentityKey, ResultSet>,
}

impl SessionStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Results of `key`
    #[must_use]
    pub fn results(&self, key: &IdentityKey) -> Option<&ResultSet> {
        self.results.get(key)
    }

    /// Whether `key` has completed `instrument`
    #[must_use]
    pub fn is_completed(&self, key: &IdentityKey, instrument: InstrumentKey) -> bool {
        self.results
            .get(key)
            .is_some_and(|r| r.is_completed(instrument))
    }

    /// Record a completed instrument. Returns `false` (and keeps the earlier
    /// answers) when it was already recorded.
    pub fn complete(&mut self, key: &IdentityKey, instrument: InstrumentKey, answers: AnswerSet) -> bool {
        self.results
            .entry(key.clone())
            .or_default()
            .insert_once(instrument, answers)
    }

    /// Fold in results loaded from persistence; entries already held win
    pub fn hydrate(&mut self, key: &IdentityKey, loaded: &ResultSet) {
        self.results.entry(key.clone()).or_default().merge_missing(loaded);
    }
}
