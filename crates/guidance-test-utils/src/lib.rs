//! Testing utilities for the guidance workspace
//!
//! Shared fixtures: identities, full answer sets, seeded registries and an
//! in-memory persistence adapter with failure switches.

#![allow(missing_docs)]

use async_trait::async_trait;
use guidance_catalog::{
    catalog, AnswerSet, IdentityKey, InstrumentKey, InstrumentKind, RankedChoice, Registry,
    ResultSet, StudentIdentity,
};
use guidance_store::{LocalStore, PersistenceAdapter, PersistenceError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tempfile::TempDir;
use tokio::sync::Mutex;

pub const CLASS: &str = "3/1";
pub const NAME: &str = "Somchai";

pub fn student() -> StudentIdentity {
    StudentIdentity::new(NAME, CLASS).unwrap()
}

pub fn seeded_registry() -> Registry {
    let mut registry = Registry::with_classes([CLASS, "3/2"]);
    registry.register(CLASS, NAME).unwrap();
    registry.register(CLASS, "Malee").unwrap();
    registry
}

/// Every question of a linear instrument answered with `option`
pub fn linear_answers(key: InstrumentKey, option: u8) -> AnswerSet {
    let instrument = catalog::get(key);
    assert_eq!(instrument.kind, InstrumentKind::LinearScale);
    AnswerSet::Linear(vec![Some(option); instrument.question_count()])
}

/// Every readiness question ranked `first, second, third`
pub fn ranked_answers(first: u8, second: u8, third: u8) -> AnswerSet {
    let count = catalog::get(InstrumentKey::Readiness).question_count();
    AnswerSet::Ranked(vec![RankedChoice::new(first, second, third); count])
}

/// Complete answer set for any instrument
pub fn full_answers(key: InstrumentKey) -> AnswerSet {
    match catalog::get(key).kind {
        InstrumentKind::LinearScale => linear_answers(key, 0),
        InstrumentKind::RankedChoice => ranked_answers(0, 1, 2),
    }
}

pub fn results_with(keys: &[InstrumentKey]) -> ResultSet {
    let mut results = ResultSet::new();
    for key in keys {
        results.insert_once(*key, full_answers(*key));
    }
    results
}

pub fn temp_local_store() -> (TempDir, LocalStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::in_dir(dir.path());
    (dir, store)
}

/// In-memory adapter; `fail_saves` makes every save return a remote error
#[derive(Debug, Default)]
pub struct MemoryStore {
    registry: Mutex<Registry>,
    results: Mutex<HashMap<IdentityKey, ResultSet>>,
    last_user: Mutex<Option<StudentIdentity>>,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry: Mutex::new(registry),
            ..Self::default()
        }
    }

    pub fn with_last_user(self, user: StudentIdentity) -> Self {
        Self {
            last_user: Mutex::new(Some(user)),
            ..self
        }
    }

    pub async fn with_results(self, key: IdentityKey, results: ResultSet) -> Self {
        self.results.lock().await.insert(key, results);
        self
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub async fn stored(&self, key: &IdentityKey) -> Option<ResultSet> {
        self.results.lock().await.get(key).cloned()
    }

    pub async fn remembered(&self) -> Option<StudentIdentity> {
        self.last_user.lock().await.clone()
    }

    pub async fn registry(&self) -> Registry {
        self.registry.lock().await.clone()
    }

    fn check(&self, what: &str) -> Result<(), PersistenceError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            Err(PersistenceError::RemoteStatus {
                status: 503,
                url: format!("memory://{what}"),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PersistenceAdapter for MemoryStore {
    async fn load_registry(&self) -> Result<Registry, PersistenceError> {
        Ok(self.registry.lock().await.clone())
    }

    async fn save_registry(&self, registry: &Registry) -> Result<(), PersistenceError> {
        self.check("registry")?;
        *self.registry.lock().await = registry.clone();
        Ok(())
    }

    async fn load_results(&self, key: &IdentityKey) -> Result<Option<ResultSet>, PersistenceError> {
        Ok(self.results.lock().await.get(key).cloned())
    }

    async fn save_results(
        &self,
        key: &IdentityKey,
        results: &ResultSet,
    ) -> Result<(), PersistenceError> {
        self.check("results")?;
        self.results.lock().await.insert(key.clone(), results.clone());
        Ok(())
    }

    async fn last_user(&self) -> Result<Option<StudentIdentity>, PersistenceError> {
        Ok(self.last_user.lock().await.clone())
    }

    async fn remember_user(&self, user: &StudentIdentity) -> Result<(), PersistenceError> {
        *self.last_user.lock().await = Some(user.clone());
        Ok(())
    }

    async fn forget_user(&self) -> Result<(), PersistenceError> {
        *self.last_user.lock().await = None;
        Ok(())
    }
}
