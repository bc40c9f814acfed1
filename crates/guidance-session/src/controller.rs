//! Navigation controller
//!
//! Owns the whole session: current view, consent, the class registry, the
//! identified student, their stored results and the questionnaire in
//! progress. Persistence is awaited inline but never fails an operation;
//! its outcome is reported through [`SyncStatus`].

use crate::error::NavigationError;
use crate::navigation::{validate_transition, View};
use crate::questionnaire::{AdvanceOutcome, Questionnaire};
use crate::session_store::SessionStore;
use guidance_catalog::{catalog, AnswerSet, InstrumentKey, RankSlot, Registry, StudentIdentity};
use guidance_scoring::Report;
use guidance_store::{PersistenceAdapter, PersistenceError};
use serde::Serialize;

/// Outcome of the last persistence write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "kebab-case")]
pub enum SyncStatus {
    /// Nothing written this session
    Idle,
    /// Last write reached every store
    Synced,
    /// Stored locally; the remote mirror failed
    LocalOnly(String),
    /// Nothing stored; results live in memory only
    Failed(String),
}

/// Instrument list entry for the selection view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Instrument key
    pub key: InstrumentKey,
    /// Title
    pub title: &'static str,
    /// Question count
    pub questions: usize,
    /// Completed by the current student
    pub completed: bool,
}

/// Outcome of choosing an instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Questionnaire started on the answer view
    Started,
    /// Already completed; showing its report instead
    AlreadyCompleted,
}

/// Session controller over a persistence adapter
#[derive(Debug)]
pub struct Navigator<P> {
    adapter: P,
    view: View,
    consent: bool,
    registry: Registry,
    current: Option<StudentIdentity>,
    store: SessionStore,
    questionnaire: Option<Questionnaire>,
    focus: Option<InstrumentKey>,
    sync: SyncStatus,
}

impl<P: PersistenceAdapter> Navigator<P> {
    /// Build a session, hydrating the registry and any remembered user
    ///
    /// `seed` holds the configured classes; the persisted registry is merged
    /// into it. A remembered user resumes on the selection view with consent
    /// already given.
    pub async fn new(adapter: P, seed: Registry) -> Self {
        let mut navigator = Self {
            adapter,
            view: View::Home,
            consent: false,
            registry: seed,
            current: None,
            store: SessionStore::new(),
            questionnaire: None,
            focus: None,
            sync: SyncStatus::Idle,
        };

        match navigator.adapter.load_registry().await {
            Ok(stored) => navigator.registry.merge(&stored),
            Err(e) => tracing::warn!(error = %e, "registry not loaded, using configured classes"),
        }

        match navigator.adapter.last_user().await {
            Ok(Some(user)) => {
                tracing::info!(student = %user, "resuming session");
                navigator.consent = true;
                navigator.enter(user).await;
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "last user not loaded"),
        }

        navigator
    }

    /// Current view
    #[inline]
    pub fn view(&self) -> View {
        self.view
    }

    /// Whether consent was given
    #[inline]
    pub fn consent_given(&self) -> bool {
        self.consent
    }

    /// Identified student
    #[inline]
    pub fn current(&self) -> Option<&StudentIdentity> {
        self.current.as_ref()
    }

    /// Class registry
    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Outcome of the last write
    #[inline]
    pub fn sync_status(&self) -> &SyncStatus {
        &self.sync
    }

    /// Questionnaire in progress
    #[inline]
    pub fn questionnaire(&self) -> Option<&Questionnaire> {
        self.questionnaire.as_ref()
    }

    /// Instrument the report view was opened for (`None` for the summary)
    #[inline]
    pub fn focus(&self) -> Option<InstrumentKey> {
        self.focus
    }

    /// Persistence adapter
    #[inline]
    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    fn go(&mut self, to: View) -> Result<(), NavigationError> {
        validate_transition(self.view, to)?;
        tracing::debug!(from = %self.view, %to, "view transition");
        self.view = to;
        Ok(())
    }

    fn identity(&self) -> Result<&StudentIdentity, NavigationError> {
        self.current.as_ref().ok_or(NavigationError::NoIdentity)
    }

    fn record_sync(&mut self, what: &str, result: Result<(), PersistenceError>) {
        self.sync = match result {
            Ok(()) => SyncStatus::Synced,
            Err(e) if e.is_remote() => {
                tracing::warn!(%what, error = %e, "stored locally, remote sync failed");
                SyncStatus::LocalOnly(e.to_string())
            }
            Err(e) => {
                tracing::warn!(%what, error = %e, "not persisted");
                SyncStatus::Failed(e.to_string())
            }
        };
    }

    /// Acknowledge the consent notice on the home view
    pub fn give_consent(&mut self) {
        self.consent = true;
    }

    /// Leave the home view for identification
    ///
    /// # Errors
    /// - `ConsentRequired` before consent was given
    /// - `IllegalTransition` outside the home view
    pub fn begin(&mut self) -> Result<(), NavigationError> {
        if !self.consent {
            return Err(NavigationError::ConsentRequired);
        }
        self.go(View::Identify)
    }

    /// Switch to registering a new name
    ///
    /// # Errors
    /// - `IllegalTransition` outside the identify view
    pub fn open_registration(&mut self) -> Result<(), NavigationError> {
        self.go(View::CustomIdentify)
    }

    /// Identify as a name already registered in `class`
    ///
    /// # Errors
    /// - `IllegalTransition` unless identifying
    /// - `UnknownStudent` when the name is not in the roster
    pub async fn identify_existing(&mut self, class: &str, name: &str) -> Result<(), NavigationError> {
        validate_transition(self.view, View::Select)?;
        if !self.registry.contains(class, name) {
            return Err(NavigationError::UnknownStudent {
                class: class.trim().to_string(),
                name: name.trim().to_string(),
            });
        }
        let identity = StudentIdentity::new(name, class)?;
        self.enter(identity).await;
        Ok(())
    }

    /// Register `name` in `class` (no-op when already present) and identify
    /// as that student
    ///
    /// # Errors
    /// - `IllegalTransition` unless identifying
    /// - `Catalog` for a blank name or class
    pub async fn register_and_identify(&mut self, class: &str, name: &str) -> Result<(), NavigationError> {
        validate_transition(self.view, View::Select)?;
        let identity = StudentIdentity::new(name, class)?;
        if self.registry.register(identity.class(), identity.name())? {
            tracing::info!(student = %identity, "registered");
            let result = self.adapter.save_registry(&self.registry).await;
            self.record_sync("registry", result);
        }
        self.enter(identity).await;
        Ok(())
    }

    async fn enter(&mut self, identity: StudentIdentity) {
        let key = identity.key();
        match self.adapter.load_results(&key).await {
            Ok(Some(loaded)) => self.store.hydrate(&key, &loaded),
            Ok(None) => {}
            Err(e) => tracing::warn!(%key, error = %e, "stored results not loaded"),
        }
        if let Err(e) = self.adapter.remember_user(&identity).await {
            tracing::warn!(error = %e, "last user not remembered");
        }
        tracing::info!(student = %identity, "identified");
        self.current = Some(identity);
        self.questionnaire = None;
        self.focus = None;
        self.view = View::Select;
    }

    /// Return to identification to switch student
    ///
    /// # Errors
    /// - `IllegalTransition` outside the selection view
    pub fn change_user(&mut self) -> Result<(), NavigationError> {
        self.go(View::Identify)?;
        self.current = None;
        Ok(())
    }

    /// Every instrument with its completion badge
    #[must_use]
    pub fn catalog(&self) -> Vec<CatalogEntry> {
        let key = self.current.as_ref().map(StudentIdentity::key);
        catalog::all()
            .map(|instrument| CatalogEntry {
                key: instrument.key,
                title: instrument.title,
                questions: instrument.question_count(),
                completed: key
                    .as_ref()
                    .is_some_and(|k| self.store.is_completed(k, instrument.key)),
            })
            .collect()
    }

    /// Choose an instrument; a completed one opens its report instead
    ///
    /// # Errors
    /// - `NoIdentity` without an identified student
    /// - `IllegalTransition` outside the selection view
    pub fn start_assessment(&mut self, instrument: InstrumentKey) -> Result<StartOutcome, NavigationError> {
        let key = self.identity()?.key();
        if self.store.is_completed(&key, instrument) {
            self.go(View::Report)?;
            self.focus = Some(instrument);
            tracing::debug!(%instrument, "already completed, showing report");
            return Ok(StartOutcome::AlreadyCompleted);
        }
        self.go(View::Answer)?;
        let mut questionnaire = Questionnaire::new(catalog::get(instrument));
        questionnaire.start();
        self.questionnaire = Some(questionnaire);
        tracing::info!(%instrument, "assessment started");
        Ok(StartOutcome::Started)
    }

    fn in_progress(&mut self) -> Result<&mut Questionnaire, NavigationError> {
        if self.view != View::Answer {
            return Err(NavigationError::NothingInProgress);
        }
        self.questionnaire.as_mut().ok_or(NavigationError::NothingInProgress)
    }

    /// Answer the current linear-scale question
    ///
    /// # Errors
    /// - `NothingInProgress` or a `Validation` error
    pub fn select_option(&mut self, option: u8) -> Result<(), NavigationError> {
        Ok(self.in_progress()?.select_option(option)?)
    }

    /// Rank `option` in `slot` of the current ranked question
    ///
    /// # Errors
    /// - `NothingInProgress` or a `Validation` error
    pub fn select_rank(&mut self, slot: RankSlot, option: u8) -> Result<(), NavigationError> {
        Ok(self.in_progress()?.select_rank(slot, option)?)
    }

    /// Go back one question
    ///
    /// # Errors
    /// - `NothingInProgress`
    pub fn retreat(&mut self) -> Result<usize, NavigationError> {
        Ok(self.in_progress()?.retreat()?)
    }

    /// Confirm the current question. Confirming the last one stores the
    /// answers, persists them and opens the report.
    ///
    /// # Errors
    /// - `NothingInProgress` or a `Validation` error
    pub async fn advance(&mut self) -> Result<AdvanceOutcome, NavigationError> {
        let outcome = self.in_progress()?.advance()?;
        if let AdvanceOutcome::Completed(answers) = &outcome {
            let instrument = self
                .questionnaire
                .take()
                .map(|q| q.key())
                .ok_or(NavigationError::NothingInProgress)?;
            self.complete(instrument, answers.clone()).await?;
        }
        Ok(outcome)
    }

    async fn complete(
        &mut self,
        instrument: InstrumentKey,
        answers: AnswerSet,
    ) -> Result<(), NavigationError> {
        let key = self.identity()?.key();
        if self.store.complete(&key, instrument, answers) {
            tracing::info!(%key, %instrument, "assessment completed");
            if let Some(results) = self.store.results(&key).cloned() {
                let result = self.adapter.save_results(&key, &results).await;
                self.record_sync("results", result);
            }
        }
        tracing::debug!(from = %self.view, to = %View::Report, "view transition");
        self.view = View::Report;
        self.focus = Some(instrument);
        Ok(())
    }

    /// Leave the questionnaire without saving
    ///
    /// # Errors
    /// - `IllegalTransition` outside the answer view
    pub fn abandon(&mut self) -> Result<(), NavigationError> {
        self.go(View::Select)?;
        if let Some(q) = self.questionnaire.take() {
            tracing::debug!(instrument = %q.key(), "questionnaire abandoned");
        }
        Ok(())
    }

    /// Open the summary report
    ///
    /// # Errors
    /// - `NoIdentity` or `IllegalTransition`
    pub fn open_report(&mut self) -> Result<(), NavigationError> {
        self.identity()?;
        self.go(View::Report)?;
        self.focus = None;
        Ok(())
    }

    /// Back from the report to the instrument list
    ///
    /// # Errors
    /// - `IllegalTransition` outside the report view
    pub fn back_to_select(&mut self) -> Result<(), NavigationError> {
        self.go(View::Select)?;
        self.focus = None;
        Ok(())
    }

    /// Scores of the current student, recomputed from stored answers
    ///
    /// # Errors
    /// - `NoIdentity`
    pub fn report(&self) -> Result<Report, NavigationError> {
        let key = self.identity()?.key();
        Ok(self
            .store
            .results(&key)
            .map(Report::build)
            .unwrap_or_default())
    }

    /// Forget the current student and return home; stored results are kept
    pub async fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            tracing::info!(student = %user, "logged out");
        }
        self.questionnaire = None;
        self.focus = None;
        self.consent = false;
        self.view = View::Home;
        if let Err(e) = self.adapter.forget_user().await {
            tracing::warn!(error = %e, "last user not cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use guidance_catalog::{IdentityKey, ResultSet};
    use guidance_test_utils::{full_answers, seeded_registry, student, MemoryStore, CLASS, NAME};
    use mockall::mock;
    use pretty_assertions::assert_eq;

    mock! {
        Adapter {}

        #[async_trait]
        impl PersistenceAdapter for Adapter {
            async fn load_registry(&self) -> Result<Registry, PersistenceError>;
            async fn save_registry(&self, registry: &Registry) -> Result<(), PersistenceError>;
            async fn load_results(&self, key: &IdentityKey) -> Result<Option<ResultSet>, PersistenceError>;
            async fn save_results(&self, key: &IdentityKey, results: &ResultSet) -> Result<(), PersistenceError>;
            async fn last_user(&self) -> Result<Option<StudentIdentity>, PersistenceError>;
            async fn remember_user(&self, user: &StudentIdentity) -> Result<(), PersistenceError>;
            async fn forget_user(&self) -> Result<(), PersistenceError>;
        }
    }

    fn disk_full() -> PersistenceError {
        PersistenceError::io("guidance.json", std::io::Error::other("disk full"))
    }

    async fn identified() -> Navigator<MemoryStore> {
        let mut nav = Navigator::new(MemoryStore::new(), seeded_registry()).await;
        nav.give_consent();
        nav.begin().unwrap();
        nav.identify_existing(CLASS, NAME).await.unwrap();
        nav
    }

    #[tokio::test]
    async fn consent_gates_identification() {
        let mut nav = Navigator::new(MemoryStore::new(), seeded_registry()).await;
        assert_eq!(nav.view(), View::Home);
        assert_eq!(nav.begin(), Err(NavigationError::ConsentRequired));
        nav.give_consent();
        nav.begin().unwrap();
        assert_eq!(nav.view(), View::Identify);
    }

    #[tokio::test]
    async fn unknown_names_are_rejected() {
        let mut nav = Navigator::new(MemoryStore::new(), seeded_registry()).await;
        nav.give_consent();
        nav.begin().unwrap();
        let err = nav.identify_existing(CLASS, "Nobody").await.unwrap_err();
        assert!(matches!(err, NavigationError::UnknownStudent { .. }));
        assert_eq!(nav.view(), View::Identify);
        assert!(nav.current().is_none());
    }

    #[tokio::test]
    async fn identification_remembers_user() {
        let nav = identified().await;
        assert_eq!(nav.view(), View::Select);
        assert_eq!(nav.current(), Some(&student()));
        assert_eq!(nav.adapter().remembered().await, Some(student()));
    }

    #[tokio::test]
    async fn completed_instrument_routes_to_report() {
        let store = MemoryStore::new()
            .with_results(student().key(), guidance_test_utils::results_with(&[InstrumentKey::Goal]))
            .await;
        let mut nav = Navigator::new(store, seeded_registry()).await;
        nav.give_consent();
        nav.begin().unwrap();
        nav.identify_existing(CLASS, NAME).await.unwrap();

        let goal = nav.catalog().into_iter().find(|e| e.key == InstrumentKey::Goal).unwrap();
        assert!(goal.completed);
        assert_eq!(nav.start_assessment(InstrumentKey::Goal), Ok(StartOutcome::AlreadyCompleted));
        assert_eq!(nav.view(), View::Report);
        assert_eq!(nav.focus(), Some(InstrumentKey::Goal));
        assert!(nav.questionnaire().is_none());
    }

    #[tokio::test]
    async fn abandon_discards_buffer() {
        let mut nav = identified().await;
        nav.start_assessment(InstrumentKey::Goal).unwrap();
        nav.select_option(0).unwrap();
        nav.abandon().unwrap();
        assert_eq!(nav.view(), View::Select);
        assert!(nav.questionnaire().is_none());
        assert!(nav.adapter().stored(&student().key()).await.is_none());
        assert_eq!(nav.select_option(0), Err(NavigationError::NothingInProgress));
    }

    #[tokio::test]
    async fn logout_clears_identity_but_keeps_results() {
        let store = MemoryStore::new()
            .with_results(student().key(), guidance_test_utils::results_with(&[InstrumentKey::Eq]))
            .await;
        let mut nav = Navigator::new(store, seeded_registry()).await;
        nav.give_consent();
        nav.begin().unwrap();
        nav.identify_existing(CLASS, NAME).await.unwrap();
        nav.logout().await;

        assert_eq!(nav.view(), View::Home);
        assert!(nav.current().is_none());
        assert!(!nav.consent_given());
        assert_eq!(nav.adapter().remembered().await, None);
        assert!(nav.adapter().stored(&student().key()).await.is_some());
        assert_eq!(nav.report(), Err(NavigationError::NoIdentity));
    }

    #[tokio::test]
    async fn remote_failure_only_changes_sync_status() {
        let mut adapter = MockAdapter::new();
        adapter.expect_load_registry().returning(|| Ok(seeded_registry()));
        adapter.expect_last_user().returning(|| Ok(Some(student())));
        adapter.expect_load_results().returning(|_| Ok(None));
        adapter.expect_remember_user().returning(|_| Ok(()));
        adapter.expect_save_results().times(1).returning(|_, _| {
            Err(PersistenceError::RemoteStatus {
                status: 502,
                url: "http://kv/results".into(),
            })
        });

        let mut nav = Navigator::new(adapter, Registry::new()).await;
        assert_eq!(nav.view(), View::Select);
        nav.start_assessment(InstrumentKey::Goal).unwrap();
        for _ in 0..10 {
            nav.select_option(1).unwrap();
            nav.advance().await.unwrap();
        }

        assert_eq!(nav.view(), View::Report);
        assert!(matches!(nav.sync_status(), SyncStatus::LocalOnly(_)));
        let report = nav.report().unwrap();
        assert!(report.get(InstrumentKey::Goal).is_some());
    }

    #[tokio::test]
    async fn local_failure_keeps_results_in_memory() {
        let mut adapter = MockAdapter::new();
        adapter.expect_load_registry().returning(|| Err(disk_full()));
        adapter.expect_last_user().returning(|| Err(disk_full()));
        adapter.expect_load_results().returning(|_| Err(disk_full()));
        adapter.expect_remember_user().returning(|_| Err(disk_full()));
        adapter.expect_save_registry().returning(|_| Err(disk_full()));
        adapter.expect_save_results().returning(|_, _| Err(disk_full()));

        let mut nav = Navigator::new(adapter, Registry::with_classes(["6/1"])).await;
        assert_eq!(nav.view(), View::Home);
        nav.give_consent();
        nav.begin().unwrap();
        nav.open_registration().unwrap();
        nav.register_and_identify("6/1", "Ploy").await.unwrap();
        assert!(matches!(nav.sync_status(), SyncStatus::Failed(_)));
        assert!(nav.registry().contains("6/1", "Ploy"));

        nav.start_assessment(InstrumentKey::Readiness).unwrap();
        let AnswerSet::Ranked(choices) = full_answers(InstrumentKey::Readiness) else {
            panic!("readiness answers are ranked");
        };
        for choice in choices {
            for slot in RankSlot::ALL {
                nav.select_rank(slot, choice.get(slot).unwrap()).unwrap();
            }
            nav.advance().await.unwrap();
        }
        assert!(nav.catalog().iter().any(|e| e.key == InstrumentKey::Readiness && e.completed));
    }

    #[tokio::test]
    async fn report_is_unreachable_mid_questionnaire() {
        let mut nav = identified().await;
        nav.start_assessment(InstrumentKey::Eq).unwrap();
        nav.select_option(2).unwrap();
        assert_eq!(
            nav.open_report(),
            Err(NavigationError::IllegalTransition {
                from: View::Answer,
                to: View::Report
            })
        );
        assert_eq!(nav.view(), View::Answer);

        nav.abandon().unwrap();
        assert_eq!(nav.select_option(2), Err(NavigationError::NothingInProgress));
        nav.open_report().unwrap();
        assert_eq!(nav.select_option(2), Err(NavigationError::NothingInProgress));
        assert!(nav.advance().await.is_err());
        assert!(nav.adapter().stored(&student().key()).await.is_none());
    }

    #[tokio::test]
    async fn failing_mirror_marks_session_local_only() {
        let store = MemoryStore::with_registry(seeded_registry()).with_last_user(student());
        store.fail_saves(true);
        let mut nav = Navigator::new(store, Registry::new()).await;
        assert_eq!(nav.view(), View::Select);
        assert!(nav.registry().contains(CLASS, NAME));

        nav.start_assessment(InstrumentKey::Goal).unwrap();
        for _ in 0..10 {
            nav.select_option(0).unwrap();
            nav.advance().await.unwrap();
        }
        assert!(matches!(nav.sync_status(), SyncStatus::LocalOnly(_)));
        assert!(nav.adapter().stored(&student().key()).await.is_none());
        assert!(nav.catalog().iter().any(|e| e.key == InstrumentKey::Goal && e.completed));

        nav.adapter().fail_saves(false);
        nav.back_to_select().unwrap();
        nav.start_assessment(InstrumentKey::Riasec).unwrap();
        for _ in 0..54 {
            nav.select_option(1).unwrap();
            nav.advance().await.unwrap();
        }
        assert_eq!(nav.sync_status(), &SyncStatus::Synced);
        let stored = nav.adapter().stored(&student().key()).await.unwrap();
        assert!(stored.is_completed(InstrumentKey::Goal));
        assert!(stored.is_completed(InstrumentKey::Riasec));
    }

    #[tokio::test]
    async fn registration_is_persisted() {
        let mut nav = Navigator::new(MemoryStore::new(), seeded_registry()).await;
        nav.give_consent();
        nav.begin().unwrap();
        nav.open_registration().unwrap();
        nav.register_and_identify(" 3/2 ", " Niran ").await.unwrap();
        assert_eq!(nav.sync_status(), &SyncStatus::Synced);
        assert!(nav.adapter().registry().await.contains("3/2", "Niran"));
    }
}
