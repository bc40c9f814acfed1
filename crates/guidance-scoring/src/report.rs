//! Report assembly
//!
//! Scores every completed instrument of a student in catalog order.

use crate::cycle::{score_intelligence, score_riasec, CategoryScores};
use crate::eq::{score_eq, EqScore};
use crate::error::ScoringError;
use crate::goal::{score_goal, GoalScore};
use crate::readiness::score_readiness;
use guidance_catalog::{catalog, AnswerSet, InstrumentKey, ResultSet};
use serde::Serialize;

/// Computed score of one instrument
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "score", rename_all = "kebab-case")]
pub enum InstrumentScore {
    /// Goal / self-assessment
    Goal(GoalScore),
    /// Multiple intelligences
    Intelligence(CategoryScores),
    /// Emotional quotient
    Eq(EqScore),
    /// RIASEC interests
    Riasec(CategoryScores),
    /// Career readiness
    Readiness(CategoryScores),
}

/// Score `answers` with the formula of instrument `key`
///
/// # Errors
/// - `ScoringError::KindMismatch` when the answers do not fit the instrument
pub fn score(key: InstrumentKey, answers: &AnswerSet) -> Result<InstrumentScore, ScoringError> {
    Ok(match key {
        InstrumentKey::Goal => InstrumentScore::Goal(score_goal(answers)?),
        InstrumentKey::Intelligence => InstrumentScore::Intelligence(score_intelligence(answers)?),
        InstrumentKey::Eq => InstrumentScore::Eq(score_eq(answers)?),
        InstrumentKey::Riasec => InstrumentScore::Riasec(score_riasec(answers)?),
        InstrumentKey::Readiness => InstrumentScore::Readiness(score_readiness(answers)?),
    })
}

/// One scored instrument
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    /// Instrument key
    pub key: InstrumentKey,
    /// Instrument title
    pub title: &'static str,
    /// Computed score
    #[serde(flatten)]
    pub score: InstrumentScore,
}

/// Scores of every completed instrument
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    /// Entries in catalog order
    pub entries: Vec<ReportEntry>,
    /// Instruments whose stored answers could not be scored
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<InstrumentKey>,
}

impl Report {
    /// Build the report of `results`
    ///
    /// Answers that do not fit their instrument are logged and listed in
    /// `skipped` rather than failing the whole report.
    #[must_use]
    pub fn build(results: &ResultSet) -> Self {
        let mut report = Self::default();
        for (key, answers) in results.iter() {
            match score(key, answers) {
                Ok(score) => report.entries.push(ReportEntry {
                    key,
                    title: catalog::get(key).title,
                    score,
                }),
                Err(e) => {
                    tracing::warn!(instrument = %key, error = %e, "skipping unscorable answers");
                    report.skipped.push(key);
                }
            }
        }
        report
    }

    /// Entry of `key`
    #[must_use]
    pub fn get(&self, key: InstrumentKey) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Nothing to report
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
