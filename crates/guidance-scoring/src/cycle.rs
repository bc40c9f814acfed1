//! Round-robin category scoring (RIASEC and multiple intelligences)
//!
//! Question `i` feeds category `categories[i % k]`. Each answered question
//! adds `top - answer` points; totals are scaled onto 0–10.

use crate::coerce;
use crate::error::ScoringError;
use crate::normalize;
use guidance_catalog::{catalog, AnswerSet, Instrument, InstrumentKey};
use indexmap::IndexMap;
use serde::Serialize;

/// Category name to 0–10 score, in the instrument's category order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryScores(IndexMap<&'static str, f64>);

impl CategoryScores {
    pub(crate) fn from_raw(raw: IndexMap<&'static str, f64>, max: f64) -> Self {
        Self(
            raw.into_iter()
                .map(|(name, value)| (name, normalize(value, max)))
                .collect(),
        )
    }

    /// Score of `category`
    #[inline]
    #[must_use]
    pub fn get(&self, category: &str) -> Option<f64> {
        self.0.get(category).copied()
    }

    /// Categories in instrument order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// Categories strongest first; ties keep instrument order
    #[must_use]
    pub fn ranked(&self) -> Vec<(&'static str, f64)> {
        let mut out: Vec<_> = self.iter().collect();
        out.sort_by(|a, b| b.1.total_cmp(&a.1));
        out
    }

    /// Number of categories
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No categories
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Zeroed accumulators in category order
pub(crate) fn accumulators(instrument: &Instrument) -> IndexMap<&'static str, f64> {
    instrument.categories.iter().map(|c| (*c, 0.0)).collect()
}

fn accumulate(
    instrument: &Instrument,
    answers: &AnswerSet,
    top: u8,
) -> Result<IndexMap<&'static str, f64>, ScoringError> {
    let values = coerce::linear(instrument, answers)?;
    let mut raw = accumulators(instrument);
    for (index, answer) in values.iter().enumerate() {
        let Some(value) = coerce::choice(instrument, index, *answer) else {
            continue;
        };
        if let Some(category) = instrument.category_of(index) {
            *raw.entry(category).or_default() += f64::from(top.saturating_sub(value));
        }
    }
    Ok(raw)
}

/// Score the RIASEC inventory: `2 - answer` per question, `/ 18 * 10`
///
/// # Errors
/// - `ScoringError::KindMismatch` for ranked answers
pub fn score_riasec(answers: &AnswerSet) -> Result<CategoryScores, ScoringError> {
    let instrument = catalog::get(InstrumentKey::Riasec);
    let raw = accumulate(instrument, answers, 2)?;
    Ok(CategoryScores::from_raw(raw, 18.0))
}

/// Score the multiple-intelligence survey: `3 - answer` per question, `/ 30 * 10`
///
/// # Errors
/// - `ScoringError::KindMismatch` for ranked answers
pub fn score_intelligence(answers: &AnswerSet) -> Result<CategoryScores, ScoringError> {
    let instrument = catalog::get(InstrumentKey::Intelligence);
    let raw = accumulate(instrument, answers, 3)?;
    Ok(CategoryScores::from_raw(raw, 30.0))
}
