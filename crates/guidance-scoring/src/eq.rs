//! EQ scoring
//!
//! Two passes. Each answer first becomes an item score (`answer + 1`, or
//! `4 - answer` for reverse-scored questions). Item scores are then summed
//! per sub-dimension and per dimension and compared against the reference
//! ranges. Totals are raw sums; only the interpretation uses the ranges.

use crate::coerce;
use crate::error::ScoringError;
use guidance_catalog::{catalog, AnswerSet, EqProfile, InstrumentKey, ReferenceRange};
use serde::Serialize;
use std::fmt;

/// Position of a total relative to its reference range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpretation {
    /// Total below the range
    Below,
    /// Total inside the range (inclusive)
    Normal,
    /// Total above the range
    Above,
}

impl Interpretation {
    /// Classify `total` against `range`
    #[must_use]
    pub fn classify(total: u32, range: ReferenceRange) -> Self {
        if total < range.low {
            Self::Below
        } else if total > range.high {
            Self::Above
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Below => "below",
            Self::Normal => "normal",
            Self::Above => "above",
        };
        f.write_str(s)
    }
}

/// Sub-dimension total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubDimensionScore {
    /// Sub-dimension key
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Sum of item scores
    pub score: u32,
    /// Reference range
    pub range: ReferenceRange,
    /// Classification of `score`
    pub interpretation: Interpretation,
}

/// Dimension total with its sub-dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionScore {
    /// Dimension key
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Sum of sub-dimension scores
    pub total: u32,
    /// Reference range
    pub range: ReferenceRange,
    /// Classification of `total`
    pub interpretation: Interpretation,
    /// Constituent sub-dimensions
    pub subdimensions: Vec<SubDimensionScore>,
}

/// EQ result, one entry per dimension in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EqScore {
    dimensions: Vec<DimensionScore>,
}

impl EqScore {
    /// Dimension by key
    #[must_use]
    pub fn dimension(&self, key: &str) -> Option<&DimensionScore> {
        self.dimensions.iter().find(|d| d.key == key)
    }

    /// All dimensions
    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> &[DimensionScore] {
        &self.dimensions
    }
}

/// Pass 1: item score of every answered question (0 when left out)
fn item_scores(profile: &EqProfile, answers: &[Option<u8>]) -> Vec<u32> {
    let instrument = catalog::get(InstrumentKey::Eq);
    (0..instrument.question_count())
        .map(|index| {
            let answer = answers.get(index).copied().flatten();
            match coerce::choice(instrument, index, answer) {
                Some(a) if profile.is_reverse_scored(index + 1) => 4 - u32::from(a),
                Some(a) => u32::from(a) + 1,
                None => 0,
            }
        })
        .collect()
}

/// Score the EQ instrument
///
/// # Errors
/// - `ScoringError::KindMismatch` for ranked answers
pub fn score_eq(answers: &AnswerSet) -> Result<EqScore, ScoringError> {
    let instrument = catalog::get(InstrumentKey::Eq);
    let values = coerce::linear(instrument, answers)?;
    let Some(profile) = instrument.eq else {
        return Ok(EqScore { dimensions: Vec::new() });
    };
    let items = item_scores(profile, values);

    let dimensions = profile
        .dimensions
        .iter()
        .map(|dimension| {
            let subdimensions: Vec<SubDimensionScore> = dimension
                .subdimensions
                .iter()
                .map(|sub| {
                    let score = sub
                        .questions
                        .iter()
                        .filter_map(|n| items.get(n - 1))
                        .sum();
                    SubDimensionScore {
                        key: sub.key,
                        name: sub.name,
                        score,
                        range: sub.range,
                        interpretation: Interpretation::classify(score, sub.range),
                    }
                })
                .collect();
            let total = subdimensions.iter().map(|s| s.score).sum();
            DimensionScore {
                key: dimension.key,
                name: dimension.name,
                total,
                range: dimension.range,
                interpretation: Interpretation::classify(total, dimension.range),
                subdimensions,
            }
        })
        .collect();

    Ok(EqScore { dimensions })
}
