//! Instrument definitions
//!
//! An [`Instrument`] is immutable, hard-coded data: its questions, the options
//! a student picks from and the metadata the scoring engine needs.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique instrument identifier
///
/// Serialized with the storage keys the answer store has always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InstrumentKey {
    /// Self-assessment of goals and study habits
    #[serde(rename = "goal_setting")]
    Goal,
    /// Multiple-intelligence survey (8 categories)
    #[serde(rename = "multiple_intelligence")]
    Intelligence,
    /// Emotional-quotient assessment
    #[serde(rename = "eq_assessment")]
    Eq,
    /// RIASEC vocational interest inventory
    #[serde(rename = "riasec_assessment")]
    Riasec,
    /// Career readiness (Data / Person / Tool ranking)
    #[serde(rename = "career_readiness")]
    Readiness,
}

impl InstrumentKey {
    /// All instruments in catalog order
    pub const ALL: [InstrumentKey; 5] = [
        InstrumentKey::Goal,
        InstrumentKey::Intelligence,
        InstrumentKey::Eq,
        InstrumentKey::Riasec,
        InstrumentKey::Readiness,
    ];

    /// Storage key
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Goal => "goal_setting",
            Self::Intelligence => "multiple_intelligence",
            Self::Eq => "eq_assessment",
            Self::Riasec => "riasec_assessment",
            Self::Readiness => "career_readiness",
        }
    }
}

impl fmt::Display for InstrumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownInstrument(s.to_string()))
    }
}

/// How a question is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstrumentKind {
    /// Pick exactly one option per question
    LinearScale,
    /// Rank three options first / second / third
    RankedChoice,
}

/// Options offered to the student
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSet {
    /// One option list shared by every question
    Shared(&'static [&'static str]),
    /// One option list per question
    PerQuestion(Vec<&'static [&'static str]>),
}

impl OptionSet {
    /// Options for question `index` (0-based)
    #[must_use]
    pub fn for_question(&self, index: usize) -> Option<&'static [&'static str]> {
        match self {
            Self::Shared(options) => Some(options),
            Self::PerQuestion(per) => per.get(index).copied(),
        }
    }
}

/// Inclusive `[low, high]` reference range of an EQ total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceRange {
    /// Lowest total still considered normal
    pub low: u32,
    /// Highest total still considered normal
    pub high: u32,
}

impl ReferenceRange {
    /// Create new range
    #[inline]
    #[must_use]
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }
}

/// EQ sub-dimension: a group of questions summed together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubDimension {
    /// Stable identifier
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// 1-based question numbers
    pub questions: &'static [usize],
    /// Reference range of the sub-total
    pub range: ReferenceRange,
}

/// EQ dimension made of sub-dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    /// Stable identifier
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Reference range of the dimension total
    pub range: ReferenceRange,
    /// Constituent sub-dimensions
    pub subdimensions: &'static [SubDimension],
}

/// Scoring metadata of the EQ instrument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqProfile {
    /// Dimension tree
    pub dimensions: &'static [Dimension],
    /// 1-based numbers of reverse-scored questions
    pub reverse_scored: &'static [usize],
}

impl EqProfile {
    /// Whether 1-based question `number` is reverse-scored
    #[inline]
    #[must_use]
    pub fn is_reverse_scored(&self, number: usize) -> bool {
        self.reverse_scored.contains(&number)
    }
}

/// A fixed assessment instrument
#[derive(Debug, Clone)]
pub struct Instrument {
    /// Unique key
    pub key: InstrumentKey,
    /// Display title
    pub title: &'static str,
    /// Answer kind
    pub kind: InstrumentKind,
    /// Ordered question texts
    pub questions: Vec<&'static str>,
    /// Option lists
    pub options: OptionSet,
    /// Category cycle; question `i` belongs to `categories[i % len]`.
    /// Readiness uses it for the option-index mapping instead.
    pub categories: &'static [&'static str],
    /// EQ dimension tree (EQ only)
    pub eq: Option<&'static EqProfile>,
}

impl Instrument {
    /// Number of questions
    #[inline]
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Question text at `index`
    #[inline]
    #[must_use]
    pub fn question(&self, index: usize) -> Option<&'static str> {
        self.questions.get(index).copied()
    }

    /// Option list for question `index`
    #[inline]
    #[must_use]
    pub fn options_for(&self, index: usize) -> Option<&'static [&'static str]> {
        if index >= self.questions.len() {
            return None;
        }
        self.options.for_question(index)
    }

    /// Number of options for question `index` (0 when out of range)
    #[inline]
    #[must_use]
    pub fn option_count(&self, index: usize) -> usize {
        self.options_for(index).map_or(0, <[_]>::len)
    }

    /// Round-robin category of question `index`
    #[must_use]
    pub fn category_of(&self, index: usize) -> Option<&'static str> {
        if self.categories.is_empty() {
            return None;
        }
        Some(self.categories[index % self.categories.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips_through_str() {
        for key in InstrumentKey::ALL {
            assert_eq!(key.as_str().parse::<InstrumentKey>().unwrap(), key);
        }
        assert!(matches!(
            "nope".parse::<InstrumentKey>(),
            Err(CatalogError::UnknownInstrument(_))
        ));
    }

    #[test]
    fn key_serializes_as_storage_key() {
        let json = serde_json::to_string(&InstrumentKey::Eq).unwrap();
        assert_eq!(json, "\"eq_assessment\"");
    }

    #[test]
    fn shared_options_apply_to_any_question() {
        let set = OptionSet::Shared(&["a", "b"]);
        assert_eq!(set.for_question(0), Some(&["a", "b"][..]));
        assert_eq!(set.for_question(99), Some(&["a", "b"][..]));
    }

    #[test]
    fn per_question_options_are_indexed() {
        let set = OptionSet::PerQuestion(vec![&["a"], &["b", "c"]]);
        assert_eq!(set.for_question(1).map(<[_]>::len), Some(2));
        assert_eq!(set.for_question(2), None);
    }
}
