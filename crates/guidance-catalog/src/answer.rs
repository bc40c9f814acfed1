//! Raw answers
//!
//! Answers are stored exactly as given (0-based option indices) and scored on
//! demand. The JSON form is a plain array so stored data stays readable:
//! `[0, 2, null]` for linear-scale instruments and
//! `[{"first":0,"second":2,"third":1}]` for ranked-choice ones.

use crate::error::CatalogError;
use crate::instrument::InstrumentKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rank position in a ranked-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankSlot {
    /// Most preferred
    First,
    /// Second preference
    Second,
    /// Least preferred of the three
    Third,
}

impl RankSlot {
    /// All slots in rank order
    pub const ALL: [RankSlot; 3] = [RankSlot::First, RankSlot::Second, RankSlot::Third];
}

impl fmt::Display for RankSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
        };
        f.write_str(s)
    }
}

impl FromStr for RankSlot {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "first" => Ok(Self::First),
            "2" | "second" => Ok(Self::Second),
            "3" | "third" => Ok(Self::Third),
            other => Err(CatalogError::UnknownRankSlot(other.to_string())),
        }
    }
}

/// Three distinct rank slots of one ranked-choice question
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedChoice {
    /// Option ranked first
    #[serde(alias = "rank1")]
    pub first: Option<u8>,
    /// Option ranked second
    #[serde(alias = "rank2")]
    pub second: Option<u8>,
    /// Option ranked third
    #[serde(alias = "rank3")]
    pub third: Option<u8>,
}

impl RankedChoice {
    /// Fully ranked choice
    #[inline]
    #[must_use]
    pub const fn new(first: u8, second: u8, third: u8) -> Self {
        Self {
            first: Some(first),
            second: Some(second),
            third: Some(third),
        }
    }

    /// Option held by `slot`
    #[inline]
    #[must_use]
    pub fn get(&self, slot: RankSlot) -> Option<u8> {
        match slot {
            RankSlot::First => self.first,
            RankSlot::Second => self.second,
            RankSlot::Third => self.third,
        }
    }

    fn slot_mut(&mut self, slot: RankSlot) -> &mut Option<u8> {
        match slot {
            RankSlot::First => &mut self.first,
            RankSlot::Second => &mut self.second,
            RankSlot::Third => &mut self.third,
        }
    }

    /// Slot currently holding `option`
    #[must_use]
    pub fn slot_of(&self, option: u8) -> Option<RankSlot> {
        RankSlot::ALL
            .into_iter()
            .find(|slot| self.get(*slot) == Some(option))
    }

    /// Put `option` into `slot`, vacating whichever slot held it before.
    ///
    /// An option holds at most one rank at a time; the option previously in
    /// `slot` (if different) is simply replaced.
    pub fn assign(&mut self, slot: RankSlot, option: u8) {
        if let Some(previous) = self.slot_of(option) {
            *self.slot_mut(previous) = None;
        }
        *self.slot_mut(slot) = Some(option);
    }

    /// All three slots filled
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first.is_some() && self.second.is_some() && self.third.is_some()
    }
}

/// Raw responses to one instrument, one entry per question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerSet {
    /// Linear-scale answers; `None` means unanswered
    Linear(Vec<Option<u8>>),
    /// Ranked-choice answers
    Ranked(Vec<RankedChoice>),
}

impl AnswerSet {
    /// Empty buffer sized for an instrument
    #[must_use]
    pub fn empty(kind: InstrumentKind, len: usize) -> Self {
        match kind {
            InstrumentKind::LinearScale => Self::Linear(vec![None; len]),
            InstrumentKind::RankedChoice => Self::Ranked(vec![RankedChoice::default(); len]),
        }
    }

    /// Kind of instrument these answers belong to
    #[inline]
    #[must_use]
    pub fn kind(&self) -> InstrumentKind {
        match self {
            Self::Linear(_) => InstrumentKind::LinearScale,
            Self::Ranked(_) => InstrumentKind::RankedChoice,
        }
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Linear(a) => a.len(),
            Self::Ranked(a) => a.len(),
        }
    }

    /// No entries at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether entry `index` is fully answered
    #[must_use]
    pub fn is_answered(&self, index: usize) -> bool {
        match self {
            Self::Linear(a) => a.get(index).is_some_and(Option::is_some),
            Self::Ranked(a) => a.get(index).is_some_and(RankedChoice::is_complete),
        }
    }

    /// Number of fully answered entries
    #[must_use]
    pub fn answered_count(&self) -> usize {
        (0..self.len()).filter(|i| self.is_answered(*i)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assign_moves_option_between_slots() {
        let mut choice = RankedChoice::default();
        choice.assign(RankSlot::First, 2);
        choice.assign(RankSlot::Second, 2);
        assert_eq!(choice.first, None);
        assert_eq!(choice.second, Some(2));
    }

    #[test]
    fn assign_replaces_slot_occupant() {
        let mut choice = RankedChoice::new(0, 1, 2);
        choice.assign(RankSlot::First, 1);
        assert_eq!(choice.first, Some(1));
        assert_eq!(choice.second, None);
        assert_eq!(choice.third, Some(2));
        assert!(!choice.is_complete());
    }

    #[test]
    fn rank_slot_parses_numbers_and_names() {
        assert_eq!("1".parse::<RankSlot>().unwrap(), RankSlot::First);
        assert_eq!("Third".parse::<RankSlot>().unwrap(), RankSlot::Third);
        assert!("fourth".parse::<RankSlot>().is_err());
    }

    #[test]
    fn linear_json_is_plain_array() {
        let set = AnswerSet::Linear(vec![Some(0), None, Some(3)]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[0,null,3]");
        let back: AnswerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn ranked_json_accepts_legacy_field_names() {
        let set: AnswerSet =
            serde_json::from_str(r#"[{"rank1":0,"rank2":1,"rank3":2}]"#).unwrap();
        assert_eq!(set, AnswerSet::Ranked(vec![RankedChoice::new(0, 1, 2)]));
    }

    #[test]
    fn empty_buffers_match_kind() {
        let linear = AnswerSet::empty(InstrumentKind::LinearScale, 3);
        assert_eq!(linear, AnswerSet::Linear(vec![None, None, None]));
        let ranked = AnswerSet::empty(InstrumentKind::RankedChoice, 2);
        assert_eq!(ranked.kind(), InstrumentKind::RankedChoice);
        assert_eq!(ranked.answered_count(), 0);
    }

    #[test]
    fn answered_count_ignores_partial_ranks() {
        let set = AnswerSet::Ranked(vec![
            RankedChoice::new(0, 1, 2),
            RankedChoice {
                first: Some(1),
                ..RankedChoice::default()
            },
        ]);
        assert_eq!(set.answered_count(), 1);
        assert!(set.is_answered(0));
        assert!(!set.is_answered(1));
    }
}
