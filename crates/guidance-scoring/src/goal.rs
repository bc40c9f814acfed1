//! Goal / self-assessment scoring
//!
//! Average of `5 - answer` over answered questions, banded by fixed
//! thresholds.

use crate::coerce;
use crate::error::ScoringError;
use crate::round2;
use guidance_catalog::{catalog, AnswerSet, InstrumentKey};
use serde::Serialize;
use std::fmt;

/// Five-step interpretation of the goal score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// Below 1.81
    Lowest,
    /// 1.81 to 2.60
    Low,
    /// 2.61 to 3.40
    Medium,
    /// 3.41 to 4.20
    High,
    /// 4.21 and above
    Highest,
}

impl Band {
    /// Band of a (rounded) goal score
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score >= 4.21 {
            Self::Highest
        } else if score >= 3.41 {
            Self::High
        } else if score >= 2.61 {
            Self::Medium
        } else if score >= 1.81 {
            Self::Low
        } else {
            Self::Lowest
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Highest => "highest",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Lowest => "lowest",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Goal score with its band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalScore {
    /// Average on the 1–5 scale, two decimals; 0 when nothing was answered
    pub score: f64,
    /// Band of `score`
    pub label: Band,
    /// Number of answers that entered the average
    pub answered: usize,
}

/// Score the goal instrument
///
/// # Errors
/// - `ScoringError::KindMismatch` for ranked answers
pub fn score_goal(answers: &AnswerSet) -> Result<GoalScore, ScoringError> {
    let instrument = catalog::get(InstrumentKey::Goal);
    let values = coerce::linear(instrument, answers)?;

    let points: Vec<f64> = values
        .iter()
        .enumerate()
        .filter_map(|(i, a)| coerce::choice(instrument, i, *a))
        .map(|a| 5.0 - f64::from(a))
        .collect();

    let score = if points.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let count = points.len() as f64;
        round2(points.iter().sum::<f64>() / count)
    };

    Ok(GoalScore {
        score,
        label: Band::of(score),
        answered: points.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidance_catalog::RankedChoice;

    #[test]
    fn best_answers_score_highest() {
        let goal = score_goal(&AnswerSet::Linear(vec![Some(0); 5])).unwrap();
        assert_eq!(goal.score, 5.0);
        assert_eq!(goal.label, Band::Highest);
        assert_eq!(goal.answered, 5);
    }

    #[test]
    fn worst_answers_score_lowest() {
        let goal = score_goal(&AnswerSet::Linear(vec![Some(4); 10])).unwrap();
        assert_eq!(goal.score, 1.0);
        assert_eq!(goal.label, Band::Lowest);
    }

    #[test]
    fn unanswered_questions_leave_the_denominator() {
        // (5-0 + 5-2) / 2 = 4.0
        let goal = score_goal(&AnswerSet::Linear(vec![Some(0), None, Some(2), None])).unwrap();
        assert_eq!(goal.score, 4.0);
        assert_eq!(goal.answered, 2);
        assert_eq!(goal.label, Band::High);
    }

    #[test]
    fn out_of_range_answers_are_left_out() {
        let goal = score_goal(&AnswerSet::Linear(vec![Some(1), Some(9)])).unwrap();
        assert_eq!(goal.score, 4.0);
        assert_eq!(goal.answered, 1);
    }

    #[test]
    fn nothing_answered_is_zero_lowest() {
        let goal = score_goal(&AnswerSet::Linear(vec![None; 10])).unwrap();
        assert_eq!(goal.score, 0.0);
        assert_eq!(goal.label, Band::Lowest);
        assert!(!goal.score.is_nan());
    }

    #[test]
    fn average_is_rounded() {
        // (5 + 4 + 4) / 3 = 4.333.. -> 4.33
        let goal = score_goal(&AnswerSet::Linear(vec![Some(0), Some(1), Some(1)])).unwrap();
        assert_eq!(goal.score, 4.33);
        assert_eq!(goal.label, Band::Highest);
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(Band::of(4.21), Band::Highest);
        assert_eq!(Band::of(4.2), Band::High);
        assert_eq!(Band::of(3.41), Band::High);
        assert_eq!(Band::of(3.4), Band::Medium);
        assert_eq!(Band::of(2.61), Band::Medium);
        assert_eq!(Band::of(2.6), Band::Low);
        assert_eq!(Band::of(1.81), Band::Low);
        assert_eq!(Band::of(1.8), Band::Lowest);
    }

    #[test]
    fn ranked_answers_are_rejected() {
        let err = score_goal(&AnswerSet::Ranked(vec![RankedChoice::new(0, 1, 2)])).unwrap_err();
        assert!(matches!(err, ScoringError::KindMismatch { .. }));
    }
}
