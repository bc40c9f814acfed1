//! Career-readiness scoring
//!
//! Option index maps to an accumulator (0 Data, 1 Person, 2 Tool). The first
//! rank adds 2 points, the second adds 1, the third nothing.

use crate::coerce;
use crate::cycle::{accumulators, CategoryScores};
use crate::error::ScoringError;
use guidance_catalog::{catalog, AnswerSet, InstrumentKey, RankSlot};

const WEIGHTS: [(RankSlot, f64); 2] = [(RankSlot::First, 2.0), (RankSlot::Second, 1.0)];

/// Score the career-readiness instrument, `/ 36 * 10` per accumulator
///
/// # Errors
/// - `ScoringError::KindMismatch` for linear answers
pub fn score_readiness(answers: &AnswerSet) -> Result<CategoryScores, ScoringError> {
    let instrument = catalog::get(InstrumentKey::Readiness);
    let choices = coerce::ranked(instrument, answers)?;
    let mut raw = accumulators(instrument);

    for (index, choice) in choices.iter().enumerate() {
        for (slot, weight) in WEIGHTS {
            let Some(option) = coerce::choice(instrument, index, choice.get(slot)) else {
                continue;
            };
            if let Some(category) = instrument.categories.get(usize::from(option)) {
                *raw.entry(*category).or_default() += weight;
            }
        }
    }

    Ok(CategoryScores::from_raw(raw, 36.0))
}
