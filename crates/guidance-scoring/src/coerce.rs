use crate::error::ScoringError;
use guidance_catalog::{AnswerSet, Instrument, InstrumentKind, RankedChoice};

pub(crate) fn linear<'a>(
    instrument: &Instrument,
    answers: &'a AnswerSet,
) -> Result<&'a [Option<u8>], ScoringError> {
    match answers {
        AnswerSet::Linear(values) => Ok(values),
        AnswerSet::Ranked(_) => Err(ScoringError::KindMismatch {
            instrument: instrument.key,
            expected: InstrumentKind::LinearScale,
            found: InstrumentKind::RankedChoice,
        }),
    }
}

pub(crate) fn ranked<'a>(
    instrument: &Instrument,
    answers: &'a AnswerSet,
) -> Result<&'a [RankedChoice], ScoringError> {
    match answers {
        AnswerSet::Ranked(values) => Ok(values),
        AnswerSet::Linear(_) => Err(ScoringError::KindMismatch {
            instrument: instrument.key,
            expected: InstrumentKind::RankedChoice,
            found: InstrumentKind::LinearScale,
        }),
    }
}

/// Answer at `index` if it names an option of that question
pub(crate) fn choice(instrument: &Instrument, index: usize, answer: Option<u8>) -> Option<u8> {
    let Some(value) = answer else {
        tracing::debug!(instrument = %instrument.key, question = index, "unanswered entry left out");
        return None;
    };
    if usize::from(value) < instrument.option_count(index) {
        Some(value)
    } else {
        tracing::warn!(
            instrument = %instrument.key,
            question = index,
            value,
            "answer outside option range left out"
        );
        None
    }
}
