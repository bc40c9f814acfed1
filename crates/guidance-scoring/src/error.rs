//! Scoring errors

use guidance_catalog::{InstrumentKey, InstrumentKind};

/// Errors raised while scoring stored answers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// Answers of the wrong kind for the instrument
    #[error("{instrument} expects {expected:?} answers, found {found:?}")]
    KindMismatch {
        /// Instrument being scored
        instrument: InstrumentKey,
        /// Kind the instrument uses
        expected: InstrumentKind,
        /// Kind of the stored answers
        found: InstrumentKind,
    },
}
