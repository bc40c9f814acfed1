//! Error types for the session layer
//!
//! Every error here is recoverable: the front end reports it and the user
//! tries again. State is never changed by a failed operation.

use crate::navigation::View;
use guidance_catalog::{CatalogError, InstrumentKey};

/// Rejected answer or questionnaire step
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Current question has no answer
    #[error("question {question} of {instrument} is unanswered")]
    Unanswered {
        /// Instrument
        instrument: InstrumentKey,
        /// 1-based question number
        question: usize,
    },

    /// Current ranked question is missing a slot
    #[error("question {question} of {instrument} needs all three ranks")]
    IncompleteRanking {
        /// Instrument
        instrument: InstrumentKey,
        /// 1-based question number
        question: usize,
    },

    /// Option index outside the question's option list
    #[error("option {option} is out of range for question {question} ({available} options)")]
    OptionOutOfRange {
        /// 1-based question number
        question: usize,
        /// Rejected option index
        option: u8,
        /// Number of options of the question
        available: usize,
    },

    /// Operation does not fit the instrument kind
    #[error("{instrument} does not take this kind of answer")]
    WrongKind {
        /// Instrument
        instrument: InstrumentKey,
    },

    /// Questionnaire not started or already completed
    #[error("questionnaire is not in progress")]
    NotInProgress,
}

/// Rejected navigation step
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// Consent must be acknowledged on the home view first
    #[error("consent has not been given")]
    ConsentRequired,

    /// Transition outside the view table
    #[error("illegal transition from {from} to {to}")]
    IllegalTransition {
        /// Current view
        from: View,
        /// Requested view
        to: View,
    },

    /// Name not in the class roster
    #[error("{name} is not registered in class {class}")]
    UnknownStudent {
        /// Class label
        class: String,
        /// Student name
        name: String,
    },

    /// Operation needs an identified student
    #[error("no student identified")]
    NoIdentity,

    /// No questionnaire running
    #[error("no instrument in progress")]
    NothingInProgress,

    /// Invalid identity or registry input
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Invalid answer
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
