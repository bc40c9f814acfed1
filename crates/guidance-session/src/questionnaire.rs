//! Answer collection for one instrument
//!
//! `NotStarted -> InProgress(index) -> Completed`. The buffer is sized to the
//! instrument when the questionnaire is created; answers survive moving back
//! and forth. Completion hands out the full buffer exactly once.

use crate::error::ValidationError;
use guidance_catalog::{AnswerSet, Instrument, InstrumentKey, RankSlot, RankedChoice};
use serde::Serialize;

/// Questionnaire lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "kebab-case")]
pub enum QuestionnaireState {
    /// Buffer allocated, nothing shown yet
    NotStarted,
    /// Showing question `index` (0-based)
    InProgress(usize),
    /// Final answer set emitted
    Completed,
}

/// Result of a successful `advance`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to question `index`
    Moved(usize),
    /// Last question confirmed; the full answer set
    Completed(AnswerSet),
}

/// Answered / total counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Current question (0-based)
    pub index: usize,
    /// Fully answered questions
    pub answered: usize,
    /// Question count
    pub total: usize,
}

/// Current question as shown to the student
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    /// 1-based question number
    pub number: usize,
    /// Question text
    pub text: &'static str,
    /// Option labels
    pub options: &'static [&'static str],
    /// Buffered answer
    pub answer: CurrentAnswer,
}

/// Buffered answer of the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CurrentAnswer {
    /// Selected option
    Option(Option<u8>),
    /// Ranked slots
    Ranked(RankedChoice),
}

/// One instrument being answered
#[derive(Debug, Clone)]
pub struct Questionnaire {
    instrument: &'static Instrument,
    buffer: AnswerSet,
    state: QuestionnaireState,
}

impl Questionnaire {
    /// Fresh questionnaire with an empty buffer
    #[must_use]
    pub fn new(instrument: &'static Instrument) -> Self {
        Self {
            instrument,
            buffer: AnswerSet::empty(instrument.kind, instrument.question_count()),
            state: QuestionnaireState::NotStarted,
        }
    }

    /// Show the first question
    pub fn start(&mut self) {
        if self.state == QuestionnaireState::NotStarted {
            self.state = QuestionnaireState::InProgress(0);
            tracing::debug!(instrument = %self.key(), "questionnaire started");
        }
    }

    /// Instrument being answered
    #[inline]
    #[must_use]
    pub fn instrument(&self) -> &'static Instrument {
        self.instrument
    }

    /// Instrument key
    #[inline]
    #[must_use]
    pub fn key(&self) -> InstrumentKey {
        self.instrument.key
    }

    /// Lifecycle state
    #[inline]
    #[must_use]
    pub fn state(&self) -> QuestionnaireState {
        self.state
    }

    /// Buffered answers
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.buffer
    }

    fn current(&self) -> Result<usize, ValidationError> {
        match self.state {
            QuestionnaireState::InProgress(index) => Ok(index),
            _ => Err(ValidationError::NotInProgress),
        }
    }

    fn check_option(&self, index: usize, option: u8) -> Result<(), ValidationError> {
        let available = self.instrument.option_count(index);
        if usize::from(option) < available {
            Ok(())
        } else {
            Err(ValidationError::OptionOutOfRange {
                question: index + 1,
                option,
                available,
            })
        }
    }

    /// Answer the current linear-scale question
    ///
    /// # Errors
    /// - `NotInProgress`, `WrongKind` or `OptionOutOfRange`; the buffer is untouched
    pub fn select_option(&mut self, option: u8) -> Result<(), ValidationError> {
        let index = self.current()?;
        self.check_option(index, option)?;
        let AnswerSet::Linear(answers) = &mut self.buffer else {
            return Err(ValidationError::WrongKind {
                instrument: self.instrument.key,
            });
        };
        answers[index] = Some(option);
        Ok(())
    }

    /// Put `option` into `slot` of the current ranked question, vacating
    /// whichever slot held it before
    ///
    /// # Errors
    /// - `NotInProgress`, `WrongKind` or `OptionOutOfRange`; the buffer is untouched
    pub fn select_rank(&mut self, slot: RankSlot, option: u8) -> Result<(), ValidationError> {
        let index = self.current()?;
        self.check_option(index, option)?;
        let AnswerSet::Ranked(choices) = &mut self.buffer else {
            return Err(ValidationError::WrongKind {
                instrument: self.instrument.key,
            });
        };
        choices[index].assign(slot, option);
        Ok(())
    }

    /// Confirm the current question
    ///
    /// # Errors
    /// - `Unanswered` / `IncompleteRanking` when the current question is not
    ///   fully answered; the position is unchanged
    pub fn advance(&mut self) -> Result<AdvanceOutcome, ValidationError> {
        let index = self.current()?;
        if !self.buffer.is_answered(index) {
            let instrument = self.instrument.key;
            let question = index + 1;
            return Err(match self.buffer {
                AnswerSet::Linear(_) => ValidationError::Unanswered {
                    instrument,
                    question,
                },
                AnswerSet::Ranked(_) => ValidationError::IncompleteRanking {
                    instrument,
                    question,
                },
            });
        }

        if index + 1 < self.instrument.question_count() {
            self.state = QuestionnaireState::InProgress(index + 1);
            tracing::debug!(instrument = %self.key(), question = index + 2, "advanced");
            Ok(AdvanceOutcome::Moved(index + 1))
        } else {
            self.state = QuestionnaireState::Completed;
            tracing::debug!(instrument = %self.key(), "questionnaire completed");
            Ok(AdvanceOutcome::Completed(self.buffer.clone()))
        }
    }

    /// Go back one question; answers are kept. Returns the new index.
    ///
    /// # Errors
    /// - `NotInProgress`
    pub fn retreat(&mut self) -> Result<usize, ValidationError> {
        let index = self.current()?.saturating_sub(1);
        self.state = QuestionnaireState::InProgress(index);
        Ok(index)
    }

    /// Position and answered count
    #[must_use]
    pub fn progress(&self) -> Progress {
        let total = self.instrument.question_count();
        let index = match self.state {
            QuestionnaireState::NotStarted => 0,
            QuestionnaireState::InProgress(i) => i,
            QuestionnaireState::Completed => total,
        };
        Progress {
            index,
            answered: self.buffer.answered_count(),
            total,
        }
    }

    /// Question currently shown
    #[must_use]
    pub fn current_question(&self) -> Option<QuestionView> {
        let index = self.current().ok()?;
        let answer = match &self.buffer {
            AnswerSet::Linear(a) => CurrentAnswer::Option(a.get(index).copied().flatten()),
            AnswerSet::Ranked(r) => CurrentAnswer::Ranked(r.get(index).copied().unwrap_or_default()),
        };
        Some(QuestionView {
            number: index + 1,
            text: self.instrument.question(index)?,
            options: self.instrument.options_for(index)?,
            answer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidance_catalog::catalog;
    use pretty_assertions::assert_eq;

    fn started(key: InstrumentKey) -> Questionnaire {
        let mut q = Questionnaire::new(catalog::get(key));
        q.start();
        q
    }

    #[test]
    fn operations_need_a_started_questionnaire() {
        let mut q = Questionnaire::new(catalog::get(InstrumentKey::Goal));
        assert_eq!(q.select_option(0), Err(ValidationError::NotInProgress));
        assert_eq!(q.advance(), Err(ValidationError::NotInProgress));
        assert!(q.current_question().is_none());
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut q = started(InstrumentKey::Goal);
        assert_eq!(
            q.advance(),
            Err(ValidationError::Unanswered {
                instrument: InstrumentKey::Goal,
                question: 1
            })
        );
        assert_eq!(q.state(), QuestionnaireState::InProgress(0));
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut q = started(InstrumentKey::Riasec);
        let err = q.select_option(3).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OptionOutOfRange {
                question: 1,
                option: 3,
                available: 3
            }
        );
        assert!(!q.answers().is_answered(0));
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let mut q = started(InstrumentKey::Goal);
        assert!(matches!(
            q.select_rank(RankSlot::First, 0),
            Err(ValidationError::WrongKind { .. })
        ));
        let mut r = started(InstrumentKey::Readiness);
        assert!(matches!(r.select_option(0), Err(ValidationError::WrongKind { .. })));
    }

    #[test]
    fn walking_through_completes_once() {
        let mut q = started(InstrumentKey::Goal);
        for i in 0..10 {
            q.select_option(u8::try_from(i % 5).unwrap()).unwrap();
            let outcome = q.advance().unwrap();
            if i < 9 {
                assert_eq!(outcome, AdvanceOutcome::Moved(i + 1));
            } else {
                let AdvanceOutcome::Completed(answers) = outcome else {
                    panic!("expected completion");
                };
                assert_eq!(answers.answered_count(), 10);
            }
        }
        assert_eq!(q.state(), QuestionnaireState::Completed);
        assert_eq!(q.advance(), Err(ValidationError::NotInProgress));
    }

    #[test]
    fn retreat_keeps_answers() {
        let mut q = started(InstrumentKey::Goal);
        q.select_option(2).unwrap();
        q.advance().unwrap();
        assert_eq!(q.retreat(), Ok(0));
        assert_eq!(q.retreat(), Ok(0));
        let view = q.current_question().unwrap();
        assert_eq!(view.number, 1);
        assert_eq!(view.answer, CurrentAnswer::Option(Some(2)));
    }

    #[test]
    fn ranked_question_needs_three_slots() {
        let mut q = started(InstrumentKey::Readiness);
        q.select_rank(RankSlot::First, 0).unwrap();
        q.select_rank(RankSlot::Second, 1).unwrap();
        assert!(matches!(q.advance(), Err(ValidationError::IncompleteRanking { question: 1, .. })));
        q.select_rank(RankSlot::Third, 2).unwrap();
        assert_eq!(q.advance(), Ok(AdvanceOutcome::Moved(1)));
    }

    #[test]
    fn reassigning_an_option_vacates_its_slot() {
        let mut q = started(InstrumentKey::Readiness);
        q.select_rank(RankSlot::First, 1).unwrap();
        q.select_rank(RankSlot::Third, 1).unwrap();
        let Some(QuestionView {
            answer: CurrentAnswer::Ranked(choice),
            ..
        }) = q.current_question()
        else {
            panic!("expected ranked answer");
        };
        assert_eq!(choice.first, None);
        assert_eq!(choice.third, Some(1));
    }

    #[test]
    fn progress_counts_answers() {
        let mut q = started(InstrumentKey::Eq);
        q.select_option(1).unwrap();
        q.advance().unwrap();
        assert_eq!(
            q.progress(),
            Progress {
                index: 1,
                answered: 1,
                total: 52
            }
        );
    }
}
