//! Guidance Scoring
//!
//! Pure scoring functions, one per instrument, plus a report assembler.
//! Scores are never stored: they are recomputed from raw answers whenever a
//! report is rendered.
//!
//! # Data coercion
//!
//! Stored answers may be incomplete or malformed. Such entries are never
//! propagated as errors or `NaN`:
//! - unanswered entries are left out of the goal average and add nothing to
//!   any other accumulator;
//! - option indices outside the question's option list are treated the same
//!   way and logged at `warn`.
//!
//! # Example
//!
//! ```rust
//! use guidance_catalog::AnswerSet;
//! use guidance_scoring::{score_goal, Band};
//!
//! let answers = AnswerSet::Linear(vec![Some(0); 5]);
//! let goal = score_goal(&answers).unwrap();
//! assert_eq!(goal.score, 5.0);
//! assert_eq!(goal.label, Band::Highest);
//! ```

#![warn(missing_docs)]

mod coerce;
pub mod cycle;
pub mod eq;
pub mod error;
pub mod goal;
pub mod readiness;
pub mod report;

// Re-exports
pub use cycle::{score_intelligence, score_riasec, CategoryScores};
pub use eq::{score_eq, DimensionScore, EqScore, Interpretation, SubDimensionScore};
pub use error::ScoringError;
pub use goal::{score_goal, Band, GoalScore};
pub use readiness::score_readiness;
pub use report::{score, InstrumentScore, Report, ReportEntry};

/// Round half away from zero to two decimals
#[inline]
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scale `raw / max` onto 0–10, rounded to two decimals
#[inline]
#[must_use]
pub fn normalize(raw: f64, max: f64) -> f64 {
    round2(raw / max * 10.0)
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
