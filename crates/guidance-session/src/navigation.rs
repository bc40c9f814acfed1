//! View state machine

use crate::error::NavigationError;
use serde::Serialize;
use std::fmt;

/// Screen of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Welcome and consent
    Home,
    /// Pick an existing name from a class roster
    Identify,
    /// Register a new name
    CustomIdentify,
    /// Instrument list with completion badges
    Select,
    /// Answering one instrument
    Answer,
    /// Scores
    Report,
}

impl View {
    /// Every view
    pub const ALL: [View; 6] = [
        View::Home,
        View::Identify,
        View::CustomIdentify,
        View::Select,
        View::Answer,
        View::Report,
    ];
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Home => "home",
            Self::Identify => "identify",
            Self::CustomIdentify => "custom-identify",
            Self::Select => "select",
            Self::Answer => "answer",
            Self::Report => "report",
        };
        f.write_str(s)
    }
}

/// Validates a view transition.
///
/// # Errors
/// - `NavigationError::IllegalTransition` outside the view table
pub fn validate_transition(from: View, to: View) -> Result<(), NavigationError> {
    if allowed(from, to) {
        Ok(())
    } else {
        Err(NavigationError::IllegalTransition { from, to })
    }
}

/// Views reachable from `from`. Every view can return home (logout).
///
/// `Answer` only leaves for `Select` (abandon) or `Home`; reaching the report
/// from a questionnaire happens through completion alone.
#[must_use]
pub fn allowed_transitions(from: View) -> Vec<View> {
    use View::{Answer, CustomIdentify, Home, Identify, Report, Select};
    match from {
        Home => vec![Identify, Home],
        Identify => vec![Select, CustomIdentify, Home],
        CustomIdentify => vec![Select, Home],
        Select => vec![Answer, Report, Identify, Home],
        Answer => vec![Select, Home],
        Report => vec![Select, Home],
    }
}

fn allowed(from: View, to: View) -> bool {
    allowed_transitions(from).into_iter().any(|v| v == to)
}
