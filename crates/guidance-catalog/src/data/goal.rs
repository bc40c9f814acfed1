use crate::instrument::{Instrument, InstrumentKey, InstrumentKind, OptionSet};

const QUESTIONS: &[&str] = &[
    "I have a clear goal for what I want to study after lower secondary school.",
    "I know which upper secondary programme or vocational track suits me.",
    "I plan my study time and follow the plan.",
    "I can name the careers I am interested in and what they require.",
    "I keep trying when my school work gets difficult.",
    "I regularly review lessons without being told to.",
    "I have discussed my future plans with my family.",
    "I look for information about further education on my own.",
    "I know my academic strengths and weaknesses.",
    "I believe I can reach the goals I set for myself.",
];

const OPTIONS: &[&str] = &[
    "Strongly agree",
    "Agree",
    "Neutral",
    "Disagree",
    "Strongly disagree",
];

pub(crate) fn instrument() -> Instrument {
    Instrument {
        key: InstrumentKey::Goal,
        title: "Self-assessment: goals and study",
        kind: InstrumentKind::LinearScale,
        questions: QUESTIONS.to_vec(),
        options: OptionSet::Shared(OPTIONS),
        categories: &[],
        eq: None,
    }
}
