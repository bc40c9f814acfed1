use super::interleave;
use crate::instrument::{Instrument, InstrumentKey, InstrumentKind, OptionSet};

const CATEGORIES: &[&str] = &["R", "I", "A", "S", "E", "C"];

const REALISTIC: &[&str] = &[
    "Repair a bicycle or motorbike",
    "Build furniture from wood",
    "Operate machines in a factory",
    "Grow vegetables on a farm",
    "Install electrical wiring",
    "Drive a truck or heavy vehicle",
    "Work on a construction site",
    "Fix household appliances",
    "Raise livestock",
];

const INVESTIGATIVE: &[&str] = &[
    "Do experiments in a laboratory",
    "Study how diseases spread",
    "Analyse data to find answers",
    "Read scientific articles",
    "Research the stars and planets",
    "Solve complex maths problems",
    "Study how the human body works",
    "Investigate the cause of a problem",
    "Develop a new medicine",
];

const ARTISTIC: &[&str] = &[
    "Draw or paint pictures",
    "Write stories or poems",
    "Act in a play",
    "Compose music",
    "Design clothes",
    "Take artistic photographs",
    "Decorate a room",
    "Dance in a performance",
    "Design posters or logos",
];

const SOCIAL: &[&str] = &[
    "Teach children",
    "Care for sick people",
    "Counsel friends with problems",
    "Volunteer in the community",
    "Help elderly people",
    "Lead a group activity",
    "Explain things to others",
    "Work as a nurse",
    "Organise a charity event",
];

const ENTERPRISING: &[&str] = &[
    "Run your own business",
    "Sell products to customers",
    "Persuade others to agree with you",
    "Manage a team",
    "Plan a marketing campaign",
    "Give a speech to a crowd",
    "Negotiate a deal",
    "Run for class president",
    "Invest money",
];

const CONVENTIONAL: &[&str] = &[
    "Keep financial records",
    "Type and file documents",
    "Check reports for errors",
    "Work with spreadsheets",
    "Organise a schedule",
    "Count stock in a warehouse",
    "Follow clear procedures",
    "Work in a bank",
    "Keep records in order",
];

const OPTIONS: &[&str] = &["Like", "Not sure", "Dislike"];

pub(crate) fn instrument() -> Instrument {
    Instrument {
        key: InstrumentKey::Riasec,
        title: "Career interest inventory (RIASEC)",
        kind: InstrumentKind::LinearScale,
        questions: interleave(&[
            REALISTIC,
            INVESTIGATIVE,
            ARTISTIC,
            SOCIAL,
            ENTERPRISING,
            CONVENTIONAL,
        ]),
        options: OptionSet::Shared(OPTIONS),
        categories: CATEGORIES,
        eq: None,
    }
}
