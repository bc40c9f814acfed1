use crate::instrument::{
    Dimension, EqProfile, Instrument, InstrumentKey, InstrumentKind, OptionSet, ReferenceRange,
    SubDimension,
};

const QUESTIONS: &[&str] = &[
    // Emotional control (1-6)
    "When I am upset I can calm myself down quickly.",
    "I get angry easily over small things.",
    "I can wait patiently for things I want.",
    "When I am stressed I take it out on other people.",
    "I think before I act when I am angry.",
    "I find it hard to control myself when I am criticised.",
    // Empathy (7-12)
    "I notice when a friend is sad.",
    "Other people's problems do not interest me.",
    "I try to understand why others act as they do.",
    "I am willing to help others when they are in trouble.",
    "I find it hard to put myself in other people's shoes.",
    "I accept that others can think differently from me.",
    // Responsibility (13-18)
    "I admit my mistakes.",
    "I often blame others when things go wrong.",
    "I finish the tasks I am given.",
    "I keep my promises.",
    "I avoid my duties when nobody is watching.",
    "I consider how my actions affect others.",
    // Motivation (19-24)
    "I keep trying even when a task is hard.",
    "I give up easily when I fail.",
    "I set goals and work towards them.",
    "I look for new challenges.",
    "I need others to push me before I start working.",
    "I believe effort leads to success.",
    // Decision making and problem solving (25-30)
    "I can find several ways to solve a problem.",
    "I panic when I face a problem.",
    "I think about the consequences before deciding.",
    "I can make decisions when I need to.",
    "I let others decide for me.",
    "I learn from how I solved problems in the past.",
    // Relationships (31-36)
    "I find it hard to start a conversation with others.",
    "I get along well with most people.",
    "I can say no politely.",
    "I often argue with people around me.",
    "I can work with people I do not like.",
    "I express my opinions without hurting others.",
    // Self-esteem (37-40)
    "I often feel I am worse than others.",
    "I am proud of who I am.",
    "I feel I am not good at anything.",
    "I believe I have value.",
    // Life satisfaction (41-46)
    "I am happy with my life.",
    "I feel my life is boring.",
    "I can find fun in simple things.",
    "I am satisfied with what I have.",
    "I often feel life is unfair to me.",
    "I have things I look forward to.",
    // Peace of mind (47-52)
    "I often feel anxious for no reason.",
    "I can relax when I need to.",
    "I sleep well.",
    "I worry about things that may never happen.",
    "I have ways to reduce my stress.",
    "I often feel restless and tense.",
];

const OPTIONS: &[&str] = &["Not true", "Sometimes true", "Fairly true", "Very true"];

const REVERSE_SCORED: &[usize] = &[
    2, 4, 6, 8, 11, 14, 17, 20, 23, 26, 29, 31, 34, 37, 39, 42, 45, 47, 50, 52,
];

const GOOD: &[SubDimension] = &[
    SubDimension {
        key: "emotional_control",
        name: "Emotional control",
        questions: &[1, 2, 3, 4, 5, 6],
        range: ReferenceRange::new(13, 17),
    },
    SubDimension {
        key: "empathy",
        name: "Empathy",
        questions: &[7, 8, 9, 10, 11, 12],
        range: ReferenceRange::new(16, 20),
    },
    SubDimension {
        key: "responsibility",
        name: "Responsibility",
        questions: &[13, 14, 15, 16, 17, 18],
        range: ReferenceRange::new(16, 22),
    },
];

const COMPETENT: &[SubDimension] = &[
    SubDimension {
        key: "motivation",
        name: "Self-motivation",
        questions: &[19, 20, 21, 22, 23, 24],
        range: ReferenceRange::new(14, 20),
    },
    SubDimension {
        key: "problem_solving",
        name: "Decision making and problem solving",
        questions: &[25, 26, 27, 28, 29, 30],
        range: ReferenceRange::new(13, 19),
    },
    SubDimension {
        key: "relationships",
        name: "Relationships",
        questions: &[31, 32, 33, 34, 35, 36],
        range: ReferenceRange::new(14, 20),
    },
];

const HAPPY: &[SubDimension] = &[
    SubDimension {
        key: "self_esteem",
        name: "Self-esteem",
        questions: &[37, 38, 39, 40],
        range: ReferenceRange::new(9, 13),
    },
    SubDimension {
        key: "life_satisfaction",
        name: "Life satisfaction",
        questions: &[41, 42, 43, 44, 45, 46],
        range: ReferenceRange::new(16, 22),
    },
    SubDimension {
        key: "peace_of_mind",
        name: "Peace of mind",
        questions: &[47, 48, 49, 50, 51, 52],
        range: ReferenceRange::new(15, 21),
    },
];

const DIMENSIONS: &[Dimension] = &[
    Dimension {
        key: "good",
        name: "Good (moral)",
        range: ReferenceRange::new(48, 58),
        subdimensions: GOOD,
    },
    Dimension {
        key: "competent",
        name: "Competent",
        range: ReferenceRange::new(45, 57),
        subdimensions: COMPETENT,
    },
    Dimension {
        key: "happy",
        name: "Happy",
        range: ReferenceRange::new(40, 55),
        subdimensions: HAPPY,
    },
];

static PROFILE: EqProfile = EqProfile {
    dimensions: DIMENSIONS,
    reverse_scored: REVERSE_SCORED,
};

pub(crate) fn instrument() -> Instrument {
    Instrument {
        key: InstrumentKey::Eq,
        title: "Emotional quotient (EQ) assessment",
        kind: InstrumentKind::LinearScale,
        questions: QUESTIONS.to_vec(),
        options: OptionSet::Shared(OPTIONS),
        categories: &[],
        eq: Some(&PROFILE),
    }
}
