use super::interleave;
use crate::instrument::{Instrument, InstrumentKey, InstrumentKind, OptionSet};

const CATEGORIES: &[&str] = &[
    "Musical",
    "Bodily-kinesthetic",
    "Logical-mathematical",
    "Linguistic",
    "Visual-spatial",
    "Interpersonal",
    "Naturalist",
    "Intrapersonal",
];

const MUSICAL: &[&str] = &[
    "I can tell when a note is off-key.",
    "I often hum or tap a rhythm while I work.",
    "I remember melodies after hearing them once or twice.",
    "I enjoy playing a musical instrument or singing.",
    "Music strongly changes my mood.",
    "I notice background music in films and shops.",
    "I can keep time with a beat easily.",
    "I like making up tunes or rhymes.",
    "I learn better with music playing.",
    "I can recognise many songs from the first few notes.",
];

const BODILY: &[&str] = &[
    "I enjoy sports and physical activity.",
    "I learn best by doing things with my hands.",
    "I find it hard to sit still for a long time.",
    "I am good at crafts, building or repairing things.",
    "I use gestures a lot when I talk.",
    "I pick up new dance moves or sports skills quickly.",
    "I like touching objects to understand them.",
    "I have good balance and coordination.",
    "I prefer practical lessons to lectures.",
    "I enjoy acting or role play.",
];

const LOGICAL: &[&str] = &[
    "I enjoy solving maths problems.",
    "I like finding patterns and rules in things.",
    "I ask how and why things work.",
    "I enjoy puzzles, chess or strategy games.",
    "I like doing science experiments.",
    "I can do mental arithmetic quickly.",
    "I prefer things to be organised in steps.",
    "I like to test ideas before I believe them.",
    "I enjoy working with numbers and charts.",
    "I think problems through logically.",
];

const LINGUISTIC: &[&str] = &[
    "I enjoy reading books.",
    "I like writing stories, diaries or essays.",
    "I learn new words easily.",
    "I enjoy word games and crosswords.",
    "I can explain ideas clearly to others.",
    "I enjoy debates and discussions.",
    "I remember what I hear in lessons.",
    "I like learning foreign languages.",
    "I enjoy telling jokes or stories.",
    "I notice grammar and spelling mistakes.",
];

const SPATIAL: &[&str] = &[
    "I can picture things clearly in my mind.",
    "I enjoy drawing, painting or designing.",
    "I read maps and diagrams easily.",
    "I like jigsaw puzzles and mazes.",
    "I remember places by how they look.",
    "I notice colours and shapes around me.",
    "I like taking photos or making videos.",
    "I understand information better with pictures.",
    "I can imagine how an object looks from another side.",
    "I enjoy building models or arranging spaces.",
];

const INTERPERSONAL: &[&str] = &[
    "I make friends easily.",
    "Friends come to me for advice.",
    "I enjoy group work.",
    "I can tell how others feel.",
    "I like helping to solve conflicts between friends.",
    "I enjoy joining clubs and activities.",
    "I like teaching or explaining to others.",
    "I am comfortable talking to people I do not know.",
    "I enjoy leading a team.",
    "I prefer spending free time with others.",
];

const NATURALIST: &[&str] = &[
    "I enjoy being outdoors in nature.",
    "I like caring for plants or animals.",
    "I notice differences between kinds of plants or animals.",
    "I am interested in the environment and the weather.",
    "I like collecting natural things such as leaves or stones.",
    "I enjoy documentaries about nature.",
    "I can tell the seasons by changes around me.",
    "I care about recycling and saving energy.",
    "I enjoy gardening or farming.",
    "I like classifying things into groups.",
];

const INTRAPERSONAL: &[&str] = &[
    "I know my own strengths and weaknesses.",
    "I like spending time alone to think.",
    "I set goals for myself.",
    "I understand why I feel the way I do.",
    "I learn from my mistakes.",
    "I prefer working independently.",
    "I keep a diary or reflect on my day.",
    "I have my own opinions even when others disagree.",
    "I know what I want in life.",
    "I can motivate myself without others.",
];

const OPTIONS: &[&str] = &["Very true", "Mostly true", "Slightly true", "Not true"];

pub(crate) fn instrument() -> Instrument {
    Instrument {
        key: InstrumentKey::Intelligence,
        title: "Multiple intelligences survey",
        kind: InstrumentKind::LinearScale,
        questions: interleave(&[
            MUSICAL,
            BODILY,
            LOGICAL,
            LINGUISTIC,
            SPATIAL,
            INTERPERSONAL,
            NATURALIST,
            INTRAPERSONAL,
        ]),
        options: OptionSet::Shared(OPTIONS),
        categories: CATEGORIES,
        eq: None,
    }
}
