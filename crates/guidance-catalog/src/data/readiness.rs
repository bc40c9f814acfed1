use crate::instrument::{Instrument, InstrumentKey, InstrumentKind, OptionSet};

/// Accumulator names; option `i` of every question maps to `CATEGORIES[i]`.
const CATEGORIES: &[&str] = &["Data", "Person", "Tool"];

/// `(question, [data option, person option, tool option])`
const ITEMS: &[(&str, &[&str])] = &[
    (
        "At a school fair I would rather",
        &["Keep the sales accounts", "Welcome visitors", "Set up the booth"],
    ),
    (
        "In a group project I usually",
        &["Collect the information", "Coordinate the members", "Make the model"],
    ),
    (
        "On a free afternoon I prefer to",
        &["Read or research a topic", "Meet friends", "Fix or build something"],
    ),
    (
        "In a science lesson I enjoy",
        &["Recording the results", "Presenting to the class", "Handling the equipment"],
    ),
    (
        "If I worked in a hospital I would",
        &["Manage patient records", "Care for patients", "Operate medical devices"],
    ),
    (
        "During a school trip I would",
        &["Plan the budget", "Look after younger students", "Pack and carry the gear"],
    ),
    (
        "I am proudest when I",
        &["Find the right answer", "Help someone", "Finish something with my hands"],
    ),
    (
        "At a part-time job I would choose",
        &["Cashier", "Customer service", "Kitchen or workshop"],
    ),
    (
        "When learning something new I",
        &["Read the manual", "Ask someone to show me", "Try it out directly"],
    ),
    (
        "In a club I would like to be",
        &["Treasurer", "President", "Equipment officer"],
    ),
    (
        "For a class newsletter I would",
        &["Check facts and figures", "Interview people", "Print and bind copies"],
    ),
    (
        "In a sports event I would",
        &["Keep the scores", "Cheer and encourage the team", "Prepare the field"],
    ),
    (
        "My favourite tasks at home are",
        &["Planning expenses", "Looking after family members", "Repairing things"],
    ),
    (
        "In a computer class I enjoy",
        &["Working with spreadsheets", "Chatting and collaborating online", "Assembling hardware"],
    ),
    (
        "In a community project I would",
        &["Survey the needs", "Talk to residents", "Build the facilities"],
    ),
    (
        "In a restaurant I would like to",
        &["Manage the orders and stock", "Serve the customers", "Cook the food"],
    ),
    (
        "When a friend has a problem I",
        &["Look up information to help", "Listen and give advice", "Do something practical for them"],
    ),
    (
        "In the future I see myself",
        &["Analysing information", "Working with people", "Working with machines or tools"],
    ),
];

pub(crate) fn instrument() -> Instrument {
    Instrument {
        key: InstrumentKey::Readiness,
        title: "Career readiness: data, people or tools",
        kind: InstrumentKind::RankedChoice,
        questions: ITEMS.iter().map(|(q, _)| *q).collect(),
        options: OptionSet::PerQuestion(ITEMS.iter().map(|(_, o)| *o).collect()),
        categories: CATEGORIES,
        eq: None,
    }
}
