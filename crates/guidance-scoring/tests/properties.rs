use guidance_catalog::{catalog, AnswerSet, InstrumentKey, RankedChoice, ReferenceRange};
use guidance_scoring::{
    score, score_eq, score_goal, score_intelligence, score_readiness, score_riasec, Band,
    Interpretation,
};
use proptest::prelude::*;

fn linear(len: usize, options: u8) -> impl Strategy<Value = Vec<Option<u8>>> {
    prop::collection::vec(prop::option::of(0..options), len)
}

fn permutation() -> impl Strategy<Value = RankedChoice> {
    prop_oneof![
        Just(RankedChoice::new(0, 1, 2)),
        Just(RankedChoice::new(0, 2, 1)),
        Just(RankedChoice::new(1, 0, 2)),
        Just(RankedChoice::new(1, 2, 0)),
        Just(RankedChoice::new(2, 0, 1)),
        Just(RankedChoice::new(2, 1, 0)),
    ]
}

#[test]
fn goal_example_all_best() {
    let goal = score_goal(&AnswerSet::Linear(vec![Some(0); 5])).unwrap();
    assert_eq!(goal.score, 5.00);
    assert_eq!(goal.label, Band::Highest);
}

#[test]
fn readiness_example_data_person_tool() {
    let scores = score_readiness(&AnswerSet::Ranked(vec![RankedChoice::new(0, 1, 2); 18])).unwrap();
    assert_eq!(scores.get("Data"), Some(10.00));
    assert_eq!(scores.get("Person"), Some(5.00));
    assert_eq!(scores.get("Tool"), Some(0.00));
}

proptest! {
    #[test]
    fn prop_goal_score_in_range_and_banded(answers in linear(10, 5)) {
        let goal = score_goal(&AnswerSet::Linear(answers)).unwrap();
        prop_assert!((0.0..=5.0).contains(&goal.score));
        prop_assert_eq!(goal.label, Band::of(goal.score));
    }

    #[test]
    fn prop_riasec_in_range(answers in linear(54, 3)) {
        let scores = score_riasec(&AnswerSet::Linear(answers)).unwrap();
        prop_assert_eq!(scores.len(), 6);
        for (_, v) in scores.iter() {
            prop_assert!((0.0..=10.0).contains(&v));
        }
    }

    #[test]
    fn prop_intelligence_in_range(answers in linear(80, 4)) {
        let scores = score_intelligence(&AnswerSet::Linear(answers)).unwrap();
        prop_assert_eq!(scores.len(), 8);
        for (_, v) in scores.iter() {
            prop_assert!((0.0..=10.0).contains(&v));
        }
    }

    #[test]
    fn prop_malformed_linear_input_stays_in_range(
        answers in prop::collection::vec(prop::option::of(any::<u8>()), 0..200)
    ) {
        let set = AnswerSet::Linear(answers);
        let goal = score_goal(&set).unwrap();
        prop_assert!(!goal.score.is_nan());
        prop_assert!((0.0..=5.0).contains(&goal.score));
        for (_, v) in score_riasec(&set).unwrap().iter() {
            prop_assert!((0.0..=10.0).contains(&v));
        }
        for (_, v) in score_intelligence(&set).unwrap().iter() {
            prop_assert!((0.0..=10.0).contains(&v));
        }
    }

    #[test]
    fn prop_round_robin_category(index in 0usize..54) {
        let riasec = catalog::get(InstrumentKey::Riasec);
        let names = ["R", "I", "A", "S", "E", "C"];
        prop_assert_eq!(riasec.category_of(index), Some(names[index % 6]));
    }

    #[test]
    fn prop_readiness_in_range(choices in prop::collection::vec(permutation(), 18)) {
        let scores = score_readiness(&AnswerSet::Ranked(choices)).unwrap();
        let total: f64 = scores.iter().map(|(_, v)| v).sum();
        for (_, v) in scores.iter() {
            prop_assert!((0.0..=10.0).contains(&v));
        }
        // 3 points per question, 54 in total, spread over 36-point scales.
        prop_assert!((total - 15.0).abs() < 0.02);
    }

    #[test]
    fn prop_classification_is_monotonic(low in 0u32..30, width in 0u32..20, a in 0u32..80, b in 0u32..80) {
        let range = ReferenceRange::new(low, low + width);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Interpretation::classify(lo, range) <= Interpretation::classify(hi, range));
    }

    #[test]
    fn prop_raising_one_item_never_lowers_eq(answers in linear(52, 4), question in 0usize..52) {
        let profile = catalog::get(InstrumentKey::Eq).eq.unwrap();
        let mut raised = answers.clone();
        // Move the answer one step towards a higher item score.
        let current = raised[question];
        raised[question] = match current {
            None => Some(if profile.is_reverse_scored(question + 1) { 3 } else { 0 }),
            Some(a) if profile.is_reverse_scored(question + 1) => Some(a.saturating_sub(1)),
            Some(a) => Some((a + 1).min(3)),
        };
        let before = score_eq(&AnswerSet::Linear(answers)).unwrap();
        let after = score_eq(&AnswerSet::Linear(raised)).unwrap();
        for (b, a) in before.dimensions().iter().zip(after.dimensions()) {
            prop_assert!(a.total >= b.total);
            prop_assert!(a.interpretation >= b.interpretation);
            for (bs, as_) in b.subdimensions.iter().zip(&a.subdimensions) {
                prop_assert!(as_.score >= bs.score);
                prop_assert!(as_.interpretation >= bs.interpretation);
            }
        }
    }

    #[test]
    fn prop_scoring_is_idempotent(answers in linear(54, 3)) {
        let set = AnswerSet::Linear(answers);
        for key in [InstrumentKey::Goal, InstrumentKey::Intelligence, InstrumentKey::Eq, InstrumentKey::Riasec] {
            prop_assert_eq!(score(key, &set).unwrap(), score(key, &set).unwrap());
        }
    }
}
