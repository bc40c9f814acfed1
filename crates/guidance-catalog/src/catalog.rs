//! The fixed instrument catalog

use crate::data;
use crate::instrument::{Instrument, InstrumentKey};
use once_cell::sync::Lazy;

static CATALOG: Lazy<Vec<Instrument>> = Lazy::new(|| {
    vec![
        data::goal::instrument(),
        data::intelligence::instrument(),
        data::eq::instrument(),
        data::riasec::instrument(),
        data::readiness::instrument(),
    ]
});

/// Instrument definition for `key`
#[must_use]
pub fn get(key: InstrumentKey) -> &'static Instrument {
    // Order of CATALOG matches InstrumentKey::ALL.
    let index = InstrumentKey::ALL
        .iter()
        .position(|k| *k == key)
        .unwrap_or_default();
    &CATALOG[index]
}

/// All instruments in catalog order
pub fn all() -> impl Iterator<Item = &'static Instrument> {
    CATALOG.iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::InstrumentKind;

    #[test]
    fn catalog_order_matches_keys() {
        let keys: Vec<_> = all().map(|i| i.key).collect();
        assert_eq!(keys, InstrumentKey::ALL.to_vec());
        for key in InstrumentKey::ALL {
            assert_eq!(get(key).key, key);
        }
    }

    #[test]
    fn instrument_sizes_are_fixed() {
        assert_eq!(get(InstrumentKey::Goal).question_count(), 10);
        assert_eq!(get(InstrumentKey::Intelligence).question_count(), 80);
        assert_eq!(get(InstrumentKey::Eq).question_count(), 52);
        assert_eq!(get(InstrumentKey::Riasec).question_count(), 54);
        assert_eq!(get(InstrumentKey::Readiness).question_count(), 18);
    }

    #[test]
    fn option_counts_match_scoring_scales() {
        assert_eq!(get(InstrumentKey::Goal).option_count(0), 5);
        assert_eq!(get(InstrumentKey::Intelligence).option_count(0), 4);
        assert_eq!(get(InstrumentKey::Eq).option_count(51), 4);
        assert_eq!(get(InstrumentKey::Riasec).option_count(53), 3);
        let readiness = get(InstrumentKey::Readiness);
        assert_eq!(readiness.kind, InstrumentKind::RankedChoice);
        for i in 0..readiness.question_count() {
            assert_eq!(readiness.option_count(i), 3, "question {i}");
        }
        assert_eq!(readiness.option_count(18), 0);
    }

    #[test]
    fn round_robin_categories() {
        let mi = get(InstrumentKey::Intelligence);
        assert_eq!(mi.categories.len(), 8);
        assert_eq!(mi.category_of(0), mi.category_of(8));
        let riasec = get(InstrumentKey::Riasec);
        assert_eq!(riasec.category_of(0), Some("R"));
        assert_eq!(riasec.category_of(5), Some("C"));
        assert_eq!(riasec.category_of(6), Some("R"));
    }

    #[test]
    fn eq_dimensions_cover_every_question_once() {
        let eq = get(InstrumentKey::Eq);
        let profile = eq.eq.expect("eq profile");
        let mut seen: Vec<usize> = profile
            .dimensions
            .iter()
            .flat_map(|d| d.subdimensions.iter())
            .flat_map(|s| s.questions.iter().copied())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=eq.question_count()).collect::<Vec<_>>());
        assert!(profile
            .reverse_scored
            .iter()
            .all(|n| (1..=eq.question_count()).contains(n)));
        assert!(get(InstrumentKey::Goal).eq.is_none());
    }
}
