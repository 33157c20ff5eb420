use rand::Rng;
use tracing::info;

use crate::drill_engine::{
    error::{DrillError, Result},
    models::{ItemId, Variant, VocabItem, WordSet},
};

/// Every known word set plus which of them are switched on.
///
/// The deck is the concatenation of the enabled sets in declaration order.
/// Ids are derived from (set index, row), so an item keeps its id no matter
/// which other sets are toggled.
#[derive(Debug, Clone)]
pub struct Deck {
    sets: Vec<WordSet>,
    enabled: Vec<bool>,
}

impl Deck {
    /// Build a deck with exactly the sets named in `enabled` switched on.
    pub fn build<S: AsRef<str>>(sets: Vec<WordSet>, enabled: &[S]) -> Result<Self> {
        let mut deck = Deck { enabled: vec![false; sets.len()], sets };
        for name in enabled {
            deck.set_enabled(name.as_ref(), true)?;
        }
        info!(sets = deck.sets.len(), items = deck.len(), "deck built");
        Ok(deck)
    }

    /// Switch one set on or off. Returns whether the flag actually changed.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<bool> {
        let idx = self
            .sets
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| DrillError::UnknownWordSet(name.to_string()))?;
        let changed = self.enabled[idx] != enabled;
        self.enabled[idx] = enabled;
        Ok(changed)
    }

    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.sets
            .iter()
            .position(|s| s.name == name)
            .map(|idx| self.enabled[idx])
    }

    /// `(name, enabled)` for every known set, in declaration order.
    pub fn set_flags(&self) -> impl Iterator<Item = (&str, bool)> {
        self.sets.iter().zip(&self.enabled).map(|(s, e)| (s.name.as_str(), *e))
    }

    /// Ids of every item in the enabled sets, in deck order.
    pub fn ids(&self) -> Vec<ItemId> {
        self.sets
            .iter()
            .enumerate()
            .filter(|(set, _)| self.enabled[*set])
            .flat_map(|(set, ws)| (0..ws.items.len()).map(move |row| ItemId { set, row }))
            .collect()
    }

    /// Whether `id` belongs to an enabled set.
    pub fn contains(&self, id: ItemId) -> bool {
        self.enabled.get(id.set).copied().unwrap_or(false)
            && id.row < self.sets[id.set].items.len()
    }

    /// Look up an item by id, enabled or not.
    pub fn get(&self, id: ItemId) -> Option<&VocabItem> {
        self.sets.get(id.set).and_then(|s| s.items.get(id.row))
    }

    pub fn variant_of(&self, id: ItemId) -> Option<Variant> {
        self.sets.get(id.set).map(|s| s.variant)
    }

    /// Number of items in the enabled sets.
    pub fn len(&self) -> usize {
        self.sets
            .iter()
            .zip(&self.enabled)
            .filter(|(_, e)| **e)
            .map(|(s, _)| s.items.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sets() -> Vec<WordSet> {
        let same = VocabItem::new("Zeit", "Die Zeit");
        vec![
            WordSet::new("initial", Variant::German, vec![same.clone(), VocabItem::new("Mann", "Der Mann")]),
            WordSet::new("set1", Variant::German, vec![same]),
            WordSet::new("set2", Variant::German, vec![VocabItem::new("Tag", "Der Tag")]),
        ]
    }

    #[test]
    fn only_enabled_sets_contribute() {
        let deck = Deck::build(sets(), &["initial", "set2"]).unwrap();
        assert_eq!(deck.len(), 3);
        assert_eq!(
            deck.ids(),
            vec![
                ItemId { set: 0, row: 0 },
                ItemId { set: 0, row: 1 },
                ItemId { set: 2, row: 0 },
            ]
        );
        assert!(!deck.contains(ItemId { set: 1, row: 0 }));
    }

    #[test]
    fn identical_text_in_two_sets_gets_two_ids() {
        let deck = Deck::build(sets(), &["initial", "set1"]).unwrap();
        let a = ItemId { set: 0, row: 0 };
        let b = ItemId { set: 1, row: 0 };
        assert_eq!(deck.get(a), deck.get(b));
        assert_ne!(a, b);
        assert!(deck.contains(a) && deck.contains(b));
    }

    #[test]
    fn unknown_set_is_rejected() {
        let err = Deck::build(sets(), &["nope"]).unwrap_err();
        assert!(matches!(err, DrillError::UnknownWordSet(name) if name == "nope"));
    }

    #[test]
    fn toggling_reports_change() {
        let mut deck = Deck::build(sets(), &["initial"]).unwrap();
        assert!(deck.set_enabled("set2", true).unwrap());
        assert!(!deck.set_enabled("set2", true).unwrap());
        assert_eq!(deck.is_enabled("set2"), Some(true));
        assert_eq!(deck.is_enabled("missing"), None);
    }

    #[test]
    fn empty_deck_when_nothing_enabled() {
        let no_sets: [&str; 0] = [];
        let deck = Deck::build(sets(), &no_sets).unwrap();
        assert!(deck.is_empty());
        assert!(deck.ids().is_empty());
    }

    #[test]
    fn shuffle_is_a_permutation_and_deterministic() {
        let make = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut v: Vec<u32> = (0..30).collect();
            shuffle(&mut v, &mut rng);
            v
        };
        let a = make(99);
        assert_eq!(a, make(99));
        assert_ne!(a, make(100));
        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..30).collect::<Vec<_>>());
    }
}
