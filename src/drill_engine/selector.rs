//! Card selection over the remaining / wrong / correct piles.
//!
//! Missed cards are not queued for a fixed retry slot. Instead, whenever both
//! the remaining pool and the wrong pile hold cards, each draw has a fixed
//! chance ([`WRONG_PILE_RATE`]) of coming from the wrong pile. Once the pool
//! runs dry the wrong pile is drawn from exclusively, so a drill only ends
//! when every card has been answered correctly.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::drill_engine::{
    deck::{shuffle, Deck},
    models::{Draw, ItemId, PileStats},
};

/// Chance that a draw is taken from the wrong pile while the pool still has cards.
pub const WRONG_PILE_RATE: f64 = 0.2;

/// The three piles every deck item is partitioned into.
///
/// Each id of the configured deck lives in exactly one pile. The card being
/// shown stays in the pile it was drawn from until it is answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    pub remaining: Vec<ItemId>,
    pub wrong: Vec<ItemId>,
    pub correct: Vec<ItemId>,
}

impl Piles {
    /// Fresh piles for `deck`: everything remaining, in shuffled order.
    pub fn new_shuffled<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Self {
        let mut remaining = deck.ids();
        shuffle(&mut remaining, rng);
        Piles { remaining, wrong: Vec::new(), correct: Vec::new() }
    }

    /// Re-partition after the set of enabled word sets changed.
    ///
    /// Wrong and correct keep only ids still in the new deck; the remaining
    /// pool becomes every other deck id, reshuffled.
    pub fn reconfigure<R: Rng + ?Sized>(&mut self, deck: &Deck, rng: &mut R) {
        self.correct.retain(|id| deck.contains(*id));
        self.wrong.retain(|id| deck.contains(*id));

        let mut remaining: Vec<ItemId> = deck
            .ids()
            .into_iter()
            .filter(|id| !self.correct.contains(id) && !self.wrong.contains(id))
            .collect();
        shuffle(&mut remaining, rng);
        self.remaining = remaining;
    }

    pub fn stats(&self) -> PileStats {
        PileStats {
            remaining: self.remaining.len(),
            wrong: self.wrong.len(),
            correct: self.correct.len(),
            exhausted: self.remaining.is_empty() && self.wrong.is_empty(),
        }
    }

    pub fn draw_next<R: Rng + ?Sized>(&self, rate: f64, rng: &mut R) -> Option<Draw> {
        draw_next_with_rate(&self.remaining, &self.wrong, rate, rng)
    }

    pub fn record_answer(&mut self, id: ItemId, was_correct: bool, from_wrong_pile: bool) {
        record_answer(id, was_correct, from_wrong_pile, self);
    }
}

/// Choose the next card using the default [`WRONG_PILE_RATE`].
pub fn draw_next<R: Rng + ?Sized>(
    remaining: &[ItemId],
    wrong: &[ItemId],
    rng: &mut R,
) -> Option<Draw> {
    draw_next_with_rate(remaining, wrong, WRONG_PILE_RATE, rng)
}

/// Choose the next card.
///
/// The roll against `rate` is only made when the wrong pile is non-empty, so
/// a deck with no misses consumes exactly one random index per draw.
pub fn draw_next_with_rate<R: Rng + ?Sized>(
    remaining: &[ItemId],
    wrong: &[ItemId],
    rate: f64,
    rng: &mut R,
) -> Option<Draw> {
    let retry_wrong = !wrong.is_empty() && rng.gen::<f64>() < rate;

    let draw = if retry_wrong {
        pick(wrong, rng).map(|id| Draw { id, from_wrong_pile: true })
    } else if !remaining.is_empty() {
        pick(remaining, rng).map(|id| Draw { id, from_wrong_pile: false })
    } else {
        // Pool exhausted: keep cycling the wrong pile.
        pick(wrong, rng).map(|id| Draw { id, from_wrong_pile: true })
    };

    match &draw {
        Some(d) => debug!(id = %d.id, from_wrong_pile = d.from_wrong_pile, "drew card"),
        None => debug!("deck exhausted"),
    }
    draw
}

/// Move `id` between piles according to the answer.
///
/// A miss on a card from the pool moves it to the wrong pile once; a miss on
/// a card already drawn from the wrong pile leaves every pile untouched.
pub fn record_answer(id: ItemId, was_correct: bool, from_wrong_pile: bool, piles: &mut Piles) {
    if was_correct {
        piles.correct.push(id);
        if from_wrong_pile {
            remove_one(&mut piles.wrong, id);
        } else {
            remove_one(&mut piles.remaining, id);
        }
    } else if !from_wrong_pile {
        if !piles.wrong.contains(&id) {
            piles.wrong.push(id);
        }
        remove_one(&mut piles.remaining, id);
    }
    debug!(%id, was_correct, from_wrong_pile, "recorded answer");
}

fn pick<R: Rng + ?Sized>(pile: &[ItemId], rng: &mut R) -> Option<ItemId> {
    if pile.is_empty() {
        return None;
    }
    Some(pile[rng.gen_range(0..pile.len())])
}

/// Remove the first occurrence of `id`, keeping the order of the rest.
fn remove_one(pile: &mut Vec<ItemId>, id: ItemId) {
    if let Some(pos) = pile.iter().position(|x| *x == id) {
        pile.remove(pos);
    }
}
