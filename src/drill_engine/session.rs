use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use crate::drill_engine::{
    config::DrillConfig,
    deck::Deck,
    error::{DrillError, Result},
    grading::{check_gender, revealed_answer},
    models::{AnswerOutcome, CurrentCard, PileStats, Variant, VocabItem, WordSet},
    selector::Piles,
};

/// One learner working through a deck.
///
/// Every method is a single state transition: a button press or a set
/// toggle. The session never blocks; the reveal delay is advisory and it is
/// up to the caller to call [`advance`](Self::advance) once it has elapsed.
#[derive(Debug)]
pub struct DrillSession {
    deck: Deck,
    piles: Piles,
    current: Option<CurrentCard>,
    config: DrillConfig,
    rng: StdRng,
}

impl DrillSession {
    /// Build the deck, shuffle it and draw the first card.
    pub fn new(sets: Vec<WordSet>, config: DrillConfig) -> Result<Self> {
        config.validate()?;

        let mut rng: StdRng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };

        let enabled: Vec<String> = if config.enabled_sets.is_empty() {
            sets.first().map(|s| vec![s.name.clone()]).unwrap_or_default()
        } else {
            config.enabled_sets.clone()
        };
        let deck = Deck::build(sets, enabled.as_slice())?;
        let piles = Piles::new_shuffled(&deck, &mut rng);
        info!(items = deck.len(), seed = ?config.rng_seed, "drill session started");

        let mut session = DrillSession { deck, piles, current: None, config, rng };
        session.draw();
        Ok(session)
    }

    fn draw(&mut self) {
        self.current = self
            .piles
            .draw_next(self.config.wrong_pile_rate, &mut self.rng)
            .map(|d| CurrentCard { id: d.id, from_wrong_pile: d.from_wrong_pile, revealed: false });
    }

    pub fn current(&self) -> Option<CurrentCard> {
        self.current
    }

    pub fn current_item(&self) -> Option<&VocabItem> {
        self.current.and_then(|c| self.deck.get(c.id))
    }

    /// Record the learner's verdict on the shown card and reveal the answer.
    pub fn answer(&mut self, was_correct: bool) -> Result<AnswerOutcome> {
        let card = self.current.as_mut().ok_or(DrillError::NoCurrentCard)?;
        if card.revealed {
            return Err(DrillError::AlreadyRevealed(card.id));
        }
        card.revealed = true;
        let card = *card;

        self.piles.record_answer(card.id, was_correct, card.from_wrong_pile);

        let answer = match (self.deck.get(card.id), self.deck.variant_of(card.id)) {
            (Some(item), Some(Variant::German)) => revealed_answer(&item.back),
            (Some(item), _) => item.back.clone(),
            (None, _) => String::new(),
        };
        debug!(id = %card.id, was_correct, stats = %self.piles.stats(), "answer revealed");

        Ok(AnswerOutcome {
            id: card.id,
            was_correct,
            from_wrong_pile: card.from_wrong_pile,
            answer,
        })
    }

    /// Grade a der/die/das guess against the shown card, then record it.
    pub fn guess_gender(&mut self, guess: &str) -> Result<AnswerOutcome> {
        let item = self.current_item().ok_or(DrillError::NoCurrentCard)?;
        let was_correct = check_gender(item, guess);
        self.answer(was_correct)
    }

    /// Hide the revealed answer and draw the next card.
    ///
    /// A card still waiting for an answer is left in place.
    pub fn advance(&mut self) -> Option<CurrentCard> {
        match self.current {
            Some(card) if !card.revealed => {}
            _ => self.draw(),
        }
        self.current
    }

    /// Switch a word set on or off and re-partition the piles.
    ///
    /// The shown card is replaced by the head of the reshuffled pool.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<()> {
        self.deck.set_enabled(name, enabled)?;
        self.piles.reconfigure(&self.deck, &mut self.rng);
        self.current = self
            .piles
            .remaining
            .first()
            .map(|&id| CurrentCard { id, from_wrong_pile: false, revealed: false });
        info!(set = name, enabled, stats = %self.piles.stats(), "deck reconfigured");
        Ok(())
    }

    pub fn stats(&self) -> PileStats {
        self.piles.stats()
    }

    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn config(&self) -> &DrillConfig {
        &self.config
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.config.reveal_delay_ms)
    }
}
