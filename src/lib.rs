//! # vocab_drill
//!
//! An offline vocabulary flashcard drill with a spaced-repetition-lite card
//! selector, for German (article drill) and Lithuanian word lists.
//!
//! ## How it works
//!
//! 1. Load one or more [`WordSet`]s from tab-separated files with
//!    [`load_word_set`], or build them in code.
//! 2. Create a [`DrillSession`] with a [`DrillConfig`] naming the sets to
//!    enable and, optionally, an RNG seed.
//! 3. Show [`DrillSession::current_item`], report the learner's answer with
//!    [`DrillSession::answer`] (or [`DrillSession::guess_gender`]), then call
//!    [`DrillSession::advance`] for the next card.
//!
//! Every deck item sits in one of three piles: remaining, wrong, or correct.
//! A missed card goes to the wrong pile, and each later draw has a 20%
//! chance of retrying a card from it. Correct answers retire cards for good.
//! Once the remaining pool is empty only wrong cards are drawn, so the
//! session ends with every card answered correctly.
//!
//! ## Quick start
//!
//! ```rust
//! use vocab_drill::{parse_tsv_str, DrillConfig, DrillSession, Variant, WordSet};
//!
//! let tsv = "english\tgerman\tplural\nTime\tDie Zeit\tDie Zeiten\nMan\tDer Mann\tDie Männer\n";
//! let report = parse_tsv_str(tsv, Variant::German).unwrap();
//! let set = WordSet::new("initial", Variant::German, report.items);
//!
//! let mut session = DrillSession::new(vec![set], DrillConfig::seeded(42)).unwrap();
//! while let Some(card) = session.current() {
//!     let item = session.current_item().unwrap();
//!     println!("{} ({})", item.front, card.id);
//!     // A learner who always knows the article.
//!     let guess = item.back.split(' ').next().unwrap().to_string();
//!     let outcome = session.guess_gender(&guess).unwrap();
//!     assert!(outcome.was_correct);
//!     session.advance();
//! }
//! assert_eq!(session.stats().correct, 2);
//! ```

pub mod drill_engine;

// Convenience re-exports so callers can use `vocab_drill::DrillSession`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    draw_next, load_word_set, parse_tsv, parse_tsv_str, record_answer, to_view_json,
    AnswerOutcome, CurrentCard, Deck, Draw, DrillConfig, DrillError, DrillSession, Gender,
    ItemId, LoadReport, PileStats, Piles, Variant, VocabItem, WordSet, WRONG_PILE_RATE,
};
