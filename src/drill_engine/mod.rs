//! Core drill engine: deck assembly, card selection and session state.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: item ids, vocabulary entries, word sets, draws |
//! | `selector` | Remaining / wrong / correct piles, `draw_next` and `record_answer` |
//! | `deck`     | Enabled word sets, stable item ids, Fisher-Yates shuffle |
//! | `loader`   | Tab-separated vocabulary files for the German and Lithuanian variants |
//! | `grading`  | der/die/das extraction and checking |
//! | `session`  | `DrillSession`, one learner, one event at a time |
//! | `config`   | `DrillConfig` with TOML loading |
//! | `view`     | JSON snapshot of a session for front ends |
//! | `error`    | `DrillError` |

pub mod config;
pub mod deck;
pub mod error;
pub mod grading;
pub mod loader;
pub mod models;
pub mod selector;
pub mod session;
pub mod view;

pub use config::DrillConfig;
pub use deck::Deck;
pub use error::{DrillError, Result};
pub use grading::Gender;
pub use loader::{load_word_set, parse_tsv, parse_tsv_str, LoadReport};
pub use models::{
    AnswerOutcome, CurrentCard, Draw, ItemId, PileStats, Variant, VocabItem, WordSet,
};
pub use selector::{draw_next, draw_next_with_rate, record_answer, Piles, WRONG_PILE_RATE};
pub use session::DrillSession;
pub use view::to_view_json;
