//! Error types for loading vocabulary and driving a drill session.
//!
//! The card selector itself never fails (an empty deck simply yields no
//! card); everything that can go wrong lives in the layers around it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrillError {
    /// A vocabulary file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The TSV reader failed before any row could be deserialized.
    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The TOML configuration did not parse.
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unknown word set: {0}")]
    UnknownWordSet(String),

    #[error("no card is being shown")]
    NoCurrentCard,

    #[error("answer for {0} is already revealed")]
    AlreadyRevealed(crate::drill_engine::models::ItemId),

    #[error("wrong-pile rate must be within [0, 1], got {0}")]
    InvalidRate(f64),
}

pub type Result<T> = std::result::Result<T, DrillError>;
