use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Item identity
// ---------------------------------------------------------------------------

/// Identity of one deck entry: the word set it came from plus its row.
///
/// Two entries with identical text in different sets get different ids, so
/// pile membership never depends on comparing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId {
    pub set: usize,
    pub row: usize,
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.set, self.row)
    }
}

// ---------------------------------------------------------------------------
// Vocabulary entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    German,
    Lithuanian,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::German     => write!(f, "German"),
            Variant::Lithuanian => write!(f, "Lithuanian"),
        }
    }
}

/// One vocabulary entry as loaded from a data file. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabItem {
    /// Shown while the answer is hidden.
    pub front: String,
    /// Shown once the answer is revealed.
    pub back: String,
    /// English gloss, when the back side is not already English.
    pub gloss: Option<String>,
    /// Plural form or example sentence.
    pub example: Option<String>,
    /// Word class column of the Lithuanian files ("noun", "verb", ...).
    pub kind: Option<String>,
    /// Numeric key for audio lookup.
    pub audio_id: Option<u32>,
}

impl VocabItem {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        VocabItem {
            front: front.into(),
            back: back.into(),
            gloss: None,
            example: None,
            kind: None,
            audio_id: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_gloss(mut self, gloss: impl Into<String>) -> Self {
        self.gloss = Some(gloss.into());
        self
    }
}

/// A named subset of the vocabulary that can be switched on or off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSet {
    pub name: String,
    pub variant: Variant,
    pub items: Vec<VocabItem>,
}

impl WordSet {
    pub fn new(name: impl Into<String>, variant: Variant, items: Vec<VocabItem>) -> Self {
        WordSet { name: name.into(), variant, items }
    }
}

// ---------------------------------------------------------------------------
// Draw / answer types
// ---------------------------------------------------------------------------

/// Result of one selector draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub id: ItemId,
    pub from_wrong_pile: bool,
}

/// The card currently shown to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentCard {
    pub id: ItemId,
    pub from_wrong_pile: bool,
    pub revealed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub id: ItemId,
    pub was_correct: bool,
    pub from_wrong_pile: bool,
    /// The full answer text to reveal.
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PileStats {
    pub remaining: usize,
    pub wrong: usize,
    pub correct: usize,
    pub exhausted: bool,
}

impl fmt::Display for PileStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "remaining {}, wrong {}, correct {}",
            self.remaining, self.wrong, self.correct
        )
    }
}
