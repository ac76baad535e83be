//! Lexical store adapter.
//!
//! The lexical store answers a single question: which lemmas share a synset
//! with a given word? Candidates come back ordered by lemma length (shortest
//! first), which is the order the candidate selector relies on.
//!
//! The source word itself is part of its own synsets, so it normally shows up
//! among its own candidates.

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod wordnet;

/// One word-sense pairing of the lexical database.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalEntry {
    /// Identifier of the word in the `word` relation
    pub word_id: i64,

    /// Dictionary form of the word
    pub lemma: String,

    /// Identifier of the synset this sense belongs to
    pub synset: String,
}

impl LexicalEntry {
    pub fn new<L, S>(word_id: i64, lemma: L, synset: S) -> Self
    where
        L: Into<String>,
        S: Into<String>,
    {
        LexicalEntry {
            word_id,
            lemma: lemma.into(),
            synset: synset.into(),
        }
    }

    /// Length of the lemma in characters.
    pub fn char_len(&self) -> usize {
        self.lemma.chars().count()
    }
}

/// Read-only source of synonym candidates.
pub trait LexicalStore {
    /// Find every entry sharing a synset with `lemma`, shortest lemma first.
    ///
    /// Entries on ties keep the store's row order. An unknown lemma yields an
    /// empty vector, not an error.
    fn find_similar(&self, lemma: &str) -> Result<Vec<LexicalEntry>>;

    /// Get the name of this store (for logging).
    fn name(&self) -> &'static str;
}
