//! Candidate selection policy.

use crate::lexicon::LexicalEntry;

/// Picks the substitute for a segment from its synonym candidates.
pub trait CandidateSelector: Send + Sync {
    /// Select a candidate, or `None` when the segment should keep its text.
    ///
    /// `candidates` arrive in the order produced by the lexical store.
    fn select<'a>(&self, candidates: &'a [LexicalEntry]) -> Option<&'a LexicalEntry>;

    /// Get the name of this selector (for logging).
    fn name(&self) -> &'static str;
}

/// Selects the first candidate, i.e. the shortest lemma.
///
/// The store orders candidates by lemma length, so the first entry wins. The
/// source word is one of its own candidates: when nothing shorter exists the
/// segment is "replaced" by itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortestLemmaSelector;

impl ShortestLemmaSelector {
    pub fn new() -> Self {
        ShortestLemmaSelector
    }
}

impl CandidateSelector for ShortestLemmaSelector {
    fn select<'a>(&self, candidates: &'a [LexicalEntry]) -> Option<&'a LexicalEntry> {
        candidates.first()
    }

    fn name(&self) -> &'static str {
        "shortest_lemma"
    }
}
