//! The compression pipeline.
//!
//! For each sentence the pipeline tokenizes the text, then walks the segments
//! in order:
//!
//! ```text
//! segment ──ineligible──────────────────────────────▶ surface text
//!    │
//!    └─eligible─▶ find_similar ─▶ select ─┬─ Some ──▶ candidate lemma
//!                                         └─ None ──▶ surface text
//! ```
//!
//! Every segment contributes exactly one substring to the output, in input
//! order. Collaborator errors abort the sentence; nothing is retried.

use std::time::{Duration, Instant};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::segment::Segment;
use crate::analysis::tokenizer::Tokenizer;
use crate::compress::selector::{CandidateSelector, ShortestLemmaSelector};
use crate::error::{Result, RuigoError};
use crate::lexicon::LexicalStore;

/// What the pipeline did with one segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentOutcome {
    /// The segment's part of speech is not eligible for substitution.
    PassThrough { surface: String },

    /// The segment was eligible but the store had no candidates.
    NoCandidate { surface: String },

    /// The segment was replaced by a candidate lemma (possibly itself).
    Substituted {
        surface: String,
        lemma: String,
        synset: String,
    },
}

impl SegmentOutcome {
    /// The substring this segment contributes to the compressed text.
    pub fn output(&self) -> &str {
        match self {
            SegmentOutcome::PassThrough { surface } => surface,
            SegmentOutcome::NoCandidate { surface } => surface,
            SegmentOutcome::Substituted { lemma, .. } => lemma,
        }
    }

    /// The original surface text of the segment.
    pub fn surface(&self) -> &str {
        match self {
            SegmentOutcome::PassThrough { surface }
            | SegmentOutcome::NoCandidate { surface }
            | SegmentOutcome::Substituted { surface, .. } => surface,
        }
    }

    /// Whether the output differs from the original text.
    pub fn is_changed(&self) -> bool {
        self.output() != self.surface()
    }
}

/// Result of compressing one sentence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compression {
    /// The sentence as given
    pub original: String,

    /// The concatenated per-segment outputs
    pub compressed: String,

    /// One outcome per segment, in sentence order
    pub segments: Vec<SegmentOutcome>,
}

impl Compression {
    /// Outcomes whose output differs from the original text.
    pub fn changes(&self) -> impl Iterator<Item = &SegmentOutcome> {
        self.segments.iter().filter(|outcome| outcome.is_changed())
    }
}

/// Rewrites sentences using the shortest synonym of each eligible segment.
///
/// The tokenizer and the store are constructed by the caller and borrowed for
/// the lifetime of the compressor.
pub struct Compressor<'a> {
    tokenizer: &'a dyn Tokenizer,
    store: &'a dyn LexicalStore,
    selector: Box<dyn CandidateSelector>,
    timeout: Option<Duration>,
}

impl<'a> Compressor<'a> {
    /// Create a compressor using the shortest-lemma selection policy.
    pub fn new(tokenizer: &'a dyn Tokenizer, store: &'a dyn LexicalStore) -> Self {
        Self {
            tokenizer,
            store,
            selector: Box::new(ShortestLemmaSelector::new()),
            timeout: None,
        }
    }

    /// Replace the candidate selection policy.
    pub fn with_selector(mut self, selector: Box<dyn CandidateSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Abort a sentence that is still being processed after `timeout`.
    ///
    /// The deadline is checked between segments, so a single slow lookup can
    /// overrun it.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Compress a sentence.
    ///
    /// An empty sentence is an input error and neither the tokenizer nor the
    /// store is consulted.
    pub fn compress(&self, sentence: &str) -> Result<Compression> {
        if sentence.is_empty() {
            return Err(RuigoError::input("no sentence to compress"));
        }

        let started = Instant::now();
        let segments = self.tokenizer.tokenize(sentence)?;
        debug!(
            "{} segment(s) from {} tokenizer",
            segments.len(),
            self.tokenizer.name()
        );

        let mut compressed = String::with_capacity(sentence.len());
        let mut outcomes = Vec::with_capacity(segments.len());
        for segment in segments {
            if let Some(timeout) = self.timeout {
                if started.elapsed() > timeout {
                    return Err(RuigoError::timeout(format!(
                        "compression did not finish within {} ms",
                        timeout.as_millis()
                    )));
                }
            }

            let outcome = self.process_segment(segment)?;
            compressed.push_str(outcome.output());
            outcomes.push(outcome);
        }

        Ok(Compression {
            original: sentence.to_string(),
            compressed,
            segments: outcomes,
        })
    }

    fn process_segment(&self, segment: Segment) -> Result<SegmentOutcome> {
        if !segment.is_eligible() {
            debug!("pass through '{}' ({})", segment.surface, segment.tag);
            return Ok(SegmentOutcome::PassThrough {
                surface: segment.surface,
            });
        }

        let candidates = self.store.find_similar(&segment.surface)?;
        match self.selector.select(&candidates) {
            Some(entry) => {
                debug!(
                    "'{}' -> '{}' (synset {}, {} candidate(s) from {}, picked by {})",
                    segment.surface,
                    entry.lemma,
                    entry.synset,
                    candidates.len(),
                    self.store.name(),
                    self.selector.name()
                );
                Ok(SegmentOutcome::Substituted {
                    lemma: entry.lemma.clone(),
                    synset: entry.synset.clone(),
                    surface: segment.surface,
                })
            }
            None => {
                debug!(
                    "no candidate for '{}' in {}",
                    segment.surface,
                    self.store.name()
                );
                Ok(SegmentOutcome::NoCandidate {
                    surface: segment.surface,
                })
            }
        }
    }
}
