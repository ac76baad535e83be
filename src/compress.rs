//! Sentence compression.
//!
//! - [`pipeline::Compressor`] - Drives tokenization, lookup and selection for a sentence
//! - [`selector::ShortestLemmaSelector`] - Picks the shortest synonym candidate

pub mod pipeline;
pub mod selector;

pub use pipeline::{Compression, Compressor, SegmentOutcome};
pub use selector::{CandidateSelector, ShortestLemmaSelector};
