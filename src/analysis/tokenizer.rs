//! Tokenizer adapter for morphological analysis.
//!
//! A tokenizer splits a sentence into an ordered sequence of [`Segment`]s,
//! each carrying its surface text and part-of-speech tag. The compressor only
//! depends on the [`Tokenizer`] trait, so the analyzer can be swapped out (or
//! faked in tests).
//!
//! # Available Tokenizers
//!
//! - [`lindera::LinderaTokenizer`] - Japanese morphological analysis backed by Lindera

use crate::analysis::segment::Segment;
use crate::error::Result;

/// Trait for tokenizers that convert a sentence into segments.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use ruigo::analysis::segment::Segment;
/// use ruigo::analysis::tokenizer::Tokenizer;
/// use ruigo::error::Result;
///
/// struct CharTokenizer;
///
/// impl Tokenizer for CharTokenizer {
///     fn tokenize(&self, text: &str) -> Result<Vec<Segment>> {
///         Ok(text
///             .chars()
///             .enumerate()
///             .map(|(i, c)| Segment::new(c.to_string(), "名詞", i))
///             .collect())
///     }
///
///     fn name(&self) -> &'static str {
///         "char"
///     }
/// }
///
/// let segments = CharTokenizer.tokenize("車道").unwrap();
/// assert_eq!(segments.len(), 2);
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given sentence into segments.
    ///
    /// Each call returns a fresh sequence ordered left to right; the surface
    /// texts, concatenated, reproduce the analyzed spans of `text`.
    fn tokenize(&self, text: &str) -> Result<Vec<Segment>>;

    /// Get the name of this tokenizer (for logging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lindera;
