//! Segment type produced by the morphological analyzer.
//!
//! A [`Segment`] is one morphological unit of the input sentence. Segments
//! are produced in left-to-right order and their surface texts, concatenated,
//! reconstruct the analyzed sentence span for span.
//!
//! # Examples
//!
//! ```
//! use ruigo::analysis::part_of_speech::PartOfSpeech;
//! use ruigo::analysis::segment::Segment;
//!
//! let segment = Segment::new("車", "名詞", 0);
//! assert_eq!(segment.surface, "車");
//! assert_eq!(segment.part_of_speech, PartOfSpeech::Noun);
//! assert!(segment.is_eligible());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::part_of_speech::PartOfSpeech;

/// A single morphologically tokenized unit of a sentence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// The text exactly as it appears in the sentence
    pub surface: String,

    /// Grammatical category parsed from `tag`
    pub part_of_speech: PartOfSpeech,

    /// The raw part-of-speech tag emitted by the analyzer
    pub tag: String,

    /// The position of the segment in the sentence (0-based)
    pub position: usize,

    /// The byte offset where this segment starts in the sentence
    pub byte_start: usize,

    /// The byte offset where this segment ends in the sentence
    pub byte_end: usize,
}

impl Segment {
    /// Create a new segment from its surface text and raw tag.
    ///
    /// The offsets cover the surface as if it were the whole sentence
    /// (`0..surface.len()`). Use [`Segment::with_offsets`] for segments taken
    /// from inside a longer sentence.
    pub fn new<S, T>(surface: S, tag: T, position: usize) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        let surface = surface.into();
        let tag = tag.into();
        let byte_end = surface.len();
        Segment {
            part_of_speech: PartOfSpeech::from_tag(&tag),
            surface,
            tag,
            position,
            byte_start: 0,
            byte_end,
        }
    }

    /// Create a new segment with byte offsets into the analyzed sentence.
    pub fn with_offsets<S, T>(
        surface: S,
        tag: T,
        position: usize,
        byte_start: usize,
        byte_end: usize,
    ) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Segment {
            byte_start,
            byte_end,
            ..Segment::new(surface, tag, position)
        }
    }

    /// Whether this segment may be replaced by a synonym.
    pub fn is_eligible(&self) -> bool {
        self.part_of_speech.is_eligible()
    }

    /// Length of the surface text in characters.
    pub fn char_len(&self) -> usize {
        self.surface.chars().count()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.surface)
    }
}
