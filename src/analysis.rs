//! Text analysis for ruigo.
//!
//! This module turns a sentence into part-of-speech tagged segments and
//! decides which segments may be rewritten.

pub mod part_of_speech;
pub mod segment;
pub mod tokenizer;
