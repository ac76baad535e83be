//! # ruigo
//!
//! Shortens Japanese sentences by replacing words with the shortest lemma
//! that shares a synset with them in Japanese WordNet.
//!
//! ## Features
//!
//! - Morphological analysis with Lindera
//! - Synonym lookup against a read-only `wnjpn.db` SQLite database
//! - Only nouns, adjectives, adverbs and verbs are rewritten
//! - Pluggable tokenizers, lexical stores and selection policies

pub mod analysis;
pub mod cli;
pub mod compress;
pub mod config;
pub mod error;
pub mod lexicon;
