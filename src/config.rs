//! Runtime configuration for a compression run.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::lindera::LinderaTokenizer;
use crate::error::Result;
use crate::lexicon::wordnet::WordNetStore;

/// Default location of the Japanese WordNet database.
pub const DEFAULT_DATABASE: &str = "./wnjpn.db";

/// Default Lindera dictionary.
pub const DEFAULT_DICTIONARY: &str = "embedded://ipadic";

/// Default Lindera segmentation mode.
pub const DEFAULT_MODE: &str = "normal";

/// Where the analyzer and the lexical store come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressorConfig {
    /// Path to the WordNet SQLite database.
    pub database: PathBuf,

    /// Lindera dictionary URI or path.
    pub dictionary: String,

    /// Optional Lindera user dictionary URI or path.
    pub user_dictionary: Option<String>,

    /// Lindera segmentation mode (`normal` or `decompose`).
    pub mode: String,

    /// Overall deadline per sentence.
    pub timeout: Option<Duration>,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            dictionary: DEFAULT_DICTIONARY.to_string(),
            user_dictionary: None,
            mode: DEFAULT_MODE.to_string(),
            timeout: None,
        }
    }
}

impl CompressorConfig {
    /// Build the morphological analyzer described by this configuration.
    pub fn build_tokenizer(&self) -> Result<LinderaTokenizer> {
        LinderaTokenizer::new(
            &self.mode,
            &self.dictionary,
            self.user_dictionary.as_deref(),
        )
    }

    /// Open the lexical store described by this configuration.
    pub fn open_store(&self) -> Result<WordNetStore> {
        WordNetStore::open(&self.database)
    }
}
