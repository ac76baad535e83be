//! Command line argument parsing for the ruigo CLI using clap.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{CompressorConfig, DEFAULT_DATABASE, DEFAULT_DICTIONARY, DEFAULT_MODE};

/// ruigo - Shorten Japanese sentences with WordNet synonyms
#[derive(Parser, Debug, Clone)]
#[command(name = "ruigo")]
#[command(about = "Shorten Japanese sentences by replacing words with their shortest synonym")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RuigoArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Japanese WordNet SQLite database
    #[arg(short, long, env = "RUIGO_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Lindera dictionary URI or path
    #[arg(long, env = "RUIGO_DICTIONARY", default_value = DEFAULT_DICTIONARY)]
    pub dictionary: String,

    /// Lindera user dictionary URI or path
    #[arg(long, env = "RUIGO_USER_DICTIONARY")]
    pub user_dictionary: Option<String>,

    /// Segmentation mode
    #[arg(short, long, default_value = DEFAULT_MODE)]
    pub mode: String,

    /// Give up on a sentence after this many milliseconds
    #[arg(long, value_name = "MILLIS")]
    pub timeout_ms: Option<u64>,

    /// Sentence to compress; words are joined with a single space
    #[arg(value_name = "SENTENCE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub sentence: Vec<String>,
}

impl RuigoArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }

    /// The sentence given on the command line.
    pub fn sentence_text(&self) -> String {
        self.sentence.join(" ")
    }

    /// Configuration for the analyzer and the lexical store.
    pub fn compressor_config(&self) -> CompressorConfig {
        CompressorConfig {
            database: self.database.clone(),
            dictionary: self.dictionary.clone(),
            user_dictionary: self.user_dictionary.clone(),
            mode: self.mode.clone(),
            timeout: self.timeout_ms.map(Duration::from_millis),
        }
    }
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
