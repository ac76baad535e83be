//! Error types for ruigo.
//!
//! Every failure the compressor can report is represented by the
//! [`RuigoError`] enum. Collaborator errors (the morphological analyzer and
//! the lexical database) are never recovered from: they bubble up to the
//! caller, which reports them and stops.
//!
//! # Examples
//!
//! ```
//! use ruigo::error::{Result, RuigoError};
//!
//! fn require_sentence(sentence: &str) -> Result<()> {
//!     if sentence.is_empty() {
//!         return Err(RuigoError::input("no sentence given"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_sentence("").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for ruigo operations.
#[derive(Error, Debug)]
pub enum RuigoError {
    /// The analyzer or the lexical store could not be initialized.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No usable sentence was provided.
    #[error("Input error: {0}")]
    Input(String),

    /// A lookup against the lexical store failed.
    #[error("Store query error: {0}")]
    StoreQuery(String),

    /// The analyzer rejected the input sentence.
    #[error("Tokenization error: {0}")]
    Tokenization(String),

    /// The overall deadline for a sentence was exceeded.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// I/O errors (writing results)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with RuigoError.
pub type Result<T> = std::result::Result<T, RuigoError>;

impl RuigoError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        RuigoError::Configuration(msg.into())
    }

    /// Create a new input error.
    pub fn input<S: Into<String>>(msg: S) -> Self {
        RuigoError::Input(msg.into())
    }

    /// Create a new store query error.
    pub fn store_query<S: Into<String>>(msg: S) -> Self {
        RuigoError::StoreQuery(msg.into())
    }

    /// Create a new tokenization error.
    pub fn tokenization<S: Into<String>>(msg: S) -> Self {
        RuigoError::Tokenization(msg.into())
    }

    /// Create a new timeout error.
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        RuigoError::Timeout(msg.into())
    }
}

impl From<rusqlite::Error> for RuigoError {
    fn from(err: rusqlite::Error) -> Self {
        RuigoError::StoreQuery(err.to_string())
    }
}
