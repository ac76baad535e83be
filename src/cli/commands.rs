//! Command implementation for the ruigo CLI.

use std::io;
use std::time::Duration;

use log::{info, warn};

use crate::analysis::tokenizer::Tokenizer;
use crate::cli::args::RuigoArgs;
use crate::cli::output::output_compression;
use crate::compress::{Compression, Compressor};
use crate::error::{Result, RuigoError};
use crate::lexicon::LexicalStore;
use crate::lexicon::wordnet::WordNetStore;

/// Execute the CLI command.
///
/// The sentence is checked before anything else, so a missing sentence never
/// loads the dictionary or touches the database.
pub fn execute_command(args: RuigoArgs) -> Result<()> {
    let sentence = args.sentence_text();
    if sentence.is_empty() {
        return Err(RuigoError::input(
            "please pass the sentence to compress as arguments",
        ));
    }

    let config = args.compressor_config();
    let tokenizer = config.build_tokenizer()?;
    info!("loaded dictionary {}", config.dictionary);
    let store = config.open_store()?;
    if let Some(path) = store.path() {
        info!("{} store at {}", store.name(), path.display());
    }

    let compression = compress_with_store(&tokenizer, store, &sentence, config.timeout)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output_compression(&mut out, &compression, &args)
}

/// Compress one sentence and release the store.
///
/// The store is closed whether or not compression succeeded. A failure to
/// close is logged and does not change the result.
pub fn compress_with_store(
    tokenizer: &dyn Tokenizer,
    store: WordNetStore,
    sentence: &str,
    timeout: Option<Duration>,
) -> Result<Compression> {
    let result = Compressor::new(tokenizer, &store)
        .with_timeout(timeout)
        .compress(sentence);

    if let Err(e) = store.close() {
        warn!("{e}");
    }

    result
}
