//! Output formatting for the CLI.

use std::io::Write;

use crate::cli::args::{OutputFormat, RuigoArgs};
use crate::compress::{Compression, SegmentOutcome};
use crate::error::Result;

/// Label printed before the original sentence.
pub const ORIGINAL_LABEL: &str = "圧縮前 : ";

/// Label printed before the compressed sentence.
pub const COMPRESSED_LABEL: &str = "圧縮後 : ";

/// Output a compression result in the requested format.
pub fn output_compression<W: Write>(
    out: &mut W,
    compression: &Compression,
    args: &RuigoArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(out, compression, args),
        OutputFormat::Json => output_json(out, compression, args),
    }
}

/// Output in human-readable format.
fn output_human<W: Write>(out: &mut W, compression: &Compression, args: &RuigoArgs) -> Result<()> {
    writeln!(out, "{ORIGINAL_LABEL}{}", compression.original)?;
    writeln!(out, "{COMPRESSED_LABEL}{}", compression.compressed)?;

    if args.verbosity() > 1 {
        for outcome in compression.changes() {
            if let SegmentOutcome::Substituted {
                surface,
                lemma,
                synset,
            } = outcome
            {
                writeln!(out, "  {surface} -> {lemma} ({synset})")?;
            }
        }
    }

    Ok(())
}

/// Output in JSON format.
fn output_json<W: Write>(out: &mut W, compression: &Compression, args: &RuigoArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(compression)?
    } else {
        serde_json::to_string(compression)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}
