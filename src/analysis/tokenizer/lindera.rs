use std::borrow::Cow;
use std::str::FromStr;

use lindera::dictionary::{load_dictionary, load_user_dictionary};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use log::debug;

use crate::analysis::segment::Segment;
use crate::error::{Result, RuigoError};

use super::Tokenizer;

/// Tag used when the analyzer reports no details for a segment.
const UNKNOWN_TAG: &str = "UNK";

pub struct LinderaTokenizer {
    inner: Segmenter,
}

impl LinderaTokenizer {
    /// Create a new Lindera tokenizer.
    ///
    /// `dict_uri` is either an embedded dictionary (`embedded://ipadic`) or a
    /// path to a compiled dictionary directory. Any failure here is a
    /// configuration error.
    pub fn new(mode_str: &str, dict_uri: &str, user_dict_uri: Option<&str>) -> Result<Self> {
        let mode = Mode::from_str(mode_str).map_err(|e| {
            RuigoError::configuration(format!("Invalid mode '{}': {}", mode_str, e))
        })?;
        let dict = load_dictionary(dict_uri).map_err(|e| {
            RuigoError::configuration(format!(
                "Failed to load dictionary '{}': {}",
                dict_uri, e
            ))
        })?;
        let metadata = &dict.metadata;
        let user_dict = match user_dict_uri {
            Some(uri) => Some(load_user_dictionary(uri, metadata).map_err(|e| {
                RuigoError::configuration(format!(
                    "Failed to load user dictionary '{}': {}",
                    uri, e
                ))
            })?),
            None => None,
        };
        let inner = Segmenter::new(mode, dict, user_dict);
        debug!("lindera tokenizer ready (dictionary: {dict_uri}, mode: {mode_str})");

        Ok(Self { inner })
    }
}

impl Tokenizer for LinderaTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Segment>> {
        let mut segments = Vec::new();

        for mut token in self
            .inner
            .segment(Cow::Borrowed(text))
            .map_err(|e| RuigoError::tokenization(format!("Failed to segment text: {}", e)))?
        {
            let tag = token
                .details()
                .first()
                .map(|detail| detail.to_string())
                .unwrap_or_else(|| UNKNOWN_TAG.to_string());
            segments.push(Segment::with_offsets(
                token.surface.to_string(),
                tag,
                token.position,
                token.byte_start,
                token.byte_end,
            ));
        }

        Ok(segments)
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}


#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_missing_dictionary_is_configuration_error() {
        let result = LinderaTokenizer::new("normal", "/nonexistent/lindera-dictionary", None);
        assert!(matches!(result, Err(RuigoError::Configuration(_))));
    }
}
