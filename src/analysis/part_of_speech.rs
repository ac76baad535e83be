//! Part-of-speech classification of segments.
//!
//! The analyzer reports grammatical categories as dictionary-specific tag
//! strings (IPADIC and UniDic both use Japanese names such as `名詞`). This
//! module maps those tags onto [`PartOfSpeech`] and decides which segments are
//! eligible for synonym substitution.
//!
//! Only nouns, adjectives, adverbs and verbs are eligible. Particles,
//! conjunctions, auxiliary verbs and punctuation always pass through so the
//! sentence structure stays intact.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of parts of speech that may be replaced by a synonym.
pub const ELIGIBLE_PARTS_OF_SPEECH: [PartOfSpeech; 4] = [
    PartOfSpeech::Noun,
    PartOfSpeech::Adjective,
    PartOfSpeech::Adverb,
    PartOfSpeech::Verb,
];

/// Grammatical category of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    /// 名詞
    Noun,
    /// 動詞
    Verb,
    /// 形容詞
    Adjective,
    /// 副詞
    Adverb,
    /// 助詞
    Particle,
    /// 助動詞
    AuxiliaryVerb,
    /// 接続詞
    Conjunction,
    /// 接頭詞 (IPADIC) or 接頭辞 (UniDic)
    Prefix,
    /// 連体詞
    Adnominal,
    /// 感動詞
    Interjection,
    /// 記号 or 補助記号
    Symbol,
    /// フィラー
    Filler,
    /// Anything else, including unknown words without a tag
    Other,
}

impl PartOfSpeech {
    /// Parse the analyzer's top-level part-of-speech tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "名詞" => PartOfSpeech::Noun,
            "動詞" => PartOfSpeech::Verb,
            "形容詞" => PartOfSpeech::Adjective,
            "副詞" => PartOfSpeech::Adverb,
            "助詞" => PartOfSpeech::Particle,
            "助動詞" => PartOfSpeech::AuxiliaryVerb,
            "接続詞" => PartOfSpeech::Conjunction,
            "接頭詞" | "接頭辞" => PartOfSpeech::Prefix,
            "連体詞" => PartOfSpeech::Adnominal,
            "感動詞" => PartOfSpeech::Interjection,
            "記号" | "補助記号" => PartOfSpeech::Symbol,
            "フィラー" => PartOfSpeech::Filler,
            _ => PartOfSpeech::Other,
        }
    }

    /// Whether segments of this category may be replaced by a synonym.
    pub fn is_eligible(self) -> bool {
        is_eligible(self)
    }

    /// The canonical IPADIC tag for this category.
    pub fn as_tag(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "名詞",
            PartOfSpeech::Verb => "動詞",
            PartOfSpeech::Adjective => "形容詞",
            PartOfSpeech::Adverb => "副詞",
            PartOfSpeech::Particle => "助詞",
            PartOfSpeech::AuxiliaryVerb => "助動詞",
            PartOfSpeech::Conjunction => "接続詞",
            PartOfSpeech::Prefix => "接頭詞",
            PartOfSpeech::Adnominal => "連体詞",
            PartOfSpeech::Interjection => "感動詞",
            PartOfSpeech::Symbol => "記号",
            PartOfSpeech::Filler => "フィラー",
            PartOfSpeech::Other => "その他",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Decide whether a segment with the given part of speech is eligible for
/// substitution.
pub fn is_eligible(part_of_speech: PartOfSpeech) -> bool {
    ELIGIBLE_PARTS_OF_SPEECH.contains(&part_of_speech)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligible_tags() {
        for tag in ["名詞", "形容詞", "副詞", "動詞"] {
            assert!(PartOfSpeech::from_tag(tag).is_eligible(), "{tag}");
        }
    }

    #[test]
    fn test_pass_through_tags() {
        for tag in [
            "助詞", "助動詞", "接続詞", "記号", "補助記号", "接頭詞", "連体詞", "感動詞", "フィラー",
        ] {
            assert!(!PartOfSpeech::from_tag(tag).is_eligible(), "{tag}");
        }
    }

    #[test]
    fn test_unknown_tags_are_other() {
        assert_eq!(PartOfSpeech::from_tag("UNK"), PartOfSpeech::Other);
        assert_eq!(PartOfSpeech::from_tag(""), PartOfSpeech::Other);
        assert_eq!(PartOfSpeech::from_tag("*"), PartOfSpeech::Other);
        assert!(!is_eligible(PartOfSpeech::Other));
    }

    #[test]
    fn test_prefix_vocabularies() {
        assert_eq!(PartOfSpeech::from_tag("接頭詞"), PartOfSpeech::Prefix);
        assert_eq!(PartOfSpeech::from_tag("接頭辞"), PartOfSpeech::Prefix);
    }

    #[test]
    fn test_tag_round_trip_for_eligible_set() {
        for pos in ELIGIBLE_PARTS_OF_SPEECH {
            assert_eq!(PartOfSpeech::from_tag(pos.as_tag()), pos);
        }
    }
}
