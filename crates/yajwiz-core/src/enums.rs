// Shared enums: TokenType, WordClass, FineTag, SuffixSlot

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Token types for string tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenType {
    /// Maximal run of letters, apostrophes and digits.
    Word,
    /// Whitespace run.
    Space,
    /// Run of one repeated punctuation (or other non-word) character.
    Punct,
}

impl TokenType {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Word => "WORD",
            TokenType::Space => "SPACE",
            TokenType::Punct => "PUNCT",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing one of the closed tag enumerations fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} tag: {value:?}")]
pub struct UnknownTagError {
    pub kind: &'static str,
    pub value: String,
}

/// Coarse word class. Used both as the word index partition key
/// (`n`, `v`, `other`) and as the broad part of speech of an analysis
/// (`N`, `V`, `OTHER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WordClass {
    #[serde(rename = "N")]
    Noun,
    #[serde(rename = "V")]
    Verb,
    #[serde(rename = "OTHER")]
    Other,
}

impl WordClass {
    /// Key used in morpheme identifiers and the word index (`n`, `v`, `other`).
    pub fn key(self) -> &'static str {
        match self {
            WordClass::Noun => "n",
            WordClass::Verb => "v",
            WordClass::Other => "other",
        }
    }

    /// Broad part-of-speech label (`N`, `V`, `OTHER`).
    pub fn as_str(self) -> &'static str {
        match self {
            WordClass::Noun => "N",
            WordClass::Verb => "V",
            WordClass::Other => "OTHER",
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detailed part-of-speech tag of a lexicon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FineTag {
    /// Stative ("is") verb.
    #[serde(rename = "VS")]
    StativeVerb,
    #[serde(rename = "VT")]
    TransitiveVerb,
    #[serde(rename = "VI")]
    IntransitiveVerb,
    /// Verb that is both transitive and intransitive.
    #[serde(rename = "VA")]
    AmbitransitiveVerb,
    /// Verb of unknown transitivity.
    #[serde(rename = "V?")]
    Verb,
    /// Noun for a being capable of language.
    #[serde(rename = "NL")]
    BeingNoun,
    #[serde(rename = "NB")]
    BodyPartNoun,
    #[serde(rename = "PRON")]
    Pronoun,
    #[serde(rename = "NUM")]
    Numeral,
    #[serde(rename = "N")]
    Noun,
    #[serde(rename = "ADV")]
    Adverbial,
    #[serde(rename = "EXCL")]
    Exclamation,
    #[serde(rename = "CONJ")]
    Conjunction,
    #[serde(rename = "QUES")]
    QuestionWord,
    #[serde(rename = "UNK")]
    Unknown,
}

impl FineTag {
    pub const ALL: [FineTag; 15] = [
        FineTag::StativeVerb,
        FineTag::TransitiveVerb,
        FineTag::IntransitiveVerb,
        FineTag::AmbitransitiveVerb,
        FineTag::Verb,
        FineTag::BeingNoun,
        FineTag::BodyPartNoun,
        FineTag::Pronoun,
        FineTag::Numeral,
        FineTag::Noun,
        FineTag::Adverbial,
        FineTag::Exclamation,
        FineTag::Conjunction,
        FineTag::QuestionWord,
        FineTag::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FineTag::StativeVerb => "VS",
            FineTag::TransitiveVerb => "VT",
            FineTag::IntransitiveVerb => "VI",
            FineTag::AmbitransitiveVerb => "VA",
            FineTag::Verb => "V?",
            FineTag::BeingNoun => "NL",
            FineTag::BodyPartNoun => "NB",
            FineTag::Pronoun => "PRON",
            FineTag::Numeral => "NUM",
            FineTag::Noun => "N",
            FineTag::Adverbial => "ADV",
            FineTag::Exclamation => "EXCL",
            FineTag::Conjunction => "CONJ",
            FineTag::QuestionWord => "QUES",
            FineTag::Unknown => "UNK",
        }
    }

    /// Universal dependencies part of speech for this tag.
    pub fn upos(self) -> &'static str {
        match self {
            FineTag::StativeVerb => "ADJ",
            FineTag::TransitiveVerb
            | FineTag::IntransitiveVerb
            | FineTag::AmbitransitiveVerb
            | FineTag::Verb => "VERB",
            FineTag::BeingNoun | FineTag::BodyPartNoun | FineTag::Noun => "NOUN",
            FineTag::Pronoun => "PRON",
            FineTag::Numeral => "NUM",
            FineTag::Adverbial | FineTag::QuestionWord => "ADV",
            FineTag::Exclamation => "INTJ",
            FineTag::Conjunction => "CCONJ",
            FineTag::Unknown => "X",
        }
    }
}

impl fmt::Display for FineTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FineTag {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FineTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTagError {
                kind: "fine",
                value: s.to_string(),
            })
    }
}

/// Affix slot a suffix occupies.
///
/// Declaration order follows the surface order of the slots within a word,
/// so iterating a map keyed by `SuffixSlot` yields suffixes left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SuffixSlot {
    /// Rovers (and `-Ha'`) standing on their own.
    VR,
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
    V7,
    V8,
    VQ,
    V9,
    N1,
    N2,
    N3,
    N4,
    N5,
    /// Number-forming suffixes (`-maH`, `-vatlh`, ...).
    L1,
    /// Ordinal and adverbial number suffixes (`-DIch`, `-logh`, ...).
    L2,
}

impl SuffixSlot {
    pub const ALL: [SuffixSlot; 18] = [
        SuffixSlot::VR,
        SuffixSlot::V1,
        SuffixSlot::V2,
        SuffixSlot::V3,
        SuffixSlot::V4,
        SuffixSlot::V5,
        SuffixSlot::V6,
        SuffixSlot::V7,
        SuffixSlot::V8,
        SuffixSlot::VQ,
        SuffixSlot::V9,
        SuffixSlot::N1,
        SuffixSlot::N2,
        SuffixSlot::N3,
        SuffixSlot::N4,
        SuffixSlot::N5,
        SuffixSlot::L1,
        SuffixSlot::L2,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SuffixSlot::VR => "VR",
            SuffixSlot::V1 => "V1",
            SuffixSlot::V2 => "V2",
            SuffixSlot::V3 => "V3",
            SuffixSlot::V4 => "V4",
            SuffixSlot::V5 => "V5",
            SuffixSlot::V6 => "V6",
            SuffixSlot::V7 => "V7",
            SuffixSlot::V8 => "V8",
            SuffixSlot::VQ => "VQ",
            SuffixSlot::V9 => "V9",
            SuffixSlot::N1 => "N1",
            SuffixSlot::N2 => "N2",
            SuffixSlot::N3 => "N3",
            SuffixSlot::N4 => "N4",
            SuffixSlot::N5 => "N5",
            SuffixSlot::L1 => "L1",
            SuffixSlot::L2 => "L2",
        }
    }

    /// Whether a suffix in this slot is appended to the combined POS tag.
    pub fn is_grammatical(self) -> bool {
        matches!(self, SuffixSlot::V9 | SuffixSlot::N5 | SuffixSlot::L2)
    }
}

impl fmt::Display for SuffixSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuffixSlot {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SuffixSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| UnknownTagError {
                kind: "suffix slot",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fine_tag_round_trips_through_str() {
        for tag in FineTag::ALL {
            assert_eq!(tag.as_str().parse::<FineTag>(), Ok(tag));
        }
    }

    #[test]
    fn unknown_fine_tag_is_rejected() {
        let err = "XX".parse::<FineTag>().unwrap_err();
        assert_eq!(err.value, "XX");
        assert_eq!(err.to_string(), "unknown fine tag: \"XX\"");
    }

    #[test]
    fn upos_of_stative_verb_is_adj() {
        assert_eq!(FineTag::StativeVerb.upos(), "ADJ");
        assert_eq!(FineTag::Verb.upos(), "VERB");
        assert_eq!(FineTag::QuestionWord.upos(), "ADV");
    }

    #[test]
    fn suffix_slots_are_ordered_by_surface_position() {
        assert!(SuffixSlot::VR < SuffixSlot::V1);
        assert!(SuffixSlot::V9 < SuffixSlot::N1);
        assert!(SuffixSlot::N5 < SuffixSlot::L1);
    }

    #[test]
    fn grammatical_slots() {
        assert!(SuffixSlot::V9.is_grammatical());
        assert!(SuffixSlot::N5.is_grammatical());
        assert!(SuffixSlot::L2.is_grammatical());
        assert!(!SuffixSlot::V7.is_grammatical());
    }

    #[test]
    fn word_class_keys() {
        assert_eq!(WordClass::Noun.key(), "n");
        assert_eq!(WordClass::Verb.key(), "v");
        assert_eq!(WordClass::Other.key(), "other");
        assert_eq!(WordClass::Other.to_string(), "OTHER");
    }
}
