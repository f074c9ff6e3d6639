// Morphological analysis result types

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::enums::{FineTag, SuffixSlot, WordClass};

/// Placeholder used for the source tag and entry id of a lemma that has no
/// lexicon entry.
pub const NO_ENTRY: &str = "?";

/// Grammatical person of a verb's subject or object. `Zero` marks the
/// absence of an object (or the indefinite subject of `-lu'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Person {
    Zero,
    First,
    Second,
    Third,
}

impl Person {
    pub fn as_digit(self) -> u8 {
        match self {
            Person::Zero => 0,
            Person::First => 1,
            Person::Second => 2,
            Person::Third => 3,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_digit())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Number {
    Sing,
    Plur,
}

impl Number {
    pub fn as_str(self) -> &'static str {
        match self {
            Number::Sing => "Sing",
            Number::Plur => "Plur",
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntactic role of a word in its clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Role {
    NP,
    VP,
    #[serde(rename = "OTHER")]
    Other,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::NP => "NP",
            Role::VP => "VP",
            Role::Other => "OTHER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntactic features of an analysis, used by the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SyntaxInfo {
    pub role: Role,
    pub subject_persons: BTreeSet<Person>,
    pub subject_number: Option<Number>,
    pub object_persons: BTreeSet<Person>,
    pub object_number: Option<Number>,
    /// `Some(true)` for explicitly plural noun phrases, `Some(false)` for
    /// nouns that are lexically singular or plural without a suffix.
    pub plural: Option<bool>,
    /// Feature bits matched by grammar rule conditions.
    pub bits: BTreeSet<String>,
}

impl SyntaxInfo {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            subject_persons: BTreeSet::new(),
            subject_number: None,
            object_persons: BTreeSet::new(),
            object_number: None,
            plural: None,
            bits: BTreeSet::new(),
        }
    }

    pub fn has_bit(&self, bit: &str) -> bool {
        self.bits.contains(bit)
    }
}

/// One admissible segmentation of a word.
///
/// Produced by the analyzer; values are compared structurally so that the
/// analyses of a word form a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Analysis {
    /// The analyzed word as written.
    pub word: String,
    /// Surface form of the lemma.
    pub lemma: String,
    pub broad_pos: WordClass,
    pub fine_pos: FineTag,
    /// Fine tag followed by `.suffix` for each grammatical suffix (V9, N5, L2).
    pub combined_pos: String,
    /// Raw part-of-speech string of the lemma's lexicon entry.
    pub source_tag: String,
    pub entry_id: String,
    /// Morpheme identifiers in surface order.
    pub parts: Vec<String>,
    /// Verb prefix including its trailing dash, e.g. `vI-`.
    pub prefix: Option<String>,
    /// Suffix text per slot, with a leading dash and any rover appended.
    pub suffixes: BTreeMap<SuffixSlot, String>,
    /// Reason this segmentation is ungrammatical, if it is.
    pub ungrammatical: Option<String>,
    pub syntax_info: Option<SyntaxInfo>,
}

impl Analysis {
    /// Create an analysis with no lemma information yet.
    pub fn new(word: impl Into<String>, broad_pos: WordClass) -> Self {
        Self {
            word: word.into(),
            lemma: String::new(),
            broad_pos,
            fine_pos: FineTag::Unknown,
            combined_pos: String::new(),
            source_tag: NO_ENTRY.to_string(),
            entry_id: NO_ENTRY.to_string(),
            parts: Vec::new(),
            prefix: None,
            suffixes: BTreeMap::new(),
            ungrammatical: None,
            syntax_info: None,
        }
    }

    pub fn suffix(&self, slot: SuffixSlot) -> Option<&str> {
        self.suffixes.get(&slot).map(String::as_str)
    }

    pub fn has_part(&self, part: &str) -> bool {
        self.parts.iter().any(|p| p == part)
    }

    pub fn is_ungrammatical(&self) -> bool {
        self.ungrammatical.is_some()
    }

    /// Whether the analysis carries the feature bit. Analyses without
    /// syntax info carry no bits.
    pub fn has_bit(&self, bit: &str) -> bool {
        self.syntax_info.as_ref().is_some_and(|info| info.has_bit(bit))
    }
}
