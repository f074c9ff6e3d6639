// Lexicon: dictionary entries and the word index built from them.
//
// The lexicon is loaded from the boQwI' JSON export (the `qawHaq` object
// maps entry ids to entries). Fetching and updating the export is left to
// the caller; the lexicon only parses what it is given.

mod index;
pub mod tags;

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::sync::Arc;

use serde::Deserialize;
use yajwiz_core::enums::{FineTag, WordClass};

pub use index::WordIndex;

/// Error type for lexicon loading failures.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The dictionary data is not valid JSON in the expected shape.
    #[error("failed to parse dictionary: {0}")]
    Parse(#[from] serde_json::Error),

    /// The dictionary data could not be read.
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),
}

/// A single dictionary headword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalEntry {
    /// Entry identifier, e.g. `legh:v` or `ghor:v:1`.
    pub id: String,
    /// Surface form of the headword.
    pub name: String,
    /// Raw part-of-speech string, e.g. `v:t_c`.
    pub part_of_speech: String,
    /// Simple class plus every tag of the part-of-speech string.
    pub tags: BTreeSet<String>,
    /// Glosses by locale.
    pub definition: BTreeMap<String, String>,
    fine_tag: FineTag,
}

impl LexicalEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        part_of_speech: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let part_of_speech = part_of_speech.into();
        let tags = tags::parse_pos(&part_of_speech);
        let fine_tag = tags::fine_tag(&name, &tags);
        Self {
            id: id.into(),
            name,
            part_of_speech,
            tags,
            definition: BTreeMap::new(),
            fine_tag,
        }
    }

    /// Add a gloss for a locale.
    pub fn with_definition(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.definition.insert(locale.into(), text.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn fine_tag(&self) -> FineTag {
        self.fine_tag
    }

    pub fn word_class(&self) -> WordClass {
        tags::word_class(&self.tags)
    }

    /// Hypothetical (unattested) entries are never analyzed.
    pub fn is_hypothetical(&self) -> bool {
        self.has_tag("hyp")
    }

    /// Prefix and suffix entries are not lemmas.
    pub fn is_affix(&self) -> bool {
        self.has_tag("pref") || self.has_tag("suff")
    }

    /// Gloss in the given locale. Locales without a text gloss give `None`.
    pub fn gloss(&self, locale: &str) -> Option<&str> {
        self.definition.get(locale).map(String::as_str)
    }
}

#[derive(Deserialize)]
struct RawDictionary {
    #[serde(default)]
    version: Option<String>,
    #[serde(rename = "qawHaq")]
    entries: BTreeMap<String, RawEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    entry_name: String,
    part_of_speech: String,
    #[serde(default)]
    definition: BTreeMap<String, serde_json::Value>,
}

impl RawEntry {
    fn into_entry(self, id: String) -> LexicalEntry {
        let mut entry = LexicalEntry::new(id, self.entry_name, self.part_of_speech);
        entry.definition = self
            .definition
            .into_iter()
            .filter_map(|(locale, text)| match text {
                serde_json::Value::String(text) => Some((locale, text)),
                _ => None,
            })
            .collect();
        entry
    }
}

/// An immutable set of dictionary entries.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    version: Option<String>,
    entries: Vec<Arc<LexicalEntry>>,
    by_id: hashbrown::HashMap<String, usize>,
}

impl Lexicon {
    /// Create a lexicon from entries. Order is preserved and determines the
    /// order of homograph analyses; a later entry with a duplicate id
    /// replaces the earlier one.
    pub fn new(entries: impl IntoIterator<Item = LexicalEntry>) -> Self {
        let mut lexicon = Self::default();
        for entry in entries {
            match lexicon.by_id.get(&entry.id) {
                Some(&i) => lexicon.entries[i] = Arc::new(entry),
                None => {
                    lexicon.by_id.insert(entry.id.clone(), lexicon.entries.len());
                    lexicon.entries.push(Arc::new(entry));
                }
            }
        }
        lexicon
    }

    /// Parse a boQwI' JSON export.
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let raw: RawDictionary = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Parse a boQwI' JSON export from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, LexiconError> {
        let raw: RawDictionary = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawDictionary) -> Self {
        let mut lexicon = Self::new(
            raw.entries
                .into_iter()
                .map(|(id, entry)| entry.into_entry(id)),
        );
        lexicon.version = raw.version;
        lexicon
    }

    /// Dictionary version string, if the export carried one.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<LexicalEntry>> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> impl Iterator<Item = &Arc<LexicalEntry>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "version": "2024.01.01",
        "qawHaq": {
            "legh:v": {
                "entry_name": "legh",
                "part_of_speech": "v:t_c",
                "definition": {"en": "see", "de": "sehen"}
            },
            "ghop:n": {
                "entry_name": "ghop",
                "part_of_speech": "n:body",
                "definition": {"en": "hand", "notes": 3}
            },
            "DaH:adv": {
                "entry_name": "DaH",
                "part_of_speech": "adv"
            }
        }
    }"#;

    #[test]
    fn parse_sample_dictionary() {
        let lexicon = Lexicon::from_json_str(SAMPLE).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.version(), Some("2024.01.01"));

        let legh = lexicon.get("legh:v").unwrap();
        assert_eq!(legh.name, "legh");
        assert_eq!(legh.fine_tag(), FineTag::TransitiveVerb);
        assert_eq!(legh.word_class(), WordClass::Verb);
        assert_eq!(legh.gloss("de"), Some("sehen"));
    }

    #[test]
    fn non_string_definitions_are_dropped() {
        let lexicon = Lexicon::from_json_str(SAMPLE).unwrap();
        let ghop = lexicon.get("ghop:n").unwrap();
        assert_eq!(ghop.definition.len(), 1);
        assert_eq!(ghop.gloss("en"), Some("hand"));
        assert_eq!(ghop.gloss("fi"), None);
    }

    #[test]
    fn missing_definition_is_empty() {
        let lexicon = Lexicon::from_json_str(SAMPLE).unwrap();
        let dah = lexicon.get("DaH:adv").unwrap();
        assert!(dah.definition.is_empty());
        assert_eq!(dah.word_class(), WordClass::Other);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = Lexicon::from_json_str("{\"qawHaq\": 3}").unwrap_err();
        assert!(matches!(err, LexiconError::Parse(_)));
    }

    #[test]
    fn from_reader_parses_bytes() {
        let lexicon = Lexicon::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(lexicon.len(), 3);
    }

    #[test]
    fn duplicate_ids_replace_earlier_entries() {
        let lexicon = Lexicon::new([
            LexicalEntry::new("Sov:v", "Sov", "v:t"),
            LexicalEntry::new("Sov:v", "Sov", "v:i"),
        ]);
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.get("Sov:v").unwrap().fine_tag(), FineTag::IntransitiveVerb);
    }

    #[test]
    fn entry_flags() {
        let suffix = LexicalEntry::new("-lu':v", "-lu'", "v:suff");
        assert!(suffix.is_affix());
        assert!(!suffix.is_hypothetical());

        let hyp = LexicalEntry::new("X:n", "X", "n:hyp");
        assert!(hyp.is_hypothetical());
    }
}
