// Affix templates: per-class regular compositions of affix slots around a
// lemma alternation.
//
// A template is compiled from the lexicon snapshot. Each capture group of
// the compiled regex is one slot; the slot roles are kept next to the regex
// so the analyzer can walk a match without re-parsing the pattern.

use hashbrown::HashSet;
use regex::{Regex, RegexBuilder};
use yajwiz_core::enums::{SuffixSlot, WordClass};

use super::tables::{
    NOMINALIZERS, NUMERALS, ROVERS, SEEDED_DERIVED_VERBS, VERB_PREFIXES, VERBAL_PRONOUNS,
    slot_surfaces,
};
use crate::lexicon::Lexicon;

/// Lemma alternations run into thousands of words.
const REGEX_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Error type for template compilation failures.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to compile {template} template: {source}")]
    Build {
        template: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// The word-class grammars, in the order the analyzer tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Noun,
    Number,
    PronounVerb,
    Verb,
    StativeVerb,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Noun,
        TemplateKind::Number,
        TemplateKind::PronounVerb,
        TemplateKind::Verb,
        TemplateKind::StativeVerb,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Noun => "noun",
            TemplateKind::Number => "number",
            TemplateKind::PronounVerb => "pronoun-verb",
            TemplateKind::Verb => "verb",
            TemplateKind::StativeVerb => "stative-verb",
        }
    }

    /// Class of the prefixes and of the lemma lookup.
    pub fn lemma_class(self) -> WordClass {
        match self {
            TemplateKind::Noun | TemplateKind::Number | TemplateKind::PronounVerb => {
                WordClass::Noun
            }
            TemplateKind::Verb | TemplateKind::StativeVerb => WordClass::Verb,
        }
    }

    /// Class of the suffixes following the lemma.
    pub fn inflection_class(self) -> WordClass {
        match self {
            TemplateKind::Noun | TemplateKind::Number => WordClass::Noun,
            TemplateKind::PronounVerb | TemplateKind::Verb | TemplateKind::StativeVerb => {
                WordClass::Verb
            }
        }
    }

    /// Tag a homograph entry must carry to survive the lemma step.
    pub fn required_tag(self) -> Option<&'static str> {
        match self {
            TemplateKind::PronounVerb => Some("pro"),
            TemplateKind::StativeVerb => Some("is"),
            _ => None,
        }
    }
}

/// Role of one capture slot of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    Prefix,
    Lemma,
    /// A suffix slot. `class` overrides the running word class when the
    /// slot's suffixes always belong to one class.
    Suffix { class: Option<WordClass> },
}

/// One participating, non-empty capture of a full match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotMatch<'w> {
    pub role: SlotRole,
    pub text: &'w str,
    /// Byte offset of the capture in the word.
    pub start: usize,
}

/// A compiled word-class grammar.
#[derive(Debug, Clone)]
pub struct AffixTemplate {
    kind: TemplateKind,
    /// `None` when the lemma alternation is empty; such a template never
    /// matches.
    regex: Option<Regex>,
    roles: Vec<SlotRole>,
}

impl AffixTemplate {
    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn roles(&self) -> &[SlotRole] {
        &self.roles
    }

    /// Whether the template matches the whole word.
    pub fn is_match(&self, word: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(word))
    }

    /// Match the whole word and return its non-empty captures in slot
    /// order.
    pub fn captures<'w>(&self, word: &'w str) -> Option<Vec<SlotMatch<'w>>> {
        let caps = self.regex.as_ref()?.captures(word)?;
        let slots = self
            .roles
            .iter()
            .enumerate()
            .filter_map(|(i, &role)| {
                caps.get(i + 1)
                    .filter(|m| !m.is_empty())
                    .map(|m| SlotMatch { role, text: m.as_str(), start: m.start() })
            })
            .collect();
        Some(slots)
    }
}

/// Incremental pattern writer that records one role per capture group.
struct TemplateBuilder {
    pattern: String,
    roles: Vec<SlotRole>,
    empty_lemma: bool,
}

impl TemplateBuilder {
    fn new() -> Self {
        Self { pattern: String::new(), roles: Vec::new(), empty_lemma: false }
    }

    fn raw(&mut self, text: &str) -> &mut Self {
        self.pattern.push_str(text);
        self
    }

    fn group<S: AsRef<str>>(&mut self, role: SlotRole, alternatives: &[S], optional: bool) -> &mut Self {
        self.pattern.push('(');
        for (i, alt) in alternatives.iter().enumerate() {
            if i > 0 {
                self.pattern.push('|');
            }
            self.pattern.push_str(&regex::escape(alt.as_ref()));
        }
        self.pattern.push(')');
        if optional {
            self.pattern.push('?');
        }
        self.roles.push(role);
        self
    }

    /// Prefix slot; the empty prefix is the first alternative.
    fn prefix(&mut self, prefixes: &[&str]) -> &mut Self {
        let mut alternatives = Vec::with_capacity(prefixes.len() + 1);
        alternatives.push("");
        alternatives.extend_from_slice(prefixes);
        self.group(SlotRole::Prefix, &alternatives, false)
    }

    fn lemma<S: AsRef<str>>(&mut self, words: &[S]) -> &mut Self {
        if words.is_empty() {
            self.empty_lemma = true;
        }
        self.group(SlotRole::Lemma, words, false)
    }

    fn suffix(&mut self, surfaces: &[&str], optional: bool) -> &mut Self {
        self.group(SlotRole::Suffix { class: None }, surfaces, optional)
    }

    fn slot(&mut self, slot: SuffixSlot, class: WordClass, optional: bool) -> &mut Self {
        self.suffix(&slot_surfaces(slot, class), optional)
    }

    fn rover(&mut self) -> &mut Self {
        self.suffix(ROVERS, true)
    }

    fn noun_suffixes(&mut self) -> &mut Self {
        for slot in [SuffixSlot::N1, SuffixSlot::N2, SuffixSlot::N3, SuffixSlot::N4, SuffixSlot::N5] {
            self.slot(slot, WordClass::Noun, true);
        }
        self
    }

    fn verb_suffixes(&mut self) -> &mut Self {
        self.suffix(&["Ha'"], true).rover();
        for slot in [
            SuffixSlot::V1,
            SuffixSlot::V2,
            SuffixSlot::V3,
            SuffixSlot::V4,
            SuffixSlot::V5,
            SuffixSlot::V6,
            SuffixSlot::V7,
            SuffixSlot::V8,
        ] {
            self.slot(slot, WordClass::Verb, true).rover();
        }
        self.slot(SuffixSlot::VQ, WordClass::Verb, true);

        let nominalizers: Vec<&str> = NOMINALIZERS.iter().map(|s| &s[1..]).collect();
        let clause_suffixes: Vec<&str> = slot_surfaces(SuffixSlot::V9, WordClass::Verb)
            .into_iter()
            .filter(|s| !nominalizers.contains(s))
            .collect();
        self.raw("(?:")
            .suffix(&clause_suffixes, false)
            .raw("|")
            .suffix(&nominalizers, false)
            .noun_suffixes()
            .raw(")?")
    }

    fn build(&self, kind: TemplateKind) -> Result<AffixTemplate, TemplateError> {
        let regex = if self.empty_lemma {
            None
        } else {
            let pattern = format!("^(?:{})$", self.pattern);
            let regex = RegexBuilder::new(&pattern)
                .size_limit(REGEX_SIZE_LIMIT)
                .build()
                .map_err(|source| TemplateError::Build { template: kind.name(), source })?;
            Some(regex)
        };
        Ok(AffixTemplate { kind, regex, roles: self.roles.clone() })
    }
}

fn noun_template(nouns: &[String]) -> Result<AffixTemplate, TemplateError> {
    TemplateBuilder::new().lemma(nouns).noun_suffixes().build(TemplateKind::Noun)
}

fn number_template() -> Result<AffixTemplate, TemplateError> {
    let mut b = TemplateBuilder::new();
    b.lemma(NUMERALS)
        .raw("(?:")
        .slot(SuffixSlot::L1, WordClass::Noun, false)
        .slot(SuffixSlot::L2, WordClass::Noun, true)
        .raw("|")
        .slot(SuffixSlot::L1, WordClass::Noun, true)
        .slot(SuffixSlot::L2, WordClass::Noun, false)
        .raw(")");
    b.build(TemplateKind::Number)
}

fn pronoun_verb_template() -> Result<AffixTemplate, TemplateError> {
    TemplateBuilder::new()
        .lemma(VERBAL_PRONOUNS)
        .verb_suffixes()
        .build(TemplateKind::PronounVerb)
}

fn verb_template(verbs: &[String]) -> Result<AffixTemplate, TemplateError> {
    TemplateBuilder::new()
        .prefix(VERB_PREFIXES)
        .lemma(verbs)
        .verb_suffixes()
        .build(TemplateKind::Verb)
}

fn stative_template(statives: &[String]) -> Result<AffixTemplate, TemplateError> {
    let case_suffixes = slot_surfaces(SuffixSlot::N5, WordClass::Noun);
    TemplateBuilder::new()
        .lemma(statives)
        .suffix(&["Ha'"], true)
        .suffix(&["be'"], true)
        .suffix(&["qu'"], true)
        .suffix(&["be'"], true)
        .group(SlotRole::Suffix { class: Some(WordClass::Noun) }, &case_suffixes, false)
        .build(TemplateKind::StativeVerb)
}

/// A lemma list plus the derived words held back from it.
#[derive(Debug, Default)]
struct LemmaList {
    words: Vec<String>,
    seen: HashSet<String>,
    derived: Vec<String>,
    derived_seen: HashSet<String>,
}

impl LemmaList {
    fn seeded(words: &[&str]) -> Self {
        let mut list = Self::default();
        for word in words {
            list.push(word, false);
        }
        list
    }

    /// Add a word; derived words and repeated surfaces go to the held-back
    /// list.
    fn push(&mut self, word: &str, derived: bool) {
        if derived || self.seen.contains(word) {
            if !self.seen.contains(word) && self.derived_seen.insert(word.to_string()) {
                self.derived.push(word.to_string());
            }
        } else {
            self.seen.insert(word.to_string());
            self.words.push(word.to_string());
        }
    }

    fn sorted(&self) -> Vec<String> {
        let mut words = self.words.clone();
        words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
        words
    }
}

/// Every compiled template for one lexicon snapshot.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: Vec<AffixTemplate>,
}

impl TemplateSet {
    /// Build the templates from a lexicon.
    ///
    /// Derived words (tagged `deriv`, seeded, or repeated surfaces) are
    /// admitted only if no first-pass template already parses them.
    pub fn build(lexicon: &Lexicon) -> Result<Self, TemplateError> {
        let mut verbs = LemmaList::default();
        let mut statives = LemmaList::seeded(SEEDED_DERIVED_VERBS);
        let mut nouns = LemmaList::default();
        for word in SEEDED_DERIVED_VERBS {
            verbs.push(word, true);
        }

        for entry in lexicon.entries() {
            if entry.is_hypothetical() || entry.is_affix() {
                continue;
            }
            let derived = entry.has_tag("deriv") || SEEDED_DERIVED_VERBS.contains(&entry.name.as_str());
            match entry.word_class() {
                WordClass::Verb => {
                    verbs.push(&entry.name, derived);
                    if entry.has_tag("is") {
                        statives.push(&entry.name, entry.has_tag("deriv"));
                    }
                }
                WordClass::Noun => nouns.push(&entry.name, derived),
                WordClass::Other => {}
            }
        }

        let first = Self::compile(&verbs.sorted(), &statives.sorted(), &nouns.sorted())?;
        for list in [&mut verbs, &mut statives, &mut nouns] {
            let admitted: Vec<String> = list
                .derived
                .iter()
                .filter(|word| !first.matches_any(word))
                .cloned()
                .collect();
            for word in admitted {
                list.seen.insert(word.clone());
                list.words.push(word);
            }
        }

        let set = Self::compile(&verbs.sorted(), &statives.sorted(), &nouns.sorted())?;
        tracing::debug!(
            verbs = verbs.words.len(),
            statives = statives.words.len(),
            nouns = nouns.words.len(),
            "compiled affix templates"
        );
        Ok(set)
    }

    fn compile(verbs: &[String], statives: &[String], nouns: &[String]) -> Result<Self, TemplateError> {
        Ok(Self {
            templates: vec![
                noun_template(nouns)?,
                number_template()?,
                pronoun_verb_template()?,
                verb_template(verbs)?,
                stative_template(statives)?,
            ],
        })
    }

    /// Templates in analysis order.
    pub fn templates(&self) -> &[AffixTemplate] {
        &self.templates
    }

    pub fn get(&self, kind: TemplateKind) -> Option<&AffixTemplate> {
        self.templates.iter().find(|t| t.kind == kind)
    }

    /// Whether any template matches the whole word.
    pub fn matches_any(&self, word: &str) -> bool {
        self.templates.iter().any(|t| t.is_match(word))
    }
}
