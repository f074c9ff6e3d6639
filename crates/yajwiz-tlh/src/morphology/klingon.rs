// Klingon morphological analyzer.
//
// Matches a word against every affix template and walks the captured slots
// into analyses. Only the lemma slot reads the word index; one analysis is
// produced per homograph entry.

use std::collections::BTreeSet;
use std::sync::Arc;

use hashbrown::HashSet;
use yajwiz_core::analysis::Analysis;
use yajwiz_core::character::ends_in_vowel;
use yajwiz_core::enums::WordClass;

use super::Analyzer;
use super::checks::{combined_pos, ungrammatical_reason};
use super::tables::{is_nominalizer, is_rover, suffix_slot};
use super::template::{AffixTemplate, SlotMatch, SlotRole, TemplateError, TemplateKind, TemplateSet};
use crate::lexicon::{LexicalEntry, Lexicon, WordIndex};
use crate::syntax::derive_syntax_info;

/// Analyzer over one lexicon snapshot: the lexicon, its word index and the
/// templates compiled from it.
#[derive(Debug, Clone)]
pub struct KlingonAnalyzer {
    lexicon: Arc<Lexicon>,
    index: WordIndex,
    templates: TemplateSet,
}

impl KlingonAnalyzer {
    /// Build the index and templates for a lexicon.
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self, TemplateError> {
        let index = WordIndex::build(&lexicon);
        let templates = TemplateSet::build(&lexicon)?;
        Ok(Self { lexicon, index, templates })
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Analyses of a word before post-processing, in template order.
    fn raw_analyses(&self, word: &str) -> Vec<Analysis> {
        let mut analyses: Vec<Analysis> = Vec::new();
        for template in self.templates.templates() {
            if template.kind() == TemplateKind::PronounVerb
                && !(analyses.is_empty() || analyses[0].parts.len() > 1)
            {
                continue;
            }
            self.analyze_with(template, word, &mut analyses);
        }

        for entry in self.index.lookup(word, WordClass::Other) {
            analyses.push(other_analysis(word, entry));
        }
        analyses
    }

    fn analyze_with(&self, template: &AffixTemplate, word: &str, out: &mut Vec<Analysis>) {
        let Some(slots) = template.captures(word) else {
            return;
        };
        if !is_euphonic(word, &slots) {
            return;
        }

        let kind = template.kind();
        let mut class = kind.lemma_class();
        let mut frontier = vec![Analysis::new(word, class)];
        let mut i = 0;
        while i < slots.len() {
            let slot = slots[i];
            match slot.role {
                SlotRole::Prefix => {
                    let prefix = format!("{}-", slot.text);
                    let part = format!("{prefix}:{}", class.key());
                    for analysis in &mut frontier {
                        analysis.prefix = Some(prefix.clone());
                        analysis.parts.push(part.clone());
                    }
                }
                SlotRole::Lemma => {
                    frontier = self.expand_lemma(frontier, slot.text, class, kind.required_tag());
                    class = kind.inflection_class();
                }
                SlotRole::Suffix { class: fixed } => {
                    if let Some(fixed) = fixed {
                        class = fixed;
                    }
                    let surface = format!("-{}", slot.text);
                    let mut text = surface.clone();
                    if let Some(rover) = slots.get(i + 1).filter(|next| is_rover(next.text)) {
                        text.push_str(rover.text);
                        i += 1;
                    }
                    let part = format!("{surface}:{}", class.key());
                    let slot_name = suffix_slot(&surface, class);
                    for analysis in &mut frontier {
                        if let Some(slot_name) = slot_name {
                            analysis.suffixes.insert(slot_name, text.clone());
                        }
                        analysis.parts.push(part.clone());
                    }
                    if is_nominalizer(&surface, class) {
                        class = WordClass::Noun;
                    }
                }
            }
            i += 1;
        }
        out.extend(frontier);
    }

    /// Branch every partial analysis once per homograph of the lemma.
    fn expand_lemma(
        &self,
        frontier: Vec<Analysis>,
        surface: &str,
        class: WordClass,
        required_tag: Option<&str>,
    ) -> Vec<Analysis> {
        let entries = self.index.lookup(surface, class);
        let mut next = Vec::with_capacity(frontier.len() * entries.len().max(1));
        for mut analysis in frontier {
            analysis.lemma = surface.to_string();
            if entries.is_empty() {
                analysis.parts.push(surface.to_string());
                next.push(analysis);
                continue;
            }
            for entry in entries {
                if required_tag.is_some_and(|tag| !entry.has_tag(tag)) {
                    continue;
                }
                let mut branch = analysis.clone();
                branch.parts.push(entry.id.clone());
                branch.fine_pos = entry.fine_tag();
                branch.source_tag = entry.part_of_speech.clone();
                branch.entry_id = entry.id.clone();
                next.push(branch);
            }
        }
        next
    }

    /// Raw segmentations of the word by every matching template.
    ///
    /// Prefixes are written `x-` and suffixes `-x`; rovers are kept as
    /// separate morphemes.
    pub fn split_to_morphemes(&self, word: &str) -> BTreeSet<Vec<String>> {
        let mut segmentations = BTreeSet::new();
        for template in self.templates.templates() {
            let Some(slots) = template.captures(word) else {
                continue;
            };
            if !is_euphonic(word, &slots) {
                continue;
            }
            let morphemes = slots
                .iter()
                .map(|slot| match slot.role {
                    SlotRole::Prefix => format!("{}-", slot.text),
                    SlotRole::Lemma => slot.text.to_string(),
                    SlotRole::Suffix { .. } => format!("-{}", slot.text),
                })
                .collect();
            segmentations.insert(morphemes);
        }
        segmentations
    }
}

impl Analyzer for KlingonAnalyzer {
    fn analyze(&self, word: &str) -> Vec<Analysis> {
        let mut analyses = self.raw_analyses(word);
        for analysis in &mut analyses {
            analysis.combined_pos = combined_pos(analysis);
            analysis.ungrammatical = ungrammatical_reason(analysis);
            analysis.syntax_info = Some(derive_syntax_info(analysis));
        }

        let mut seen = HashSet::with_capacity(analyses.len());
        analyses.retain(|a| seen.insert(a.clone()));
        analyses
    }
}

fn other_analysis(word: &str, entry: &LexicalEntry) -> Analysis {
    let mut analysis = Analysis::new(word, WordClass::Other);
    analysis.lemma = entry.name.clone();
    analysis.fine_pos = entry.fine_tag();
    analysis.source_tag = entry.part_of_speech.clone();
    analysis.entry_id = entry.id.clone();
    analysis.parts.push(entry.id.clone());
    analysis
}

/// `-oy` follows only consonants and `-'oy` only vowels.
fn is_euphonic(word: &str, slots: &[SlotMatch<'_>]) -> bool {
    slots.iter().all(|slot| {
        let after_vowel = match (slot.role, slot.text) {
            (SlotRole::Suffix { .. }, "oy") => false,
            (SlotRole::Suffix { .. }, "'oy") => true,
            _ => return true,
        };
        ends_in_vowel(&word[..slot.start]) == after_vowel
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use yajwiz_core::analysis::Role;
    use yajwiz_core::enums::{FineTag, SuffixSlot};

    fn analyzer() -> KlingonAnalyzer {
        let lexicon = Lexicon::new([
            LexicalEntry::new("legh:v", "legh", "v:t_c"),
            LexicalEntry::new("ghor:v:1", "ghor", "v:t"),
            LexicalEntry::new("ghor:v:2", "ghor", "v:t"),
            LexicalEntry::new("tIn:v", "tIn", "v:is"),
            LexicalEntry::new("Suv:v", "Suv", "v:i"),
            LexicalEntry::new("Dun:v:1", "Dun", "v:is"),
            LexicalEntry::new("Dun:v:2", "Dun", "v:t"),
            LexicalEntry::new("Duj:n", "Duj", "n"),
            LexicalEntry::new("puq:n", "puq", "n:being"),
            LexicalEntry::new("ghop:n", "ghop", "n:body"),
            LexicalEntry::new("jIH:n", "jIH", "n:pro"),
            LexicalEntry::new("wej:n", "wej", "n:num"),
            LexicalEntry::new("DaH:adv", "DaH", "adv"),
            LexicalEntry::new("ro:n", "ro", "n:body"),
        ]);
        KlingonAnalyzer::new(Arc::new(lexicon)).unwrap()
    }

    #[test]
    fn prefixed_verb_with_suffixes() {
        let analyses = analyzer().analyze("vIleghpu'");
        assert_eq!(analyses.len(), 1);
        let a = &analyses[0];
        assert_eq!(a.lemma, "legh");
        assert_eq!(a.broad_pos, WordClass::Verb);
        assert_eq!(a.fine_pos, FineTag::TransitiveVerb);
        assert_eq!(a.prefix.as_deref(), Some("vI-"));
        assert_eq!(a.parts, vec!["vI-:v", "legh:v", "-pu':v"]);
        assert_eq!(a.suffix(SuffixSlot::V7), Some("-pu'"));
        assert_eq!(a.combined_pos, "VT");
        assert!(a.has_bit("V7"));
        assert!(a.has_bit("Subj1"));
    }

    #[test]
    fn rover_is_folded_into_preceding_suffix() {
        let analyses = analyzer().analyze("leghpu'be'");
        let a = &analyses[0];
        assert_eq!(a.suffix(SuffixSlot::V7), Some("-pu'be'"));
        assert_eq!(a.parts, vec!["legh:v", "-pu':v"]);
    }

    #[test]
    fn rover_after_lemma_is_its_own_suffix() {
        let analyses = analyzer().analyze("Suvbe'");
        assert_eq!(analyses[0].suffix(SuffixSlot::VR), Some("-be'"));
        assert_eq!(analyses[0].parts, vec!["Suv:v", "-be':v"]);
    }

    #[test]
    fn homographs_branch() {
        let analyses = analyzer().analyze("ghor");
        let ids: Vec<&str> = analyses.iter().map(|a| a.entry_id.as_str()).collect();
        assert_eq!(ids, vec!["ghor:v:1", "ghor:v:2"]);
    }

    #[test]
    fn nominalizer_switches_to_noun_suffixes() {
        let analyses = analyzer().analyze("leghwI'pu'");
        let a = &analyses[0];
        assert_eq!(a.parts, vec!["legh:v", "-wI':v", "-pu':n"]);
        assert_eq!(a.suffix(SuffixSlot::V9), Some("-wI'"));
        assert_eq!(a.suffix(SuffixSlot::N2), Some("-pu'"));
        assert_eq!(a.combined_pos, "VT.wI'");
        assert_eq!(a.syntax_info.as_ref().unwrap().role, Role::NP);
    }

    #[test]
    fn stative_verb_with_case_suffix() {
        let analyses = analyzer().analyze("tInDaq");
        assert_eq!(analyses.len(), 1);
        let a = &analyses[0];
        assert_eq!(a.parts, vec!["tIn:v", "-Daq:n"]);
        assert_eq!(a.suffix(SuffixSlot::N5), Some("-Daq"));
        assert_eq!(a.combined_pos, "VS.Daq");
    }

    #[test]
    fn non_stative_verb_takes_no_case_suffix() {
        assert!(analyzer().analyze("leghDaq").is_empty());
    }

    #[test]
    fn stative_template_skips_non_stative_homographs() {
        let analyses = analyzer().analyze("DunDaq");
        let ids: Vec<&str> = analyses.iter().map(|a| a.entry_id.as_str()).collect();
        assert_eq!(ids, vec!["Dun:v:1"]);
    }

    #[test]
    fn number_words() {
        let analyses = analyzer().analyze("wejDIch");
        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].fine_pos, FineTag::Numeral);
        assert_eq!(analyses[0].combined_pos, "NUM.DIch");
    }

    #[test]
    fn pronoun_as_verb() {
        let analyses = analyzer().analyze("jIHbe'");
        assert_eq!(analyses.len(), 1);
        let a = &analyses[0];
        assert_eq!(a.broad_pos, WordClass::Noun);
        assert_eq!(a.parts, vec!["jIH:n", "-be':v"]);
        assert_eq!(a.suffix(SuffixSlot::VR), Some("-be'"));
    }

    #[test]
    fn plain_pronoun_is_not_a_pronoun_verb() {
        let analyses = analyzer().analyze("jIH");
        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].parts, vec!["jIH:n"]);
    }

    #[test]
    fn other_class_words() {
        let analyses = analyzer().analyze("DaH");
        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].broad_pos, WordClass::Other);
        assert_eq!(analyses[0].parts, vec!["DaH:adv"]);
        assert_eq!(analyses[0].combined_pos, "ADV");
    }

    #[test]
    fn unknown_word_has_no_analyses() {
        assert!(analyzer().analyze("qaStaHvIS").is_empty());
    }

    #[test]
    fn body_part_with_being_suffix_is_flagged() {
        let analyses = analyzer().analyze("ghopwI'");
        assert!(!analyses.is_empty());
        for a in &analyses {
            assert_eq!(a.ungrammatical.as_deref(), Some("ILLEGAL PLURAL OR POSSESSIVE SUFFIX"));
        }
    }

    #[test]
    fn oy_euphony() {
        let a = analyzer();
        assert_eq!(a.analyze("puqoy").len(), 1);
        assert!(a.analyze("puq'oy").is_empty());
        assert_eq!(a.analyze("ro'oy").len(), 1);
        assert!(a.analyze("rooy").is_empty());
    }

    #[test]
    fn results_are_deduplicated() {
        let analyses = analyzer().analyze("Duj");
        assert_eq!(analyses.len(), 1);
    }

    #[test]
    fn split_to_morphemes_marks_affixes() {
        let split = analyzer().split_to_morphemes("vIleghpu'be'");
        let expected: Vec<String> = ["vI-", "legh", "-pu'", "-be'"].iter().map(|s| s.to_string()).collect();
        assert!(split.contains(&expected));
        assert_eq!(split.len(), 1);
    }

    #[test]
    fn split_to_morphemes_of_unknown_word_is_empty() {
        assert!(analyzer().split_to_morphemes("xyz").is_empty());
    }
}
