// Syntax feature derivation: role, agreement and the feature bits used by
// grammar rule conditions.

pub mod agreement;

use std::collections::BTreeSet;

use yajwiz_core::analysis::{Analysis, Person, Role, SyntaxInfo};
use yajwiz_core::enums::{FineTag, SuffixSlot, WordClass};

use crate::lexicon::tags::pos_has_tag;
use agreement::Voice;

/// Part id of the indefinite-subject suffix.
const INDEFINITE_SUBJECT: &str = "-lu':v";

const PLURAL_SUFFIXES: &[&str] = &["-pu'", "-Du'", "-mey"];

/// Name of the bit that holds when the token is literally `word`.
pub fn literal_bit(word: &str) -> String {
    format!("«{word}»")
}

fn role(analysis: &Analysis) -> Role {
    match analysis.broad_pos {
        WordClass::Noun => Role::NP,
        WordClass::Verb if matches!(analysis.suffix(SuffixSlot::V9), Some("-wI'" | "-ghach")) => {
            Role::NP
        }
        WordClass::Verb => Role::VP,
        WordClass::Other => Role::Other,
    }
}

/// Voice of a verb analysis: `-lu'` turns the prefix into an object marker.
pub fn voice(analysis: &Analysis) -> Voice {
    if analysis.has_part(INDEFINITE_SUBJECT) {
        Voice::NonSubject
    } else {
        Voice::Subject
    }
}

fn verb_agreement(analysis: &Analysis, info: &mut SyntaxInfo) {
    let voice = voice(analysis);

    if analysis.prefix.is_some() || voice == Voice::NonSubject {
        let prefix = analysis.prefix.as_deref().unwrap_or("-");
        // Unknown combinations leave the sets empty.
        if let Some(row) = agreement::lookup(prefix, voice) {
            info.subject_persons = row.subject.iter().copied().collect();
            info.subject_number = row.subject_number;
            info.object_persons = row.object.iter().copied().collect();
            info.object_number = row.object_number;
        }
    } else if matches!(analysis.fine_pos, FineTag::StativeVerb | FineTag::IntransitiveVerb) {
        info.subject_persons = BTreeSet::from([Person::Third]);
        info.object_persons = BTreeSet::from([Person::Zero]);
    } else {
        info.subject_persons = BTreeSet::from([Person::Third]);
        info.object_persons = BTreeSet::from([Person::Zero, Person::Third]);
    }
}

fn noun_plurality(analysis: &Analysis) -> Option<bool> {
    if analysis
        .suffix(SuffixSlot::N2)
        .is_some_and(|s| PLURAL_SUFFIXES.contains(&s))
    {
        Some(true)
    } else if pos_has_tag(&analysis.source_tag, "inhps") || pos_has_tag(&analysis.source_tag, "inhpl")
    {
        Some(false)
    } else {
        None
    }
}

fn bits(analysis: &Analysis, info: &SyntaxInfo) -> BTreeSet<String> {
    let mut bits = BTreeSet::new();
    bits.insert(analysis.fine_pos.as_str().to_string());
    bits.insert(analysis.broad_pos.as_str().to_string());
    bits.insert(info.role.as_str().to_string());
    bits.insert(literal_bit(&analysis.word));

    if info.role == Role::VP {
        for (name, persons, number) in [
            ("Subj", &info.subject_persons, info.subject_number),
            ("Obj", &info.object_persons, info.object_number),
        ] {
            for person in persons {
                bits.insert(format!("{name}{person}"));
                if let Some(number) = number {
                    bits.insert(format!("{name}{person}{number}"));
                }
            }
        }
    }

    if info.role == Role::NP {
        match info.plural {
            Some(true) => {
                bits.insert("Plur".to_string());
            }
            Some(false) => {
                bits.insert("Sing".to_string());
            }
            None => {}
        }
    }

    for part in &analysis.parts {
        bits.insert(part.clone());
        if let Some((surface, _)) = part.split_once(':') {
            bits.insert(surface.to_string());
        }
    }
    for (slot, text) in &analysis.suffixes {
        bits.insert(slot.as_str().to_string());
        bits.insert(text.clone());
    }
    if let Some(prefix) = &analysis.prefix {
        bits.insert(prefix.clone());
    }
    bits
}

/// Derive the syntax features of an analysis.
///
/// Never fails: a prefix and voice pair outside the agreement table yields
/// empty person sets.
pub fn derive_syntax_info(analysis: &Analysis) -> SyntaxInfo {
    let mut info = SyntaxInfo::new(role(analysis));
    match info.role {
        Role::VP => verb_agreement(analysis, &mut info),
        Role::NP => info.plural = noun_plurality(analysis),
        Role::Other => {}
    }
    info.bits = bits(analysis, &info);
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verb(prefix: Option<&str>, fine: FineTag) -> Analysis {
        let mut a = Analysis::new("X", WordClass::Verb);
        a.fine_pos = fine;
        a.prefix = prefix.map(str::to_string);
        a
    }

    #[test]
    fn prefixed_verb_uses_agreement_row() {
        let mut a = verb(Some("vI-"), FineTag::TransitiveVerb);
        a.word = "vISov".to_string();
        a.parts = vec!["vI-:v".to_string(), "Sov:v".to_string()];
        let info = derive_syntax_info(&a);
        assert_eq!(info.role, Role::VP);
        assert_eq!(info.subject_persons, BTreeSet::from([Person::First]));
        assert!(info.has_bit("Subj1"));
        assert!(info.has_bit("Subj1Sing"));
        assert!(info.has_bit("Obj3"));
        assert!(!info.has_bit("Obj3Sing"));
        assert!(info.has_bit("vI-"));
        assert!(info.has_bit("vI-:v"));
        assert!(info.has_bit("Sov"));
        assert!(info.has_bit("«vISov»"));
        assert!(info.has_bit("VT"));
        assert!(info.has_bit("VP"));
    }

    #[test]
    fn unprefixed_intransitive_verb_has_no_object() {
        let info = derive_syntax_info(&verb(None, FineTag::IntransitiveVerb));
        assert_eq!(info.subject_persons, BTreeSet::from([Person::Third]));
        assert_eq!(info.object_persons, BTreeSet::from([Person::Zero]));
    }

    #[test]
    fn unprefixed_transitive_verb_may_have_object() {
        let info = derive_syntax_info(&verb(None, FineTag::TransitiveVerb));
        assert_eq!(info.object_persons, BTreeSet::from([Person::Zero, Person::Third]));
        assert!(info.has_bit("Obj3"));
        assert!(info.has_bit("Obj0"));
    }

    #[test]
    fn indefinite_subject_switches_voice() {
        let mut a = verb(None, FineTag::TransitiveVerb);
        a.parts = vec!["Sov:v".to_string(), INDEFINITE_SUBJECT.to_string()];
        a.suffixes.insert(SuffixSlot::V5, "-lu'".to_string());
        let info = derive_syntax_info(&a);
        assert_eq!(info.subject_persons, BTreeSet::from([Person::Zero]));
        assert!(info.has_bit("Obj3Sing"));
        assert!(info.has_bit("-lu'"));
        assert!(info.has_bit("V5"));
    }

    #[test]
    fn unknown_prefix_voice_pair_gives_empty_sets() {
        let mut a = verb(Some("qa-"), FineTag::TransitiveVerb);
        a.parts = vec![INDEFINITE_SUBJECT.to_string()];
        let info = derive_syntax_info(&a);
        assert!(info.subject_persons.is_empty());
        assert!(info.object_persons.is_empty());
        assert_eq!(info.subject_number, None);
    }

    #[test]
    fn every_prefix_and_voice_derives() {
        for prefix in crate::morphology::tables::VERB_PREFIXES {
            for lu in [false, true] {
                let mut a = verb(Some(format!("{prefix}-").as_str()), FineTag::Verb);
                if lu {
                    a.parts.push(INDEFINITE_SUBJECT.to_string());
                }
                let info = derive_syntax_info(&a);
                assert_eq!(info.role, Role::VP);
            }
        }
    }

    #[test]
    fn nominalized_verb_is_noun_phrase() {
        let mut a = verb(None, FineTag::TransitiveVerb);
        a.suffixes.insert(SuffixSlot::V9, "-wI'".to_string());
        a.suffixes.insert(SuffixSlot::N2, "-pu'".to_string());
        let info = derive_syntax_info(&a);
        assert_eq!(info.role, Role::NP);
        assert_eq!(info.plural, Some(true));
        assert!(info.has_bit("Plur"));
        assert!(!info.has_bit("Subj3"));
    }

    #[test]
    fn inherently_plural_noun_is_not_marked_plural() {
        let mut a = Analysis::new("ghom", WordClass::Noun);
        a.source_tag = "n:inhpl".to_string();
        let info = derive_syntax_info(&a);
        assert_eq!(info.plural, Some(false));
        assert!(info.has_bit("Sing"));
        assert!(info.has_bit("NP"));
    }

    #[test]
    fn other_words_have_no_agreement() {
        let mut a = Analysis::new("DaH", WordClass::Other);
        a.fine_pos = FineTag::Adverbial;
        a.parts = vec!["DaH:adv".to_string()];
        let info = derive_syntax_info(&a);
        assert_eq!(info.role, Role::Other);
        assert!(info.has_bit("ADV"));
        assert!(info.has_bit("OTHER"));
        assert!(info.has_bit("DaH:adv"));
        assert!(info.has_bit("DaH"));
        assert!(!info.has_bit("Plur"));
    }
}
