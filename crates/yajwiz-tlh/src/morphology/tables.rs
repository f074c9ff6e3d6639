// Affix tables for Klingon morphology

use yajwiz_core::enums::{SuffixSlot, WordClass};

use WordClass::{Noun, Verb};

/// Suffix classification: `(surface with leading dash, class) -> slot`.
///
/// Within a slot the rows are in template alternation order.
pub const SUFFIXES: &[(&str, WordClass, SuffixSlot)] = &[
    ("-'a'", Noun, SuffixSlot::N1),
    ("-Hom", Noun, SuffixSlot::N1),
    ("-oy", Noun, SuffixSlot::N1),
    ("-'oy", Noun, SuffixSlot::N1),
    ("-pu'", Noun, SuffixSlot::N2),
    ("-Du'", Noun, SuffixSlot::N2),
    ("-mey", Noun, SuffixSlot::N2),
    ("-qoq", Noun, SuffixSlot::N3),
    ("-Hey", Noun, SuffixSlot::N3),
    ("-na'", Noun, SuffixSlot::N3),
    ("-wI'", Noun, SuffixSlot::N4),
    ("-ma'", Noun, SuffixSlot::N4),
    ("-lI'", Noun, SuffixSlot::N4),
    ("-ra'", Noun, SuffixSlot::N4),
    ("-wIj", Noun, SuffixSlot::N4),
    ("-maj", Noun, SuffixSlot::N4),
    ("-lIj", Noun, SuffixSlot::N4),
    ("-raj", Noun, SuffixSlot::N4),
    ("-Daj", Noun, SuffixSlot::N4),
    ("-chaj", Noun, SuffixSlot::N4),
    ("-vam", Noun, SuffixSlot::N4),
    ("-vetlh", Noun, SuffixSlot::N4),
    ("-Daq", Noun, SuffixSlot::N5),
    ("-vo'", Noun, SuffixSlot::N5),
    ("-mo'", Noun, SuffixSlot::N5),
    ("-vaD", Noun, SuffixSlot::N5),
    ("-'e'", Noun, SuffixSlot::N5),
    ("-Ha'", Verb, SuffixSlot::VR),
    ("-be'", Verb, SuffixSlot::VR),
    ("-qu'", Verb, SuffixSlot::VR),
    ("-'egh", Verb, SuffixSlot::V1),
    ("-chuq", Verb, SuffixSlot::V1),
    ("-nIS", Verb, SuffixSlot::V2),
    ("-qang", Verb, SuffixSlot::V2),
    ("-rup", Verb, SuffixSlot::V2),
    ("-beH", Verb, SuffixSlot::V2),
    ("-vIp", Verb, SuffixSlot::V2),
    ("-choH", Verb, SuffixSlot::V3),
    ("-qa'", Verb, SuffixSlot::V3),
    ("-moH", Verb, SuffixSlot::V4),
    ("-lu'", Verb, SuffixSlot::V5),
    ("-laH", Verb, SuffixSlot::V5),
    ("-chu'", Verb, SuffixSlot::V6),
    ("-bej", Verb, SuffixSlot::V6),
    ("-ba'", Verb, SuffixSlot::V6),
    ("-law'", Verb, SuffixSlot::V6),
    ("-pu'", Verb, SuffixSlot::V7),
    ("-ta'", Verb, SuffixSlot::V7),
    ("-taH", Verb, SuffixSlot::V7),
    ("-lI'", Verb, SuffixSlot::V7),
    ("-neS", Verb, SuffixSlot::V8),
    ("-Qo'", Verb, SuffixSlot::VQ),
    ("-DI'", Verb, SuffixSlot::V9),
    ("-chugh", Verb, SuffixSlot::V9),
    ("-pa'", Verb, SuffixSlot::V9),
    ("-vIS", Verb, SuffixSlot::V9),
    ("-mo'", Verb, SuffixSlot::V9),
    ("-bogh", Verb, SuffixSlot::V9),
    ("-meH", Verb, SuffixSlot::V9),
    ("-'a'", Verb, SuffixSlot::V9),
    ("-jaj", Verb, SuffixSlot::V9),
    ("-ghach", Verb, SuffixSlot::V9),
    ("-wI'", Verb, SuffixSlot::V9),
    ("-maH", Noun, SuffixSlot::L1),
    ("-vatlh", Noun, SuffixSlot::L1),
    ("-SaD", Noun, SuffixSlot::L1),
    ("-SanID", Noun, SuffixSlot::L1),
    ("-netlh", Noun, SuffixSlot::L1),
    ("-bIp", Noun, SuffixSlot::L1),
    ("-'uy'", Noun, SuffixSlot::L1),
    ("-Saghan", Noun, SuffixSlot::L1),
    ("-maH'uy'", Noun, SuffixSlot::L1),
    ("-vatlhbIp", Noun, SuffixSlot::L1),
    ("-vatlh'uy'", Noun, SuffixSlot::L1),
    ("-SaDbIp", Noun, SuffixSlot::L1),
    ("-SanIDbIp", Noun, SuffixSlot::L1),
    ("-DIch", Noun, SuffixSlot::L2),
    ("-logh", Noun, SuffixSlot::L2),
    ("-leS", Noun, SuffixSlot::L2),
    ("-Hu'", Noun, SuffixSlot::L2),
];

/// Verb suffixes that turn the verb into a noun; later suffixes are
/// classified as noun suffixes.
pub const NOMINALIZERS: &[&str] = &["-wI'", "-ghach"];

/// Rovers: particles that may follow many suffixes without a slot of their
/// own.
pub const ROVERS: &[&str] = &["be'", "qu'"];

/// Verb prefixes in template alternation order. The empty prefix is tried
/// first.
pub const VERB_PREFIXES: &[&str] = &[
    "HI", "gho", "yI", "tI", "pe", "qa", "Sa", "vI", "jI", "pI", "re", "DI", "wI", "ma", "cho",
    "ju", "Da", "bI", "tu", "che", "bo", "Su", "mu", "nu", "Du", "lI", "nI", "lu",
];

/// Pronouns that may be used as verbs ("to be").
pub const VERBAL_PRONOUNS: &[&str] = &["jIH", "maH", "SoH", "tlhIH", "ghaH", "chaH", "'oH", "bIH"];

/// Numerals that take number-forming suffixes.
pub const NUMERALS: &[&str] = &["wa'", "cha'", "wej", "loS", "vagh", "jav", "Soch", "chorgh", "Hut"];

/// Derived forms listed in the dictionary that are seeded as derived verbs
/// and as stative lemmas.
pub const SEEDED_DERIVED_VERBS: &[&str] = &["lo'laH", "lo'laHbe'"];

/// Classify a suffix given with its leading dash.
pub fn suffix_slot(surface: &str, class: WordClass) -> Option<SuffixSlot> {
    SUFFIXES
        .iter()
        .find(|(s, c, _)| *s == surface && *c == class)
        .map(|&(_, _, slot)| slot)
}

/// Surfaces (without the leading dash) of a slot, in alternation order.
pub fn slot_surfaces(slot: SuffixSlot, class: WordClass) -> Vec<&'static str> {
    SUFFIXES
        .iter()
        .filter(|&&(_, c, s)| s == slot && c == class)
        .map(|&(surface, _, _)| &surface[1..])
        .collect()
}

/// Whether the verb suffix turns the word into a noun.
pub fn is_nominalizer(surface: &str, class: WordClass) -> bool {
    class == Verb && NOMINALIZERS.contains(&surface)
}

pub fn is_rover(text: &str) -> bool {
    ROVERS.contains(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_suffixes_by_class() {
        assert_eq!(suffix_slot("-pu'", Noun), Some(SuffixSlot::N2));
        assert_eq!(suffix_slot("-pu'", Verb), Some(SuffixSlot::V7));
        assert_eq!(suffix_slot("-wI'", Noun), Some(SuffixSlot::N4));
        assert_eq!(suffix_slot("-wI'", Verb), Some(SuffixSlot::V9));
        assert_eq!(suffix_slot("-Daq", Verb), None);
        assert_eq!(suffix_slot("pu'", Noun), None);
    }

    #[test]
    fn slot_surfaces_keep_alternation_order() {
        assert_eq!(slot_surfaces(SuffixSlot::N1, Noun), vec!["'a'", "Hom", "oy", "'oy"]);
        assert_eq!(slot_surfaces(SuffixSlot::V5, Verb), vec!["lu'", "laH"]);
        assert_eq!(slot_surfaces(SuffixSlot::L2, Noun), vec!["DIch", "logh", "leS", "Hu'"]);
        assert!(slot_surfaces(SuffixSlot::N1, Verb).is_empty());
    }

    #[test]
    fn nominalizers_only_apply_to_verbs() {
        assert!(is_nominalizer("-ghach", Verb));
        assert!(is_nominalizer("-wI'", Verb));
        assert!(!is_nominalizer("-wI'", Noun));
        assert!(!is_nominalizer("-pu'", Verb));
    }

    #[test]
    fn rovers() {
        assert!(is_rover("be'"));
        assert!(is_rover("qu'"));
        assert!(!is_rover("Ha'"));
        assert!(!is_rover("-be'"));
    }

    #[test]
    fn every_slot_has_surfaces() {
        for &slot in &SuffixSlot::ALL {
            let nouns = slot_surfaces(slot, Noun);
            let verbs = slot_surfaces(slot, Verb);
            assert!(!nouns.is_empty() || !verbs.is_empty(), "{slot} has no suffixes");
        }
    }
}
