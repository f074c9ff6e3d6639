// Word-level grammaticality checks and the combined POS tag

use yajwiz_core::analysis::Analysis;
use yajwiz_core::enums::{FineTag, SuffixSlot, WordClass};

use crate::lexicon::tags::pos_has_tag;

pub const ILLEGAL_GENDER_SUFFIX: &str = "ILLEGAL PLURAL OR POSSESSIVE SUFFIX";
pub const ILLEGAL_LU_PREFIX: &str = "ILLEGAL PREFIX WITH -lu'";
pub const ILLEGAL_STATIVE_PREFIX: &str = "ILLEGAL SUFFIX WITH INTRANSITIVE VERB";
pub const BARE_GHACH: &str = "-ghach WITHOUT OTHER SUFFIX";
pub const JAJ_WITH_ASPECT: &str = "-jaj WITH ASPECT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
    Being,
    BodyPart,
    Other,
}

/// Plural and possessive suffixes reserved for one noun gender.
const GENDERED_SUFFIXES: &[(Gender, &[&str])] = &[
    (Gender::Being, &["-wI':n", "-lI':n", "-ma':n", "-ra':n", "-pu':n"]),
    (Gender::BodyPart, &["-Du':n"]),
];

/// Nouns exempt from the gender check.
const GENDERLESS_LEMMAS: &[&str] = &["qor", "chuD"];

/// Nouns that take being suffixes regardless of their tags.
const BEING_LEMMAS: &[&str] = &["qorDu'", "latlh"];

/// Suffixes that require another suffix in the same word.
const SUFFIX_REQUIREMENTS: &[(&str, &str)] = &[("-vIS:v", "-taH:v")];

const LU_PREFIXES: &[&str] = &["vI-", "Da-", "wI-", "bo-", "lu-"];

const NO_OBJECT_PREFIXES: &[&str] = &["yI-", "pe-", "jI-", "bI-", "ma-", "Su-"];

const GHACH_LEMMAS: &[&str] = &["lo'laH", "lo'laHbe'"];

fn surface(part: &str) -> &str {
    part.split_once(':').map_or(part, |(s, _)| s)
}

fn gender(analysis: &Analysis) -> Gender {
    if BEING_LEMMAS.contains(&analysis.lemma.as_str()) {
        Gender::Being
    } else if pos_has_tag(&analysis.source_tag, "body") {
        Gender::BodyPart
    } else if pos_has_tag(&analysis.source_tag, "being") || pos_has_tag(&analysis.source_tag, "name") {
        Gender::Being
    } else {
        Gender::Other
    }
}

fn check_gender(analysis: &Analysis) -> Option<String> {
    if analysis.broad_pos != WordClass::Noun || GENDERLESS_LEMMAS.contains(&analysis.lemma.as_str()) {
        return None;
    }
    let own = gender(analysis);
    let illegal = GENDERED_SUFFIXES
        .iter()
        .filter(|(g, _)| *g != own)
        .flat_map(|(_, parts)| parts.iter())
        .any(|part| analysis.has_part(part));
    illegal.then(|| ILLEGAL_GENDER_SUFFIX.to_string())
}

fn check_requirements(analysis: &Analysis) -> Option<String> {
    SUFFIX_REQUIREMENTS
        .iter()
        .find(|(suffix, required)| analysis.has_part(suffix) && !analysis.has_part(required))
        .map(|(suffix, required)| format!("{} WITHOUT {}", surface(suffix), surface(required)))
}

fn prefix_allowed(analysis: &Analysis, allowed: &[&str]) -> bool {
    analysis.prefix.as_deref().is_none_or(|p| allowed.contains(&p))
}

fn check_lu_prefix(analysis: &Analysis) -> Option<String> {
    (analysis.has_part("-lu':v") && !prefix_allowed(analysis, LU_PREFIXES))
        .then(|| ILLEGAL_LU_PREFIX.to_string())
}

fn check_stative_prefix(analysis: &Analysis) -> Option<String> {
    (analysis.fine_pos == FineTag::StativeVerb
        && !prefix_allowed(analysis, NO_OBJECT_PREFIXES)
        && !analysis.has_part("-moH:v"))
    .then(|| ILLEGAL_STATIVE_PREFIX.to_string())
}

fn check_bare_ghach(analysis: &Analysis) -> Option<String> {
    if GHACH_LEMMAS.contains(&analysis.lemma.as_str()) {
        return None;
    }
    let ghach = analysis.parts.iter().position(|p| p == "-ghach:v")?;
    let lemma = analysis
        .parts
        .iter()
        .position(|p| *p == analysis.entry_id)
        .or_else(|| analysis.parts.iter().position(|p| *p == analysis.lemma))?;
    (ghach < lemma + 2).then(|| BARE_GHACH.to_string())
}

fn check_jaj_aspect(analysis: &Analysis) -> Option<String> {
    (analysis.has_part("-jaj:v") && analysis.suffix(SuffixSlot::V7).is_some())
        .then(|| JAJ_WITH_ASPECT.to_string())
}

/// Checks in priority order; the first failing check gives the reason.
const CHECKS: &[fn(&Analysis) -> Option<String>] = &[
    check_gender,
    check_requirements,
    check_lu_prefix,
    check_stative_prefix,
    check_bare_ghach,
    check_jaj_aspect,
];

/// Reason the analysis is ungrammatical, if any.
pub fn ungrammatical_reason(analysis: &Analysis) -> Option<String> {
    CHECKS.iter().find_map(|check| check(analysis))
}

/// Fine tag followed by `.suffix` for each grammatical suffix present.
pub fn combined_pos(analysis: &Analysis) -> String {
    let mut pos = analysis.fine_pos.as_str().to_string();
    for slot in [SuffixSlot::V9, SuffixSlot::N5, SuffixSlot::L2] {
        if let Some(text) = analysis.suffix(slot) {
            pos.push('.');
            pos.push_str(text.trim_start_matches('-'));
        }
    }
    pos
}
