// Part-of-speech tag parsing and the fine tag decision table

use std::collections::BTreeSet;

use yajwiz_core::enums::{FineTag, WordClass};

/// Parse a lexicon part-of-speech string into its tag set.
///
/// `"v:t_c,is"` yields `{"v", "t_c", "is"}`: the simple class before the
/// colon plus every comma-separated tag after it.
pub fn parse_pos(pos: &str) -> BTreeSet<String> {
    let (simple, rest) = match pos.split_once(':') {
        Some((simple, rest)) => (simple, Some(rest)),
        None => (pos, None),
    };

    let mut tags = BTreeSet::new();
    tags.insert(simple.to_string());
    if let Some(rest) = rest {
        tags.extend(
            rest.split(',')
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        );
    }
    tags
}

/// Returns `true` if `tag` is one of the tags of the raw part-of-speech
/// string.
pub fn pos_has_tag(pos: &str, tag: &str) -> bool {
    let (simple, rest) = pos.split_once(':').unwrap_or((pos, ""));
    simple == tag || rest.split(',').any(|t| t == tag)
}

/// Broad class of an entry with the given tags, used as the word index key.
pub fn word_class(tags: &BTreeSet<String>) -> WordClass {
    if tags.contains("v") {
        WordClass::Verb
    } else if tags.contains("n") {
        WordClass::Noun
    } else {
        WordClass::Other
    }
}

/// One row of the fine tag decision table.
///
/// A row matches when every tag in `all` is present and, if `any` or `names`
/// is non-empty, at least one tag in `any` is present or the entry name is
/// one of `names`.
struct FineTagRule {
    all: &'static [&'static str],
    any: &'static [&'static str],
    names: &'static [&'static str],
    tag: FineTag,
}

const PRONOUN_NAMES: &[&str] = &["'Iv", "nuq", "jIH"];

const NUMERAL_NAMES: &[&str] = &[
    "wa'", "cha'", "wej", "loS", "vagh", "jav", "Soch", "chorgh", "Hut",
];

/// Ordered decision table; the first matching row wins.
const FINE_TAG_RULES: &[FineTagRule] = &[
    FineTagRule { all: &["v", "is"], any: &[], names: &[], tag: FineTag::StativeVerb },
    FineTagRule { all: &["v"], any: &["t", "t_c"], names: &[], tag: FineTag::TransitiveVerb },
    FineTagRule { all: &["v"], any: &["i", "i_c"], names: &[], tag: FineTag::IntransitiveVerb },
    FineTagRule { all: &[], any: &["ambi"], names: &[], tag: FineTag::AmbitransitiveVerb },
    FineTagRule { all: &["v"], any: &[], names: &[], tag: FineTag::Verb },
    FineTagRule { all: &["n", "being"], any: &[], names: &[], tag: FineTag::BeingNoun },
    FineTagRule { all: &["n", "body"], any: &[], names: &[], tag: FineTag::BodyPartNoun },
    FineTagRule { all: &["n"], any: &["pro"], names: PRONOUN_NAMES, tag: FineTag::Pronoun },
    FineTagRule { all: &["n"], any: &[], names: NUMERAL_NAMES, tag: FineTag::Numeral },
    FineTagRule { all: &["n"], any: &[], names: &[], tag: FineTag::Noun },
    FineTagRule { all: &["adv"], any: &[], names: &[], tag: FineTag::Adverbial },
    FineTagRule { all: &["excl"], any: &[], names: &[], tag: FineTag::Exclamation },
    FineTagRule { all: &["conj"], any: &[], names: &[], tag: FineTag::Conjunction },
    FineTagRule { all: &["ques"], any: &[], names: &[], tag: FineTag::QuestionWord },
];

impl FineTagRule {
    fn matches(&self, name: &str, tags: &BTreeSet<String>) -> bool {
        if !self.all.iter().all(|t| tags.contains(*t)) {
            return false;
        }
        if self.any.is_empty() && self.names.is_empty() {
            return true;
        }
        self.any.iter().any(|t| tags.contains(*t)) || self.names.contains(&name)
    }
}

/// Compute the fine tag of an entry from its name and tag set.
pub fn fine_tag(name: &str, tags: &BTreeSet<String>) -> FineTag {
    FINE_TAG_RULES
        .iter()
        .find(|rule| rule.matches(name, tags))
        .map_or(FineTag::Unknown, |rule| rule.tag)
}
