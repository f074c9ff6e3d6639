//! End-to-end tests against the fixture lexicon in `tests/data`.
//!
//! Run: cargo test -p yajwiz-tlh --test fixture

use std::path::PathBuf;

use yajwiz_core::enums::{FineTag, SuffixSlot, TokenType, WordClass};
use yajwiz_core::grammar_error::ErrorKind;
use yajwiz_tlh::grammar::{GrammarRule, builtin_specs, verify_examples};
use yajwiz_tlh::lexicon::{LexicalEntry, Lexicon};
use yajwiz_tlh::{YajwizError, YajwizHandle};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/lexicon.json")
}

fn handle() -> YajwizHandle {
    let json = std::fs::read_to_string(fixture_path())
        .unwrap_or_else(|e| panic!("failed to read fixture lexicon: {e}"));
    YajwizHandle::from_json_str(&json).expect("fixture lexicon loads")
}

fn rule_errors(h: &YajwizHandle, text: &str, rule: &str) -> usize {
    h.grammar_errors(text).iter().filter(|e| e.rule_name == rule).count()
}

// ---------------------------------------------------------------------------
// Lexicon loading
// ---------------------------------------------------------------------------

#[test]
fn fixture_loads_with_version_and_glosses() {
    let file = std::fs::File::open(fixture_path()).unwrap();
    let lexicon = Lexicon::from_reader(file).unwrap();
    assert_eq!(lexicon.version(), Some("fixture-1"));
    let legh = lexicon.get("legh:v").unwrap();
    assert_eq!(legh.gloss("en"), Some("see"));
    assert_eq!(legh.gloss("de"), None);
}

#[test]
fn malformed_dictionary_is_an_error() {
    assert!(matches!(YajwizHandle::from_json_str("{\"qawHaq\": 3}"), Err(YajwizError::Lexicon(_))));
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

#[test]
fn prefixed_verb_with_aspect() {
    let analyses = handle().analyze("vIleghpu'");
    assert_eq!(analyses.len(), 1);
    let a = &analyses[0];
    assert_eq!(a.lemma, "legh");
    assert_eq!(a.broad_pos, WordClass::Verb);
    assert_eq!(a.fine_pos, FineTag::TransitiveVerb);
    assert_eq!(a.prefix.as_deref(), Some("vI-"));
    assert_eq!(a.parts, vec!["vI-:v", "legh:v", "-pu':v"]);
    assert_eq!(a.suffix(SuffixSlot::V7), Some("-pu'"));
    assert_eq!(a.combined_pos, "VT");
    assert!(!a.is_ungrammatical());
}

#[test]
fn adverb_and_verb_homographs() {
    let analyses = handle().analyze("neH");
    let ids: Vec<&str> = analyses.iter().map(|a| a.entry_id.as_str()).collect();
    assert_eq!(ids, vec!["neH:v", "neH:adv"]);
}

#[test]
fn stative_case_suffix_selects_stative_homograph() {
    let analyses = handle().analyze("DunDaq");
    assert_eq!(analyses.len(), 1);
    assert_eq!(analyses[0].entry_id, "Dun:v:1");
    assert_eq!(analyses[0].suffix(SuffixSlot::N5), Some("-Daq"));
}

#[test]
fn unknown_word_has_no_analyses() {
    assert!(handle().analyze("blargh").is_empty());
}

#[test]
fn body_part_with_being_possessive_is_ungrammatical() {
    let h = handle();
    let analyses = h.analyze("ghopwI'");
    let nouns: Vec<_> = analyses.iter().filter(|a| a.broad_pos == WordClass::Noun).collect();
    assert!(!nouns.is_empty());
    for a in nouns {
        assert_eq!(a.ungrammatical.as_deref(), Some("ILLEGAL PLURAL OR POSSESSIVE SUFFIX"));
    }

    let errors = h.grammar_errors("ghopwI' Duj");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::UngrammaticalWord);
    assert_eq!((errors[0].start_offset, errors[0].end_offset), (0, 7));
}

#[test]
fn hypothetical_and_affix_entries_are_not_lemmas() {
    let h = handle();
    assert!(h.analyze("qaD").is_empty());
    assert!(h.analyze("-lu'").is_empty());
}

#[test]
fn morpheme_segmentation() {
    let segmentations = handle().split_to_morphemes("vIleghpu'");
    let expected = vec!["vI-".to_string(), "legh".to_string(), "-pu'".to_string()];
    assert!(segmentations.contains(&expected));
}

#[test]
fn letters_and_syllables_concatenate_back() {
    let h = handle();
    for word in ["tlhIngan", "Qapla'", "qorDu'wIj", "vIleghpu'"] {
        assert_eq!(h.split_to_letters(word).concat(), word);
        assert_eq!(h.split_to_syllables(word).concat(), word);
    }
}

// ---------------------------------------------------------------------------
// Proofreader
// ---------------------------------------------------------------------------

#[test]
fn unknown_word_span() {
    let errors = handle().grammar_errors("DaH blargh");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::UnknownWord);
    assert_eq!(errors[0].message, "UNKNOWN WORD blargh");
    assert_eq!((errors[0].start_offset, errors[0].end_offset), (4, 10));
}

#[test]
fn aspect_in_complex_sentence() {
    let h = handle();
    let rule = "aspect in complex sentence 1";
    let errors: Vec<_> = h
        .grammar_errors("DaH 'e' vIleghpu'")
        .into_iter()
        .filter(|e| e.rule_name == rule)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "ASPECT SUFFIX IN COMPLEX SENTENCE");
    assert_eq!(rule_errors(&h, "DaH 'e' vIlegh", rule), 0);
}

#[test]
fn net_with_illegal_subject() {
    let h = handle();
    let rule = "net with illegal subject";
    assert_eq!(rule_errors(&h, "jISuv net vISov", rule), 1);
    assert_eq!(rule_errors(&h, "jISuv net Sov", rule), 0);
}

#[test]
fn illegal_e_substitutes_groups() {
    let errors = handle().grammar_errors("tugh jISuv 'e' qaja'.");
    let error = errors.iter().find(|e| e.rule_name == "illegal 'e' or net").unwrap();
    assert_eq!(error.message, "'e' WITH ja'");
    assert_eq!(error.replacement.as_deref(), Some(""));
    assert_eq!((error.start_offset, error.end_offset), (11, 14));
}

#[test]
fn every_builtin_rule_passes_its_examples() {
    let h = handle();
    let failures = h.verify_rules();
    assert!(failures.is_empty(), "{failures:#?}");
}

#[test]
fn examples_verify_through_the_library_api() {
    let h = handle();
    let spec = builtin_specs().remove(3);
    let rule = GrammarRule::compile(spec).unwrap();
    assert!(verify_examples(&rule, |text| h.tokens(text)).is_empty());
}

#[test]
fn errors_come_baseline_first() {
    let errors = handle().grammar_errors("DaH 'e' vIleghpu' blargh");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].kind, ErrorKind::UnknownWord);
    assert_eq!(errors[1].kind, ErrorKind::RuleViolation);
}

// ---------------------------------------------------------------------------
// Tokens, CoNLL-U and snapshot updates
// ---------------------------------------------------------------------------

#[test]
fn tokens_keep_character_offsets() {
    let tokens = handle().tokens("«Qapla'» DaH");
    let kinds: Vec<TokenType> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenType::Punct, TokenType::Word, TokenType::Punct, TokenType::Space, TokenType::Word]
    );
    assert_eq!(tokens[4].offset, 9);
    assert!(!tokens[1].analyses.is_empty());
}

#[test]
fn conllu_output() {
    let out = handle().to_conllu("DaH 'e' vIleghpu'. Duj");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "1\tDaH\tDaH\tADV\tADV\t_\t_\t_\t_\t_");
    assert_eq!(
        lines[2],
        "3\tvIleghpu'\tlegh\tVERB\tVT\tPerson=1|Number=Sing|ObjPerson=3|Aspect=Perf\t_\t_\t_\tPrefix=vI-|SuffixV7=-pu'"
    );
    assert_eq!(lines[3], "4\t.\t.\tPUNCT\tPUNCT\t_\t_\t_\t_\t_");
    assert_eq!(lines[4], "");
    assert!(lines[5].starts_with("1\tDuj\tDuj\tNOUN\tN\t"));
}

#[test]
fn lexicon_update_replaces_snapshot() {
    let h = handle();
    assert!(h.analyze("qIp").is_empty());
    h.update_lexicon(Lexicon::new([LexicalEntry::new("qIp:v", "qIp", "v:t_c")]))
        .unwrap();
    assert_eq!(h.analyze("qIp").len(), 1);
    assert!(h.analyze("legh").is_empty());
    assert_eq!(h.grammar_errors("legh").len(), 1);
}
