// YajwizHandle: top-level entry point for Klingon analysis and checking.
//
// The handle owns the current analyzer snapshot (lexicon, word index and
// templates) behind an `RwLock<Arc<_>>`, plus the compiled grammar rules
// and checker options. Readers clone the `Arc` and work on that snapshot;
// `update_lexicon` builds a complete new snapshot before swapping it in.

use std::collections::BTreeSet;
use std::io::Read;
use std::sync::{Arc, PoisonError, RwLock};

use yajwiz_core::analysis::Analysis;
use yajwiz_core::character::{split_to_letters, split_to_syllables};
use yajwiz_core::grammar_error::ProofreaderError;
use yajwiz_core::token::Token;

use crate::conllu;
use crate::grammar::{
    CheckerOptions, ExampleFailure, GrammarChecker, GrammarRule, PatternError, Proofreader,
    RuleSpec, compile_rules, load_rule_specs, verify_examples,
};
use crate::lexicon::{Lexicon, LexiconError};
use crate::morphology::{Analyzer, KlingonAnalyzer, TemplateError};
use crate::tokenizer::positioned_tokens;

/// Error type for handle construction and updates.
#[derive(Debug, thiserror::Error)]
pub enum YajwizError {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// A rule file is not a JSON list of rule specs.
    #[error("failed to parse rule file: {0}")]
    RuleFile(#[from] serde_json::Error),
}

/// Analyze the words of a text on one snapshot.
fn analyzed_tokens(analyzer: &impl Analyzer, text: &str) -> Vec<Token> {
    positioned_tokens(text)
        .into_iter()
        .map(|token| {
            if token.is_word() {
                let analyses = analyzer.analyze(&token.text);
                token.with_analyses(analyses)
            } else {
                token
            }
        })
        .collect()
}

/// Top-level handle owning the lexicon snapshot and the grammar checker.
pub struct YajwizHandle {
    snapshot: RwLock<Arc<KlingonAnalyzer>>,
    checker: Proofreader,
}

impl YajwizHandle {
    /// Create a handle over a lexicon with the built-in grammar rules.
    pub fn from_lexicon(lexicon: Lexicon) -> Result<Self, YajwizError> {
        let analyzer = KlingonAnalyzer::new(Arc::new(lexicon))?;
        Ok(Self {
            snapshot: RwLock::new(Arc::new(analyzer)),
            checker: Proofreader::default(),
        })
    }

    /// Create a handle from a boQwI' JSON export.
    pub fn from_json_str(json: &str) -> Result<Self, YajwizError> {
        Self::from_lexicon(Lexicon::from_json_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, YajwizError> {
        Self::from_lexicon(Lexicon::from_reader(reader)?)
    }

    /// The current analyzer snapshot.
    pub fn snapshot(&self) -> Arc<KlingonAnalyzer> {
        let guard = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the lexicon.
    ///
    /// The new index and templates are built before the swap; on failure
    /// the current snapshot stays in place.
    pub fn update_lexicon(&self, lexicon: Lexicon) -> Result<(), YajwizError> {
        let entries = lexicon.len();
        let analyzer = Arc::new(KlingonAnalyzer::new(Arc::new(lexicon))?);
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        *guard = analyzer;
        drop(guard);
        tracing::info!(entries, "lexicon snapshot replaced");
        Ok(())
    }

    // =========================================================================
    // Analysis
    // =========================================================================

    /// Every admissible analysis of a word.
    pub fn analyze(&self, word: &str) -> Vec<Analysis> {
        self.snapshot().analyze(word)
    }

    /// Raw morpheme segmentations of a word.
    pub fn split_to_morphemes(&self, word: &str) -> BTreeSet<Vec<String>> {
        self.snapshot().split_to_morphemes(word)
    }

    pub fn split_to_letters(&self, word: &str) -> Vec<String> {
        split_to_letters(word).into_iter().map(str::to_string).collect()
    }

    pub fn split_to_syllables(&self, word: &str) -> Vec<String> {
        split_to_syllables(word)
    }

    /// Tokenize text and attach analyses to its words.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        analyzed_tokens(self.snapshot().as_ref(), text)
    }

    /// Check a text for grammar errors.
    pub fn grammar_errors(&self, text: &str) -> Vec<ProofreaderError> {
        self.checker.check(&self.tokens(text))
    }

    /// Render a text as CoNLL-U.
    pub fn to_conllu(&self, text: &str) -> String {
        conllu::to_conllu(self.snapshot().as_ref(), text)
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    pub fn rules(&self) -> &[GrammarRule] {
        self.checker.rules()
    }

    /// Replace the rule list. Specs that fail to compile are skipped.
    pub fn set_rules(&mut self, specs: impl IntoIterator<Item = RuleSpec>) {
        self.checker.set_rules(compile_rules(specs));
    }

    /// Replace the rule list from a JSON list of rule specs.
    pub fn load_rules_json(&mut self, json: &str) -> Result<(), YajwizError> {
        let specs = load_rule_specs(json)?;
        self.set_rules(specs);
        Ok(())
    }

    /// Add one rule, failing if its pattern does not compile.
    pub fn add_rule(&mut self, spec: RuleSpec) -> Result<(), YajwizError> {
        let rule = GrammarRule::compile(spec)?;
        let mut rules = self.checker.rules().to_vec();
        rules.push(rule);
        self.checker.set_rules(rules);
        Ok(())
    }

    /// Run every rule against its own examples on the current snapshot.
    pub fn verify_rules(&self) -> Vec<ExampleFailure> {
        let analyzer = self.snapshot();
        self.checker
            .rules()
            .iter()
            .flat_map(|rule| verify_examples(rule, |text| analyzed_tokens(analyzer.as_ref(), text)))
            .collect()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    pub fn options(&self) -> &CheckerOptions {
        self.checker.options()
    }

    /// Set whether words without any analysis are reported.
    pub fn set_report_unknown_words(&mut self, value: bool) {
        self.checker.options_mut().report_unknown_words = value;
    }

    /// Never report these words as unknown.
    pub fn add_known_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.checker
            .options_mut()
            .known_words
            .extend(words.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexicalEntry;
    use yajwiz_core::grammar_error::ErrorKind;

    fn handle() -> YajwizHandle {
        YajwizHandle::from_lexicon(Lexicon::new([
            LexicalEntry::new("legh:v", "legh", "v:t_c"),
            LexicalEntry::new("Duj:n", "Duj", "n"),
        ]))
        .unwrap()
    }

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<YajwizHandle>();
    }

    #[test]
    fn analyze_through_snapshot() {
        let h = handle();
        assert!(!h.analyze("vIlegh").is_empty());
        assert!(h.analyze("qIp").is_empty());
    }

    #[test]
    fn update_swaps_snapshot() {
        let h = handle();
        let before = h.snapshot();
        h.update_lexicon(Lexicon::new([LexicalEntry::new("qIp:v", "qIp", "v:t_c")])).unwrap();
        assert!(!h.analyze("qIp").is_empty());
        assert!(h.analyze("legh").is_empty());
        // Readers holding the old snapshot keep using it.
        assert!(!before.analyze("legh").is_empty());
    }

    #[test]
    fn unknown_words_and_options() {
        let mut h = handle();
        let errors = h.grammar_errors("legh blargh");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::UnknownWord);
        assert_eq!((errors[0].start_offset, errors[0].end_offset), (5, 11));

        h.add_known_words(["blargh"]);
        assert!(h.grammar_errors("legh blargh").is_empty());
        h.set_report_unknown_words(false);
        assert!(h.grammar_errors("xyz").is_empty());
    }

    #[test]
    fn tokens_carry_analyses_only_for_words() {
        let tokens = handle().tokens("Duj legh.");
        assert_eq!(tokens.len(), 4);
        assert!(!tokens[0].analyses.is_empty());
        assert!(tokens[1].analyses.is_empty());
        assert!(tokens[3].analyses.is_empty());
    }

    #[test]
    fn rule_management() {
        let mut h = handle();
        assert_eq!(h.rules().len(), 5);
        h.load_rules_json(r#"[{"name": "r", "pattern": "{«Duj»}", "message": "m"}]"#).unwrap();
        assert_eq!(h.rules().len(), 1);
        assert!(h.grammar_errors("Duj").iter().any(|e| e.rule_name == "r"));
        assert!(matches!(h.load_rules_json("{"), Err(YajwizError::RuleFile(_))));
        assert!(matches!(
            h.add_rule(RuleSpec::new("bad", "(", "m")),
            Err(YajwizError::Pattern(_))
        ));
        h.add_rule(RuleSpec::new("good", "{«legh»}", "m")).unwrap();
        assert_eq!(h.rules().len(), 2);
    }

    #[test]
    fn letters_and_syllables() {
        let h = handle();
        assert_eq!(h.split_to_letters("tlhIngan"), vec!["tlh", "I", "ng", "a", "n"]);
        assert_eq!(h.split_to_syllables("tlhIngan"), vec!["tlhI", "ngan"]);
    }
}
