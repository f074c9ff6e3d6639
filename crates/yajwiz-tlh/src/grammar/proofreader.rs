// Proofreader: baseline word diagnostics followed by the rule pass

use std::collections::BTreeSet;

use yajwiz_core::grammar_error::ProofreaderError;
use yajwiz_core::token::Token;

use super::GrammarChecker;
use super::rules::{GrammarRule, builtin_specs, compile_rules};

/// Options of the grammar checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerOptions {
    /// Report words without any analysis.
    pub report_unknown_words: bool,
    /// Words never reported as unknown.
    pub known_words: BTreeSet<String>,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            report_unknown_words: true,
            known_words: BTreeSet::new(),
        }
    }
}

impl CheckerOptions {
    fn reports_unknown(&self, word: &str) -> bool {
        self.report_unknown_words && !self.known_words.contains(word)
    }
}

/// Unknown-word and ungrammatical-word diagnostics, in token order.
pub fn baseline_errors(tokens: &[Token], options: &CheckerOptions) -> Vec<ProofreaderError> {
    let mut errors = Vec::new();
    for token in tokens.iter().filter(|t| t.is_word()) {
        match token.analyses.first() {
            None => {
                if options.reports_unknown(&token.text) {
                    errors.push(ProofreaderError::unknown_word(
                        &token.text,
                        token.offset,
                        token.end_offset(),
                    ));
                }
            }
            Some(first) => {
                if token.analyses.iter().all(|a| a.is_ungrammatical()) {
                    let reason = first.ungrammatical.as_deref().unwrap_or_default();
                    errors.push(ProofreaderError::ungrammatical(
                        reason,
                        token.offset,
                        token.end_offset(),
                    ));
                }
            }
        }
    }
    errors
}

/// Run the baseline pass and then every rule once, in list order.
pub fn proofread(
    tokens: &[Token],
    rules: &[GrammarRule],
    options: &CheckerOptions,
) -> Vec<ProofreaderError> {
    let mut errors = baseline_errors(tokens, options);
    errors.extend(rules.iter().filter_map(|rule| rule.check(tokens)));
    errors
}

/// A compiled rule list together with its options.
#[derive(Debug, Clone)]
pub struct Proofreader {
    rules: Vec<GrammarRule>,
    options: CheckerOptions,
}

impl Default for Proofreader {
    fn default() -> Self {
        Self::new(compile_rules(builtin_specs()))
    }
}

impl Proofreader {
    pub fn new(rules: Vec<GrammarRule>) -> Self {
        Self {
            rules,
            options: CheckerOptions::default(),
        }
    }

    pub fn rules(&self) -> &[GrammarRule] {
        &self.rules
    }

    pub fn set_rules(&mut self, rules: Vec<GrammarRule>) {
        self.rules = rules;
    }

    pub fn options(&self) -> &CheckerOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut CheckerOptions {
        &mut self.options
    }
}

impl GrammarChecker for Proofreader {
    fn check(&self, tokens: &[Token]) -> Vec<ProofreaderError> {
        proofread(tokens, &self.rules, &self.options)
    }
}

/// An example sentence whose outcome disagreed with its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleFailure {
    pub rule: String,
    pub example: String,
    /// Whether the example was listed as a positive one.
    pub positive: bool,
    /// Errors reported by the rule itself for the example.
    pub errors: Vec<ProofreaderError>,
}

/// Check a rule against its own examples.
///
/// A positive example must produce an error named after the rule, a
/// negative one must not. `analyze_text` turns an example into analyzed
/// tokens.
pub fn verify_examples<F>(rule: &GrammarRule, mut analyze_text: F) -> Vec<ExampleFailure>
where
    F: FnMut(&str) -> Vec<Token>,
{
    let spec = rule.spec();
    let labelled = spec
        .positive_examples
        .iter()
        .map(|e| (e, true))
        .chain(spec.negative_examples.iter().map(|e| (e, false)));

    let mut failures = Vec::new();
    for (example, positive) in labelled {
        let tokens = analyze_text(example);
        let errors: Vec<ProofreaderError> = rule.check(&tokens).into_iter().collect();
        if errors.is_empty() == positive {
            failures.push(ExampleFailure {
                rule: spec.name.clone(),
                example: example.clone(),
                positive,
                errors,
            });
        }
    }
    failures
}
