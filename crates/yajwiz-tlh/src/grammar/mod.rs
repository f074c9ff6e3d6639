// Grammar checking module

pub mod encode;
pub mod pattern;
pub mod proofreader;
pub mod rules;

pub use pattern::{CompiledPattern, PatternError, PatternErrorKind, PatternMatch};
pub use proofreader::{CheckerOptions, ExampleFailure, Proofreader, proofread, verify_examples};
pub use rules::{
    GrammarRule, RuleSpec, builtin_specs, compile_rules, load_rule_specs, read_rule_specs,
};

use yajwiz_core::grammar_error::ProofreaderError;
use yajwiz_core::token::Token;

/// Trait for grammar checkers.
pub trait GrammarChecker {
    /// Check an analyzed sentence.
    ///
    /// Tokens must carry their analyses; diagnostics come out in
    /// encounter order, baseline diagnostics first.
    fn check(&self, tokens: &[Token]) -> Vec<ProofreaderError>;
}
