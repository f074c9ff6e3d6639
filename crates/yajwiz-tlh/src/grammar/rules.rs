// Grammar rules: specs, compilation and matching

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use yajwiz_core::enums::TokenType;
use yajwiz_core::grammar_error::ProofreaderError;
use yajwiz_core::token::Token;

use super::encode::encode;
use super::pattern::{CompiledPattern, PatternError, is_name_char};

/// Name of the group whose tokens form the reported span.
pub const ERROR_GROUP: &str = "error";

/// Uncompiled grammar rule, as written in rule files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub name: String,
    pub pattern: String,
    /// Message template; may reference `$group` and `$group\lemma`.
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    #[serde(default)]
    pub positive_examples: Vec<String>,
    #[serde(default)]
    pub negative_examples: Vec<String>,
}

impl RuleSpec {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            message: message.into(),
            replacement: None,
            positive_examples: Vec::new(),
            negative_examples: Vec::new(),
        }
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }

    pub fn with_examples(mut self, positive: &[&str], negative: &[&str]) -> Self {
        self.positive_examples = positive.iter().map(|s| s.to_string()).collect();
        self.negative_examples = negative.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// The rules shipped with the checker.
pub fn builtin_specs() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new(
            "aspect in complex sentence 1",
            "({«'e'»}|{«net»}) ({«neH»}|{«neHHa'»})? {V7}",
            "ASPECT SUFFIX IN COMPLEX SENTENCE",
        )
        .with_examples(
            &["DaH 'e' vIleghpu'", "DaH net leghtaH", "DaH 'e' neH vIleghpu'", "DaH net neHHa' leghtaH"],
            &["DaH 'e' vIlegh", "DaH net legh", "DaH 'e' neH vIlegh", "DaH net neHHa' legh"],
        ),
        RuleSpec::new(
            "net with illegal subject",
            "{«net»} ({Subj1}|{Subj2}|{-lu'})",
            "net WITH ILLEGAL SUBJECT",
        )
        .with_examples(
            &["jISuv net vISov", "jISuv net boSov", "jISuv net Sovlu'"],
            &[
                "jISuv net Sov",
                "gheDlIj DaHoHHa'pu' moratlh\n'ej gheDDaj charghHa' molor\nQob qo' qeylIs yIqIm",
            ],
        ),
        RuleSpec::new(
            "illegal 'e' or net",
            "error({«'e'»}|{«net»}) verb({reH:v}|{Quj}|{jatlh:v}|{ja':v})",
            "$error WITH $verb\\lemma",
        )
        .with_replacement("")
        .with_examples(&["tugh jISuv 'e' qaja'."], &["tugh jISuv. qaja'."]),
        RuleSpec::new("'e' with neH 1", "error{«'e'»} {neH:v}", "'e' WITH neH")
            .with_replacement("")
            .with_examples(&["tugh jISuv 'e' vIneH."], &["tugh jISuv vIneH."]),
        RuleSpec::new("'e' with neH 2", "error{«'e'»} {«neH»} {!Obj3}", "'e' WITH neH")
            .with_replacement("")
            .with_examples(
                &["tugh jISuv 'e' neH qorDu'wIj."],
                &["tugh jISuv neH qorDu'wIj.", "tugh jISuv 'e' neH DaSov."],
            ),
    ]
}

/// Parse a JSON array of rule specs.
pub fn load_rule_specs(json: &str) -> Result<Vec<RuleSpec>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parse a JSON array of rule specs from a reader, e.g. a rule file.
pub fn read_rule_specs(reader: impl Read) -> Result<Vec<RuleSpec>, serde_json::Error> {
    serde_json::from_reader(reader)
}

/// A compiled grammar rule.
#[derive(Debug, Clone)]
pub struct GrammarRule {
    spec: RuleSpec,
    pattern: CompiledPattern,
}

impl GrammarRule {
    pub fn compile(spec: RuleSpec) -> Result<Self, PatternError> {
        let pattern = CompiledPattern::compile(&spec.pattern)?;
        Ok(Self { spec, pattern })
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn spec(&self) -> &RuleSpec {
        &self.spec
    }

    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// Match the rule against a sentence and report the leftmost match.
    ///
    /// Space tokens are not encoded; group indices refer to the remaining
    /// tokens.
    pub fn check(&self, tokens: &[Token]) -> Option<ProofreaderError> {
        let visible: Vec<&Token> = tokens.iter().filter(|t| t.kind != TokenType::Space).collect();
        let encoded = encode(&visible, self.pattern.vocabulary());
        let found = self.pattern.find(&encoded)?;

        let span = found
            .groups
            .get(ERROR_GROUP)
            .filter(|g| !g.is_empty())
            .unwrap_or(&found.tokens);
        let first = visible.get(*span.first()?)?;
        let last = visible.get(*span.last()?)?;

        let message = substitute(&self.spec.message, &visible, &found.groups);
        let replacement = self
            .spec
            .replacement
            .as_deref()
            .map(|r| substitute(r, &visible, &found.groups));
        Some(ProofreaderError::rule_violation(
            self.spec.name.clone(),
            message,
            first.offset,
            last.end_offset(),
            replacement,
        ))
    }
}

/// Compile rule specs, skipping the ones that fail.
pub fn compile_rules(specs: impl IntoIterator<Item = RuleSpec>) -> Vec<GrammarRule> {
    specs
        .into_iter()
        .filter_map(|spec| {
            let name = spec.name.clone();
            match GrammarRule::compile(spec) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    tracing::warn!(rule = %name, error = %e, "skipping grammar rule");
                    None
                }
            }
        })
        .collect()
}

fn join_tokens<'t>(indices: &[usize], tokens: &[&'t Token], text: impl Fn(&'t Token) -> &'t str) -> String {
    indices
        .iter()
        .filter_map(|&i| tokens.get(i))
        .map(|t| text(*t))
        .collect::<Vec<_>>()
        .join(" ")
}

const LEMMA_SUFFIX: &str = "\\lemma";

/// Replace `$group\lemma` and `$group` references with the matched tokens.
///
/// A reference takes the whole run of name characters after `$`, so `$ab`
/// never resolves to group `a`. References to unknown groups stay as written.
fn substitute(template: &str, tokens: &[&Token], groups: &BTreeMap<String, Vec<usize>>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];
        let name_len = after.find(|c: char| !is_name_char(c)).unwrap_or(after.len());
        let name = &after[..name_len];
        let tail = &after[name_len..];
        let Some(indices) = groups.get(name).filter(|_| !name.is_empty()) else {
            out.push('$');
            rest = after;
            continue;
        };
        rest = match tail.strip_prefix(LEMMA_SUFFIX) {
            Some(tail) => {
                out.push_str(&join_tokens(indices, tokens, |t| {
                    t.analyses.first().map_or(t.text.as_str(), |a| a.lemma.as_str())
                }));
                tail
            }
            None => {
                out.push_str(&join_tokens(indices, tokens, |t| t.text.as_str()));
                tail
            }
        };
    }
    out.push_str(rest);
    out
}
