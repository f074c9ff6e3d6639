// Rule pattern compiler.
//
// A rule pattern is a sequence of token conditions:
//
//   error{«'e'»} verb({reH:v}|{Quj}) {!Obj3} .
//
// `{a,!b}` holds for a token when every analysis carries bit `a` and none
// carries `b`; `.` is any token; a word before an atom names a capture
// group; `( ) * + ? |` combine atoms as in regular expressions.
//
// Compilation is two-stage. Stage 1 parses the text into nodes; stage 2
// collects the bit vocabulary and lowers the nodes to a regex over the
// token encoding of `encode`: `,<index>:` followed by one of `1`, `0` or
// `.` per vocabulary bit.

use std::collections::BTreeMap;

use regex::Regex;

/// What went wrong while compiling a pattern.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatternErrorKind {
    #[error("unterminated condition list at {0}")]
    UnterminatedCondition(usize),

    #[error("empty bit name at {0}")]
    EmptyBitName(usize),

    #[error("group name {0:?} is not followed by an atom")]
    DanglingGroupName(String),

    #[error("unexpected character {ch:?} at {at}")]
    UnexpectedChar { ch: char, at: usize },

    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("duplicate group name {0:?}")]
    DuplicateGroupName(String),

    #[error("failed to build matcher: {0}")]
    Regex(#[from] regex::Error),
}

/// Error type for rule pattern compilation failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid rule pattern {pattern:?}: {kind}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub kind: PatternErrorKind,
}

/// Stage 1 output.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    /// `(bit, expected)` pairs; `expected` is false for negated bits.
    Condition { name: Option<String>, bits: Vec<(String, bool)> },
    GroupOpen { name: Option<String> },
    Wildcard { name: Option<String> },
    /// One of `* + ? | )`.
    Combinator(char),
}

pub(super) fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split a condition list on commas outside `«…»` literals.
fn split_conditions(list: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut in_literal = false;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '«' => in_literal = true,
            '»' => in_literal = false,
            ',' if !in_literal => {
                items.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&list[start..]);
    items
}

fn parse(pattern: &str) -> Result<Vec<Node>, PatternErrorKind> {
    let mut nodes = Vec::new();
    let mut rest = pattern;
    while !rest.is_empty() {
        let at = pattern.len() - rest.len();
        let name_len = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
        let name = (name_len > 0).then(|| rest[..name_len].to_string());
        rest = &rest[name_len..];

        let Some(c) = rest.chars().next() else {
            // Only reachable when a name ends the pattern.
            return Err(PatternErrorKind::DanglingGroupName(name.unwrap_or_default()));
        };
        let at = at + name_len;

        match c {
            '{' => {
                let end = rest.find('}').ok_or(PatternErrorKind::UnterminatedCondition(at))?;
                let mut bits = Vec::new();
                for item in split_conditions(&rest[1..end]) {
                    let (bit, expected) = match item.strip_prefix('!') {
                        Some(bit) => (bit, false),
                        None => (item, true),
                    };
                    if bit.is_empty() {
                        return Err(PatternErrorKind::EmptyBitName(at));
                    }
                    bits.push((bit.to_string(), expected));
                }
                nodes.push(Node::Condition { name, bits });
                rest = &rest[end + 1..];
            }
            '(' => {
                nodes.push(Node::GroupOpen { name });
                rest = &rest[1..];
            }
            '*' | '+' | '?' | '|' | ')' if name.is_none() => {
                nodes.push(Node::Combinator(c));
                rest = &rest[1..];
            }
            '.' => {
                nodes.push(Node::Wildcard { name });
                rest = &rest[1..];
            }
            c if c.is_whitespace() && name.is_some() => {
                nodes.push(Node::Wildcard { name });
                rest = &rest[c.len_utf8()..];
            }
            c if c.is_whitespace() => rest = &rest[c.len_utf8()..],
            c => return Err(PatternErrorKind::UnexpectedChar { ch: c, at }),
        }
    }
    Ok(nodes)
}

/// Bits referenced by the nodes, in first-appearance order.
fn vocabulary(nodes: &[Node]) -> Vec<String> {
    let mut vocabulary: Vec<String> = Vec::new();
    for node in nodes {
        if let Node::Condition { bits, .. } = node {
            for (bit, _) in bits {
                if !vocabulary.contains(bit) {
                    vocabulary.push(bit.clone());
                }
            }
        }
    }
    vocabulary
}

const TOKEN_HEADER: &str = r",\d+:";
const ANY_BIT: &str = "[01.]";

/// Stage 2 state: the regex text and the named groups opened so far.
#[derive(Default)]
struct Lowering {
    regex: String,
    groups: BTreeMap<String, usize>,
    captures: usize,
}

impl Lowering {
    /// Open a capture group if the atom is named.
    fn open_named(&mut self, name: &Option<String>) -> Result<bool, PatternErrorKind> {
        let Some(name) = name else {
            return Ok(false);
        };
        self.captures += 1;
        if self.groups.insert(name.clone(), self.captures).is_some() {
            return Err(PatternErrorKind::DuplicateGroupName(name.clone()));
        }
        self.regex.push('(');
        Ok(true)
    }

    /// Lower one token atom. Unnamed atoms are grouped too, so that a
    /// following quantifier applies to the whole token block.
    fn atom(
        &mut self,
        name: &Option<String>,
        bits: &[(String, bool)],
        vocabulary: &[String],
    ) -> Result<(), PatternErrorKind> {
        if !self.open_named(name)? {
            self.regex.push_str("(?:");
        }
        self.token(bits, vocabulary);
        self.regex.push(')');
        Ok(())
    }

    fn token(&mut self, bits: &[(String, bool)], vocabulary: &[String]) {
        self.regex.push_str(TOKEN_HEADER);
        for bit in vocabulary {
            match bits.iter().find(|(b, _)| b == bit) {
                Some((_, true)) => self.regex.push('1'),
                Some((_, false)) => self.regex.push('0'),
                None => self.regex.push_str(ANY_BIT),
            }
        }
    }
}

fn lower(
    nodes: &[Node],
    vocabulary: &[String],
) -> Result<(String, BTreeMap<String, usize>), PatternErrorKind> {
    let mut out = Lowering::default();
    let mut depth = 0usize;

    for node in nodes {
        match node {
            Node::Condition { name, bits } => out.atom(name, bits, vocabulary)?,
            Node::Wildcard { name } => out.atom(name, &[], vocabulary)?,
            Node::GroupOpen { name } => {
                if !out.open_named(name)? {
                    out.regex.push_str("(?:");
                }
                depth += 1;
            }
            Node::Combinator(')') => {
                depth = depth.checked_sub(1).ok_or(PatternErrorKind::UnbalancedParentheses)?;
                out.regex.push(')');
            }
            Node::Combinator(c) => out.regex.push(*c),
        }
    }

    if depth != 0 {
        return Err(PatternErrorKind::UnbalancedParentheses);
    }
    Ok((out.regex, out.groups))
}

/// Indices of the tokens encoded in a slice of an encoded sentence.
fn token_indices(encoded: &str) -> Vec<usize> {
    encoded
        .split(',')
        .filter_map(|block| block.split_once(':'))
        .filter_map(|(index, _)| index.parse().ok())
        .collect()
}

/// Tokens covered by a match and by each participating named group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub tokens: Vec<usize>,
    pub groups: BTreeMap<String, Vec<usize>>,
}

/// A compiled rule pattern.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    vocabulary: Vec<String>,
    groups: BTreeMap<String, usize>,
}

impl CompiledPattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let error = |kind| PatternError { pattern: pattern.to_string(), kind };

        let nodes = parse(pattern).map_err(error)?;
        let vocabulary = vocabulary(&nodes);
        let (lowered, groups) = lower(&nodes, &vocabulary).map_err(error)?;
        let regex = Regex::new(&lowered).map_err(|e| error(PatternErrorKind::Regex(e)))?;
        Ok(Self { source: pattern.to_string(), regex, vocabulary, groups })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Bits the token encoding must cover, in first-appearance order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Capture index of a named group.
    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.groups.get(name).copied()
    }

    /// Lowered regex source.
    pub fn as_regex_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Find the leftmost match in an encoded token sequence.
    pub fn find(&self, encoded: &str) -> Option<PatternMatch> {
        let caps = self.regex.captures(encoded)?;
        let tokens = caps.get(0).map(|m| token_indices(m.as_str())).unwrap_or_default();
        let groups = self
            .groups
            .iter()
            .filter_map(|(name, &index)| {
                caps.get(index).map(|m| (name.clone(), token_indices(m.as_str())))
            })
            .collect();
        Some(PatternMatch { tokens, groups })
    }
}
