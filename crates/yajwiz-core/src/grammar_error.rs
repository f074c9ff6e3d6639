// Proofreader diagnostic type

use serde::Serialize;

/// Rule name of the diagnostic emitted for words without any analysis.
pub const RULE_UNKNOWN_WORD: &str = "unknown word";

/// Rule name of the diagnostic emitted for words whose every analysis is
/// ungrammatical.
pub const RULE_UNGRAMMATICAL: &str = "ungrammatical";

/// Category of a proofreader diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// A word token has no analysis.
    UnknownWord,
    /// Every analysis of a word token carries an ungrammatical reason.
    UngrammaticalWord,
    /// A named grammar rule matched.
    RuleViolation,
}

/// A diagnostic found by the proofreader.
///
/// Offsets are character offsets; `end_offset` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{rule_name}: {message}")]
pub struct ProofreaderError {
    pub kind: ErrorKind,
    pub rule_name: String,
    pub message: String,
    pub start_offset: usize,
    pub end_offset: usize,
    /// Text that should replace the span, if the rule suggests one.
    pub replacement: Option<String>,
}

impl ProofreaderError {
    pub fn unknown_word(word: &str, start_offset: usize, end_offset: usize) -> Self {
        Self {
            kind: ErrorKind::UnknownWord,
            rule_name: RULE_UNKNOWN_WORD.to_string(),
            message: format!("UNKNOWN WORD {word}"),
            start_offset,
            end_offset,
            replacement: None,
        }
    }

    pub fn ungrammatical(reason: &str, start_offset: usize, end_offset: usize) -> Self {
        Self {
            kind: ErrorKind::UngrammaticalWord,
            rule_name: RULE_UNGRAMMATICAL.to_string(),
            message: reason.to_string(),
            start_offset,
            end_offset,
            replacement: None,
        }
    }

    pub fn rule_violation(
        rule_name: impl Into<String>,
        message: impl Into<String>,
        start_offset: usize,
        end_offset: usize,
        replacement: Option<String>,
    ) -> Self {
        Self {
            kind: ErrorKind::RuleViolation,
            rule_name: rule_name.into(),
            message: message.into(),
            start_offset,
            end_offset,
            replacement,
        }
    }

    /// Length of the erroneous span in characters.
    pub fn len(&self) -> usize {
        self.end_offset.saturating_sub(self.start_offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
