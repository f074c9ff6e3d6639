// Token types

use serde::Serialize;

use crate::analysis::Analysis;
use crate::enums::TokenType;

/// A positioned token of a sentence.
///
/// `analyses` is only populated for `Word` tokens. Offsets are character
/// offsets into the tokenized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub offset: usize,
    pub kind: TokenType,
    pub text: String,
    pub analyses: Vec<Analysis>,
}

impl Token {
    /// Create a token with no analyses.
    pub fn new(kind: TokenType, text: impl Into<String>, offset: usize) -> Self {
        Self {
            offset,
            kind,
            text: text.into(),
            analyses: Vec::new(),
        }
    }

    /// Attach analyses to the token.
    pub fn with_analyses(mut self, analyses: Vec<Analysis>) -> Self {
        self.analyses = analyses;
        self
    }

    /// Length of the token in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Character offset one past the last character of the token.
    pub fn end_offset(&self) -> usize {
        self.offset + self.len()
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenType::Word
    }
}
