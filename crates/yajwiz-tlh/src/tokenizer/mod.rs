// Plain tokenizer: words, whitespace and punctuation runs

use yajwiz_core::character::is_word_char;
use yajwiz_core::enums::TokenType;
use yajwiz_core::token::Token;

/// Classify the character starting a token.
fn kind_of(c: char) -> TokenType {
    if is_word_char(c) {
        TokenType::Word
    } else if c.is_whitespace() {
        TokenType::Space
    } else {
        TokenType::Punct
    }
}

/// Byte length of the token at the start of `text`.
///
/// Words and spaces take the maximal run of their class; punctuation takes
/// the maximal run of its first character repeated.
fn token_len(text: &str, first: char, kind: TokenType) -> usize {
    let end = match kind {
        TokenType::Word => text.find(|c: char| !is_word_char(c)),
        TokenType::Space => text.find(|c: char| !c.is_whitespace()),
        TokenType::Punct => text.find(|c: char| c != first),
    };
    end.unwrap_or(text.len())
}

/// Iterator over `(kind, text, char offset)` spans of a text.
struct Spans<'a> {
    rest: &'a str,
    offset: usize,
}

impl<'a> Iterator for Spans<'a> {
    type Item = (TokenType, &'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let kind = kind_of(first);
        let len = token_len(self.rest, first, kind);
        let (text, rest) = self.rest.split_at(len);
        let offset = self.offset;
        self.rest = rest;
        self.offset += text.chars().count();
        Some((kind, text, offset))
    }
}

fn spans(text: &str) -> Spans<'_> {
    Spans { rest: text, offset: 0 }
}

/// Split text into `(kind, text)` pairs.
pub fn tokenize(text: &str) -> Vec<(TokenType, String)> {
    spans(text).map(|(kind, t, _)| (kind, t.to_string())).collect()
}

/// Split text into tokens with character offsets and no analyses.
pub fn positioned_tokens(text: &str) -> Vec<Token> {
    spans(text)
        .map(|(kind, t, offset)| Token::new(kind, t, offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(TokenType, String)> {
        tokenize(text)
    }

    #[test]
    fn words_spaces_and_punctuation() {
        let tokens = kinds("jISuv 'e' qaja'.");
        let expected = [
            (TokenType::Word, "jISuv"),
            (TokenType::Space, " "),
            (TokenType::Word, "'e'"),
            (TokenType::Space, " "),
            (TokenType::Word, "qaja'"),
            (TokenType::Punct, "."),
        ];
        assert_eq!(tokens.len(), expected.len());
        for ((kind, text), (ek, et)) in tokens.iter().zip(expected) {
            assert_eq!((*kind, text.as_str()), (ek, et));
        }
    }

    #[test]
    fn punctuation_runs_of_one_character() {
        let tokens = kinds("...?!");
        assert_eq!(
            tokens,
            vec![
                (TokenType::Punct, "...".to_string()),
                (TokenType::Punct, "?".to_string()),
                (TokenType::Punct, "!".to_string()),
            ]
        );
    }

    #[test]
    fn digits_belong_to_words_and_whitespace_runs_merge() {
        let tokens = kinds("wa'maH 10\n\t x");
        assert_eq!(tokens[0], (TokenType::Word, "wa'maH".to_string()));
        assert_eq!(tokens[2], (TokenType::Word, "10".to_string()));
        assert_eq!(tokens[3], (TokenType::Space, "\n\t ".to_string()));
    }

    #[test]
    fn offsets_count_characters() {
        let tokens = positioned_tokens("«Qapla'» jIH");
        let offsets: Vec<(usize, &str)> = tokens.iter().map(|t| (t.offset, t.text.as_str())).collect();
        assert_eq!(offsets, vec![(0, "«"), (1, "Qapla'"), (7, "»"), (8, " "), (9, "jIH")]);
        assert_eq!(tokens[4].end_offset(), 12);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(positioned_tokens("").is_empty());
    }
}
