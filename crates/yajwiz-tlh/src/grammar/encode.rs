// Per-token bit encoding matched by compiled rule patterns

use std::fmt::Write;

use yajwiz_core::enums::TokenType;
use yajwiz_core::token::Token;

/// Bit held by every punctuation token.
pub const PUNCT_BIT: &str = "Punct";

/// Names of single punctuation characters, used as bits.
pub const PUNCTUATION_NAMES: &[(char, &[&str])] = &[
    ('.', &["Period"]),
    (',', &["Comma"]),
    (':', &["Colon"]),
    (';', &["Semicolon"]),
    ('!', &["ExclamationMark"]),
    ('?', &["QuestionMark"]),
    ('"', &["QuotationMark"]),
    ('“', &["QuotationMark", "Left"]),
    ('”', &["QuotationMark", "Right"]),
    ('‘', &["QuotationMark", "Left"]),
    ('’', &["QuotationMark", "Right"]),
    ('«', &["QuotationMark", "Left"]),
    ('»', &["QuotationMark", "Right"]),
    ('‹', &["QuotationMark", "Left"]),
    ('›', &["QuotationMark", "Right"]),
    ('<', &["LessThanSign", "AngleBracket", "Left"]),
    ('>', &["GreaterThanSign", "AngleBracket", "Right"]),
    ('(', &["Parenthesis", "Left"]),
    (')', &["Parenthesis", "Right"]),
    ('{', &["Brace", "Left"]),
    ('}', &["Brace", "Right"]),
    ('[', &["Bracket", "Left"]),
    (']', &["Bracket", "Right"]),
    ('*', &["Asterisk"]),
    ('/', &["Slash"]),
    ('\\', &["Backslash"]),
    ('`', &["Backtick"]),
    ('~', &["Tilde"]),
    ('^', &["CircumflexMark"]),
    ('=', &["EqualsSign"]),
    ('+', &["PlusSign"]),
    ('-', &["MinusSign"]),
    ('–', &["Dash"]),
    ('_', &["Underscore"]),
    ('%', &["PercentSign"]),
    ('$', &["DollarSign", "CurrencySign"]),
    ('€', &["EuroSign", "CurrencySign"]),
];

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// Whether a punctuation token holds the bit: `Punct`, the character's
/// names, or its decimal code point.
fn punct_has_bit(text: &str, bit: &str) -> bool {
    if bit == PUNCT_BIT {
        return true;
    }
    let Some(c) = single_char(text) else {
        return false;
    };
    let named = PUNCTUATION_NAMES
        .iter()
        .find(|(p, _)| *p == c)
        .is_some_and(|(_, names)| names.contains(&bit));
    named || bit == (c as u32).to_string()
}

/// `1` if every analysis of the token holds the bit, `0` if none does
/// (or the token has no analyses), `.` otherwise.
fn bit_char(token: &Token, bit: &str) -> char {
    if token.kind == TokenType::Punct {
        return if punct_has_bit(&token.text, bit) { '1' } else { '0' };
    }
    let held = token.analyses.iter().filter(|a| a.has_bit(bit)).count();
    if held == 0 {
        '0'
    } else if held == token.analyses.len() {
        '1'
    } else {
        '.'
    }
}

/// Encode tokens against a rule's bit vocabulary.
///
/// Token `i` becomes `,i:` followed by one character per vocabulary bit.
pub fn encode(tokens: &[&Token], vocabulary: &[String]) -> String {
    let mut encoded = String::with_capacity(tokens.len() * (vocabulary.len() + 4));
    for (i, token) in tokens.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = write!(encoded, ",{i}:");
        for bit in vocabulary {
            encoded.push(bit_char(token, bit));
        }
    }
    encoded
}
