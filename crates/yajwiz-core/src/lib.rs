//! Shared types for the yajwiz Klingon NLP crates: analyses, tokens,
//! proofreader diagnostics, the closed tag enumerations and letter utilities.

pub mod analysis;
pub mod character;
pub mod enums;
pub mod grammar_error;
pub mod token;

pub use analysis::{Analysis, Number, Person, Role, SyntaxInfo};
pub use enums::{FineTag, SuffixSlot, TokenType, WordClass};
pub use grammar_error::{ErrorKind, ProofreaderError};
pub use token::Token;
