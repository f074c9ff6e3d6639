//! Klingon (tlhIngan Hol) morphology and grammar checking.
//!
//! # Architecture
//!
//! - [`lexicon`] -- boQwI' dictionary loading and the word index
//! - [`morphology`] -- affix templates and the template-driven analyzer
//! - [`syntax`] -- role, agreement and rule feature bits of an analysis
//! - [`grammar`] -- rule pattern compiler and proofreader
//! - [`tokenizer`] -- word, space and punctuation spans
//! - [`conllu`] -- CoNLL-U rendering of analyzed text
//! - [`handle`] -- [`YajwizHandle`], the entry point owning the lexicon
//!   snapshot and the grammar rules

#[cfg(feature = "analyze")]
pub mod lexicon;
#[cfg(feature = "analyze")]
pub mod morphology;
#[cfg(feature = "analyze")]
pub mod syntax;

#[cfg(feature = "grammar")]
pub mod grammar;

#[cfg(feature = "tokenize")]
pub mod tokenizer;

#[cfg(feature = "conllu")]
pub mod conllu;

#[cfg(feature = "handle")]
pub mod handle;

#[cfg(feature = "handle")]
pub use handle::{YajwizError, YajwizHandle};
