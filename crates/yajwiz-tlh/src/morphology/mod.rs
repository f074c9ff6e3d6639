// Morphological analysis module

mod checks;
mod klingon;
pub mod tables;
mod template;

pub use checks::{combined_pos, ungrammatical_reason};
pub use klingon::KlingonAnalyzer;
pub use template::{AffixTemplate, SlotMatch, SlotRole, TemplateError, TemplateKind, TemplateSet};

use yajwiz_core::analysis::Analysis;

/// Trait for morphological analyzers.
///
/// Implemented by [`KlingonAnalyzer`]; the grammar checker and the CoNLL-U
/// writer only need this interface.
pub trait Analyzer {
    /// Analyze a word and return every admissible segmentation,
    /// deduplicated and in discovery order.
    fn analyze(&self, word: &str) -> Vec<Analysis>;
}
