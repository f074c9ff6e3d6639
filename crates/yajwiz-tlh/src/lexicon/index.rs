// Word index: (surface, word class) -> homograph entries

use std::sync::Arc;

use yajwiz_core::enums::WordClass;

use super::{LexicalEntry, Lexicon};

/// Maps a surface form and word class to every entry sharing them.
///
/// Built once per lexicon; never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    entries: hashbrown::HashMap<(String, WordClass), Vec<Arc<LexicalEntry>>>,
}

impl WordIndex {
    /// Index every non-hypothetical entry of the lexicon, in lexicon order.
    pub fn build(lexicon: &Lexicon) -> Self {
        let mut entries: hashbrown::HashMap<(String, WordClass), Vec<Arc<LexicalEntry>>> =
            hashbrown::HashMap::new();
        for entry in lexicon.entries().filter(|e| !e.is_hypothetical()) {
            entries
                .entry((entry.name.clone(), entry.word_class()))
                .or_default()
                .push(Arc::clone(entry));
        }
        Self { entries }
    }

    /// Entries with the given surface form and class, in lexicon order.
    pub fn lookup(&self, surface: &str, class: WordClass) -> &[Arc<LexicalEntry>] {
        self.entries
            .get(&(surface.to_string(), class))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, surface: &str, class: WordClass) -> bool {
        !self.lookup(surface, class).is_empty()
    }

    /// Number of distinct (surface, class) keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
