// CoNLL-U serialization of analyzed text (no dependency columns)

use std::fmt;

use yajwiz_core::analysis::Analysis;
use yajwiz_core::enums::{SuffixSlot, TokenType};

use crate::morphology::Analyzer;
use crate::syntax::agreement;
use crate::syntax::voice;
use crate::tokenizer::tokenize;

const EMPTY: &str = "_";

/// Morphological features of suffixes, by slot and surface.
const SUFFIX_FEATURES: &[(SuffixSlot, &str, &str)] = &[
    (SuffixSlot::V7, "-pu'", "Aspect=Perf"),
    (SuffixSlot::V7, "-ta'", "Aspect=Int"),
    (SuffixSlot::V7, "-taH", "Aspect=Imp"),
    (SuffixSlot::V7, "-lI'", "Aspect=Prog"),
    (SuffixSlot::V8, "-neS", "Polite=Humb"),
    (SuffixSlot::V9, "-jaj", "Mood=Jus"),
    (SuffixSlot::V9, "-ghach", "VerbForm=Vnoun"),
    (SuffixSlot::V9, "-wI'", "VerbForm=Vnoun"),
    (SuffixSlot::N2, "-pu'", "Number=Plur"),
    (SuffixSlot::N2, "-Du'", "Number=Plur"),
    (SuffixSlot::N2, "-mey", "Number=Plur"),
    (SuffixSlot::N4, "-wI'", "Poss=Yes|PossPerson=1|PossNumber=Sing"),
    (SuffixSlot::N4, "-ma'", "Poss=Yes|PossPerson=1|PossNumber=Plur"),
    (SuffixSlot::N4, "-lI'", "Poss=Yes|PossPerson=2|PossNumber=Sing"),
    (SuffixSlot::N4, "-ra'", "Poss=Yes|PossPerson=2|PossNumber=Plur"),
    (SuffixSlot::N4, "-wIj", "Poss=Yes|PossPerson=1|PossNumber=Sing"),
    (SuffixSlot::N4, "-maj", "Poss=Yes|PossPerson=1|PossNumber=Plur"),
    (SuffixSlot::N4, "-lIj", "Poss=Yes|PossPerson=2|PossNumber=Sing"),
    (SuffixSlot::N4, "-raj", "Poss=Yes|PossPerson=2|PossNumber=Plur"),
    (SuffixSlot::N4, "-Daj", "Poss=Yes|PossPerson=3|PossNumber=Sing"),
    (SuffixSlot::N4, "-chaj", "Poss=Yes|PossPerson=3|PossNumber=Plur"),
    (SuffixSlot::N5, "-Daq", "Case=Loc"),
    (SuffixSlot::N5, "-vo'", "Case=Ela"),
    (SuffixSlot::N5, "-mo'", "Case=Cau"),
    (SuffixSlot::N5, "-vaD", "Case=Dat"),
    (SuffixSlot::N5, "-'e'", "Case=Top"),
    (SuffixSlot::L2, "-DIch", "NumType=Ord"),
];

fn suffix_feature(slot: SuffixSlot, text: &str) -> Option<&'static str> {
    SUFFIX_FEATURES
        .iter()
        .find(|(s, t, _)| *s == slot && *t == text)
        .map(|(_, _, f)| *f)
}

/// One line of CoNLL-U output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub index: usize,
    pub form: String,
    pub lemma: String,
    pub upos: String,
    pub xpos: String,
    pub feats: String,
    pub misc: String,
}

impl Row {
    /// A row whose analysis is unknown or ambiguous.
    fn bare(index: usize, form: &str) -> Self {
        Self {
            index,
            form: form.to_string(),
            lemma: EMPTY.to_string(),
            upos: EMPTY.to_string(),
            xpos: EMPTY.to_string(),
            feats: EMPTY.to_string(),
            misc: EMPTY.to_string(),
        }
    }

    fn punct(index: usize, text: &str) -> Self {
        Self {
            index,
            form: text.to_string(),
            lemma: text.to_string(),
            upos: "PUNCT".to_string(),
            xpos: "PUNCT".to_string(),
            feats: EMPTY.to_string(),
            misc: EMPTY.to_string(),
        }
    }

    /// Build the row of a word from its analyses.
    ///
    /// Analyses that disagree on broad POS or lemma leave every column
    /// but the form empty.
    pub fn word(index: usize, form: &str, analyses: &[Analysis]) -> Self {
        let Some(analysis) = analyses.first() else {
            return Self::bare(index, form);
        };
        let agree = analyses
            .iter()
            .all(|a| a.broad_pos == analysis.broad_pos && a.lemma == analysis.lemma);
        if !agree {
            return Self::bare(index, form);
        }

        let mut feats = Vec::new();
        let mut misc = Vec::new();
        let upos = analysis.fine_pos.upos();

        let prefix = match &analysis.prefix {
            Some(prefix) => {
                misc.push(format!("Prefix={prefix}"));
                Some(prefix.as_str())
            }
            None if matches!(upos, "VERB" | "ADJ") => Some("-"),
            None => None,
        };
        if let Some(row) = prefix.and_then(|p| agreement::lookup(p, voice(analysis))) {
            feats.push(row.features());
        }

        for (slot, text) in &analysis.suffixes {
            misc.push(format!("Suffix{slot}={text}"));
            if let Some(f) = suffix_feature(*slot, text) {
                feats.push(f.to_string());
            }
        }

        let join = |items: Vec<String>| {
            if items.is_empty() { EMPTY.to_string() } else { items.join("|") }
        };
        Self {
            index,
            form: form.to_string(),
            lemma: analysis.lemma.clone(),
            upos: upos.to_string(),
            xpos: analysis.combined_pos.clone(),
            feats: join(feats),
            misc: join(misc),
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t_\t_\t_\t{}",
            self.index, self.form, self.lemma, self.upos, self.xpos, self.feats, self.misc
        )
    }
}

fn ends_sentence(punct: &str) -> bool {
    matches!(punct, "." | "!" | "?")
}

/// Render text as CoNLL-U, one row per non-space token.
///
/// Numbering restarts after `.`, `!` or `?`, which are followed by a blank
/// line.
pub fn to_conllu(analyzer: &impl Analyzer, text: &str) -> String {
    let mut lines = Vec::new();
    let mut index = 1;
    for (kind, token) in tokenize(text) {
        match kind {
            TokenType::Space => continue,
            TokenType::Punct => {
                lines.push(Row::punct(index, &token).to_string());
                if ends_sentence(&token) {
                    index = 1;
                    lines.push(String::new());
                    continue;
                }
            }
            TokenType::Word => {
                let analyses = analyzer.analyze(&token);
                lines.push(Row::word(index, &token, &analyses).to_string());
            }
        }
        index += 1;
    }
    lines.join("\n")
}
