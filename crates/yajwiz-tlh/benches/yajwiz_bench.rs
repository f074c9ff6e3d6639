// Criterion benchmarks for yajwiz-tlh.
//
// Uses the full boQwI' export when YAJWIZ_DICT_PATH points to it (either
// the file itself or a directory containing qawHaq.json), and the test
// fixture lexicon otherwise.
//
// Run:
//   cargo bench -p yajwiz-tlh --features handle
//   YAJWIZ_DICT_PATH=/path/to/qawHaq.json cargo bench -p yajwiz-tlh --features handle

use std::path::PathBuf;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use yajwiz_tlh::YajwizHandle;
use yajwiz_tlh::grammar::{CompiledPattern, builtin_specs};
use yajwiz_tlh::lexicon::Lexicon;
use yajwiz_tlh::morphology::KlingonAnalyzer;

// ---------------------------------------------------------------------------
// Dictionary discovery
// ---------------------------------------------------------------------------

fn find_dictionary() -> PathBuf {
    if let Ok(path) = std::env::var("YAJWIZ_DICT_PATH") {
        let path = PathBuf::from(path);
        if path.is_file() {
            return path;
        }
        let in_dir = path.join("qawHaq.json");
        if in_dir.is_file() {
            return in_dir;
        }
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/lexicon.json")
}

fn load_lexicon() -> Lexicon {
    let json = std::fs::read_to_string(find_dictionary()).expect("failed to read dictionary");
    Lexicon::from_json_str(&json).expect("failed to parse dictionary")
}

const WORDS: &[&str] = &[
    "vIleghpu'", "leghtaH", "DaSov", "Sovlu'", "qorDu'wIj", "ghopwI'", "DunDaq", "jISuv",
    "neHHa'", "tlhInganpu'", "Qapla'", "wejmaH", "blargh",
];

const SENTENCES: &[&str] = &[
    "DaH 'e' vIleghpu'",
    "jISuv net vISov",
    "tugh jISuv 'e' qaja'.",
    "tugh jISuv 'e' neH qorDu'wIj.",
    "gheDlIj DaHoHHa'pu' moratlh 'ej gheDDaj charghHa' molor.",
];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Build the word index and every affix template.
fn bench_build_snapshot(c: &mut Criterion) {
    let lexicon = Arc::new(load_lexicon());
    c.bench_function("build_snapshot", |b| {
        b.iter(|| std::hint::black_box(KlingonAnalyzer::new(Arc::clone(&lexicon))));
    });
}

fn bench_analyze_words(c: &mut Criterion) {
    let handle = YajwizHandle::from_lexicon(load_lexicon()).expect("YajwizHandle");
    c.bench_function("analyze_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(handle.analyze(word));
            }
        });
    });
}

fn bench_compile_rules(c: &mut Criterion) {
    let specs = builtin_specs();
    c.bench_function("compile_builtin_patterns", |b| {
        b.iter(|| {
            for spec in &specs {
                std::hint::black_box(CompiledPattern::compile(&spec.pattern).ok());
            }
        });
    });
}

fn bench_grammar_check(c: &mut Criterion) {
    let handle = YajwizHandle::from_lexicon(load_lexicon()).expect("YajwizHandle");
    c.bench_function("grammar_sentences", |b| {
        b.iter(|| {
            for text in SENTENCES {
                std::hint::black_box(handle.grammar_errors(text));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build_snapshot,
    bench_analyze_words,
    bench_compile_rules,
    bench_grammar_check
);
criterion_main!(benches);
