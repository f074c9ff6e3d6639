// yajwiz-analyze: Morphological analysis of Klingon words.
//
// Prints every analysis of each word, either as indented key=value text
// or as one JSON object per word.
//
// Usage:
//   yajwiz-analyze [-d DICT_PATH] [--json] [WORD...]
//
// Options:
//   -d, --dict-path PATH   qawHaq.json or the directory containing it
//   --json                  Print one JSON object per word
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use yajwiz_core::analysis::Analysis;
use yajwiz_tlh::YajwizHandle;

fn print_text(word: &str, analyses: &[Analysis], out: &mut impl Write) {
    if analyses.is_empty() {
        let _ = writeln!(out, "{word}: (no analysis)");
        return;
    }
    let _ = writeln!(out, "{word}:");
    for (i, a) in analyses.iter().enumerate() {
        let _ = writeln!(out, "  Analysis {}:", i + 1);
        let _ = writeln!(out, "    LEMMA={}", a.lemma);
        let _ = writeln!(out, "    ID={}", a.entry_id);
        let _ = writeln!(out, "    POS={}", a.combined_pos);
        let _ = writeln!(out, "    PARTS={}", a.parts.join(" "));
        if let Some(reason) = &a.ungrammatical {
            let _ = writeln!(out, "    UNGRAMMATICAL={reason}");
        }
        if let Some(info) = &a.syntax_info {
            let bits: Vec<&str> = info.bits.iter().map(String::as_str).collect();
            let _ = writeln!(out, "    BITS={}", bits.join(","));
        }
    }
}

fn print_json(word: &str, analyses: &[Analysis], out: &mut impl Write) {
    let value = serde_json::json!({ "word": word, "analyses": analyses });
    match serde_json::to_string(&value) {
        Ok(line) => {
            let _ = writeln!(out, "{line}");
        }
        Err(e) => eprintln!("error serializing {word}: {e}"),
    }
}

fn main() {
    yajwiz_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = yajwiz_cli::parse_dict_path(&args);

    if yajwiz_cli::wants_help(&args) {
        println!("yajwiz-analyze: Morphological analysis of Klingon words.");
        println!();
        println!("Usage: yajwiz-analyze [-d DICT_PATH] [--json] [WORD...]");
        println!();
        println!("If WORD arguments are given, analyzes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   qawHaq.json or the directory containing it");
        println!("  --json                  Print one JSON object per word");
        println!("  -h, --help              Print this help");
        return;
    }

    let json = args.iter().any(|a| a == "--json");
    let words = yajwiz_cli::positional(&args);

    let handle =
        yajwiz_cli::load_handle(dict_path.as_deref()).unwrap_or_else(|e| yajwiz_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut analyze_word = |word: &str, handle: &YajwizHandle| {
        let analyses = handle.analyze(word);
        if json {
            print_json(word, &analyses, &mut out);
        } else {
            print_text(word, &analyses, &mut out);
        }
    };

    if words.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            analyze_word(word, &handle);
        }
    } else {
        for word in &words {
            analyze_word(word, &handle);
        }
    }
}
