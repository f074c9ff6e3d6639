// yajwiz-conllu: Render Klingon text as CoNLL-U.
//
// Reads text from FILE (or stdin) and prints one row per word or
// punctuation token. Sentences end at `.`, `!` and `?`.
//
// Usage:
//   yajwiz-conllu [-d DICT_PATH] [FILE]
//
// Options:
//   -d, --dict-path PATH   qawHaq.json or the directory containing it
//   -h, --help              Print help

use std::io::{self, Read, Write};

fn main() {
    yajwiz_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = yajwiz_cli::parse_dict_path(&args);

    if yajwiz_cli::wants_help(&args) {
        println!("yajwiz-conllu: Render Klingon text as CoNLL-U.");
        println!();
        println!("Usage: yajwiz-conllu [-d DICT_PATH] [FILE]");
        println!();
        println!("Reads FILE, or stdin when FILE is missing or '-'.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   qawHaq.json or the directory containing it");
        println!("  -h, --help              Print this help");
        return;
    }

    let input = match yajwiz_cli::positional(&args).first().map(String::as_str) {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .unwrap_or_else(|e| yajwiz_cli::fatal(&format!("failed to read {path}: {e}"))),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| yajwiz_cli::fatal(&format!("failed to read stdin: {e}")));
            buf
        }
    };

    let handle =
        yajwiz_cli::load_handle(dict_path.as_deref()).unwrap_or_else(|e| yajwiz_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for paragraph in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let rendered = handle.to_conllu(paragraph);
        let _ = writeln!(out, "{rendered}");
        if !rendered.ends_with('\n') {
            let _ = writeln!(out);
        }
    }
}
