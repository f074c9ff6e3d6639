// yajwiz-syllables: Split Klingon words into letters or syllables.
//
// Usage:
//   yajwiz-syllables [--letters] [WORD...]
//
// Options:
//   --letters               Split into letters instead of syllables
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use yajwiz_core::character::{split_to_letters, split_to_syllables};

fn main() {
    yajwiz_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if yajwiz_cli::wants_help(&args) {
        println!("yajwiz-syllables: Split Klingon words into syllables.");
        println!();
        println!("Usage: yajwiz-syllables [--letters] [WORD...]");
        println!();
        println!("If WORD arguments are given, splits each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!("Parts are printed separated by '-'.");
        println!();
        println!("Options:");
        println!("  --letters               Split into letters instead of syllables");
        println!("  -h, --help              Print this help");
        return;
    }

    let letters = args.iter().any(|a| a == "--letters");
    let words = yajwiz_cli::positional(&args);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut split_word = |word: &str| {
        let parts = if letters {
            split_to_letters(word).join("-")
        } else {
            split_to_syllables(word).join("-")
        };
        let _ = writeln!(out, "{word}\t{parts}");
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
            for word in line.split_whitespace() {
                split_word(word);
            }
        }
    } else {
        for word in &words {
            split_word(word);
        }
    }
}
