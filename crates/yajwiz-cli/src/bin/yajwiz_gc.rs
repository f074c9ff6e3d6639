// yajwiz-gc: Check Klingon text for grammar errors.
//
// Each input line is checked on its own. For every error the sentence
// containing it is printed, followed by a caret under the error start
// and the message.
//
// Usage:
//   yajwiz-gc [-d DICT_PATH] [OPTIONS] [FILE]
//
// Options:
//   -d, --dict-path PATH   qawHaq.json or the directory containing it
//   --rules FILE            Replace the built-in rules with a JSON rule file
//   -I, --ignore-unknown    Do not report unknown words
//   -w, --words WORDS       Comma-separated words never reported as unknown
//   -W, --words-file FILE   File with one such word per line
//   --verify                Check every rule against its own examples
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use yajwiz_core::grammar_error::ProofreaderError;
use yajwiz_tlh::YajwizHandle;
use yajwiz_tlh::grammar::read_rule_specs;

/// The sentence of `line` containing character `offset`, and the character
/// offset where it starts. Sentences are separated by `.`, `!` or `?`
/// followed by a space.
fn sentence_at(line: &str, offset: usize) -> (usize, String) {
    let chars: Vec<char> = line.chars().collect();
    let mut start = 0;
    for i in 0..chars.len().saturating_sub(1) {
        if i + 2 > offset {
            break;
        }
        if matches!(chars[i], '.' | '!' | '?') && chars[i + 1] == ' ' {
            start = i + 2;
        }
    }
    let end = (start..chars.len().saturating_sub(1))
        .find(|&i| matches!(chars[i], '.' | '!' | '?') && chars[i + 1] == ' ')
        .map_or(chars.len(), |i| i + 1);
    (start, chars[start..end].iter().collect())
}

fn report(line_no: usize, line: &str, error: &ProofreaderError, out: &mut impl Write) {
    let (start, sentence) = sentence_at(line, error.start_offset);
    let prefix = format!("Line {line_no}: ");
    let pad = " ".repeat(error.start_offset - start);
    let _ = writeln!(out, "{prefix}{sentence}");
    let _ = writeln!(out, "{prefix}{pad}^{}", error.message);
    if let Some(replacement) = &error.replacement {
        let _ = writeln!(out, "{prefix}{pad} -> \"{replacement}\"");
    }
    let _ = writeln!(out);
}

fn read_word_file(path: &str) -> Vec<String> {
    let file = std::fs::File::open(path)
        .unwrap_or_else(|e| yajwiz_cli::fatal(&format!("failed to read {path}: {e}")));
    io::BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

fn configure(handle: &mut YajwizHandle, args: &[String]) -> Vec<String> {
    let (rules, args) = yajwiz_cli::take_option(args, "--rules", "--rules");
    let (words, args) = yajwiz_cli::take_option(&args, "-w", "--words");
    let (words_file, args) = yajwiz_cli::take_option(&args, "-W", "--words-file");

    if let Some(path) = rules {
        let file = std::fs::File::open(&path)
            .unwrap_or_else(|e| yajwiz_cli::fatal(&format!("failed to read {path}: {e}")));
        let specs = read_rule_specs(io::BufReader::new(file))
            .unwrap_or_else(|e| yajwiz_cli::fatal(&format!("{path}: {e}")));
        handle.set_rules(specs);
    }
    if yajwiz_cli::has_flag(&args, "-I", "--ignore-unknown") {
        handle.set_report_unknown_words(false);
    }
    if let Some(words) = words {
        handle.add_known_words(words.split(',').map(str::trim).filter(|w| !w.is_empty()));
    }
    if let Some(path) = words_file {
        handle.add_known_words(read_word_file(&path));
    }
    args
}

fn main() {
    yajwiz_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = yajwiz_cli::parse_dict_path(&args);

    if yajwiz_cli::wants_help(&args) {
        println!("yajwiz-gc: Klingon grammar checker.");
        println!();
        println!("Usage: yajwiz-gc [-d DICT_PATH] [OPTIONS] [FILE]");
        println!();
        println!("Checks each line of FILE (or stdin) and prints the errors found.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   qawHaq.json or the directory containing it");
        println!("  --rules FILE            Replace the built-in rules with a JSON rule file");
        println!("  -I, --ignore-unknown    Do not report unknown words");
        println!("  -w, --words WORDS       Comma-separated words never reported as unknown");
        println!("  -W, --words-file FILE   File with one such word per line");
        println!("  --verify                Check every rule against its own examples");
        println!("  -h, --help              Print this help");
        return;
    }

    let mut handle =
        yajwiz_cli::load_handle(dict_path.as_deref()).unwrap_or_else(|e| yajwiz_cli::fatal(&e));
    let args = configure(&mut handle, &args);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.iter().any(|a| a == "--verify") {
        let failures = handle.verify_rules();
        for failure in &failures {
            let expected = if failure.positive { "an error" } else { "no error" };
            let _ = writeln!(
                out,
                "{}: expected {expected} in \"{}\"",
                failure.rule, failure.example
            );
        }
        let _ = writeln!(
            out,
            "Verified {} rules, {} failing examples",
            handle.rules().len(),
            failures.len()
        );
        if !failures.is_empty() {
            let _ = out.flush();
            std::process::exit(1);
        }
        return;
    }

    let input: Box<dyn BufRead> = match yajwiz_cli::positional(&args).first().map(String::as_str) {
        Some(path) if path != "-" => {
            let file = std::fs::File::open(path)
                .unwrap_or_else(|e| yajwiz_cli::fatal(&format!("failed to read {path}: {e}")));
            Box::new(io::BufReader::new(file))
        }
        _ => Box::new(io::stdin().lock()),
    };

    let mut count = 0;
    for (i, line) in input.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading input: {e}");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        for error in handle.grammar_errors(line) {
            report(i + 1, line, &error, &mut out);
            count += 1;
        }
    }
    let _ = writeln!(out, "Found {count} errors");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_containing_offset() {
        let line = "DaH jIQuj. 'e' vIleghpu'! Qapla'";
        assert_eq!(sentence_at(line, 0), (0, "DaH jIQuj.".to_string()));
        assert_eq!(sentence_at(line, 15), (11, "'e' vIleghpu'!".to_string()));
        assert_eq!(sentence_at(line, 26), (26, "Qapla'".to_string()));
    }
}
