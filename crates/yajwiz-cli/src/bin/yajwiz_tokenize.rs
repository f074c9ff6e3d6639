// yajwiz-tokenize: Tokenize Klingon text from stdin.
//
// Prints each token with its type and character offset.
//
// Usage:
//   yajwiz-tokenize [OPTIONS]
//
// Options:
//   --words                 Print only words, one per line
//   -h, --help              Print help

use std::io::{self, Read, Write};

use yajwiz_core::enums::TokenType;
use yajwiz_tlh::tokenizer::positioned_tokens;

fn main() {
    yajwiz_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if yajwiz_cli::wants_help(&args) {
        println!("yajwiz-tokenize: Tokenize Klingon text.");
        println!();
        println!("Usage: yajwiz-tokenize [OPTIONS]");
        println!();
        println!("Reads text from stdin, prints tokens with types:");
        println!("  WORD   <offset>  <text>");
        println!("  SPACE  <offset>  <text>");
        println!("  PUNCT  <offset>  <text>");
        println!();
        println!("Options:");
        println!("  --words                 Print only words, one per line");
        println!("  -h, --help              Print this help");
        return;
    }

    let words_only = args.iter().any(|a| a == "--words");

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| yajwiz_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for token in positioned_tokens(&input) {
        if words_only {
            if token.kind == TokenType::Word {
                let _ = writeln!(out, "{}", token.text);
            }
            continue;
        }
        let type_str = match token.kind {
            TokenType::Word => "WORD",
            TokenType::Space => "SPACE",
            TokenType::Punct => "PUNCT",
        };
        let _ = writeln!(out, "{type_str:<6} {:>5}  {:?}", token.offset, token.text);
    }
}
