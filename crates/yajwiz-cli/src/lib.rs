// yajwiz-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;
use yajwiz_tlh::{YajwizError, YajwizHandle};

/// Dictionary file name of the boQwI' export.
const DICT_FILE: &str = "qawHaq.json";

/// Environment variable naming the dictionary file or its directory.
const DICT_ENV: &str = "YAJWIZ_DICT_PATH";

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "YAJWIZ_LOG";

/// Install the tracing subscriber. Logs go to stderr, filtered by
/// `YAJWIZ_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Search for the dictionary and create a YajwizHandle.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `YAJWIZ_DICT_PATH` environment variable
/// 3. `$XDG_DATA_HOME/yajwiz`, or `~/.local/share/yajwiz`
/// 4. Current working directory
///
/// Each entry may name the JSON file itself or a directory containing
/// `qawHaq.json`.
pub fn load_handle(dict_path: Option<&str>) -> Result<YajwizHandle, String> {
    let search_paths = build_search_paths(dict_path);

    for path in &search_paths {
        let file = if path.is_file() { path.clone() } else { path.join(DICT_FILE) };
        if !file.is_file() {
            continue;
        }
        let reader = std::fs::File::open(&file)
            .map(std::io::BufReader::new)
            .map_err(|e| format!("failed to read {}: {}", file.display(), e))?;
        tracing::debug!(path = %file.display(), "loading dictionary");
        return YajwizHandle::from_reader(reader)
            .map_err(|e: YajwizError| format!("failed to load {}: {e}", file.display()));
    }

    Err(format!(
        "no {} found; tried:\n{}",
        DICT_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of paths to search for the dictionary.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(data) = data_dir() {
        paths.push(data.join("yajwiz"));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// The user's data directory.
fn data_dir() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg));
        }
    }
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".local").join("share"))
}

/// Extract one valued option (`--long=VALUE`, `--long VALUE` or
/// `-s VALUE`) from the args.
///
/// Returns `(value, remaining_args)`; the last occurrence wins.
pub fn take_option(args: &[String], short: &str, long: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let inline = format!("{long}=");
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&inline) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Take the `-d`/`--dict-path` value, which [`load_handle`] searches before
/// `YAJWIZ_DICT_PATH`. It may name `qawHaq.json` or its directory.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "-d", "--dict-path")
}

/// Report a fatal CLI error on stderr and exit with status 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Whether help was requested with `-h` or `--help`.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check if a flag is in the args.
pub fn has_flag(args: &[String], short: &str, long: &str) -> bool {
    args.iter().any(|a| a == short || a == long)
}

/// Positional arguments: everything that does not look like an option.
/// A lone `-` stays positional.
pub fn positional(args: &[String]) -> Vec<String> {
    args.iter()
        .filter(|a| *a == "-" || !a.starts_with('-'))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dict_path_forms() {
        let (p, rest) = parse_dict_path(&args(&["-d", "/x", "word"]));
        assert_eq!(p.as_deref(), Some("/x"));
        assert_eq!(rest, args(&["word"]));

        let (p, rest) = parse_dict_path(&args(&["--dict-path=/y"]));
        assert_eq!(p.as_deref(), Some("/y"));
        assert!(rest.is_empty());
    }

    #[test]
    fn valued_options_are_removed() {
        let (w, rest) = take_option(&args(&["-I", "-w", "a,b", "in.txt"]), "-w", "--words");
        assert_eq!(w.as_deref(), Some("a,b"));
        assert_eq!(rest, args(&["-I", "in.txt"]));
        assert!(has_flag(&rest, "-I", "--ignore-unknown"));
        assert_eq!(positional(&rest), args(&["in.txt"]));
    }

    #[test]
    fn lone_dash_is_positional() {
        assert_eq!(positional(&args(&["-", "--x"])), args(&["-"]));
    }

    #[test]
    fn explicit_path_is_searched_first() {
        let paths = build_search_paths(Some("/tmp/dict"));
        assert_eq!(paths[0], PathBuf::from("/tmp/dict"));
    }
}
