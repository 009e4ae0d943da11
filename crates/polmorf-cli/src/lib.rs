// polmorf-cli: shared utilities for the command-line tools.

use std::path::PathBuf;
use std::process;

/// Environment variable naming a directory with compiled word files.
pub const DICT_PATH_ENV: &str = "POLMORF_DICT_PATH";

/// Default word-file name looked up in the dictionary directory.
const DEFAULT_WORD_FILE: &str = "polish.wf";

/// Extracts `--dict PATH` / `-d PATH` / `--dict=PATH` occurrences.
///
/// Returns the dictionary paths in the order given and the remaining
/// arguments. The flag may repeat; earlier dictionaries take priority.
pub fn parse_dict_args(args: &[String]) -> (Vec<PathBuf>, Vec<String>) {
    let mut dicts = Vec::new();
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict=") {
            dicts.push(PathBuf::from(val));
        } else if arg == "--dict" || arg == "-d" {
            if i + 1 < args.len() {
                dicts.push(PathBuf::from(&args[i + 1]));
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dicts, remaining)
}

/// Dictionary files to load: the `--dict` arguments if any were given,
/// otherwise the default word file from `POLMORF_DICT_PATH`.
pub fn dictionary_paths(from_args: Vec<PathBuf>) -> Vec<PathBuf> {
    if !from_args.is_empty() {
        return from_args;
    }
    match std::env::var(DICT_PATH_ENV) {
        Ok(dir) => vec![PathBuf::from(dir).join(DEFAULT_WORD_FILE)],
        Err(_) => Vec::new(),
    }
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dict_flags_are_collected_in_order() {
        let (dicts, rest) =
            parse_dict_args(&argv(&["--dict", "a.wf", "x", "-d", "b.wf", "--dict=c.wf"]));
        assert_eq!(dicts, [PathBuf::from("a.wf"), "b.wf".into(), "c.wf".into()]);
        assert_eq!(rest, ["x"]);
    }

    #[test]
    fn no_dict_flags_leaves_args_untouched() {
        let (dicts, rest) = parse_dict_args(&argv(&["--sentences", "file.txt"]));
        assert!(dicts.is_empty());
        assert_eq!(rest, ["--sentences", "file.txt"]);
    }

    #[test]
    fn help_detection() {
        assert!(wants_help(&argv(&["-h"])));
        assert!(wants_help(&argv(&["x", "--help"])));
        assert!(!wants_help(&argv(&["x"])));
    }
}
