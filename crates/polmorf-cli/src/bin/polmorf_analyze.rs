// polmorf-analyze: annotate text from stdin with dictionary analyses.
//
// Usage:
//   polmorf-analyze [-d WORD_FILE]...
//
// Reads text from stdin sentence by sentence and prints each token with its
// candidate tags. Dictionaries are consulted in the order given.

use std::io::{self, Write};

use polmorf_lex::{Terminalizer, get_sentence};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_args, args) = polmorf_cli::parse_dict_args(&args);

    if polmorf_cli::wants_help(&args) {
        println!("polmorf-analyze: annotate Polish text from stdin.");
        println!();
        println!("Usage: polmorf-analyze [-d WORD_FILE]...");
        println!();
        println!("Options:");
        println!("  -d, --dict WORD_FILE   Compiled word file; may repeat, first wins");
        println!("  -h, --help             Print this help");
        println!();
        println!("Without -d, $POLMORF_DICT_PATH/polish.wf is used when set.");
        return;
    }

    let mut annotator = Terminalizer::new();
    for path in polmorf_cli::dictionary_paths(dict_args) {
        annotator
            .load_dict(&path)
            .unwrap_or_else(|e| polmorf_cli::fatal(&format!("{}: {e}", path.display())));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    loop {
        let sentence = match get_sentence(&mut input) {
            Ok(s) => s,
            Err(e) => polmorf_cli::fatal(&format!("read failed: {e}")),
        };
        if sentence.is_empty() {
            break;
        }
        match annotator.convert(&sentence) {
            Ok(tokens) => {
                for token in tokens {
                    let _ = write!(out, "{token}");
                }
                let _ = writeln!(out);
            }
            Err(e) => {
                let _ = out.flush();
                eprintln!("skipping sentence: {e}");
            }
        }
    }
    let _ = out.flush();
}
