// polmorf-compile: compile a source word file into a binary word file.
//
// Usage:
//   polmorf-compile SOURCE.swf OUTPUT.wf
//   polmorf-compile --sort SOURCE.swf        (canonicalize to stdout)

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use polmorf_dict::Dictionary;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if polmorf_cli::wants_help(&args) || args.is_empty() {
        println!("polmorf-compile: compile a source word file.");
        println!();
        println!("Usage: polmorf-compile SOURCE.swf OUTPUT.wf");
        println!("       polmorf-compile --sort SOURCE.swf");
        println!();
        println!("With --sort, writes the canonically sorted source form to");
        println!("stdout instead of compiling.");
        return;
    }

    let sort = args.iter().any(|a| a == "--sort");
    let files: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let Some(source_path) = files.first() else {
        polmorf_cli::fatal("no source word file given");
    };

    let source = File::open(source_path)
        .unwrap_or_else(|e| polmorf_cli::fatal(&format!("cannot open {source_path}: {e}")));
    let mut dict = Dictionary::new();
    dict.load_source_word_file(&mut BufReader::new(source))
        .unwrap_or_else(|e| polmorf_cli::fatal(&format!("{source_path}: {e}")));

    if sort {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        dict.write_source_word_file(&mut out, true)
            .unwrap_or_else(|e| polmorf_cli::fatal(&format!("write failed: {e}")));
        let _ = out.flush();
        return;
    }

    let Some(output_path) = files.get(1) else {
        polmorf_cli::fatal("no output word file given");
    };
    let output = File::create(output_path)
        .unwrap_or_else(|e| polmorf_cli::fatal(&format!("cannot create {output_path}: {e}")));
    let mut out = BufWriter::new(output);
    dict.write_word_file(&mut out)
        .unwrap_or_else(|e| polmorf_cli::fatal(&format!("write failed: {e}")));
    out.flush()
        .unwrap_or_else(|e| polmorf_cli::fatal(&format!("write failed: {e}")));
}
