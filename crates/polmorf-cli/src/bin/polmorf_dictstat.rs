// polmorf-dictstat: per-entry-type statistics of source word files.
//
// Usage:
//   polmorf-dictstat SOURCE.swf...
//
// Loads each source word file and prints the number of entries per entry
// type, with file and grand totals.

use std::fs::File;
use std::io::{self, BufReader, Write};

use polmorf_dict::Dictionary;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if polmorf_cli::wants_help(&args) || args.is_empty() {
        println!("polmorf-dictstat: entry statistics of source word files.");
        println!();
        println!("Usage: polmorf-dictstat SOURCE.swf...");
        return;
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut total: u64 = 0;

    for path in &args {
        let file = File::open(path)
            .unwrap_or_else(|e| polmorf_cli::fatal(&format!("cannot open {path}: {e}")));
        let mut dict = Dictionary::new();
        dict.load_source_word_file(&mut BufReader::new(file))
            .unwrap_or_else(|e| polmorf_cli::fatal(&format!("{path}: {e}")));

        let mut file_total: u64 = 0;
        for row in dict.report() {
            file_total += row.nentries;
            let _ = writeln!(out, "{:6} {}", row.nentries, row.entry_type);
        }
        let _ = writeln!(out, "{file_total:6} total in {path}");
        total += file_total;
    }

    let _ = writeln!(out, "{total:6} total");
    let _ = out.flush();
}
