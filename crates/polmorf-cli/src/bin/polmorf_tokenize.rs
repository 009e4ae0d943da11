// polmorf-tokenize: tokenize text from stdin.
//
// Usage:
//   polmorf-tokenize [--sentences]
//
// Prints one token per line with its lexical class. With --sentences, the
// input is first split into sentences and a blank line separates them.

use std::io::{self, Write};

use polmorf_core::charset;
use polmorf_lex::{Lexer, Symbol, get_sentence, tokenize_string};

fn class_name(symbol: Symbol) -> &'static str {
    match symbol {
        Symbol::Word => "WORD",
        Symbol::Number => "NUMBER",
        Symbol::PunctuationMark => "PUNCT",
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if polmorf_cli::wants_help(&args) {
        println!("polmorf-tokenize: tokenize Polish text from stdin.");
        println!();
        println!("Usage: polmorf-tokenize [--sentences]");
        println!();
        println!("Prints one token per line as CLASS: text. With --sentences,");
        println!("tokens are grouped by sentence.");
        return;
    }

    let by_sentence = args.iter().any(|a| a == "--sentences");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut lexer = Lexer::new();

    if by_sentence {
        loop {
            let sentence = match get_sentence(&mut input) {
                Ok(s) => s,
                Err(e) => polmorf_cli::fatal(&format!("read failed: {e}")),
            };
            if sentence.is_empty() {
                break;
            }
            match tokenize_string(&sentence, &mut lexer) {
                Ok(tokens) => {
                    for token in tokens {
                        let _ = writeln!(
                            out,
                            "{:7}{}",
                            class_name(token.symbol),
                            charset::charset_to_utf8(&token.lexeme)
                        );
                    }
                    let _ = writeln!(out);
                }
                Err(e) => eprintln!("skipping sentence: {e}"),
            }
        }
    } else {
        lexer.reset(input);
        loop {
            match lexer.get_token() {
                Ok(token) if token.is_empty() => break,
                Ok(token) => {
                    let _ = writeln!(
                        out,
                        "{:7}{}",
                        class_name(token.symbol),
                        charset::charset_to_utf8(&token.lexeme)
                    );
                }
                Err(e) => eprintln!("skipping line: {e}"),
            }
        }
    }
    let _ = out.flush();
}
