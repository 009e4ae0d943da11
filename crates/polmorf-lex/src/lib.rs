//! Streaming tokenizer and dictionary-backed annotation for Polish text.
//!
//! - [`lexer`] -- `Lexer`, `Token`, sentence extraction and string
//!   tokenization
//! - [`terminalizer`] -- `Terminalizer`: multi-dictionary lookup with
//!   case-variant, derivational-prefix and numeral handling, and the
//!   terminal tag set

pub mod lexer;
pub mod terminalizer;

pub use lexer::{LexError, Lexer, Symbol, Token, get_sentence, tokenize_string};
pub use terminalizer::{Terminalizer, terminal_names};
