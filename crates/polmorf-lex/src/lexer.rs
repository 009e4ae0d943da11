// Streaming tokenizer.
//
// The lexer reads its input one line at a time and splits each line into
// maximal runs of alphabetic, digit or punctuation characters. Everything
// else separates tokens and is dropped. All scan state lives in the `Lexer`
// value; `reset` rebinds the input and clears it.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead};

use polmorf_core::charset::{self, InvalidCharacterError};
use polmorf_core::Description;

/// Lexical class of a token.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    #[default]
    Word,
    PunctuationMark,
    Number,
}

/// One lexical unit: the charset-encoded lexeme with zero or more candidate
/// tags. A token with no tags is an ordinary unknown word, not an error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Token {
    pub symbol: Symbol,
    pub lexeme: Vec<u8>,
    pub tags: Vec<String>,
    pub attribs: Vec<Description>,
}

impl Token {
    /// The empty token signals end of input.
    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lexeme = charset::charset_to_utf8(&self.lexeme);
        match self.tags.split_first() {
            None => writeln!(f, "{lexeme}"),
            Some((first, rest)) => {
                writeln!(f, "{lexeme:<18}{first}")?;
                for tag in rest {
                    writeln!(f, "{:<18}{tag}", "")?;
                }
                Ok(())
            }
        }
    }
}

/// Errors of tokenization and annotation.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid UTF-8 in input text")]
    InvalidUtf8,
    #[error(transparent)]
    InvalidCharacter(#[from] InvalidCharacterError),
    #[error("input stream not set")]
    StreamNotSet,
    #[error(transparent)]
    Dictionary(#[from] polmorf_dict::DictionaryError),
}

/// Stateful scanner over a byte stream.
#[derive(Default)]
pub struct Lexer {
    input: Option<Box<dyn BufRead>>,
    queue: VecDeque<Token>,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebinds the lexer to a new input and clears the pending tokens.
    /// The input text must be UTF-8.
    pub fn reset(&mut self, input: impl BufRead + 'static) {
        self.input = Some(Box::new(input));
        self.queue.clear();
    }

    /// Returns the next token, or the empty token at end of input.
    ///
    /// On an encoding error the offending line is dropped and the next call
    /// resumes with the following line.
    pub fn get_token(&mut self) -> Result<Token, LexError> {
        if self.input.is_none() {
            return Err(LexError::StreamNotSet);
        }
        if self.queue.is_empty() {
            self.refill()?;
        }
        Ok(self.queue.pop_front().unwrap_or_default())
    }

    // Reads the next non-blank line, if any, and scans it into the queue.
    fn refill(&mut self) -> Result<(), LexError> {
        let Some(line) = self.next_line()? else {
            return Ok(());
        };
        let text = charset::utf8_to_charset(&line)?;
        scan(&text, &mut self.queue);
        Ok(())
    }

    // Next line with comments stripped and surrounding whitespace trimmed;
    // blank lines are skipped. `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>, LexError> {
        let input = self.input.as_mut().ok_or(LexError::StreamNotSet)?;
        loop {
            let mut buf = Vec::new();
            if input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            strip_comment(&mut buf);
            let line = std::str::from_utf8(&buf)
                .map_err(|_| LexError::InvalidUtf8)?
                .trim();
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }
}

impl fmt::Debug for Lexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("bound", &self.input.is_some())
            .field("queued", &self.queue.len())
            .finish()
    }
}

fn strip_comment(buf: &mut Vec<u8>) {
    if let Some(pos) = buf.iter().position(|&b| b == b'#') {
        buf.truncate(pos);
    }
}

// The token state machine over charset bytes.
pub(crate) fn scan(text: &[u8], out: &mut VecDeque<Token>) {
    let mut i = 0;
    while i < text.len() {
        let b = text[i];
        if charset::is_space(b) {
            i += 1;
        } else if charset::is_alpha(b) {
            let start = i;
            while i < text.len() && charset::is_alpha(text[i]) {
                i += 1;
            }
            out.push_back(Token {
                symbol: Symbol::Word,
                lexeme: text[start..i].to_vec(),
                ..Token::default()
            });
        } else if charset::is_digit(b) {
            let start = i;
            while i < text.len() && charset::is_digit(text[i]) {
                i += 1;
            }
            out.push_back(Token {
                symbol: Symbol::Number,
                lexeme: text[start..i].to_vec(),
                ..Token::default()
            });
        } else if charset::is_punct(b) {
            out.push_back(Token {
                symbol: Symbol::PunctuationMark,
                lexeme: vec![b],
                ..Token::default()
            });
            i += 1;
        } else {
            // not a space, letter, digit or punctuation mark: dropped
            i += 1;
        }
    }
}

/// Returns the next sentence from the stream, or `""` at end of input.
///
/// `#` starts a trailing comment. Sentences are separated by blank lines;
/// a line that holds only a comment is skipped without ending the sentence.
/// Line breaks inside a sentence become single spaces.
pub fn get_sentence(input: &mut impl BufRead) -> Result<String, LexError> {
    let mut sentence = String::new();
    loop {
        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(sentence);
        }
        let comment_only = buf.contains(&b'#');
        strip_comment(&mut buf);
        let line = std::str::from_utf8(&buf)
            .map_err(|_| LexError::InvalidUtf8)?
            .trim();
        if line.is_empty() {
            if !comment_only && !sentence.is_empty() {
                return Ok(sentence);
            }
        } else {
            if !sentence.is_empty() {
                sentence.push(' ');
            }
            sentence.push_str(line);
        }
    }
}

/// Tokenizes a pre-extracted string, such as one sentence, through `lexer`.
///
/// Reading a file token by token is equivalent to reading it sentence by
/// sentence and tokenizing each sentence.
pub fn tokenize_string(s: &str, lexer: &mut Lexer) -> Result<Vec<Token>, LexError> {
    lexer.reset(io::Cursor::new(s.to_string()));
    let mut v = Vec::new();
    loop {
        let token = lexer.get_token()?;
        if token.is_empty() {
            return Ok(v);
        }
        v.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tokens_of(text: &str) -> Vec<Token> {
        let mut lexer = Lexer::new();
        tokenize_string(text, &mut lexer).unwrap()
    }

    fn lexemes(tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| charset::charset_to_utf8(&t.lexeme))
            .collect()
    }

    #[test]
    fn get_token_without_reset_is_an_error() {
        let mut lexer = Lexer::new();
        assert!(matches!(lexer.get_token(), Err(LexError::StreamNotSet)));
    }

    #[test]
    fn empty_input_yields_the_empty_token() {
        let mut lexer = Lexer::new();
        lexer.reset(Cursor::new(String::new()));
        let token = lexer.get_token().unwrap();
        assert!(token.is_empty());
        // terminal state: stays empty
        assert!(lexer.get_token().unwrap().is_empty());
    }

    #[test]
    fn eleven_tokens_in_the_cyclist_sentence() {
        let tokens =
            tokens_of("Bogumi\u{0142} jedzie do lasu na rowerze 20 km/godz.");
        assert_eq!(tokens.len(), 11);
        assert_eq!(
            lexemes(&tokens),
            [
                "Bogumi\u{0142}",
                "jedzie",
                "do",
                "lasu",
                "na",
                "rowerze",
                "20",
                "km",
                "/",
                "godz",
                "."
            ]
        );
        assert_eq!(tokens[6].symbol, Symbol::Number);
        assert_eq!(tokens[8].symbol, Symbol::PunctuationMark);
        assert_eq!(tokens[9].symbol, Symbol::Word);
    }

    #[test]
    fn runs_do_not_mix_classes() {
        let tokens = tokens_of("abc123,x");
        assert_eq!(lexemes(&tokens), ["abc", "123", ",", "x"]);
        assert_eq!(
            tokens.iter().map(|t| t.symbol).collect::<Vec<_>>(),
            [
                Symbol::Word,
                Symbol::Number,
                Symbol::PunctuationMark,
                Symbol::Word
            ]
        );
    }

    #[test]
    fn unclassified_bytes_separate_tokens() {
        // no-break space is punctuation in the charset, but a plain control
        // byte is dropped
        let tokens = tokens_of("a\u{0001}b");
        assert_eq!(lexemes(&tokens), ["a", "b"]);
    }

    #[test]
    fn comments_and_blank_lines_are_invisible() {
        let mut lexer = Lexer::new();
        lexer.reset(Cursor::new(String::from(
            "pierwszy wiersz # komentarz\n\n  \ndrugi wiersz\n",
        )));
        let mut all = Vec::new();
        loop {
            let t = lexer.get_token().unwrap();
            if t.is_empty() {
                break;
            }
            all.push(t);
        }
        assert_eq!(lexemes(&all), ["pierwszy", "wiersz", "drugi", "wiersz"]);
    }

    #[test]
    fn reset_clears_pending_tokens() {
        let mut lexer = Lexer::new();
        lexer.reset(Cursor::new(String::from("jeden dwa trzy\n")));
        let first = lexer.get_token().unwrap();
        assert_eq!(charset::charset_to_utf8(&first.lexeme), "jeden");
        lexer.reset(Cursor::new(String::from("cztery\n")));
        let next = lexer.get_token().unwrap();
        assert_eq!(charset::charset_to_utf8(&next.lexeme), "cztery");
    }

    #[test]
    fn unrepresentable_line_errors_and_scanning_resumes() {
        let mut lexer = Lexer::new();
        lexer.reset(Cursor::new(String::from("dobre s\u{0142}owo\n\u{4e00}\ndalej\n")));
        assert!(!lexer.get_token().unwrap().is_empty());
        assert!(!lexer.get_token().unwrap().is_empty());
        assert!(matches!(
            lexer.get_token(),
            Err(LexError::InvalidCharacter(_))
        ));
        let after = lexer.get_token().unwrap();
        assert_eq!(charset::charset_to_utf8(&after.lexeme), "dalej");
    }

    #[test]
    fn invalid_utf8_line_errors() {
        let mut lexer = Lexer::new();
        lexer.reset(Cursor::new(b"ab\xf8\x88cd\n".to_vec()));
        assert!(matches!(lexer.get_token(), Err(LexError::InvalidUtf8)));
    }

    #[test]
    fn sentences_are_separated_by_blank_lines() {
        let text = "Pierwsze zdanie # z komentarzem\nci\u{0105}g dalszy.\n\n\
            Drugie zdanie.\n\n# tylko komentarz\n";
        let mut input = Cursor::new(text);
        assert_eq!(
            get_sentence(&mut input).unwrap(),
            "Pierwsze zdanie ci\u{0105}g dalszy."
        );
        assert_eq!(get_sentence(&mut input).unwrap(), "Drugie zdanie.");
        assert_eq!(get_sentence(&mut input).unwrap(), "");
        assert_eq!(get_sentence(&mut input).unwrap(), "");
    }

    #[test]
    fn comment_only_lines_do_not_end_a_sentence() {
        let mut input = Cursor::new("pierwsza po\u{0142}owa\n# wtr\u{0105}cenie\ndruga po\u{0142}owa\n");
        assert_eq!(
            get_sentence(&mut input).unwrap(),
            "pierwsza po\u{0142}owa druga po\u{0142}owa"
        );
        let mut input = Cursor::new("# najpierw komentarze\n#\nzdanie\n");
        assert_eq!(get_sentence(&mut input).unwrap(), "zdanie");
    }

    #[test]
    fn display_pads_tags() {
        let mut token = Token {
            symbol: Symbol::Word,
            lexeme: b"dom".to_vec(),
            ..Token::default()
        };
        assert_eq!(token.to_string(), "dom\n");
        token.tags = vec!["pierwszy".to_string(), "drugi".to_string()];
        assert_eq!(
            token.to_string(),
            "dom               pierwszy\n                  drugi\n"
        );
    }
}
