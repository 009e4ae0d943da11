// The stream/sentence equivalence property: reading a document token by
// token gives the same sequence as extracting sentences and tokenizing each
// one, and annotation produces the same lexemes again.

use std::io::Cursor;

use polmorf_core::charset;
use polmorf_dict::Dictionary;
use polmorf_lex::{Lexer, Terminalizer, Token, get_sentence, tokenize_string};

const CZYTANKA: &str = include_str!("data/czytanka.txt");
const BASIC_SWF: &[u8] = include_bytes!("../../polmorf-dict/tests/data/basic.swf");

fn drain(lexer: &mut Lexer) -> Vec<Token> {
    let mut v = Vec::new();
    loop {
        let token = lexer.get_token().unwrap();
        if token.is_empty() {
            return v;
        }
        v.push(token);
    }
}

#[test]
fn token_stream_equals_sentence_wise_tokenization() {
    let mut lexer = Lexer::new();

    lexer.reset(Cursor::new(CZYTANKA.to_string()));
    let streamed = drain(&mut lexer);
    assert!(streamed.len() > 100);

    let mut input = Cursor::new(CZYTANKA.to_string());
    let mut by_sentence = Vec::new();
    let mut sentences = 0;
    loop {
        let sentence = get_sentence(&mut input).unwrap();
        if sentence.is_empty() {
            break;
        }
        sentences += 1;
        by_sentence.extend(tokenize_string(&sentence, &mut lexer).unwrap());
    }
    assert_eq!(sentences, 5);
    assert_eq!(streamed, by_sentence);
}

#[test]
fn the_first_sentence_tokenizes_as_expected() {
    let mut input = Cursor::new(CZYTANKA.to_string());
    let sentence = get_sentence(&mut input).unwrap();
    assert_eq!(
        sentence,
        "Profesor wszed\u{0142} do sali i po\u{0142}o\u{017c}y\u{0142} teczk\u{0119} \
         na stole. Studenci patrzyli na niego w milczeniu, a zegar nad drzwiami \
         wskazywa\u{0142} godzin\u{0119} 9.15."
    );
    let mut lexer = Lexer::new();
    let tokens = tokenize_string(&sentence, &mut lexer).unwrap();
    let lexemes: Vec<String> = tokens
        .iter()
        .map(|t| charset::charset_to_utf8(&t.lexeme))
        .collect();
    assert_eq!(
        lexemes,
        [
            "Profesor",
            "wszed\u{0142}",
            "do",
            "sali",
            "i",
            "po\u{0142}o\u{017c}y\u{0142}",
            "teczk\u{0119}",
            "na",
            "stole",
            ".",
            "Studenci",
            "patrzyli",
            "na",
            "niego",
            "w",
            "milczeniu",
            ",",
            "a",
            "zegar",
            "nad",
            "drzwiami",
            "wskazywa\u{0142}",
            "godzin\u{0119}",
            "9",
            ".",
            "15",
            "."
        ]
    );
}

#[test]
fn annotation_keeps_the_token_sequence() {
    let mut dict = Dictionary::new();
    dict.load_source_word_file(&mut Cursor::new(BASIC_SWF))
        .unwrap();
    let mut annotator = Terminalizer::new();
    annotator.add_dictionary(dict);

    let mut lexer = Lexer::new();
    let mut input = Cursor::new(CZYTANKA.to_string());
    loop {
        let sentence = get_sentence(&mut input).unwrap();
        if sentence.is_empty() {
            break;
        }
        let plain = tokenize_string(&sentence, &mut lexer).unwrap();
        let annotated = annotator.convert(&sentence).unwrap();
        assert_eq!(plain.len(), annotated.len());
        for (p, a) in plain.iter().zip(annotated.iter()) {
            assert_eq!(p.lexeme, a.lexeme);
            assert_eq!(p.symbol, a.symbol);
        }
        // every number and punctuation token carries exactly one tag
        for token in &annotated {
            match token.symbol {
                polmorf_lex::Symbol::Word => {}
                _ => assert_eq!(token.tags.len(), 1),
            }
        }
    }
}

#[test]
fn known_words_in_the_document_are_annotated() {
    let mut dict = Dictionary::new();
    dict.load_source_word_file(&mut Cursor::new(BASIC_SWF))
        .unwrap();
    let mut annotator = Terminalizer::new();
    annotator.add_dictionary(dict);

    let tokens = annotator
        .convert("Profesor da Tysi\u{0105}ckrotnie wykroj")
        .unwrap();
    // "Profesor" reaches the lowercase dictionary entry via case variants
    assert!(!tokens[0].tags.is_empty());
    assert_eq!(
        tokens[1].tags,
        ["verb:perfect:indicative:future:singular:third"]
    );
    assert_eq!(tokens[2].tags, ["adverb:positive"]);
    assert!(tokens[3].tags.is_empty());
}
