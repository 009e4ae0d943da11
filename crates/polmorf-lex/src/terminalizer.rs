// Annotation of tokenized text with dictionary analyses.
//
// A Terminalizer holds dictionaries in priority order. A word is looked up
// as written and in its case variants; a handful of productive derivations
// (naj-, nie-, anty-, mini-, super-, the imperative clitics -że/-ż, and
// numeral prefixes) extend the lookup to forms the dictionaries do not list
// themselves.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use hashbrown::HashMap;
use polmorf_core::charset::{
    self, capitalize, is_proper_prefix, is_proper_suffix, lowercase, uppercase,
};
use polmorf_core::{Degree, Description, Mood, Number, PartOfSpeech, Person, Setdesc};
use polmorf_dict::numerals::find_numeral_prefix;
use polmorf_dict::{Dictionary, generate_all_categories};

use crate::lexer::{LexError, Symbol, Token};

/// Tag of number tokens.
pub const NUMBER: &str = "number";

/// Terminal name reserved for words no dictionary knows.
pub const UNKNOWN_WORD: &str = "unknown_word";

// Writing marks other than letters and digits, by charset byte.
const PUNCTUATION_MARKS: [(u8, &str); 51] = [
    (0x21, "exclamation_mark"),
    (0x22, "typewriter_quotation_mark"),
    (0x23, "number_sign"),
    (0x24, "dollar_sign"),
    (0x25, "percent_sign"),
    (0x26, "ampersand"),
    (0x27, "apostrophe"),
    (0x28, "left_round_bracket"),
    (0x29, "right_round_bracket"),
    (0x2a, "asterisk"),
    (0x2b, "plus_sign"),
    (0x2c, "comma"),
    (0x2d, "hyphen"),
    (0x2e, "full_stop"),
    (0x2f, "simple_bracket"),
    (0x3a, "colon"),
    (0x3b, "semicolon"),
    (0x3c, "left_angle_bracket"),
    (0x3d, "equals_sign"),
    (0x3e, "right_angle_bracket"),
    (0x3f, "question_mark"),
    (0x40, "commercial_at"),
    (0x5b, "left_square_bracket"),
    (0x5c, "backslash"),
    (0x5d, "right_square_bracket"),
    (0x5e, "up_arrow"),
    (0x5f, "underline"),
    (0x60, "grave_accent"),
    (0x7b, "left_curly_bracket"),
    (0x7c, "vertical_line"),
    (0x7d, "right_curly_bracket"),
    (0x7e, "tilde"),
    (0x80, "no_break_space"),
    (0x81, "paragraph_sign"),
    (0x82, "copyright_sign"),
    (0x83, "left_angle_quotation_mark"),
    (0x84, "registered_sign"),
    (0x85, "degree_sign"),
    (0x86, "plus_minus_sign"),
    (0x87, "right_angle_quotation_mark"),
    (0xf5, "hyphen"),
    (0xf6, "dash"),
    (0xf7, "dash"),
    (0xf8, "left_definition_quotation_mark"),
    (0xf9, "right_definition_quotation_mark"),
    (0xfa, "left_definition_quotation_mark"),
    (0xfb, "right_quotation_mark"),
    (0xfc, "left_quotation_mark"),
    (0xfd, "dots"),
    (0xfe, "minus_sign"),
    (0xff, "replacement_character"),
];

fn punctuation_map() -> &'static HashMap<u8, &'static str> {
    static MAP: OnceLock<HashMap<u8, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| PUNCTUATION_MARKS.iter().copied().collect())
}

fn punctuation_name(b: u8) -> &'static str {
    punctuation_map().get(&b).copied().unwrap_or(UNKNOWN_WORD)
}

/// The full terminal tag set: every canonical category string, the
/// punctuation terminal names, `number` and `unknown_word`, deduplicated in
/// first-occurrence order.
pub fn terminal_names() -> Vec<String> {
    let mut names: Vec<String> = generate_all_categories()
        .iter()
        .map(ToString::to_string)
        .collect();
    names.extend(PUNCTUATION_MARKS.iter().map(|&(_, n)| n.to_string()));
    names.push(NUMBER.to_string());
    names.push(UNKNOWN_WORD.to_string());
    let mut seen = hashbrown::HashSet::new();
    names.retain(|n| seen.insert(n.clone()));
    names
}

/// Converts text into annotated tokens using dictionaries in priority
/// order: for each lookup, the first dictionary with any match wins.
#[derive(Debug, Default)]
pub struct Terminalizer {
    dicts: Vec<Dictionary>,
}

impl Terminalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dictionary with the lowest priority so far.
    pub fn add_dictionary(&mut self, dict: Dictionary) {
        self.dicts.push(dict);
    }

    /// Loads a persisted word file and appends it as a dictionary.
    pub fn load_dict(&mut self, path: &Path) -> Result<(), LexError> {
        let mut reader = BufReader::new(File::open(path)?);
        self.load_dict_reader(&mut reader)
    }

    /// Loads a persisted word file from a reader.
    pub fn load_dict_reader(&mut self, input: &mut impl BufRead) -> Result<(), LexError> {
        let mut dict = Dictionary::new();
        dict.load_word_file(input)?;
        self.dicts.push(dict);
        Ok(())
    }

    /// Converts UTF-8 text to a sequence of annotated tokens.
    ///
    /// Word tokens carry one tag per candidate category found; words no
    /// dictionary knows pass through untagged. Number tokens are tagged
    /// `number`, punctuation tokens with their fixed terminal name.
    pub fn convert(&self, text: &str) -> Result<Vec<Token>, LexError> {
        let charset_text = charset::utf8_to_charset(text)?;
        let mut queue = VecDeque::new();
        crate::lexer::scan(&charset_text, &mut queue);
        let mut result = Vec::with_capacity(queue.len());
        for mut token in queue {
            match token.symbol {
                Symbol::Word => {
                    let sd = self.collect_descriptions(&token.lexeme);
                    token.attribs = sd.into_iter().collect();
                    token.tags = token
                        .attribs
                        .iter()
                        .map(|d| d.category.to_string())
                        .collect();
                }
                Symbol::Number => token.tags.push(NUMBER.to_string()),
                Symbol::PunctuationMark => {
                    token.tags.push(punctuation_name(token.lexeme[0]).to_string());
                }
            }
            result.push(token);
        }
        Ok(result)
    }

    // Consults the dictionaries in order; the first one that yields any
    // match for this query wins.
    fn search_dicts(&self, s: &[u8], sd: &mut Setdesc) {
        for dict in &self.dicts {
            let mut found = Setdesc::new();
            dict.search_charset(s, &mut found);
            if !found.is_empty() {
                sd.extend(found);
                return;
            }
        }
    }

    // Numeral-prefixed derivations: "ponaddwumetrowy" from "metrowy",
    // "trzykrotnie" with no dictionary at all.
    fn search_numerals(&self, s: &[u8], sd: &mut Setdesc) {
        let len = find_numeral_prefix(s);
        if len == 0 {
            return;
        }
        let suffix = &s[len..];
        let mut base = Setdesc::new();
        self.search_dicts(suffix, &mut base);
        for d in &base {
            let positive = d.category.degree == Degree::Positive;
            let derivable = matches!(
                d.category.part_of_speech,
                PartOfSpeech::Adjective | PartOfSpeech::Adverb
            );
            if derivable && positive {
                sd.insert(Description {
                    main_form: format!(
                        "{}{}",
                        charset::charset_to_utf8(&s[..len]),
                        d.main_form
                    ),
                    category: d.category,
                });
            }
        }
        if suffix == b"krotnie" {
            sd.insert(Description {
                main_form: charset::charset_to_utf8(s),
                category: polmorf_core::Category {
                    part_of_speech: PartOfSpeech::Adverb,
                    degree: Degree::Positive,
                    ..Default::default()
                },
            });
        }
    }

    fn collect_descriptions(&self, s: &[u8]) -> Setdesc {
        let mut sd = Setdesc::new();
        let mut t = s.to_vec();
        self.search_dicts(&t, &mut sd);
        capitalize(&mut t);
        self.search_dicts(&t, &mut sd);
        uppercase(&mut t);
        self.search_dicts(&t, &mut sd);
        lowercase(&mut t);
        self.search_dicts(&t, &mut sd);

        if is_proper_prefix(&t, b"naj") {
            // naj- + comparative adjective or adverb gives the superlative
            t.drain(..3);
            let mut base = Setdesc::new();
            self.search_dicts(&t, &mut base);
            for d in &base {
                let derivable = matches!(
                    d.category.part_of_speech,
                    PartOfSpeech::Adjective | PartOfSpeech::Adverb
                );
                if derivable && d.category.degree == Degree::Comparative {
                    let mut d1 = d.clone();
                    d1.category.degree = Degree::Superlative;
                    sd.insert(d1);
                }
            }
        } else if is_proper_prefix(&t, b"nie") {
            t.drain(..3);
            let mut base = Setdesc::new();
            self.search_dicts(&t, &mut base);
            for d in &base {
                let keep = match d.category.part_of_speech {
                    PartOfSpeech::Adjective | PartOfSpeech::Adverb => {
                        d.category.degree == Degree::Positive
                    }
                    PartOfSpeech::Noun
                    | PartOfSpeech::VerbalNoun
                    | PartOfSpeech::AdjectivalActiveParticiple
                    | PartOfSpeech::AdjectivalPassiveParticiple => true,
                    _ => false,
                };
                if keep {
                    sd.insert(d.clone());
                }
            }
        } else if is_proper_prefix(&t, b"anty") {
            t.drain(..4);
            let mut base = Setdesc::new();
            self.search_dicts(&t, &mut base);
            for d in &base {
                let keep = match d.category.part_of_speech {
                    PartOfSpeech::Noun
                    | PartOfSpeech::Verb
                    | PartOfSpeech::AdjectivalPassiveParticiple
                    | PartOfSpeech::AdjectivalActiveParticiple
                    | PartOfSpeech::VerbalNoun => true,
                    PartOfSpeech::Adjective | PartOfSpeech::Adverb => {
                        d.category.degree == Degree::Positive
                    }
                    _ => false,
                };
                if keep {
                    sd.insert(d.clone());
                }
            }
        } else if is_proper_prefix(&t, b"mini") {
            t.drain(..4);
            self.search_nouns(&t, &mut sd);
        } else if is_proper_prefix(&t, b"super") {
            t.drain(..5);
            self.search_nouns(&t, &mut sd);
        }

        // -że and -ż cling to imperatives: "dajże", "chodźmyż"
        const ZE: &[u8] = &[0xf2, b'e'];
        const Z: &[u8] = &[0xf2];
        if is_proper_suffix(&t, ZE) {
            t.truncate(t.len() - 2);
            let mut base = Setdesc::new();
            self.search_dicts(&t, &mut base);
            for d in &base {
                let c = &d.category;
                if c.part_of_speech == PartOfSpeech::Verb
                    && c.mood == Mood::Imperative
                    && c.person == Person::Second
                    && c.number == Number::Singular
                {
                    sd.insert(d.clone());
                }
            }
        }
        if is_proper_suffix(&t, Z) {
            t.truncate(t.len() - 1);
            let mut base = Setdesc::new();
            self.search_dicts(&t, &mut base);
            for d in &base {
                let c = &d.category;
                if c.part_of_speech == PartOfSpeech::Verb
                    && c.mood == Mood::Imperative
                    && c.number == Number::Plural
                    && (c.person == Person::First || c.person == Person::Second)
                {
                    sd.insert(d.clone());
                }
            }
        }

        self.search_numerals(&t, &mut sd);
        sd
    }

    fn search_nouns(&self, t: &[u8], sd: &mut Setdesc) {
        let mut base = Setdesc::new();
        self.search_dicts(t, &mut base);
        for d in &base {
            if d.category.part_of_speech == PartOfSpeech::Noun {
                sd.insert(d.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dict_from(source: &str) -> Dictionary {
        let mut d = Dictionary::new();
        d.load_source_word_file(&mut Cursor::new(source)).unwrap();
        d
    }

    fn annotator(sources: &[&str]) -> Terminalizer {
        let mut t = Terminalizer::new();
        for s in sources {
            t.add_dictionary(dict_from(s));
        }
        t
    }

    const ADJECTIVE_METROWY: &str = "adjective\n\
        metrowy\nmetrowego\nmetrowemu\nmetrowego\nmetrowym\nmetrowym\nmetrowy\n\
        metrowy\nmetrowego\nmetrowemu\nmetrowy\nmetrowym\nmetrowym\nmetrowy\n\
        metrowa\nmetrowej\nmetrowej\nmetrow\u{0105}\nmetrow\u{0105}\nmetrowej\nmetrowa\n\
        metrowe\nmetrowego\nmetrowemu\nmetrowe\nmetrowym\nmetrowym\nmetrowe\n\
        metrowi\nmetrowych\nmetrowym\nmetrowych\nmetrowymi\nmetrowych\nmetrowi\n\
        metrowe\nmetrowych\nmetrowym\nmetrowe\nmetrowymi\nmetrowych\nmetrowe\n\n";

    const ADVERB_NIEWINNIEJ: &str = "comparative adverb\nniewinniej\n\n";
    const ADVERB_NIEWINNIE: &str = "adverb\nniewinnie\n\n";
    const PARTICLE_ALA: &str = "particle\nala\n\n";
    const NOUN_ALA: &str = "feminine noun\n\
        ala\nali\nali\nal\u{0119}\nal\u{0105}\nali\nalo\n\
        ale\nal\nalom\nale\nalami\nalach\nale\n\n";

    #[test]
    fn numbers_and_punctuation_are_tagged() {
        let t = annotator(&[]);
        let tokens = t.convert("ile to 123?").unwrap();
        assert_eq!(tokens.len(), 4);
        assert!(tokens[0].tags.is_empty());
        assert!(tokens[1].tags.is_empty());
        assert_eq!(tokens[2].tags, ["number"]);
        assert_eq!(tokens[3].tags, ["question_mark"]);
    }

    #[test]
    fn unknown_words_pass_untagged() {
        let t = annotator(&[ADJECTIVE_METROWY]);
        let tokens = t.convert("gry\u{017c}mo\u{0142}y").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].tags.is_empty());
        assert!(tokens[0].attribs.is_empty());
    }

    #[test]
    fn numeral_adverbs_need_no_dictionary() {
        let t = annotator(&[]);
        let text = "Tysi\u{0105}ckrotnie studwukrotnie dwudziestotrzykrotnie \
            osiemnastokrotnie jednokrotnie";
        for token in t.convert(text).unwrap() {
            assert_eq!(token.tags, ["adverb:positive"], "{token}");
        }
    }

    #[test]
    fn numeral_prefix_extends_adjectives() {
        let t = annotator(&[ADJECTIVE_METROWY]);
        let tokens = t.convert("ponaddwumetrowy").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(!tokens[0].tags.is_empty());
        for d in &tokens[0].attribs {
            assert_eq!(d.main_form, "ponaddwumetrowy");
            assert_eq!(d.category.part_of_speech, PartOfSpeech::Adjective);
            assert_eq!(d.category.degree, Degree::Positive);
        }
    }

    #[test]
    fn naj_prefix_builds_the_superlative() {
        let t = annotator(&[ADVERB_NIEWINNIEJ]);
        let tokens = t.convert("najniewinniej").unwrap();
        assert_eq!(tokens[0].tags, ["adverb:superlative"]);
        assert_eq!(tokens[0].attribs[0].main_form, "niewinniej");
    }

    #[test]
    fn nie_prefix_reaches_the_positive_base() {
        let t = annotator(&[ADVERB_NIEWINNIE, ADJECTIVE_METROWY]);
        let tokens = t.convert("nieniewinnie niemetrowy").unwrap();
        assert_eq!(tokens[0].tags, ["adverb:positive"]);
        assert!(
            tokens[1]
                .tags
                .iter()
                .all(|tag| tag.starts_with("adjective:positive"))
        );
        assert!(!tokens[1].tags.is_empty());
    }

    #[test]
    fn case_variants_are_searched() {
        let t = annotator(&[ADJECTIVE_METROWY]);
        // all-caps and capitalized words fall back to the lowercase entry
        for word in ["METROWY", "Metrowy", "metrowy"] {
            let tokens = t.convert(word).unwrap();
            assert!(!tokens[0].tags.is_empty(), "{word}");
        }
    }

    #[test]
    fn first_dictionary_with_a_match_wins() {
        let first = annotator(&[PARTICLE_ALA, NOUN_ALA]);
        let tokens = first.convert("ala").unwrap();
        assert_eq!(tokens[0].tags, ["particle"]);

        let other = annotator(&[NOUN_ALA, PARTICLE_ALA]);
        let tokens = other.convert("ala").unwrap();
        assert!(tokens[0].tags.iter().all(|t| t.starts_with("noun:")));
        assert!(!tokens[0].tags.is_empty());
    }

    #[test]
    fn unrepresentable_text_is_an_error() {
        let t = annotator(&[]);
        assert!(matches!(
            t.convert("\u{4e00}"),
            Err(LexError::InvalidCharacter(_))
        ));
    }

    #[test]
    fn load_dict_reader_accepts_word_files() {
        let dict = dict_from(ADJECTIVE_METROWY);
        let mut wf = Vec::new();
        dict.write_word_file(&mut wf).unwrap();
        let mut t = Terminalizer::new();
        t.load_dict_reader(&mut Cursor::new(&wf)).unwrap();
        assert!(!t.convert("metrowy").unwrap()[0].tags.is_empty());

        let mut t = Terminalizer::new();
        assert!(t.load_dict_reader(&mut Cursor::new(b"garbage".as_slice())).is_err());
    }

    #[test]
    fn every_punctuation_byte_has_a_terminal_name() {
        for b in 0..=255u8 {
            if charset::is_punct(b) {
                assert!(
                    punctuation_map().contains_key(&b),
                    "byte {b:#04x} has no terminal name"
                );
            }
        }
        assert_eq!(PUNCTUATION_MARKS.len(), 51);
    }

    #[test]
    fn terminal_name_table_covers_categories_and_marks() {
        let names = terminal_names();
        // 1002 category strings, 48 distinct punctuation names, number and
        // unknown_word
        assert_eq!(names.len(), 1002 + 48 + 2);
        assert!(names.iter().any(|n| n == "full_stop"));
        assert!(names.iter().any(|n| n == "number"));
        assert!(names.iter().any(|n| n == "unknown_word"));
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len());
    }
}
