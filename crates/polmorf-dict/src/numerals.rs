// Multiplicative numeral prefixes and the parts of speech derived from
// them. Covers the range 1-1999: units, teens, tens with an optional unit,
// hundreds with units, teens or tens, and an optional leading "tysiąc".
// A prefix may additionally carry a leading "ponad" and a trailing "ipół".

use std::sync::OnceLock;

use polmorf_core::charset::{self, is_proper_prefix, is_proper_suffix};
use polmorf_core::{Category, Degree, Description, PartOfSpeech, Setdesc};

const UNITS: [&str; 9] = [
    "jedno",
    "dwu",
    "trzy",
    "cztero",
    "pi\u{0119}cio",
    "sze\u{015b}cio",
    "siedmio",
    "o\u{015b}mio",
    "dziewi\u{0119}cio",
];

const TEENS: [&str; 10] = [
    "dziesi\u{0119}cio",
    "jedenasto",
    "dwunasto",
    "trzynasto",
    "czternasto",
    "pi\u{0119}tnasto",
    "szesnasto",
    "siedemnasto",
    "osiemnasto",
    "dziewi\u{0119}tnasto",
];

const TENS: [&str; 8] = [
    "dwudziesto",
    "trzydziesto",
    "czterdziesto",
    "pi\u{0119}\u{0107}dziesi\u{0119}cio",
    "sze\u{015b}\u{0107}dziesi\u{0119}cio",
    "siedemdziesi\u{0119}cio",
    "osiemdziesi\u{0119}cio",
    "dziewi\u{0119}\u{0107}dziesi\u{0119}cio",
];

const HUNDREDS: [&str; 9] = [
    "stu",
    "dwustu",
    "trzystu",
    "czterystu",
    "pi\u{0119}\u{0107}set",
    "sze\u{015b}\u{0107}set",
    "siedemset",
    "osiemset",
    "dziewi\u{0119}\u{0107}set",
];

const PONAD: &str = "ponad";
const POL: &str = "p\u{00f3}\u{0142}";
const TYSIAC: &str = "tysi\u{0105}c";
const IPOL: &str = "ip\u{00f3}\u{0142}";

struct Tables {
    units: Vec<Vec<u8>>,
    teens: Vec<Vec<u8>>,
    tens: Vec<Vec<u8>>,
    hundreds: Vec<Vec<u8>>,
    ponad: Vec<u8>,
    pol: Vec<u8>,
    tysiac: Vec<u8>,
    ipol: Vec<u8>,
}

fn to_charset(words: &[&str]) -> Vec<Vec<u8>> {
    words
        .iter()
        .map(|w| charset::utf8_to_charset(w).unwrap_or_default())
        .collect()
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| Tables {
        units: to_charset(&UNITS),
        teens: to_charset(&TEENS),
        tens: to_charset(&TENS),
        hundreds: to_charset(&HUNDREDS),
        ponad: charset::utf8_to_charset(PONAD).unwrap_or_default(),
        pol: charset::utf8_to_charset(POL).unwrap_or_default(),
        tysiac: charset::utf8_to_charset(TYSIAC).unwrap_or_default(),
        ipol: charset::utf8_to_charset(IPOL).unwrap_or_default(),
    })
}

fn eat<'a>(rest: &'a [u8], prefix: &[u8], len: &mut usize) -> &'a [u8] {
    *len += prefix.len();
    &rest[prefix.len()..]
}

/// Length in bytes of the longest legal numeral prefix of the
/// charset-encoded word, 0 when there is none. A prefix never covers the
/// whole word, and a bare "ponad" does not count as one.
pub fn find_numeral_prefix(s: &[u8]) -> usize {
    let t = tables();
    let mut len = 0usize;
    let mut rest = s;

    if is_proper_prefix(rest, &t.ponad) {
        rest = eat(rest, &t.ponad, &mut len);
    }
    if is_proper_prefix(rest, &t.pol) {
        return len + t.pol.len();
    }
    if is_proper_prefix(rest, &t.tysiac) {
        rest = eat(rest, &t.tysiac, &mut len);
    }
    if let Some(h) = t.hundreds.iter().find(|h| is_proper_prefix(rest, h)) {
        rest = eat(rest, h, &mut len);
    }
    if let Some(ten) = t.tens.iter().find(|p| is_proper_prefix(rest, p)) {
        rest = eat(rest, ten, &mut len);
        if let Some(u) = t.units.iter().find(|p| is_proper_prefix(rest, p)) {
            rest = eat(rest, u, &mut len);
        }
        if is_proper_prefix(rest, &t.ipol) {
            eat(rest, &t.ipol, &mut len);
        }
        return len;
    }
    if let Some(k) = t.teens.iter().find(|p| is_proper_prefix(rest, p)) {
        rest = eat(rest, k, &mut len);
    } else if let Some(u) = t.units.iter().find(|p| is_proper_prefix(rest, p)) {
        rest = eat(rest, u, &mut len);
    }
    if s[..len] == t.ponad[..] {
        return 0;
    }
    if len == 0 {
        return 0;
    }
    if is_proper_prefix(rest, &t.ipol) {
        eat(rest, &t.ipol, &mut len);
    }
    len
}

/// If the charset-encoded lowercase word is a numeral adverb (like
/// "trzykrotnie"), adds its description to `sd`. Consults no dictionary.
pub fn check_numeral_adverbs(s: &[u8], sd: &mut Setdesc) {
    if !is_proper_suffix(s, b"krotnie") {
        return;
    }
    let len = find_numeral_prefix(s);
    if len == 0 || &s[len..] != b"krotnie" {
        return;
    }
    sd.insert(Description {
        main_form: charset::charset_to_utf8(s),
        category: Category {
            part_of_speech: PartOfSpeech::Adverb,
            degree: Degree::Positive,
            ..Category::default()
        },
    });
}

fn push_units(prefix: &str, v: &mut Vec<String>) {
    for u in UNITS {
        v.push(format!("{prefix}{u}"));
    }
}

fn push_teens(prefix: &str, v: &mut Vec<String>) {
    for k in TEENS {
        v.push(format!("{prefix}{k}"));
    }
}

fn push_tens(prefix: &str, v: &mut Vec<String>) {
    for ten in TENS {
        let p = format!("{prefix}{ten}");
        v.push(p.clone());
        push_units(&p, v);
    }
}

fn push_hundreds(prefix: &str, v: &mut Vec<String>) {
    for h in HUNDREDS {
        let p = format!("{prefix}{h}");
        v.push(p.clone());
        push_units(&p, v);
        push_teens(&p, v);
        push_tens(&p, v);
    }
}

/// The closed set of legal numeral prefixes for 1 through 1999, UTF-8, in
/// composition order. The order is the same on every run.
pub fn generate_numeral_prefixes() -> Vec<String> {
    let mut v = Vec::with_capacity(1999);
    for thousand in ["", TYSIAC] {
        if !thousand.is_empty() {
            v.push(thousand.to_string());
        }
        push_units(thousand, &mut v);
        push_teens(thousand, &mut v);
        push_tens(thousand, &mut v);
        push_hundreds(thousand, &mut v);
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_utf8(s: &str) -> usize {
        find_numeral_prefix(&charset::utf8_to_charset(s).unwrap())
    }

    #[test]
    fn generates_1999_prefixes() {
        let v = generate_numeral_prefixes();
        assert_eq!(v.len(), 1999);
        assert_eq!(v[0], "jedno");
        assert_eq!(
            v.last().unwrap(),
            "tysi\u{0105}cdziewi\u{0119}\u{0107}setdziewi\u{0119}\u{0107}dziesi\u{0119}ciodziewi\u{0119}cio"
        );
        let mut w = v.clone();
        w.sort();
        w.dedup();
        assert_eq!(w.len(), 1999);
    }

    #[test]
    fn simple_prefixes() {
        assert_eq!(find_utf8("dwukilogramowy"), 3);
        assert_eq!(find_utf8("trzypokojowy"), 4);
        assert_eq!(find_utf8("stuletni"), 3);
        assert_eq!(find_utf8("kilogramowy"), 0);
        assert_eq!(find_utf8(""), 0);
    }

    #[test]
    fn prefix_must_be_proper() {
        // the prefix alone, with nothing after it, does not match
        assert_eq!(find_utf8("dwu"), 0);
        assert_eq!(find_utf8("tysi\u{0105}c"), 0);
    }

    #[test]
    fn pol_and_ipol() {
        assert_eq!(find_utf8("p\u{00f3}\u{0142}kilogramowy"), 3);
        assert_eq!(find_utf8("ip\u{00f3}\u{0142}kilogramowy"), 0);
        assert_eq!(find_utf8("dwuip\u{00f3}\u{0142}kilogramowy"), 7);
    }

    #[test]
    fn bare_ponad_does_not_count() {
        assert_eq!(find_utf8("ponadkilogramowy"), 0);
        assert_eq!(find_utf8("ponaddwukilogramowy"), 8);
    }

    #[test]
    fn tens_swallow_at_most_one_unit() {
        // after a tens part only a unit may follow, so a teens or tens
        // continuation stops the match after the tens part itself
        assert_eq!(find_utf8("dwudziestodziesi\u{0119}ciokilogramowy"), 10);
        assert_eq!(find_utf8("dwudziestojedenastokilogramowy"), 10);
        assert_eq!(find_utf8("dwudziestotrzykilogramowy"), 14);
    }

    #[test]
    fn thousand_compositions() {
        assert_eq!(find_utf8("tysi\u{0105}cdwukilogramowy"), 9);
        assert_eq!(find_utf8("studwudziestokilogramowy"), 13);
    }

    #[test]
    fn numeral_adverbs() {
        let mut sd = Setdesc::new();
        check_numeral_adverbs(
            &charset::utf8_to_charset("trzykrotnie").unwrap(),
            &mut sd,
        );
        assert_eq!(sd.len(), 1);
        let d = sd.iter().next().unwrap();
        assert_eq!(d.main_form, "trzykrotnie");
        assert_eq!(d.category.to_string(), "adverb:positive");

        let mut sd = Setdesc::new();
        check_numeral_adverbs(b"krotnie", &mut sd);
        check_numeral_adverbs(b"trzykrotny", &mut sd);
        check_numeral_adverbs(b"ponadkrotnie", &mut sd);
        assert!(sd.is_empty());
    }
}
