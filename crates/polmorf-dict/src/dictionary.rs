// The word-form index.
//
// Each source block is stored as one entry: the type-table index, the
// longest common prefix of the block's forms (the stem), and an index into
// the per-inflexion table of deduplicated ending sets. A surface form is
// found by trying every prefix split of the query against the stem index.

use std::cmp::Ordering;
use std::io::{BufRead, Write};

use polmorf_core::charset;
use polmorf_core::{Description, Inflexion, Setdesc};

use crate::entry_types::{ENTRY_TYPES, EndingIndex, NENTRY_TYPES, TypeIndex, entry_type_index};
use crate::paradigm::{NINFLEXIONS, SLOTS, complete_category, number_of_forms};

/// Missing-slot sentinel in ending sets and in the source format.
const NO_FORM: &[u8] = b"-";

/// Errors of dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// Malformed source word file; `line` is 1-based.
    #[error("{message}, line {line}")]
    Parse { message: &'static str, line: u64 },
    /// Malformed persisted word file.
    #[error("invalid word file")]
    InvalidWordFile,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DictionaryError {
    fn parse(message: &'static str, line: u64) -> Self {
        Self::Parse { message, line }
    }
}

/// One row of the dictionary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow {
    pub entry_type: &'static str,
    pub nentries: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    type_index: TypeIndex,
    stem: Vec<u8>,
    ending_index: EndingIndex,
}

// Entries are kept in descending stem order so that all entries sharing a
// stem form one contiguous run locatable by partition point.
fn entry_order(a: &Entry, b: &Entry) -> Ordering {
    b.stem
        .cmp(&a.stem)
        .then_with(|| a.type_index.cmp(&b.type_index))
        .then_with(|| a.ending_index.cmp(&b.ending_index))
}

/// An ending set: one ending per form slot, `-` where the slot is empty.
type EndingSet = Vec<Vec<u8>>;

#[derive(Debug, Default, Clone)]
struct Store {
    entries: Vec<Entry>,
    endings: [Vec<EndingSet>; NINFLEXIONS],
}

/// The morphological dictionary.
///
/// Built from a source word file or a persisted word file; immutable between
/// loads. A failed load leaves the previous contents untouched. Queries are
/// read-only and safe to share; loads require exclusive access.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    store: Store,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents with the entries of a source word file.
    pub fn load_source_word_file(
        &mut self,
        input: &mut impl BufRead,
    ) -> Result<(), DictionaryError> {
        let mut store = Store::default();
        add_words(&mut store, input)?;
        self.store = store;
        Ok(())
    }

    /// Adds the entries of a source word file to the current contents.
    pub fn add_source_word_file(
        &mut self,
        input: &mut impl BufRead,
    ) -> Result<(), DictionaryError> {
        let mut store = self.store.clone();
        add_words(&mut store, input)?;
        self.store = store;
        Ok(())
    }

    /// Re-emits the contents in the source block format.
    ///
    /// With `do_sort`, blocks are ordered by the collation of their main
    /// form, then entry type, then form by form; the output is the same on
    /// every call.
    pub fn write_source_word_file(
        &self,
        output: &mut impl Write,
        do_sort: bool,
    ) -> Result<(), DictionaryError> {
        let store = &self.store;
        let mut order: Vec<usize> = (0..store.entries.len()).collect();
        if do_sort {
            order.sort_by(|&a, &b| store.source_order(a, b));
        }
        for i in order {
            let e = &store.entries[i];
            let et = &ENTRY_TYPES[e.type_index as usize];
            writeln!(output, "{}", et.name)?;
            let infl = et.category.inflexion;
            let set = &store.endings[infl as usize][e.ending_index as usize];
            for ending in set.iter().take(number_of_forms(infl)) {
                if ending == NO_FORM {
                    writeln!(output, "-")?;
                } else {
                    let mut form = e.stem.clone();
                    form.extend_from_slice(ending);
                    writeln!(output, "{}", charset::charset_to_utf8(&form))?;
                }
            }
            writeln!(output)?;
        }
        Ok(())
    }

    /// Writes the persisted word-file form of the contents.
    pub fn write_word_file(&self, output: &mut impl Write) -> Result<(), DictionaryError> {
        let store = &self.store;
        put_number(output, store.entries.len() as u64)?;
        for e in &store.entries {
            put_number(output, e.type_index as u64)?;
            put_line(output, &e.stem)?;
            put_number(output, e.ending_index as u64)?;
        }
        for table in &store.endings {
            put_number(output, table.len() as u64)?;
            for set in table {
                for ending in set {
                    put_line(output, ending)?;
                }
            }
        }
        Ok(())
    }

    /// Replaces the contents with a persisted word file.
    ///
    /// On any validation or read failure the previous contents stay in
    /// place.
    pub fn load_word_file(&mut self, input: &mut impl BufRead) -> Result<(), DictionaryError> {
        let mut store = Store::default();

        let nent = get_number(input)?;
        for _ in 0..nent {
            let type_index = get_number(input)?;
            if type_index >= NENTRY_TYPES as u64 {
                return Err(DictionaryError::InvalidWordFile);
            }
            let stem = get_line(input)?;
            let ending_index = get_number(input)?;
            if ending_index > EndingIndex::MAX as u64 {
                return Err(DictionaryError::InvalidWordFile);
            }
            store.entries.push(Entry {
                type_index: type_index as TypeIndex,
                stem,
                ending_index: ending_index as EndingIndex,
            });
        }
        if !store.entries.is_sorted_by(|a, b| entry_order(a, b).is_le()) {
            return Err(DictionaryError::InvalidWordFile);
        }
        for (i, table) in store.endings.iter_mut().enumerate() {
            let nsets = get_number(input)?;
            if nsets > EndingIndex::MAX as u64 + 1 {
                return Err(DictionaryError::InvalidWordFile);
            }
            for _ in 0..nsets {
                let mut set = EndingSet::with_capacity(SLOTS[i]);
                for _ in 0..SLOTS[i] {
                    set.push(get_line(input)?);
                }
                table.push(set);
            }
        }
        for e in &store.entries {
            let infl = ENTRY_TYPES[e.type_index as usize].category.inflexion;
            if e.ending_index as usize >= store.endings[infl as usize].len() {
                return Err(DictionaryError::InvalidWordFile);
            }
        }

        self.store = store;
        Ok(())
    }

    /// Whether the UTF-8 word has at least one analysis. Total: input that
    /// cannot be represented in the charset is simply absent.
    pub fn has_entry_utf8(&self, s: &str) -> bool {
        match charset::utf8_to_charset(s) {
            Ok(t) => self.store.find(&t, None),
            Err(_) => false,
        }
    }

    /// Collects every analysis of the UTF-8 word into `sd`. Total.
    pub fn search_utf8(&self, s: &str, sd: &mut Setdesc) {
        if let Ok(t) = charset::utf8_to_charset(s) {
            self.store.find(&t, Some(sd));
        }
    }

    /// Whether the charset-encoded word has at least one analysis.
    pub fn has_entry_charset(&self, s: &[u8]) -> bool {
        self.store.find(s, None)
    }

    /// Collects every analysis of the charset-encoded word into `sd`.
    pub fn search_charset(&self, s: &[u8], sd: &mut Setdesc) {
        self.store.find(s, Some(sd));
    }

    /// Distinct-entry counts per entry type, one row per table entry.
    pub fn report(&self) -> Vec<TableRow> {
        let mut v: Vec<TableRow> = ENTRY_TYPES
            .iter()
            .map(|et| TableRow {
                entry_type: et.name,
                nentries: 0,
            })
            .collect();
        for e in &self.store.entries {
            v[e.type_index as usize].nentries += 1;
        }
        v
    }
}

impl Store {
    fn find(&self, word: &[u8], mut sd: Option<&mut Setdesc>) -> bool {
        let mut found = false;
        for i in 0..=word.len() {
            let prefix = &word[..i];
            let suffix = &word[i..];
            let start = self
                .entries
                .partition_point(|e| e.stem.as_slice() > prefix);
            for e in &self.entries[start..] {
                if e.stem != prefix {
                    break;
                }
                let et = &ENTRY_TYPES[e.type_index as usize];
                let infl = et.category.inflexion;
                let set = &self.endings[infl as usize][e.ending_index as usize];
                for (form, ending) in set.iter().enumerate().take(number_of_forms(infl)) {
                    if ending == NO_FORM || ending.as_slice() != suffix {
                        continue;
                    }
                    match sd.as_deref_mut() {
                        None => return true,
                        Some(sd) => {
                            found = true;
                            let mut category = et.category;
                            complete_category(&mut category, infl, form);
                            let main = self.main_form(&e.stem, infl, e.ending_index);
                            sd.insert(Description {
                                main_form: charset::charset_to_utf8(&main),
                                category,
                            });
                        }
                    }
                }
            }
        }
        found
    }

    // The main form is the first slot of the paradigm that has a form.
    fn main_form(&self, stem: &[u8], infl: Inflexion, ending_index: EndingIndex) -> Vec<u8> {
        let set = &self.endings[infl as usize][ending_index as usize];
        match set.iter().find(|e| e.as_slice() != NO_FORM) {
            Some(ending) => {
                let mut s = stem.to_vec();
                s.extend_from_slice(ending);
                s
            }
            None => stem.to_vec(),
        }
    }

    fn insert_ending(
        &mut self,
        inflexion_index: usize,
        set: &EndingSet,
    ) -> Option<EndingIndex> {
        let table = &mut self.endings[inflexion_index];
        if let Some(k) = table.iter().position(|s| s == set) {
            return Some(k as EndingIndex);
        }
        if table.len() > EndingIndex::MAX as usize {
            return None;
        }
        table.push(set.clone());
        Some((table.len() - 1) as EndingIndex)
    }

    // Ordering used by the sorted source writer: main form collation, then
    // entry type, then the full form lists.
    fn source_order(&self, a: usize, b: usize) -> Ordering {
        let ea = &self.entries[a];
        let eb = &self.entries[b];
        let ia = ENTRY_TYPES[ea.type_index as usize].category.inflexion;
        let ib = ENTRY_TYPES[eb.type_index as usize].category.inflexion;
        let ma = self.main_form(&ea.stem, ia, ea.ending_index);
        let mb = self.main_form(&eb.stem, ib, eb.ending_index);
        charset::alpha_cmp(&ma, &mb)
            .then_with(|| ea.type_index.cmp(&eb.type_index))
            .then_with(|| {
                let sa = &self.endings[ia as usize][ea.ending_index as usize];
                let sb = &self.endings[ib as usize][eb.ending_index as usize];
                for (x, y) in sa.iter().zip(sb.iter()) {
                    let mut fx = ea.stem.clone();
                    fx.extend_from_slice(x);
                    let mut fy = eb.stem.clone();
                    fy.extend_from_slice(y);
                    let r = charset::alpha_cmp(&fx, &fy);
                    if r != Ordering::Equal {
                        return r;
                    }
                }
                Ordering::Equal
            })
    }
}

/// Longest common prefix of the non-empty forms; removes it from every
/// non-empty form and replaces empty forms with the `-` sentinel.
fn lcp(forms: &mut [Vec<u8>]) -> Vec<u8> {
    let mut prefix: Option<Vec<u8>> = None;
    for f in forms.iter().filter(|f| !f.is_empty()) {
        match &mut prefix {
            None => prefix = Some(f.clone()),
            Some(p) => {
                let n = p.iter().zip(f.iter()).take_while(|(a, b)| a == b).count();
                p.truncate(n);
            }
        }
    }
    let prefix = prefix.unwrap_or_default();
    for f in forms.iter_mut() {
        if f.is_empty() {
            *f = NO_FORM.to_vec();
        } else {
            f.drain(..prefix.len());
        }
    }
    prefix
}

struct SourceReader<'a, R> {
    input: &'a mut R,
    lineno: u64,
}

impl<'a, R: BufRead> SourceReader<'a, R> {
    fn new(input: &'a mut R) -> Self {
        Self { input, lineno: 0 }
    }

    // Next non-empty line with comments stripped and whitespace trimmed.
    // Every physical read counts one line, including the failed read at end
    // of input, so that error positions match the input file.
    fn get_line(&mut self) -> Result<Option<Vec<u8>>, DictionaryError> {
        loop {
            let mut buf = Vec::new();
            let n = self.input.read_until(b'\n', &mut buf)?;
            self.lineno += 1;
            if n == 0 {
                return Ok(None);
            }
            if let Some(pos) = buf.iter().position(|&b| b == b'#') {
                buf.truncate(pos);
            }
            trim(&mut buf);
            if !buf.is_empty() {
                return Ok(Some(buf));
            }
        }
    }
}

fn trim(buf: &mut Vec<u8>) {
    while buf.last().is_some_and(u8::is_ascii_whitespace) {
        buf.pop();
    }
    let lead = buf
        .iter()
        .take_while(|b| b.is_ascii_whitespace())
        .count();
    buf.drain(..lead);
}

// Reads one block: the entry-type header and its form lines, charset-encoded.
fn get_raw_entry<R: BufRead>(
    reader: &mut SourceReader<'_, R>,
) -> Result<Option<(TypeIndex, Vec<Vec<u8>>)>, DictionaryError> {
    let Some(header) = reader.get_line()? else {
        return Ok(None);
    };
    let type_index = std::str::from_utf8(&header)
        .ok()
        .and_then(entry_type_index)
        .ok_or_else(|| DictionaryError::parse("invalid entry name", reader.lineno))?;
    let inflexion = ENTRY_TYPES[type_index as usize].category.inflexion;
    let n = number_of_forms(inflexion);
    let mut forms = Vec::with_capacity(n);
    let mut any = false;
    for _ in 0..n {
        let Some(line) = reader.get_line()? else {
            return Err(DictionaryError::parse("not enough forms", reader.lineno));
        };
        if line == NO_FORM {
            forms.push(Vec::new());
            continue;
        }
        let text = std::str::from_utf8(&line).map_err(|_| {
            DictionaryError::parse("invalid Unicode character", reader.lineno)
        })?;
        let form = charset::utf8_to_charset(text).map_err(|_| {
            DictionaryError::parse("character not represented in dictionary", reader.lineno)
        })?;
        forms.push(form);
        any = true;
    }
    if !any {
        return Err(DictionaryError::parse("all forms empty", reader.lineno));
    }
    Ok(Some((type_index, forms)))
}

fn add_words(store: &mut Store, input: &mut impl BufRead) -> Result<(), DictionaryError> {
    let mut reader = SourceReader::new(input);
    while let Some((type_index, mut forms)) = get_raw_entry(&mut reader)? {
        let inflexion = ENTRY_TYPES[type_index as usize].category.inflexion;
        let stem = lcp(&mut forms);
        let ending_index = store
            .insert_ending(inflexion as usize, &forms)
            .ok_or_else(|| DictionaryError::parse("too many endings", reader.lineno))?;
        store.entries.push(Entry {
            type_index,
            stem,
            ending_index,
        });
    }
    store.entries.sort_by(entry_order);
    store.entries.dedup();
    Ok(())
}

fn put_line(output: &mut impl Write, s: &[u8]) -> Result<(), DictionaryError> {
    output.write_all(s)?;
    output.write_all(b"\n")?;
    Ok(())
}

fn put_number(output: &mut impl Write, n: u64) -> Result<(), DictionaryError> {
    writeln!(output, "{n}")?;
    Ok(())
}

fn get_line(input: &mut impl BufRead) -> Result<Vec<u8>, DictionaryError> {
    let mut buf = Vec::new();
    let n = input.read_until(b'\n', &mut buf)?;
    if n == 0 {
        return Err(DictionaryError::InvalidWordFile);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(buf)
}

// A number line: decimal digits only, no leading zero except "0" itself.
fn get_number(input: &mut impl BufRead) -> Result<u64, DictionaryError> {
    let line = get_line(input)?;
    if line.is_empty()
        || !line.iter().all(u8::is_ascii_digit)
        || (line.len() > 1 && line[0] == b'0')
    {
        return Err(DictionaryError::InvalidWordFile);
    }
    let mut n: u64 = 0;
    for &b in &line {
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add((b - b'0') as u64))
            .ok_or(DictionaryError::InvalidWordFile)?;
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const NOUN_BLOCK: &str = "masculine-inanimate noun\n\
        teatr\nteatru\nteatrowi\nteatr\nteatrem\nteatrze\nteatrze\n\
        teatry\nteatr\u{00f3}w\nteatrom\nteatry\nteatrami\nteatrach\nteatry\n\n";

    fn load(source: &str) -> Dictionary {
        let mut d = Dictionary::new();
        d.load_source_word_file(&mut Cursor::new(source)).unwrap();
        d
    }

    #[test]
    fn empty_dictionary_answers_nothing() {
        let d = Dictionary::new();
        assert!(!d.has_entry_utf8(""));
        assert!(!d.has_entry_utf8("a"));
        assert!(!d.has_entry_utf8("-"));
        let mut sd = Setdesc::new();
        d.search_utf8("", &mut sd);
        d.search_utf8("a", &mut sd);
        d.search_utf8("-", &mut sd);
        assert!(sd.is_empty());
    }

    #[test]
    fn loads_a_single_block() {
        let d = load(NOUN_BLOCK);
        assert!(d.has_entry_utf8("teatr"));
        assert!(d.has_entry_utf8("teatr\u{00f3}w"));
        assert!(!d.has_entry_utf8("teatro"));
        let mut sd = Setdesc::new();
        d.search_utf8("teatrowi", &mut sd);
        assert_eq!(sd.len(), 1);
        let desc = sd.iter().next().unwrap();
        assert_eq!(desc.main_form, "teatr");
        assert_eq!(
            desc.category.to_string(),
            "noun:masculine_inanimate:dative:singular"
        );
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let source = "# full block with a comment\n\n\
            preposition  # header\n  do  \n\n\n";
        let d = load(source);
        assert!(d.has_entry_utf8("do"));
    }

    #[test]
    fn unrepresentable_query_is_absent() {
        let d = load(NOUN_BLOCK);
        assert!(!d.has_entry_utf8("\u{4e00}"));
        let mut sd = Setdesc::new();
        d.search_utf8("\u{4e00}", &mut sd);
        assert!(sd.is_empty());
    }

    #[test]
    fn invalid_entry_name_reports_line() {
        let mut d = Dictionary::new();
        let err = d
            .load_source_word_file(&mut Cursor::new("!masculine-personal noun\nabc\n"))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid entry name, line 1");
    }

    #[test]
    fn missing_form_reports_line_after_input() {
        // A 14-slot template with 13 forms: header on line 1, forms on
        // lines 2-14, a blank line 15, then end of input on line 16.
        let mut source = String::from("masculine-personal noun\n");
        for form in [
            "abderyta",
            "abderyty",
            "abderycie",
            "abderyt\u{0119}",
            "abderyt\u{0105}",
            "abderycie",
            "abderyto",
            "abderyci",
            "abderyt\u{00f3}w",
            "abderytom",
            "abderyt\u{00f3}w",
            "abderytami",
            "abderytach",
        ] {
            source.push_str(form);
            source.push('\n');
        }
        source.push('\n');
        let mut d = Dictionary::new();
        let err = d
            .load_source_word_file(&mut Cursor::new(source))
            .unwrap_err();
        assert_eq!(err.to_string(), "not enough forms, line 16");
    }

    #[test]
    fn all_empty_block_reports_line() {
        let source = format!("masculine-personal noun\n{}", "-\n".repeat(14));
        let mut d = Dictionary::new();
        let err = d
            .load_source_word_file(&mut Cursor::new(source))
            .unwrap_err();
        assert_eq!(err.to_string(), "all forms empty, line 15");
    }

    #[test]
    fn unrepresentable_form_reports_line() {
        let source = "masculine-inanimate noun\nab\u{00a1}eryta\nteatru\nteatrowi\nteatr\n\
            teatrem\nteatrze\nteatrze\nteatry\nteatr\u{00f3}w\nteatrom\nteatry\nteatrami\n\
            teatrach\nteatry\n\n";
        let mut d = Dictionary::new();
        let err = d
            .load_source_word_file(&mut Cursor::new(source))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "character not represented in dictionary, line 2"
        );
    }

    #[test]
    fn invalid_utf8_form_reports_line() {
        let mut source = b"masculine-inanimate noun\nab".to_vec();
        source.extend_from_slice(&[0xf8, 0x88, 0x80, 0x80, 0x80]);
        source.extend_from_slice(b"a\nteatru\n");
        let mut d = Dictionary::new();
        let err = d
            .load_source_word_file(&mut Cursor::new(source))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid Unicode character, line 2");
    }

    #[test]
    fn failed_load_keeps_previous_contents() {
        let mut d = load(NOUN_BLOCK);
        assert!(
            d.load_source_word_file(&mut Cursor::new("bogus header\n"))
                .is_err()
        );
        assert!(d.has_entry_utf8("teatr"));
    }

    #[test]
    fn add_appends_to_contents() {
        let mut d = load(NOUN_BLOCK);
        d.add_source_word_file(&mut Cursor::new("preposition\ndo\n\n"))
            .unwrap();
        assert!(d.has_entry_utf8("teatr"));
        assert!(d.has_entry_utf8("do"));
        // a failed add keeps both
        assert!(
            d.add_source_word_file(&mut Cursor::new("bogus header\n"))
                .is_err()
        );
        assert!(d.has_entry_utf8("teatr") && d.has_entry_utf8("do"));
    }

    #[test]
    fn duplicate_blocks_collapse() {
        let source = format!("{NOUN_BLOCK}{NOUN_BLOCK}");
        let d = load(&source);
        let report = d.report();
        let row = report
            .iter()
            .find(|r| r.entry_type == "masculine-inanimate noun")
            .unwrap();
        assert_eq!(row.nentries, 1);
    }

    #[test]
    fn report_has_a_row_per_entry_type() {
        let d = Dictionary::new();
        let report = d.report();
        assert_eq!(report.len(), NENTRY_TYPES);
        assert!(report.iter().all(|r| r.nentries == 0));
    }

    #[test]
    fn word_file_round_trip() {
        let d = load(NOUN_BLOCK);
        let mut wf = Vec::new();
        d.write_word_file(&mut wf).unwrap();
        let mut d2 = Dictionary::new();
        d2.load_word_file(&mut Cursor::new(&wf)).unwrap();
        assert!(d2.has_entry_utf8("teatrom"));
        let mut wf2 = Vec::new();
        d2.write_word_file(&mut wf2).unwrap();
        assert_eq!(wf, wf2);
    }

    #[test]
    fn truncated_word_file_is_rejected_and_keeps_contents() {
        let d = load(NOUN_BLOCK);
        let mut wf = Vec::new();
        d.write_word_file(&mut wf).unwrap();
        wf.truncate(wf.len() / 2);
        let mut d2 = load("preposition\ndo\n\n");
        assert!(d2.load_word_file(&mut Cursor::new(&wf)).is_err());
        assert!(d2.has_entry_utf8("do"));
    }

    #[test]
    fn corrupt_number_lines_are_rejected() {
        for bad in ["", "0123", "12a", "-1", " 1"] {
            let mut input = Cursor::new(format!("{bad}\n"));
            assert!(get_number(&mut input).is_err(), "{bad:?}");
        }
        assert_eq!(get_number(&mut Cursor::new("0\n")).unwrap(), 0);
        assert_eq!(get_number(&mut Cursor::new("1050\n")).unwrap(), 1050);
    }

    #[test]
    fn lcp_splits_blocks() {
        let mut forms = vec![
            b"teatr".to_vec(),
            Vec::new(),
            b"teatru".to_vec(),
            b"teatrami".to_vec(),
        ];
        let stem = lcp(&mut forms);
        assert_eq!(stem, b"teatr");
        assert_eq!(forms[0], b"");
        assert_eq!(forms[1], b"-");
        assert_eq!(forms[2], b"u");
        assert_eq!(forms[3], b"ami");
    }

    #[test]
    fn source_writer_is_a_fixed_point() {
        let source = "preposition\ndo\n\nmasculine-inanimate noun\n\
            teatr\nteatru\nteatrowi\nteatr\nteatrem\nteatrze\nteatrze\n\
            teatry\nteatr\u{00f3}w\nteatrom\nteatry\nteatrami\nteatrach\nteatry\n\n";
        let d = load(source);
        let mut once = Vec::new();
        d.write_source_word_file(&mut once, false).unwrap();
        let mut d2 = Dictionary::new();
        d2.load_source_word_file(&mut Cursor::new(&once)).unwrap();
        let mut twice = Vec::new();
        d2.write_source_word_file(&mut twice, false).unwrap();
        assert_eq!(once, twice);
    }
}
