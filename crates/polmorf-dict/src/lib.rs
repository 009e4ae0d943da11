//! Polish morphological dictionary.
//!
//! - [`entry_types`] -- the 51-row table of declension/conjugation patterns
//!   and their category templates
//! - [`paradigm`] -- form-slot counts, slot-to-axes completion, and the
//!   generator of the closed legal category set (1002 elements)
//! - [`dictionary`] -- the word-form index: source word files, persisted
//!   word files, lookup, and the per-type report
//! - [`numerals`] -- the compositional recognizer for multiplicative
//!   numeral prefixes, independent of any dictionary

pub mod dictionary;
pub mod entry_types;
pub mod numerals;
pub mod paradigm;

pub use dictionary::{Dictionary, DictionaryError, TableRow};
pub use entry_types::{ENTRY_TYPES, EntryType, NENTRY_TYPES, entry_type_index};
pub use numerals::{check_numeral_adverbs, find_numeral_prefix, generate_numeral_prefixes};
pub use paradigm::{complete_category, generate_all_categories, number_of_forms};
