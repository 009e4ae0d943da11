//! Shared types for Polish morphological analysis.
//!
//! - [`charset`] -- the fixed 8-bit character set used for all dictionary
//!   text: byte/Unicode conversion, classification, case mapping, collation
//! - [`category`] -- the 13-axis grammatical category record, its canonical
//!   string rendering, and the `Description`/`Setdesc` query-result types

pub mod category;
pub mod charset;

pub use category::{
    Aspect, Category, DeclensionCase, Degree, Description, FormOfVerb, Gender, Inflexion, Mood,
    Number, PartOfSpeech, Person, Setdesc, Tense, TypeOfNumeral, TypeOfPronoun,
};
pub use charset::InvalidCharacterError;
