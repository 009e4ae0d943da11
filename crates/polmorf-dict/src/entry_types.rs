// The table of entry types.
//
// An entry type names one declension or conjugation pattern of one part of
// speech: its header string appears verbatim in source word files and its
// category template fixes every axis the paradigm does not inflect. The
// remaining axes are filled per form slot by `paradigm::complete_category`.

use std::sync::OnceLock;

use hashbrown::HashMap;
use polmorf_core::{
    Aspect, Category, Degree, Gender, Inflexion, PartOfSpeech, TypeOfNumeral, TypeOfPronoun,
};

/// Index into [`ENTRY_TYPES`].
pub type TypeIndex = u8;

/// Index into an inflexion's table of ending sets.
pub type EndingIndex = u16;

/// One row of the entry-type table.
#[derive(Debug, Clone, Copy)]
pub struct EntryType {
    pub name: &'static str,
    pub category: Category,
}

const BASE: Category = Category {
    part_of_speech: PartOfSpeech::None,
    inflexion: Inflexion::Uninflected,
    declension_case: polmorf_core::DeclensionCase::None,
    number: polmorf_core::Number::None,
    gender: Gender::None,
    degree: Degree::None,
    aspect: Aspect::None,
    mood: polmorf_core::Mood::None,
    tense: polmorf_core::Tense::None,
    person: polmorf_core::Person::None,
    form_of_verb: polmorf_core::FormOfVerb::None,
    type_of_pronoun: TypeOfPronoun::None,
    type_of_numeral: TypeOfNumeral::None,
};

const fn noun(gender: Gender) -> Category {
    Category {
        part_of_speech: PartOfSpeech::Noun,
        inflexion: Inflexion::Substantival,
        gender,
        ..BASE
    }
}

const fn adjective(degree: Degree) -> Category {
    Category {
        part_of_speech: PartOfSpeech::Adjective,
        inflexion: Inflexion::Adjectival,
        degree,
        ..BASE
    }
}

const fn participle(part_of_speech: PartOfSpeech) -> Category {
    Category {
        part_of_speech,
        inflexion: Inflexion::Adjectival,
        ..BASE
    }
}

const fn verb(aspect: Aspect) -> Category {
    Category {
        part_of_speech: PartOfSpeech::Verb,
        inflexion: Inflexion::Conjugation,
        aspect,
        ..BASE
    }
}

const fn adverb(degree: Degree) -> Category {
    Category {
        part_of_speech: PartOfSpeech::Adverb,
        degree,
        ..BASE
    }
}

const fn bare(part_of_speech: PartOfSpeech) -> Category {
    Category {
        part_of_speech,
        ..BASE
    }
}

const fn pronoun(type_of_pronoun: TypeOfPronoun, inflexion: Inflexion) -> Category {
    Category {
        part_of_speech: PartOfSpeech::Pronoun,
        inflexion,
        type_of_pronoun,
        ..BASE
    }
}

const fn numeral(type_of_numeral: TypeOfNumeral, inflexion: Inflexion) -> Category {
    Category {
        part_of_speech: PartOfSpeech::Numeral,
        inflexion,
        type_of_numeral,
        ..BASE
    }
}

const fn row(name: &'static str, category: Category) -> EntryType {
    EntryType { name, category }
}

/// Number of entry types.
pub const NENTRY_TYPES: usize = 51;

/// The entry-type table. Expanding every row over its paradigm slots yields
/// the closed legal category set of 1002 elements.
pub const ENTRY_TYPES: [EntryType; NENTRY_TYPES] = [
    row("masculine-personal noun", noun(Gender::MasculinePersonal)),
    row("masculine-animal noun", noun(Gender::MasculineAnimal)),
    row("masculine-inanimate noun", noun(Gender::MasculineInanimate)),
    row("feminine noun", noun(Gender::Feminine)),
    row("neuter noun", noun(Gender::Neuter)),
    row("plural noun", noun(Gender::NonMasculinePersonal)),
    row(
        "uninflected noun",
        Category {
            part_of_speech: PartOfSpeech::Noun,
            gender: Gender::Neuter,
            ..BASE
        },
    ),
    row(
        "verbal noun",
        Category {
            part_of_speech: PartOfSpeech::VerbalNoun,
            inflexion: Inflexion::Substantival,
            ..BASE
        },
    ),
    row("adjective", adjective(Degree::Positive)),
    row("comparative adjective", adjective(Degree::Comparative)),
    row("superlative adjective", adjective(Degree::Superlative)),
    row(
        "adjectival passive participle",
        participle(PartOfSpeech::AdjectivalPassiveParticiple),
    ),
    row(
        "adjectival active participle",
        participle(PartOfSpeech::AdjectivalActiveParticiple),
    ),
    row(
        "adjectival past participle",
        participle(PartOfSpeech::AdjectivalPastParticiple),
    ),
    row("imperfect verb", verb(Aspect::Imperfect)),
    row("perfect verb", verb(Aspect::Perfect)),
    row("adverb", adverb(Degree::Positive)),
    row("comparative adverb", adverb(Degree::Comparative)),
    row("superlative adverb", adverb(Degree::Superlative)),
    row("preposition", bare(PartOfSpeech::Preposition)),
    row("conjunction", bare(PartOfSpeech::Conjunction)),
    row("particle", bare(PartOfSpeech::Particle)),
    row("interjection", bare(PartOfSpeech::Interjection)),
    row(
        "substantival personal pronoun",
        pronoun(TypeOfPronoun::Personal, Inflexion::Substantival),
    ),
    row(
        "adjectival personal pronoun",
        pronoun(TypeOfPronoun::Personal, Inflexion::Adjectival),
    ),
    row(
        "reflexive pronoun",
        pronoun(TypeOfPronoun::Reflexive, Inflexion::ByCase),
    ),
    row(
        "indefinite pronoun",
        pronoun(TypeOfPronoun::Indefinite, Inflexion::ByCase),
    ),
    row(
        "adjectival indefinite pronoun",
        pronoun(TypeOfPronoun::Indefinite, Inflexion::Adjectival),
    ),
    row(
        "numeral indefinite pronoun",
        pronoun(TypeOfPronoun::Indefinite, Inflexion::Numeral),
    ),
    row(
        "uninflected indefinite pronoun",
        pronoun(TypeOfPronoun::Indefinite, Inflexion::Uninflected),
    ),
    row(
        "negative pronoun",
        pronoun(TypeOfPronoun::Negative, Inflexion::ByCase),
    ),
    row(
        "adjectival negative pronoun",
        pronoun(TypeOfPronoun::Negative, Inflexion::Adjectival),
    ),
    row(
        "uninflected negative pronoun",
        pronoun(TypeOfPronoun::Negative, Inflexion::Uninflected),
    ),
    row(
        "adjectival demonstrative pronoun",
        pronoun(TypeOfPronoun::Demonstrative, Inflexion::Adjectival),
    ),
    row(
        "numeral demonstrative pronoun",
        pronoun(TypeOfPronoun::Demonstrative, Inflexion::Numeral),
    ),
    row(
        "uninflected demonstrative pronoun",
        pronoun(TypeOfPronoun::Demonstrative, Inflexion::Uninflected),
    ),
    row(
        "adjectival possessive pronoun",
        pronoun(TypeOfPronoun::Possessive, Inflexion::Adjectival),
    ),
    row(
        "interrogative-relative pronoun",
        pronoun(TypeOfPronoun::InterrogativeRelative, Inflexion::ByCase),
    ),
    row(
        "adjectival interrogative-relative pronoun",
        pronoun(TypeOfPronoun::InterrogativeRelative, Inflexion::Adjectival),
    ),
    row(
        "numeral interrogative-relative pronoun",
        pronoun(TypeOfPronoun::InterrogativeRelative, Inflexion::Numeral),
    ),
    row(
        "uninflected interrogative-relative pronoun",
        pronoun(TypeOfPronoun::InterrogativeRelative, Inflexion::Uninflected),
    ),
    row(
        "cardinal numeral",
        numeral(TypeOfNumeral::Cardinal, Inflexion::Numeral),
    ),
    row(
        "cardinal numeral one",
        numeral(TypeOfNumeral::Cardinal, Inflexion::NumeralOne),
    ),
    row(
        "cardinal numeral two",
        numeral(TypeOfNumeral::Cardinal, Inflexion::NumeralTwo),
    ),
    row(
        "substantival cardinal numeral",
        numeral(TypeOfNumeral::Cardinal, Inflexion::Substantival),
    ),
    row(
        "collective numeral",
        numeral(TypeOfNumeral::Collective, Inflexion::ByCase),
    ),
    row(
        "fractional numeral",
        numeral(TypeOfNumeral::Fractional, Inflexion::ByGender),
    ),
    row(
        "uninflected fractional numeral",
        numeral(TypeOfNumeral::Fractional, Inflexion::Uninflected),
    ),
    row(
        "ordinal numeral",
        numeral(TypeOfNumeral::Ordinal, Inflexion::Adjectival),
    ),
    row(
        "multiple numeral",
        numeral(TypeOfNumeral::Multiple, Inflexion::Adjectival),
    ),
    row(
        "multiplicative numeral",
        numeral(TypeOfNumeral::Multiplicative, Inflexion::Adjectival),
    ),
];

fn entry_type_map() -> &'static HashMap<&'static str, TypeIndex> {
    static MAP: OnceLock<HashMap<&'static str, TypeIndex>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut m = HashMap::with_capacity(NENTRY_TYPES);
        for (i, et) in ENTRY_TYPES.iter().enumerate() {
            let prev = m.insert(et.name, i as TypeIndex);
            debug_assert!(prev.is_none(), "duplicated entry type name");
        }
        m
    })
}

/// Looks up the table index of an entry-type header string.
pub fn entry_type_index(name: &str) -> Option<TypeIndex> {
    entry_type_map().get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        assert_eq!(entry_type_map().len(), NENTRY_TYPES);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(entry_type_index("masculine-personal noun"), Some(0));
        assert_eq!(
            entry_type_index("multiplicative numeral"),
            Some((NENTRY_TYPES - 1) as TypeIndex)
        );
        assert_eq!(entry_type_index("masculine-personal"), None);
        assert_eq!(entry_type_index(""), None);
    }

    #[test]
    fn templates_leave_inflected_axes_unset() {
        use polmorf_core::{DeclensionCase, Number};
        for et in &ENTRY_TYPES {
            assert_eq!(et.category.declension_case, DeclensionCase::None, "{}", et.name);
            assert_eq!(et.category.number, Number::None, "{}", et.name);
        }
    }

    #[test]
    fn pronoun_and_numeral_rows_have_their_type_axis() {
        for et in &ENTRY_TYPES {
            match et.category.part_of_speech {
                PartOfSpeech::Pronoun => {
                    assert_ne!(et.category.type_of_pronoun, TypeOfPronoun::None, "{}", et.name)
                }
                PartOfSpeech::Numeral => {
                    assert_ne!(et.category.type_of_numeral, TypeOfNumeral::None, "{}", et.name)
                }
                _ => {
                    assert_eq!(et.category.type_of_pronoun, TypeOfPronoun::None, "{}", et.name);
                    assert_eq!(et.category.type_of_numeral, TypeOfNumeral::None, "{}", et.name);
                }
            }
        }
    }
}
