// The 13-axis grammatical category record and its canonical rendering.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use crate::charset;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartOfSpeech {
    #[default]
    None,
    Noun,
    Adjective,
    Pronoun,
    Numeral,
    Verb,
    AdjectivalPassiveParticiple,
    AdjectivalActiveParticiple,
    VerbalNoun,
    AdjectivalPastParticiple,
    Adverb,
    Preposition,
    Conjunction,
    Particle,
    Interjection,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Inflexion {
    #[default]
    Uninflected,
    Substantival,
    Adjectival,
    Numeral,
    NumeralOne,
    NumeralTwo,
    ByCase,
    ByGender,
    Conjugation,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeclensionCase {
    #[default]
    None,
    Nominative,   // mianownik
    Genitive,     // dopelniacz
    Dative,       // celownik
    Accusative,   // biernik
    Instrumental, // narzednik
    Locative,     // miejscownik
    Vocative,     // wolacz
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Number {
    #[default]
    None,
    Singular,
    Plural,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    #[default]
    None,
    MasculinePersonal,
    MasculineAnimal,
    MasculineInanimate,
    Masculine,
    Feminine,
    Neuter,
    NonMasculinePersonal,
    MasculineAnimate,
    MasculineImpersonal,
    NonFeminine,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Degree {
    #[default]
    None,
    Positive,
    Comparative,
    Superlative,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Aspect {
    #[default]
    None,
    Imperfect,
    Perfect,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mood {
    #[default]
    None,
    Indicative,
    Imperative,
    Subjunctive,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tense {
    #[default]
    None,
    Past,
    Present,
    Future,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Person {
    #[default]
    None,
    First,
    Second,
    Third,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormOfVerb {
    #[default]
    None,
    Infinitive,
    ImpersonalFormOfPastTense,
    SimultaneousAdverbialParticiple,
    AnticipatoryAdverbialParticiple,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeOfPronoun {
    #[default]
    None,
    Personal,
    Reflexive,
    Indefinite,
    Negative,
    Demonstrative,
    Possessive,
    InterrogativeRelative,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeOfNumeral {
    #[default]
    None,
    Cardinal,
    Fractional,
    Multiplicative,
    Multiple,
    Collective,
    Ordinal,
}

/// A full grammatical description of one inflected form.
///
/// Only combinations consistent with the part of speech's paradigm occur;
/// the closed legal set is enumerated by the dictionary's entry-type table.
/// The derived ordering compares axis by axis in field order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category {
    pub part_of_speech: PartOfSpeech,
    pub inflexion: Inflexion,
    pub declension_case: DeclensionCase,
    pub number: Number,
    pub gender: Gender,
    pub degree: Degree,
    pub aspect: Aspect,
    pub mood: Mood,
    pub tense: Tense,
    pub person: Person,
    pub form_of_verb: FormOfVerb,
    pub type_of_pronoun: TypeOfPronoun,
    pub type_of_numeral: TypeOfNumeral,
}

fn part_of_speech_name(p: PartOfSpeech) -> &'static str {
    match p {
        PartOfSpeech::None => "none",
        PartOfSpeech::Noun => "noun",
        PartOfSpeech::Adjective => "adjective",
        PartOfSpeech::Pronoun => "pronoun",
        PartOfSpeech::Numeral => "numeral",
        PartOfSpeech::Verb => "verb",
        PartOfSpeech::AdjectivalPassiveParticiple => "adjectival_passive_participle",
        PartOfSpeech::AdjectivalActiveParticiple => "adjectival_active_participle",
        PartOfSpeech::VerbalNoun => "verbal_noun",
        PartOfSpeech::AdjectivalPastParticiple => "adjectival_past_participle",
        PartOfSpeech::Adverb => "adverb",
        PartOfSpeech::Preposition => "preposition",
        PartOfSpeech::Conjunction => "conjunction",
        PartOfSpeech::Particle => "particle",
        PartOfSpeech::Interjection => "interjection",
    }
}

fn inflexion_name(i: Inflexion) -> &'static str {
    match i {
        Inflexion::Uninflected => "uninflected",
        Inflexion::Substantival => "substantival",
        Inflexion::Adjectival => "adjectival",
        Inflexion::Numeral => "numeral",
        Inflexion::NumeralOne => "numeral_1",
        Inflexion::NumeralTwo => "numeral_2",
        Inflexion::ByCase => "by_case",
        Inflexion::ByGender => "by_gender",
        Inflexion::Conjugation => "conjugation",
    }
}

fn case_name(c: DeclensionCase) -> &'static str {
    match c {
        DeclensionCase::None => "none",
        DeclensionCase::Nominative => "nominative",
        DeclensionCase::Genitive => "genitive",
        DeclensionCase::Dative => "dative",
        DeclensionCase::Accusative => "accusative",
        DeclensionCase::Instrumental => "instrumental",
        DeclensionCase::Locative => "locative",
        DeclensionCase::Vocative => "vocative",
    }
}

fn number_name(n: Number) -> &'static str {
    match n {
        Number::None => "none",
        Number::Singular => "singular",
        Number::Plural => "plural",
    }
}

fn gender_name(g: Gender) -> &'static str {
    match g {
        Gender::None => "none",
        Gender::MasculinePersonal => "masculine_personal",
        Gender::MasculineAnimal => "masculine_animal",
        Gender::MasculineInanimate => "masculine_inanimate",
        Gender::Masculine => "masculine",
        Gender::Feminine => "feminine",
        Gender::Neuter => "neuter",
        Gender::NonMasculinePersonal => "non_masculine_personal",
        Gender::MasculineAnimate => "masculine_animate",
        Gender::MasculineImpersonal => "masculine_impersonal",
        Gender::NonFeminine => "non_feminine",
    }
}

fn degree_name(d: Degree) -> &'static str {
    match d {
        Degree::None => "none",
        Degree::Positive => "positive",
        Degree::Comparative => "comparative",
        Degree::Superlative => "superlative",
    }
}

fn aspect_name(a: Aspect) -> &'static str {
    match a {
        Aspect::None => "none",
        Aspect::Imperfect => "imperfect",
        Aspect::Perfect => "perfect",
    }
}

fn mood_name(m: Mood) -> &'static str {
    match m {
        Mood::None => "none",
        Mood::Indicative => "indicative",
        Mood::Imperative => "imperative",
        Mood::Subjunctive => "subjunctive",
    }
}

fn tense_name(t: Tense) -> &'static str {
    match t {
        Tense::None => "none",
        Tense::Past => "past",
        Tense::Present => "present",
        Tense::Future => "future",
    }
}

fn person_name(p: Person) -> &'static str {
    match p {
        Person::None => "none",
        Person::First => "first",
        Person::Second => "second",
        Person::Third => "third",
    }
}

fn form_of_verb_name(f: FormOfVerb) -> &'static str {
    match f {
        FormOfVerb::None => "none",
        FormOfVerb::Infinitive => "infinitive",
        FormOfVerb::ImpersonalFormOfPastTense => "impersonal_form_of_past_tense",
        FormOfVerb::SimultaneousAdverbialParticiple => "simultaneous_adverbial_participle",
        FormOfVerb::AnticipatoryAdverbialParticiple => "anticipatory_adverbial_participle",
    }
}

fn type_of_pronoun_name(t: TypeOfPronoun) -> &'static str {
    match t {
        TypeOfPronoun::None => "none",
        TypeOfPronoun::Personal => "personal",
        TypeOfPronoun::Reflexive => "reflexive",
        TypeOfPronoun::Indefinite => "indefinite",
        TypeOfPronoun::Negative => "negative",
        TypeOfPronoun::Demonstrative => "demonstrative",
        TypeOfPronoun::Possessive => "possessive",
        TypeOfPronoun::InterrogativeRelative => "interrogative_relative",
    }
}

fn type_of_numeral_name(t: TypeOfNumeral) -> &'static str {
    match t {
        TypeOfNumeral::None => "none",
        TypeOfNumeral::Cardinal => "cardinal",
        TypeOfNumeral::Fractional => "fractional",
        TypeOfNumeral::Multiplicative => "multiplicative",
        TypeOfNumeral::Multiple => "multiple",
        TypeOfNumeral::Collective => "collective",
        TypeOfNumeral::Ordinal => "ordinal",
    }
}

/// Renders the canonical colon-joined form. The rendering is injective over
/// the legal category set: axes a paradigm never sets are omitted rather than
/// printed as `none`, and no two legal categories collapse to the same text.
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", part_of_speech_name(self.part_of_speech))?;
        match self.part_of_speech {
            PartOfSpeech::None => {}
            PartOfSpeech::Noun => {
                if self.gender != Gender::None {
                    write!(f, ":{}", gender_name(self.gender))?;
                }
                write!(
                    f,
                    ":{}:{}",
                    case_name(self.declension_case),
                    number_name(self.number)
                )?;
            }
            PartOfSpeech::Adjective => {
                write!(
                    f,
                    ":{}:{}:{}:{}",
                    degree_name(self.degree),
                    gender_name(self.gender),
                    case_name(self.declension_case),
                    number_name(self.number)
                )?;
            }
            PartOfSpeech::Pronoun => {
                write!(
                    f,
                    ":{}:{}",
                    type_of_pronoun_name(self.type_of_pronoun),
                    inflexion_name(self.inflexion)
                )?;
                match self.inflexion {
                    Inflexion::Uninflected => {}
                    Inflexion::Substantival => {
                        write!(
                            f,
                            ":{}:{}",
                            case_name(self.declension_case),
                            number_name(self.number)
                        )?;
                    }
                    Inflexion::Adjectival => {
                        write!(
                            f,
                            ":{}:{}:{}",
                            gender_name(self.gender),
                            case_name(self.declension_case),
                            number_name(self.number)
                        )?;
                    }
                    Inflexion::Numeral => {
                        write!(
                            f,
                            ":{}:{}",
                            gender_name(self.gender),
                            case_name(self.declension_case)
                        )?;
                    }
                    Inflexion::ByCase => {
                        write!(f, ":{}", case_name(self.declension_case))?;
                    }
                    _ => {}
                }
            }
            PartOfSpeech::Numeral => {
                write!(
                    f,
                    ":{}:{}",
                    type_of_numeral_name(self.type_of_numeral),
                    inflexion_name(self.inflexion)
                )?;
                match self.inflexion {
                    Inflexion::Uninflected => {}
                    Inflexion::Substantival => {
                        write!(
                            f,
                            ":{}:{}",
                            case_name(self.declension_case),
                            number_name(self.number)
                        )?;
                    }
                    Inflexion::Adjectival => {
                        write!(
                            f,
                            ":{}:{}:{}",
                            gender_name(self.gender),
                            case_name(self.declension_case),
                            number_name(self.number)
                        )?;
                    }
                    Inflexion::Numeral | Inflexion::NumeralOne | Inflexion::NumeralTwo => {
                        write!(
                            f,
                            ":{}:{}",
                            gender_name(self.gender),
                            case_name(self.declension_case)
                        )?;
                    }
                    Inflexion::ByCase => {
                        write!(f, ":{}", case_name(self.declension_case))?;
                    }
                    Inflexion::ByGender => {
                        write!(f, ":{}", gender_name(self.gender))?;
                    }
                    Inflexion::Conjugation => {}
                }
            }
            PartOfSpeech::Verb => {
                write!(f, ":{}", aspect_name(self.aspect))?;
                if self.form_of_verb != FormOfVerb::None {
                    write!(f, ":{}", form_of_verb_name(self.form_of_verb))?;
                } else {
                    write!(f, ":{}", mood_name(self.mood))?;
                    if self.tense != Tense::None {
                        write!(f, ":{}", tense_name(self.tense))?;
                    }
                    if self.gender != Gender::None {
                        write!(f, ":{}", gender_name(self.gender))?;
                    }
                    write!(
                        f,
                        ":{}:{}",
                        number_name(self.number),
                        person_name(self.person)
                    )?;
                }
            }
            PartOfSpeech::AdjectivalPassiveParticiple
            | PartOfSpeech::AdjectivalActiveParticiple
            | PartOfSpeech::AdjectivalPastParticiple => {
                write!(
                    f,
                    ":{}:{}:{}",
                    gender_name(self.gender),
                    case_name(self.declension_case),
                    number_name(self.number)
                )?;
            }
            PartOfSpeech::VerbalNoun => {
                write!(
                    f,
                    ":{}:{}",
                    case_name(self.declension_case),
                    number_name(self.number)
                )?;
            }
            PartOfSpeech::Adverb => {
                write!(f, ":{}", degree_name(self.degree))?;
            }
            PartOfSpeech::Preposition
            | PartOfSpeech::Conjunction
            | PartOfSpeech::Particle
            | PartOfSpeech::Interjection => {}
        }
        Ok(())
    }
}

/// One analysis of a surface form: the lemma and its category.
///
/// The main form is UTF-8. Ordering collates main forms with the charset
/// alphabetic order, then falls back to the category ordering.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Description {
    pub main_form: String,
    pub category: Category,
}

impl Ord for Description {
    fn cmp(&self, other: &Self) -> Ordering {
        charset::alpha_cmp(self.main_form.as_bytes(), other.main_form.as_bytes())
            .then_with(|| self.category.cmp(&other.category))
    }
}

impl PartialOrd for Description {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Deduplicated set of analyses returned from a query.
pub type Setdesc = BTreeSet<Description>;
