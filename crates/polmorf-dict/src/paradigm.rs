// Paradigm expansion: slot counts per inflexion, slot-to-axes completion,
// and the generator of the closed legal category set.

use std::sync::OnceLock;

use hashbrown::HashSet;
use polmorf_core::{
    Aspect, Category, DeclensionCase, FormOfVerb, Gender, Inflexion, Mood, Number, Person, Tense,
};

use crate::entry_types::ENTRY_TYPES;

/// Number of inflexion paradigms, indexable by `Inflexion as usize`.
pub const NINFLEXIONS: usize = Inflexion::Conjugation as usize + 1;

/// Number of form slots per inflexion, indexable by `Inflexion as usize`.
pub const SLOTS: [usize; NINFLEXIONS] = [1, 14, 42, 14, 28, 28, 7, 2, 42];

/// Number of inflected form slots in a paradigm.
pub fn number_of_forms(inflexion: Inflexion) -> usize {
    SLOTS[inflexion as usize]
}

const CASES: [DeclensionCase; 7] = [
    DeclensionCase::Nominative,
    DeclensionCase::Genitive,
    DeclensionCase::Dative,
    DeclensionCase::Accusative,
    DeclensionCase::Instrumental,
    DeclensionCase::Locative,
    DeclensionCase::Vocative,
];

const ADJECTIVAL_GENDERS: [Gender; 6] = [
    Gender::MasculineAnimate,
    Gender::MasculineInanimate,
    Gender::Feminine,
    Gender::Neuter,
    Gender::MasculinePersonal,
    Gender::NonMasculinePersonal,
];

const NUMERAL_ONE_GENDERS: [Gender; 4] = [
    Gender::MasculineAnimate,
    Gender::MasculineInanimate,
    Gender::Feminine,
    Gender::Neuter,
];

const NUMERAL_TWO_GENDERS: [Gender; 4] = [
    Gender::MasculineImpersonal,
    Gender::MasculinePersonal,
    Gender::Feminine,
    Gender::Neuter,
];

fn complete_substantival(c: &mut Category, form: usize) {
    c.declension_case = CASES[form % 7];
    c.number = if form < 7 {
        Number::Singular
    } else {
        Number::Plural
    };
}

fn complete_adjectival(c: &mut Category, form: usize) {
    c.declension_case = CASES[form % 7];
    c.number = if form < 28 {
        Number::Singular
    } else {
        Number::Plural
    };
    c.gender = ADJECTIVAL_GENDERS[form / 7];
}

fn complete_numeral(c: &mut Category, form: usize) {
    c.declension_case = CASES[form % 7];
    c.gender = if form < 7 {
        Gender::NonMasculinePersonal
    } else {
        Gender::MasculinePersonal
    };
}

fn complete_numeral_one(c: &mut Category, form: usize) {
    c.declension_case = CASES[form % 7];
    c.gender = NUMERAL_ONE_GENDERS[form / 7];
}

fn complete_numeral_two(c: &mut Category, form: usize) {
    c.declension_case = CASES[form % 7];
    c.gender = NUMERAL_TWO_GENDERS[form / 7];
}

fn complete_by_case(c: &mut Category, form: usize) {
    c.declension_case = CASES[form % 7];
}

fn complete_by_gender(c: &mut Category, form: usize) {
    c.gender = if form == 0 {
        Gender::NonFeminine
    } else {
        Gender::Feminine
    };
}

// Slot layout: 0 infinitive; 1-6 present/future by number and person;
// 7-21 past by gender and person; 22-24 imperative; 25-39 subjunctive by
// gender and person; 40 impersonal past; 41 adverbial participle.
fn complete_conjugation(c: &mut Category, form: usize) {
    match form {
        0 => c.form_of_verb = FormOfVerb::Infinitive,
        1..=6 => {
            c.mood = Mood::Indicative;
            c.tense = match c.aspect {
                Aspect::Imperfect => Tense::Present,
                Aspect::Perfect => Tense::Future,
                Aspect::None => Tense::None,
            };
            c.number = if form < 4 {
                Number::Singular
            } else {
                Number::Plural
            };
            c.person = PERSONS[(form - 1) % 3];
        }
        7..=21 => {
            c.mood = Mood::Indicative;
            c.tense = Tense::Past;
            c.number = if form < 16 {
                Number::Singular
            } else {
                Number::Plural
            };
            c.gender = PAST_GENDERS[(form - 7) / 3];
            c.person = PERSONS[(form - 1) % 3];
        }
        22 => {
            c.mood = Mood::Imperative;
            c.number = Number::Singular;
            c.person = Person::Second;
        }
        23 => {
            c.mood = Mood::Imperative;
            c.number = Number::Plural;
            c.person = Person::First;
        }
        24 => {
            c.mood = Mood::Imperative;
            c.number = Number::Plural;
            c.person = Person::Second;
        }
        25..=39 => {
            c.mood = Mood::Subjunctive;
            c.number = if form < 34 {
                Number::Singular
            } else {
                Number::Plural
            };
            c.gender = PAST_GENDERS[(form - 25) / 3];
            c.person = PERSONS[(form - 1) % 3];
        }
        40 => c.form_of_verb = FormOfVerb::ImpersonalFormOfPastTense,
        _ => {
            c.form_of_verb = match c.aspect {
                Aspect::Imperfect => FormOfVerb::SimultaneousAdverbialParticiple,
                Aspect::Perfect => FormOfVerb::AnticipatoryAdverbialParticiple,
                Aspect::None => FormOfVerb::None,
            };
        }
    }
}

const PERSONS: [Person; 3] = [Person::First, Person::Second, Person::Third];

const PAST_GENDERS: [Gender; 5] = [
    Gender::Masculine,
    Gender::Feminine,
    Gender::Neuter,
    Gender::MasculinePersonal,
    Gender::NonMasculinePersonal,
];

/// Fills in the axes determined by form slot `form` of paradigm `inflexion`.
///
/// `form` must be below `number_of_forms(inflexion)`.
pub fn complete_category(c: &mut Category, inflexion: Inflexion, form: usize) {
    debug_assert!(form < number_of_forms(inflexion));
    match inflexion {
        Inflexion::Uninflected => {}
        Inflexion::Substantival => complete_substantival(c, form),
        Inflexion::Adjectival => complete_adjectival(c, form),
        Inflexion::Numeral => complete_numeral(c, form),
        Inflexion::NumeralOne => complete_numeral_one(c, form),
        Inflexion::NumeralTwo => complete_numeral_two(c, form),
        Inflexion::ByCase => complete_by_case(c, form),
        Inflexion::ByGender => complete_by_gender(c, form),
        Inflexion::Conjugation => complete_conjugation(c, form),
    }
}

/// Enumerates the closed legal category set: every entry-type template
/// expanded over its paradigm slots, deduplicated, in first-occurrence
/// order. The order is the same on every run.
pub fn generate_all_categories() -> Vec<Category> {
    let mut v = Vec::new();
    let mut seen = HashSet::new();
    for et in &ENTRY_TYPES {
        let inflexion = et.category.inflexion;
        for form in 0..number_of_forms(inflexion) {
            let mut c = et.category;
            complete_category(&mut c, inflexion, form);
            if seen.insert(c) {
                v.push(c);
            }
        }
    }
    v
}

/// The legal category set, computed once.
pub fn all_categories() -> &'static [Category] {
    static ALL: OnceLock<Vec<Category>> = OnceLock::new();
    ALL.get_or_init(generate_all_categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polmorf_core::PartOfSpeech;

    #[test]
    fn slot_counts() {
        assert_eq!(number_of_forms(Inflexion::Uninflected), 1);
        assert_eq!(number_of_forms(Inflexion::Substantival), 14);
        assert_eq!(number_of_forms(Inflexion::Adjectival), 42);
        assert_eq!(number_of_forms(Inflexion::Numeral), 14);
        assert_eq!(number_of_forms(Inflexion::NumeralOne), 28);
        assert_eq!(number_of_forms(Inflexion::NumeralTwo), 28);
        assert_eq!(number_of_forms(Inflexion::ByCase), 7);
        assert_eq!(number_of_forms(Inflexion::ByGender), 2);
        assert_eq!(number_of_forms(Inflexion::Conjugation), 42);
    }

    #[test]
    fn substantival_slots() {
        let mut c = Category::default();
        complete_category(&mut c, Inflexion::Substantival, 0);
        assert_eq!(c.declension_case, DeclensionCase::Nominative);
        assert_eq!(c.number, Number::Singular);

        let mut c = Category::default();
        complete_category(&mut c, Inflexion::Substantival, 9);
        assert_eq!(c.declension_case, DeclensionCase::Dative);
        assert_eq!(c.number, Number::Plural);
    }

    #[test]
    fn adjectival_slots() {
        let mut c = Category::default();
        complete_category(&mut c, Inflexion::Adjectival, 23);
        assert_eq!(c.gender, Gender::Neuter);
        assert_eq!(c.declension_case, DeclensionCase::Dative);
        assert_eq!(c.number, Number::Singular);

        let mut c = Category::default();
        complete_category(&mut c, Inflexion::Adjectival, 41);
        assert_eq!(c.gender, Gender::NonMasculinePersonal);
        assert_eq!(c.declension_case, DeclensionCase::Vocative);
        assert_eq!(c.number, Number::Plural);
    }

    #[test]
    fn conjugation_slots() {
        let imperfect = Category {
            part_of_speech: PartOfSpeech::Verb,
            inflexion: Inflexion::Conjugation,
            aspect: Aspect::Imperfect,
            ..Category::default()
        };
        let perfect = Category {
            aspect: Aspect::Perfect,
            ..imperfect
        };

        let mut c = imperfect;
        complete_category(&mut c, Inflexion::Conjugation, 0);
        assert_eq!(c.form_of_verb, FormOfVerb::Infinitive);

        let mut c = imperfect;
        complete_category(&mut c, Inflexion::Conjugation, 3);
        assert_eq!((c.mood, c.tense), (Mood::Indicative, Tense::Present));
        assert_eq!((c.number, c.person), (Number::Singular, Person::Third));

        let mut c = perfect;
        complete_category(&mut c, Inflexion::Conjugation, 3);
        assert_eq!(c.tense, Tense::Future);

        let mut c = imperfect;
        complete_category(&mut c, Inflexion::Conjugation, 12);
        assert_eq!(c.tense, Tense::Past);
        assert_eq!(c.gender, Gender::Feminine);
        assert_eq!((c.number, c.person), (Number::Singular, Person::Third));

        let mut c = imperfect;
        complete_category(&mut c, Inflexion::Conjugation, 18);
        assert_eq!(c.gender, Gender::MasculinePersonal);
        assert_eq!((c.number, c.person), (Number::Plural, Person::Third));

        let mut c = imperfect;
        complete_category(&mut c, Inflexion::Conjugation, 22);
        assert_eq!(c.mood, Mood::Imperative);
        assert_eq!((c.number, c.person), (Number::Singular, Person::Second));

        let mut c = imperfect;
        complete_category(&mut c, Inflexion::Conjugation, 30);
        assert_eq!(c.mood, Mood::Subjunctive);
        assert_eq!(c.gender, Gender::Feminine);
        assert_eq!(c.person, Person::Third);

        let mut c = imperfect;
        complete_category(&mut c, Inflexion::Conjugation, 40);
        assert_eq!(c.form_of_verb, FormOfVerb::ImpersonalFormOfPastTense);

        let mut c = imperfect;
        complete_category(&mut c, Inflexion::Conjugation, 41);
        assert_eq!(c.form_of_verb, FormOfVerb::SimultaneousAdverbialParticiple);
        let mut c = perfect;
        complete_category(&mut c, Inflexion::Conjugation, 41);
        assert_eq!(c.form_of_verb, FormOfVerb::AnticipatoryAdverbialParticiple);
    }

    #[test]
    fn generates_exactly_1002_categories() {
        assert_eq!(generate_all_categories().len(), 1002);
    }

    #[test]
    fn generation_is_stable() {
        assert_eq!(generate_all_categories(), generate_all_categories());
        assert_eq!(all_categories(), generate_all_categories().as_slice());
    }

    #[test]
    fn rendering_is_injective_over_the_legal_set() {
        let v = generate_all_categories();
        let mut rendered: Vec<String> = v.iter().map(Category::to_string).collect();
        rendered.sort();
        rendered.dedup();
        assert_eq!(rendered.len(), v.len());
    }
}
