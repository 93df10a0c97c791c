//! Levantine person affixes and the indicative ب prefix.

use super::bases::Bases;
use sarf_core::{
    ConjugationParameters, Gender, Letter, Mood, Number, Person, Tashkil, Tense, VocalizedLetter,
    Word,
};

const F: Option<Tashkil> = Some(Tashkil::Fatha);
const K: Option<Tashkil> = Some(Tashkil::Kasra);
const D: Option<Tashkil> = Some(Tashkil::Dhamma);
const S: Option<Tashkil> = Some(Tashkil::Sukun);

fn vl(letter: Letter, tashkil: Option<Tashkil>) -> VocalizedLetter {
    VocalizedLetter::new(letter, tashkil)
}

fn with_last_vowel(mut word: Word, vowel: Tashkil) -> Word {
    if let Some(last) = word.last_mut() {
        last.tashkil = Some(vowel);
    }
    word
}

fn append(mut word: Word, suffix: &[VocalizedLetter]) -> Word {
    word.extend_from_slice(suffix);
    word
}

fn plural_ending(base: &Word, vowel: Tashkil) -> Word {
    append(
        with_last_vowel(base.clone(), vowel),
        &[vl(Letter::Waw, None), vl(Letter::Alef, None)],
    )
}

fn feminine_ending(base: &Word) -> Word {
    append(with_last_vowel(base.clone(), Tashkil::Kasra), &[vl(Letter::Ya, None)])
}

/// Builds the surface form of one cell from the verb's bases.
pub(crate) fn realize(bases: &Bases, params: &ConjugationParameters) -> Word {
    let word = match params.tense {
        Tense::Perfect => perfect(bases, params),
        Tense::Present if params.is_imperative() => imperative(bases, params),
        Tense::Present => present(bases, params),
    };
    merge_geminates(word)
}

fn perfect(bases: &Bases, params: &ConjugationParameters) -> Word {
    use Person::*;

    let consonant = |suffix: &[VocalizedLetter]| append(bases.perfect_consonant.clone(), suffix);
    let feminine = params.gender == Gender::Female;

    match (params.person, params.number) {
        (Third, Number::Plural) => plural_ending(&bases.perfect_vowel, bases.plural_vowel),
        (Third, _) if feminine => append(
            with_last_vowel(bases.perfect_vowel.clone(), Tashkil::Kasra),
            &[vl(Letter::Ta, S)],
        ),
        (Third, _) => bases.perfect.clone(),
        (Second, Number::Plural) => consonant(&[
            vl(Letter::Ta, D),
            vl(Letter::Waw, None),
            vl(Letter::Alef, None),
        ]),
        (Second, _) if feminine => consonant(&[vl(Letter::Ta, K), vl(Letter::Ya, None)]),
        (First, Number::Plural) => consonant(&[vl(Letter::Nun, F), vl(Letter::Alef, None)]),
        (Second, _) | (First, _) => {
            let mut base = bases.perfect_consonant.clone();
            if let Some(last) = base.last_mut() {
                if last.tashkil == S && last.letter != Letter::Ya {
                    last.tashkil = K;
                }
            }
            append(base, &[vl(Letter::Ta, S)])
        }
    }
}

/// The stem of a present or subjunctive cell, before the person prefix.
fn present_stem(bases: &Bases, params: &ConjugationParameters) -> Word {
    let feminine = params.gender == Gender::Female;
    match (params.person, params.number) {
        (Person::First, _) => bases.present.clone(),
        (_, Number::Plural) => plural_ending(&bases.present_suffix, bases.plural_vowel),
        (Person::Second, _) if feminine => feminine_ending(&bases.present_suffix),
        _ => bases.present.clone(),
    }
}

fn imperative(bases: &Bases, params: &ConjugationParameters) -> Word {
    match (params.gender, params.number) {
        (_, Number::Plural) => plural_ending(&bases.imperative_suffix, Tashkil::Dhamma),
        (Gender::Female, _) => feminine_ending(&bases.imperative_suffix),
        _ => bases.imperative.clone(),
    }
}

/// Vowel of the person prefix: kasra before a stem-initial cluster,
/// otherwise none.
fn prefix_vowel(bases: &Bases) -> Tashkil {
    if let Some(vowel) = bases.prefix_vowel {
        return vowel;
    }
    match bases.present.first() {
        Some(first) if first.shadda || first.tashkil == S => Tashkil::Kasra,
        _ => Tashkil::Sukun,
    }
}

fn person_letter(params: &ConjugationParameters) -> Letter {
    match params.person {
        Person::First => Letter::Nun,
        Person::Second => Letter::Ta,
        Person::Third if params.number == Number::Plural => Letter::Ya,
        Person::Third if params.gender == Gender::Female => Letter::Ta,
        Person::Third => Letter::Ya,
    }
}

fn present(bases: &Bases, params: &ConjugationParameters) -> Word {
    let stem = present_stem(bases, params);
    let vowel = prefix_vowel(bases);
    let indicative = params.present_mood() == Mood::Indicative;
    let first_singular = params.person == Person::First && params.number != Number::Plural;

    let prefix: Vec<VocalizedLetter> = if first_singular {
        match (indicative, vowel) {
            (true, v) => vec![vl(Letter::Ba, Some(v))],
            (false, Tashkil::Sukun) => vec![],
            (false, v) => vec![vl(Letter::Hamza, Some(v))],
        }
    } else if params.person == Person::First && indicative {
        match vowel {
            Tashkil::Sukun => vec![vl(Letter::Mim, K), vl(Letter::Nun, S)],
            v => vec![vl(Letter::Mim, S), vl(Letter::Nun, Some(v))],
        }
    } else {
        let letter = person_letter(params);
        match (indicative, vowel) {
            (false, v) => vec![vl(letter, Some(v))],
            (true, Tashkil::Sukun) if letter == Letter::Ya => {
                vec![vl(Letter::Ba, K), vl(Letter::Ya, None)]
            }
            (true, Tashkil::Sukun) => vec![vl(Letter::Ba, K), vl(letter, S)],
            (true, v) => vec![vl(Letter::Ba, S), vl(letter, Some(v))],
        }
    };

    let mut word = prefix;
    word.extend(stem);
    word
}

/// Merges a silent consonant into an identical following one:
/// بِتْتَلْفِنْ → بِتَّلْفِنْ, أَعْلَنْنَا → أَعْلَنَّا. At the start of the word
/// only a kasra on the second consonant licenses the merge (بِّيعْ but
/// بْبَلِّشْ).
fn merge_geminates(mut word: Word) -> Word {
    let mut i = 0;
    while i + 1 < word.len() {
        let (first, second) = (word[i], word[i + 1]);
        let mergeable = first.tashkil == S
            && !first.shadda
            && first.letter == second.letter
            && (i > 0 || second.tashkil == K);
        if mergeable {
            word.remove(i);
            word[i].shadda = true;
        }
        i += 1;
    }
    word
}
