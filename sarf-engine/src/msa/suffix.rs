//! Person, number and mood endings of the MSA paradigm.

use crate::form::{Form, Role, Seg};
use sarf_core::{ConjugationParameters, Gender, Letter, Mood, Number, Person, Tashkil, Tense};

/// Paradigm cells grouped by how their ending attaches to the stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cell {
    /// 3ms perfect, no suffix.
    PerfectBare,
    /// 3fs and 3fd, تْ / تَا.
    PerfectTa,
    /// 3md ا.
    PerfectDual,
    /// 3mp وا.
    PerfectPlural,
    /// Every cell whose suffix begins with a consonant; the stem ends in sukun.
    PerfectConsonant,
    /// Singular cells other than 2fs, and 1p. The mood vowel sits on the
    /// last radical.
    PresentBare(Mood),
    /// 2fs ي / ينَ.
    PresentFem(Mood),
    PresentDual(Mood),
    PresentPlural(Mood),
    PresentFemPlural,
}

impl Cell {
    pub fn of(params: &ConjugationParameters) -> Cell {
        use Gender::*;
        use Number::*;
        use Person::*;

        match params.tense {
            Tense::Perfect => match (params.person, params.gender, params.number) {
                (Third, Male, Singular) => Cell::PerfectBare,
                (Third, Female, Singular) | (Third, Female, Dual) => Cell::PerfectTa,
                (Third, Male, Dual) => Cell::PerfectDual,
                (Third, Male, Plural) => Cell::PerfectPlural,
                _ => Cell::PerfectConsonant,
            },
            Tense::Present => {
                let mood = params.present_mood();
                match (params.person, params.gender, params.number) {
                    (Second, Female, Singular) => Cell::PresentFem(mood),
                    (_, _, Singular) | (First, _, Plural) => Cell::PresentBare(mood),
                    (_, _, Dual) => Cell::PresentDual(mood),
                    (_, Male, Plural) => Cell::PresentPlural(mood),
                    (_, Female, Plural) => Cell::PresentFemPlural,
                }
            }
        }
    }

    /// The jussive and the 2ms imperative: the cells where a doubled stem
    /// has three accepted spellings.
    pub fn is_apocopate_bare(self) -> bool {
        matches!(self, Cell::PresentBare(Mood::Jussive | Mood::Imperative))
    }
}

fn mood_vowel(mood: Mood) -> Tashkil {
    match mood {
        Mood::Indicative => Tashkil::Dhamma,
        Mood::Subjunctive => Tashkil::Fatha,
        Mood::Jussive | Mood::Imperative => Tashkil::Sukun,
    }
}

fn s(letter: Letter, tashkil: Option<Tashkil>) -> Seg {
    Seg::suffix(letter, tashkil)
}

const F: Option<Tashkil> = Some(Tashkil::Fatha);
const K: Option<Tashkil> = Some(Tashkil::Kasra);
const D: Option<Tashkil> = Some(Tashkil::Dhamma);
const S: Option<Tashkil> = Some(Tashkil::Sukun);

/// Vowel for the last radical and the suffix letters of one cell.
fn ending(cell: Cell, params: &ConjugationParameters) -> (Tashkil, Vec<Seg>) {
    use Gender::*;
    use Number::*;
    use Person::*;

    match cell {
        Cell::PerfectBare => (Tashkil::Fatha, vec![]),
        Cell::PerfectTa => {
            let segs = if params.number == Dual {
                vec![s(Letter::Ta, F), s(Letter::Alef, None)]
            } else {
                vec![s(Letter::Ta, S)]
            };
            (Tashkil::Fatha, segs)
        }
        Cell::PerfectDual => (Tashkil::Fatha, vec![s(Letter::Alef, None)]),
        Cell::PerfectPlural => (
            Tashkil::Dhamma,
            vec![s(Letter::Waw, None), s(Letter::Alef, None)],
        ),
        Cell::PerfectConsonant => {
            let segs = match (params.person, params.gender, params.number) {
                (Third, _, _) => vec![s(Letter::Nun, F)],
                (Second, Male, Singular) => vec![s(Letter::Ta, F)],
                (Second, Female, Singular) => vec![s(Letter::Ta, K)],
                (Second, _, Dual) => vec![s(Letter::Ta, D), s(Letter::Mim, F), s(Letter::Alef, None)],
                (Second, Male, Plural) => vec![s(Letter::Ta, D), s(Letter::Mim, S)],
                (Second, Female, Plural) => vec![s(Letter::Ta, D), s(Letter::Nun, F).doubled()],
                (First, _, Plural) => vec![s(Letter::Nun, F), s(Letter::Alef, None)],
                (First, _, _) => vec![s(Letter::Ta, D)],
            };
            (Tashkil::Sukun, segs)
        }
        Cell::PresentBare(mood) => (mood_vowel(mood), vec![]),
        Cell::PresentFem(mood) => {
            let mut segs = vec![s(Letter::Ya, None)];
            if mood == Mood::Indicative {
                segs.push(s(Letter::Nun, F));
            }
            (Tashkil::Kasra, segs)
        }
        Cell::PresentDual(mood) => {
            let mut segs = vec![s(Letter::Alef, None)];
            if mood == Mood::Indicative {
                segs.push(s(Letter::Nun, K));
            }
            (Tashkil::Fatha, segs)
        }
        Cell::PresentPlural(mood) => {
            let tail = if mood == Mood::Indicative {
                s(Letter::Nun, F)
            } else {
                s(Letter::Alef, None)
            };
            (Tashkil::Dhamma, vec![s(Letter::Waw, None), tail])
        }
        Cell::PresentFemPlural => (Tashkil::Sukun, vec![s(Letter::Nun, F)]),
    }
}

/// Vowels the last radical and appends the suffix of `cell`.
pub(crate) fn attach(form: &mut Form, cell: Cell, params: &ConjugationParameters) {
    let (vowel, segs) = ending(cell, params);
    if let Some(i) = form.last_radical() {
        form[i].tashkil = Some(vowel);
    }
    form.extend(segs);
}

/// A silent final ن before a suffix ن is written once, doubled: سَكَنَّا.
pub(crate) fn merge_nun(form: &mut Form) {
    let Some(last) = form.last_radical() else {
        return;
    };
    let Some(&next) = form.segs.get(last + 1) else {
        return;
    };
    let radical = form[last];
    if radical.letter == Letter::Nun
        && radical.tashkil == Some(Tashkil::Sukun)
        && !radical.shadda
        && next.letter == Letter::Nun
        && next.role == Role::Suffix
    {
        form[last].tashkil = next.tashkil;
        form[last].shadda = true;
        form.remove(last + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarf_core::Stem;

    #[test]
    fn test_cell_classification() {
        let p = ConjugationParameters::perfect(Stem::I, Person::Third, Gender::Female, Number::Dual);
        assert_eq!(Cell::of(&p), Cell::PerfectTa);
        let p = ConjugationParameters::perfect(Stem::I, Person::First, Gender::Male, Number::Plural);
        assert_eq!(Cell::of(&p), Cell::PerfectConsonant);
        let p = ConjugationParameters::present(
            Stem::I,
            Mood::Jussive,
            Person::First,
            Gender::Male,
            Number::Plural,
        );
        assert_eq!(Cell::of(&p), Cell::PresentBare(Mood::Jussive));
        assert!(Cell::of(&p).is_apocopate_bare());
        let p = ConjugationParameters::imperative(Stem::I, Gender::Female, Number::Plural);
        assert_eq!(Cell::of(&p), Cell::PresentFemPlural);
    }

    #[test]
    fn test_indicative_keeps_nun() {
        let fem = ConjugationParameters::present(
            Stem::I,
            Mood::Indicative,
            Person::Second,
            Gender::Female,
            Number::Singular,
        );
        let (vowel, segs) = ending(Cell::of(&fem), &fem);
        assert_eq!(vowel, Tashkil::Kasra);
        assert_eq!(segs.len(), 2);

        let subj = ConjugationParameters { mood: Some(Mood::Subjunctive), ..fem };
        let (_, segs) = ending(Cell::of(&subj), &subj);
        assert_eq!(segs.len(), 1);
    }

    #[test]
    fn test_final_nun_merges_with_suffix_nun() {
        let params =
            ConjugationParameters::perfect(Stem::I, Person::First, Gender::Male, Number::Plural);
        let mut form = Form::new(vec![
            Seg::new(Letter::Sin, Some(Tashkil::Fatha), Role::Radical(1)),
            Seg::new(Letter::Kaf, Some(Tashkil::Fatha), Role::Radical(2)),
            Seg::new(Letter::Nun, None, Role::Radical(3)),
        ]);
        attach(&mut form, Cell::of(&params), &params);
        merge_nun(&mut form);
        assert_eq!(sarf_core::to_buckwalter(&form.into_word()), "sakana~A");
    }
}
