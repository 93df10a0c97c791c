//! Person prefixes, hamzat al-wasl and the glide of a silent weak R1.

use crate::form::{Form, Request, Role, Seg};
use sarf_core::{Gender, Letter, Number, Person, Stem, Tashkil, Tense};

/// Vowel of the present person prefix: dhamma for the stems whose perfect
/// has four consonants (II, III, IV and the quadrilaterals) and in every
/// passive.
fn prefix_vowel(req: &Request) -> Tashkil {
    let quadriconsonantal = matches!(
        req.stem(),
        Stem::II | Stem::III | Stem::IV | Stem::QuadI | Stem::QuadII
    );
    if quadriconsonantal || req.is_passive() {
        Tashkil::Dhamma
    } else {
        Tashkil::Fatha
    }
}

fn person_letter(person: Person, gender: Gender, number: Number) -> Letter {
    match (person, gender, number) {
        (Person::First, _, Number::Singular) => Letter::Hamza,
        (Person::First, _, _) => Letter::Nun,
        (Person::Second, _, _) => Letter::Ta,
        (Person::Third, Gender::Male, _) => Letter::Ya,
        (Person::Third, Gender::Female, Number::Plural) => Letter::Ya,
        (Person::Third, Gender::Female, _) => Letter::Ta,
    }
}

fn wasl(vowel: Tashkil) -> Seg {
    Seg::prefix(Letter::Alef, Some(vowel))
}

pub(crate) fn attach(form: &mut Form, req: &Request) {
    let params = req.params;
    let starts_cluster = form.first().map(Seg::starts_cluster).unwrap_or(false);

    if params.tense == Tense::Perfect {
        if starts_cluster {
            let vowel = if req.is_passive() {
                Tashkil::Dhamma
            } else {
                Tashkil::Kasra
            };
            form.prepend(&[wasl(vowel)]);
        }
        return;
    }

    if params.is_imperative() {
        if req.stem() == Stem::IV {
            form.prepend(&[Seg::prefix(Letter::Hamza, Some(Tashkil::Fatha))]);
        } else if starts_cluster {
            let rounded = req.stem() == Stem::I
                && req.ctx.map(|c| c.present) == Some(Tashkil::Dhamma);
            let vowel = if rounded {
                Tashkil::Dhamma
            } else {
                Tashkil::Kasra
            };
            form.prepend(&[wasl(vowel)]);
        }
        return;
    }

    let letter = person_letter(params.person, params.gender, params.number);
    form.prepend(&[Seg::prefix(letter, Some(prefix_vowel(req)))]);
}

/// A silent waw or ya R1 after a short vowel reads as that vowel's long
/// letter: يُوجِدُ, يُوقِنُ, اِيجَلْ.
pub(crate) fn glide(form: &mut Form) {
    let Some(r1) = form.radical(1) else {
        return;
    };
    if r1 == 0 || form[r1].shadda {
        return;
    }
    let seg = form[r1];
    if !seg.letter.is_weak() || seg.tashkil != Some(Tashkil::Sukun) {
        return;
    }
    let long = match form[r1 - 1].tashkil {
        Some(Tashkil::Dhamma) => Letter::Waw,
        Some(Tashkil::Kasra) => Letter::Ya,
        _ => return,
    };
    form[r1] = Seg::new(long, None, Role::Radical(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_letters() {
        assert_eq!(
            person_letter(Person::Third, Gender::Female, Number::Plural),
            Letter::Ya
        );
        assert_eq!(
            person_letter(Person::Third, Gender::Female, Number::Dual),
            Letter::Ta
        );
        assert_eq!(
            person_letter(Person::First, Gender::Male, Number::Singular),
            Letter::Hamza
        );
        assert_eq!(
            person_letter(Person::Second, Gender::Male, Number::Dual),
            Letter::Ta
        );
    }

    #[test]
    fn test_glide_after_dhamma() {
        let mut form = Form::new(vec![
            Seg::prefix(Letter::Ya, Some(Tashkil::Dhamma)),
            Seg::new(Letter::Ya, Some(Tashkil::Sukun), Role::Radical(1)),
            Seg::new(Letter::Qaf, Some(Tashkil::Kasra), Role::Radical(2)),
        ]);
        glide(&mut form);
        assert_eq!(form[1].letter, Letter::Waw);
        assert_eq!(form[1].tashkil, None);
    }
}
