//! Contraction of identical radicals.
//!
//! When R3 is vowelled, R2 drops, its vowel moves back onto a silent
//! predecessor and R3 doubles: دَلَلَ → دَلَّ, يَدْلُلُ → يَدُلُّ.
//! In the jussive and the bare imperative the contraction is optional and
//! the contracted form may end in fatha or kasra, which gives three forms.
//! Quadrilateral IV has only the fatha form there (يَطْمَئِنَّ).

use crate::form::{Form, Request, Role};
use sarf_core::{RootClass, Stem, Tashkil};

/// Whether this stem contracts at all.
pub(crate) fn applies(req: &Request) -> bool {
    match req.stem() {
        Stem::IX | Stem::QuadIV => true,
        Stem::II | Stem::V | Stem::QuadI | Stem::QuadII => false,
        _ => req.class == RootClass::Doubled && !req.is_weak_doubled(),
    }
}

/// The radical that ends up doubled.
fn last(stem: Stem) -> u8 {
    if stem == Stem::QuadIV {
        4
    } else {
        3
    }
}

/// Contracts in place. Returns false when the last radical is silent and
/// nothing changed.
pub(crate) fn contract(form: &mut Form, stem: Stem) -> bool {
    let last = last(stem);
    let second = match stem {
        Stem::IX | Stem::QuadIV => form.find(Role::Copy(last)),
        _ => form.radical(2),
    };
    let (Some(second), Some(end)) = (second, form.radical(last)) else {
        return false;
    };
    if form[end].tashkil == Some(Tashkil::Sukun) || second == 0 {
        return false;
    }
    let vowel = form[second].tashkil;
    if form[second - 1].tashkil == Some(Tashkil::Sukun) {
        form[second - 1].tashkil = vowel;
    }
    form.remove(second);
    if let Some(end) = form.radical(last) {
        form[end].shadda = true;
    }
    true
}

/// Every accepted realization of the form.
///
/// In apocopate cells the order is fatha-contracted, kasra-contracted,
/// uncontracted.
pub(crate) fn variants(form: Form, stem: Stem, apocopate: bool) -> Vec<Form> {
    if !apocopate {
        let mut form = form;
        contract(&mut form, stem);
        return vec![form];
    }

    let vowels: &[Tashkil] = if stem == Stem::QuadIV {
        &[Tashkil::Fatha]
    } else {
        &[Tashkil::Fatha, Tashkil::Kasra]
    };
    let mut out = Vec::with_capacity(3);
    for &vowel in vowels {
        let mut variant = form.clone();
        if let Some(end) = variant.radical(last(stem)) {
            variant[end].tashkil = Some(vowel);
        }
        if contract(&mut variant, stem) {
            out.push(variant);
        }
    }
    if stem != Stem::QuadIV || out.is_empty() {
        out.push(form);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Seg;
    use sarf_core::{to_buckwalter, Letter};

    fn seg(letter: Letter, tashkil: Option<Tashkil>, role: Role) -> Seg {
        Seg::new(letter, tashkil, role)
    }

    #[test]
    fn test_vowelled_r3_contracts() {
        let mut form = Form::new(vec![
            seg(Letter::Dal, Some(Tashkil::Sukun), Role::Radical(1)),
            seg(Letter::Lam, Some(Tashkil::Dhamma), Role::Radical(2)),
            seg(Letter::Lam, Some(Tashkil::Dhamma), Role::Radical(3)),
        ]);
        assert!(contract(&mut form, Stem::I));
        assert_eq!(to_buckwalter(&form.into_word()), "dulu~");
    }

    #[test]
    fn test_apocopate_gives_three_forms() {
        let form = Form::new(vec![
            seg(Letter::Dal, Some(Tashkil::Sukun), Role::Radical(1)),
            seg(Letter::Lam, Some(Tashkil::Dhamma), Role::Radical(2)),
            seg(Letter::Lam, Some(Tashkil::Sukun), Role::Radical(3)),
        ]);
        let out: Vec<String> = variants(form, Stem::I, true)
            .into_iter()
            .map(|f| to_buckwalter(&f.into_word()))
            .collect();
        assert_eq!(out, vec!["dula~", "duli~", "dolulo"]);
    }

    #[test]
    fn test_quadrilateral_four_contracts_onto_r4() {
        let form = Form::new(vec![
            seg(Letter::Tah, Some(Tashkil::Sukun), Role::Radical(1)),
            seg(Letter::Mim, Some(Tashkil::Fatha), Role::Radical(2)),
            seg(Letter::Hamza, Some(Tashkil::Sukun), Role::Radical(3)),
            seg(Letter::Nun, Some(Tashkil::Kasra), Role::Copy(4)),
            seg(Letter::Nun, Some(Tashkil::Sukun), Role::Radical(4)),
        ]);
        let out: Vec<String> = variants(form, Stem::QuadIV, true)
            .into_iter()
            .map(|f| to_buckwalter(&f.into_word()))
            .collect();
        assert_eq!(out, vec!["Toma'ina~"]);
    }
}
