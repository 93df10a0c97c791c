//! Levantine stem bases.
//!
//! Every Levantine cell is one of a few stem shapes plus an affix. The
//! shapes depend on the root class and stem; the affixes do not.

use crate::form::{Form, Request, RuleGap, RuleResult};
use crate::pattern::StemPattern;
use sarf_core::{
    Letter, Root, RootClass, Stem, Stem1Context, Tashkil, Tense, VocalizedLetter, Voice, Word,
};

/// The stem shapes one verb needs in every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Bases {
    /// 3ms perfect.
    pub perfect: Word,
    /// Perfect stem before ِتْ (3fs) and ُوا (3p).
    pub perfect_vowel: Word,
    /// Perfect stem before the consonant suffixes تْ تِي تُوا نَا.
    pub perfect_consonant: Word,
    /// Present stem of the unsuffixed cells.
    pub present: Word,
    /// Present stem before ِي and ُوا.
    pub present_suffix: Word,
    pub imperative: Word,
    pub imperative_suffix: Word,
    /// Fixed vowel of the person prefix, for stems whose prefix vowel does
    /// not follow from their first letter.
    pub prefix_vowel: Option<Tashkil>,
    /// Vowel before the plural وا in the perfect and present.
    pub plural_vowel: Tashkil,
}

/// Roots with suppletive or contracted Levantine stems.
pub const SUPPLETIVE_ROOTS: [&str; 3] = ["ج-ي-ء", "ء-خ-ذ", "ء-ك-ل"];

const F: Option<Tashkil> = Some(Tashkil::Fatha);
const K: Option<Tashkil> = Some(Tashkil::Kasra);
const D: Option<Tashkil> = Some(Tashkil::Dhamma);
const S: Option<Tashkil> = Some(Tashkil::Sukun);

fn vl(letter: Letter, tashkil: Option<Tashkil>) -> VocalizedLetter {
    VocalizedLetter::new(letter, tashkil)
}

fn set_tashkil(form: &mut Form, radical: u8, tashkil: Option<Tashkil>) {
    if let Some(i) = form.radical(radical) {
        form[i].tashkil = tashkil;
    }
}

fn remove_radical(form: &mut Form, radical: u8) {
    if let Some(i) = form.radical(radical) {
        form.remove(i);
    }
}

fn double_radical(form: &mut Form, radical: u8) {
    if let Some(i) = form.radical(radical) {
        form[i].shadda = true;
    }
}

/// Replaces a radical by a letter that keeps its slot.
fn respell(form: &mut Form, radical: u8, letter: Letter, tashkil: Option<Tashkil>) {
    if let Some(i) = form.radical(radical) {
        form[i].letter = letter;
        form[i].tashkil = tashkil;
    }
}

/// A short stem vowel before the last letter drops before a vowel suffix:
/// تِكْتُبْ → تِكْتْبِي, بِتْخَلِّصْ → بِتْخَلّْصِي. A doubled final
/// consonant keeps it (بِتْحُطِّي).
fn syncopate(mut word: Word) -> Word {
    let n = word.len();
    if n >= 2 && !word[n - 1].shadda {
        let before = &mut word[n - 2];
        if matches!(before.tashkil, Some(Tashkil::Kasra | Tashkil::Dhamma)) {
            before.tashkil = Some(Tashkil::Sukun);
        }
    }
    word
}

/// Lengthens the stem vowel of a masculine singular imperative: كْتُوبْ.
fn lengthen(mut word: Word) -> Word {
    let n = word.len();
    if n >= 2 {
        if let Some(long) = word[n - 2]
            .tashkil
            .filter(|t| matches!(t, Tashkil::Kasra | Tashkil::Dhamma))
            .and_then(Tashkil::long_letter)
        {
            word.insert(n - 1, VocalizedLetter::bare(long));
        }
    }
    word
}

pub(crate) fn build(pattern: &StemPattern, req: &Request) -> RuleResult<Bases> {
    let stem = req.stem();
    if stem == Stem::I {
        if let Some(bases) = suppletive(req.root) {
            return Ok(bases);
        }
    }

    let fixed;
    let ctx = match req.ctx {
        Some(ctx) => ctx,
        None => {
            fixed = Stem1Context::new(Tashkil::Fatha, Tashkil::Kasra);
            &fixed
        }
    };
    let perf = pattern
        .skeleton(req.params.dialect, Voice::Active, Tense::Perfect, Some(ctx))
        .fill(req.root);
    let pres = pattern
        .skeleton(req.params.dialect, Voice::Active, Tense::Present, Some(ctx))
        .fill(req.root);
    let sound_override = stem == Stem::I && ctx.sound_override;

    match (req.class, stem) {
        (RootClass::Quadrilateral, _) => Ok(sound(stem, ctx, perf, pres)),
        (RootClass::Hollow, Stem::I) if !sound_override => Ok(hollow_i(perf, ctx)),
        (RootClass::Hollow, Stem::VIII) => Ok(hollow_viii(perf)),
        (RootClass::Hollow, Stem::IV) => Err(RuleGap("Levantine stem IV of a hollow root")),
        (RootClass::Defective | RootClass::DoublyWeak, Stem::I) => {
            Ok(defective_i(req.root, ctx))
        }
        (
            RootClass::Defective | RootClass::DoublyWeak,
            Stem::II | Stem::III | Stem::V | Stem::VI,
        ) => Ok(defective_derived(perf, pres)),
        (RootClass::Defective | RootClass::DoublyWeak, _) => {
            Err(RuleGap("Levantine defective root outside stems I, II, III, V, VI"))
        }
        (RootClass::Doubled, _) if req.is_weak_doubled() => match stem {
            Stem::I => Ok(defective_i(req.root, ctx)),
            Stem::II | Stem::III | Stem::V | Stem::VI => Ok(defective_derived(perf, pres)),
            _ => Err(RuleGap("Levantine weak doubled root outside stems I, II, III, V, VI")),
        },
        (RootClass::Doubled, Stem::I) => Ok(doubled_i(perf, pres, ctx)),
        (RootClass::Doubled, Stem::III | Stem::IV | Stem::VI | Stem::VIII) => {
            Err(RuleGap("Levantine doubled root in stem III, IV, VI or VIII"))
        }
        _ => Ok(sound(stem, ctx, perf, pres)),
    }
}

fn sound(stem: Stem, ctx: &Stem1Context, perf: Form, pres: Form) -> Bases {
    let perfect = perf.clone().into_word();

    let mut vowel = perf.clone();
    if stem == Stem::I && ctx.past != Tashkil::Fatha {
        set_tashkil(&mut vowel, 2, S);
    }

    let mut consonant = perf;
    if stem == Stem::IX {
        set_tashkil(&mut consonant, 3, F);
    }
    let mut perfect_consonant = consonant.into_word();
    if stem == Stem::IX {
        perfect_consonant.push(vl(Letter::Ya, S));
    }

    let present = pres.clone().into_word();
    let mut suffix_form = pres.clone();
    if stem == Stem::IV {
        set_tashkil(&mut suffix_form, 1, K);
    }
    let present_suffix = syncopate(suffix_form.into_word());

    let (imperative, imperative_suffix) = match stem {
        Stem::I | Stem::IV => {
            let mut suffixed = pres;
            set_tashkil(&mut suffixed, 1, S);
            if let Some(r2) = suffixed.radical(2) {
                if matches!(suffixed[r2].tashkil, Some(Tashkil::Kasra | Tashkil::Dhamma)) {
                    suffixed[r2].tashkil = K;
                }
            }
            (lengthen(present.clone()), suffixed.into_word())
        }
        Stem::QuadII => {
            let mut imp = pres;
            if imp.first().map(|s| s.letter) == Some(Letter::Ta) {
                imp.remove(0);
            }
            set_tashkil(&mut imp, 3, K);
            let word = imp.into_word();
            (word.clone(), syncopate(word))
        }
        _ => (present.clone(), present_suffix.clone()),
    };

    Bases {
        perfect,
        perfect_vowel: vowel.into_word(),
        perfect_consonant,
        present,
        present_suffix,
        imperative,
        imperative_suffix,
        prefix_vowel: None,
        plural_vowel: Tashkil::Dhamma,
    }
}

/// بَاعْ / بِعِتْ / بِيعْ
fn hollow_i(perf: Form, ctx: &Stem1Context) -> Bases {
    let mut long = perf.clone();
    set_tashkil(&mut long, 1, F);
    respell(&mut long, 2, Letter::Alef, None);
    let perfect = long.into_word();

    let mut short = perf.clone();
    set_tashkil(&mut short, 1, K);
    remove_radical(&mut short, 2);

    let mut present = perf;
    set_tashkil(&mut present, 1, Some(ctx.present));
    let present_long = ctx.present.long_letter().unwrap_or(Letter::Alef);
    respell(&mut present, 2, present_long, None);
    let present = present.into_word();

    Bases {
        perfect_vowel: perfect.clone(),
        perfect,
        perfect_consonant: short.into_word(),
        present_suffix: present.clone(),
        imperative: present.clone(),
        imperative_suffix: present.clone(),
        present,
        prefix_vowel: None,
        plural_vowel: Tashkil::Dhamma,
    }
}

/// رْتَاحْ / رْتَحِتْ
fn hollow_viii(perf: Form) -> Bases {
    let mut long = perf.clone();
    respell(&mut long, 2, Letter::Alef, None);
    let perfect = long.into_word();

    let mut short = perf;
    remove_radical(&mut short, 2);

    Bases {
        perfect_vowel: perfect.clone(),
        perfect_consonant: short.into_word(),
        present: perfect.clone(),
        present_suffix: perfect.clone(),
        imperative: perfect.clone(),
        imperative_suffix: perfect.clone(),
        perfect,
        prefix_vowel: None,
        plural_vowel: Tashkil::Dhamma,
    }
}

/// حِكِي / حِكْيِتْ / حْكِيتْ, present حْكِي or بْقَى
fn defective_i(root: &Root, ctx: &Stem1Context) -> Bases {
    let (r1, r2) = (root.r(1), root.r(2));
    let a_type = ctx.present == Tashkil::Fatha;
    let stem_vowel = if a_type { F } else { K };

    let present = if a_type {
        vec![vl(r1, S), vl(r2, F), vl(Letter::AlefMaksura, None)]
    } else {
        vec![vl(r1, S), vl(r2, K), vl(Letter::Ya, None)]
    };
    let present_suffix = vec![vl(r1, S), vl(r2, stem_vowel)];

    Bases {
        perfect: vec![vl(r1, K), vl(r2, K), vl(Letter::Ya, None)],
        perfect_vowel: vec![vl(r1, K), vl(r2, S), vl(Letter::Ya, None)],
        perfect_consonant: vec![vl(r1, S), vl(r2, K), vl(Letter::Ya, None)],
        present,
        imperative: vec![vl(r1, S), vl(r2, K), vl(Letter::Ya, None)],
        imperative_suffix: present_suffix.clone(),
        present_suffix,
        prefix_vowel: None,
        plural_vowel: Tashkil::Dhamma,
    }
}

/// خَلَّى / خَلِّتْ / خَلَّيْتْ, present خَلِّي or تْغَذَّى
fn defective_derived(perf: Form, pres: Form) -> Bases {
    let mut perfect = perf.clone();
    respell(&mut perfect, 3, Letter::AlefMaksura, None);

    let mut vowel = perf.clone();
    remove_radical(&mut vowel, 3);

    let mut consonant = perf;
    respell(&mut consonant, 3, Letter::Ya, S);

    let mut present = pres.clone();
    if let Some(r3) = present.radical(3) {
        let ending = match present[r3 - 1].tashkil {
            Some(Tashkil::Kasra) => Letter::Ya,
            _ => Letter::AlefMaksura,
        };
        present[r3].letter = ending;
        present[r3].tashkil = None;
    }
    let present = present.into_word();

    let mut suffix = pres;
    remove_radical(&mut suffix, 3);
    let present_suffix = suffix.into_word();

    Bases {
        perfect: perfect.into_word(),
        perfect_vowel: vowel.into_word(),
        perfect_consonant: consonant.into_word(),
        imperative: present.clone(),
        imperative_suffix: present_suffix.clone(),
        present,
        present_suffix,
        prefix_vowel: None,
        plural_vowel: Tashkil::Dhamma,
    }
}

/// حَطّْ / حَطَّيْتْ / حُطّْ
fn doubled_i(perf: Form, pres: Form, ctx: &Stem1Context) -> Bases {
    let mut perfect = perf;
    set_tashkil(&mut perfect, 1, F);
    remove_radical(&mut perfect, 2);
    double_radical(&mut perfect, 3);

    let mut consonant = perfect.clone();
    set_tashkil(&mut consonant, 3, F);
    let mut perfect_consonant = consonant.into_word();
    perfect_consonant.push(vl(Letter::Ya, S));

    let mut present = pres;
    set_tashkil(&mut present, 1, Some(ctx.present));
    remove_radical(&mut present, 2);
    double_radical(&mut present, 3);
    let present = present.into_word();
    let perfect = perfect.into_word();

    Bases {
        perfect_vowel: perfect.clone(),
        perfect,
        perfect_consonant,
        present_suffix: present.clone(),
        imperative: present.clone(),
        imperative_suffix: present.clone(),
        present,
        prefix_vowel: None,
        plural_vowel: Tashkil::Dhamma,
    }
}

/// The closed set of stem I verbs with suppletive or contracted stems.
fn suppletive(root: &Root) -> Option<Bases> {
    use Letter::*;

    if root.is(&[Jim, Ya, Hamza]) {
        return Some(Bases {
            perfect: vec![vl(Hamza, K), vl(Jim, F), vl(Alef, None)],
            perfect_vowel: vec![vl(Hamza, K), vl(Jim, None)],
            perfect_consonant: vec![vl(Jim, K), vl(Ya, None)],
            present: vec![vl(Jim, K), vl(Ya, None)],
            present_suffix: vec![vl(Jim, None)],
            imperative: vec![vl(Ta, F), vl(Ain, F), vl(Alef, None)],
            imperative_suffix: vec![vl(Ta, F), vl(Ain, None)],
            prefix_vowel: Some(Tashkil::Kasra),
            plural_vowel: Tashkil::Kasra,
        });
    }

    let r2 = if root.is(&[Hamza, Kha, Thal]) {
        Kha
    } else if root.is(&[Hamza, Kaf, Lam]) {
        Kaf
    } else {
        return None;
    };
    let r3 = root.r(3);
    Some(Bases {
        perfect: vec![vl(Hamza, F), vl(r2, F), vl(r3, S)],
        perfect_vowel: vec![vl(Hamza, F), vl(r2, F), vl(r3, None)],
        perfect_consonant: vec![vl(Hamza, F), vl(r2, F), vl(r3, S)],
        present: vec![vl(Alef, None), vl(r2, D), vl(r3, S)],
        present_suffix: vec![vl(Alef, None), vl(r2, S), vl(r3, None)],
        imperative: vec![vl(r2, D), vl(r3, S)],
        imperative_suffix: vec![vl(r2, K), vl(r3, None)],
        prefix_vowel: Some(Tashkil::Fatha),
        plural_vowel: Tashkil::Dhamma,
    })
}
