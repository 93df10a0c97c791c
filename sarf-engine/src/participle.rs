//! Active and passive participles of MSA verbs.
//!
//! Stem I uses the فَاعِل / مَفْعُول templates with their weak variants.
//! Every other stem is مُـ plus its present stem, with kasra (active) or
//! fatha (passive) before the last radical.

use crate::form::{Request, RuleGap, RuleResult, Seg};
use crate::generator::report_gap;
use crate::hamza::seat_hamzas;
use crate::msa::{doubled, prefix, stem8, weak};
use crate::pattern;
use sarf_core::{
    ConjugationParameters, Dialect, Gender, Letter, Mood, Number, Person, Result, Root,
    RootClass, SarfError, Stem, Stem1Context, Tashkil, Tense, VocalizedLetter, Voice, Word,
};
use tracing::debug;

const F: Option<Tashkil> = Some(Tashkil::Fatha);
const K: Option<Tashkil> = Some(Tashkil::Kasra);
const D: Option<Tashkil> = Some(Tashkil::Dhamma);
const S: Option<Tashkil> = Some(Tashkil::Sukun);

fn vl(letter: Letter, tashkil: Option<Tashkil>) -> VocalizedLetter {
    VocalizedLetter::new(letter, tashkil)
}

/// The participle of `root` in `stem`.
///
/// `ctx` only matters for stem I, where `sound_override` keeps a weak R2.
pub fn participle(
    root: &Root,
    stem: Stem,
    voice: Voice,
    ctx: Option<&Stem1Context>,
) -> Result<Word> {
    if root.len() != stem.arity() {
        return Err(SarfError::InvalidRootArity {
            radicals: root.len(),
            stem: Some(stem),
        });
    }
    let pattern = pattern::lookup(stem, Dialect::Msa)?;

    let mut params =
        ConjugationParameters::present(stem, Mood::Indicative, Person::Third, Gender::Male, Number::Singular);
    if voice == Voice::Passive {
        params = params.passive();
    }
    let ctx = if stem == Stem::I { ctx } else { None };
    let req = Request::new(root, &params, ctx);

    let outcome = if stem == Stem::I {
        Ok(stem_one(&req, voice))
    } else {
        derived(pattern, &req, voice)
    };
    let mut word = outcome.map_err(|gap| report_gap(root, &params, gap))?;
    seat_hamzas(&mut word);
    debug!(root = %root, stem = %stem, voice = %voice, "participle");
    Ok(word)
}

fn stem_one(req: &Request, voice: Voice) -> Word {
    let root = req.root;
    let (r1, r2, r3) = (root.r(1), root.r(2), root.r(3));
    let class = if req.sound_override() && req.class == RootClass::Hollow {
        RootClass::Sound
    } else {
        req.class
    };

    match (class, voice) {
        (RootClass::Hollow, Voice::Active) => vec![
            vl(r1, F),
            vl(Letter::Alef, None),
            vl(Letter::Hamza, K),
            vl(r3, None),
        ],
        (RootClass::Hollow, Voice::Passive) => {
            let (vowel, long) = if r2 == Letter::Ya {
                (K, Letter::Ya)
            } else {
                (D, Letter::Waw)
            };
            vec![vl(Letter::Mim, F), vl(r1, vowel), vl(long, None), vl(r3, None)]
        }
        (RootClass::Defective | RootClass::DoublyWeak, Voice::Active) => vec![
            vl(r1, F),
            vl(Letter::Alef, None),
            vl(r2, Some(Tashkil::Kasratan)),
        ],
        (RootClass::Defective | RootClass::DoublyWeak, Voice::Passive) => {
            let (vowel, last) = if r3 == Letter::Waw {
                (D, Letter::Waw)
            } else {
                (K, Letter::Ya)
            };
            vec![
                vl(Letter::Mim, F),
                vl(r1, S),
                vl(r2, vowel),
                VocalizedLetter::bare(last).with_shadda(),
            ]
        }
        (RootClass::Doubled, Voice::Active) => vec![
            vl(r1, F),
            vl(Letter::Alef, None),
            VocalizedLetter::bare(r3).with_shadda(),
        ],
        (_, Voice::Active) => vec![vl(r1, F), vl(Letter::Alef, None), vl(r2, K), vl(r3, None)],
        (_, Voice::Passive) => vec![
            vl(Letter::Mim, F),
            vl(r1, S),
            vl(r2, D),
            vl(Letter::Waw, None),
            vl(r3, None),
        ],
    }
}

fn derived(pattern: &pattern::StemPattern, req: &Request, voice: Voice) -> RuleResult<Word> {
    let stem = req.stem();
    if voice == Voice::Passive && matches!(stem, Stem::VII | Stem::IX) {
        return Err(RuleGap("no passive participle for stem VII or IX"));
    }

    let mut form = pattern
        .skeleton(Dialect::Msa, Voice::Active, Tense::Present, None)
        .fill(req.root);
    if stem != Stem::IX {
        let last = form
            .last_radical()
            .ok_or(RuleGap("participle skeleton without radicals"))?;
        if last == 0 {
            return Err(RuleGap("participle skeleton starts with its last radical"));
        }
        form[last - 1].tashkil = if voice == Voice::Active { K } else { F };
    }

    weak::special_roots(&mut form, req);
    if req.class == RootClass::Hollow && weak::hollow_applies(stem) {
        weak::hollow(&mut form, stem, voice, Tense::Present, None);
    }
    if req.root.has_weak_final() {
        weak::defective_participle(&mut form, voice)?;
    }
    if stem == Stem::VIII {
        stem8::assimilate(&mut form, req.root);
    }
    if doubled::applies(req) {
        doubled::contract(&mut form, stem);
    }

    form.prepend(&[Seg::prefix(Letter::Mim, D)]);
    prefix::glide(&mut form);
    Ok(form.into_word())
}
