//! Weak radicals: hollow, defective and assimilated roots, plus the handful
//! of roots whose irregularity is lexical.

use super::suffix::Cell;
use crate::form::{Form, Request, RuleGap, RuleResult};
use sarf_core::{Letter, Mood, RootClass, Stem, Stem1Context, Tashkil, Tense, Voice};

/// أخذ أكل أمر
const SHORT_IMPERATIVES: [[Letter; 3]; 3] = [
    [Letter::Hamza, Letter::Kha, Letter::Thal],
    [Letter::Hamza, Letter::Kaf, Letter::Lam],
    [Letter::Hamza, Letter::Mim, Letter::Ra],
];

/// Roots with a fixed lexical irregularity.
///
/// - رأى drops its hamza in the stem I present and throughout stem IV
/// - the stem I imperatives of أخذ أكل أمر drop R1 (خُذْ كُلْ مُرْ)
pub(crate) fn special_roots(form: &mut Form, req: &Request) {
    let stem = req.stem();
    if req.root.is(&[Letter::Ra, Letter::Hamza, Letter::Ya])
        && (stem == Stem::IV || (stem == Stem::I && req.params.tense == Tense::Present))
    {
        if let (Some(r1), Some(r2)) = (form.radical(1), form.radical(2)) {
            let vowel = form[r2].tashkil;
            form.remove(r2);
            form[r1].tashkil = vowel;
        }
    }

    if stem == Stem::I
        && req.params.is_imperative()
        && SHORT_IMPERATIVES.iter().any(|root| req.root.is(root))
    {
        if let Some(r1) = form.radical(1) {
            form.remove(r1);
        }
    }
}

/// Stems in which a weak R2 collapses into a long vowel.
pub(crate) fn hollow_applies(stem: Stem) -> bool {
    matches!(stem, Stem::I | Stem::IV | Stem::VII | Stem::VIII | Stem::X)
}

/// Replaces a weak R2 by the long vowel of its own short vowel, which moves
/// onto the preceding letter. Before a silent R3 the long vowel shortens
/// away.
pub(crate) fn hollow(
    form: &mut Form,
    stem: Stem,
    voice: Voice,
    tense: Tense,
    ctx: Option<&Stem1Context>,
) {
    let (Some(r2), Some(r3)) = (form.radical(2), form.radical(3)) else {
        return;
    };
    let closed = form[r3].tashkil == Some(Tashkil::Sukun);

    if stem == Stem::I && voice == Voice::Active && tense == Tense::Perfect {
        if closed {
            let r1_vowel = match ctx.map(|c| (c.past, c.present)) {
                Some((_, Tashkil::Dhamma)) => Tashkil::Dhamma,
                Some((_, Tashkil::Kasra)) => Tashkil::Kasra,
                Some((past, _)) => past,
                None => Tashkil::Fatha,
            };
            form.remove(r2);
            if let Some(r1) = form.radical(1) {
                form[r1].tashkil = Some(r1_vowel);
            }
        } else {
            form[r2].letter = Letter::Alef;
            form[r2].tashkil = None;
        }
        return;
    }

    let mut vowel = form[r2].tashkil.unwrap_or(Tashkil::Fatha);
    if voice == Voice::Active && matches!(stem, Stem::VII | Stem::VIII) {
        vowel = Tashkil::Fatha;
    }
    if r2 > 0 {
        form[r2 - 1].tashkil = Some(vowel);
    }
    if closed {
        form.remove(r2);
    } else if let Some(long) = vowel.long_letter() {
        form[r2].letter = long;
        form[r2].tashkil = None;
    }
}

/// Realizes a weak R3 according to the vowel before it and the cell.
pub(crate) fn defective(form: &mut Form, req: &Request, cell: Cell) -> RuleResult<()> {
    let stem = req.stem();
    if stem == Stem::IX {
        return Err(RuleGap("stem IX of a root with weak R3"));
    }
    let r3 = form
        .radical(3)
        .ok_or(RuleGap("defective rule without R3"))?;
    if r3 == 0 {
        return Err(RuleGap("defective rule with R3 word-initial"));
    }
    let prev = r3 - 1;
    let v2 = form[prev]
        .tashkil
        .ok_or(RuleGap("defective rule without a vowel before R3"))?;
    let waw_final = stem == Stem::I && req.root.r(3) == Letter::Waw;

    match (req.params.tense, v2) {
        (Tense::Perfect, Tashkil::Fatha) => {
            let consonant = if waw_final { Letter::Waw } else { Letter::Ya };
            match cell {
                Cell::PerfectBare => {
                    let alef = waw_final || form[prev].letter == Letter::Ya;
                    form[r3].letter = if alef { Letter::Alef } else { Letter::AlefMaksura };
                    form[r3].tashkil = None;
                }
                Cell::PerfectTa => {
                    form.remove(r3);
                }
                Cell::PerfectDual => {
                    form[r3].letter = consonant;
                    form[r3].tashkil = Some(Tashkil::Fatha);
                }
                Cell::PerfectPlural => {
                    form.remove(r3);
                    form[r3].tashkil = Some(Tashkil::Sukun);
                }
                Cell::PerfectConsonant => {
                    form[r3].letter = consonant;
                    form[r3].tashkil = Some(Tashkil::Sukun);
                }
                _ => return Err(RuleGap("present cell in the perfect")),
            }
        }
        (Tense::Perfect, Tashkil::Kasra | Tashkil::Dhamma) => {
            let long = long_of(v2);
            match cell {
                Cell::PerfectBare | Cell::PerfectTa | Cell::PerfectDual => {
                    form[r3].letter = long;
                    form[r3].tashkil = Some(Tashkil::Fatha);
                }
                Cell::PerfectPlural => {
                    form.remove(r3);
                    form[prev].tashkil = Some(Tashkil::Dhamma);
                }
                Cell::PerfectConsonant => {
                    form[r3].letter = long;
                    form[r3].tashkil = None;
                }
                _ => return Err(RuleGap("present cell in the perfect")),
            }
        }
        (Tense::Present, Tashkil::Kasra | Tashkil::Dhamma) => {
            let long = long_of(v2);
            match cell {
                Cell::PresentBare(Mood::Indicative) | Cell::PresentFemPlural => {
                    form[r3].letter = long;
                    form[r3].tashkil = None;
                }
                Cell::PresentBare(Mood::Subjunctive) | Cell::PresentDual(_) => {
                    form[r3].letter = long;
                    form[r3].tashkil = Some(Tashkil::Fatha);
                }
                Cell::PresentBare(_) => {
                    form.remove(r3);
                }
                Cell::PresentFem(_) => {
                    form.remove(r3);
                    form[prev].tashkil = Some(Tashkil::Kasra);
                }
                Cell::PresentPlural(_) => {
                    form.remove(r3);
                    form[prev].tashkil = Some(Tashkil::Dhamma);
                }
                _ => return Err(RuleGap("perfect cell in the present")),
            }
        }
        (Tense::Present, Tashkil::Fatha) => match cell {
            Cell::PresentBare(Mood::Indicative | Mood::Subjunctive) => {
                let alef = form[prev].letter == Letter::Ya;
                form[r3].letter = if alef { Letter::Alef } else { Letter::AlefMaksura };
                form[r3].tashkil = None;
            }
            Cell::PresentBare(_) => {
                form.remove(r3);
            }
            Cell::PresentFem(_) | Cell::PresentPlural(_) => {
                form.remove(r3);
                form[r3].tashkil = Some(Tashkil::Sukun);
            }
            Cell::PresentDual(_) => {
                form[r3].letter = Letter::Ya;
                form[r3].tashkil = Some(Tashkil::Fatha);
            }
            Cell::PresentFemPlural => {
                form[r3].letter = Letter::Ya;
                form[r3].tashkil = Some(Tashkil::Sukun);
            }
            _ => return Err(RuleGap("perfect cell in the present")),
        },
        _ => return Err(RuleGap("weak R3 after sukun")),
    }
    Ok(())
}

/// Participle endings of a weak R3 in the derived stems: مُلْقٍ and مُلْقًى.
pub(crate) fn defective_participle(form: &mut Form, voice: Voice) -> RuleResult<()> {
    let r3 = form
        .radical(3)
        .ok_or(RuleGap("defective rule without R3"))?;
    if r3 == 0 {
        return Err(RuleGap("defective rule with R3 word-initial"));
    }
    match voice {
        Voice::Active => {
            form.remove(r3);
            form[r3 - 1].tashkil = Some(Tashkil::Kasratan);
        }
        Voice::Passive => {
            form[r3].letter = Letter::AlefMaksura;
            form[r3].tashkil = None;
            form[r3 - 1].tashkil = Some(Tashkil::Fathatan);
        }
    }
    Ok(())
}

fn long_of(vowel: Tashkil) -> Letter {
    vowel.long_letter().unwrap_or(Letter::Ya)
}

/// Stem I active present of a waw-initial root loses R1 (يَعِدُ, عِدْ).
pub(crate) fn assimilated(form: &mut Form, req: &Request) {
    if req.stem() == Stem::I
        && req.params.voice == Voice::Active
        && req.params.tense == Tense::Present
        && req.root.r(1) == Letter::Waw
        && !req.sound_override()
    {
        if let Some(r1) = form.radical(1) {
            form.remove(r1);
        }
    }
}

/// Runs the weak-radical rules that apply to this request's root.
pub(crate) fn apply(form: &mut Form, req: &Request, cell: Cell) -> RuleResult<()> {
    let stem = req.stem();
    if req.class == RootClass::Hollow
        && hollow_applies(stem)
        && !(stem == Stem::I && req.sound_override())
    {
        hollow(form, stem, req.params.voice, req.params.tense, req.ctx);
    }
    if req.root.has_weak_final() {
        defective(form, req, cell)?;
    }
    if req.class != RootClass::Quadrilateral {
        assimilated(form, req);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msa::suffix;
    use crate::pattern::lookup;
    use sarf_core::{
        render_arabic, ConjugationParameters, Dialect, Gender, Number, Person, Root,
    };

    fn stem_only(root: &str, params: ConjugationParameters, ctx: Option<Stem1Context>) -> String {
        let root: Root = root.parse().unwrap();
        let req = Request::new(&root, &params, ctx.as_ref());
        let mut form = lookup(params.stem, Dialect::Msa)
            .unwrap()
            .skeleton(Dialect::Msa, params.voice, params.tense, ctx.as_ref())
            .fill(&root);
        let cell = Cell::of(&params);
        suffix::attach(&mut form, cell, &params);
        special_roots(&mut form, &req);
        apply(&mut form, &req, cell).unwrap();
        render_arabic(&form.into_word())
    }

    #[test]
    fn test_hollow_perfect_shortens_before_consonant_suffix() {
        let ctx = Stem1Context::new(Tashkil::Fatha, Tashkil::Dhamma);
        let p3 = ConjugationParameters::perfect(Stem::I, Person::Third, Gender::Male, Number::Singular);
        let p1 = ConjugationParameters::perfect(Stem::I, Person::First, Gender::Male, Number::Singular);
        assert_eq!(stem_only("ق-و-ل", p3, Some(ctx)), "قَالَ");
        assert_eq!(stem_only("ق-و-ل", p1, Some(ctx)), "قُلْتُ");
    }

    #[test]
    fn test_defective_present_endings() {
        let ctx = Stem1Context::new(Tashkil::Fatha, Tashkil::Kasra);
        let ind = ConjugationParameters::present(
            Stem::I,
            Mood::Indicative,
            Person::Third,
            Gender::Male,
            Number::Plural,
        );
        assert_eq!(stem_only("ر-م-ي", ind, Some(ctx)), "رْمُونَ");
    }

    #[test]
    fn test_ra_a_drops_hamza_in_present() {
        let ctx = Stem1Context::new(Tashkil::Fatha, Tashkil::Fatha);
        let p = ConjugationParameters::present(
            Stem::I,
            Mood::Indicative,
            Person::Third,
            Gender::Male,
            Number::Singular,
        );
        assert_eq!(stem_only("ر-ء-ي", p, Some(ctx)), "رَى");
    }
}
