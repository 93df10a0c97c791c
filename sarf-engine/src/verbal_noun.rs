//! MSA verbal nouns (مصدر).
//!
//! Derived stems have one regular pattern per root shape. Stem I masdars are
//! lexical, so stem I yields every common pattern for the root's shape and
//! leaves the choice to the caller.

use crate::form::{Form, Role, RuleGap, RuleResult, Seg};
use crate::generator::report_gap;
use crate::hamza::seat_hamzas;
use crate::msa::{prefix, stem8};
use sarf_core::{
    ConjugationParameters, Gender, Letter, Mood, Number, Person, Result, Root, RootClass,
    SarfError, Stem, Tashkil, Word,
};
use tracing::debug;

const F: Option<Tashkil> = Some(Tashkil::Fatha);
const K: Option<Tashkil> = Some(Tashkil::Kasra);
const D: Option<Tashkil> = Some(Tashkil::Dhamma);
const S: Option<Tashkil> = Some(Tashkil::Sukun);
const N: Option<Tashkil> = None;

/// Which set of templates a root takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Sound,
    Hollow,
    /// Weak R3, including doubly weak and weak-doubled roots.
    Defective,
    Doubled,
    Assimilated,
}

impl Shape {
    fn of(root: &Root) -> Self {
        match root.class() {
            RootClass::Doubled if root.has_weak_final() => Shape::Defective,
            RootClass::Doubled => Shape::Doubled,
            RootClass::Defective | RootClass::DoublyWeak => Shape::Defective,
            RootClass::Hollow => Shape::Hollow,
            RootClass::Assimilated => Shape::Assimilated,
            RootClass::Sound | RootClass::Quadrilateral => Shape::Sound,
        }
    }
}

/// Every verbal noun of `root` in `stem`, most regular pattern first.
pub fn verbal_nouns(root: &Root, stem: Stem) -> Result<Vec<Word>> {
    if root.len() != stem.arity() {
        return Err(SarfError::InvalidRootArity {
            radicals: root.len(),
            stem: Some(stem),
        });
    }

    let templates = templates(root, stem).map_err(|gap| {
        let params = ConjugationParameters::present(
            stem,
            Mood::Indicative,
            Person::Third,
            Gender::Male,
            Number::Singular,
        );
        report_gap(root, &params, gap)
    })?;

    let words: Vec<Word> = templates
        .into_iter()
        .map(|segs| finish(Form::new(segs), root, stem))
        .collect();
    debug!(root = %root, stem = %stem, count = words.len(), "verbal nouns");
    Ok(words)
}

fn finish(mut form: Form, root: &Root, stem: Stem) -> Word {
    if stem == Stem::VIII {
        stem8::assimilate(&mut form, root);
    }
    prefix::glide(&mut form);
    let mut word = form.into_word();
    seat_hamzas(&mut word);
    word
}

fn affix(letter: Letter, tashkil: Option<Tashkil>) -> Seg {
    Seg::new(letter, tashkil, Role::Affix)
}

fn long(letter: Letter) -> Seg {
    Seg::new(letter, N, Role::Long)
}

fn wasl() -> Seg {
    Seg::prefix(Letter::Alef, K)
}

fn ta_marbuta() -> Seg {
    Seg::suffix(Letter::TaMarbuta, N)
}

/// A weak R3 after a long alif surfaces as hamza: بقاء, إلقاء.
fn final_hamza() -> Seg {
    Seg::new(Letter::Hamza, N, Role::Radical(3))
}

fn templates(root: &Root, stem: Stem) -> RuleResult<Vec<Vec<Seg>>> {
    let r = |n: u8, tashkil: Option<Tashkil>| {
        Seg::new(root.r(usize::from(n)), tashkil, Role::Radical(n))
    };
    let shape = Shape::of(root);

    let out = match stem {
        Stem::I => stem_one(root, shape),
        Stem::II => match shape {
            Shape::Defective => vec![vec![
                affix(Letter::Ta, F),
                r(1, S),
                r(2, K),
                Seg::new(Letter::Ya, F, Role::Radical(3)),
                ta_marbuta(),
            ]],
            _ => vec![vec![affix(Letter::Ta, F), r(1, S), r(2, K), long(Letter::Ya), r(3, N)]],
        },
        Stem::III => match shape {
            Shape::Defective => vec![
                vec![
                    Seg::prefix(Letter::Mim, D),
                    r(1, F),
                    long(Letter::Alef),
                    r(2, F),
                    long(Letter::Alef),
                    ta_marbuta(),
                ],
                vec![r(1, K), r(2, F), long(Letter::Alef), final_hamza()],
            ],
            Shape::Doubled => vec![
                vec![
                    Seg::prefix(Letter::Mim, D),
                    r(1, F),
                    long(Letter::Alef),
                    r(2, F).doubled(),
                    ta_marbuta(),
                ],
                vec![r(1, K), r(2, F), long(Letter::Alef), r(3, N)],
            ],
            _ => vec![
                vec![
                    Seg::prefix(Letter::Mim, D),
                    r(1, F),
                    long(Letter::Alef),
                    r(2, F),
                    r(3, F),
                    ta_marbuta(),
                ],
                vec![r(1, K), r(2, F), long(Letter::Alef), r(3, N)],
            ],
        },
        Stem::IV => {
            let hamza = Seg::prefix(Letter::Hamza, K);
            match shape {
                Shape::Defective => vec![vec![hamza, r(1, S), r(2, F), long(Letter::Alef), final_hamza()]],
                Shape::Hollow => vec![vec![hamza, r(1, F), long(Letter::Alef), r(3, F), ta_marbuta()]],
                _ => vec![vec![hamza, r(1, S), r(2, F), long(Letter::Alef), r(3, N)]],
            }
        }
        Stem::V => match shape {
            Shape::Defective => vec![vec![
                affix(Letter::Ta, F),
                r(1, F),
                r(2, Some(Tashkil::Kasratan)).doubled(),
            ]],
            _ => vec![vec![affix(Letter::Ta, F), r(1, F), r(2, D).doubled(), r(3, N)]],
        },
        Stem::VI => match shape {
            Shape::Defective => vec![vec![
                affix(Letter::Ta, F),
                r(1, F),
                long(Letter::Alef),
                r(2, Some(Tashkil::Kasratan)),
            ]],
            Shape::Doubled => vec![vec![
                affix(Letter::Ta, F),
                r(1, F),
                long(Letter::Alef),
                r(2, N).doubled(),
            ]],
            _ => vec![vec![affix(Letter::Ta, F), r(1, F), long(Letter::Alef), r(2, D), r(3, N)]],
        },
        Stem::VII => {
            let head = [wasl(), affix(Letter::Nun, S), r(1, K)];
            let tail = match shape {
                Shape::Defective => vec![r(2, F), long(Letter::Alef), final_hamza()],
                Shape::Hollow => vec![
                    Seg::new(Letter::Ya, F, Role::Radical(2)),
                    long(Letter::Alef),
                    r(3, N),
                ],
                _ => vec![r(2, F), long(Letter::Alef), r(3, N)],
            };
            vec![head.into_iter().chain(tail).collect()]
        }
        Stem::VIII => {
            let head = [wasl(), r(1, S), affix(Letter::Ta, K)];
            let tail = match shape {
                Shape::Defective => vec![r(2, F), long(Letter::Alef), final_hamza()],
                Shape::Hollow => vec![
                    Seg::new(Letter::Ya, F, Role::Radical(2)),
                    long(Letter::Alef),
                    r(3, N),
                ],
                _ => vec![r(2, F), long(Letter::Alef), r(3, N)],
            };
            vec![head.into_iter().chain(tail).collect()]
        }
        Stem::IX => match shape {
            Shape::Defective => return Err(RuleGap("no stem IX verbal noun for a weak R3")),
            _ => vec![vec![
                wasl(),
                r(1, S),
                r(2, K),
                r(3, F),
                long(Letter::Alef),
                Seg::new(root.r(3), N, Role::Copy(3)),
            ]],
        },
        Stem::X => {
            let head = [wasl(), affix(Letter::Sin, S), affix(Letter::Ta, K)];
            let tail = match shape {
                Shape::Defective => vec![r(1, S), r(2, F), long(Letter::Alef), final_hamza()],
                Shape::Hollow => vec![r(1, F), long(Letter::Alef), r(3, F), ta_marbuta()],
                _ => vec![r(1, S), r(2, F), long(Letter::Alef), r(3, N)],
            };
            vec![head.into_iter().chain(tail).collect()]
        }
        Stem::QuadI => vec![
            vec![r(1, F), r(2, S), r(3, F), r(4, F), ta_marbuta()],
            vec![r(1, K), r(2, S), r(3, F), long(Letter::Alef), r(4, N)],
        ],
        Stem::QuadII => vec![vec![affix(Letter::Ta, F), r(1, F), r(2, S), r(3, D), r(4, N)]],
        Stem::QuadIV => vec![vec![
            wasl(),
            r(1, S),
            r(2, K),
            r(3, S),
            r(4, F),
            long(Letter::Alef),
            Seg::new(root.r(4), N, Role::Copy(4)),
        ]],
    };
    Ok(out)
}

fn stem_one(root: &Root, shape: Shape) -> Vec<Vec<Seg>> {
    let r = |n: u8, tashkil: Option<Tashkil>| {
        Seg::new(root.r(usize::from(n)), tashkil, Role::Radical(n))
    };

    match shape {
        Shape::Sound => vec![
            vec![r(1, D), r(2, D), long(Letter::Waw), r(3, N)],
            vec![r(1, D), r(2, S), r(3, N)],
            vec![r(1, F), r(2, S), r(3, N)],
            vec![r(1, F), r(2, F), r(3, N)],
            vec![r(1, F), r(2, F), long(Letter::Alef), r(3, N)],
            vec![r(1, F), r(2, F), long(Letter::Alef), r(3, F), ta_marbuta()],
            vec![r(1, K), r(2, F), long(Letter::Alef), r(3, F), ta_marbuta()],
            vec![r(1, K), r(2, S), r(3, N)],
        ],
        Shape::Doubled => vec![
            vec![r(1, D), r(2, D), long(Letter::Waw), r(3, N)],
            vec![r(1, F), r(2, F), long(Letter::Alef), r(3, N)],
            vec![r(1, F), r(2, K), long(Letter::Ya), r(3, N)],
            vec![r(1, K), r(2, F), long(Letter::Alef), r(3, N)],
            vec![r(1, K), r(2, F).doubled(), ta_marbuta()],
            vec![r(1, K), r(2, N).doubled()],
            vec![Seg::prefix(Letter::Mim, F), r(1, F), r(2, F).doubled(), ta_marbuta()],
        ],
        Shape::Hollow => vec![
            vec![r(1, F), r(2, S), r(3, N)],
            vec![r(1, F), r(2, S), r(3, F), ta_marbuta()],
            vec![
                r(1, K),
                Seg::new(Letter::Ya, F, Role::Radical(2)),
                long(Letter::Alef),
                r(3, N),
            ],
            vec![Seg::prefix(Letter::Mim, F), r(1, F), long(Letter::Alef), r(3, N)],
        ],
        Shape::Defective => vec![
            vec![r(1, F), r(2, F), long(Letter::Alef), final_hamza()],
            vec![r(1, F), r(2, S), r(3, N)],
            vec![r(1, K), r(2, F), long(Letter::Alef), final_hamza()],
            vec![
                r(1, K),
                r(2, F),
                long(Letter::Alef),
                Seg::new(Letter::Ya, F, Role::Radical(3)),
                ta_marbuta(),
            ],
        ],
        // R1 drops in the عِدَة pattern.
        Shape::Assimilated => vec![
            vec![r(1, F), r(2, S), r(3, N)],
            vec![r(1, D), r(2, S), r(3, N)],
            vec![r(2, K), r(3, F), ta_marbuta()],
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarf_core::{parse_arabic, to_buckwalter};

    fn nouns(root: &str, stem: Stem) -> Vec<String> {
        let root: Root = root.parse().unwrap();
        verbal_nouns(&root, stem)
            .unwrap()
            .iter()
            .map(|w| to_buckwalter(w))
            .collect()
    }

    fn bw(arabic: &str) -> String {
        to_buckwalter(&parse_arabic(arabic).unwrap())
    }

    #[test]
    fn test_stem_one_offers_the_attested_pattern() {
        let cases = [
            ("ع-ص-ف", "عَصْف"),
            ("م-ل-ك", "مُلْك"),
            ("ن-ز-ل", "نُزُول"),
            ("م-ر-ر", "مُرُور"),
            ("ر-و-ي", "رِوَايَة"),
            ("و-ع-د", "عِدَة"),
            ("ق-و-ل", "قَوْل"),
            ("ب-ق-ي", "بَقَاء"),
            ("أ-ك-ل", "أَكْل"),
        ];
        for (root, expected) in cases {
            assert!(
                nouns(root, Stem::I).contains(&bw(expected)),
                "{root}: {expected} not among {:?}",
                nouns(root, Stem::I)
            );
        }
    }

    #[test]
    fn test_derived_stems_have_one_pattern() {
        let cases = [
            ("ك-ت-ب", Stem::II, "تَكْتِيب"),
            ("س-م-ي", Stem::II, "تَسْمِيَة"),
            ("ع-د-د", Stem::IV, "إِعْدَاد"),
            ("ل-ق-ي", Stem::IV, "إِلْقَاء"),
            ("ق-و-م", Stem::IV, "إِقَامَة"),
            ("ء-م-ن", Stem::IV, "إِيمَان"),
            ("و-ج-د", Stem::IV, "إِيجَاد"),
            ("ك-ت-ب", Stem::V, "تَكَتُّب"),
            ("ج-ن-ي", Stem::V, "تَجَنٍّ"),
            ("ك-ت-ب", Stem::VI, "تَكَاتُب"),
            ("ك-س-ر", Stem::VII, "اِنْكِسَار"),
            ("ح-م-ر", Stem::IX, "اِحْمِرَار"),
            ("ك-ت-ب", Stem::X, "اِسْتِكْتَاب"),
            ("ق-و-م", Stem::X, "اِسْتِقَامَة"),
            ("د-ح-ر-ج", Stem::QuadII, "تَدَحْرُج"),
            ("ط-م-ء-ن", Stem::QuadIV, "اِطْمِئْنَان"),
        ];
        for (root, stem, expected) in cases {
            assert_eq!(nouns(root, stem), vec![bw(expected)], "{root} {stem}");
        }
    }

    #[test]
    fn test_stem_three_has_both_patterns() {
        assert_eq!(
            nouns("ك-ت-ب", Stem::III),
            vec![bw("مُكَاتَبَة"), bw("كِتَاب")]
        );
        assert!(nouns("ح-ف-ظ", Stem::III).contains(&bw("حِفَاظ")));
        assert_eq!(nouns("ن-د-ي", Stem::III)[0], bw("مُنَادَاة"));
    }

    #[test]
    fn test_stem_eight_assimilates_the_infix() {
        assert_eq!(nouns("ص-ل-ح", Stem::VIII), vec![bw("اِصْطِلَاح")]);
        assert_eq!(nouns("ذ-خ-ر", Stem::VIII), vec![bw("اِدِّخَار")]);
        assert_eq!(nouns("ء-خ-ذ", Stem::VIII), vec![bw("اِتِّخَاذ")]);
        assert_eq!(nouns("ق-د-ي", Stem::VIII), vec![bw("اِقْتِدَاء")]);
        assert_eq!(nouns("ه-م-م", Stem::VIII), vec![bw("اِهْتِمَام")]);
    }

    #[test]
    fn test_quadrilateral_one() {
        assert_eq!(
            nouns("ت-ر-ج-م", Stem::QuadI),
            vec![bw("تَرْجَمَة"), bw("تِرْجَام")]
        );
    }

    #[test]
    fn test_errors() {
        let root: Root = "ر-م-ي".parse().unwrap();
        assert!(matches!(
            verbal_nouns(&root, Stem::IX),
            Err(SarfError::UnhandledMorphology { .. })
        ));
        let root: Root = "ك-ت-ب".parse().unwrap();
        assert!(matches!(
            verbal_nouns(&root, Stem::QuadI),
            Err(SarfError::InvalidRootArity { radicals: 3, .. })
        ));
    }
}
