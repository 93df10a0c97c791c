//! Stem Pattern Table
//!
//! For every stem and dialect, the templatic skeleton: which radicals sit
//! where, which pattern letters surround them and which vowel each slot
//! carries per voice and tense.
//!
//! MSA skeletons leave the last radical unvowelled; the suffix rules give it
//! its vowel. Levantine skeletons are the bare singular stems and end in
//! sukun.

use crate::form::{Form, Role, Seg};
use sarf_core::{Dialect, Letter, Result, Root, SarfError, Stem, Stem1Context, Tashkil, Tense, Voice};

const F: Option<Tashkil> = Some(Tashkil::Fatha);
const K: Option<Tashkil> = Some(Tashkil::Kasra);
const D: Option<Tashkil> = Some(Tashkil::Dhamma);
const S: Option<Tashkil> = Some(Tashkil::Sukun);
const N: Option<Tashkil> = None;

/// What fills a template slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Radical(u8),
    /// Stem IX and quadrilateral IV repeat the last radical before the
    /// radical itself.
    Copy(u8),
    Affix(Letter),
    Long(Letter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub kind: SlotKind,
    pub tashkil: Option<Tashkil>,
    pub shadda: bool,
}

impl Slot {
    fn new(kind: SlotKind, tashkil: Option<Tashkil>) -> Self {
        Self {
            kind,
            tashkil,
            shadda: false,
        }
    }

    fn doubled(mut self) -> Self {
        self.shadda = true;
        self
    }
}

fn r(n: u8, tashkil: Option<Tashkil>) -> Slot {
    Slot::new(SlotKind::Radical(n), tashkil)
}

fn affix(letter: Letter, tashkil: Option<Tashkil>) -> Slot {
    Slot::new(SlotKind::Affix(letter), tashkil)
}

fn long(letter: Letter) -> Slot {
    Slot::new(SlotKind::Long(letter), N)
}

fn copy(n: u8, tashkil: Option<Tashkil>) -> Slot {
    Slot::new(SlotKind::Copy(n), tashkil)
}

/// An ordered list of slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton {
    pub slots: Vec<Slot>,
}

impl Skeleton {
    /// Inserts the radicals of `root` into the radical slots.
    pub(crate) fn fill(&self, root: &Root) -> Form {
        let segs = self
            .slots
            .iter()
            .map(|slot| {
                let (letter, role) = match slot.kind {
                    SlotKind::Radical(n) => (root.r(n as usize), Role::Radical(n)),
                    SlotKind::Copy(n) => (root.r(n as usize), Role::Copy(n)),
                    SlotKind::Affix(letter) => (letter, Role::Affix),
                    SlotKind::Long(letter) => (letter, Role::Long),
                };
                Seg {
                    letter,
                    tashkil: slot.tashkil,
                    shadda: slot.shadda,
                    role,
                }
            })
            .collect();
        Form::new(segs)
    }

    /// The skeleton spelled with the canonical radicals ف ع ل (ل for R4).
    pub fn display(&self) -> String {
        let mut out = String::new();
        for slot in &self.slots {
            let letter = match slot.kind {
                SlotKind::Radical(1) => Letter::Fa,
                SlotKind::Radical(2) => Letter::Ain,
                SlotKind::Radical(_) | SlotKind::Copy(_) => Letter::Lam,
                SlotKind::Affix(letter) | SlotKind::Long(letter) => letter,
            };
            out.push(letter.to_char());
            if let Some(tashkil) = slot.tashkil {
                out.push(tashkil.to_char());
            }
            if slot.shadda {
                out.push('\u{0651}');
            }
        }
        out
    }
}

/// Static facts about one stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemPattern {
    pub stem: Stem,
    /// Letters the pattern and its imperative or wasl forms add around the
    /// radicals.
    pub augments: &'static [Letter],
    pub levantine: bool,
}

static PATTERNS: [StemPattern; 13] = [
    StemPattern { stem: Stem::I, augments: &[Letter::Alef], levantine: true },
    StemPattern { stem: Stem::II, augments: &[], levantine: true },
    StemPattern { stem: Stem::III, augments: &[Letter::Alef, Letter::Waw], levantine: true },
    StemPattern {
        stem: Stem::IV,
        augments: &[Letter::AlefHamzaAbove, Letter::Hamza, Letter::Alef],
        levantine: true,
    },
    StemPattern { stem: Stem::V, augments: &[Letter::Ta], levantine: true },
    StemPattern {
        stem: Stem::VI,
        augments: &[Letter::Ta, Letter::Alef, Letter::Waw],
        levantine: true,
    },
    StemPattern { stem: Stem::VII, augments: &[Letter::Nun, Letter::Alef], levantine: false },
    StemPattern {
        stem: Stem::VIII,
        augments: &[Letter::Ta, Letter::Alef, Letter::Dal, Letter::Tah],
        levantine: true,
    },
    StemPattern { stem: Stem::IX, augments: &[Letter::Alef], levantine: true },
    StemPattern {
        stem: Stem::X,
        augments: &[Letter::Alef, Letter::Sin, Letter::Ta],
        levantine: false,
    },
    StemPattern { stem: Stem::QuadI, augments: &[], levantine: true },
    StemPattern { stem: Stem::QuadII, augments: &[Letter::Ta], levantine: true },
    StemPattern { stem: Stem::QuadIV, augments: &[Letter::Alef], levantine: false },
];

/// Looks up the pattern of `stem`, failing for combinations the dialect
/// does not have.
pub fn lookup(stem: Stem, dialect: Dialect) -> Result<&'static StemPattern> {
    PATTERNS
        .iter()
        .find(|p| p.stem == stem)
        .filter(|p| p.supports(dialect))
        .ok_or(SarfError::UnsupportedStem { stem, dialect })
}

impl StemPattern {
    pub fn supports(&self, dialect: Dialect) -> bool {
        match dialect {
            Dialect::Msa => true,
            Dialect::Levantine => self.levantine,
        }
    }

    /// The skeleton of this stem for one voice and tense.
    ///
    /// Stem I reads its R2 vowel from `ctx`; without one it falls back to
    /// the فَعَلَ / يَفْعِلُ pattern.
    pub fn skeleton(
        &self,
        dialect: Dialect,
        voice: Voice,
        tense: Tense,
        ctx: Option<&Stem1Context>,
    ) -> Skeleton {
        let ctx = ctx
            .copied()
            .unwrap_or_else(|| Stem1Context::new(Tashkil::Fatha, Tashkil::Kasra));
        let slots = match dialect {
            Dialect::Msa => match tense {
                Tense::Perfect => msa_perfect(self.stem, voice, &ctx),
                Tense::Present => msa_present(self.stem, voice, &ctx),
            },
            Dialect::Levantine => match tense {
                Tense::Perfect => levantine_perfect(self.stem, &ctx),
                Tense::Present => levantine_present(self.stem, &ctx),
            },
        };
        Skeleton { slots }
    }
}

fn msa_perfect(stem: Stem, voice: Voice, ctx: &Stem1Context) -> Vec<Slot> {
    let passive = voice == Voice::Passive;
    let v1 = if passive { D } else { F };
    let v2 = if passive { K } else { F };
    let long_a = long(if passive { Letter::Waw } else { Letter::Alef });

    match stem {
        Stem::I => vec![r(1, v1), r(2, if passive { K } else { Some(ctx.past) }), r(3, N)],
        Stem::II => vec![r(1, v1), r(2, v2).doubled(), r(3, N)],
        Stem::III => vec![r(1, v1), long_a, r(2, v2), r(3, N)],
        Stem::IV => vec![affix(Letter::Hamza, v1), r(1, S), r(2, v2), r(3, N)],
        Stem::V => vec![affix(Letter::Ta, v1), r(1, v1), r(2, v2).doubled(), r(3, N)],
        Stem::VI => vec![affix(Letter::Ta, v1), r(1, v1), long_a, r(2, v2), r(3, N)],
        Stem::VII => vec![affix(Letter::Nun, S), r(1, v1), r(2, v2), r(3, N)],
        Stem::VIII => vec![r(1, S), affix(Letter::Ta, v1), r(2, v2), r(3, N)],
        Stem::IX => vec![r(1, S), r(2, v1), copy(3, F), r(3, N)],
        Stem::X => vec![
            affix(Letter::Sin, S),
            affix(Letter::Ta, v1),
            r(1, S),
            r(2, v2),
            r(3, N),
        ],
        Stem::QuadI => vec![r(1, v1), r(2, S), r(3, v2), r(4, N)],
        Stem::QuadII => vec![affix(Letter::Ta, v1), r(1, v1), r(2, S), r(3, v2), r(4, N)],
        Stem::QuadIV => vec![r(1, S), r(2, v1), r(3, S), copy(4, v2), r(4, N)],
    }
}

fn msa_present(stem: Stem, voice: Voice, ctx: &Stem1Context) -> Vec<Slot> {
    let passive = voice == Voice::Passive;
    // stem vowel of the derived stems that take kasra in the active
    let vk = if passive { F } else { K };

    match stem {
        Stem::I => vec![r(1, S), r(2, if passive { F } else { Some(ctx.present) }), r(3, N)],
        Stem::II => vec![r(1, F), r(2, vk).doubled(), r(3, N)],
        Stem::III => vec![r(1, F), long(Letter::Alef), r(2, vk), r(3, N)],
        Stem::IV => vec![r(1, S), r(2, vk), r(3, N)],
        Stem::V => vec![affix(Letter::Ta, F), r(1, F), r(2, F).doubled(), r(3, N)],
        Stem::VI => vec![affix(Letter::Ta, F), r(1, F), long(Letter::Alef), r(2, F), r(3, N)],
        Stem::VII => vec![affix(Letter::Nun, S), r(1, F), r(2, vk), r(3, N)],
        Stem::VIII => vec![r(1, S), affix(Letter::Ta, F), r(2, vk), r(3, N)],
        Stem::IX => vec![r(1, S), r(2, F), copy(3, K), r(3, N)],
        Stem::X => vec![
            affix(Letter::Sin, S),
            affix(Letter::Ta, F),
            r(1, S),
            r(2, vk),
            r(3, N),
        ],
        Stem::QuadI => vec![r(1, F), r(2, S), r(3, vk), r(4, N)],
        Stem::QuadII => vec![affix(Letter::Ta, F), r(1, F), r(2, S), r(3, F), r(4, N)],
        Stem::QuadIV => vec![r(1, S), r(2, F), r(3, S), copy(4, vk), r(4, N)],
    }
}

fn levantine_perfect(stem: Stem, ctx: &Stem1Context) -> Vec<Slot> {
    match stem {
        Stem::I => {
            let v = if ctx.past == Tashkil::Fatha { F } else { K };
            vec![r(1, v), r(2, v), r(3, S)]
        }
        Stem::II => vec![r(1, F), r(2, F).doubled(), r(3, S)],
        Stem::III => vec![r(1, F), long(Letter::Alef), r(2, F), r(3, S)],
        Stem::IV => vec![affix(Letter::Hamza, F), r(1, S), r(2, F), r(3, S)],
        Stem::V => vec![affix(Letter::Ta, S), r(1, F), r(2, F).doubled(), r(3, S)],
        Stem::VI => vec![affix(Letter::Ta, S), r(1, F), long(Letter::Alef), r(2, F), r(3, S)],
        Stem::VII => vec![affix(Letter::Nun, S), r(1, F), r(2, F), r(3, S)],
        Stem::VIII => vec![r(1, S), affix(Letter::Ta, F), r(2, F), r(3, S)],
        Stem::IX => vec![r(1, S), r(2, F), r(3, S).doubled()],
        Stem::X => vec![affix(Letter::Sin, S), affix(Letter::Ta, F), r(1, S), r(2, F), r(3, S)],
        Stem::QuadI => vec![r(1, F), r(2, S), r(3, F), r(4, S)],
        Stem::QuadII => vec![affix(Letter::Ta, S), r(1, F), r(2, S), r(3, F), r(4, S)],
        Stem::QuadIV => vec![r(1, S), r(2, F), r(3, F), r(4, S).doubled()],
    }
}

fn levantine_present(stem: Stem, ctx: &Stem1Context) -> Vec<Slot> {
    match stem {
        Stem::I => vec![r(1, S), r(2, Some(ctx.present)), r(3, S)],
        Stem::II => vec![r(1, F), r(2, K).doubled(), r(3, S)],
        Stem::III => vec![r(1, F), long(Letter::Alef), r(2, K), r(3, S)],
        Stem::IV => vec![r(1, S), r(2, D), r(3, S)],
        Stem::V => vec![affix(Letter::Ta, S), r(1, F), r(2, F).doubled(), r(3, S)],
        Stem::VI => vec![affix(Letter::Ta, S), r(1, F), long(Letter::Alef), r(2, F), r(3, S)],
        Stem::VII => vec![affix(Letter::Nun, S), r(1, F), r(2, K), r(3, S)],
        Stem::VIII => vec![r(1, S), affix(Letter::Ta, K), r(2, K), r(3, S)],
        Stem::IX => vec![r(1, S), r(2, F), r(3, S).doubled()],
        Stem::X => vec![affix(Letter::Sin, S), affix(Letter::Ta, K), r(1, S), r(2, K), r(3, S)],
        Stem::QuadI => vec![r(1, F), r(2, S), r(3, K), r(4, S)],
        Stem::QuadII => vec![affix(Letter::Ta, S), r(1, F), r(2, S), r(3, F), r(4, S)],
        Stem::QuadIV => vec![r(1, S), r(2, F), r(3, K), r(4, S).doubled()],
    }
}
