//! Conjugation Parameters
//!
//! The closed axes a conjugation request is made of, plus the stem I vowel
//! context and per-dialect capabilities:
//! - `Stem`: derived stems I–X and the quadrilateral stems I, II and IV
//! - `Voice`, `Tense`, `Mood`, `Person`, `Gender`, `Number`, `Dialect`
//! - `ConjugationParameters`: one paradigm cell
//! - `DialectMetadata`: which cells a dialect has at all

use crate::error::{Result, SarfError};
use crate::letter::Tashkil;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A derived stem (وزن).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stem {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
    X,
    /// فَعْلَلَ
    QuadI,
    /// تَفَعْلَلَ
    QuadII,
    /// اِفْعَلَلَّ
    QuadIV,
}

impl Stem {
    pub const ALL: [Stem; 13] = [
        Stem::I,
        Stem::II,
        Stem::III,
        Stem::IV,
        Stem::V,
        Stem::VI,
        Stem::VII,
        Stem::VIII,
        Stem::IX,
        Stem::X,
        Stem::QuadI,
        Stem::QuadII,
        Stem::QuadIV,
    ];

    /// Number of radicals a root must have for this stem.
    pub fn arity(self) -> usize {
        match self {
            Stem::QuadI | Stem::QuadII | Stem::QuadIV => 4,
            _ => 3,
        }
    }

    pub fn is_quadrilateral(self) -> bool {
        self.arity() == 4
    }

    pub fn number(self) -> u8 {
        match self {
            Stem::I | Stem::QuadI => 1,
            Stem::II | Stem::QuadII => 2,
            Stem::III => 3,
            Stem::IV | Stem::QuadIV => 4,
            Stem::V => 5,
            Stem::VI => 6,
            Stem::VII => 7,
            Stem::VIII => 8,
            Stem::IX => 9,
            Stem::X => 10,
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stem::I => "I",
            Stem::II => "II",
            Stem::III => "III",
            Stem::IV => "IV",
            Stem::V => "V",
            Stem::VI => "VI",
            Stem::VII => "VII",
            Stem::VIII => "VIII",
            Stem::IX => "IX",
            Stem::X => "X",
            Stem::QuadI => "QI",
            Stem::QuadII => "QII",
            Stem::QuadIV => "QIV",
        };
        f.write_str(name)
    }
}

impl FromStr for Stem {
    type Err = SarfError;

    fn from_str(s: &str) -> Result<Self> {
        let stem = match s.trim().to_uppercase().as_str() {
            "I" | "1" => Stem::I,
            "II" | "2" => Stem::II,
            "III" | "3" => Stem::III,
            "IV" | "4" => Stem::IV,
            "V" | "5" => Stem::V,
            "VI" | "6" => Stem::VI,
            "VII" | "7" => Stem::VII,
            "VIII" | "8" => Stem::VIII,
            "IX" | "9" => Stem::IX,
            "X" | "10" => Stem::X,
            "QI" | "Q1" => Stem::QuadI,
            "QII" | "Q2" => Stem::QuadII,
            "QIV" | "Q4" => Stem::QuadIV,
            other => {
                return Err(SarfError::invalid_parameters(format!(
                    "unknown stem '{other}'"
                )))
            }
        };
        Ok(stem)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Active,
    Passive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Perfect,
    Present,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Indicative,
    Subjunctive,
    Jussive,
    Imperative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Dual,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Modern Standard Arabic
    #[default]
    Msa,
    /// Levantine, following Lebanese reference paradigms
    Levantine,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Msa, Dialect::Levantine];

    pub fn metadata(self) -> DialectMetadata {
        match self {
            Dialect::Msa => DialectMetadata {
                has_dual: true,
                has_female_plural: true,
                has_jussive: true,
                has_passive: true,
                iso639_code: "arb",
                glottocode: "stan1318",
            },
            Dialect::Levantine => DialectMetadata {
                has_dual: false,
                has_female_plural: false,
                has_jussive: false,
                has_passive: false,
                iso639_code: "apc",
                glottocode: "stan1323",
            },
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Dialect::Msa => "msa",
            Dialect::Levantine => "levantine",
        }
    }
}

/// Implements `Display` and `FromStr` over the lowercase names of a
/// parameter enum, the same spelling serde uses.
macro_rules! keyword_enum {
    ($ty:ident { $($variant:ident => $($name:literal)|+),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let names: &[&str] = match self {
                    $($ty::$variant => &[$($name),+],)+
                };
                f.write_str(names[0])
            }
        }

        impl FromStr for $ty {
            type Err = SarfError;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_lowercase().as_str() {
                    $($($name)|+ => Ok($ty::$variant),)+
                    other => Err(SarfError::invalid_parameters(format!(
                        concat!("unknown ", stringify!($ty), " '{}'"),
                        other
                    ))),
                }
            }
        }
    };
}

keyword_enum!(Voice { Active => "active", Passive => "passive" });
keyword_enum!(Tense { Perfect => "perfect" | "past", Present => "present" | "imperfect" });
keyword_enum!(Mood {
    Indicative => "indicative",
    Subjunctive => "subjunctive",
    Jussive => "jussive",
    Imperative => "imperative",
});
keyword_enum!(Person { First => "first" | "1", Second => "second" | "2", Third => "third" | "3" });
keyword_enum!(Gender { Male => "male" | "m", Female => "female" | "f" });
keyword_enum!(Number { Singular => "singular" | "s", Dual => "dual" | "d", Plural => "plural" | "p" });
keyword_enum!(Dialect {
    Msa => "msa" | "arb",
    Levantine => "levantine" | "lebanese" | "apc",
});

/// Which paradigm cells a dialect has at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialectMetadata {
    pub has_dual: bool,
    pub has_female_plural: bool,
    pub has_jussive: bool,
    pub has_passive: bool,
    pub iso639_code: &'static str,
    pub glottocode: &'static str,
}

/// The stem I vowel pattern, which no rule can recover from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stem1Context {
    /// Vowel of R2 in the perfect.
    pub past: Tashkil,
    /// Vowel of R2 in the present.
    pub present: Tashkil,
    /// Conjugate hollow and assimilated roots as if they were sound.
    #[serde(default)]
    pub sound_override: bool,
}

impl Stem1Context {
    pub const VOWELS: [Tashkil; 3] = [Tashkil::Fatha, Tashkil::Kasra, Tashkil::Dhamma];

    pub fn new(past: Tashkil, present: Tashkil) -> Self {
        Self {
            past,
            present,
            sound_override: false,
        }
    }

    pub fn with_sound_override(mut self) -> Self {
        self.sound_override = true;
        self
    }

    /// Every context a stem I verb can take, in a fixed order.
    pub fn all() -> Vec<Stem1Context> {
        let mut contexts = Vec::with_capacity(18);
        for sound_override in [false, true] {
            for past in Self::VOWELS {
                for present in Self::VOWELS {
                    contexts.push(Stem1Context {
                        past,
                        present,
                        sound_override,
                    });
                }
            }
        }
        contexts
    }
}

/// One paradigm cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConjugationParameters {
    pub stem: Stem,
    pub voice: Voice,
    pub tense: Tense,
    /// Only meaningful for the present tense.
    pub mood: Option<Mood>,
    pub person: Person,
    pub gender: Gender,
    pub number: Number,
    pub dialect: Dialect,
}

impl ConjugationParameters {
    pub fn perfect(stem: Stem, person: Person, gender: Gender, number: Number) -> Self {
        Self {
            stem,
            voice: Voice::Active,
            tense: Tense::Perfect,
            mood: None,
            person,
            gender,
            number,
            dialect: Dialect::Msa,
        }
    }

    pub fn present(stem: Stem, mood: Mood, person: Person, gender: Gender, number: Number) -> Self {
        Self {
            stem,
            voice: Voice::Active,
            tense: Tense::Present,
            mood: Some(mood),
            person,
            gender,
            number,
            dialect: Dialect::Msa,
        }
    }

    pub fn imperative(stem: Stem, gender: Gender, number: Number) -> Self {
        Self::present(stem, Mood::Imperative, Person::Second, gender, number)
    }

    pub fn passive(mut self) -> Self {
        self.voice = Voice::Passive;
        self
    }

    pub fn in_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// The mood of a present-tense cell, indicative when unspecified.
    pub fn present_mood(&self) -> Mood {
        self.mood.unwrap_or(Mood::Indicative)
    }

    pub fn is_imperative(&self) -> bool {
        self.tense == Tense::Present && self.mood == Some(Mood::Imperative)
    }

    /// Checks the cell against the paradigm shape of its dialect.
    pub fn validate(&self) -> Result<()> {
        let meta = self.dialect.metadata();
        if self.tense == Tense::Perfect && self.mood.is_some() {
            return Err(SarfError::invalid_parameters(
                "the perfect tense takes no mood",
            ));
        }
        if self.number == Number::Dual {
            if !meta.has_dual {
                return Err(SarfError::invalid_parameters(format!(
                    "{} has no dual",
                    self.dialect
                )));
            }
            if self.person == Person::First {
                return Err(SarfError::invalid_parameters(
                    "the dual has no first person",
                ));
            }
        }
        if self.voice == Voice::Passive && !meta.has_passive {
            return Err(SarfError::invalid_parameters(format!(
                "{} has no passive voice",
                self.dialect
            )));
        }
        if self.mood == Some(Mood::Jussive) && !meta.has_jussive {
            return Err(SarfError::invalid_parameters(format!(
                "{} has no jussive mood",
                self.dialect
            )));
        }
        if self.is_imperative() {
            if self.person != Person::Second {
                return Err(SarfError::invalid_parameters(
                    "the imperative exists only in the second person",
                ));
            }
            if self.voice == Voice::Passive {
                return Err(SarfError::invalid_parameters(
                    "the imperative has no passive voice",
                ));
            }
        }
        Ok(())
    }

    /// Every cell of a dialect's paradigm for one stem, in display order:
    /// perfect active, perfect passive, each present mood active then
    /// passive, imperative.
    pub fn cells(stem: Stem, dialect: Dialect) -> Vec<ConjugationParameters> {
        let meta = dialect.metadata();
        let voices: &[Voice] = if meta.has_passive {
            &[Voice::Active, Voice::Passive]
        } else {
            &[Voice::Active]
        };
        let persons = person_cells(dialect);
        let mut cells = Vec::new();

        for &voice in voices {
            for &(person, gender, number) in &persons {
                cells.push(ConjugationParameters {
                    stem,
                    voice,
                    tense: Tense::Perfect,
                    mood: None,
                    person,
                    gender,
                    number,
                    dialect,
                });
            }
        }

        let moods: &[Mood] = if meta.has_jussive {
            &[Mood::Indicative, Mood::Subjunctive, Mood::Jussive]
        } else {
            &[Mood::Indicative, Mood::Subjunctive]
        };
        for &mood in moods {
            for &voice in voices {
                for &(person, gender, number) in &persons {
                    cells.push(ConjugationParameters {
                        stem,
                        voice,
                        tense: Tense::Present,
                        mood: Some(mood),
                        person,
                        gender,
                        number,
                        dialect,
                    });
                }
            }
        }

        for &(person, gender, number) in persons.iter().filter(|(p, _, _)| *p == Person::Second) {
            cells.push(ConjugationParameters {
                stem,
                voice: Voice::Active,
                tense: Tense::Present,
                mood: Some(Mood::Imperative),
                person,
                gender,
                number,
                dialect,
            });
        }
        cells
    }
}

/// Person/gender/number combinations with distinct forms, in paradigm order.
fn person_cells(dialect: Dialect) -> Vec<(Person, Gender, Number)> {
    use Gender::*;
    use Number::*;
    use Person::*;

    let meta = dialect.metadata();
    let mut cells = vec![
        (Third, Male, Singular),
        (Third, Female, Singular),
        (Second, Male, Singular),
        (Second, Female, Singular),
        (First, Male, Singular),
    ];
    if meta.has_dual {
        cells.extend([(Third, Male, Dual), (Third, Female, Dual), (Second, Male, Dual)]);
    }
    if meta.has_female_plural {
        cells.extend([
            (Third, Male, Plural),
            (Third, Female, Plural),
            (Second, Male, Plural),
            (Second, Female, Plural),
        ]);
    } else {
        cells.extend([(Third, Male, Plural), (Second, Male, Plural)]);
    }
    cells.push((First, Male, Plural));
    cells
}

impl fmt::Display for ConjugationParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stem {} {} {}",
            self.stem, self.voice, self.tense
        )?;
        if let Some(mood) = self.mood {
            write!(f, " {mood}")?;
        }
        write!(
            f,
            " {} {} {} ({})",
            self.person, self.gender, self.number, self.dialect
        )
    }
}
