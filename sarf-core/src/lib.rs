//! Core value types for Arabic verb conjugation.
//!
//! Everything here is pure and immutable: letters and marks, roots and their
//! phonological class, conjugation parameters, rendering, configuration and
//! the shared error type.

pub mod config;
pub mod error;
pub mod letter;
pub mod params;
pub mod render;
pub mod root;

pub use config::EngineConfig;
pub use error::{Result, SarfError};
pub use letter::{Letter, Tashkil, VocalizedLetter};
pub use params::{
    ConjugationParameters, Dialect, DialectMetadata, Gender, Mood, Number, Person, Stem,
    Stem1Context, Tense, Voice,
};
pub use render::{from_buckwalter, parse_arabic, render_arabic, to_buckwalter, Word};
pub use root::{Root, RootClass};
