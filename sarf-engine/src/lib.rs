//! Arabic verb conjugation.
//!
//! [`generate`] produces the vocalized surface forms of one paradigm cell,
//! [`paradigm`] enumerates a whole paradigm, and [`participle`] and
//! [`verbal_nouns`] build MSA derived nouns. All of them are pure and
//! deterministic.

mod form;
mod generator;
mod hamza;
mod levantine;
mod msa;
mod paradigm;
mod participle;
pub mod pattern;
mod verbal_noun;

pub use generator::{generate, ConjugationResult};
pub use levantine::bases::SUPPLETIVE_ROOTS;
pub use paradigm::paradigm;
pub use participle::participle;
pub use pattern::{lookup, Skeleton, Slot, SlotKind, StemPattern};
pub use verbal_noun::verbal_nouns;

use sarf_core::Root;

/// Roots with suppletive Levantine stems, parsed.
pub fn suppletive_roots() -> Vec<Root> {
    SUPPLETIVE_ROOTS
        .iter()
        .filter_map(|text| text.parse().ok())
        .collect()
}
