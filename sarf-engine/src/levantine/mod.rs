//! Levantine rule engine, following Lebanese reference paradigms.
//!
//! The verb is reduced to a small set of stem bases (see [`bases`]); each
//! cell attaches the person affixes to one of them. Hamza seating runs
//! last, as in MSA.

pub(crate) mod affix;
pub(crate) mod bases;

use crate::form::{Request, RuleResult};
use crate::hamza::seat_hamzas;
use crate::pattern::StemPattern;
use sarf_core::Word;

pub(crate) fn conjugate(pattern: &StemPattern, req: &Request) -> RuleResult<Vec<Word>> {
    let bases = bases::build(pattern, req)?;
    let mut word = affix::realize(&bases, req.params);
    seat_hamzas(&mut word);
    Ok(vec![word])
}
