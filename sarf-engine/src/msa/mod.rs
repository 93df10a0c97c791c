//! Modern Standard Arabic rule engine.
//!
//! Rewrites a filled skeleton in a fixed order:
//! 1. ending of the paradigm cell
//! 2. lexical irregulars and weak radicals
//! 3. stem VIII infix assimilation
//! 4. doubling contraction, which may fork the form
//! 5. merging of a final ن with a suffix ن, prefixes, glides and hamza
//!    seating on every variant

pub(crate) mod doubled;
pub(crate) mod prefix;
pub(crate) mod stem8;
pub(crate) mod suffix;
pub(crate) mod weak;

use crate::form::{Request, RuleResult};
use crate::hamza::seat_hamzas;
use crate::pattern::StemPattern;
use sarf_core::{Stem, Word};
use suffix::Cell;

pub(crate) fn conjugate(pattern: &StemPattern, req: &Request) -> RuleResult<Vec<Word>> {
    let params = req.params;
    let mut form = pattern
        .skeleton(params.dialect, params.voice, params.tense, req.ctx)
        .fill(req.root);

    let cell = Cell::of(params);
    suffix::attach(&mut form, cell, params);
    weak::special_roots(&mut form, req);
    weak::apply(&mut form, req, cell)?;
    if req.stem() == Stem::VIII {
        stem8::assimilate(&mut form, req.root);
    }

    let forms = if doubled::applies(req) {
        doubled::variants(form, req.stem(), cell.is_apocopate_bare())
    } else {
        vec![form]
    };

    Ok(forms
        .into_iter()
        .map(|mut form| {
            suffix::merge_nun(&mut form);
            prefix::attach(&mut form, req);
            prefix::glide(&mut form);
            let mut word = form.into_word();
            seat_hamzas(&mut word);
            word
        })
        .collect())
}
