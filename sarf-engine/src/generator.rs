//! Conjugation Generator
//!
//! Validates a request, picks the stem pattern and threads it through the
//! rule engine of the requested dialect.

use crate::form::{Request, RuleGap, RuleResult};
use crate::pattern::{self, StemPattern};
use crate::{levantine, msa};
use sarf_core::{
    render_arabic, to_buckwalter, ConjugationParameters, Dialect, Result, Root, RootClass,
    SarfError, Stem, Stem1Context, Voice, Word,
};
use serde::Serialize;
use tracing::{debug, warn};

/// The accepted surface forms of one paradigm cell.
///
/// Never empty. Cells with several co-valid realizations keep all of them in
/// a fixed order: fatha-contracted, kasra-contracted, uncontracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugationResult {
    forms: Vec<Word>,
}

impl ConjugationResult {
    pub fn forms(&self) -> &[Word] {
        &self.forms
    }

    /// The first accepted form.
    pub fn primary(&self) -> &Word {
        &self.forms[0]
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.forms.iter()
    }

    pub fn render_arabic(&self) -> Vec<String> {
        self.forms.iter().map(|w| render_arabic(w)).collect()
    }

    pub fn to_buckwalter(&self) -> Vec<String> {
        self.forms.iter().map(|w| to_buckwalter(w)).collect()
    }

    pub fn contains(&self, word: &[sarf_core::VocalizedLetter]) -> bool {
        self.forms.iter().any(|w| w.as_slice() == word)
    }
}

impl<'a> IntoIterator for &'a ConjugationResult {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.forms.iter()
    }
}

/// Checks everything about a request that does not depend on the rules and
/// returns the pattern to conjugate with.
pub(crate) fn validate(
    root: &Root,
    params: &ConjugationParameters,
    ctx: Option<&Stem1Context>,
) -> Result<&'static StemPattern> {
    let stem = params.stem;
    if root.len() != stem.arity() {
        return Err(SarfError::InvalidRootArity {
            radicals: root.len(),
            stem: Some(stem),
        });
    }
    if stem == Stem::I && ctx.is_none() {
        return Err(SarfError::MissingStem1Context);
    }
    params.validate()?;
    pattern::lookup(stem, params.dialect)
}

/// Stems that have no passive paradigm for this root.
pub(crate) fn passive_gap(root: &Root, stem: Stem, voice: Voice) -> Option<RuleGap> {
    if voice != Voice::Passive {
        return None;
    }
    match stem {
        Stem::VII => Some(RuleGap("stem VII has no passive")),
        Stem::IX => Some(RuleGap("stem IX has no passive")),
        Stem::QuadIV => Some(RuleGap("quadrilateral stem IV has no passive")),
        Stem::III | Stem::VI if root.class() == RootClass::Doubled => {
            Some(RuleGap("no passive of stem III or VI for a doubled root"))
        }
        _ => None,
    }
}

/// Turns a rule gap into the caller-facing error, logging it first.
pub(crate) fn report_gap(root: &Root, params: &ConjugationParameters, gap: RuleGap) -> SarfError {
    warn!(root = %root, params = %params, gap = gap.0, "no rule covers this cell");
    SarfError::UnhandledMorphology {
        root: root.clone(),
        params: *params,
    }
}

/// Generates every accepted surface form of one paradigm cell.
///
/// Stem I needs a [`Stem1Context`]; other stems ignore it.
pub fn generate(
    root: &Root,
    params: &ConjugationParameters,
    ctx: Option<&Stem1Context>,
) -> Result<ConjugationResult> {
    let _span = tracing::debug_span!(
        "generate",
        root = %root,
        stem = %params.stem,
        dialect = %params.dialect
    )
    .entered();

    let pattern = validate(root, params, ctx)?;
    if let Some(gap) = passive_gap(root, params.stem, params.voice) {
        return Err(report_gap(root, params, gap));
    }

    let ctx = if params.stem == Stem::I { ctx } else { None };
    let req = Request::new(root, params, ctx);
    let outcome: RuleResult<Vec<Word>> = match params.dialect {
        Dialect::Msa => msa::conjugate(pattern, &req),
        Dialect::Levantine => levantine::conjugate(pattern, &req),
    };

    match outcome {
        Ok(forms) if !forms.is_empty() => {
            debug!(forms = forms.len(), "generated");
            Ok(ConjugationResult { forms })
        }
        Ok(_) => Err(report_gap(root, params, RuleGap("rules produced no form"))),
        Err(gap) => Err(report_gap(root, params, gap)),
    }
}
