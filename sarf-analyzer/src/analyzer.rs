//! Reverse conjugation by generate-and-verify.
//!
//! Candidates come from [`crate::candidates`]; each one is conjugated
//! through the whole paradigm of its stem and kept only if some cell
//! reproduces the input letters exactly.

use crate::candidates::{candidates, Candidate};
use rayon::prelude::*;
use sarf_core::{
    to_buckwalter, ConjugationParameters, Dialect, EngineConfig, Root, RootClass, Stem,
    Stem1Context, VocalizedLetter,
};
use sarf_engine::generate;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

/// Roots that explain a form, each with the stems that do.
pub type Analysis = BTreeMap<Root, BTreeSet<Stem>>;

/// One paradigm cell that reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub root: Root,
    pub stem: Stem,
    pub params: ConjugationParameters,
    pub context: Option<Stem1Context>,
    /// Diacritics of the input that the generated form agrees with.
    pub score: usize,
}

impl Match {
    fn context_key(&self) -> Option<(sarf_core::Tashkil, sarf_core::Tashkil, bool)> {
        self.context
            .map(|c| (c.past, c.present, c.sound_override))
    }

    /// Best score first, then a fixed order on everything else.
    fn rank(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.root.cmp(&other.root))
            .then_with(|| self.stem.cmp(&other.stem))
            .then_with(|| self.params.cmp(&other.params))
            .then_with(|| self.context_key().cmp(&other.context_key()))
    }
}

/// Letter-exact comparison. Returns the number of input marks the form
/// agrees with, or `None` when the letters differ.
fn agreement(input: &[VocalizedLetter], form: &[VocalizedLetter]) -> Option<usize> {
    if input.len() != form.len() || input.iter().zip(form).any(|(a, b)| a.letter != b.letter) {
        return None;
    }
    let score = input
        .iter()
        .zip(form)
        .map(|(a, b)| {
            let vowel = a.tashkil.is_some() && a.tashkil == b.tashkil;
            let shadda = a.shadda && b.shadda;
            usize::from(vowel) + usize::from(shadda)
        })
        .sum();
    Some(score)
}

/// Stem I vowel contexts worth trying. `sound_override` only changes
/// hollow and assimilated roots.
fn contexts(candidate: &Candidate) -> Vec<Option<Stem1Context>> {
    if candidate.stem != Stem::I {
        return vec![None];
    }
    let override_matters = matches!(
        candidate.root.class(),
        RootClass::Hollow | RootClass::Assimilated | RootClass::DoublyWeak
    );
    Stem1Context::all()
        .into_iter()
        .filter(|c| override_matters || !c.sound_override)
        .map(Some)
        .collect()
}

/// Conjugates `candidate` through its paradigm. Stops at the first match
/// unless `exhaustive`.
fn verify(candidate: &Candidate, input: &[VocalizedLetter], exhaustive: bool) -> Vec<Match> {
    let mut matches = Vec::new();
    let cells = ConjugationParameters::cells(candidate.stem, candidate.dialect);

    for ctx in contexts(candidate) {
        for params in &cells {
            let Ok(result) = generate(&candidate.root, params, ctx.as_ref()) else {
                continue;
            };
            for form in result.iter() {
                if let Some(score) = agreement(input, form) {
                    matches.push(Match {
                        root: candidate.root.clone(),
                        stem: candidate.stem,
                        params: *params,
                        context: ctx,
                        score,
                    });
                    if !exhaustive {
                        return matches;
                    }
                }
            }
        }
    }
    matches
}

/// The reverse conjugator.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: EngineConfig,
}

impl Analyzer {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Every (root, stem) pair that can produce `form`.
    ///
    /// An unexplained form gives an empty map, never an error.
    pub fn analyze(&self, form: &[VocalizedLetter], dialect: Option<Dialect>) -> Analysis {
        let mut analysis = Analysis::new();
        for found in self.search(form, dialect, false) {
            analysis.entry(found.root).or_default().insert(found.stem);
        }
        info!(form = %to_buckwalter(form), roots = analysis.len(), "analysis complete");
        analysis
    }

    /// Every matching cell and vowel context, best diacritic agreement
    /// first.
    pub fn analyze_detailed(&self, form: &[VocalizedLetter], dialect: Option<Dialect>) -> Vec<Match> {
        let matches = self.search(form, dialect, true);
        info!(form = %to_buckwalter(form), matches = matches.len(), "detailed analysis complete");
        matches
    }

    fn search(&self, form: &[VocalizedLetter], dialect: Option<Dialect>, exhaustive: bool) -> Vec<Match> {
        let _span = tracing::debug_span!("analyze", form = %to_buckwalter(form)).entered();

        let dialects = match dialect {
            Some(d) => vec![d],
            None => self.config.analyzer_dialects.clone(),
        };
        let letters: Vec<_> = form.iter().map(|vl| vl.letter).collect();
        let found = candidates(&letters, &dialects, self.config.analyzer_max_insertions);
        debug!(candidates = found.len(), "verifying candidates");

        let mut matches: Vec<Match> = self.run(|| {
            found
                .par_iter()
                .flat_map_iter(|candidate| verify(candidate, form, exhaustive))
                .collect()
        });
        matches.sort_by(Match::rank);
        matches
    }

    /// Runs `job` on a dedicated pool when a thread count is configured.
    fn run<T: Send>(&self, job: impl FnOnce() -> T + Send) -> T {
        let Some(threads) = self.config.analyzer_threads else {
            return job();
        };
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(job),
            Err(e) => {
                warn!(error = %e, "analyzer pool unavailable, using the global pool");
                job()
            }
        }
    }
}

/// Analyzes `form` with the default configuration.
pub fn analyze(form: &[VocalizedLetter], dialect: Option<Dialect>) -> Analysis {
    Analyzer::default().analyze(form, dialect)
}

/// Detailed analysis with the default configuration.
pub fn analyze_detailed(form: &[VocalizedLetter], dialect: Option<Dialect>) -> Vec<Match> {
    Analyzer::default().analyze_detailed(form, dialect)
}
