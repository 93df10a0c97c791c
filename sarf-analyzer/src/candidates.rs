//! Candidate roots for a surface form.
//!
//! Inverts the forward substitutions letter by letter: affixes are peeled
//! off the edges, pattern augments may be skipped inside, and each
//! remaining letter is read back as every radical that can surface as it.

use sarf_core::{Dialect, Letter, Root, Stem};
use sarf_engine::{lookup, suppletive_roots};
use std::collections::BTreeSet;

/// Letters a person or mood prefix, hamzat al-wasl or the Levantine ب can
/// leave at the start of a word.
const PREFIXES: [Letter; 9] = [
    Letter::AlefHamzaAbove,
    Letter::Alef,
    Letter::AlefHamzaBelow,
    Letter::Nun,
    Letter::Ta,
    Letter::Ya,
    Letter::Ba,
    Letter::Mim,
    Letter::Hamza,
];
const MAX_PREFIX: usize = 2;

const SUFFIXES: [Letter; 6] = [
    Letter::Ta,
    Letter::Nun,
    Letter::Alef,
    Letter::Waw,
    Letter::Ya,
    Letter::Mim,
];
const MAX_SUFFIX: usize = 4;

/// One (root, stem) pair to verify in one dialect.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Candidate {
    pub dialect: Dialect,
    pub stem: Stem,
    pub root: Root,
}

/// The radicals a surface letter can stand for.
fn readings(letter: Letter) -> Vec<Letter> {
    use Letter::*;
    match letter {
        Alef | AlefMaksura => vec![Waw, Ya, Hamza],
        Waw => vec![Waw, Ya, Hamza],
        Ya => vec![Ya, Waw, Hamza],
        Ta => vec![Ta, Waw, Ya, Hamza],
        Dal => vec![Dal, Thal],
        l if l.is_hamza() => vec![Hamza],
        l if l.is_radical() => vec![l],
        _ => vec![],
    }
}

/// Every stem of the word between up to two prefix letters and up to four
/// suffix letters. The unstripped word is always included, so an edge
/// letter can still be read as a radical.
fn cores(letters: &[Letter]) -> BTreeSet<&[Letter]> {
    let mut out = BTreeSet::new();
    for p in 0..=MAX_PREFIX.min(letters.len()) {
        if !letters[..p].iter().all(|l| PREFIXES.contains(l)) {
            break;
        }
        for s in 0..=MAX_SUFFIX.min(letters.len() - p) {
            let end = letters.len() - s;
            if !letters[end..].iter().all(|l| SUFFIXES.contains(l)) {
                break;
            }
            if end > p {
                out.insert(&letters[p..end]);
            }
        }
    }
    out
}

struct Search<'a> {
    core: &'a [Letter],
    arity: usize,
    augments: &'a [Letter],
    max_insertions: usize,
    found: BTreeSet<Vec<Letter>>,
}

impl Search<'_> {
    /// Pattern letters and long vowels need not be radicals.
    fn skippable(&self, letter: Letter) -> bool {
        self.augments.contains(&letter)
            || matches!(
                letter,
                Letter::Alef | Letter::AlefMaksura | Letter::Waw | Letter::Ya
            )
    }

    /// More radicals are missing than letters remain, so one must have
    /// been elided or contracted.
    fn short(&self, pos: usize, radicals: &[Letter]) -> bool {
        self.core.len() - pos < self.arity - radicals.len()
    }

    fn walk(&mut self, pos: usize, radicals: &mut Vec<Letter>, insertions: usize, doubled: bool) {
        if radicals.len() == self.arity {
            if self.core[pos..].iter().all(|l| self.skippable(*l)) {
                self.found.insert(radicals.clone());
            }
            return;
        }

        if insertions < self.max_insertions && self.short(pos, radicals) {
            for weak in [Letter::Waw, Letter::Ya, Letter::Hamza] {
                radicals.push(weak);
                self.walk(pos, radicals, insertions + 1, doubled);
                radicals.pop();
            }
        }

        let Some(&letter) = self.core.get(pos) else {
            return;
        };
        if self.skippable(letter) {
            self.walk(pos + 1, radicals, insertions, doubled);
        }
        for reading in readings(letter) {
            radicals.push(reading);
            self.walk(pos + 1, radicals, insertions, doubled);
            if !doubled && radicals.len() < self.arity && self.short(pos + 1, radicals) {
                radicals.push(reading);
                self.walk(pos + 1, radicals, insertions, true);
                radicals.pop();
            }
            radicals.pop();
        }
    }
}

/// Candidate (root, stem) pairs for `letters` across `dialects`, sorted.
pub(crate) fn candidates(
    letters: &[Letter],
    dialects: &[Dialect],
    max_insertions: usize,
) -> Vec<Candidate> {
    if letters.is_empty() {
        return Vec::new();
    }
    let cores = cores(letters);
    let mut out = BTreeSet::new();

    for &dialect in dialects {
        for stem in Stem::ALL {
            let Ok(pattern) = lookup(stem, dialect) else {
                continue;
            };
            for core in &cores {
                let mut search = Search {
                    core,
                    arity: stem.arity(),
                    augments: pattern.augments,
                    max_insertions,
                    found: BTreeSet::new(),
                };
                search.walk(0, &mut Vec::with_capacity(4), 0, false);
                for radicals in search.found {
                    if let Ok(root) = Root::new(radicals) {
                        out.insert(Candidate { dialect, stem, root });
                    }
                }
            }
        }
        for root in suppletive_roots() {
            out.insert(Candidate {
                dialect,
                stem: Stem::I,
                root,
            });
        }
    }
    out.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarf_core::parse_arabic;

    fn letters(text: &str) -> Vec<Letter> {
        parse_arabic(text).unwrap().iter().map(|vl| vl.letter).collect()
    }

    fn roots_for(text: &str, stem: Stem) -> BTreeSet<String> {
        candidates(&letters(text), &[Dialect::Msa], 2)
            .into_iter()
            .filter(|c| c.stem == stem)
            .map(|c| c.root.to_string())
            .collect()
    }

    #[test]
    fn test_cores_strip_edges() {
        let word = letters("يكتبون");
        let cores = cores(&word);
        assert!(cores.contains(&word[1..4]));
        assert!(cores.contains(&word[..]));
        assert!(!cores.iter().any(|c| c.is_empty()));
    }

    #[test]
    fn test_weak_readings() {
        let roots = roots_for("يعد", Stem::I);
        assert!(roots.contains("و-ع-د"));
        assert!(roots.contains("ع-و-د"));
        assert!(roots.contains("ع-د-د"));
    }

    #[test]
    fn test_augments_are_skipped() {
        let roots = roots_for("استخرج", Stem::X);
        assert!(roots.contains("خ-ر-ج"));
    }

    #[test]
    fn test_stem_eight_merge_is_undone() {
        let roots = roots_for("اتصل", Stem::VIII);
        assert!(roots.contains("و-ص-ل"));
        let roots = roots_for("ادخر", Stem::VIII);
        assert!(roots.contains("ذ-خ-ر"));
    }

    #[test]
    fn test_suppletive_roots_always_present() {
        let found = candidates(&letters("كتب"), &[Dialect::Levantine], 2);
        assert!(found
            .iter()
            .any(|c| c.stem == Stem::I && c.root.to_string() == "ج-ي-ء"));
        assert!(candidates(&[], &[Dialect::Msa], 2).is_empty());
    }
}
