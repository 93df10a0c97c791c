//! Full paradigm enumeration for one root and stem.

use crate::generator::{generate, passive_gap, ConjugationResult};
use sarf_core::{ConjugationParameters, Dialect, Result, Root, Stem, Stem1Context};

/// Every cell of the paradigm, in display order.
///
/// Cells without a passive paradigm are left out. Any other error aborts
/// the whole enumeration.
pub fn paradigm(
    root: &Root,
    stem: Stem,
    ctx: Option<&Stem1Context>,
    dialect: Dialect,
) -> Result<Vec<(ConjugationParameters, ConjugationResult)>> {
    ConjugationParameters::cells(stem, dialect)
        .into_iter()
        .filter(|params| passive_gap(root, stem, params.voice).is_none())
        .map(|params| generate(root, &params, ctx).map(|result| (params, result)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarf_core::{SarfError, Tashkil, Voice};

    #[test]
    fn test_stem_vii_has_no_passive_cells() {
        let root: Root = "ك-س-ر".parse().unwrap();
        let cells = paradigm(&root, Stem::VII, None, Dialect::Msa).unwrap();
        assert!(cells.iter().all(|(p, _)| p.voice == Voice::Active));
        // 13 perfect, 3 moods x 13, 5 imperatives
        assert_eq!(cells.len(), 13 + 39 + 5);
    }

    #[test]
    fn test_levantine_paradigm_size() {
        let root: Root = "ك-ت-ب".parse().unwrap();
        let ctx = Stem1Context::new(Tashkil::Fatha, Tashkil::Dhamma);
        let cells = paradigm(&root, Stem::I, Some(&ctx), Dialect::Levantine).unwrap();
        assert_eq!(cells.len(), 27);
    }

    #[test]
    fn test_missing_context_aborts() {
        let root: Root = "ك-ت-ب".parse().unwrap();
        assert!(matches!(
            paradigm(&root, Stem::I, None, Dialect::Msa),
            Err(SarfError::MissingStem1Context)
        ));
    }
}
