//! Stem VIII infix assimilation.
//!
//! The infix ت of افتعل adapts to R1. The outcomes are lexically fixed, so
//! they live in a lookup table rather than a general phonological rule.

use crate::form::{Form, Role};
use sarf_core::{Letter, Root};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Assimilation {
    infix: Letter,
    /// R1 disappears into a doubled infix.
    merge: bool,
}

fn lookup(root: &Root) -> Option<Assimilation> {
    let r1 = root.r(1);
    let (infix, merge) = match r1 {
        Letter::Sad | Letter::Dad | Letter::Zah => (Letter::Tah, false),
        Letter::Tah => (Letter::Tah, true),
        Letter::Dal | Letter::Thal => (Letter::Dal, true),
        Letter::Zay => (Letter::Dal, false),
        Letter::Waw | Letter::Ya | Letter::Ta => (Letter::Ta, true),
        Letter::Hamza if root.is(&[Letter::Hamza, Letter::Kha, Letter::Thal]) => (Letter::Ta, true),
        _ => return None,
    };
    Some(Assimilation { infix, merge })
}

/// Rewrites the stem VIII infix for `root`. A no-op for other roots.
pub(crate) fn assimilate(form: &mut Form, root: &Root) {
    let Some(rule) = lookup(root) else {
        return;
    };
    let Some(infix) = form.find(Role::Affix) else {
        return;
    };
    form[infix].letter = rule.infix;
    if rule.merge {
        form[infix].shadda = true;
        if let Some(r1) = form.radical(1) {
            form.remove(r1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assimilation_table() {
        let root: Root = "ص-ل-ح".parse().unwrap();
        assert_eq!(
            lookup(&root),
            Some(Assimilation { infix: Letter::Tah, merge: false })
        );
        let root: Root = "ذ-خ-ر".parse().unwrap();
        assert_eq!(
            lookup(&root),
            Some(Assimilation { infix: Letter::Dal, merge: true })
        );
        let root: Root = "ء-م-ن".parse().unwrap();
        assert_eq!(lookup(&root), None);
        let root: Root = "ك-ت-ب".parse().unwrap();
        assert_eq!(lookup(&root), None);
    }
}
