//! Working representation used while rules rewrite a word.
//!
//! Every segment remembers which template slot produced it, so that rules
//! can address "R2" or "the stem VIII infix" after earlier rules have
//! inserted or removed letters.

use sarf_core::{
    ConjugationParameters, Letter, Root, RootClass, Stem, Stem1Context, Tashkil, VocalizedLetter,
    Voice, Word,
};

/// A rule reached a combination it has no branch for.
///
/// Carries a short description for the log line; the generator turns it
/// into `SarfError::UnhandledMorphology` with the full input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RuleGap(pub &'static str);

pub(crate) type RuleResult<T> = std::result::Result<T, RuleGap>;

/// Everything the rule passes may consult.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Request<'a> {
    pub root: &'a Root,
    pub class: RootClass,
    pub params: &'a ConjugationParameters,
    pub ctx: Option<&'a Stem1Context>,
}

impl<'a> Request<'a> {
    pub fn new(
        root: &'a Root,
        params: &'a ConjugationParameters,
        ctx: Option<&'a Stem1Context>,
    ) -> Self {
        Self {
            root,
            class: root.class(),
            params,
            ctx,
        }
    }

    pub fn stem(&self) -> Stem {
        self.params.stem
    }

    pub fn is_passive(&self) -> bool {
        self.params.voice == Voice::Passive
    }

    pub fn sound_override(&self) -> bool {
        self.ctx.map(|c| c.sound_override).unwrap_or(false)
    }

    /// A doubled root whose R3 is also weak (حيي) conjugates as defective.
    pub fn is_weak_doubled(&self) -> bool {
        self.class == RootClass::Doubled && self.root.has_weak_final()
    }
}

/// Template slot a segment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    /// Person prefix, hamzat al-wasl or dialect mood prefix.
    Prefix,
    /// Fixed pattern letter such as the stem X سْتَ.
    Affix,
    /// Long vowel written by the pattern (stem III ا).
    Long,
    /// Root radical, 1-based.
    Radical(u8),
    /// Stem IX copy of a radical.
    Copy(u8),
    /// Person/number suffix.
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Seg {
    pub letter: Letter,
    pub tashkil: Option<Tashkil>,
    pub shadda: bool,
    pub role: Role,
}

impl Seg {
    pub fn new(letter: Letter, tashkil: Option<Tashkil>, role: Role) -> Self {
        Self {
            letter,
            tashkil,
            shadda: false,
            role,
        }
    }

    pub fn prefix(letter: Letter, tashkil: Option<Tashkil>) -> Self {
        Self::new(letter, tashkil, Role::Prefix)
    }

    pub fn suffix(letter: Letter, tashkil: Option<Tashkil>) -> Self {
        Self::new(letter, tashkil, Role::Suffix)
    }

    pub fn doubled(mut self) -> Self {
        self.shadda = true;
        self
    }

    /// A segment that closes its syllable: sukun or a doubled consonant.
    pub fn starts_cluster(&self) -> bool {
        self.shadda || self.tashkil == Some(Tashkil::Sukun)
    }

    pub fn to_vocalized(self) -> VocalizedLetter {
        VocalizedLetter {
            letter: self.letter,
            tashkil: self.tashkil,
            shadda: self.shadda,
            emphasis: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Form {
    pub segs: Vec<Seg>,
}

impl Form {
    pub fn new(segs: Vec<Seg>) -> Self {
        Self { segs }
    }

    pub fn find(&self, role: Role) -> Option<usize> {
        self.segs.iter().position(|s| s.role == role)
    }

    pub fn radical(&self, n: u8) -> Option<usize> {
        self.find(Role::Radical(n))
    }

    /// Index of the highest-numbered radical still present.
    pub fn last_radical(&self) -> Option<usize> {
        self.segs
            .iter()
            .enumerate()
            .filter_map(|(i, s)| match s.role {
                Role::Radical(n) => Some((n, i)),
                _ => None,
            })
            .max_by_key(|(n, _)| *n)
            .map(|(_, i)| i)
    }

    pub fn first(&self) -> Option<&Seg> {
        self.segs.first()
    }

    pub fn remove(&mut self, index: usize) -> Seg {
        self.segs.remove(index)
    }

    pub fn extend(&mut self, segs: impl IntoIterator<Item = Seg>) {
        self.segs.extend(segs);
    }

    pub fn prepend(&mut self, segs: &[Seg]) {
        self.segs.splice(0..0, segs.iter().copied());
    }

    pub fn into_word(self) -> Word {
        self.segs.into_iter().map(Seg::to_vocalized).collect()
    }
}

impl std::ops::Index<usize> for Form {
    type Output = Seg;

    fn index(&self, index: usize) -> &Seg {
        &self.segs[index]
    }
}

impl std::ops::IndexMut<usize> for Form {
    fn index_mut(&mut self, index: usize) -> &mut Seg {
        &mut self.segs[index]
    }
}
