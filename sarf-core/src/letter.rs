//! Arabic Letter and Diacritic Model
//!
//! Closed enumerations for the Arabic letter inventory and the marks that
//! vocalize it:
//! - Consonants and long-vowel letters, including every hamza carrier
//! - Short vowels, sukun and the tanween forms used by nominal output
//! - `VocalizedLetter`, the atomic unit every conjugated form is built from

use serde::{Deserialize, Serialize};

/// One Arabic consonant or long-vowel letter.
///
/// Variants are declared in Unicode code point order so that the derived
/// `Ord` sorts letters the way Arabic dictionaries do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    Hamza,
    AlefMadda,
    AlefHamzaAbove,
    WawHamza,
    AlefHamzaBelow,
    YaHamza,
    Alef,
    Ba,
    TaMarbuta,
    Ta,
    Tha,
    Jim,
    Hha,
    Kha,
    Dal,
    Thal,
    Ra,
    Zay,
    Sin,
    Shin,
    Sad,
    Dad,
    Tah,
    Zah,
    Ain,
    Ghain,
    Fa,
    Qaf,
    Kaf,
    Lam,
    Mim,
    Nun,
    Ha,
    Waw,
    AlefMaksura,
    Ya,
}

static LETTER_TABLE: &[(Letter, char)] = &[
    (Letter::Hamza, 'ء'),
    (Letter::AlefMadda, 'آ'),
    (Letter::AlefHamzaAbove, 'أ'),
    (Letter::WawHamza, 'ؤ'),
    (Letter::AlefHamzaBelow, 'إ'),
    (Letter::YaHamza, 'ئ'),
    (Letter::Alef, 'ا'),
    (Letter::Ba, 'ب'),
    (Letter::TaMarbuta, 'ة'),
    (Letter::Ta, 'ت'),
    (Letter::Tha, 'ث'),
    (Letter::Jim, 'ج'),
    (Letter::Hha, 'ح'),
    (Letter::Kha, 'خ'),
    (Letter::Dal, 'د'),
    (Letter::Thal, 'ذ'),
    (Letter::Ra, 'ر'),
    (Letter::Zay, 'ز'),
    (Letter::Sin, 'س'),
    (Letter::Shin, 'ش'),
    (Letter::Sad, 'ص'),
    (Letter::Dad, 'ض'),
    (Letter::Tah, 'ط'),
    (Letter::Zah, 'ظ'),
    (Letter::Ain, 'ع'),
    (Letter::Ghain, 'غ'),
    (Letter::Fa, 'ف'),
    (Letter::Qaf, 'ق'),
    (Letter::Kaf, 'ك'),
    (Letter::Lam, 'ل'),
    (Letter::Mim, 'م'),
    (Letter::Nun, 'ن'),
    (Letter::Ha, 'ه'),
    (Letter::Waw, 'و'),
    (Letter::AlefMaksura, 'ى'),
    (Letter::Ya, 'ي'),
];

impl Letter {
    /// Every letter of the inventory in code point order.
    pub fn all() -> impl Iterator<Item = Letter> {
        LETTER_TABLE.iter().map(|(letter, _)| *letter)
    }

    pub fn from_char(ch: char) -> Option<Letter> {
        LETTER_TABLE
            .iter()
            .find(|(_, c)| *c == ch)
            .map(|(letter, _)| *letter)
    }

    pub fn to_char(self) -> char {
        LETTER_TABLE
            .iter()
            .find(|(letter, _)| *letter == self)
            .map(|(_, c)| *c)
            .unwrap_or('\u{FFFD}')
    }

    /// Waw and ya, the letters that make a root weak.
    pub fn is_weak(self) -> bool {
        matches!(self, Letter::Waw | Letter::Ya)
    }

    /// Bare hamza or hamza on any carrier.
    pub fn is_hamza(self) -> bool {
        matches!(
            self,
            Letter::Hamza
                | Letter::AlefMadda
                | Letter::AlefHamzaAbove
                | Letter::WawHamza
                | Letter::AlefHamzaBelow
                | Letter::YaHamza
        )
    }

    /// Letters that can never stand as a root radical.
    ///
    /// Seated hamzas are surface spellings; a hamza radical is always the
    /// bare `Hamza`.
    pub fn is_radical(self) -> bool {
        !matches!(
            self,
            Letter::Alef
                | Letter::AlefMaksura
                | Letter::TaMarbuta
                | Letter::AlefMadda
                | Letter::AlefHamzaAbove
                | Letter::WawHamza
                | Letter::AlefHamzaBelow
                | Letter::YaHamza
        )
    }

    /// Folds any hamza spelling to the bare hamza.
    pub fn unseated(self) -> Letter {
        if self.is_hamza() {
            Letter::Hamza
        } else {
            self
        }
    }
}

/// A vowel mark.
///
/// The absence of a mark is `Option<Tashkil>::None`; shadda is a separate
/// flag on `VocalizedLetter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tashkil {
    Fatha,
    Kasra,
    Dhamma,
    Sukun,
    Fathatan,
    Kasratan,
    Dhammatan,
}

impl Tashkil {
    pub fn from_char(ch: char) -> Option<Tashkil> {
        match ch {
            '\u{064E}' => Some(Tashkil::Fatha),
            '\u{0650}' => Some(Tashkil::Kasra),
            '\u{064F}' => Some(Tashkil::Dhamma),
            '\u{0652}' => Some(Tashkil::Sukun),
            '\u{064B}' => Some(Tashkil::Fathatan),
            '\u{064D}' => Some(Tashkil::Kasratan),
            '\u{064C}' => Some(Tashkil::Dhammatan),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Tashkil::Fatha => '\u{064E}',
            Tashkil::Kasra => '\u{0650}',
            Tashkil::Dhamma => '\u{064F}',
            Tashkil::Sukun => '\u{0652}',
            Tashkil::Fathatan => '\u{064B}',
            Tashkil::Kasratan => '\u{064D}',
            Tashkil::Dhammatan => '\u{064C}',
        }
    }

    /// The long-vowel letter that lengthens this short vowel.
    pub fn long_letter(self) -> Option<Letter> {
        match self {
            Tashkil::Fatha => Some(Letter::Alef),
            Tashkil::Kasra => Some(Letter::Ya),
            Tashkil::Dhamma => Some(Letter::Waw),
            _ => None,
        }
    }

    /// Strength used for hamza seating: kasra > dhamma > fatha > sukun.
    pub fn seating_rank(tashkil: Option<Tashkil>) -> u8 {
        match tashkil {
            Some(Tashkil::Kasra) | Some(Tashkil::Kasratan) => 3,
            Some(Tashkil::Dhamma) | Some(Tashkil::Dhammatan) => 2,
            Some(Tashkil::Fatha) | Some(Tashkil::Fathatan) => 1,
            Some(Tashkil::Sukun) | None => 0,
        }
    }
}

pub const SHADDA: char = '\u{0651}';
pub const TATWEEL: char = '\u{0640}';

/// One letter with its marks, the atomic unit of every generated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocalizedLetter {
    pub letter: Letter,
    pub tashkil: Option<Tashkil>,
    pub shadda: bool,
    /// Contextual emphasis; carried through for dialect renderers and never
    /// set by the MSA rules.
    pub emphasis: bool,
}

impl VocalizedLetter {
    pub fn new(letter: Letter, tashkil: Option<Tashkil>) -> Self {
        Self {
            letter,
            tashkil,
            shadda: false,
            emphasis: false,
        }
    }

    pub fn bare(letter: Letter) -> Self {
        Self::new(letter, None)
    }

    pub fn with_shadda(mut self) -> Self {
        self.shadda = true;
        self
    }

    /// A long-vowel letter: ا, و or ي carrying no mark of its own.
    pub fn is_long_vowel(&self) -> bool {
        self.tashkil.is_none()
            && !self.shadda
            && matches!(
                self.letter,
                Letter::Alef | Letter::Waw | Letter::Ya | Letter::AlefMaksura
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_mapping_is_bijective() {
        for letter in Letter::all() {
            assert_eq!(Letter::from_char(letter.to_char()), Some(letter));
        }
        assert_eq!(Letter::all().count(), 36);
    }

    #[test]
    fn test_letter_order_follows_code_points() {
        let chars: Vec<char> = Letter::all().map(Letter::to_char).collect();
        let mut sorted = chars.clone();
        sorted.sort();
        assert_eq!(chars, sorted);
        assert!(Letter::Hamza < Letter::Ya);
    }

    #[test]
    fn test_radical_letters() {
        assert!(Letter::Hamza.is_radical());
        assert!(Letter::Waw.is_radical());
        assert!(!Letter::Alef.is_radical());
        assert!(!Letter::AlefHamzaAbove.is_radical());
        assert!(!Letter::TaMarbuta.is_radical());
        assert_eq!(Letter::YaHamza.unseated(), Letter::Hamza);
        assert_eq!(Letter::Kaf.unseated(), Letter::Kaf);
    }

    #[test]
    fn test_seating_rank_order() {
        let kasra = Tashkil::seating_rank(Some(Tashkil::Kasra));
        let dhamma = Tashkil::seating_rank(Some(Tashkil::Dhamma));
        let fatha = Tashkil::seating_rank(Some(Tashkil::Fatha));
        let sukun = Tashkil::seating_rank(Some(Tashkil::Sukun));
        assert!(kasra > dhamma && dhamma > fatha && fatha > sukun);
        assert_eq!(Tashkil::seating_rank(None), sukun);
    }

    #[test]
    fn test_long_vowel_detection() {
        assert!(VocalizedLetter::bare(Letter::Alef).is_long_vowel());
        assert!(!VocalizedLetter::new(Letter::Waw, Some(Tashkil::Fatha)).is_long_vowel());
        assert!(!VocalizedLetter::bare(Letter::Ya).with_shadda().is_long_vowel());
    }
}
