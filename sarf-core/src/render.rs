//! Vocalization Renderer
//!
//! Converts vocalized letter sequences to and from display text:
//! - Arabic script, marks emitted as letter, vowel, shadda
//! - Buckwalter ASCII transliteration for logs, the CLI and fixtures
//!
//! Parsing accepts marks in any order and skips tatweel and whitespace.

use crate::error::{Result, SarfError};
use crate::letter::{Letter, Tashkil, VocalizedLetter, SHADDA, TATWEEL};

/// A word as the engine emits it.
pub type Word = Vec<VocalizedLetter>;

static BUCKWALTER_LETTERS: &[(Letter, char)] = &[
    (Letter::Hamza, '\''),
    (Letter::AlefMadda, '|'),
    (Letter::AlefHamzaAbove, '>'),
    (Letter::WawHamza, '&'),
    (Letter::AlefHamzaBelow, '<'),
    (Letter::YaHamza, '}'),
    (Letter::Alef, 'A'),
    (Letter::Ba, 'b'),
    (Letter::TaMarbuta, 'p'),
    (Letter::Ta, 't'),
    (Letter::Tha, 'v'),
    (Letter::Jim, 'j'),
    (Letter::Hha, 'H'),
    (Letter::Kha, 'x'),
    (Letter::Dal, 'd'),
    (Letter::Thal, '*'),
    (Letter::Ra, 'r'),
    (Letter::Zay, 'z'),
    (Letter::Sin, 's'),
    (Letter::Shin, '$'),
    (Letter::Sad, 'S'),
    (Letter::Dad, 'D'),
    (Letter::Tah, 'T'),
    (Letter::Zah, 'Z'),
    (Letter::Ain, 'E'),
    (Letter::Ghain, 'g'),
    (Letter::Fa, 'f'),
    (Letter::Qaf, 'q'),
    (Letter::Kaf, 'k'),
    (Letter::Lam, 'l'),
    (Letter::Mim, 'm'),
    (Letter::Nun, 'n'),
    (Letter::Ha, 'h'),
    (Letter::Waw, 'w'),
    (Letter::AlefMaksura, 'Y'),
    (Letter::Ya, 'y'),
];

static BUCKWALTER_MARKS: &[(Tashkil, char)] = &[
    (Tashkil::Fatha, 'a'),
    (Tashkil::Kasra, 'i'),
    (Tashkil::Dhamma, 'u'),
    (Tashkil::Sukun, 'o'),
    (Tashkil::Fathatan, 'F'),
    (Tashkil::Kasratan, 'K'),
    (Tashkil::Dhammatan, 'N'),
];

const BUCKWALTER_SHADDA: char = '~';

pub fn render_arabic(word: &[VocalizedLetter]) -> String {
    let mut out = String::with_capacity(word.len() * 6);
    for vl in word {
        out.push(vl.letter.to_char());
        if let Some(tashkil) = vl.tashkil {
            out.push(tashkil.to_char());
        }
        if vl.shadda {
            out.push(SHADDA);
        }
    }
    out
}

pub fn parse_arabic(text: &str) -> Result<Word> {
    parse_with(text, |ch| {
        if let Some(letter) = Letter::from_char(ch) {
            Ok(Token::Letter(letter))
        } else if let Some(tashkil) = Tashkil::from_char(ch) {
            Ok(Token::Mark(tashkil))
        } else if ch == SHADDA {
            Ok(Token::Shadda)
        } else if ch == TATWEEL || ch.is_whitespace() {
            Ok(Token::Skip)
        } else {
            Err(SarfError::InvalidLetter(ch))
        }
    })
}

pub fn to_buckwalter(word: &[VocalizedLetter]) -> String {
    let mut out = String::with_capacity(word.len() * 3);
    for vl in word {
        out.push(buckwalter_letter(vl.letter));
        if let Some(tashkil) = vl.tashkil {
            out.push(buckwalter_mark(tashkil));
        }
        if vl.shadda {
            out.push(BUCKWALTER_SHADDA);
        }
    }
    out
}

pub fn from_buckwalter(text: &str) -> Result<Word> {
    parse_with(text, |ch| {
        if let Some((letter, _)) = BUCKWALTER_LETTERS.iter().find(|(_, c)| *c == ch) {
            Ok(Token::Letter(*letter))
        } else if let Some((tashkil, _)) = BUCKWALTER_MARKS.iter().find(|(_, c)| *c == ch) {
            Ok(Token::Mark(*tashkil))
        } else if ch == BUCKWALTER_SHADDA {
            Ok(Token::Shadda)
        } else if ch == '_' || ch.is_whitespace() {
            Ok(Token::Skip)
        } else {
            Err(SarfError::InvalidBuckwalter(ch))
        }
    })
}

fn buckwalter_letter(letter: Letter) -> char {
    BUCKWALTER_LETTERS
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, c)| *c)
        .unwrap_or('?')
}

fn buckwalter_mark(tashkil: Tashkil) -> char {
    BUCKWALTER_MARKS
        .iter()
        .find(|(t, _)| *t == tashkil)
        .map(|(_, c)| *c)
        .unwrap_or('?')
}

enum Token {
    Letter(Letter),
    Mark(Tashkil),
    Shadda,
    Skip,
}

fn parse_with(text: &str, classify: impl Fn(char) -> Result<Token>) -> Result<Word> {
    let mut word: Word = Vec::with_capacity(text.len() / 2);
    for ch in text.chars() {
        match classify(ch)? {
            Token::Letter(letter) => word.push(VocalizedLetter::bare(letter)),
            Token::Mark(tashkil) => match word.last_mut() {
                Some(last) => last.tashkil = Some(tashkil),
                None => return Err(SarfError::InvalidLetter(ch)),
            },
            Token::Shadda => match word.last_mut() {
                Some(last) => last.shadda = true,
                None => return Err(SarfError::InvalidLetter(ch)),
            },
            Token::Skip => {}
        }
    }
    Ok(word)
}
