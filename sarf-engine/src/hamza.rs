//! Hamza seating.
//!
//! Rules emit every hamza bare. This pass runs last, over the finished word,
//! and picks the carrier:
//! - two adjacent hamzas (or hamzat al-wasl before a silent hamza) merge
//!   into a madda or a long vowel
//! - a word-initial hamza sits on alif, below it when it carries kasra
//! - a final hamza follows the vowel before it, bare after a long vowel or
//!   sukun
//! - a medial hamza takes the stronger of its own vowel and the preceding
//!   one, ranked kasra > dhamma > fatha > sukun

use sarf_core::{Letter, Tashkil, VocalizedLetter, Word};

pub(crate) fn seat_hamzas(word: &mut Word) {
    merge_adjacent(word);
    for i in 0..word.len() {
        if word[i].letter == Letter::Hamza {
            word[i].letter = seat_for(word, i);
        }
    }
}

fn merge_adjacent(word: &mut Word) {
    let mut i = 0;
    while i + 1 < word.len() {
        let (first, second) = (word[i], word[i + 1]);
        let opener = first.letter == Letter::Hamza
            || (first.letter == Letter::Alef && first.tashkil.is_some());

        if opener && second.letter == Letter::Hamza && second.tashkil == Some(Tashkil::Sukun) {
            match first.tashkil {
                Some(Tashkil::Fatha) => {
                    word[i] = VocalizedLetter::bare(Letter::AlefMadda);
                    word.remove(i + 1);
                }
                Some(Tashkil::Dhamma) => word[i + 1] = VocalizedLetter::bare(Letter::Waw),
                Some(Tashkil::Kasra) => word[i + 1] = VocalizedLetter::bare(Letter::Ya),
                _ => {}
            }
        } else if first.letter == Letter::Hamza
            && first.tashkil == Some(Tashkil::Fatha)
            && !first.shadda
            && second.letter == Letter::Alef
            && second.tashkil.is_none()
            && (i == 0 || !word[i - 1].is_long_vowel())
        {
            word[i] = VocalizedLetter::bare(Letter::AlefMadda);
            word.remove(i + 1);
        }
        i += 1;
    }
}

fn long_vowel_rank(letter: Letter) -> u8 {
    match letter {
        Letter::Ya => 3,
        Letter::Waw => 2,
        _ => 1,
    }
}

fn carrier(rank: u8) -> Letter {
    match rank {
        3 => Letter::YaHamza,
        2 => Letter::WawHamza,
        _ => Letter::AlefHamzaAbove,
    }
}

fn seat_for(word: &[VocalizedLetter], i: usize) -> Letter {
    let own = word[i].tashkil;
    if i == 0 {
        return if matches!(own, Some(Tashkil::Kasra)) {
            Letter::AlefHamzaBelow
        } else {
            Letter::AlefHamzaAbove
        };
    }

    let prev = word[i - 1];
    if i + 1 == word.len() {
        if prev.is_long_vowel() || matches!(prev.tashkil, None | Some(Tashkil::Sukun)) {
            return Letter::Hamza;
        }
        return carrier(Tashkil::seating_rank(prev.tashkil));
    }

    if prev.is_long_vowel() {
        let rank = long_vowel_rank(prev.letter).max(Tashkil::seating_rank(own));
        return if rank <= 1 { Letter::Hamza } else { carrier(rank) };
    }
    carrier(Tashkil::seating_rank(prev.tashkil).max(Tashkil::seating_rank(own)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarf_core::{from_buckwalter, to_buckwalter};

    fn seated(bw: &str) -> String {
        let mut word = from_buckwalter(bw).unwrap();
        seat_hamzas(&mut word);
        to_buckwalter(&word)
    }

    #[test]
    fn test_initial_hamza() {
        assert_eq!(seated("'akala"), ">akala");
        assert_eq!(seated("'ikotub"), "<ikotub");
        assert_eq!(seated("'ukila"), ">ukila");
    }

    #[test]
    fn test_medial_hamza_takes_stronger_vowel() {
        assert_eq!(seated("sa'ala"), "sa>ala");
        assert_eq!(seated("su'ila"), "su}ila");
        assert_eq!(seated("yu'omin"), "yu&omin");
        assert_eq!(seated("yaso'alu"), "yaso>alu");
    }

    #[test]
    fn test_hamza_after_long_vowel() {
        assert_eq!(seated("jaA'ato"), "jaA'ato");
        assert_eq!(seated("qaA'il"), "qaA}il");
        assert_eq!(seated("jaA'a"), "jaA'a");
        assert_eq!(seated("jaA'aA"), "jaA'aA");
    }

    #[test]
    fn test_final_hamza_follows_previous_vowel() {
        assert_eq!(seated("yaqora'u"), "yaqora>u");
        assert_eq!(seated("qaAri'"), "qaAri}");
        assert_eq!(seated("baTu'a"), "baTu&a");
    }

    #[test]
    fn test_double_hamza_merges() {
        assert_eq!(seated("'a'oxu*u"), "|xu*u");
        assert_eq!(seated("'u'oxa*u"), ">uwxa*u");
        assert_eq!(seated("Ai'o*an"), "Aiy*an");
        assert_eq!(seated("ta'aAkala"), "ta|kala");
        assert_eq!(seated("qara'aA"), "qara|");
    }
}
