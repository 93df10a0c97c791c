//! Root Model & Classifier
//!
//! A root is 3 or 4 radicals. Its phonological class is a pure function of
//! the radicals and is never stored.

use crate::error::{Result, SarfError};
use crate::letter::Letter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of 3 or 4 radicals.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Root {
    radicals: Vec<Letter>,
}

/// Phonological class of a root, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootClass {
    Quadrilateral,
    /// R2 = R3
    Doubled,
    /// R1 and R3 weak
    DoublyWeak,
    /// R3 weak
    Defective,
    /// R2 weak
    Hollow,
    /// R1 weak
    Assimilated,
    Sound,
}

impl Root {
    pub fn new(radicals: Vec<Letter>) -> Result<Self> {
        if !(3..=4).contains(&radicals.len()) {
            return Err(SarfError::InvalidRootArity {
                radicals: radicals.len(),
                stem: None,
            });
        }
        if let Some(bad) = radicals.iter().find(|r| !r.is_radical()) {
            return Err(SarfError::InvalidLetter(bad.to_char()));
        }
        Ok(Self { radicals })
    }

    pub fn radicals(&self) -> &[Letter] {
        &self.radicals
    }

    pub fn len(&self) -> usize {
        self.radicals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radicals.is_empty()
    }

    /// Radical by 1-based position, as grammars number them.
    ///
    /// `position` must lie in `1..=len()`; [`Root::get`] is the checked form.
    pub fn r(&self, position: usize) -> Letter {
        debug_assert!(
            (1..=self.len()).contains(&position),
            "radical {position} of a {}-letter root",
            self.len()
        );
        self.radicals[position - 1]
    }

    /// Radical by 1-based position, or `None` outside `1..=len()`.
    pub fn get(&self, position: usize) -> Option<Letter> {
        position
            .checked_sub(1)
            .and_then(|i| self.radicals.get(i))
            .copied()
    }

    pub fn is_quadrilateral(&self) -> bool {
        self.radicals.len() == 4
    }

    pub fn class(&self) -> RootClass {
        if self.is_quadrilateral() {
            return RootClass::Quadrilateral;
        }
        let (r1, r2, r3) = (self.r(1), self.r(2), self.r(3));
        if r2 == r3 {
            RootClass::Doubled
        } else if r1.is_weak() && r3.is_weak() {
            RootClass::DoublyWeak
        } else if r3.is_weak() {
            RootClass::Defective
        } else if r2.is_weak() {
            RootClass::Hollow
        } else if r1.is_weak() {
            RootClass::Assimilated
        } else {
            RootClass::Sound
        }
    }

    /// 1-based positions of hamza radicals.
    pub fn hamza_positions(&self) -> Vec<usize> {
        self.radicals
            .iter()
            .enumerate()
            .filter(|(_, r)| **r == Letter::Hamza)
            .map(|(i, _)| i + 1)
            .collect()
    }

    pub fn is_hamzated(&self) -> bool {
        self.radicals.contains(&Letter::Hamza)
    }

    /// True when R3 is weak, whatever the precedence class says.
    pub fn has_weak_final(&self) -> bool {
        !self.is_quadrilateral() && self.r(3).is_weak()
    }

    /// True when the radicals are exactly `radicals`, in order.
    pub fn is(&self, radicals: &[Letter]) -> bool {
        self.radicals == radicals
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: Vec<String> = self.radicals.iter().map(|r| r.to_char().to_string()).collect();
        f.write_str(&text.join("-"))
    }
}

impl FromStr for Root {
    type Err = SarfError;

    /// Accepts `ك-ت-ب` or `كتب`. Seated hamzas fold to the bare radical.
    fn from_str(s: &str) -> Result<Self> {
        let mut radicals = Vec::new();
        for ch in s.chars().filter(|c| *c != '-' && !c.is_whitespace()) {
            let letter = Letter::from_char(ch).ok_or(SarfError::InvalidLetter(ch))?;
            radicals.push(letter.unseated());
        }
        Root::new(radicals)
    }
}

impl TryFrom<String> for Root {
    type Error = SarfError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Root> for String {
    fn from(root: Root) -> Self {
        root.to_string()
    }
}
