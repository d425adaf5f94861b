use std::fmt::{Debug, Display, Formatter};
use std::iter::FromIterator;

use serde::{Serialize, Serializer};

use crate::alphabet::{get_idx, letter, ALPHABET};

/// A set of alphabet letters, one bit per letter.
///
/// Iteration is always alphabetical, so two sets holding the same letters
/// compare equal and print the same regardless of insertion order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    /// Adds `c`, returning whether it was newly inserted. Letters outside the
    /// alphabet are ignored.
    pub fn insert(&mut self, c: char) -> bool {
        match get_idx(c) {
            Some(idx) => {
                let had = self.0 & (1 << idx) != 0;
                self.0 |= 1 << idx;
                !had
            }
            None => false,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        get_idx(c).map(|idx| self.0 & (1 << idx) != 0).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> Letters {
        Letters { bits: self.0, idx: 0 }
    }
}

pub struct Letters {
    bits: u32,
    idx: usize,
}

impl Iterator for Letters {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        while self.idx < ALPHABET.len() {
            let idx = self.idx;
            self.idx += 1;
            if self.bits & (1 << idx) != 0 {
                return Some(letter(idx));
            }
        }
        None
    }
}

impl IntoIterator for LetterSet {
    type Item = char;
    type IntoIter = Letters;

    fn into_iter(self) -> Letters {
        self.iter()
    }
}

impl IntoIterator for &LetterSet {
    type Item = char;
    type IntoIter = Letters;

    fn into_iter(self) -> Letters {
        self.iter()
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item=char>>(iter: I) -> Self {
        let mut set = LetterSet::new();
        iter.into_iter().for_each(|c| { set.insert(c); });
        set
    }
}

impl Display for LetterSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl Debug for LetterSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for LetterSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_str(&self.to_string())
    }
}
