//! Sample point representation
//!
//! A sample point holds three words verified to sit at the same approximate
//! frequency rank. Exactly one of them is shown to a given quiz-taker.

use std::fmt;

/// One of the three candidate positions of a sample point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    A,
    B,
    C,
}

impl Slot {
    /// All slots in dictionary order
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Parse the slot column of a dictionary line
    #[must_use]
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            _ => None,
        }
    }

    /// Slot position (0-2)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }

    /// Lowercase letter used in dictionary files and records
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Three alternative words at the same approximate rank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePoint {
    rank: u32,
    words: [String; 3],
}

impl SamplePoint {
    /// Create a sample point from its rank and the words in slots a, b, c
    #[must_use]
    pub const fn new(rank: u32, words: [String; 3]) -> Self {
        Self { rank, words }
    }

    /// Rank within the dictionary (more frequent words have a lower value)
    #[inline]
    #[must_use]
    pub const fn rank(&self) -> u32 {
        self.rank
    }

    /// Word in the given slot
    #[inline]
    #[must_use]
    pub fn word(&self, slot: Slot) -> &str {
        &self.words[slot.index()]
    }

    /// All three words in slot order
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &[String; 3] {
        &self.words
    }

    /// Slot holding `word`, if the word belongs to this point
    #[must_use]
    pub fn slot_of(&self, word: &str) -> Option<Slot> {
        Slot::ALL.into_iter().find(|&slot| self.word(slot) == word)
    }
}

impl fmt::Display for SamplePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} / {} / {}",
            self.rank, self.words[0], self.words[1], self.words[2]
        )
    }
}
