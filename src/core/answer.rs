//! Quiz answers

use std::fmt;

/// A quiz-taker's answer for one word: recognized or not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Parse the exact wire values `"yes"` and `"no"`
    ///
    /// Anything else (including different case) is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl From<bool> for Answer {
    fn from(known: bool) -> Self {
        if known { Self::Yes } else { Self::No }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_exact_values() {
        assert_eq!(Answer::parse("yes"), Some(Answer::Yes));
        assert_eq!(Answer::parse("no"), Some(Answer::No));
    }

    #[test]
    fn parse_rejects_everything_else() {
        assert_eq!(Answer::parse("maybe"), None);
        assert_eq!(Answer::parse("Yes"), None);
        assert_eq!(Answer::parse(" no"), None);
        assert_eq!(Answer::parse(""), None);
    }

    #[test]
    fn from_bool() {
        assert_eq!(Answer::from(true), Answer::Yes);
        assert_eq!(Answer::from(false), Answer::No);
        assert!(Answer::Yes.is_yes());
        assert!(!Answer::No.is_yes());
    }
}
