//! Encoded answer records
//!
//! A record is a compact transcript of one evaluated quiz, independent of the
//! order words were presented in:
//!
//! ```text
//! <sample name>-<120 marks>
//! ```
//!
//! Mark `i` belongs to sample point `i % 40` of band `i / 40`. A mark is the
//! slot letter of the word that was shown (`a`, `b` or `c`), uppercase when the
//! word was recognized, lowercase when it was not, and `.` when the point was
//! never answered.

use super::{Answer, Band, POINTS_PER_RANGE, RECORD_SLOTS, Slot};
use crate::error::{Result, SamplerError};
use std::fmt;

/// Separator between sample name and marks
pub const RECORD_SEPARATOR: char = '-';

/// Character written for points without an answer
pub const UNSET_MARK: char = '.';

/// One position of an encoded record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Unset,
    Answered { slot: Slot, answer: Answer },
}

impl Mark {
    #[must_use]
    pub const fn new(slot: Slot, answer: Answer) -> Self {
        Self::Answered { slot, answer }
    }

    /// Character representation (`a`/`A`, `b`/`B`, `c`/`C` or `.`)
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Unset => UNSET_MARK,
            Self::Answered { slot, answer } => {
                let letter = slot.letter();
                if answer.is_yes() {
                    letter.to_ascii_uppercase()
                } else {
                    letter
                }
            }
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        let (slot, answer) = match c {
            UNSET_MARK => return Some(Self::Unset),
            'a' => (Slot::A, Answer::No),
            'b' => (Slot::B, Answer::No),
            'c' => (Slot::C, Answer::No),
            'A' => (Slot::A, Answer::Yes),
            'B' => (Slot::B, Answer::Yes),
            'C' => (Slot::C, Answer::Yes),
            _ => return None,
        };
        Some(Self::Answered { slot, answer })
    }

    #[inline]
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(
            self,
            Self::Answered {
                answer: Answer::Yes,
                ..
            }
        )
    }
}

/// Transcript of which words were shown and how they were answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRecord {
    sample_name: String,
    marks: [Mark; RECORD_SLOTS],
}

impl EncodedRecord {
    /// Empty record (all marks unset) for a sample
    #[must_use]
    pub fn new(sample_name: impl Into<String>) -> Self {
        Self {
            sample_name: sample_name.into(),
            marks: [Mark::Unset; RECORD_SLOTS],
        }
    }

    /// Decode the text form produced by `Display`
    ///
    /// The last 120 characters are the marks and must be preceded by the
    /// separator; everything before it is the sample name.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::MalformedRecord` if the text is too short, the
    /// separator is missing or a mark character is invalid.
    ///
    /// # Examples
    /// ```
    /// use vocab_sampler::core::EncodedRecord;
    ///
    /// let text = format!("sample1-B{}", ".".repeat(119));
    /// let record = EncodedRecord::parse(&text).unwrap();
    /// assert_eq!(record.sample_name(), "sample1");
    /// assert_eq!(record.yes_counts(), [1, 0, 0]);
    /// assert_eq!(record.to_string(), text);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let tail = RECORD_SLOTS + 1;
        if text.len() < tail || !text.is_char_boundary(text.len() - tail) {
            return Err(SamplerError::MalformedRecord(format!(
                "expected at least {tail} characters, got {}",
                text.chars().count()
            )));
        }

        let (sample_name, rest) = text.split_at(text.len() - tail);
        let mut chars = rest.chars();
        if chars.next() != Some(RECORD_SEPARATOR) {
            return Err(SamplerError::MalformedRecord(format!(
                "missing '{RECORD_SEPARATOR}' before the {RECORD_SLOTS} marks"
            )));
        }

        let mut marks = [Mark::Unset; RECORD_SLOTS];
        for (i, (slot, c)) in marks.iter_mut().zip(chars).enumerate() {
            *slot = Mark::from_char(c).ok_or_else(|| {
                SamplerError::MalformedRecord(format!("invalid mark '{c}' at position {i}"))
            })?;
        }

        Ok(Self {
            sample_name: sample_name.to_string(),
            marks,
        })
    }

    #[inline]
    #[must_use]
    pub fn sample_name(&self) -> &str {
        &self.sample_name
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; RECORD_SLOTS] {
        &self.marks
    }

    /// Mark of a sample point
    ///
    /// # Panics
    /// Panics if `index >= 40`
    #[must_use]
    pub const fn mark(&self, band: Band, index: usize) -> Mark {
        assert!(index < POINTS_PER_RANGE, "point index out of range");
        self.marks[band.offset() + index]
    }

    pub(crate) fn set(&mut self, band: Band, index: usize, mark: Mark) {
        self.marks[band.offset() + index] = mark;
    }

    /// Marks of one band, in point order
    #[must_use]
    pub fn band_marks(&self, band: Band) -> &[Mark] {
        &self.marks[band.offset()..band.offset() + POINTS_PER_RANGE]
    }

    /// Number of recognized words per band
    #[must_use]
    pub fn yes_counts(&self) -> [u32; 3] {
        Band::ALL.map(|band| {
            self.band_marks(band)
                .iter()
                .filter(|mark| mark.is_yes())
                .count() as u32
        })
    }

    /// Number of answered points
    #[must_use]
    pub fn answered(&self) -> usize {
        self.marks.iter().filter(|m| **m != Mark::Unset).count()
    }

    /// Marks only, without the sample name
    #[must_use]
    pub fn marks_string(&self) -> String {
        self.marks.iter().map(|m| m.to_char()).collect()
    }
}

impl fmt::Display for EncodedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{RECORD_SEPARATOR}{}",
            self.sample_name,
            self.marks_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_chars() {
        assert_eq!(Mark::Unset.to_char(), '.');
        assert_eq!(Mark::new(Slot::A, Answer::No).to_char(), 'a');
        assert_eq!(Mark::new(Slot::B, Answer::Yes).to_char(), 'B');
        assert_eq!(Mark::new(Slot::C, Answer::Yes).to_char(), 'C');
        for c in ['.', 'a', 'A', 'b', 'B', 'c', 'C'] {
            assert_eq!(Mark::from_char(c).map(Mark::to_char), Some(c));
        }
        assert_eq!(Mark::from_char('d'), None);
        assert_eq!(Mark::from_char('-'), None);
    }

    #[test]
    fn new_record_is_unset() {
        let record = EncodedRecord::new("sample1");
        assert_eq!(record.answered(), 0);
        assert_eq!(record.yes_counts(), [0, 0, 0]);
        assert_eq!(
            record.to_string(),
            format!("sample1-{}", ".".repeat(RECORD_SLOTS))
        );
    }

    #[test]
    fn display_length() {
        let record = EncodedRecord::new("sample1");
        assert_eq!(record.to_string().len(), "sample1".len() + 1 + RECORD_SLOTS);
    }

    #[test]
    fn set_places_mark_by_band_offset() {
        let mut record = EncodedRecord::new("s");
        record.set(Band::High, 0, Mark::new(Slot::B, Answer::Yes));
        record.set(Band::Medium, 1, Mark::new(Slot::A, Answer::No));
        record.set(Band::Rare, 39, Mark::new(Slot::C, Answer::Yes));

        let marks = record.marks_string();
        assert_eq!(&marks[0..1], "B");
        assert_eq!(&marks[41..42], "a");
        assert_eq!(&marks[119..120], "C");
        assert_eq!(record.yes_counts(), [1, 0, 1]);
        assert_eq!(record.answered(), 3);
        assert_eq!(record.mark(Band::Medium, 1), Mark::new(Slot::A, Answer::No));
    }

    #[test]
    fn parse_accepts_dashes_in_sample_name() {
        let mut record = EncodedRecord::new("vocab-2024-v2");
        record.set(Band::Rare, 5, Mark::new(Slot::C, Answer::No));
        let parsed = EncodedRecord::parse(&record.to_string()).unwrap();
        assert_eq!(parsed, record);
        assert_eq!(parsed.sample_name(), "vocab-2024-v2");
    }

    #[test]
    fn parse_rejects_short_text() {
        let err = EncodedRecord::parse("sample1-abc").unwrap_err();
        assert!(matches!(err, SamplerError::MalformedRecord(_)));
    }

    #[test]
    fn parse_rejects_missing_separator() {
        let text = format!("sample1_{}", ".".repeat(RECORD_SLOTS));
        assert!(matches!(
            EncodedRecord::parse(&text),
            Err(SamplerError::MalformedRecord(_))
        ));
    }

    #[test]
    fn parse_rejects_invalid_mark() {
        let text = format!("s-{}x", ".".repeat(RECORD_SLOTS - 1));
        assert!(matches!(
            EncodedRecord::parse(&text),
            Err(SamplerError::MalformedRecord(_))
        ));
    }

    #[test]
    fn parse_rejects_multibyte_marks() {
        let text = format!("s-{}é", ".".repeat(RECORD_SLOTS - 1));
        assert!(EncodedRecord::parse(&text).is_err());
    }
}
