//! Error types for loading samples and evaluating answers.
//!
//! Loader errors are fatal: no `Sampler` can be built and no quiz can be
//! served. Evaluation errors are caused by caller input and are reported
//! back as a rejected request.

use thiserror::Error;

/// Errors raised by the dictionary loader, the evaluator and the record codec.
#[derive(Debug, Error)]
pub enum SamplerError {
    /// A dictionary line could not be parsed.
    #[error("malformed dictionary data at line {line}: {reason}")]
    MalformedData { line: usize, reason: String },

    /// A rank ended before all three slots (a, b, c) were filled.
    #[error("incomplete triplet for rank {rank}: slots a, b and c are required")]
    IncompleteTriplet { rank: u32 },

    /// More distinct ranks than three ranges can hold.
    #[error("dictionary overflows the third range at line {line}")]
    LoaderOverflow { line: usize },

    /// The dictionary ended before all ranges were filled.
    #[error("dictionary ended after {ranges} full range(s) and {points} extra point(s)")]
    IncompleteSample { ranges: usize, points: usize },

    /// The same word occurs in more than one slot of the sample.
    #[error("word appears more than once in the sample: {0}")]
    DuplicateWord(String),

    /// Band sizes whose sum, the maximum score, does not fit a `u32`.
    #[error("band sizes {sizes:?} add up to more than u32::MAX")]
    SizeOverflow { sizes: [u32; 3] },

    /// An answered word is not part of the sample.
    #[error("word not in sample: {0}")]
    UnknownWord(String),

    /// An answer value other than "yes" or "no".
    #[error("invalid quiz value for word '{word}': {value}")]
    InvalidAnswerValue { word: String, value: String },

    /// An encoded record could not be decoded.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// A record was produced from a different sample.
    #[error("record belongs to sample '{found}', loaded sample is '{expected}'")]
    SampleMismatch { expected: String, found: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SamplerError {
    /// Returns `true` for errors that prevent a `Sampler` from being built.
    #[must_use]
    pub const fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedData { .. }
                | Self::IncompleteTriplet { .. }
                | Self::LoaderOverflow { .. }
                | Self::IncompleteSample { .. }
                | Self::DuplicateWord(_)
                | Self::SizeOverflow { .. }
                | Self::Io(_)
        )
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, SamplerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_errors_are_classified() {
        assert!(SamplerError::LoaderOverflow { line: 361 }.is_load_error());
        assert!(SamplerError::IncompleteTriplet { rank: 7 }.is_load_error());
        assert!(!SamplerError::UnknownWord("zyzzyva".into()).is_load_error());
        assert!(
            !SamplerError::InvalidAnswerValue {
                word: "cat".into(),
                value: "maybe".into()
            }
            .is_load_error()
        );
    }

    #[test]
    fn messages_name_the_input() {
        let err = SamplerError::UnknownWord("zyzzyva".into());
        assert_eq!(err.to_string(), "word not in sample: zyzzyva");

        let err = SamplerError::InvalidAnswerValue {
            word: "cat".into(),
            value: "maybe".into(),
        };
        assert_eq!(err.to_string(), "invalid quiz value for word 'cat': maybe");
    }
}
