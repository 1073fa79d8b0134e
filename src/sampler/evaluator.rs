//! Quiz evaluation
//!
//! Resolves each answered word back to its sample point, counts recognized
//! words per band and extrapolates each band's count to the band's size:
//!
//! ```text
//! estimate(band) = size(band) * yes(band) / 40      (integer division)
//! score          = estimate(high) + estimate(medium) + estimate(rare)
//! ```

use super::Sampler;
use crate::core::{Answer, Band, EncodedRecord, Mark, RECORD_SLOTS};
use crate::error::{Result, SamplerError};
use tracing::debug;

/// Outcome of evaluating one quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Estimated vocabulary size
    pub score: u32,
    /// Per-band estimates (high, medium, rare)
    pub estimates: [u32; 3],
    /// Recognized words per band (high, medium, rare)
    pub yes_counts: [u32; 3],
    /// Encoded answers for storage and later analysis
    pub record: EncodedRecord,
}

impl Evaluation {
    #[must_use]
    pub const fn estimate(&self, band: Band) -> u32 {
        self.estimates[band.index()]
    }

    #[must_use]
    pub const fn yes_count(&self, band: Band) -> u32 {
        self.yes_counts[band.index()]
    }
}

/// Evaluate `(word, "yes"|"no")` answers against a sample
///
/// Answers may cover any subset of the presented words; unanswered points
/// count as not recognized and stay unset in the record.
///
/// # Errors
///
/// - `UnknownWord` if a word is not in the sample
/// - `InvalidAnswerValue` if a value is neither `"yes"` nor `"no"`
///
/// # Examples
/// ```
/// use vocab_sampler::core::BandSizes;
/// use vocab_sampler::sampler::evaluate;
/// use vocab_sampler::wordlists::load_embedded;
///
/// let sampler = load_embedded(BandSizes::default()).unwrap();
/// let quiz = sampler.quiz_with_seed(9);
/// let answers: Vec<_> = quiz.words().map(|w| (w, "yes")).collect();
///
/// let evaluation = evaluate(&sampler, answers).unwrap();
/// assert_eq!(evaluation.score, 9000 + 18000 + 27885);
/// ```
pub fn evaluate<I, W, V>(sampler: &Sampler, answers: I) -> Result<Evaluation>
where
    I: IntoIterator<Item = (W, V)>,
    W: AsRef<str>,
    V: AsRef<str>,
{
    let mut record = EncodedRecord::new(sampler.sample_name());
    let mut yes_counts = [0u32; 3];
    let mut answered = 0usize;

    for (word, value) in answers {
        let (word, value) = (word.as_ref(), value.as_ref());

        let location = sampler
            .locate(word)
            .ok_or_else(|| SamplerError::UnknownWord(word.to_string()))?;
        let answer = Answer::parse(value).ok_or_else(|| SamplerError::InvalidAnswerValue {
            word: word.to_string(),
            value: value.to_string(),
        })?;

        if answer.is_yes() {
            yes_counts[location.band.index()] += 1;
        }
        record.set(location.band, location.index, Mark::new(location.slot, answer));
        answered += 1;
    }

    let estimates = Band::ALL.map(|band| sampler.range(band).estimate(yes_counts[band.index()]));
    // Each estimate is at most its band size, and the sizes fit a u32
    let score = estimates.iter().fold(0u32, |sum, &e| sum.saturating_add(e));

    if answered < RECORD_SLOTS {
        debug!(answered, "partial answer set evaluated");
    }
    debug!(score, ?yes_counts, ?estimates, "quiz evaluated");

    Ok(Evaluation {
        score,
        estimates,
        yes_counts,
        record,
    })
}
