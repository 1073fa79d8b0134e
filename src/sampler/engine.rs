//! Main sampler interface

use super::{Evaluation, Quiz, evaluate, generate_quiz};
use crate::core::{Answer, Band, BandSizes, EncodedRecord, FrequencyRange, Mark, Slot};
use crate::error::{Result, SamplerError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where a word sits in the sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub band: Band,
    /// Point index within the band (0-39)
    pub index: usize,
    pub slot: Slot,
}

impl Location {
    /// Position of this word's point in an encoded record (0-119)
    #[must_use]
    pub const fn record_position(self) -> usize {
        self.band.offset() + self.index
    }
}

/// Loaded sample: three frequency ranges plus the sample's name
///
/// Built once by the loader and read-only afterwards, so a single instance
/// can be shared across threads for quiz generation and evaluation.
#[derive(Debug, Clone)]
pub struct Sampler {
    sample_name: String,
    ranges: [FrequencyRange; 3],
}

impl Sampler {
    pub(crate) fn new(sample_name: impl Into<String>, ranges: [FrequencyRange; 3]) -> Self {
        Self {
            sample_name: sample_name.into(),
            ranges,
        }
    }

    /// Name of the sample, returned with every evaluation
    #[inline]
    #[must_use]
    pub fn sample_name(&self) -> &str {
        &self.sample_name
    }

    /// Ranges in high, medium, rare order
    #[inline]
    #[must_use]
    pub const fn ranges(&self) -> &[FrequencyRange; 3] {
        &self.ranges
    }

    #[inline]
    #[must_use]
    pub const fn range(&self, band: Band) -> &FrequencyRange {
        &self.ranges[band.index()]
    }

    #[must_use]
    pub fn sizes(&self) -> BandSizes {
        BandSizes(self.ranges.each_ref().map(FrequencyRange::size))
    }

    /// Score of a quiz with every word recognized
    #[must_use]
    pub fn max_score(&self) -> u32 {
        // Checked when the sampler is loaded
        self.sizes().total().unwrap_or(u32::MAX)
    }

    /// Resolve a word to its band, point and slot
    ///
    /// Bands are searched high, medium, rare.
    #[must_use]
    pub fn locate(&self, word: &str) -> Option<Location> {
        self.ranges.iter().find_map(|range| {
            let index = range.index_of(word)?;
            let slot = range.point(index)?.slot_of(word)?;
            Some(Location {
                band: range.band(),
                index,
                slot,
            })
        })
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.ranges.iter().any(|range| range.contains(word))
    }

    /// Word at a band, point and slot
    #[must_use]
    pub fn word_at(&self, band: Band, index: usize, slot: Slot) -> Option<&str> {
        self.range(band).point(index).map(|p| p.word(slot))
    }

    /// Generate a quiz with the given random source
    pub fn quiz<R: Rng + ?Sized>(&self, rng: &mut R) -> Quiz<'_> {
        generate_quiz(self, rng)
    }

    /// Generate a reproducible quiz from a seed
    ///
    /// # Examples
    /// ```
    /// use vocab_sampler::core::BandSizes;
    /// use vocab_sampler::wordlists::load_embedded;
    ///
    /// let sampler = load_embedded(BandSizes::default()).unwrap();
    /// let quiz = sampler.quiz_with_seed(42);
    /// assert_eq!(quiz.first.len(), 40);
    /// assert_eq!(quiz.second.len(), 80);
    /// assert_eq!(quiz, sampler.quiz_with_seed(42));
    /// ```
    #[must_use]
    pub fn quiz_with_seed(&self, seed: u64) -> Quiz<'_> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_quiz(self, &mut rng)
    }

    /// Score `(word, "yes"|"no")` answers
    ///
    /// # Errors
    ///
    /// See [`evaluate`].
    pub fn evaluate<I, W, V>(&self, answers: I) -> Result<Evaluation>
    where
        I: IntoIterator<Item = (W, V)>,
        W: AsRef<str>,
        V: AsRef<str>,
    {
        evaluate(self, answers)
    }

    /// Reconstruct the answers a record was produced from
    ///
    /// Answers come back in record order; unset positions are skipped.
    ///
    /// # Errors
    ///
    /// Returns `SampleMismatch` if the record names a different sample.
    pub fn replay(&self, record: &EncodedRecord) -> Result<Vec<(&str, Answer)>> {
        if record.sample_name() != self.sample_name {
            return Err(SamplerError::SampleMismatch {
                expected: self.sample_name.clone(),
                found: record.sample_name().to_string(),
            });
        }

        let mut answers = Vec::with_capacity(record.answered());
        for range in &self.ranges {
            let marks = record.band_marks(range.band());
            for (point, mark) in range.points().iter().zip(marks) {
                if let Mark::Answered { slot, answer } = *mark {
                    answers.push((point.word(slot), answer));
                }
            }
        }
        Ok(answers)
    }

    /// Re-score a stored record against this sample
    ///
    /// # Errors
    ///
    /// Returns `SampleMismatch` if the record names a different sample.
    pub fn score_record(&self, record: &EncodedRecord) -> Result<Evaluation> {
        let answers = self.replay(record)?;
        self.evaluate(answers.into_iter().map(|(word, answer)| (word, answer.as_str())))
    }
}
