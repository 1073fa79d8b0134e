//! Record replay command
//!
//! Decodes a stored record, lists the answers it encodes and re-scores it.

use crate::core::{Answer, Band, EncodedRecord};
use crate::sampler::{Evaluation, Sampler};
use anyhow::{Context, Result};

/// Answers recovered from a record, grouped by band
#[derive(Debug)]
pub struct ReplayResult {
    pub record: EncodedRecord,
    pub answers: Vec<(Band, String, Answer)>,
    pub evaluation: Evaluation,
}

impl ReplayResult {
    /// Recognized words in a band
    pub fn known_words(&self, band: Band) -> impl Iterator<Item = &str> {
        self.answers
            .iter()
            .filter(move |(b, _, answer)| *b == band && answer.is_yes())
            .map(|(_, word, _)| word.as_str())
    }
}

/// Decode and re-score a record against `sampler`
///
/// # Errors
///
/// Returns an error if the record is malformed or was produced from another sample.
pub fn replay_record(sampler: &Sampler, text: &str) -> Result<ReplayResult> {
    let record = EncodedRecord::parse(text).context("could not decode record")?;

    let answers = sampler
        .replay(&record)?
        .into_iter()
        .filter_map(|(word, answer)| {
            let band = sampler.locate(word)?.band;
            Some((band, word.to_string(), answer))
        })
        .collect();

    let evaluation = sampler.score_record(&record)?;

    Ok(ReplayResult {
        record,
        answers,
        evaluation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SamplerError;
    use crate::sampler::fixtures::synthetic_sampler;

    #[test]
    fn replays_evaluated_record() {
        let sampler = synthetic_sampler();
        let evaluation = sampler
            .evaluate([("high01c", "yes"), ("med07a", "no"), ("rare11b", "yes")])
            .unwrap();

        let result = replay_record(&sampler, &evaluation.record.to_string()).unwrap();
        assert_eq!(result.evaluation, evaluation);
        assert_eq!(result.answers.len(), 3);
        assert_eq!(result.known_words(Band::High).collect::<Vec<_>>(), ["high01c"]);
        assert_eq!(result.known_words(Band::Medium).count(), 0);
        assert_eq!(result.known_words(Band::Rare).collect::<Vec<_>>(), ["rare11b"]);
        assert!(format!("{result:?}").contains("rare11b"));
    }

    #[test]
    fn rejects_record_from_other_sample() {
        let sampler = synthetic_sampler();
        let text = format!("sample9-{}", ".".repeat(120));
        let err = replay_record(&sampler, &text).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SamplerError>(),
            Some(SamplerError::SampleMismatch { .. })
        ));
    }

    #[test]
    fn rejects_garbage() {
        let sampler = synthetic_sampler();
        assert!(replay_record(&sampler, "not a record").is_err());
    }
}
