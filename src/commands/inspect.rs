//! Sample inspection command
//!
//! Summarizes a loaded sample: band sizes, rank spans and word counts.

use crate::core::Band;
use crate::sampler::Sampler;

/// Summary of one frequency band
#[derive(Debug, Clone)]
pub struct BandSummary {
    pub band: Band,
    pub size: u32,
    pub points: usize,
    pub words: usize,
    pub rank_span: Option<(u32, u32)>,
}

/// Summary of a loaded sample
#[derive(Debug, Clone)]
pub struct SampleSummary {
    pub sample_name: String,
    pub bands: Vec<BandSummary>,
    pub max_score: u32,
}

/// Summarize a sample
#[must_use]
pub fn summarize(sampler: &Sampler) -> SampleSummary {
    let bands = sampler
        .ranges()
        .iter()
        .map(|range| BandSummary {
            band: range.band(),
            size: range.size(),
            points: range.points().len(),
            words: range.word_count(),
            rank_span: range.rank_span(),
        })
        .collect();

    SampleSummary {
        sample_name: sampler.sample_name().to_string(),
        bands,
        max_score: sampler.max_score(),
    }
}
