//! Synthetic samples for tests

use crate::core::{BandSizes, POINTS_PER_RANGE};
use crate::sampler::Sampler;
use crate::wordlists::load;
use std::io::Cursor;

/// 360 dictionary lines: words named `<band><index><slot>`, e.g. `med07b`
pub fn synthetic_lines() -> Vec<String> {
    let mut lines = Vec::with_capacity(360);
    for (band, prefix) in ["high", "med", "rare"].iter().enumerate() {
        for index in 0..POINTS_PER_RANGE {
            let rank = (band * POINTS_PER_RANGE + index + 1) * 10;
            for slot in ["a", "b", "c"] {
                lines.push(format!("{rank}\t{prefix}{index:02}{slot}\t{slot}"));
            }
        }
    }
    lines
}

pub fn synthetic_tsv() -> String {
    synthetic_lines().join("\n")
}

pub fn synthetic_sampler() -> Sampler {
    load(Cursor::new(synthetic_tsv()), "synthetic", BandSizes::default())
        .expect("synthetic sample is valid")
}
