//! Core domain types for vocabulary sampling
//!
//! This module contains the fundamental domain types: sample points, frequency
//! ranges, answers and the encoded answer record. Everything here is pure and
//! immutable once built.

mod answer;
mod band;
mod point;
mod record;

pub use answer::Answer;
pub use band::{Band, BandSizes, FrequencyRange};
pub use point::{SamplePoint, Slot};
pub use record::{EncodedRecord, Mark, RECORD_SEPARATOR, UNSET_MARK};

/// Number of sample points in every frequency range
pub const POINTS_PER_RANGE: usize = 40;

/// Number of frequency ranges in a sample
pub const RANGE_COUNT: usize = 3;

/// Number of slots in an encoded record (one per sample point)
pub const RECORD_SLOTS: usize = POINTS_PER_RANGE * RANGE_COUNT;
