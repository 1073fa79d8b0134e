//! Frequency bands and the sample points they hold
//!
//! A sample is split into three contiguous frequency tiers. Each tier holds
//! 40 sample points and knows how many dictionary words it stands for, which
//! is what turns a recognition rate into a vocabulary estimate.

use super::{POINTS_PER_RANGE, SamplePoint};
use rustc_hash::FxHashMap;
use std::fmt;

/// Frequency tier, in increasing-rarity order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Band {
    High,
    Medium,
    Rare,
}

impl Band {
    /// All bands in resolution (and record) order
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Rare];

    /// Band position (0-2)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Rare => 2,
        }
    }

    /// Band at a position, if any
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::High),
            1 => Some(Self::Medium),
            2 => Some(Self::Rare),
            _ => None,
        }
    }

    /// Offset of the band's first slot in an encoded record (0, 40 or 80)
    #[inline]
    #[must_use]
    pub const fn offset(self) -> usize {
        self.index() * POINTS_PER_RANGE
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high-frequency",
            Self::Medium => "medium-frequency",
            Self::Rare => "rare",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of dictionary words each band represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandSizes(pub [u32; 3]);

impl BandSizes {
    /// Size of a single band
    #[inline]
    #[must_use]
    pub const fn get(self, band: Band) -> u32 {
        self.0[band.index()]
    }

    /// Sum of all band sizes (the score of an all-"yes" quiz)
    ///
    /// `None` if the sum does not fit a `u32`.
    #[must_use]
    pub const fn total(self) -> Option<u32> {
        match self.0[0].checked_add(self.0[1]) {
            Some(sum) => sum.checked_add(self.0[2]),
            None => None,
        }
    }
}

impl Default for BandSizes {
    /// 9k high-frequency, 18k medium-frequency and 27k+ rare words
    fn default() -> Self {
        Self([9000, 18000, 27885])
    }
}

/// Sample points in one band of the dictionary
#[derive(Debug, Clone)]
pub struct FrequencyRange {
    band: Band,
    size: u32,
    points: Vec<SamplePoint>,
    word_index: FxHashMap<String, usize>,
}

impl FrequencyRange {
    /// Create an empty range for `band` representing `size` dictionary words
    #[must_use]
    pub fn new(band: Band, size: u32) -> Self {
        Self {
            band,
            size,
            points: Vec::with_capacity(POINTS_PER_RANGE),
            word_index: FxHashMap::default(),
        }
    }

    /// Append a point at the next index and register its words
    ///
    /// Returns the point's index within the range.
    pub(crate) fn push(&mut self, point: SamplePoint) -> usize {
        let index = self.points.len();
        for word in point.words() {
            self.word_index.insert(word.clone(), index);
        }
        self.points.push(point);
        index
    }

    #[inline]
    #[must_use]
    pub const fn band(&self) -> Band {
        self.band
    }

    /// Number of dictionary words this range stands for
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    #[inline]
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&SamplePoint> {
        self.points.get(index)
    }

    /// Position of the point holding `word`
    #[inline]
    #[must_use]
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.word_index.get(word).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.word_index.contains_key(word)
    }

    /// Number of distinct words registered in this range
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_index.len()
    }

    /// True once all 40 points are present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.points.len() == POINTS_PER_RANGE
    }

    /// Extrapolate a count of recognized sample words to the whole band
    ///
    /// Integer (floor) division: `size * yes_count / points`.
    #[must_use]
    pub fn estimate(&self, yes_count: u32) -> u32 {
        if self.points.is_empty() {
            return 0;
        }
        let estimate = u64::from(self.size) * u64::from(yes_count) / self.points.len() as u64;
        u32::try_from(estimate).unwrap_or(u32::MAX)
    }

    /// Lowest and highest rank in this range
    #[must_use]
    pub fn rank_span(&self) -> Option<(u32, u32)> {
        let first = self.points.first()?.rank();
        let last = self.points.last()?.rank();
        Some((first, last))
    }
}
