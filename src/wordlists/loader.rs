//! Dictionary sample loading
//!
//! Parses a ranked word-triplet stream into the three frequency ranges of a
//! [`Sampler`]. Each non-empty line is `rank<TAB>word<TAB>slot`, with slot one
//! of `a`, `b`, `c`. The three records of a rank appear together, in any
//! order; a change of rank moves to the next sample point, and every 40 points
//! the next frequency band begins.

use super::{EMBEDDED_SAMPLE, EMBEDDED_SAMPLE_NAME};
use crate::core::{Band, BandSizes, FrequencyRange, POINTS_PER_RANGE, SamplePoint, Slot};
use crate::error::{Result, SamplerError};
use crate::sampler::Sampler;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use tracing::{debug, info};

/// Position of the next sample point: band 0..2, point 0..39
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PointCursor {
    band: usize,
    index: usize,
}

impl PointCursor {
    const START: Self = Self { band: 0, index: 0 };

    /// Step to the next point, rolling over into the next band after 40
    ///
    /// Returns `None` when the step would leave the third band.
    const fn next(self) -> Option<Self> {
        if self.index + 1 < POINTS_PER_RANGE {
            Some(Self {
                band: self.band,
                index: self.index + 1,
            })
        } else if self.band + 1 < Band::ALL.len() {
            Some(Self {
                band: self.band + 1,
                index: 0,
            })
        } else {
            None
        }
    }
}

/// Slots collected so far for the current rank
#[derive(Debug, Default)]
struct PendingTriplet {
    rank: u32,
    words: [Option<String>; 3],
    complete: bool,
}

impl PendingTriplet {
    fn reset(&mut self, rank: u32) {
        *self = Self {
            rank,
            ..Self::default()
        };
    }

    fn is_partial(&self) -> bool {
        !self.complete && self.words.iter().any(Option::is_some)
    }

    /// Take the three words once all slots are filled
    fn take_if_full(&mut self) -> Option<[String; 3]> {
        if self.words.iter().all(Option::is_some) {
            let [a, b, c] = std::mem::take(&mut self.words);
            self.complete = true;
            Some([a?, b?, c?])
        } else {
            None
        }
    }
}

/// Incremental loader for a dictionary sample
///
/// Feed lines with [`DictionaryLoader::feed`], then call
/// [`DictionaryLoader::finish`]. Most callers want [`load`] instead.
#[derive(Debug)]
pub struct DictionaryLoader {
    ranges: [FrequencyRange; 3],
    cursor: Option<PointCursor>,
    pending: PendingTriplet,
    seen: FxHashSet<String>,
}

impl DictionaryLoader {
    /// Create a loader whose ranges represent the given band sizes
    #[must_use]
    pub fn new(sizes: BandSizes) -> Self {
        Self {
            ranges: Band::ALL.map(|band| FrequencyRange::new(band, sizes.get(band))),
            cursor: None,
            pending: PendingTriplet::default(),
            seen: FxHashSet::default(),
        }
    }

    /// Process one line of input (`line_no` is 1-based, used in errors)
    ///
    /// # Errors
    ///
    /// Returns `MalformedData`, `IncompleteTriplet`, `LoaderOverflow` or
    /// `DuplicateWord` as described on [`load`].
    pub fn feed(&mut self, line_no: usize, line: &str) -> Result<()> {
        let mut line = line.trim_end_matches(['\r', '\n']);
        if line_no == 1 {
            line = line.strip_prefix('\u{feff}').unwrap_or(line);
        }
        if line.trim().is_empty() {
            return Ok(());
        }

        let malformed = |reason: String| SamplerError::MalformedData {
            line: line_no,
            reason,
        };

        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        let &[rank, word, slot] = fields.as_slice() else {
            return Err(malformed(format!(
                "expected 3 tab-separated fields, found {}",
                fields.len()
            )));
        };

        let rank: u32 = rank
            .parse()
            .map_err(|_| malformed(format!("rank is not an integer: '{rank}'")))?;
        let slot = Slot::from_letter(slot)
            .ok_or_else(|| malformed(format!("slot must be a, b or c, found '{slot}'")))?;
        if word.is_empty() {
            return Err(malformed("empty word".to_string()));
        }

        if self.cursor.is_none() || self.pending.rank != rank {
            self.begin_rank(line_no, rank)?;
        } else if self.pending.complete {
            return Err(malformed(format!("more than three records for rank {rank}")));
        }

        if self.pending.words[slot.index()].is_some() {
            return Err(malformed(format!("slot {slot} repeated for rank {rank}")));
        }
        if !self.seen.insert(word.to_string()) {
            return Err(SamplerError::DuplicateWord(word.to_string()));
        }
        self.pending.words[slot.index()] = Some(word.to_string());

        if let Some(words) = self.pending.take_if_full()
            && let Some(cursor) = self.cursor
        {
            let index = self.ranges[cursor.band].push(SamplePoint::new(rank, words));
            debug_assert_eq!(index, cursor.index);
        }

        Ok(())
    }

    /// Advance the point cursor for a new rank value
    fn begin_rank(&mut self, line_no: usize, rank: u32) -> Result<()> {
        if let Some(cursor) = self.cursor {
            if rank < self.pending.rank {
                return Err(SamplerError::MalformedData {
                    line: line_no,
                    reason: format!("rank {rank} follows higher rank {}", self.pending.rank),
                });
            }
            if !self.pending.complete {
                return Err(SamplerError::IncompleteTriplet {
                    rank: self.pending.rank,
                });
            }

            let next = cursor
                .next()
                .ok_or(SamplerError::LoaderOverflow { line: line_no })?;
            if next.band != cursor.band {
                debug!(
                    band = %Band::ALL[cursor.band],
                    last_rank = self.pending.rank,
                    "range filled"
                );
            }
            self.cursor = Some(next);
        } else {
            self.cursor = Some(PointCursor::START);
        }

        self.pending.reset(rank);
        Ok(())
    }

    /// Validate that every range is full and build the sampler
    ///
    /// # Errors
    ///
    /// Returns `IncompleteTriplet` if the last rank is missing a slot, or
    /// `IncompleteSample` if fewer than 120 points were read, or `SizeOverflow`
    /// if the band sizes do not fit a `u32` score.
    pub fn finish(self, sample_name: impl Into<String>) -> Result<Sampler> {
        if self.pending.is_partial() {
            return Err(SamplerError::IncompleteTriplet {
                rank: self.pending.rank,
            });
        }

        if let Some(partial) = self.ranges.iter().position(|r| !r.is_complete()) {
            return Err(SamplerError::IncompleteSample {
                ranges: partial,
                points: self.ranges[partial].points().len(),
            });
        }

        let sizes = BandSizes(self.ranges.each_ref().map(FrequencyRange::size));
        if sizes.total().is_none() {
            return Err(SamplerError::SizeOverflow { sizes: sizes.0 });
        }

        Ok(Sampler::new(sample_name, self.ranges))
    }
}

/// Load a sampler from a line-oriented reader
///
/// # Errors
///
/// - `MalformedData`: a line lacks fields, has a non-integer rank, an unknown
///   slot, a repeated slot, or a rank lower than the previous one
/// - `IncompleteTriplet`: a rank ends before slots a, b and c are all present
/// - `LoaderOverflow`: more than 120 distinct ranks
/// - `IncompleteSample`: fewer than 120 distinct ranks
/// - `DuplicateWord`: a word appears twice anywhere in the sample
/// - `SizeOverflow`: the band sizes add up to more than `u32::MAX`
/// - `Io`: the reader failed
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use vocab_sampler::core::BandSizes;
/// use vocab_sampler::wordlists::load;
///
/// let result = load(Cursor::new("1\tcat\ta\n1\tdog\tb\n"), "tiny", BandSizes::default());
/// assert!(result.is_err());
/// ```
pub fn load<R: BufRead>(
    reader: R,
    sample_name: impl Into<String>,
    sizes: BandSizes,
) -> Result<Sampler> {
    let sample_name = sample_name.into();
    info!(sample = %sample_name, "quiz sampler initializing");

    let mut loader = DictionaryLoader::new(sizes);
    for (i, line) in reader.lines().enumerate() {
        loader.feed(i + 1, &line?)?;
    }
    let sampler = loader.finish(sample_name)?;

    info!(sample = %sampler.sample_name(), "quiz sampler initialized");
    Ok(sampler)
}

/// Load a sampler from a file; the sample name is the file name without extension
///
/// # Errors
///
/// Returns `SamplerError::Io` if the file cannot be opened or read, or any
/// parse error described on [`load`].
///
/// # Examples
/// ```no_run
/// use vocab_sampler::core::BandSizes;
/// use vocab_sampler::wordlists::load_from_file;
///
/// let sampler = load_from_file("data/sample1.tsv", BandSizes::default()).unwrap();
/// assert_eq!(sampler.sample_name(), "sample1");
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, sizes: BandSizes) -> Result<Sampler> {
    let path = path.as_ref();
    let sample_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file = File::open(path)?;
    load(BufReader::new(file), sample_name, sizes)
}

/// Load the sample embedded at build time
///
/// # Errors
///
/// Only fails if the embedded sample itself is malformed.
pub fn load_embedded(sizes: BandSizes) -> Result<Sampler> {
    load(Cursor::new(EMBEDDED_SAMPLE), EMBEDDED_SAMPLE_NAME, sizes)
}
