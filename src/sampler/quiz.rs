//! Randomized quiz generation
//!
//! One word is drawn per sample point, uniformly from its three slots. Each
//! range is shuffled on its own so presentation order reveals neither rank
//! nor band, then the ranges are split into two presentation batches.

use super::Sampler;
use crate::core::{Band, FrequencyRange, POINTS_PER_RANGE};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Words to present: 40 high-frequency words, then 80 medium and rare words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz<'a> {
    /// Shuffled high-frequency words
    pub first: Vec<&'a str>,
    /// Shuffled medium-frequency words followed by shuffled rare words
    pub second: Vec<&'a str>,
}

impl<'a> Quiz<'a> {
    /// All 120 words, first batch then second
    pub fn words(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.first.iter().chain(&self.second).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generate a quiz from `sampler` using the caller's random source
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use vocab_sampler::core::BandSizes;
/// use vocab_sampler::sampler::generate_quiz;
/// use vocab_sampler::wordlists::load_embedded;
///
/// let sampler = load_embedded(BandSizes::default()).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
/// let quiz = generate_quiz(&sampler, &mut rng);
/// assert_eq!(quiz.len(), 120);
/// ```
pub fn generate_quiz<'a, R: Rng + ?Sized>(sampler: &'a Sampler, rng: &mut R) -> Quiz<'a> {
    let [high, medium, rare] = sampler.ranges();

    let first = shuffled_draw(high, rng);
    let mut second = shuffled_draw(medium, rng);
    second.extend(shuffled_draw(rare, rng));

    debug_assert_eq!(first.len(), POINTS_PER_RANGE);
    debug_assert_eq!(second.len(), 2 * POINTS_PER_RANGE);
    debug_assert_eq!(high.band(), Band::High);

    Quiz { first, second }
}

/// One random slot per point, in shuffled order
fn shuffled_draw<'a, R: Rng + ?Sized>(range: &'a FrequencyRange, rng: &mut R) -> Vec<&'a str> {
    // Points always hold three words, so `choose` never comes back empty
    let mut words: Vec<&str> = range
        .points()
        .iter()
        .filter_map(|point| point.words().choose(rng).map(String::as_str))
        .collect();
    words.shuffle(rng);
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::fixtures::synthetic_sampler;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    /// Sorted point indices of the quiz words belonging to `band`
    fn point_indices(sampler: &Sampler, words: &[&str], band: Band) -> Vec<usize> {
        let mut indices: Vec<usize> = words
            .iter()
            .map(|w| sampler.locate(w).unwrap())
            .filter(|loc| loc.band == band)
            .map(|loc| loc.index)
            .collect();
        indices.sort_unstable();
        indices
    }

    #[test]
    fn batch_sizes() {
        let sampler = synthetic_sampler();
        let quiz = sampler.quiz_with_seed(3);
        assert_eq!(quiz.first.len(), 40);
        assert_eq!(quiz.second.len(), 80);
        assert_eq!(quiz.len(), 120);
        assert!(!quiz.is_empty());
    }

    #[test]
    fn first_batch_is_high_frequency() {
        let sampler = synthetic_sampler();
        let quiz = sampler.quiz_with_seed(11);
        for word in &quiz.first {
            assert_eq!(sampler.locate(word).unwrap().band, Band::High);
        }
        for word in &quiz.second[..40] {
            assert_eq!(sampler.locate(word).unwrap().band, Band::Medium);
        }
        for word in &quiz.second[40..] {
            assert_eq!(sampler.locate(word).unwrap().band, Band::Rare);
        }
    }

    #[test]
    fn different_seeds_give_different_quizzes() {
        let sampler = synthetic_sampler();
        assert_ne!(sampler.quiz_with_seed(1), sampler.quiz_with_seed(2));
    }

    #[test]
    fn all_slots_get_drawn() {
        let sampler = synthetic_sampler();
        let mut rng = StdRng::seed_from_u64(99);
        let mut slots = HashSet::new();
        for _ in 0..10 {
            let quiz = generate_quiz(&sampler, &mut rng);
            slots.extend(quiz.words().map(|w| sampler.locate(w).unwrap().slot));
        }
        assert_eq!(slots.len(), 3);
    }

    #[test]
    fn batches_are_shuffled() {
        // Synthetic ranks increase with point index; a shuffled batch should not
        let sampler = synthetic_sampler();
        let quiz = sampler.quiz_with_seed(8);
        let indices: Vec<usize> = quiz
            .first
            .iter()
            .map(|w| sampler.locate(w).unwrap().index)
            .collect();
        assert!(indices.windows(2).any(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn first_position_is_spread() {
        // Each of the 40 points should lead the batch at least once over many draws
        let sampler = synthetic_sampler();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut leaders = HashSet::new();
        for _ in 0..2000 {
            let quiz = generate_quiz(&sampler, &mut rng);
            leaders.insert(sampler.locate(quiz.first[0]).unwrap().index);
        }
        assert_eq!(leaders.len(), POINTS_PER_RANGE);
    }

    proptest! {
        #[test]
        fn one_word_per_point(seed in any::<u64>()) {
            let sampler = synthetic_sampler();
            let quiz = sampler.quiz_with_seed(seed);
            let all: Vec<&str> = quiz.words().collect();
            let expected: Vec<usize> = (0..POINTS_PER_RANGE).collect();
            for band in Band::ALL {
                prop_assert_eq!(point_indices(&sampler, &all, band), expected.clone());
            }
        }
    }
}
