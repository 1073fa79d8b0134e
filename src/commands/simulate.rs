//! Estimator simulation command
//!
//! Runs many simulated quiz-takers who recognize each band's words with a fixed
//! probability and compares the resulting scores with the analytic expectation
//! `Σ size(band) · p(band)`. Useful for checking the spread of the estimator.

use crate::core::{Answer, Band, POINTS_PER_RANGE};
use crate::sampler::Sampler;
use anyhow::{Result, ensure};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Number of buckets in the score histogram
pub const HISTOGRAM_BUCKETS: usize = 10;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of simulated quiz-takers
    pub takers: usize,
    /// Probability of recognizing a word, per band (high, medium, rare)
    pub recognition: [f64; 3],
    /// Base seed; taker `i` uses `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            takers: 1000,
            recognition: [0.95, 0.6, 0.2],
            seed: 0,
            show_progress: true,
        }
    }
}

/// Result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub takers: usize,
    pub expected_score: f64,
    pub mean_score: f64,
    pub std_dev: f64,
    pub min_score: u32,
    pub max_score: u32,
    /// Score counts in equal-width buckets over `0..=sample max`
    pub histogram: [usize; HISTOGRAM_BUCKETS],
    pub duration: Duration,
}

impl SimulationResult {
    /// Mean score minus the analytic expectation
    #[must_use]
    pub fn bias(&self) -> f64 {
        self.mean_score - self.expected_score
    }
}

/// Run the simulation in parallel
///
/// # Errors
///
/// Returns an error if `takers` is zero, a recognition probability is outside
/// `0.0..=1.0`, or evaluation of a simulated quiz fails.
pub fn run_simulation(sampler: &Sampler, config: &SimulationConfig) -> Result<SimulationResult> {
    ensure!(config.takers > 0, "at least one quiz-taker is required");
    for (band, p) in Band::ALL.iter().zip(config.recognition) {
        ensure!(
            (0.0..=1.0).contains(&p),
            "recognition probability for {band} band must be within 0..=1, got {p}"
        );
    }

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.takers as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let scores = (0..config.takers)
        .into_par_iter()
        .map(|i| -> Result<u32> {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let score = simulate_taker(sampler, config.recognition, &mut rng)?;
            pb.inc(1);
            Ok(score)
        })
        .collect::<Result<Vec<u32>>>()?;
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let sizes = sampler.sizes();
    let expected_score: f64 = Band::ALL
        .iter()
        .map(|&band| f64::from(sizes.get(band)) * config.recognition[band.index()])
        .sum();

    Ok(summarize_scores(
        &scores,
        expected_score,
        sampler.max_score(),
        duration,
    ))
}

/// Take one quiz, answering each word by chance
fn simulate_taker<R: Rng + ?Sized>(
    sampler: &Sampler,
    recognition: [f64; 3],
    rng: &mut R,
) -> crate::Result<u32> {
    let quiz = sampler.quiz(rng);

    let answers: Vec<(&str, &str)> = quiz
        .words()
        .enumerate()
        .map(|(i, word)| {
            // First batch is the high band; the second holds medium then rare
            let p = recognition[i / POINTS_PER_RANGE];
            (word, Answer::from(rng.random_bool(p)).as_str())
        })
        .collect();

    Ok(sampler.evaluate(answers)?.score)
}

fn summarize_scores(
    scores: &[u32],
    expected_score: f64,
    sample_max: u32,
    duration: Duration,
) -> SimulationResult {
    let n = scores.len() as f64;
    let mean_score = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / n;
    let variance = scores
        .iter()
        .map(|&s| (f64::from(s) - mean_score).powi(2))
        .sum::<f64>()
        / n;

    let mut histogram = [0usize; HISTOGRAM_BUCKETS];
    let width = f64::from(sample_max.max(1)) / HISTOGRAM_BUCKETS as f64;
    for &score in scores {
        let bucket = ((f64::from(score) / width) as usize).min(HISTOGRAM_BUCKETS - 1);
        histogram[bucket] += 1;
    }

    SimulationResult {
        takers: scores.len(),
        expected_score,
        mean_score,
        std_dev: variance.sqrt(),
        min_score: scores.iter().copied().min().unwrap_or(0),
        max_score: scores.iter().copied().max().unwrap_or(0),
        histogram,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::fixtures::synthetic_sampler;

    fn config(takers: usize, recognition: [f64; 3]) -> SimulationConfig {
        SimulationConfig {
            takers,
            recognition,
            seed: 17,
            show_progress: false,
        }
    }

    #[test]
    fn certain_recognition_scores_maximum() {
        let sampler = synthetic_sampler();
        let result = run_simulation(&sampler, &config(20, [1.0, 1.0, 1.0])).unwrap();

        assert_eq!(result.takers, 20);
        assert_eq!(result.min_score, 54885);
        assert_eq!(result.max_score, 54885);
        assert!(result.std_dev.abs() < f64::EPSILON);
        assert_eq!(result.histogram[HISTOGRAM_BUCKETS - 1], 20);
    }

    #[test]
    fn no_recognition_scores_zero() {
        let sampler = synthetic_sampler();
        let result = run_simulation(&sampler, &config(10, [0.0, 0.0, 0.0])).unwrap();

        assert_eq!(result.max_score, 0);
        assert!(result.mean_score.abs() < f64::EPSILON);
        assert_eq!(result.histogram[0], 10);
    }

    #[test]
    fn mean_tracks_expectation() {
        let sampler = synthetic_sampler();
        let result = run_simulation(&sampler, &config(400, [0.9, 0.5, 0.1])).unwrap();

        // 9000*0.9 + 18000*0.5 + 27885*0.1
        assert!((result.expected_score - 19888.5).abs() < 1e-6);
        // Floor division costs at most a few words per band; sampling noise dominates
        assert!(result.bias().abs() < 600.0, "bias {}", result.bias());
        assert!(result.min_score <= result.max_score);
    }

    #[test]
    fn simulation_is_reproducible() {
        let sampler = synthetic_sampler();
        let a = run_simulation(&sampler, &config(50, [0.7, 0.4, 0.1])).unwrap();
        let b = run_simulation(&sampler, &config(50, [0.7, 0.4, 0.1])).unwrap();
        assert_eq!(a.histogram, b.histogram);
        assert!((a.mean_score - b.mean_score).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_invalid_config() {
        let sampler = synthetic_sampler();
        assert!(run_simulation(&sampler, &config(0, [0.5, 0.5, 0.5])).is_err());
        assert!(run_simulation(&sampler, &config(5, [1.5, 0.5, 0.5])).is_err());
        assert!(run_simulation(&sampler, &config(5, [0.5, -0.1, 0.5])).is_err());
    }

    #[test]
    fn histogram_sums_to_takers() {
        let result = summarize_scores(&[0, 100, 54885, 27000], 0.0, 54885, Duration::ZERO);
        assert_eq!(result.histogram.iter().sum::<usize>(), 4);
        assert_eq!(result.histogram[0], 2);
        assert_eq!(result.histogram[4], 1);
        assert_eq!(result.histogram[9], 1);
    }
}
