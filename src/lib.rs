//! Vocabulary Sampler
//!
//! Estimates a person's vocabulary size from yes/no recognition answers on a
//! randomized sample drawn from a ranked frequency dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use vocab_sampler::core::BandSizes;
//! use vocab_sampler::wordlists::load_embedded;
//!
//! // Load the bundled sample once; it is read-only afterwards
//! let sampler = load_embedded(BandSizes::default()).unwrap();
//!
//! // Two presentation batches: 40 high-frequency words, then 80 more
//! let quiz = sampler.quiz(&mut rand::rng());
//!
//! // Score the answers
//! let answers: Vec<_> = quiz.words().map(|w| (w, "no")).collect();
//! let evaluation = sampler.evaluate(answers).unwrap();
//! println!("{} words ({})", evaluation.score, evaluation.record);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Quiz generation and evaluation
pub mod sampler;

// Dictionary samples
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, SamplerError};
