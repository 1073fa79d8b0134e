//! Quiz sampling and scoring
//!
//! Builds randomized quizzes from a loaded sample and turns the answers into a
//! vocabulary-size estimate plus an encoded record.

mod engine;
pub mod evaluator;
pub mod quiz;

#[cfg(test)]
pub(crate) mod fixtures;

pub use engine::{Location, Sampler};
pub use evaluator::{Evaluation, evaluate};
pub use quiz::{Quiz, generate_quiz};
