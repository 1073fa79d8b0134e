//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_evaluation, print_quiz, print_replay_result, print_sample_summary,
    print_simulation_result,
};
