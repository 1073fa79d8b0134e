//! Dictionary samples for vocabulary quizzes
//!
//! Provides the loader for ranked word-triplet files and a sample embedded
//! into the binary for zero-setup use.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED_RECORD_COUNT, EMBEDDED_SAMPLE, EMBEDDED_SAMPLE_NAME};
pub use loader::{DictionaryLoader, load, load_embedded, load_from_file};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{POINTS_PER_RANGE, RANGE_COUNT};

    #[test]
    fn embedded_record_count() {
        // Three words per point, 40 points per range, three ranges
        assert_eq!(EMBEDDED_RECORD_COUNT, 3 * POINTS_PER_RANGE * RANGE_COUNT);
    }

    #[test]
    fn embedded_lines_are_well_formed() {
        for line in EMBEDDED_SAMPLE.lines().filter(|l| !l.is_empty()) {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 3, "Line '{line}' does not have 3 fields");
            assert!(fields[0].parse::<u32>().is_ok(), "Bad rank in '{line}'");
            assert!(
                fields[1].chars().all(|c| c.is_ascii_lowercase()),
                "Word in '{line}' contains non-lowercase chars"
            );
            assert!(matches!(fields[2], "a" | "b" | "c"), "Bad slot in '{line}'");
        }
    }

    #[test]
    fn embedded_sample_name() {
        assert_eq!(EMBEDDED_SAMPLE_NAME, "sample1");
    }
}
