//! Answer-file evaluation command
//!
//! Scores a file of `word<TAB>yes|no` lines.

use crate::sampler::{Evaluation, Sampler};
use anyhow::{Context, Result, bail};
use std::io::BufRead;

/// Read `(word, value)` pairs, one per line
///
/// Fields are separated by a single tab and trimmed, so words may contain
/// spaces. Blank lines and lines starting with `#` are skipped. Values are passed through unchecked; the
/// evaluator rejects anything other than `yes` / `no`.
///
/// # Errors
///
/// Returns an error if reading fails or a line does not have exactly two fields.
pub fn parse_answers<R: BufRead>(reader: R) -> Result<Vec<(String, String)>> {
    let mut answers = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read answer line {}", i + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split('\t').map(str::trim).collect();
        let &[word, value] = fields.as_slice() else {
            bail!(
                "answer line {} must be 'word<TAB>yes|no', got '{trimmed}'",
                i + 1
            );
        };
        answers.push((word.to_string(), value.to_string()));
    }

    Ok(answers)
}

/// Parse and score an answer stream
///
/// # Errors
///
/// Returns an error if the stream is malformed or the evaluator rejects an
/// answer (unknown word, invalid value).
pub fn evaluate_answers<R: BufRead>(sampler: &Sampler, reader: R) -> Result<Evaluation> {
    let answers = parse_answers(reader)?;
    let evaluation = sampler
        .evaluate(answers)
        .context("answer set rejected")?;
    Ok(evaluation)
}
