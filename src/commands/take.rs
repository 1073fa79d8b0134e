//! Interactive quiz mode
//!
//! Text-based quiz on a terminal: shows both batches word by word and reads
//! y/n answers.

use crate::core::Answer;
use crate::sampler::{Evaluation, Quiz, Sampler};
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the interactive quiz
///
/// Returns `None` if the quiz-taker quits before the end.
///
/// # Errors
///
/// Returns an error on I/O failure, if input ends mid-quiz, or if evaluation
/// rejects the answers.
pub fn run_take<R: BufRead, W: Write>(
    sampler: &Sampler,
    quiz: &Quiz<'_>,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Evaluation>> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                  Vocabulary Size Quiz                        ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "For each word, answer whether you know what it means:")?;
    writeln!(output, "  - y / yes  if you know the word")?;
    writeln!(output, "  - n / no   if you don't")?;
    writeln!(output, "  - quit     to stop without a result\n")?;

    let mut answers: Vec<(&str, Answer)> = Vec::with_capacity(quiz.len());

    for (page, batch) in [&quiz.first, &quiz.second].into_iter().enumerate() {
        writeln!(output, "────────────────────────────────────────────────────────────")?;
        writeln!(output, "Page {} of 2: {} words", page + 1, batch.len())?;
        writeln!(output, "────────────────────────────────────────────────────────────")?;

        for (i, &word) in batch.iter().enumerate() {
            let prompt = format!("[{:>2}/{}] {}", i + 1, batch.len(), word.bold());
            match ask(&prompt, input, output)? {
                Some(answer) => answers.push((word, answer)),
                None => {
                    writeln!(output, "\n👋 Quiz abandoned.\n")?;
                    return Ok(None);
                }
            }
        }
    }

    let evaluation = sampler.evaluate(
        answers
            .into_iter()
            .map(|(word, answer)| (word, answer.as_str())),
    )?;
    Ok(Some(evaluation))
}

/// Prompt until a valid answer is given; `None` means quit
fn ask<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<Option<Answer>> {
    loop {
        let line = get_user_input(prompt, input, output)?;
        match line.to_lowercase().as_str() {
            "y" | "yes" => return Ok(Some(Answer::Yes)),
            "n" | "no" => return Ok(Some(Answer::No)),
            "q" | "quit" | "exit" => return Ok(None),
            _ => writeln!(output, "❌ Please answer y or n (or 'quit')")?,
        }
    }
}

/// Get user input with a prompt
fn get_user_input<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input ended before the quiz was finished");
    }

    Ok(line.trim().to_string())
}
