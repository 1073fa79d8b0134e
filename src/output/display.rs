//! Display functions for command results

use super::formatters::{band_marks, create_progress_bar, format_thousands};
use crate::commands::{ReplayResult, SampleSummary, SimulationResult};
use crate::core::{Band, POINTS_PER_RANGE};
use crate::sampler::{Evaluation, Quiz};
use colored::Colorize;

/// Print the two quiz batches
pub fn print_quiz(quiz: &Quiz<'_>, words_only: bool) {
    if words_only {
        for word in quiz.words() {
            println!("{word}");
        }
        return;
    }

    for (page, batch) in [&quiz.first, &quiz.second].into_iter().enumerate() {
        println!("\n{}", "─".repeat(60).cyan());
        println!(
            "{} ({} words)",
            format!("Page {}", page + 1).bright_cyan().bold(),
            batch.len()
        );
        println!("{}", "─".repeat(60).cyan());
        for row in batch.chunks(4) {
            let cells: Vec<String> = row.iter().map(|w| format!("{w:<18}")).collect();
            println!("  {}", cells.join(""));
        }
    }
}

/// Print the result of an evaluation
pub fn print_evaluation(evaluation: &Evaluation) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "VOCABULARY ESTIMATE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📚 Estimated size: {} words",
        format_thousands(evaluation.score).bright_yellow().bold()
    );

    println!("\n📊 {}", "By band:".bright_cyan().bold());
    for band in Band::ALL {
        let known = evaluation.yes_count(band);
        let bar = create_progress_bar(f64::from(known), POINTS_PER_RANGE as f64, 20);
        println!(
            "   {:<17} [{}] {:>2}/{}  → {:>7}",
            band.label(),
            bar.green(),
            known,
            POINTS_PER_RANGE,
            format_thousands(evaluation.estimate(band))
        );
    }

    println!("\n🗂  Record: {}", evaluation.record);
}

/// Print a decoded record
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "RECORD REPLAY:".bright_cyan().bold(),
        result.record.sample_name().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Answered: {} of 120", result.record.answered());
    for band in Band::ALL {
        println!("\n   {}", band.label().bright_cyan());
        println!("   {}", band_marks(&result.record, band));
        let known: Vec<&str> = result.known_words(band).collect();
        if known.is_empty() {
            println!("   known: {}", "(none)".bright_black());
        } else {
            println!("   known: {}", known.join(", "));
        }
    }

    print_evaluation(&result.evaluation);
}

/// Print a sample summary
pub fn print_sample_summary(summary: &SampleSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SAMPLE:".bright_cyan().bold(),
        summary.sample_name.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for band in &summary.bands {
        let span = band
            .rank_span
            .map_or_else(|| "-".to_string(), |(lo, hi)| format!("{lo}..{hi}"));
        println!(
            "   {:<17} size {:>7}  points {:>2}  words {:>3}  ranks {}",
            band.band.label(),
            format_thousands(band.size),
            band.points,
            band.words,
            span
        );
    }
    println!(
        "\n   Maximum score: {}",
        format_thousands(summary.max_score).bright_yellow()
    );
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Estimator:".bright_cyan().bold());
    println!("   Quiz-takers:      {}", result.takers);
    println!("   Expected score:   {:.1}", result.expected_score);
    println!(
        "   Mean score:       {}",
        format!("{:.1}", result.mean_score).bright_yellow().bold()
    );
    let bias = format!("{:+.1}", result.bias());
    println!(
        "   Bias:             {}",
        if result.bias().abs() < result.std_dev / 10.0 {
            bias.green()
        } else {
            bias.yellow()
        }
    );
    println!("   Std deviation:    {:.1}", result.std_dev);
    println!("   Lowest score:     {}", format_thousands(result.min_score));
    println!("   Highest score:    {}", format_thousands(result.max_score));
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution (tenths of maximum):".bright_cyan().bold());
    let max_count = result.histogram.iter().copied().max().unwrap_or(1).max(1);
    for (i, &count) in result.histogram.iter().enumerate() {
        let pct = count as f64 / result.takers as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "   {:>3}%: {} {count:5} ({pct:5.1}%)",
            (i + 1) * 10,
            bar.green()
        );
    }
}
