//! Vocabulary Sampler - CLI
//!
//! Generates vocabulary quizzes from a ranked word sample and turns yes/no
//! answers into a vocabulary-size estimate.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vocab_sampler::{
    commands::{
        SimulationConfig, evaluate_answers, replay_record, run_simulation, run_take, summarize,
    },
    core::BandSizes,
    output::{
        print_evaluation, print_quiz, print_replay_result, print_sample_summary,
        print_simulation_result,
    },
    sampler::{Quiz, Sampler},
    wordlists::{load_embedded, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "vocab_sampler",
    about = "Vocabulary size estimation from a ranked, banded word sample",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary sample file (rank<TAB>word<TAB>slot); defaults to the bundled sample
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Words represented by the high, medium and rare bands
    #[arg(long, global = true, value_delimiter = ',', default_values_t = [9000, 18000, 27885])]
    sizes: Vec<u32>,

    /// Seed for reproducible quizzes (default: fresh randomness)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the bands, sizes and rank spans of the sample
    Inspect,

    /// Print a randomized quiz: 40 high-frequency words, then 80 more
    Quiz {
        /// One word per line, no headings
        #[arg(short, long)]
        words_only: bool,
    },

    /// Take the quiz interactively
    Take,

    /// Score a file of word<TAB>yes|no lines ('-' for stdin)
    Evaluate {
        /// Answer file
        answers: PathBuf,
    },

    /// Decode a stored record and re-score it
    Replay {
        /// Encoded record, e.g. sample1-aBc...
        record: String,
    },

    /// Simulate many quiz-takers to check the estimator
    Simulate {
        /// Number of simulated quiz-takers
        #[arg(short = 'n', long, default_value = "1000")]
        takers: usize,

        /// Recognition probability for the high, medium and rare bands
        #[arg(short, long, value_delimiter = ',', default_values_t = [0.95, 0.6, 0.2])]
        recognition: Vec<f64>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vocab_sampler={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load the sample named by `--dictionary`, or the bundled one
fn load_sampler(dictionary: Option<&Path>, sizes: &[u32]) -> Result<Sampler> {
    let &[high, medium, rare] = sizes else {
        bail!("--sizes takes exactly three values, got {}", sizes.len());
    };
    let sizes = BandSizes([high, medium, rare]);

    match dictionary {
        Some(path) => load_from_file(path, sizes)
            .with_context(|| format!("failed to load dictionary {}", path.display())),
        None => load_embedded(sizes).context("bundled dictionary is invalid"),
    }
}

fn make_quiz(sampler: &Sampler, seed: Option<u64>) -> Quiz<'_> {
    match seed {
        Some(seed) => sampler.quiz(&mut StdRng::seed_from_u64(seed)),
        None => sampler.quiz(&mut rand::rng()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let sampler = load_sampler(cli.dictionary.as_deref(), &cli.sizes)?;

    match cli.command {
        Commands::Inspect => {
            print_sample_summary(&summarize(&sampler));
            Ok(())
        }
        Commands::Quiz { words_only } => {
            print_quiz(&make_quiz(&sampler, cli.seed), words_only);
            Ok(())
        }
        Commands::Take => run_take_command(&sampler, cli.seed),
        Commands::Evaluate { answers } => run_evaluate_command(&sampler, &answers),
        Commands::Replay { record } => {
            let result = replay_record(&sampler, &record)?;
            print_replay_result(&result);
            Ok(())
        }
        Commands::Simulate {
            takers,
            recognition,
        } => run_simulate_command(&sampler, takers, &recognition, cli.seed),
    }
}

fn run_take_command(sampler: &Sampler, seed: Option<u64>) -> Result<()> {
    let quiz = make_quiz(sampler, seed);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    if let Some(evaluation) = run_take(sampler, &quiz, &mut input, &mut output)? {
        print_evaluation(&evaluation);
    }
    Ok(())
}

fn run_evaluate_command(sampler: &Sampler, answers: &Path) -> Result<()> {
    let evaluation = if answers == Path::new("-") {
        evaluate_answers(sampler, io::stdin().lock())?
    } else {
        let file = File::open(answers)
            .with_context(|| format!("failed to open answers {}", answers.display()))?;
        evaluate_answers(sampler, BufReader::new(file))?
    };

    print_evaluation(&evaluation);
    Ok(())
}

fn run_simulate_command(
    sampler: &Sampler,
    takers: usize,
    recognition: &[f64],
    seed: Option<u64>,
) -> Result<()> {
    let &[high, medium, rare] = recognition else {
        bail!("--recognition takes exactly three values, got {}", recognition.len());
    };

    let config = SimulationConfig {
        takers,
        recognition: [high, medium, rare],
        seed: seed.unwrap_or_else(rand::random),
        ..SimulationConfig::default()
    };

    println!(
        "Simulating {takers} quiz-takers on sample '{}'...",
        sampler.sample_name()
    );
    let result = run_simulation(sampler, &config)?;
    print_simulation_result(&result);
    Ok(())
}
