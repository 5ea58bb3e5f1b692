//! Command-line interface for the label-shift binary.

use clap::{Parser, ValueEnum};

use crate::experiment::{ExperimentConfig, DEFAULT_NOISY, DEFAULT_TRIALS};

/// Compare agreement metrics under label-distribution shift.
///
/// Corrupts predictions of a balanced and a shifted five-class dataset with
/// uniform label noise and reports quadratic-weighted kappa, MCC, accuracy
/// and balanced accuracy.
#[derive(Parser, Debug, Clone)]
#[command(name = "label-shift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for a reproducible run (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Trials per scenario
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Positions overwritten with random labels per trial
    #[arg(long, default_value_t = DEFAULT_NOISY)]
    pub noise: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report
    Table,
    /// Pretty-printed JSON
    Json,
}

impl Cli {
    /// Parse arguments from the process command line
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Experiment configuration described by the arguments
    #[must_use]
    pub fn config(&self) -> ExperimentConfig {
        let config = ExperimentConfig::default()
            .with_n_trials(self.trials)
            .with_n_noisy(self.noise);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
