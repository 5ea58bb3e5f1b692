//! label-shift CLI
//!
//! Runs the balanced vs. shifted label-noise experiment and prints the
//! metric report.

use label_shift::cli::{Cli, OutputFormat};
use label_shift::experiment::{render_json, render_text, run_experiment};
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let report = run_experiment(&cli.config())?;

    match cli.format {
        OutputFormat::Table => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
