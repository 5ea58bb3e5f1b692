//! Label-shift experiment.
//!
//! Runs repeated noisy-prediction trials over a balanced and a shifted
//! ground-truth distribution and summarises how each metric responds.
//!
//! # Example
//!
//! ```
//! use label_shift::experiment::{run_experiment, ExperimentConfig};
//!
//! let config = ExperimentConfig::default().with_seed(42).with_n_trials(50);
//! let report = run_experiment(&config).unwrap();
//! assert_eq!(report.scenarios.len(), 2);
//! assert_eq!(report.scenarios[0].stats.accuracy.n, 50);
//! ```

mod config;
mod report;
mod scenario;

pub use config::{ExperimentConfig, DEFAULT_NOISY, DEFAULT_TRIALS};
pub use report::{render_json, render_text, SEPARATOR};
pub use scenario::Scenario;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::metrics::{Metric, MetricResult};
use crate::monte_carlo::{MonteCarloEngine, SimulationResult, Statistics};
use crate::synthetic::ClassDistribution;

/// Per-metric statistics over the trials of one scenario.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MetricStats {
    /// Quadratic-weighted kappa
    pub quadratic_kappa: Statistics,
    /// Matthews correlation coefficient
    pub mcc: Statistics,
    /// Accuracy
    pub accuracy: Statistics,
    /// Balanced accuracy
    pub balanced_accuracy: Statistics,
}

impl MetricStats {
    /// Aggregate trial results.
    #[must_use]
    pub fn from_results(results: &SimulationResult<MetricResult>) -> Self {
        let stats = |m: Metric| Statistics::from_values(&results.values(|r| r.get(m)));
        Self {
            quadratic_kappa: stats(Metric::QuadraticKappa),
            mcc: stats(Metric::Mcc),
            accuracy: stats(Metric::Accuracy),
            balanced_accuracy: stats(Metric::BalancedAccuracy),
        }
    }

    /// Statistics of one metric.
    #[must_use]
    pub fn get(&self, metric: Metric) -> &Statistics {
        match metric {
            Metric::QuadraticKappa => &self.quadratic_kappa,
            Metric::Mcc => &self.mcc,
            Metric::Accuracy => &self.accuracy,
            Metric::BalancedAccuracy => &self.balanced_accuracy,
        }
    }
}

/// Outcome of one scenario.
#[derive(Clone, Debug, Serialize)]
pub struct ScenarioSummary {
    /// Scenario name
    pub name: String,
    /// Report heading
    pub header: String,
    /// Ground-truth distribution
    pub distribution: ClassDistribution,
    /// First trial, shown for exposition
    pub example: MetricResult,
    /// Aggregates over all trials
    pub stats: MetricStats,
}

/// Outcome of a full experiment.
#[derive(Clone, Debug, Serialize)]
pub struct ExperimentReport {
    /// Configuration the experiment ran with
    pub config: ExperimentConfig,
    /// Seed actually used (drawn from entropy when not configured)
    pub seed: u64,
    /// Scenario summaries in run order
    pub scenarios: Vec<ScenarioSummary>,
}

/// Run the balanced and shifted reference scenarios.
///
/// # Errors
///
/// Returns [`crate::error::LabelShiftError::InvalidInput`] for an invalid
/// configuration.
pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentReport> {
    let scenarios = [
        Scenario::balanced(config.n_noisy)?,
        Scenario::shifted(config.n_noisy)?,
    ];
    run_scenarios(config, &scenarios)
}

/// Run arbitrary scenarios in order, all drawing from one generator.
///
/// # Errors
///
/// Returns [`crate::error::LabelShiftError::InvalidInput`] for an invalid
/// configuration or a failing trial.
pub fn run_scenarios(config: &ExperimentConfig, scenarios: &[Scenario]) -> Result<ExperimentReport> {
    config.validate()?;

    let engine = match config.seed {
        Some(seed) => MonteCarloEngine::reproducible(seed),
        None => MonteCarloEngine::from_entropy(),
    }
    .with_n_trials(config.n_trials);
    let mut rng = engine.rng();

    info!(seed = rng.seed(), n_trials = config.n_trials, "running experiment");

    let mut summaries = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        let results = engine.simulate_with(scenario, &mut rng)?;
        let stats = MetricStats::from_results(&results);

        info!(
            scenario = scenario.name(),
            distribution = %scenario.distribution(),
            kappa = stats.quadratic_kappa.mean,
            mcc = stats.mcc.mean,
            accuracy = stats.accuracy.mean,
            balanced_accuracy = stats.balanced_accuracy.mean,
            "scenario finished"
        );

        summaries.push(ScenarioSummary {
            name: scenario.name().to_string(),
            header: scenario.header(),
            distribution: scenario.distribution().clone(),
            example: results.trials[0],
            stats,
        });
    }

    Ok(ExperimentReport {
        config: config.clone(),
        seed: rng.seed(),
        scenarios: summaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_experiment_reproducible() {
        let config = ExperimentConfig::default().with_seed(11).with_n_trials(30);
        let a = run_experiment(&config).unwrap();
        let b = run_experiment(&config).unwrap();
        assert_eq!(a.seed, 11);
        for (x, y) in a.scenarios.iter().zip(&b.scenarios) {
            assert_eq!(x.stats, y.stats);
            assert_eq!(x.example, y.example);
        }
    }

    #[test]
    fn test_run_experiment_scenario_order() {
        let config = ExperimentConfig::default().with_seed(1).with_n_trials(5);
        let report = run_experiment(&config).unwrap();
        let names: Vec<&str> = report.scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["balanced", "imbalanced"]);
    }

    #[test]
    fn test_run_experiment_rejects_invalid_config() {
        assert!(run_experiment(&ExperimentConfig::default().with_n_trials(0)).is_err());
        assert!(run_experiment(&ExperimentConfig::default().with_n_noisy(501)).is_err());
    }

    #[test]
    fn test_metric_stats_get() {
        let config = ExperimentConfig::default().with_seed(2).with_n_trials(10);
        let report = run_experiment(&config).unwrap();
        let stats = &report.scenarios[1].stats;
        assert_eq!(stats.get(Metric::Mcc), &stats.mcc);
        assert_eq!(stats.get(Metric::Accuracy).n, 10);
    }

    #[test]
    fn test_entropy_seed_recorded() {
        let config = ExperimentConfig::default().with_n_trials(3);
        let report = run_experiment(&config).unwrap();
        let replay = run_experiment(&config.clone().with_seed(report.seed)).unwrap();
        assert_eq!(report.scenarios[0].stats, replay.scenarios[0].stats);
    }
}
