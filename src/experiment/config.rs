//! Experiment configuration.

use serde::{Deserialize, Serialize};

use crate::error::{LabelShiftError, Result};

/// Trials per scenario in the reference experiment.
pub const DEFAULT_TRIALS: usize = 1000;

/// Noisy positions per trial in the reference experiment.
pub const DEFAULT_NOISY: usize = 100;

/// Parameters of a label-shift experiment.
///
/// # Example
///
/// ```
/// use label_shift::experiment::ExperimentConfig;
///
/// let config = ExperimentConfig::default().with_seed(42).with_n_trials(200);
/// assert_eq!(config.n_trials, 200);
/// assert_eq!(config.n_noisy, 100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Trials per scenario
    pub n_trials: usize,
    /// Positions overwritten with random labels in each trial
    pub n_noisy: usize,
    /// Seed for the run; `None` draws one from OS entropy
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            n_trials: DEFAULT_TRIALS,
            n_noisy: DEFAULT_NOISY,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Set the number of trials per scenario.
    #[must_use]
    pub fn with_n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = n_trials;
        self
    }

    /// Set the number of noisy positions per trial.
    #[must_use]
    pub fn with_n_noisy(mut self, n_noisy: usize) -> Self {
        self.n_noisy = n_noisy;
        self
    }

    /// Fix the seed for a reproducible run.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check parameters that do not depend on a scenario.
    ///
    /// # Errors
    ///
    /// Returns [`LabelShiftError::InvalidInput`] when `n_trials` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.n_trials == 0 {
            return Err(LabelShiftError::invalid_parameter("n_trials", 0, ">= 1"));
        }
        Ok(())
    }
}
