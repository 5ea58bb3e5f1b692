//! Repeated-trial engine
//!
//! A [`TrialModel`] describes one randomized trial; the
//! [`MonteCarloEngine`] runs it a fixed number of times against a single
//! seeded generator and collects the outcomes in trial order.

mod rng;
mod types;

pub use rng::MonteCarloRng;
pub use types::{percentile, SimulationResult, Statistics};

use tracing::debug;

use crate::error::{LabelShiftError, Result};

/// A randomized experiment that can be repeated
pub trait TrialModel {
    /// Outcome of one trial
    type Output;

    /// Model name for logging and reports
    fn name(&self) -> &str;

    /// Run trial `trial_id`, drawing all randomness from `rng`
    ///
    /// # Errors
    ///
    /// Propagates any error of the trial.
    fn run_trial(&self, rng: &mut MonteCarloRng, trial_id: usize) -> Result<Self::Output>;
}

/// Runs a [`TrialModel`] for a fixed number of trials
#[derive(Debug, Clone)]
pub struct MonteCarloEngine {
    seed: Option<u64>,
    n_trials: usize,
}

impl Default for MonteCarloEngine {
    fn default() -> Self {
        Self {
            seed: None,
            n_trials: 1000,
        }
    }
}

impl MonteCarloEngine {
    /// Engine that seeds every simulation with `seed`
    #[must_use]
    pub fn reproducible(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Engine that draws a fresh seed from OS entropy per simulation
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::default()
    }

    /// Set the number of trials
    #[must_use]
    pub fn with_n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = n_trials;
        self
    }

    /// Number of trials per simulation
    #[must_use]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Configured seed, if any
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generator for a new simulation
    #[must_use]
    pub fn rng(&self) -> MonteCarloRng {
        self.seed
            .map_or_else(MonteCarloRng::from_entropy, MonteCarloRng::new)
    }

    /// Run `model` with a generator built from the engine's seed
    ///
    /// # Errors
    ///
    /// Returns [`LabelShiftError::InvalidInput`] when `n_trials` is zero and
    /// propagates the first failing trial.
    pub fn simulate<M: TrialModel>(&self, model: &M) -> Result<SimulationResult<M::Output>> {
        let mut rng = self.rng();
        self.simulate_with(model, &mut rng)
    }

    /// Run `model` drawing from a caller-supplied generator
    ///
    /// Successive calls sharing one generator continue its stream.
    ///
    /// # Errors
    ///
    /// Same as [`simulate`](Self::simulate).
    pub fn simulate_with<M: TrialModel>(
        &self,
        model: &M,
        rng: &mut MonteCarloRng,
    ) -> Result<SimulationResult<M::Output>> {
        if self.n_trials == 0 {
            return Err(LabelShiftError::invalid_parameter("n_trials", 0, ">= 1"));
        }

        debug!(
            model = model.name(),
            n_trials = self.n_trials,
            seed = rng.seed(),
            "starting simulation"
        );

        let trials = (0..self.n_trials)
            .map(|trial_id| model.run_trial(rng, trial_id))
            .collect::<Result<Vec<_>>>()?;

        debug!(model = model.name(), n_trials = trials.len(), "simulation finished");

        Ok(SimulationResult {
            model: model.name().to_string(),
            seed: rng.seed(),
            trials,
        })
    }
}
