//! Label-distribution scenarios.

use serde::Serialize;

use crate::error::{LabelShiftError, Result};
use crate::metrics::{evaluate, MetricResult};
use crate::monte_carlo::{MonteCarloRng, TrialModel};
use crate::synthetic::{ClassDistribution, NoiseInjector};

/// Ground-truth distribution plus the noise applied to its predictions.
///
/// One trial injects noise into the scenario's fixed label sequence and
/// scores the result.
#[derive(Clone, Debug, Serialize)]
pub struct Scenario {
    name: String,
    distribution: ClassDistribution,
    injector: NoiseInjector,
    #[serde(skip)]
    y_true: Vec<usize>,
}

impl Scenario {
    /// Create a scenario.
    ///
    /// # Errors
    ///
    /// Returns [`LabelShiftError::InvalidInput`] if the distribution is empty
    /// or `n_noisy` exceeds its total count.
    pub fn new(name: &str, distribution: ClassDistribution, n_noisy: usize) -> Result<Self> {
        if distribution.total() == 0 {
            return Err(LabelShiftError::empty_input("class distribution"));
        }
        if n_noisy > distribution.total() {
            return Err(LabelShiftError::invalid_parameter(
                "n_noisy",
                n_noisy,
                &format!("<= {} samples", distribution.total()),
            ));
        }

        let injector = NoiseInjector::new(n_noisy, distribution.n_classes());
        let y_true = distribution.generate_labels();
        Ok(Self {
            name: name.to_string(),
            distribution,
            injector,
            y_true,
        })
    }

    /// Five classes of 100 samples each.
    ///
    /// # Errors
    ///
    /// Returns [`LabelShiftError::InvalidInput`] if `n_noisy > 500`.
    pub fn balanced(n_noisy: usize) -> Result<Self> {
        Self::new("balanced", ClassDistribution::uniform(5, 100), n_noisy)
    }

    /// Five classes of 280, 100, 100, 10 and 10 samples.
    ///
    /// # Errors
    ///
    /// Returns [`LabelShiftError::InvalidInput`] if `n_noisy > 500`.
    pub fn shifted(n_noisy: usize) -> Result<Self> {
        Self::new(
            "imbalanced",
            ClassDistribution::new(vec![280, 100, 100, 10, 10]),
            n_noisy,
        )
    }

    /// Scenario name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Report heading, e.g. `BALANCED DATASET:`.
    #[must_use]
    pub fn header(&self) -> String {
        format!("{} DATASET:", self.name.to_uppercase())
    }

    /// Ground-truth class distribution.
    #[must_use]
    pub fn distribution(&self) -> &ClassDistribution {
        &self.distribution
    }

    /// Number of noisy positions per trial.
    #[must_use]
    pub fn n_noisy(&self) -> usize {
        self.injector.n_noisy
    }

    /// Ground-truth labels shared by every trial.
    #[must_use]
    pub fn y_true(&self) -> &[usize] {
        &self.y_true
    }
}

impl TrialModel for Scenario {
    type Output = MetricResult;

    fn name(&self) -> &str {
        &self.name
    }

    fn run_trial(&self, rng: &mut MonteCarloRng, _trial_id: usize) -> Result<MetricResult> {
        let y_pred = self.injector.inject(&self.y_true, rng)?;
        evaluate(&y_pred, &self.y_true, self.distribution.n_classes())
    }
}
