//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use label_shift::prelude::*;
//! ```

pub use crate::error::{LabelShiftError, Result};
pub use crate::experiment::{run_experiment, ExperimentConfig, ExperimentReport, Scenario};
pub use crate::metrics::agreement::{cohen_kappa, quadratic_weighted_kappa, KappaWeighting};
pub use crate::metrics::classification::{
    accuracy, balanced_accuracy, matthews_corrcoef, ConfusionMatrix,
};
pub use crate::metrics::{evaluate, Metric, MetricResult};
pub use crate::monte_carlo::{MonteCarloEngine, MonteCarloRng, Statistics, TrialModel};
pub use crate::synthetic::{ClassDistribution, NoiseInjector};
