//! label-shift: how classification-agreement metrics react to label shift.
//!
//! Generates synthetic multi-class label sets, corrupts predictions with
//! controlled uniform noise, and compares quadratic-weighted Cohen's kappa,
//! the Matthews correlation coefficient, accuracy and balanced accuracy
//! between a balanced and a shifted ground-truth distribution.
//!
//! # Quick Start
//!
//! ```
//! use label_shift::prelude::*;
//!
//! let y_true = ClassDistribution::new(vec![280, 100, 100, 10, 10]).generate_labels();
//! let mut rng = MonteCarloRng::new(42);
//! let y_pred = NoiseInjector::new(100, 5).inject(&y_true, &mut rng).unwrap();
//!
//! let result = evaluate(&y_pred, &y_true, 5).unwrap();
//! assert!(result.accuracy > 0.7);
//! assert!(result.quadratic_kappa <= 1.0);
//! ```
//!
//! # Modules
//!
//! - [`synthetic`]: Class distributions and label noise
//! - [`metrics`]: Confusion matrix, accuracy, balanced accuracy, MCC, Cohen's kappa
//! - [`monte_carlo`]: Seeded generator, trial engine, summary statistics
//! - [`experiment`]: Balanced vs. shifted scenarios and their reports
//! - [`cli`]: Command-line interface of the `label-shift` binary

pub mod cli;
pub mod error;
pub mod experiment;
pub mod metrics;
pub mod monte_carlo;
pub mod prelude;
pub mod synthetic;

pub use error::{LabelShiftError, Result};
