//! Monte Carlo repetition of randomized trials.
//!
//! Provides a seedable generator, a trial engine, and summary statistics
//! over trial outcomes.

pub mod engine;

pub use engine::{
    percentile, MonteCarloEngine, MonteCarloRng, SimulationResult, Statistics, TrialModel,
};
