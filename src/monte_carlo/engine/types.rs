//! Core types for repeated-trial simulations
//!
//! Provides the simulation result container and the summary statistics
//! computed over trial outcomes.

use serde::Serialize;

/// Outcomes of every trial of one simulation, in trial order
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult<T> {
    /// Name of the model that produced the trials
    pub model: String,
    /// Seed of the generator the trials drew from
    pub seed: u64,
    /// Per-trial outcomes
    pub trials: Vec<T>,
}

impl<T> SimulationResult<T> {
    /// Number of trials
    #[must_use]
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// Whether no trials ran
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Project every trial onto a scalar
    #[must_use]
    pub fn values<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(&T) -> f64,
    {
        self.trials.iter().map(f).collect()
    }
}

/// Summary statistics for a distribution of trial outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Statistics {
    /// Sample mean
    pub mean: f64,
    /// Sample standard deviation
    pub std: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// 5th percentile
    pub p5: f64,
    /// 95th percentile
    pub p95: f64,
    /// Number of samples
    pub n: usize,
}

impl Statistics {
    /// Calculate statistics from values
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len();
        let n_f = n as f64;

        let mean = values.iter().sum::<f64>() / n_f;

        let variance =
            values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n_f - 1.0).max(1.0);
        let std = variance.sqrt();

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            mean,
            std,
            min,
            max,
            p5: percentile(values, 0.05),
            p95: percentile(values, 0.95),
            n,
        }
    }

    /// Calculate standard error of the mean
    #[must_use]
    pub fn sem(&self) -> f64 {
        if self.n > 0 {
            self.std / (self.n as f64).sqrt()
        } else {
            f64::INFINITY
        }
    }
}

/// Calculate a percentile from a slice of values
///
/// Uses linear interpolation between data points.
#[must_use]
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let p = p.clamp(0.0, 1.0);
    let n = sorted.len();

    if n == 1 {
        return sorted[0];
    }

    let idx = p * (n - 1) as f64;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;
    let frac = idx - lower as f64;

    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_basic() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

        assert!((percentile(&values, 0.0) - 1.0).abs() < 0.001);
        assert!((percentile(&values, 0.5) - 5.5).abs() < 0.001);
        assert!((percentile(&values, 1.0) - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_percentile_interpolation() {
        let values = vec![0.0, 1.0];
        assert!((percentile(&values, 0.25) - 0.25).abs() < 0.001);
        assert!((percentile(&values, 0.75) - 0.75).abs() < 0.001);
    }

    #[test]
    fn test_percentile_edge_cases() {
        assert_eq!(percentile(&[], 0.5), 0.0);
        assert_eq!(percentile(&[3.0], 0.9), 3.0);
        assert_eq!(percentile(&[1.0, 2.0], 2.0), 2.0);
    }

    #[test]
    fn test_statistics_basic() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = Statistics::from_values(&values);

        assert!((stats.mean - 3.0).abs() < 0.001);
        assert!((stats.std - 2.5_f64.sqrt()).abs() < 1e-12);
        assert!((stats.min - 1.0).abs() < 0.001);
        assert!((stats.max - 5.0).abs() < 0.001);
        assert!((stats.p5 - 1.2).abs() < 1e-12);
        assert!((stats.p95 - 4.8).abs() < 1e-12);
        assert_eq!(stats.n, 5);
    }

    #[test]
    fn test_statistics_constant() {
        let stats = Statistics::from_values(&[0.5; 10]);
        assert_eq!(stats.mean, 0.5);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.sem(), 0.0);
    }

    #[test]
    fn test_statistics_default() {
        let stats = Statistics::from_values(&[]);
        assert_eq!(stats.n, 0);
        assert!((stats.mean - 0.0).abs() < 1e-10);
        assert!(stats.sem().is_infinite());
    }

    #[test]
    fn test_simulation_result_values() {
        let result = SimulationResult {
            model: "m".to_string(),
            seed: 1,
            trials: vec![(1.0, 2.0), (3.0, 4.0)],
        };
        assert_eq!(result.len(), 2);
        assert!(!result.is_empty());
        assert_eq!(result.values(|t| t.1), vec![2.0, 4.0]);
    }
}
