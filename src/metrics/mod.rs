//! Evaluation metrics for predicted class labels.
//!
//! Includes classification metrics (confusion matrix, accuracy, balanced
//! accuracy, Matthews correlation coefficient) and agreement metrics
//! (Cohen's kappa, unweighted and weighted).
//!
//! [`evaluate`] computes the four headline metrics from a single confusion
//! matrix.

pub mod agreement;
pub mod classification;

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use agreement::{kappa_from_confusion, KappaWeighting};
use classification::ConfusionMatrix;

/// The metrics whose sensitivity to label shift is compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    /// Quadratic-weighted Cohen's kappa.
    QuadraticKappa,
    /// Matthews correlation coefficient.
    Mcc,
    /// Accuracy.
    Accuracy,
    /// Balanced accuracy.
    BalancedAccuracy,
}

impl Metric {
    /// All metrics in report order.
    pub const ALL: [Metric; 4] = [
        Metric::QuadraticKappa,
        Metric::Mcc,
        Metric::Accuracy,
        Metric::BalancedAccuracy,
    ];

    /// Short label used in text reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::QuadraticKappa => "Quad-kappa",
            Self::Mcc => "MCC",
            Self::Accuracy => "ACC",
            Self::BalancedAccuracy => "bal-ACC",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scores of one (true, predicted) pair.
///
/// Kappa and MCC lie in `[-1, 1]`, accuracy and balanced accuracy in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MetricResult {
    /// Quadratic-weighted Cohen's kappa
    pub quadratic_kappa: f64,
    /// Matthews correlation coefficient
    pub mcc: f64,
    /// Accuracy
    pub accuracy: f64,
    /// Balanced accuracy
    pub balanced_accuracy: f64,
}

impl MetricResult {
    /// Value of one metric.
    #[must_use]
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::QuadraticKappa => self.quadratic_kappa,
            Metric::Mcc => self.mcc,
            Metric::Accuracy => self.accuracy,
            Metric::BalancedAccuracy => self.balanced_accuracy,
        }
    }
}

impl fmt::Display for MetricResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, metric) in Metric::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={:.2},", metric.label(), self.get(metric) * 100.0)?;
        }
        Ok(())
    }
}

/// Compute all four metrics of a (true, predicted) pair.
///
/// # Errors
///
/// Returns [`crate::error::LabelShiftError::InvalidInput`] if the sequences
/// are empty, differ in length, or hold labels outside `[0, n_classes - 1]`.
///
/// # Examples
///
/// ```
/// use label_shift::metrics::evaluate;
///
/// let y_true = vec![0, 1, 2, 3, 4];
/// let result = evaluate(&y_true, &y_true, 5).unwrap();
/// assert_eq!(result.accuracy, 1.0);
/// assert_eq!(
///     result.to_string(),
///     "Quad-kappa=100.00, MCC=100.00, ACC=100.00, bal-ACC=100.00,"
/// );
/// ```
pub fn evaluate(y_pred: &[usize], y_true: &[usize], n_classes: usize) -> Result<MetricResult> {
    let cm = ConfusionMatrix::from_labels(y_pred, y_true, n_classes)?;
    Ok(MetricResult {
        quadratic_kappa: kappa_from_confusion(&cm, KappaWeighting::Quadratic),
        mcc: cm.matthews_corrcoef(),
        accuracy: cm.accuracy(),
        balanced_accuracy: cm.balanced_accuracy(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::agreement::quadratic_weighted_kappa;
    use crate::metrics::classification::{accuracy, balanced_accuracy, matthews_corrcoef};

    #[test]
    fn test_evaluate_matches_individual_metrics() {
        let y_true = vec![0, 0, 0, 1, 1, 2, 2, 3, 4, 4];
        let y_pred = vec![0, 1, 0, 1, 3, 2, 2, 3, 4, 0];
        let r = evaluate(&y_pred, &y_true, 5).unwrap();

        assert_eq!(r.accuracy, accuracy(&y_pred, &y_true, 5).unwrap());
        assert_eq!(
            r.balanced_accuracy,
            balanced_accuracy(&y_pred, &y_true, 5).unwrap()
        );
        assert_eq!(r.mcc, matthews_corrcoef(&y_pred, &y_true, 5).unwrap());
        assert_eq!(
            r.quadratic_kappa,
            quadratic_weighted_kappa(&y_pred, &y_true, 5).unwrap()
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let y_true = vec![0, 1, 2, 3, 4, 4, 3, 2];
        let y_pred = vec![0, 1, 1, 3, 0, 4, 3, 2];
        assert_eq!(
            evaluate(&y_pred, &y_true, 5).unwrap(),
            evaluate(&y_pred, &y_true, 5).unwrap()
        );
    }

    #[test]
    fn test_metric_result_display() {
        let r = MetricResult {
            quadratic_kappa: 0.80123,
            mcc: 0.7849,
            accuracy: 0.83,
            balanced_accuracy: 0.8300001,
        };
        assert_eq!(
            r.to_string(),
            "Quad-kappa=80.12, MCC=78.49, ACC=83.00, bal-ACC=83.00,"
        );
    }

    #[test]
    fn test_metric_get_and_labels() {
        let r = MetricResult {
            quadratic_kappa: 1.0,
            mcc: 2.0,
            accuracy: 3.0,
            balanced_accuracy: 4.0,
        };
        let values: Vec<f64> = Metric::ALL.iter().map(|&m| r.get(m)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Metric::BalancedAccuracy.to_string(), "bal-ACC");
    }

    #[test]
    fn test_evaluate_rejects_invalid_input() {
        assert!(evaluate(&[0, 1, 2], &[0, 1], 5).is_err());
        assert!(evaluate(&[0, 7], &[0, 1], 5).is_err());
    }
}
