//! Inter-rater agreement metrics.
//!
//! Cohen's kappa compares observed agreement against the agreement expected
//! if true and predicted labels were independent with the same marginals.
//! Weighted variants penalise disagreements by ordinal distance.
//!
//! References:
//! - Cohen (1960), "A Coefficient of Agreement for Nominal Scales"
//! - Cohen (1968), "Weighted kappa"

use serde::{Deserialize, Serialize};

use super::classification::ConfusionMatrix;
use crate::error::Result;

/// Disagreement weighting for Cohen's kappa.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KappaWeighting {
    /// Every disagreement costs 1.
    #[default]
    None,
    /// Cost `|i - j| / (K - 1)`.
    Linear,
    /// Cost `(i - j)² / (K - 1)²`.
    Quadratic,
}

impl KappaWeighting {
    /// Disagreement weight between classes `i` and `j` out of `n_classes`.
    #[must_use]
    pub fn weight(self, i: usize, j: usize, n_classes: usize) -> f64 {
        if i == j {
            return 0.0;
        }
        let scale = n_classes.saturating_sub(1).max(1) as f64;
        let distance = i.abs_diff(j) as f64;
        match self {
            Self::None => 1.0,
            Self::Linear => distance / scale,
            Self::Quadratic => (distance / scale).powi(2),
        }
    }
}

/// Cohen's kappa of a confusion matrix under the given weighting.
///
/// `kappa = 1 - Σ w_ij O_ij / Σ w_ij E_ij` where `E = outer(rows, cols) / n`.
///
/// When no disagreement is possible under the marginals (the expected
/// weighted disagreement is zero) the observed one is zero as well and the
/// result is 1.0.
#[must_use]
pub fn kappa_from_confusion(cm: &ConfusionMatrix, weighting: KappaWeighting) -> f64 {
    let k = cm.n_classes();
    let n = cm.total() as f64;
    let rows = cm.row_sums();
    let cols = cm.col_sums();

    let mut observed = 0.0;
    let mut expected = 0.0;
    for i in 0..k {
        for j in 0..k {
            let w = weighting.weight(i, j, k);
            if w == 0.0 {
                continue;
            }
            observed += w * cm.get(i, j) as f64;
            expected += w * rows[i] as f64 * cols[j] as f64 / n;
        }
    }

    if expected == 0.0 {
        return 1.0;
    }
    1.0 - observed / expected
}

/// Compute Cohen's kappa with the given disagreement weighting.
///
/// # Errors
///
/// Returns [`crate::error::LabelShiftError::InvalidInput`] on empty,
/// mismatched, or out-of-range input.
///
/// # Examples
///
/// ```
/// use label_shift::metrics::agreement::{cohen_kappa, KappaWeighting};
///
/// let y_true = vec![0, 1, 2, 0, 1, 2];
/// let y_pred = vec![0, 1, 2, 0, 1, 2];
/// let k = cohen_kappa(&y_pred, &y_true, 3, KappaWeighting::None).unwrap();
/// assert!((k - 1.0).abs() < 1e-12);
/// ```
pub fn cohen_kappa(
    y_pred: &[usize],
    y_true: &[usize],
    n_classes: usize,
    weighting: KappaWeighting,
) -> Result<f64> {
    let cm = ConfusionMatrix::from_labels(y_pred, y_true, n_classes)?;
    Ok(kappa_from_confusion(&cm, weighting))
}

/// Quadratic-weighted Cohen's kappa.
///
/// # Errors
///
/// Returns [`crate::error::LabelShiftError::InvalidInput`] on empty,
/// mismatched, or out-of-range input.
///
/// # Examples
///
/// ```
/// use label_shift::metrics::agreement::quadratic_weighted_kappa;
///
/// // An off-by-one error costs far less than an off-by-four error.
/// let y_true = vec![0, 1, 2, 3, 4];
/// let near = quadratic_weighted_kappa(&[1, 1, 2, 3, 4], &y_true, 5).unwrap();
/// let far = quadratic_weighted_kappa(&[4, 1, 2, 3, 4], &y_true, 5).unwrap();
/// assert!(near > far);
/// ```
pub fn quadratic_weighted_kappa(y_pred: &[usize], y_true: &[usize], n_classes: usize) -> Result<f64> {
    cohen_kappa(y_pred, y_true, n_classes, KappaWeighting::Quadratic)
}
