//! Classification metrics for evaluating predicted class labels.
//!
//! Provides the confusion matrix, accuracy, per-class recall, balanced
//! accuracy and the multiclass Matthews correlation coefficient.
//!
//! All functions take `(y_pred, y_true, n_classes)` and validate that the
//! sequences are non-empty, of equal length, and hold labels in
//! `[0, n_classes - 1]`.

use serde::Serialize;

use crate::error::{LabelShiftError, Result};

/// Square confusion matrix over a fixed number of classes.
///
/// Entry `(i, j)` counts samples whose true label is `i` and predicted
/// label is `j`. Storage is row-major.
///
/// # Examples
///
/// ```
/// use label_shift::metrics::classification::ConfusionMatrix;
///
/// let y_true = vec![0, 0, 1, 1, 2, 2];
/// let y_pred = vec![0, 1, 1, 1, 2, 0];
/// let cm = ConfusionMatrix::from_labels(&y_pred, &y_true, 3).unwrap();
/// assert_eq!(cm.get(0, 1), 1);
/// assert_eq!(cm.trace(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    counts: Vec<usize>,
    n_classes: usize,
}

impl ConfusionMatrix {
    /// Count (true, predicted) pairs into a `n_classes x n_classes` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LabelShiftError::InvalidInput`] if the sequences are empty,
    /// differ in length, `n_classes` is zero, or any label is out of range.
    pub fn from_labels(y_pred: &[usize], y_true: &[usize], n_classes: usize) -> Result<Self> {
        validate_labels(y_pred, y_true, n_classes)?;

        let mut counts = vec![0usize; n_classes * n_classes];
        for (&true_label, &pred_label) in y_true.iter().zip(y_pred.iter()) {
            counts[true_label * n_classes + pred_label] += 1;
        }

        Ok(Self { counts, n_classes })
    }

    /// Number of classes (matrix side length).
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Count of samples with true label `actual` predicted as `predicted`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= n_classes`.
    #[must_use]
    pub fn get(&self, actual: usize, predicted: usize) -> usize {
        assert!(
            actual < self.n_classes && predicted < self.n_classes,
            "index out of bounds"
        );
        self.counts[actual * self.n_classes + predicted]
    }

    /// Total number of samples.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of correct predictions (sum of the diagonal).
    #[must_use]
    pub fn trace(&self) -> usize {
        (0..self.n_classes).map(|k| self.get(k, k)).sum()
    }

    /// Support of each true class.
    #[must_use]
    pub fn row_sums(&self) -> Vec<usize> {
        self.counts
            .chunks_exact(self.n_classes)
            .map(|row| row.iter().sum())
            .collect()
    }

    /// Number of predictions of each class.
    #[must_use]
    pub fn col_sums(&self) -> Vec<usize> {
        let mut sums = vec![0usize; self.n_classes];
        for row in self.counts.chunks_exact(self.n_classes) {
            for (sum, &c) in sums.iter_mut().zip(row) {
                *sum += c;
            }
        }
        sums
    }

    /// Recall of one class, `None` when the class never occurs in `y_true`.
    #[must_use]
    pub fn recall(&self, class: usize) -> Option<f64> {
        let support: usize = (0..self.n_classes).map(|j| self.get(class, j)).sum();
        if support == 0 {
            None
        } else {
            Some(self.get(class, class) as f64 / support as f64)
        }
    }

    /// Fraction of correct predictions.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.trace() as f64 / self.total() as f64
    }

    /// Unweighted mean of recall over the classes present in `y_true`.
    #[must_use]
    pub fn balanced_accuracy(&self) -> f64 {
        let recalls: Vec<f64> = (0..self.n_classes).filter_map(|k| self.recall(k)).collect();
        if recalls.is_empty() {
            return 0.0;
        }
        recalls.iter().sum::<f64>() / recalls.len() as f64
    }

    /// Multiclass Matthews correlation coefficient.
    ///
    /// `MCC = (c*s - Σ p_k t_k) / sqrt((s² - Σ p_k²)(s² - Σ t_k²))`
    ///
    /// where `c` is the trace, `s` the total, `p_k` the column sums and `t_k`
    /// the row sums. Returns 0.0 when the denominator vanishes.
    #[must_use]
    pub fn matthews_corrcoef(&self) -> f64 {
        let s = self.total() as f64;
        let c = self.trace() as f64;

        let t = self.row_sums();
        let p = self.col_sums();

        let sum_pk_tk: f64 = p.iter().zip(&t).map(|(&pk, &tk)| pk as f64 * tk as f64).sum();
        let sum_pk_sq: f64 = p.iter().map(|&pk| (pk as f64).powi(2)).sum();
        let sum_tk_sq: f64 = t.iter().map(|&tk| (tk as f64).powi(2)).sum();

        let numer = c * s - sum_pk_tk;
        let denom_sq = (s * s - sum_pk_sq) * (s * s - sum_tk_sq);
        if denom_sq <= 0.0 {
            return 0.0;
        }
        numer / denom_sq.sqrt()
    }

    /// Row-major view of the raw counts.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.counts
    }
}

/// Check the shared contract of every metric in this crate.
pub(crate) fn validate_labels(y_pred: &[usize], y_true: &[usize], n_classes: usize) -> Result<()> {
    if n_classes == 0 {
        return Err(LabelShiftError::invalid_parameter("n_classes", 0, ">= 1"));
    }
    if y_true.is_empty() {
        return Err(LabelShiftError::empty_input("y_true"));
    }
    if y_pred.len() != y_true.len() {
        return Err(LabelShiftError::length_mismatch(y_true.len(), y_pred.len()));
    }
    if let Some(&label) = y_true.iter().chain(y_pred).find(|&&l| l >= n_classes) {
        return Err(LabelShiftError::label_out_of_range(label, n_classes));
    }
    Ok(())
}

/// Compute classification accuracy.
///
/// accuracy = `correct_predictions` / `total_predictions`
///
/// # Errors
///
/// Returns [`LabelShiftError::InvalidInput`] on empty, mismatched, or
/// out-of-range input.
///
/// # Examples
///
/// ```
/// use label_shift::metrics::classification::accuracy;
///
/// let y_true = vec![0, 1, 2, 0, 1, 2];
/// let y_pred = vec![0, 2, 1, 0, 0, 1];
/// let acc = accuracy(&y_pred, &y_true, 3).unwrap();
/// assert!((acc - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn accuracy(y_pred: &[usize], y_true: &[usize], n_classes: usize) -> Result<f64> {
    validate_labels(y_pred, y_true, n_classes)?;

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p == t)
        .count();

    Ok(correct as f64 / y_true.len() as f64)
}

/// Compute recall for each class.
///
/// Classes absent from `y_true` have no defined recall and yield `None`.
///
/// # Errors
///
/// Returns [`LabelShiftError::InvalidInput`] on empty, mismatched, or
/// out-of-range input.
pub fn recall_per_class(
    y_pred: &[usize],
    y_true: &[usize],
    n_classes: usize,
) -> Result<Vec<Option<f64>>> {
    let cm = ConfusionMatrix::from_labels(y_pred, y_true, n_classes)?;
    Ok((0..n_classes).map(|k| cm.recall(k)).collect())
}

/// Compute balanced accuracy: the unweighted mean of per-class recall.
///
/// Every class present in `y_true` counts equally regardless of its size.
///
/// # Errors
///
/// Returns [`LabelShiftError::InvalidInput`] on empty, mismatched, or
/// out-of-range input.
///
/// # Examples
///
/// ```
/// use label_shift::metrics::classification::balanced_accuracy;
///
/// // Majority class fully right, minority class fully wrong.
/// let y_true = vec![0, 0, 0, 1];
/// let y_pred = vec![0, 0, 0, 0];
/// let bal = balanced_accuracy(&y_pred, &y_true, 2).unwrap();
/// assert!((bal - 0.5).abs() < 1e-12);
/// ```
pub fn balanced_accuracy(y_pred: &[usize], y_true: &[usize], n_classes: usize) -> Result<f64> {
    Ok(ConfusionMatrix::from_labels(y_pred, y_true, n_classes)?.balanced_accuracy())
}

/// Compute the multiclass Matthews correlation coefficient.
///
/// # Errors
///
/// Returns [`LabelShiftError::InvalidInput`] on empty, mismatched, or
/// out-of-range input.
///
/// # Examples
///
/// ```
/// use label_shift::metrics::classification::matthews_corrcoef;
///
/// let y = vec![0, 1, 2, 3, 4];
/// let mcc = matthews_corrcoef(&y, &y, 5).unwrap();
/// assert!((mcc - 1.0).abs() < 1e-12);
/// ```
pub fn matthews_corrcoef(y_pred: &[usize], y_true: &[usize], n_classes: usize) -> Result<f64> {
    Ok(ConfusionMatrix::from_labels(y_pred, y_true, n_classes)?.matthews_corrcoef())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confusion_matrix_counts() {
        let y_true = vec![0, 0, 1, 1, 2, 2];
        let y_pred = vec![0, 1, 1, 1, 2, 0];
        let cm = ConfusionMatrix::from_labels(&y_pred, &y_true, 3).unwrap();

        assert_eq!(cm.n_classes(), 3);
        assert_eq!(cm.as_slice(), &[1, 1, 0, 0, 2, 0, 1, 0, 1]);
        assert_eq!(cm.row_sums(), vec![2, 2, 2]);
        assert_eq!(cm.col_sums(), vec![2, 3, 1]);
        assert_eq!(cm.total(), 6);
        assert_eq!(cm.trace(), 4);
    }

    #[test]
    fn test_confusion_matrix_unused_classes() {
        let y = vec![0, 0, 1];
        let cm = ConfusionMatrix::from_labels(&y, &y, 5).unwrap();
        assert_eq!(cm.n_classes(), 5);
        assert_eq!(cm.row_sums(), vec![2, 1, 0, 0, 0]);
        assert_eq!(cm.recall(3), None);
    }

    #[test]
    fn test_accuracy_basic() {
        let y_true = vec![0, 1, 2, 0, 1, 2];
        let y_pred = vec![0, 2, 1, 0, 0, 1];
        let acc = accuracy(&y_pred, &y_true, 3).unwrap();
        assert!((acc - 2.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_rejects_length_mismatch() {
        let err = accuracy(&[0, 1], &[0, 1, 2], 3).unwrap_err();
        assert!(matches!(err, LabelShiftError::InvalidInput(_)));
    }

    #[test]
    fn test_accuracy_rejects_empty() {
        assert!(accuracy(&[], &[], 3).is_err());
    }

    #[test]
    fn test_rejects_label_out_of_range() {
        let err = accuracy(&[0, 5], &[0, 1], 5).unwrap_err();
        assert!(err.to_string().contains("label 5"));
        assert!(balanced_accuracy(&[0, 1], &[9, 1], 5).is_err());
    }

    #[test]
    fn test_rejects_zero_classes() {
        assert!(matthews_corrcoef(&[0], &[0], 0).is_err());
    }

    #[test]
    fn test_recall_per_class() {
        let y_true = vec![0, 0, 0, 0, 1, 1];
        let y_pred = vec![0, 0, 0, 1, 1, 0];
        let recalls = recall_per_class(&y_pred, &y_true, 3).unwrap();
        assert!((recalls[0].unwrap() - 0.75).abs() < 1e-12);
        assert!((recalls[1].unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(recalls[2], None);
    }

    #[test]
    fn test_balanced_accuracy_ignores_class_size() {
        // class 0: 9/10 correct, class 1: 0/1 correct
        let mut y_true = vec![0; 10];
        y_true.push(1);
        let mut y_pred = vec![0; 9];
        y_pred.push(1);
        y_pred.push(0);

        let acc = accuracy(&y_pred, &y_true, 2).unwrap();
        let bal = balanced_accuracy(&y_pred, &y_true, 2).unwrap();
        assert!((acc - 9.0 / 11.0).abs() < 1e-12);
        assert!((bal - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_balanced_accuracy_equals_accuracy_for_equal_support() {
        let y_true = vec![0, 0, 1, 1, 2, 2];
        let y_pred = vec![0, 1, 1, 1, 2, 0];
        let acc = accuracy(&y_pred, &y_true, 3).unwrap();
        let bal = balanced_accuracy(&y_pred, &y_true, 3).unwrap();
        assert!((acc - bal).abs() < 1e-12);
    }

    #[test]
    fn test_mcc_perfect_and_inverted_binary() {
        let y_true = vec![0, 0, 1, 1];
        assert!((matthews_corrcoef(&y_true, &y_true, 2).unwrap() - 1.0).abs() < 1e-12);

        let inverted = vec![1, 1, 0, 0];
        assert!((matthews_corrcoef(&inverted, &y_true, 2).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mcc_binary_matches_phi_coefficient() {
        // TP=3 FN=1 FP=2 TN=4
        let y_true = vec![1, 1, 1, 1, 0, 0, 0, 0, 0, 0];
        let y_pred = vec![1, 1, 1, 0, 1, 1, 0, 0, 0, 0];
        let phi = (3.0 * 4.0 - 2.0 * 1.0) / ((5.0_f64) * 4.0 * 6.0 * 5.0).sqrt();
        let mcc = matthews_corrcoef(&y_pred, &y_true, 2).unwrap();
        assert!((mcc - phi).abs() < 1e-12);
    }

    #[test]
    fn test_mcc_constant_prediction_is_zero() {
        let y_true = vec![0, 1, 2, 0, 1, 2];
        let y_pred = vec![1; 6];
        assert_eq!(matthews_corrcoef(&y_pred, &y_true, 3).unwrap(), 0.0);
    }
}

#[cfg(test)]
#[path = "tests_classification_contract.rs"]
mod tests_classification_contract;
