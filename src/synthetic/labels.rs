//! Class distributions and the label sequences they define.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of samples per class, indexed by class label.
///
/// # Example
///
/// ```
/// use label_shift::synthetic::ClassDistribution;
///
/// let dist = ClassDistribution::from_pairs([(0, 2), (2, 1)]);
/// assert_eq!(dist.n_classes(), 3);
/// assert_eq!(dist.generate_labels(), vec![0, 0, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDistribution {
    counts: Vec<usize>,
}

impl ClassDistribution {
    /// Create a distribution where `counts[k]` samples carry label `k`.
    #[must_use]
    pub fn new(counts: Vec<usize>) -> Self {
        Self { counts }
    }

    /// Build from `(class, count)` pairs. Classes not listed get count 0;
    /// a repeated class keeps its last count.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut counts = Vec::new();
        for (class, count) in pairs {
            if class >= counts.len() {
                counts.resize(class + 1, 0);
            }
            counts[class] = count;
        }
        Self { counts }
    }

    /// `n_classes` classes with `per_class` samples each.
    #[must_use]
    pub fn uniform(n_classes: usize, per_class: usize) -> Self {
        Self::new(vec![per_class; n_classes])
    }

    /// Number of classes (labels run from 0 to `n_classes - 1`).
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.counts.len()
    }

    /// Total number of samples.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Samples of one class, 0 for classes beyond the distribution.
    #[must_use]
    pub fn count(&self, class: usize) -> usize {
        self.counts.get(class).copied().unwrap_or(0)
    }

    /// Per-class counts.
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Fraction of samples in each class. All zeros for an empty distribution.
    #[must_use]
    pub fn proportions(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.counts.len()];
        }
        self.counts
            .iter()
            .map(|&c| c as f64 / total as f64)
            .collect()
    }

    /// Label sequence of length [`total`](Self::total), grouped by class in
    /// ascending order.
    #[must_use]
    pub fn generate_labels(&self) -> Vec<usize> {
        let mut labels = Vec::with_capacity(self.total());
        for (class, &count) in self.counts.iter().enumerate() {
            labels.extend(std::iter::repeat(class).take(count));
        }
        labels
    }
}

impl FromIterator<(usize, usize)> for ClassDistribution {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl fmt::Display for ClassDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (class, count) in self.counts.iter().enumerate() {
            if class > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{class}:{count}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_labels_grouped_by_class() {
        let dist = ClassDistribution::new(vec![2, 0, 3]);
        assert_eq!(dist.generate_labels(), vec![0, 0, 2, 2, 2]);
        assert_eq!(dist.total(), 5);
        assert_eq!(dist.n_classes(), 3);
    }

    #[test]
    fn test_generate_labels_deterministic() {
        let dist = ClassDistribution::new(vec![280, 100, 100, 10, 10]);
        assert_eq!(dist.generate_labels(), dist.generate_labels());
        assert_eq!(dist.generate_labels().len(), 500);
    }

    #[test]
    fn test_generate_labels_counts_per_class() {
        let dist = ClassDistribution::new(vec![280, 100, 100, 10, 10]);
        let labels = dist.generate_labels();
        for class in 0..5 {
            let n = labels.iter().filter(|&&l| l == class).count();
            assert_eq!(n, dist.count(class));
        }
    }

    #[test]
    fn test_from_pairs_fills_gaps() {
        let dist: ClassDistribution = [(3, 10), (0, 5)].into_iter().collect();
        assert_eq!(dist.counts(), &[5, 0, 0, 10]);
        assert_eq!(dist.count(9), 0);
    }

    #[test]
    fn test_uniform() {
        let dist = ClassDistribution::uniform(5, 100);
        assert_eq!(dist.counts(), &[100; 5]);
    }

    #[test]
    fn test_proportions() {
        let dist = ClassDistribution::new(vec![3, 1]);
        assert_eq!(dist.proportions(), vec![0.75, 0.25]);
        assert_eq!(ClassDistribution::new(vec![0, 0]).proportions(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_empty_distribution() {
        let dist = ClassDistribution::new(Vec::new());
        assert!(dist.generate_labels().is_empty());
        assert_eq!(dist.n_classes(), 0);
    }

    #[test]
    fn test_display() {
        let dist = ClassDistribution::new(vec![280, 100, 100, 10, 10]);
        assert_eq!(dist.to_string(), "{0:280, 1:100, 2:100, 3:10, 4:10}");
    }
}
