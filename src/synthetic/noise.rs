//! Controlled label noise.

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LabelShiftError, Result};

/// Overwrites a fixed number of labels with uniform random classes.
///
/// Positions are chosen uniformly without replacement. Each replacement is
/// drawn from `{0, .., n_classes - 1}` independently of the original label,
/// so a draw may reproduce it; it is never resampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseInjector {
    /// Number of positions to overwrite
    pub n_noisy: usize,
    /// Number of classes replacement labels are drawn from
    pub n_classes: usize,
}

/// Predictions produced by [`NoiseInjector::inject_tracked`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoisyLabels {
    /// Predicted labels
    pub predicted: Vec<usize>,
    /// Overwritten positions, ascending
    pub positions: Vec<usize>,
}

impl NoisyLabels {
    /// Number of perturbed positions whose label actually changed.
    #[must_use]
    pub fn n_changed(&self, y_true: &[usize]) -> usize {
        self.positions
            .iter()
            .filter(|&&i| self.predicted[i] != y_true[i])
            .count()
    }
}

impl NoiseInjector {
    /// Create an injector overwriting `n_noisy` positions with labels in
    /// `[0, n_classes - 1]`.
    #[must_use]
    pub fn new(n_noisy: usize, n_classes: usize) -> Self {
        Self { n_noisy, n_classes }
    }

    /// Copy `y_true` and overwrite `n_noisy` random positions.
    ///
    /// # Errors
    ///
    /// Returns [`LabelShiftError::InvalidInput`] if `n_classes` is zero,
    /// `n_noisy` exceeds the sequence length, or a true label is out of range.
    pub fn inject<R: Rng + ?Sized>(&self, y_true: &[usize], rng: &mut R) -> Result<Vec<usize>> {
        Ok(self.inject_tracked(y_true, rng)?.predicted)
    }

    /// Like [`inject`](Self::inject) but also reports which positions were
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Same as [`inject`](Self::inject).
    pub fn inject_tracked<R: Rng + ?Sized>(
        &self,
        y_true: &[usize],
        rng: &mut R,
    ) -> Result<NoisyLabels> {
        self.validate(y_true)?;

        let mut predicted = y_true.to_vec();
        let mut positions = index::sample(rng, y_true.len(), self.n_noisy).into_vec();
        for &i in &positions {
            predicted[i] = rng.gen_range(0..self.n_classes);
        }
        positions.sort_unstable();

        Ok(NoisyLabels {
            predicted,
            positions,
        })
    }

    fn validate(&self, y_true: &[usize]) -> Result<()> {
        if self.n_classes == 0 {
            return Err(LabelShiftError::invalid_parameter("n_classes", 0, ">= 1"));
        }
        if self.n_noisy > y_true.len() {
            return Err(LabelShiftError::invalid_parameter(
                "n_noisy",
                self.n_noisy,
                &format!("<= sequence length {}", y_true.len()),
            ));
        }
        if let Some(&label) = y_true.iter().find(|&&l| l >= self.n_classes) {
            return Err(LabelShiftError::label_out_of_range(label, self.n_classes));
        }
        Ok(())
    }
}
