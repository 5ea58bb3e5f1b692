//! Error types for label-shift operations.
//!
//! Every failure in this crate is a caller contract violation, so there is a
//! single error kind: [`LabelShiftError::InvalidInput`].

use thiserror::Error;

/// Main error type for label-shift operations.
///
/// # Examples
///
/// ```
/// use label_shift::error::LabelShiftError;
///
/// let err = LabelShiftError::length_mismatch(500, 499);
/// assert!(err.to_string().contains("Invalid input"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelShiftError {
    /// Label sequences or parameters that violate a function's contract.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LabelShiftError {
    /// True and predicted sequences differ in length.
    #[must_use]
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::InvalidInput(format!(
            "length mismatch: y_true has {expected} labels, y_pred has {actual}"
        ))
    }

    /// A label lies outside `[0, n_classes - 1]`.
    #[must_use]
    pub fn label_out_of_range(label: usize, n_classes: usize) -> Self {
        Self::InvalidInput(format!(
            "label {label} out of range for {n_classes} classes"
        ))
    }

    /// An empty sequence was passed where at least one label is required.
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::InvalidInput(format!("empty input: {context}"))
    }

    /// A scalar parameter violates its constraint.
    #[must_use]
    pub fn invalid_parameter(param: &str, value: impl std::fmt::Display, constraint: &str) -> Self {
        Self::InvalidInput(format!("{param} = {value}, expected {constraint}"))
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, LabelShiftError>;
