//! Inference errors

use thiserror::Error;

/// Failure raised inside a classifier implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    /// Row width differs from the trained width
    #[error("expected {expected} features, got {actual}")]
    Shape { expected: usize, actual: usize },

    /// Any other model failure
    #[error("{0}")]
    Model(String),
}

/// Failure to score a feature vector
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    /// Vector width differs from the feature order
    #[error("Feature vector has {actual} values, feature order has {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Vector column at `position` is not the one the order designates
    #[error("Feature vector column {position} is '{found}', feature order expects '{expected}'")]
    OrderMismatch {
        position: usize,
        expected: String,
        found: String,
    },

    /// Classifier raised an error
    #[error("Classifier failed: {0}")]
    Classifier(#[from] ClassifierError),

    /// Classifier returned something that is not a probability
    #[error("Classifier returned invalid probability {0}")]
    InvalidProbability(f64),
}
