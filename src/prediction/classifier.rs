//! Classifier seam

use std::fmt::Debug;

use super::errors::ClassifierError;

/// A trained binary stability classifier.
///
/// Implementations take one row in feature order and return the probability
/// of the "stable" class. The bundle shares one classifier across requests,
/// so implementations must be immutable after construction.
pub trait Classifier: Debug + Send + Sync {
    /// Number of columns the model was trained on
    fn n_features(&self) -> usize;

    /// Probability of the "stable" class for one row
    fn stable_probability(&self, row: &[f64]) -> Result<f64, ClassifierError>;
}
