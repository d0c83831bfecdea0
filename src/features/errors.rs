//! Schema mismatch errors
//!
//! Raised when the assembled feature set does not line up with the
//! training-time feature order.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaMismatchError {
    /// Input names a column the classifier was not trained on
    #[error("Input '{0}' is not a model feature")]
    UnknownFeature(String),

    /// Input supplies a category code column directly
    #[error("Input '{0}' is categorical and must be chosen by selection")]
    CategoricalAsNumeric(String),

    /// Input value is NaN or infinite
    #[error("Input '{0}' is not a finite number")]
    NonFinite(String),

    /// A feature order column has no value after merging
    #[error("Feature '{0}' is missing from the assembled vector")]
    MissingFeature(String),

    /// An axis code has no column in the feature order
    #[error("Encoded feature '{0}' has no column in the feature order")]
    UnplacedEncoding(String),
}
