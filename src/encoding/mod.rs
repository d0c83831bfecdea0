//! Category encoding for formulation axes
//!
//! Each categorical axis (drug, oil, surfactant) has an encoder built from
//! the vocabulary the classifier was trained on. A label's code is its
//! position in that vocabulary.
//!
//! # Guarantees
//!
//! - Same label, same code, for the lifetime of an encoder
//! - Labels outside the vocabulary are rejected, never coerced
//! - Encoding is a pure lookup

mod axis;
mod encoder;
mod errors;

pub use axis::{is_encoded_feature, Axis, PerAxis, ENCODED_SUFFIX};
pub use encoder::{CategoryEncoder, EncoderFile};
pub use errors::UnknownCategoryError;
