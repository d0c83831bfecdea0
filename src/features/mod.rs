//! Feature vector assembly
//!
//! The classifier consumes a positional row. Its column order was fixed at
//! training time and ships as the `feature_order` artifact. Assembly turns
//! user selections and numeric inputs into a vector that follows that order
//! exactly; a wrong order would score silently, so every mismatch is an
//! explicit error.
//!
//! # Rules
//!
//! - Categorical selections are encoded into `<axis>_encoded` columns
//! - Numeric features default to 0.0 when not supplied
//! - Inputs naming columns outside the feature order are rejected
//! - Output order is the feature order, nothing else

mod assembler;
mod errors;
mod order;
mod vector;

pub use assembler::{assemble, AssembleError, NumericInputs, Selections, DEFAULT_NUMERIC_VALUE};
pub use errors::SchemaMismatchError;
pub use order::FeatureOrder;
pub use vector::FeatureVector;
