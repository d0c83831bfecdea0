//! Encoding errors

use thiserror::Error;

use super::axis::Axis;

/// A label that is not part of an axis's training vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {axis} category '{label}'")]
pub struct UnknownCategoryError {
    pub axis: Axis,
    pub label: String,
}

impl UnknownCategoryError {
    pub fn new(axis: Axis, label: impl Into<String>) -> Self {
        Self {
            axis,
            label: label.into(),
        }
    }
}
