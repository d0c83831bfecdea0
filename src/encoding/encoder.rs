//! Label encoder for a single axis

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::axis::Axis;
use super::errors::UnknownCategoryError;

/// On-disk form of an encoder: the ordered training classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderFile {
    pub classes: Vec<String>,
}

/// Maps the labels of one axis to stable integer codes.
///
/// The code of a label is its index in `classes`, matching the way the
/// training pipeline assigned codes.
#[derive(Debug, Clone)]
pub struct CategoryEncoder {
    axis: Axis,
    classes: Vec<String>,
    codes: HashMap<String, u32>,
}

impl CategoryEncoder {
    /// Builds an encoder from the training classes.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the class list is empty or has duplicates.
    pub fn new(axis: Axis, classes: Vec<String>) -> Result<Self, String> {
        if classes.is_empty() {
            return Err("encoder has no classes".into());
        }

        let mut codes = HashMap::with_capacity(classes.len());
        for (index, label) in classes.iter().enumerate() {
            let code = u32::try_from(index).map_err(|_| "too many classes".to_string())?;
            if codes.insert(label.clone(), code).is_some() {
                return Err(format!("duplicate class '{}'", label));
            }
        }

        Ok(Self {
            axis,
            classes,
            codes,
        })
    }

    /// Builds an encoder from its deserialized file.
    pub fn from_file(axis: Axis, file: EncoderFile) -> Result<Self, String> {
        Self::new(axis, file.classes)
    }

    /// The axis this encoder serves
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the code for a label.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategoryError` if the label was not seen in training.
    pub fn encode(&self, label: &str) -> Result<u32, UnknownCategoryError> {
        self.codes
            .get(label)
            .copied()
            .ok_or_else(|| UnknownCategoryError::new(self.axis, label))
    }

    /// Returns the label for a code, if any
    pub fn decode(&self, code: u32) -> Option<&str> {
        self.classes.get(code as usize).map(String::as_str)
    }

    /// Returns true if the label is encodable
    pub fn contains(&self, label: &str) -> bool {
        self.codes.contains_key(label)
    }

    /// Training classes in code order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
