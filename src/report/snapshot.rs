//! Input snapshot printed in a report

use serde::Serialize;

use crate::encoding::Axis;
use crate::features::{FeatureVector, Selections};

/// One "name: value" line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub value: String,
}

/// Ordered inputs of one prediction request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormulationSnapshot {
    entries: Vec<ReportEntry>,
}

impl FormulationSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-encoding view: selection labels in place of their code columns,
    /// numeric features as assembled (defaults included).
    pub fn from_selections(selections: &Selections, vector: &FeatureVector) -> Self {
        let mut snapshot = Self::new();
        for (name, value) in vector.iter() {
            match Axis::from_feature_name(name) {
                Some(axis) => snapshot.push_text(axis.as_str(), selections.get(axis)),
                None => snapshot.push_number(name, value),
            }
        }
        snapshot
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(ReportEntry {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn push_number(&mut self, name: impl Into<String>, value: f64) {
        self.push_text(name, format_number(value));
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Post-encoding view: every column with its numeric value
impl From<&FeatureVector> for FormulationSnapshot {
    fn from(vector: &FeatureVector) -> Self {
        let mut snapshot = Self::new();
        for (name, value) in vector.iter() {
            snapshot.push_number(name, value);
        }
        snapshot
    }
}

/// Formats a number so whole values keep a decimal point (`120.0`).
pub fn format_number(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}
