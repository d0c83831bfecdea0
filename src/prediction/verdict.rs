//! Thresholded stability verdict

use std::fmt;

use serde::{Deserialize, Serialize};

/// Probability the "stable" class must strictly exceed
pub const STABILITY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StabilityLabel {
    Stable,
    Unstable,
}

impl StabilityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StabilityLabel::Stable => "STABLE",
            StabilityLabel::Unstable => "UNSTABLE",
        }
    }
}

impl fmt::Display for StabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stability probability and the label derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verdict {
    probability: f64,
    label: StabilityLabel,
}

impl Verdict {
    /// Thresholds a probability already known to lie in [0, 1].
    pub fn from_probability(probability: f64) -> Self {
        let label = if probability > STABILITY_THRESHOLD {
            StabilityLabel::Stable
        } else {
            StabilityLabel::Unstable
        };
        Self { probability, label }
    }

    /// Probability of the "stable" class
    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn label(&self) -> StabilityLabel {
        self.label
    }

    pub fn is_stable(&self) -> bool {
        self.label == StabilityLabel::Stable
    }

    /// Stable-class probability as a percentage
    pub fn confidence_percent(&self) -> f64 {
        self.probability * 100.0
    }

    /// Percentage with one decimal, e.g. `73.0%`
    pub fn confidence_display(&self) -> String {
        format!("{:.1}%", self.confidence_percent())
    }
}
