//! Artifact names and file locations

use std::fmt;

use crate::encoding::Axis;

/// One required startup artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Classifier,
    FeatureOrder,
    Encoder(Axis),
    Vocabulary(Axis),
}

impl Artifact {
    /// Every artifact a bundle needs, in load order
    pub const ALL: [Artifact; 8] = [
        Artifact::Classifier,
        Artifact::FeatureOrder,
        Artifact::Encoder(Axis::Drug),
        Artifact::Encoder(Axis::Oil),
        Artifact::Encoder(Axis::Surfactant),
        Artifact::Vocabulary(Axis::Drug),
        Artifact::Vocabulary(Axis::Oil),
        Artifact::Vocabulary(Axis::Surfactant),
    ];

    /// Artifact name, e.g. `encoder_surfactant`
    pub fn name(&self) -> String {
        match self {
            Artifact::Classifier => "classifier".to_string(),
            Artifact::FeatureOrder => "feature_order".to_string(),
            Artifact::Encoder(axis) => format!("encoder_{}", axis),
            Artifact::Vocabulary(axis) => format!("vocabulary_{}", axis),
        }
    }

    /// File name inside the asset directory
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
