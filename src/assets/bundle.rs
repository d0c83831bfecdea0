//! The immutable set of inference artifacts

use std::fmt;

use crate::encoding::{Axis, CategoryEncoder, PerAxis, UnknownCategoryError};
use crate::features::FeatureOrder;
use crate::prediction::Classifier;

use super::artifacts::Artifact;
use super::errors::AssetLoadError;

/// Everything inference needs, checked for mutual consistency.
pub struct AssetBundle {
    classifier: Box<dyn Classifier>,
    feature_order: FeatureOrder,
    encoders: PerAxis<CategoryEncoder>,
    vocabularies: PerAxis<Vec<String>>,
}

impl AssetBundle {
    /// Assembles a bundle and checks the artifacts against each other.
    ///
    /// # Errors
    ///
    /// Returns `AssetLoadError` naming the offending artifact when:
    /// - the feature order is malformed or does not carry each axis column
    /// - the classifier width differs from the feature order length
    /// - an encoder was built for a different axis
    /// - a vocabulary is empty or offers a label its encoder cannot encode
    pub fn new(
        classifier: Box<dyn Classifier>,
        feature_order: FeatureOrder,
        encoders: PerAxis<CategoryEncoder>,
        vocabularies: PerAxis<Vec<String>>,
    ) -> Result<Self, AssetLoadError> {
        feature_order
            .validate()
            .map_err(|reason| AssetLoadError::corrupt(Artifact::FeatureOrder, reason))?;

        if classifier.n_features() != feature_order.len() {
            return Err(AssetLoadError::inconsistent(
                Artifact::Classifier,
                format!(
                    "classifier expects {} features, feature order (version {}) has {}",
                    classifier.n_features(),
                    feature_order.version(),
                    feature_order.len()
                ),
            ));
        }

        for (axis, encoder) in encoders.iter() {
            if encoder.axis() != axis {
                return Err(AssetLoadError::inconsistent(
                    Artifact::Encoder(axis),
                    format!("encoder was built for the {} axis", encoder.axis()),
                ));
            }
        }

        for (axis, vocabulary) in vocabularies.iter() {
            if vocabulary.is_empty() {
                return Err(AssetLoadError::corrupt(
                    Artifact::Vocabulary(axis),
                    "vocabulary is empty",
                ));
            }
            if let Some(label) = vocabulary
                .iter()
                .find(|label| !encoders.get(axis).contains(label))
            {
                return Err(AssetLoadError::inconsistent(
                    Artifact::Vocabulary(axis),
                    format!("label '{}' is unknown to encoder_{}", label, axis),
                ));
            }
        }

        Ok(Self {
            classifier,
            feature_order,
            encoders,
            vocabularies,
        })
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn feature_order(&self) -> &FeatureOrder {
        &self.feature_order
    }

    pub fn encoders(&self) -> &PerAxis<CategoryEncoder> {
        &self.encoders
    }

    /// Labels offered for an axis
    pub fn vocabulary(&self, axis: Axis) -> &[String] {
        self.vocabularies.get(axis)
    }

    /// Encodes a label on the given axis
    pub fn encode(&self, axis: Axis, label: &str) -> Result<u32, UnknownCategoryError> {
        self.encoders.get(axis).encode(label)
    }
}

impl fmt::Debug for AssetBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetBundle")
            .field("classifier", &self.classifier)
            .field("feature_order", &self.feature_order)
            .field("vocabularies", &self.vocabularies)
            .finish()
    }
}
