//! Asset loader for reading the bundle from disk at startup

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;

use crate::encoding::{Axis, CategoryEncoder, EncoderFile, PerAxis};
use crate::features::FeatureOrder;
use crate::prediction::{ForestFile, RandomForest};

use super::artifacts::Artifact;
use super::bundle::AssetBundle;
use super::errors::AssetLoadError;

/// Loads the asset bundle once and hands out shared references.
///
/// The first `load` reads the asset directory; its outcome, success or
/// failure, is kept for every later call.
pub struct AssetLoader {
    /// Directory containing the artifact files
    asset_dir: PathBuf,
    loaded: OnceLock<Result<Arc<AssetBundle>, AssetLoadError>>,
}

impl AssetLoader {
    /// Creates a loader for the given asset directory. Nothing is read yet.
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            loaded: OnceLock::new(),
        }
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    /// Returns the bundle, reading it on first call.
    pub fn load(&self) -> Result<Arc<AssetBundle>, AssetLoadError> {
        self.loaded
            .get_or_init(|| read_bundle(&self.asset_dir).map(Arc::new))
            .clone()
    }

    /// Returns true once a load has been attempted
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }
}

/// Reads and checks every artifact in `asset_dir`.
///
/// The first missing or invalid artifact fails the whole bundle.
pub fn read_bundle(asset_dir: &Path) -> Result<AssetBundle, AssetLoadError> {
    let forest_file: ForestFile = read_artifact(asset_dir, Artifact::Classifier)?;
    let classifier = RandomForest::from_file(forest_file)
        .map_err(|reason| AssetLoadError::corrupt(Artifact::Classifier, reason))?;

    let feature_order: FeatureOrder = read_artifact(asset_dir, Artifact::FeatureOrder)?;

    let encoders = PerAxis::new(
        read_encoder(asset_dir, Axis::Drug)?,
        read_encoder(asset_dir, Axis::Oil)?,
        read_encoder(asset_dir, Axis::Surfactant)?,
    );

    let vocabularies = PerAxis::new(
        read_artifact(asset_dir, Artifact::Vocabulary(Axis::Drug))?,
        read_artifact(asset_dir, Artifact::Vocabulary(Axis::Oil))?,
        read_artifact(asset_dir, Artifact::Vocabulary(Axis::Surfactant))?,
    );

    AssetBundle::new(Box::new(classifier), feature_order, encoders, vocabularies)
}

fn read_encoder(asset_dir: &Path, axis: Axis) -> Result<CategoryEncoder, AssetLoadError> {
    let artifact = Artifact::Encoder(axis);
    let file: EncoderFile = read_artifact(asset_dir, artifact)?;
    CategoryEncoder::from_file(axis, file).map_err(|reason| AssetLoadError::corrupt(artifact, reason))
}

/// Reads and deserializes a single artifact file.
fn read_artifact<T: DeserializeOwned>(
    asset_dir: &Path,
    artifact: Artifact,
) -> Result<T, AssetLoadError> {
    let path = asset_dir.join(artifact.file_name());

    let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AssetLoadError::Missing {
            artifact,
            path: path.display().to_string(),
        },
        _ => AssetLoadError::Unreadable {
            artifact,
            reason: format!("{}: {}", path.display(), e),
        },
    })?;

    serde_json::from_str(&content)
        .map_err(|e| AssetLoadError::corrupt(artifact, format!("Invalid JSON: {}", e)))
}
