//! Asset load errors
//!
//! Every variant names the artifact that failed. A load error disables
//! prediction but never terminates the process.

use thiserror::Error;

use super::artifacts::Artifact;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetLoadError {
    /// Artifact file does not exist
    #[error("Asset '{artifact}' not found at {path}")]
    Missing { artifact: Artifact, path: String },

    /// Artifact file exists but could not be read
    #[error("Asset '{artifact}' could not be read: {reason}")]
    Unreadable { artifact: Artifact, reason: String },

    /// Artifact could not be deserialized or is structurally invalid
    #[error("Asset '{artifact}' is corrupt: {reason}")]
    Corrupt { artifact: Artifact, reason: String },

    /// Artifact contradicts another artifact of the bundle
    #[error("Asset '{artifact}' is inconsistent with the bundle: {reason}")]
    Inconsistent { artifact: Artifact, reason: String },
}

impl AssetLoadError {
    pub fn corrupt(artifact: Artifact, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            artifact,
            reason: reason.into(),
        }
    }

    pub fn inconsistent(artifact: Artifact, reason: impl Into<String>) -> Self {
        Self::Inconsistent {
            artifact,
            reason: reason.into(),
        }
    }

    /// The artifact that failed
    pub fn artifact(&self) -> Artifact {
        match self {
            AssetLoadError::Missing { artifact, .. }
            | AssetLoadError::Unreadable { artifact, .. }
            | AssetLoadError::Corrupt { artifact, .. }
            | AssetLoadError::Inconsistent { artifact, .. } => *artifact,
        }
    }
}
