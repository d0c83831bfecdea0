//! Stability prediction
//!
//! Scores an assembled feature vector with the bundle's classifier and
//! thresholds the "stable" class probability into a verdict.
//!
//! # Threshold
//!
//! `stable` iff probability > 0.5. A probability of exactly 0.5 is
//! `unstable`.

mod classifier;
mod errors;
mod forest;
mod predictor;
mod verdict;

pub use classifier::Classifier;
pub use errors::{ClassifierError, InferenceError};
pub use forest::{DecisionTree, ForestFile, RandomForest, TreeFile};
pub use predictor::predict;
pub use verdict::{StabilityLabel, Verdict, STABILITY_THRESHOLD};
