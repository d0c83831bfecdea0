//! Random forest classifier loaded from exported tree arrays.
//!
//! The forest is trained offline and exported as JSON using the parallel
//! array layout of sklearn's `tree_` objects (`feature`, `threshold`,
//! `children_left`, `children_right`, `value`). This module only performs
//! inference.
//!
//! Class probabilities follow `predict_proba`: each tree contributes the
//! normalized class distribution of the leaf the row lands in, and the
//! forest averages those distributions.

use serde::{Deserialize, Serialize};

use super::classifier::Classifier;
use super::errors::ClassifierError;

/// Marker sklearn uses for "no child"
const NO_CHILD: i64 = -1;

fn default_stable_class() -> String {
    "1".to_string()
}

/// Exported arrays for one tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeFile {
    /// Split feature per node (negative for leaves)
    pub feature: Vec<i64>,
    /// Split threshold per node (rows with value <= threshold go left)
    pub threshold: Vec<f64>,
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    /// Class weights per node, one entry per class
    pub value: Vec<Vec<f64>>,
}

/// Exported forest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestFile {
    pub n_features: usize,
    /// Class labels in column order of `value`
    pub classes: Vec<String>,
    /// Label of the class that means "stable"
    #[serde(default = "default_stable_class")]
    pub stable_class: String,
    pub trees: Vec<TreeFile>,
}

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        distribution: Vec<f64>,
    },
}

/// A single decision tree
#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    /// Builds a tree from its exported arrays.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the arrays have inconsistent lengths, a split points
    /// outside the tree or backwards, a split feature is out of range, or a
    /// leaf has no usable class weights.
    pub fn from_file(file: &TreeFile, n_features: usize, n_classes: usize) -> Result<Self, String> {
        let n = file.feature.len();
        if n == 0 {
            return Err("tree has no nodes".into());
        }
        if file.threshold.len() != n
            || file.children_left.len() != n
            || file.children_right.len() != n
            || file.value.len() != n
        {
            return Err("inconsistent array lengths".into());
        }

        let mut nodes = Vec::with_capacity(n);
        for i in 0..n {
            let (left, right) = (file.children_left[i], file.children_right[i]);

            if left == NO_CHILD && right == NO_CHILD {
                let weights = &file.value[i];
                if weights.len() != n_classes {
                    return Err(format!(
                        "leaf {} has {} class weights, expected {}",
                        i,
                        weights.len(),
                        n_classes
                    ));
                }
                if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                    return Err(format!("leaf {} has invalid class weights", i));
                }
                let total: f64 = weights.iter().sum();
                if total <= 0.0 {
                    return Err(format!("leaf {} has zero total weight", i));
                }
                nodes.push(Node::Leaf {
                    distribution: weights.iter().map(|w| w / total).collect(),
                });
                continue;
            }

            let feature = usize::try_from(file.feature[i])
                .ok()
                .filter(|f| *f < n_features)
                .ok_or_else(|| format!("node {} splits on invalid feature {}", i, file.feature[i]))?;
            let threshold = file.threshold[i];
            if threshold.is_nan() {
                return Err(format!("node {} has NaN threshold", i));
            }

            // Children always follow their parent, so traversal terminates.
            let child = |c: i64| {
                usize::try_from(c)
                    .ok()
                    .filter(|c| *c > i && *c < n)
                    .ok_or_else(|| format!("node {} has invalid child {}", i, c))
            };

            nodes.push(Node::Split {
                feature,
                threshold,
                left: child(left)?,
                right: child(right)?,
            });
        }

        Ok(Self { nodes })
    }

    /// Class distribution of the leaf the row lands in
    fn leaf_distribution(&self, row: &[f64]) -> &[f64] {
        let mut idx = 0usize;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { distribution } => return distribution,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[*feature] <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

/// Averaging ensemble of decision trees
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_features: usize,
    classes: Vec<String>,
    stable_index: usize,
}

impl RandomForest {
    /// Builds a forest from its exported form.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the forest is empty, is not binary, does not name its
    /// stable class among `classes`, or contains an invalid tree.
    pub fn from_file(file: ForestFile) -> Result<Self, String> {
        if file.n_features == 0 {
            return Err("forest expects zero features".into());
        }
        if file.trees.is_empty() {
            return Err("empty forest".into());
        }
        if file.classes.len() != 2 {
            return Err(format!(
                "binary classifier required, found {} classes",
                file.classes.len()
            ));
        }
        let stable_index = file
            .classes
            .iter()
            .position(|c| *c == file.stable_class)
            .ok_or_else(|| format!("stable class '{}' not among classes", file.stable_class))?;

        let trees = file
            .trees
            .iter()
            .enumerate()
            .map(|(i, tree)| {
                DecisionTree::from_file(tree, file.n_features, file.classes.len())
                    .map_err(|e| format!("tree {}: {}", i, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            trees,
            n_features: file.n_features,
            classes: file.classes,
            stable_index,
        })
    }

    /// Mean leaf distribution over all trees.
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::Shape` if the row width is wrong.
    pub fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>, ClassifierError> {
        if row.len() != self.n_features {
            return Err(ClassifierError::Shape {
                expected: self.n_features,
                actual: row.len(),
            });
        }

        let mut proba = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            for (total, p) in proba.iter_mut().zip(tree.leaf_distribution(row)) {
                *total += p;
            }
        }
        let n_trees = self.trees.len() as f64;
        for p in &mut proba {
            *p /= n_trees;
        }
        Ok(proba)
    }
}

impl Classifier for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn stable_probability(&self, row: &[f64]) -> Result<f64, ClassifierError> {
        Ok(self.predict_proba(row)?[self.stable_index])
    }
}
