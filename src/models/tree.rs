use crate::error::{ConfigurationError, InferenceError};
use crate::models::{check_width, ModelInfo, Regressor};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Goes `left` when `row[feature] <= threshold`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf { value: f64 },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Gradient boosting: `base_score + Σ learning_rate * tree`.
    Sum,
    /// Random forest: average of the trees.
    Mean,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeEnsembleRegressor {
    pub n_features: usize,
    pub trees: Vec<Tree>,
    pub aggregation: Aggregation,
    #[serde(default)]
    pub base_score: f64,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
}

fn default_learning_rate() -> f64 {
    1.0
}

impl Tree {
    fn evaluate(&self, row: &[f64]) -> Result<f64, InferenceError> {
        let mut idx = 0;
        // validated trees are acyclic, but never walk further than the node count
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    idx = if row[*feature] <= *threshold { *left } else { *right };
                }
                None => break,
            }
        }
        Err(InferenceError::Model {
            model: "tree_ensemble",
            message: "tree traversal did not reach a leaf".to_string(),
        })
    }

    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("empty tree".to_string());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(format!("node {i} splits on feature {feature} of {n_features}"));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {i} has a non-finite threshold"));
                    }
                    // children must point forward, which rules out cycles
                    if *left <= i || *right <= i || *left >= self.nodes.len() || *right >= self.nodes.len() {
                        return Err(format!("node {i} has out of order children"));
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(format!("leaf {i} is non-finite"));
                    }
                }
            }
        }
        Ok(())
    }
}

impl TreeEnsembleRegressor {
    pub(crate) fn validate(&self, role: &'static str) -> Result<(), ConfigurationError> {
        let invalid = |reason: String| ConfigurationError::InvalidModel { role, reason };
        if self.trees.is_empty() {
            return Err(invalid("ensemble has no trees".to_string()));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.n_features {
                return Err(invalid(format!(
                    "{} feature names for {} features",
                    names.len(),
                    self.n_features
                )));
            }
        }
        for (t, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features)
                .map_err(|e| invalid(format!("tree {t}: {e}")))?;
        }
        Ok(())
    }
}

impl ModelInfo for TreeEnsembleRegressor {
    fn kind(&self) -> &str {
        "tree_ensemble"
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}

impl Regressor for TreeEnsembleRegressor {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, row: &[f64]) -> Result<f64, InferenceError> {
        check_width("tree_ensemble", self.n_features, row)?;
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.evaluate(row)?;
        }
        let out = match self.aggregation {
            Aggregation::Sum => self.base_score + self.learning_rate * total,
            Aggregation::Mean => self.base_score + total / self.trees.len() as f64,
        };
        Ok(out)
    }
}
