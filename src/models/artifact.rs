//! JSON interchange format for exported models.
//!
//! Each artifact is a single object tagged by `kind`:
//!
//! ```json
//! {"kind": "logistic_regression", "coef": [...], "intercept": -0.6, "classes": ["0", "1"]}
//! ```

use crate::error::ConfigurationError;
use crate::models::linear::{LinearRegression, LogisticRegression};
use crate::models::tree::TreeEnsembleRegressor;
use crate::models::{ProbabilisticClassifier, Regressor};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Margin-only linear classifier. Loads, but cannot serve as the approval model.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearSvm {
    pub coef: Vec<f64>,
    pub intercept: f64,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression(LogisticRegression),
    LinearSvm(LinearSvm),
    LinearRegression(LinearRegression),
    TreeEnsemble(TreeEnsembleRegressor),
}

impl ModelArtifact {
    pub fn load(role: &'static str, path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigurationError::ArtifactMissing {
            role,
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(role, path, &raw)
    }

    fn parse(role: &'static str, path: &Path, raw: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(raw).map_err(|source| ConfigurationError::ArtifactFormat {
            role,
            path: path.display().to_string(),
            source,
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::LogisticRegression(_) => "logistic_regression",
            ModelArtifact::LinearSvm(_) => "linear_svm",
            ModelArtifact::LinearRegression(_) => "linear_regression",
            ModelArtifact::TreeEnsemble(_) => "tree_ensemble",
        }
    }

    pub fn into_classifier(self, role: &'static str) -> Result<Arc<dyn ProbabilisticClassifier>, ConfigurationError> {
        match self {
            ModelArtifact::LogisticRegression(m) => {
                m.validate(role)?;
                Ok(Arc::new(m))
            }
            other => Err(ConfigurationError::MissingCapability {
                role,
                kind: other.kind().to_string(),
                capability: "predict_proba",
            }),
        }
    }

    pub fn into_regressor(self, role: &'static str) -> Result<Arc<dyn Regressor>, ConfigurationError> {
        match self {
            ModelArtifact::LinearRegression(m) => {
                m.validate(role)?;
                Ok(Arc::new(m))
            }
            ModelArtifact::TreeEnsemble(m) => {
                m.validate(role)?;
                Ok(Arc::new(m))
            }
            other => Err(ConfigurationError::MissingCapability {
                role,
                kind: other.kind().to_string(),
                capability: "predict",
            }),
        }
    }
}
