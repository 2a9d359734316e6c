use crate::error::InferenceError;

pub mod artifact;
pub mod linear;
pub mod mock;
pub mod registry;
pub mod tree;

/// Introspection shared by every loaded model.
pub trait ModelInfo {
    fn kind(&self) -> &str;

    /// Column names the model was trained with, when the artifact records them.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Number of input columns, when the model's parameters fix it.
    fn input_width(&self) -> Option<usize> {
        None
    }
}

/// A binary or multi-class classifier that can report class probabilities.
pub trait ProbabilisticClassifier: ModelInfo + Send + Sync {
    /// Class labels in the same order as the `predict_proba` columns.
    fn classes(&self) -> &[String];

    fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>, InferenceError>;
}

/// A single-output regressor.
pub trait Regressor: ModelInfo + Send + Sync {
    fn n_features(&self) -> usize;

    fn predict(&self, row: &[f64]) -> Result<f64, InferenceError>;
}

pub(crate) fn check_width(model: &'static str, expected: usize, row: &[f64]) -> Result<(), InferenceError> {
    if row.len() != expected {
        return Err(InferenceError::InputWidth {
            model,
            expected,
            found: row.len(),
        });
    }
    Ok(())
}
