use crate::error::{ConfigurationError, InferenceError};
use crate::models::{check_width, ModelInfo, ProbabilisticClassifier, Regressor};
use serde::Deserialize;

/// Per-column standardisation applied before the linear term.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    fn transform(&self, i: usize, x: f64) -> f64 {
        (x - self.mean[i]) / self.scale[i]
    }

    fn validate(&self, role: &'static str, width: usize) -> Result<(), ConfigurationError> {
        if self.mean.len() != width || self.scale.len() != width {
            return Err(ConfigurationError::InvalidModel {
                role,
                reason: format!("scaler width does not match {width} coefficients"),
            });
        }
        if self.scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
            return Err(ConfigurationError::InvalidModel {
                role,
                reason: "scaler contains a zero or non-finite scale".to_string(),
            });
        }
        Ok(())
    }
}

/// Binary logistic regression. `predict_proba` columns follow `classes`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticRegression {
    pub coef: Vec<f64>,
    pub intercept: f64,
    pub classes: Vec<String>,
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
}

impl LogisticRegression {
    pub(crate) fn validate(&self, role: &'static str) -> Result<(), ConfigurationError> {
        if self.classes.len() != 2 {
            return Err(ConfigurationError::InvalidModel {
                role,
                reason: format!("expected 2 classes, found {}", self.classes.len()),
            });
        }
        if let Some(scaler) = &self.scaler {
            scaler.validate(role, self.coef.len())?;
        }
        validate_linear_terms(role, &self.coef, self.intercept, self.feature_names.as_deref())
    }

    pub fn decision_function(&self, row: &[f64]) -> Result<f64, InferenceError> {
        check_width("logistic_regression", self.coef.len(), row)?;
        let z = self
            .coef
            .iter()
            .zip(row)
            .enumerate()
            .map(|(i, (w, x))| {
                let x = match &self.scaler {
                    Some(s) => s.transform(i, *x),
                    None => *x,
                };
                w * x
            })
            .sum::<f64>();
        Ok(z + self.intercept)
    }
}

impl ModelInfo for LogisticRegression {
    fn kind(&self) -> &str {
        "logistic_regression"
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn input_width(&self) -> Option<usize> {
        Some(self.coef.len())
    }
}

impl ProbabilisticClassifier for LogisticRegression {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>, InferenceError> {
        let p = sigmoid(self.decision_function(row)?);
        Ok(vec![1.0 - p, p])
    }
}

/// Ordinary least squares style linear model.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearRegression {
    pub coef: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
}

impl LinearRegression {
    pub(crate) fn validate(&self, role: &'static str) -> Result<(), ConfigurationError> {
        validate_linear_terms(role, &self.coef, self.intercept, self.feature_names.as_deref())
    }
}

impl ModelInfo for LinearRegression {
    fn kind(&self) -> &str {
        "linear_regression"
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}

impl Regressor for LinearRegression {
    fn n_features(&self) -> usize {
        self.coef.len()
    }

    fn predict(&self, row: &[f64]) -> Result<f64, InferenceError> {
        check_width("linear_regression", self.coef.len(), row)?;
        let y = self.coef.iter().zip(row).map(|(w, x)| w * x).sum::<f64>();
        Ok(y + self.intercept)
    }
}

fn validate_linear_terms(
    role: &'static str,
    coef: &[f64],
    intercept: f64,
    feature_names: Option<&[String]>,
) -> Result<(), ConfigurationError> {
    if coef.is_empty() {
        return Err(ConfigurationError::InvalidModel {
            role,
            reason: "no coefficients".to_string(),
        });
    }
    if !intercept.is_finite() || coef.iter().any(|w| !w.is_finite()) {
        return Err(ConfigurationError::InvalidModel {
            role,
            reason: "non-finite coefficient".to_string(),
        });
    }
    if let Some(names) = feature_names {
        if names.len() != coef.len() {
            return Err(ConfigurationError::InvalidModel {
                role,
                reason: format!("{} feature names for {} coefficients", names.len(), coef.len()),
            });
        }
    }
    Ok(())
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
