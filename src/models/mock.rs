use crate::error::InferenceError;
use crate::models::{ModelInfo, ProbabilisticClassifier, Regressor};
use std::sync::Mutex;

/// Test double: always answers with `probability` for the positive class and
/// records each row it is given.
///
/// `behavior` is `"ALWAYS_ERROR"`, `"ALWAYS_PANIC"` or anything else for normal output.
pub struct MockClassifier {
    pub probability: f64,
    pub classes: Vec<String>,
    pub behavior: String,
    calls: Mutex<Vec<Vec<f64>>>,
}

impl MockClassifier {
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            classes: vec!["0".to_string(), "1".to_string()],
            behavior: "NORMAL".to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_behavior(mut self, behavior: &str) -> Self {
        self.behavior = behavior.to_string();
        self
    }

    pub fn calls(&self) -> Vec<Vec<f64>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl ModelInfo for MockClassifier {
    fn kind(&self) -> &str {
        "mock_classifier"
    }
}

impl ProbabilisticClassifier for MockClassifier {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(row.to_vec());
        }
        match self.behavior.as_str() {
            "ALWAYS_ERROR" => Err(InferenceError::Model {
                model: "mock_classifier",
                message: "mock failure".to_string(),
            }),
            "ALWAYS_PANIC" => panic!("mock classifier panicked"),
            _ => Ok(vec![1.0 - self.probability, self.probability]),
        }
    }
}

/// Test double: always predicts `rate` and records each row it is given.
pub struct MockRegressor {
    pub rate: f64,
    pub n_features: usize,
    pub behavior: String,
    calls: Mutex<Vec<Vec<f64>>>,
}

impl MockRegressor {
    pub fn new(rate: f64, n_features: usize) -> Self {
        Self {
            rate,
            n_features,
            behavior: "NORMAL".to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_behavior(mut self, behavior: &str) -> Self {
        self.behavior = behavior.to_string();
        self
    }

    pub fn calls(&self) -> Vec<Vec<f64>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl ModelInfo for MockRegressor {
    fn kind(&self) -> &str {
        "mock_regressor"
    }
}

impl Regressor for MockRegressor {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, row: &[f64]) -> Result<f64, InferenceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(row.to_vec());
        }
        match self.behavior.as_str() {
            "ALWAYS_ERROR" => Err(InferenceError::Model {
                model: "mock_regressor",
                message: "mock failure".to_string(),
            }),
            "ALWAYS_PANIC" => panic!("mock regressor panicked"),
            _ => Ok(self.rate),
        }
    }
}
