use thiserror::Error;

/// Fatal startup errors. Any of these leaves the service without a pipeline.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("model artifact for {role} not found at {path}: {source}")]
    ArtifactMissing {
        role: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact for {role} at {path} is malformed: {source}")]
    ArtifactFormat {
        role: &'static str,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{role} model of kind {kind} lacks required capability {capability}")]
    MissingCapability {
        role: &'static str,
        kind: String,
        capability: &'static str,
    },

    #[error("{role} model is inconsistent: {reason}")]
    InvalidModel { role: &'static str, reason: String },

    #[error("{role} model was trained on features {found:?}, expected {expected:?}")]
    FeatureOrderMismatch {
        role: &'static str,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("{role} model expects {found} features, expected {expected}")]
    FeatureCountMismatch {
        role: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("approval model has no positive class {class:?} (classes: {classes:?})")]
    PositiveClassMissing { class: String, classes: Vec<String> },

    #[error("unknown tier-1 policy {0:?}, expected rule_gated or model_always")]
    UnknownPolicy(String),
}

/// Per-request failures raised inside a model call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InferenceError {
    #[error("{model} received {found} features, expected {expected}")]
    InputWidth {
        model: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{model} returned {found} outputs, expected {expected}")]
    OutputWidth {
        model: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{model} produced an invalid value: {value}")]
    InvalidOutput { model: &'static str, value: f64 },

    #[error("{model} failed: {message}")]
    Model { model: &'static str, message: String },
}
