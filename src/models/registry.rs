use crate::config::AppConfig;
use crate::error::ConfigurationError;
use crate::models::artifact::ModelArtifact;
use crate::models::{ProbabilisticClassifier, Regressor};
use std::sync::Arc;

pub const APPROVAL_ROLE: &str = "approval";
pub const RATE_ROLE: &str = "interest_rate";

/// The two read-only models, loaded once at startup.
#[derive(Clone)]
pub struct ModelRegistry {
    pub approval: Arc<dyn ProbabilisticClassifier>,
    pub rate: Arc<dyn Regressor>,
}

impl ModelRegistry {
    pub fn new(approval: Arc<dyn ProbabilisticClassifier>, rate: Arc<dyn Regressor>) -> Self {
        Self { approval, rate }
    }

    /// Loads both artifacts; if either fails nothing is returned.
    pub fn load(cfg: &AppConfig) -> Result<Self, ConfigurationError> {
        let approval = ModelArtifact::load(APPROVAL_ROLE, &cfg.approval_model_path)?.into_classifier(APPROVAL_ROLE)?;
        let rate = ModelArtifact::load(RATE_ROLE, &cfg.rate_model_path)?.into_regressor(RATE_ROLE)?;
        tracing::info!(
            "models loaded: approval={} ({}) rate={} ({})",
            approval.kind(),
            cfg.approval_model_path,
            rate.kind(),
            cfg.rate_model_path
        );
        Ok(Self { approval, rate })
    }
}
