use crate::config::AppConfig;
use crate::domain::applicant::ApplicantRecord;
use crate::domain::decision::{err, Decision, ErrorEnvelope};
use crate::models::registry::ModelRegistry;
use crate::pipeline::engine::DecisionPipeline;
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Boundary around the pipeline. `pipeline` is `None` when startup failed.
#[derive(Clone)]
pub struct DecisionService {
    pipeline: Option<Arc<DecisionPipeline>>,
}

impl DecisionService {
    pub fn new(pipeline: DecisionPipeline) -> Self {
        Self {
            pipeline: Some(Arc::new(pipeline)),
        }
    }

    pub fn unavailable() -> Self {
        Self { pipeline: None }
    }

    /// Loads both models and builds the pipeline, or refuses every prediction.
    pub fn start(cfg: &AppConfig) -> Self {
        let built = ModelRegistry::load(cfg).and_then(|registry| DecisionPipeline::from_config(&registry, cfg));
        match built {
            Ok(pipeline) => {
                tracing::info!("decision pipeline ready, tier1 policy={}", pipeline.policy().as_str());
                Self::new(pipeline)
            }
            Err(e) => {
                tracing::error!("decision pipeline unavailable, /predict will fail: {}", e);
                Self::unavailable()
            }
        }
    }

    pub fn pipeline(&self) -> Option<&DecisionPipeline> {
        self.pipeline.as_deref()
    }

    pub fn is_ready(&self) -> bool {
        self.pipeline.is_some()
    }

    pub async fn process(&self, body: Option<Value>) -> Result<Decision, (StatusCode, ErrorEnvelope)> {
        let pipeline = self.pipeline.clone().ok_or_else(|| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                err("MODELS_NOT_LOADED", "Models are not loaded. Check server logs."),
            )
        })?;

        let body = body.filter(Value::is_object).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                err("INVALID_REQUEST_BODY", "request body must be a JSON object"),
            )
        })?;
        let record = ApplicantRecord::from_json(&body);

        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("decision", %request_id);
        let outcome = tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            pipeline.decide(&record)
        })
        .await;

        match outcome {
            Ok(Ok(decision)) => {
                tracing::info!(%request_id, "decision: {}", decision.reason());
                Ok(decision)
            }
            Ok(Err(e)) => {
                tracing::error!(%request_id, "inference failed: {}", e);
                Err(internal())
            }
            Err(e) => {
                tracing::error!(%request_id, "inference aborted: {}", e);
                Err(internal())
            }
        }
    }
}

fn internal() -> (StatusCode, ErrorEnvelope) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        err("INTERNAL_ERROR", "the application could not be scored"),
    )
}
