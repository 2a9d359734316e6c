use crate::error::{ConfigurationError, InferenceError};
use crate::features::normalizer::RateFeatureVector;
use crate::features::schema::{validate_columns, RATE_FEATURE_COLUMNS};
use crate::models::registry::RATE_ROLE;
use crate::models::Regressor;
use std::sync::Arc;

/// Point estimate of the interest rate. Returned at full precision.
#[derive(Clone)]
pub struct RateAdapter {
    model: Arc<dyn Regressor>,
}

impl RateAdapter {
    pub fn new(model: Arc<dyn Regressor>) -> Result<Self, ConfigurationError> {
        validate_columns(RATE_ROLE, &RATE_FEATURE_COLUMNS, model.feature_names(), model.n_features())?;
        Ok(Self { model })
    }

    pub fn predict_rate(&self, vec: &RateFeatureVector) -> Result<f64, InferenceError> {
        let rate = self.model.predict(vec.as_slice())?;
        if !rate.is_finite() {
            return Err(InferenceError::InvalidOutput {
                model: "interest_rate",
                value: rate,
            });
        }
        Ok(rate)
    }
}
