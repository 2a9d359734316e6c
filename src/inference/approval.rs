use crate::error::{ConfigurationError, InferenceError};
use crate::features::normalizer::ApprovalFeatureVector;
use crate::features::schema::{validate_columns, APPROVAL_FEATURE_COLUMNS};
use crate::models::registry::APPROVAL_ROLE;
use crate::models::ProbabilisticClassifier;
use std::sync::Arc;

/// Extracts the approved-class probability from the approval classifier.
#[derive(Clone)]
pub struct ApprovalAdapter {
    model: Arc<dyn ProbabilisticClassifier>,
    positive_index: usize,
    n_classes: usize,
}

impl ApprovalAdapter {
    /// Resolves the positive class column once, so requests never guess it.
    pub fn new(model: Arc<dyn ProbabilisticClassifier>, positive_class: &str) -> Result<Self, ConfigurationError> {
        let classes = model.classes();
        let positive_index = classes
            .iter()
            .position(|c| c == positive_class)
            .ok_or_else(|| ConfigurationError::PositiveClassMissing {
                class: positive_class.to_string(),
                classes: classes.to_vec(),
            })?;
        let n_classes = classes.len();

        let names = model.feature_names();
        let width = model
            .input_width()
            .or(names.map(<[String]>::len))
            .unwrap_or(APPROVAL_FEATURE_COLUMNS.len());
        validate_columns(APPROVAL_ROLE, &APPROVAL_FEATURE_COLUMNS, names, width)?;

        Ok(Self {
            model,
            positive_index,
            n_classes,
        })
    }

    pub fn positive_index(&self) -> usize {
        self.positive_index
    }

    pub fn score_approval(&self, vec: &ApprovalFeatureVector) -> Result<f64, InferenceError> {
        let proba = self.model.predict_proba(vec.as_slice())?;
        if proba.len() != self.n_classes {
            return Err(InferenceError::OutputWidth {
                model: "approval",
                expected: self.n_classes,
                found: proba.len(),
            });
        }
        let p = proba[self.positive_index];
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(InferenceError::InvalidOutput { model: "approval", value: p });
        }
        Ok(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::applicant::ApplicantRecord;
    use crate::features::normalizer::to_approval_features;
    use crate::models::linear::LogisticRegression;
    use crate::models::mock::MockClassifier;

    fn features() -> ApprovalFeatureVector {
        to_approval_features(&ApplicantRecord {
            fico_score: 560,
            term: 60,
            annual_inc: 35000.0,
            loan_amnt: 20000.0,
            ..ApplicantRecord::default()
        })
    }

    #[test]
    fn picks_positive_column_by_label() {
        let mut mock = MockClassifier::new(0.8);
        mock.classes = vec!["1".to_string(), "0".to_string()];
        let adapter = ApprovalAdapter::new(Arc::new(mock), "1").unwrap();
        assert_eq!(adapter.positive_index(), 0);
        // mock emits [1 - p, p] so column 0 now holds 0.2
        assert!((adapter.score_approval(&features()).unwrap() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn missing_positive_class_is_fatal() {
        let out = ApprovalAdapter::new(Arc::new(MockClassifier::new(0.5)), "Approved");
        assert!(matches!(out, Err(ConfigurationError::PositiveClassMissing { .. })));
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let adapter = ApprovalAdapter::new(Arc::new(MockClassifier::new(1.5)), "1").unwrap();
        assert!(matches!(
            adapter.score_approval(&features()),
            Err(InferenceError::InvalidOutput { .. })
        ));
    }

    #[test]
    fn introspected_order_is_checked() {
        let model = LogisticRegression {
            coef: vec![1.0, 1.0, 1.0, 1.0],
            intercept: 0.0,
            classes: vec!["0".to_string(), "1".to_string()],
            scaler: None,
            feature_names: Some(
                ["cibil_score", "income_annum", "loan_term", "loan_amount"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
        };
        let out = ApprovalAdapter::new(Arc::new(model), "1");
        assert!(matches!(out, Err(ConfigurationError::FeatureOrderMismatch { .. })));
    }

    #[test]
    fn unnamed_model_with_wrong_width_is_fatal() {
        let model = LogisticRegression {
            coef: vec![1.0, 1.0, 1.0],
            intercept: 0.0,
            classes: vec!["0".to_string(), "1".to_string()],
            scaler: None,
            feature_names: None,
        };
        let out = ApprovalAdapter::new(Arc::new(model), "1");
        assert!(matches!(
            out,
            Err(ConfigurationError::FeatureCountMismatch { expected: 4, found: 3, .. })
        ));
    }
}
