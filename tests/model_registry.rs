use credit_decision::config::AppConfig;
use credit_decision::domain::applicant::ApplicantRecord;
use credit_decision::error::ConfigurationError;
use credit_decision::models::registry::ModelRegistry;
use credit_decision::pipeline::engine::DecisionPipeline;
use credit_decision::pipeline::policy::Tier1Policy;

fn cfg(approval: &str, rate: &str) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        approval_model_path: approval.to_string(),
        rate_model_path: rate.to_string(),
        tier1_policy: "rule_gated".to_string(),
        approval_positive_class: "1".to_string(),
    }
}

fn shipped() -> AppConfig {
    cfg("models/low_cohort_approval_model.json", "models/interest_rate_model.json")
}

#[test]
fn shipped_artifacts_build_a_pipeline() {
    let registry = ModelRegistry::load(&shipped()).unwrap();
    let pipeline = DecisionPipeline::new(&registry, Tier1Policy::RuleGated, "1").unwrap();

    let d = pipeline
        .decide(&ApplicantRecord::from_json(&serde_json::json!({
            "fico_score": 560, "grade": 4, "loan_amnt": 20000, "term": 60,
            "annual_inc": 35000, "purpose": "debt_consolidation"
        })))
        .unwrap();
    assert_eq!(d.reason(), "Rejected by Specialized Model");
    let p = d.approval_probability().unwrap();
    assert!(p > 0.37 && p < 0.40, "unexpected probability {p}");
}

#[test]
fn missing_rate_artifact_fails_the_whole_load() {
    let out = ModelRegistry::load(&cfg("models/low_cohort_approval_model.json", "models/missing.json"));
    assert!(matches!(out, Err(ConfigurationError::ArtifactMissing { .. })));
}

#[test]
fn truncated_artifact_is_a_format_error() {
    let out = ModelRegistry::load(&cfg("tests/fixtures/truncated.json", "models/interest_rate_model.json"));
    assert!(matches!(out, Err(ConfigurationError::ArtifactFormat { .. })));
}

#[test]
fn approval_model_without_probabilities_is_fatal() {
    let out = ModelRegistry::load(&cfg(
        "tests/fixtures/approval_linear_svm.json",
        "models/interest_rate_model.json",
    ));
    match out {
        Err(ConfigurationError::MissingCapability { role, kind, capability }) => {
            assert_eq!(role, "approval");
            assert_eq!(kind, "linear_svm");
            assert_eq!(capability, "predict_proba");
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("svm must not load as approval model"),
    }
}

#[test]
fn legacy_column_order_is_caught_at_startup() {
    let registry = ModelRegistry::load(&cfg(
        "models/low_cohort_approval_model.json",
        "tests/fixtures/rate_legacy_column_order.json",
    ))
    .unwrap();
    let out = DecisionPipeline::new(&registry, Tier1Policy::RuleGated, "1");
    assert!(matches!(out, Err(ConfigurationError::FeatureOrderMismatch { .. })));
}

#[test]
fn unnamed_approval_model_of_wrong_width_is_caught_at_startup() {
    let registry = ModelRegistry::load(&cfg(
        "tests/fixtures/approval_three_coef.json",
        "models/interest_rate_model.json",
    ))
    .unwrap();
    let out = DecisionPipeline::new(&registry, Tier1Policy::RuleGated, "1");
    assert!(matches!(
        out,
        Err(ConfigurationError::FeatureCountMismatch { expected: 4, found: 3, .. })
    ));
}

#[test]
fn tree_ensemble_rate_model_is_supported() {
    let registry = ModelRegistry::load(&cfg(
        "models/low_cohort_approval_model.json",
        "tests/fixtures/rate_tree_ensemble.json",
    ))
    .unwrap();
    let pipeline = DecisionPipeline::new(&registry, Tier1Policy::RuleGated, "1").unwrap();
    let d = pipeline
        .decide(&ApplicantRecord::from_json(&serde_json::json!({
            "fico_score": 750, "loan_amnt": 15000, "term": 36, "annual_inc": 80000
        })))
        .unwrap();
    match d {
        credit_decision::domain::decision::Decision::Approved {
            predicted_interest_rate, ..
        } => assert_eq!(predicted_interest_rate, 9.75),
        other => panic!("expected approval, got {other:?}"),
    }
}

#[test]
fn unknown_policy_is_a_configuration_error() {
    let registry = ModelRegistry::load(&shipped()).unwrap();
    let mut bad = shipped();
    bad.tier1_policy = "hybrid".to_string();
    let out = DecisionPipeline::from_config(&registry, &bad);
    assert!(matches!(out, Err(ConfigurationError::UnknownPolicy(_))));
}

#[test]
fn wrong_positive_label_is_a_configuration_error() {
    let registry = ModelRegistry::load(&shipped()).unwrap();
    let out = DecisionPipeline::new(&registry, Tier1Policy::RuleGated, "Approved");
    assert!(matches!(out, Err(ConfigurationError::PositiveClassMissing { .. })));
}
