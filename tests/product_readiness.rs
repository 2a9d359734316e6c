#[test]
fn default_config_points_at_shipped_models() {
    let cfg = credit_decision::config::AppConfig::from_env();
    assert!(!cfg.approval_model_path.is_empty());
    assert!(!cfg.rate_model_path.is_empty());
    assert!(std::path::Path::new("models/low_cohort_approval_model.json").exists());
    assert!(std::path::Path::new("models/interest_rate_model.json").exists());
}

#[test]
fn endpoints_exist_in_readme() {
    let readme = std::fs::read_to_string("README.md").unwrap_or_default();
    assert!(readme.contains("/predict"));
    assert!(readme.contains("/ops/readiness"));
    assert!(readme.contains("/ops/liveness"));
    assert!(readme.contains("TIER1_POLICY"));
}
