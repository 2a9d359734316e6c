#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub approval_model_path: String,
    pub rate_model_path: String,
    pub tier1_policy: String,
    pub approval_positive_class: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string()),
            approval_model_path: std::env::var("APPROVAL_MODEL_PATH")
                .unwrap_or_else(|_| "models/low_cohort_approval_model.json".to_string()),
            rate_model_path: std::env::var("RATE_MODEL_PATH")
                .unwrap_or_else(|_| "models/interest_rate_model.json".to_string()),
            tier1_policy: std::env::var("TIER1_POLICY").unwrap_or_else(|_| "rule_gated".to_string()),
            approval_positive_class: std::env::var("APPROVAL_POSITIVE_CLASS")
                .unwrap_or_else(|_| "1".to_string()),
        }
    }
}
