use crate::error::ConfigurationError;
use serde::Serialize;
use std::str::FromStr;

/// How the score rule and the approval model are combined at tier 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier1Policy {
    /// FICO >= 580 approves outright; only lower scores reach the model.
    #[default]
    RuleGated,
    /// The model is always scored; FICO >= 580 still overrides its verdict.
    ModelAlways,
}

impl Tier1Policy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier1Policy::RuleGated => "rule_gated",
            Tier1Policy::ModelAlways => "model_always",
        }
    }
}

impl FromStr for Tier1Policy {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rule_gated" => Ok(Tier1Policy::RuleGated),
            "model_always" => Ok(Tier1Policy::ModelAlways),
            other => Err(ConfigurationError::UnknownPolicy(other.to_string())),
        }
    }
}
