use crate::config::AppConfig;
use crate::domain::applicant::ApplicantRecord;
use crate::domain::decision::{Decision, REASON_HIGH_CREDIT_SCORE, REASON_MODEL_APPROVED, REASON_MODEL_REJECTED};
use crate::error::{ConfigurationError, InferenceError};
use crate::features::grade::fico_to_grade;
use crate::features::normalizer::{to_approval_features, to_rate_features};
use crate::inference::approval::ApprovalAdapter;
use crate::inference::rate::RateAdapter;
use crate::models::registry::ModelRegistry;
use crate::pipeline::policy::Tier1Policy;

/// Minimum approval-model probability for a low-score applicant.
pub const APPROVAL_THRESHOLD: f64 = 0.42;

/// Scores at or above this pass the tier-1 rule.
pub const HIGH_CREDIT_SCORE: i64 = 580;

#[derive(Debug, Clone, PartialEq)]
enum Approval {
    Approved {
        reason: &'static str,
        probability: Option<f64>,
    },
    Rejected {
        probability: f64,
    },
}

/// Rule check, approval model, then rate model. Holds no per-request state.
#[derive(Clone)]
pub struct DecisionPipeline {
    approval: ApprovalAdapter,
    rate: RateAdapter,
    policy: Tier1Policy,
}

impl DecisionPipeline {
    pub fn new(
        registry: &ModelRegistry,
        policy: Tier1Policy,
        positive_class: &str,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            approval: ApprovalAdapter::new(registry.approval.clone(), positive_class)?,
            rate: RateAdapter::new(registry.rate.clone())?,
            policy,
        })
    }

    pub fn from_config(registry: &ModelRegistry, cfg: &AppConfig) -> Result<Self, ConfigurationError> {
        let policy = cfg.tier1_policy.parse::<Tier1Policy>()?;
        Self::new(registry, policy, &cfg.approval_positive_class)
    }

    pub fn policy(&self) -> Tier1Policy {
        self.policy
    }

    pub fn decide(&self, record: &ApplicantRecord) -> Result<Decision, InferenceError> {
        match self.approve(record)? {
            Approval::Rejected { probability } => {
                tracing::debug!("tier2 rejected, skipping rate lookup");
                Ok(Decision::Rejected {
                    reason: REASON_MODEL_REJECTED.to_string(),
                    approval_probability: Some(probability),
                })
            }
            Approval::Approved { reason, probability } => {
                let grade = record.grade.unwrap_or_else(|| fico_to_grade(record.fico_score));
                let rate = self.rate.predict_rate(&to_rate_features(record, grade))?;
                tracing::debug!(grade, "tier3 rate predicted");
                Ok(Decision::Approved {
                    approval_reason: reason.to_string(),
                    approval_probability: probability,
                    predicted_interest_rate: round_rate(rate),
                    loan_amount: record.loan_amnt.round() as i64,
                    term: record.term,
                })
            }
        }
    }

    fn approve(&self, record: &ApplicantRecord) -> Result<Approval, InferenceError> {
        let rule_passes = record.fico_score >= HIGH_CREDIT_SCORE;
        match (self.policy, rule_passes) {
            (Tier1Policy::RuleGated, true) => {
                tracing::debug!("tier1 rule approved");
                Ok(Approval::Approved {
                    reason: REASON_HIGH_CREDIT_SCORE,
                    probability: None,
                })
            }
            (Tier1Policy::ModelAlways, true) => {
                let probability = self.score(record)?;
                tracing::debug!("tier1 rule overrides model");
                Ok(Approval::Approved {
                    reason: REASON_HIGH_CREDIT_SCORE,
                    probability: Some(probability),
                })
            }
            (_, false) => {
                let probability = self.score(record)?;
                if passes_threshold(probability) {
                    Ok(Approval::Approved {
                        reason: REASON_MODEL_APPROVED,
                        probability: Some(probability),
                    })
                } else {
                    Ok(Approval::Rejected { probability })
                }
            }
        }
    }

    fn score(&self, record: &ApplicantRecord) -> Result<f64, InferenceError> {
        let probability = self.approval.score_approval(&to_approval_features(record))?;
        tracing::info!(
            "approval probability: {:.4}, threshold: {}",
            probability,
            APPROVAL_THRESHOLD
        );
        Ok(probability)
    }
}

pub fn passes_threshold(probability: f64) -> bool {
    probability >= APPROVAL_THRESHOLD
}

pub fn round_rate(rate: f64) -> f64 {
    (rate * 100.0).round() / 100.0
}
