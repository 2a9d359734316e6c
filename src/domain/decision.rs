use serde::Serialize;

pub const REASON_HIGH_CREDIT_SCORE: &str = "Approved (High Credit Score)";
pub const REASON_MODEL_APPROVED: &str = "Approved by Specialized Model";
pub const REASON_MODEL_REJECTED: &str = "Rejected by Specialized Model";

/// Final outcome of one application. Serializes to the `/predict` response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status")]
pub enum Decision {
    Rejected {
        reason: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        approval_probability: Option<f64>,
    },
    Approved {
        approval_reason: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        approval_probability: Option<f64>,
        predicted_interest_rate: f64,
        loan_amount: i64,
        term: i64,
    },
}

impl Decision {
    pub fn is_approved(&self) -> bool {
        matches!(self, Decision::Approved { .. })
    }

    pub fn reason(&self) -> &str {
        match self {
            Decision::Rejected { reason, .. } => reason,
            Decision::Approved { approval_reason, .. } => approval_reason,
        }
    }

    pub fn approval_probability(&self) -> Option<f64> {
        match self {
            Decision::Rejected { approval_probability, .. }
            | Decision::Approved { approval_probability, .. } => *approval_probability,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}
