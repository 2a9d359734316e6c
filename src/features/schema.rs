use crate::error::ConfigurationError;

pub const APPROVAL_FEATURE_COLUMNS: [&str; 4] = ["cibil_score", "loan_term", "income_annum", "loan_amount"];

pub const PURPOSE_CATEGORIES: [&str; 13] = [
    "credit_card",
    "debt_consolidation",
    "educational",
    "home_improvement",
    "house",
    "major_purchase",
    "medical",
    "moving",
    "other",
    "renewable_energy",
    "small_business",
    "vacation",
    "wedding",
];

pub const RATE_FEATURE_COLUMNS: [&str; 18] = [
    "loan_amnt",
    "term",
    "grade",
    "annual_inc",
    "purpose_credit_card",
    "purpose_debt_consolidation",
    "purpose_educational",
    "purpose_home_improvement",
    "purpose_house",
    "purpose_major_purchase",
    "purpose_medical",
    "purpose_moving",
    "purpose_other",
    "purpose_renewable_energy",
    "purpose_small_business",
    "purpose_vacation",
    "purpose_wedding",
    "fico_score",
];

/// Offset of the first purpose flag inside `RATE_FEATURE_COLUMNS`.
pub const PURPOSE_OFFSET: usize = 4;

pub fn purpose_index(purpose: &str) -> Option<usize> {
    PURPOSE_CATEGORIES.iter().position(|p| *p == purpose)
}

/// Checks a model's trained layout against the hardcoded column order.
///
/// Names are compared when the model exposes them; otherwise only the width.
pub fn validate_columns(
    role: &'static str,
    expected: &[&str],
    introspected: Option<&[String]>,
    n_features: usize,
) -> Result<(), ConfigurationError> {
    if let Some(found) = introspected {
        if found.len() != expected.len() || found.iter().zip(expected).any(|(f, e)| f != e) {
            return Err(ConfigurationError::FeatureOrderMismatch {
                role,
                expected: expected.iter().map(|s| s.to_string()).collect(),
                found: found.to_vec(),
            });
        }
    }
    if n_features != expected.len() {
        return Err(ConfigurationError::FeatureCountMismatch {
            role,
            expected: expected.len(),
            found: n_features,
        });
    }
    Ok(())
}
