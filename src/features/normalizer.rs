use crate::domain::applicant::ApplicantRecord;
use crate::features::schema::{
    purpose_index, APPROVAL_FEATURE_COLUMNS, PURPOSE_CATEGORIES, PURPOSE_OFFSET, RATE_FEATURE_COLUMNS,
};

/// `(cibil_score, loan_term, income_annum, loan_amount)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApprovalFeatureVector([f64; APPROVAL_FEATURE_COLUMNS.len()]);

impl ApprovalFeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Scalar fields, the one-hot purpose block, then `fico_score`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateFeatureVector([f64; RATE_FEATURE_COLUMNS.len()]);

impl RateFeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn purpose_flags(&self) -> &[f64] {
        &self.0[PURPOSE_OFFSET..PURPOSE_OFFSET + PURPOSE_CATEGORIES.len()]
    }
}

pub fn to_approval_features(record: &ApplicantRecord) -> ApprovalFeatureVector {
    ApprovalFeatureVector([
        record.fico_score as f64,
        record.term as f64,
        record.annual_inc,
        record.loan_amnt,
    ])
}

/// An unrecognised purpose leaves every flag at 0.
pub fn to_rate_features(record: &ApplicantRecord, grade: i64) -> RateFeatureVector {
    let mut v = [0.0; RATE_FEATURE_COLUMNS.len()];
    v[0] = record.loan_amnt;
    v[1] = record.term as f64;
    v[2] = grade as f64;
    v[3] = record.annual_inc;
    if let Some(i) = purpose_index(&record.purpose) {
        v[PURPOSE_OFFSET + i] = 1.0;
    }
    v[RATE_FEATURE_COLUMNS.len() - 1] = record.fico_score as f64;
    RateFeatureVector(v)
}
