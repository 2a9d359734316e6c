use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_PURPOSE: &str = "other";
const PURPOSE_PREFIX: &str = "purpose_";

/// A loan request as the pipeline sees it, after lenient coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantRecord {
    pub fico_score: i64,
    pub grade: Option<i64>,
    pub loan_amnt: f64,
    pub term: i64,
    pub annual_inc: f64,
    pub purpose: String,
}

impl Default for ApplicantRecord {
    fn default() -> Self {
        Self {
            fico_score: 0,
            grade: None,
            loan_amnt: 0.0,
            term: 0,
            annual_inc: 0.0,
            purpose: DEFAULT_PURPOSE.to_string(),
        }
    }
}

impl ApplicantRecord {
    /// Builds a record from a request body without ever failing.
    ///
    /// Missing or malformed numeric fields become 0, a missing or unusable
    /// grade becomes `None` and a missing purpose becomes `"other"`.
    pub fn from_json(body: &Value) -> Self {
        Self {
            fico_score: int_field(body, "fico_score").unwrap_or(0),
            grade: int_field(body, "grade"),
            loan_amnt: number_field(body, "loan_amnt").unwrap_or(0.0),
            term: int_field(body, "term").unwrap_or(0),
            annual_inc: number_field(body, "annual_inc").unwrap_or(0.0),
            purpose: purpose_field(body),
        }
    }
}

fn number_field(body: &Value, key: &str) -> Option<f64> {
    let n = match body.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn int_field(body: &Value, key: &str) -> Option<i64> {
    match body.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}

fn purpose_field(body: &Value) -> String {
    let raw = match body.get("purpose") {
        Some(Value::String(s)) => s.trim(),
        _ => "",
    };
    let stripped = raw.strip_prefix(PURPOSE_PREFIX).unwrap_or(raw);
    if stripped.is_empty() {
        DEFAULT_PURPOSE.to_string()
    } else {
        stripped.to_string()
    }
}
