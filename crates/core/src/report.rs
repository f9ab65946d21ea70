//! Request and report types for the `/analyze` surface.

use serde::{Deserialize, Serialize};

/// Inbound analysis request: the raw agreement text to examine.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    /// The Terms-of-Service / legal agreement text.
    pub text: String,
}

/// The structured risk assessment returned to the caller.
///
/// Serialized verbatim as the 200 response body. Built once per request from
/// the model's reply and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    /// Concise, bullet-style summary of what the user is actually agreeing to.
    pub summary: String,

    /// How consumer-favorable the agreement is: 100 = safe, 0 = predatory.
    pub trust_score: i64,

    /// Specific unfair or risky clauses found, one entry per clause.
    pub gotchas: Vec<String>,
}

impl AnalysisReport {
    /// Placeholder summary used when the model omits the `summary` field.
    pub const DEFAULT_SUMMARY: &'static str = "No summary provided.";

    /// Neutral midpoint score used when the model omits `trust_score`.
    /// Signals "unknown", not "safe" or "unsafe".
    pub const DEFAULT_TRUST_SCORE: i64 = 50;
}
