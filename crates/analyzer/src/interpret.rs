//! Coercing the model's free-form reply into an [`AnalysisReport`].
//!
//! The prompt forbids markdown fencing, but models emit it anyway often
//! enough that the single known pattern is stripped before parsing. Parsing
//! failures are classified distinctly from provider failures: "the model
//! replied, but not in the agreed shape" is operationally different from
//! "the model did not reply".

use serde_json::Value;
use tracing::debug;

use clausecheck_core::error::{AnalysisError, Result};
use clausecheck_core::report::AnalysisReport;

const FENCE_OPENER: &str = "```json";
const FENCE_CLOSER: &str = "```";

/// Strip a markdown JSON fence wrapping the reply, if present.
///
/// Best-effort textual normalization, not a markdown parser: exactly one
/// leading ```` ```json ```` and one trailing ```` ``` ```` are recognized.
/// Idempotent, and a no-op on unfenced text.
pub fn strip_fences(raw: &str) -> &str {
    let mut cleaned = raw.trim();
    if let Some(rest) = cleaned.strip_prefix(FENCE_OPENER) {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix(FENCE_CLOSER) {
        cleaned = rest;
    }
    cleaned.trim()
}

/// Parse the model's raw reply into a report.
///
/// Missing fields take fixed defaults, and an explicit JSON `null` counts as
/// missing. Present non-null fields must carry the agreed types, and an
/// out-of-range `trust_score` is clamped into [0, 100]. The raw reply never
/// travels with the error, only into the debug log.
pub fn interpret_reply(raw: &str) -> Result<AnalysisReport> {
    let cleaned = strip_fences(raw);

    let value: Value = serde_json::from_str(cleaned).map_err(|e| {
        debug!(error = %e, reply = %raw, "Model reply is not valid JSON");
        AnalysisError::ResponseFormat
    })?;

    let Value::Object(fields) = value else {
        debug!(reply = %raw, "Model reply parsed but is not a JSON object");
        return Err(AnalysisError::ResponseFormat);
    };

    let summary = match fields.get("summary") {
        None | Some(Value::Null) => AnalysisReport::DEFAULT_SUMMARY.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            debug!(value = %other, "summary field has wrong type");
            return Err(AnalysisError::ResponseFormat);
        }
    };

    let trust_score = match fields.get("trust_score") {
        None | Some(Value::Null) => AnalysisReport::DEFAULT_TRUST_SCORE,
        Some(v) => match v.as_i64() {
            Some(n) => n.clamp(0, 100),
            None => {
                debug!(value = %v, "trust_score field is not an integer");
                return Err(AnalysisError::ResponseFormat);
            }
        },
    };

    let gotchas = match fields.get("gotchas") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    other => {
                        debug!(value = %other, "gotchas entry is not a string");
                        return Err(AnalysisError::ResponseFormat);
                    }
                }
            }
            out
        }
        Some(other) => {
            debug!(value = %other, "gotchas field is not an array");
            return Err(AnalysisError::ResponseFormat);
        }
    };

    Ok(AnalysisReport {
        summary,
        trust_score,
        gotchas,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fenced_reply_exactly() {
        assert_eq!(strip_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn unfenced_reply_untouched() {
        assert_eq!(strip_fences("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn stripping_is_idempotent() {
        let once = strip_fences("```json\n{\"a\":1}\n```").to_string();
        assert_eq!(strip_fences(&once), once);
    }

    #[test]
    fn opener_without_closer_still_stripped() {
        assert_eq!(strip_fences("```json\n{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn full_reply_parses() {
        let report = interpret_reply(
            r#"{"summary":"ok","trust_score":80,"gotchas":["Arbitration clause"]}"#,
        )
        .unwrap();
        assert_eq!(report.summary, "ok");
        assert_eq!(report.trust_score, 80);
        assert_eq!(report.gotchas, vec!["Arbitration clause".to_string()]);
    }

    #[test]
    fn fenced_reply_parses() {
        let report = interpret_reply(
            "```json\n{\"summary\":\"ok\",\"trust_score\":80,\"gotchas\":[\"Arbitration clause\"]}\n```",
        )
        .unwrap();
        assert_eq!(report.trust_score, 80);
    }

    #[test]
    fn non_json_reply_is_format_error() {
        assert!(matches!(
            interpret_reply("Sorry, I cannot help."),
            Err(AnalysisError::ResponseFormat)
        ));
    }

    #[test]
    fn non_object_json_is_format_error() {
        assert!(matches!(
            interpret_reply("[1, 2, 3]"),
            Err(AnalysisError::ResponseFormat)
        ));
        assert!(matches!(
            interpret_reply("\"just a string\""),
            Err(AnalysisError::ResponseFormat)
        ));
    }

    #[test]
    fn missing_summary_takes_placeholder() {
        let report = interpret_reply(r#"{"trust_score":10,"gotchas":[]}"#).unwrap();
        assert_eq!(report.summary, "No summary provided.");
    }

    #[test]
    fn missing_trust_score_defaults_to_neutral_midpoint() {
        let report = interpret_reply(r#"{"summary":"s","gotchas":[]}"#).unwrap();
        assert_eq!(report.trust_score, 50);
    }

    #[test]
    fn missing_gotchas_defaults_to_empty() {
        let report = interpret_reply(r#"{"summary":"s","trust_score":1}"#).unwrap();
        assert!(report.gotchas.is_empty());
    }

    #[test]
    fn empty_object_takes_all_defaults() {
        let report = interpret_reply("{}").unwrap();
        assert_eq!(report.summary, "No summary provided.");
        assert_eq!(report.trust_score, 50);
        assert!(report.gotchas.is_empty());
    }

    #[test]
    fn explicit_null_fields_count_as_missing() {
        let report = interpret_reply(
            r#"{"summary":null,"trust_score":null,"gotchas":null}"#,
        )
        .unwrap();
        assert_eq!(report.summary, "No summary provided.");
        assert_eq!(report.trust_score, 50);
        assert!(report.gotchas.is_empty());
    }

    #[test]
    fn out_of_range_score_is_clamped() {
        let report = interpret_reply(r#"{"trust_score":250}"#).unwrap();
        assert_eq!(report.trust_score, 100);
        let report = interpret_reply(r#"{"trust_score":-7}"#).unwrap();
        assert_eq!(report.trust_score, 0);
    }

    #[test]
    fn wrong_typed_fields_are_format_errors() {
        assert!(interpret_reply(r#"{"trust_score":"high"}"#).is_err());
        assert!(interpret_reply(r#"{"summary":42}"#).is_err());
        assert!(interpret_reply(r#"{"gotchas":"not a list"}"#).is_err());
        assert!(interpret_reply(r#"{"gotchas":[1,2]}"#).is_err());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let report =
            interpret_reply(r#"{"summary":"s","trust_score":9,"gotchas":[],"extra":true}"#)
                .unwrap();
        assert_eq!(report.trust_score, 9);
    }
}
