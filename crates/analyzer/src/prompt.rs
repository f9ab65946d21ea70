//! Input validation and the analysis prompt template.
//!
//! The template is a fixed constant of the system: the persona, the
//! three-key JSON output contract, and the five analysis dimensions are part
//! of the behavioral contract and must not shrink.

use clausecheck_core::error::{AnalysisError, Result};

/// Minimum number of characters an agreement must have to be analyzable.
pub const MIN_AGREEMENT_CHARS: usize = 10;

/// Reject text that is absent or too short to analyze.
///
/// Counted on the raw text, untrimmed. Runs before any provider call so
/// malformed input never costs a model invocation.
pub fn validate_text(text: &str) -> Result<()> {
    if text.chars().count() < MIN_AGREEMENT_CHARS {
        return Err(AnalysisError::TextTooShort);
    }
    Ok(())
}

/// Render the analysis prompt for the given agreement text.
///
/// Deterministic: same text in, same prompt out.
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"Role: You are an expert consumer rights lawyer.
Task: Analyze the following Terms of Service (TOS) agreement.

Output Requirements:
Return a valid JSON object. Do not include markdown formatting (like ```json).
The JSON must strictly follow this structure:
{{
    "summary": "A concise, bullet-pointed summary of what the user is actually agreeing to, in simple English.",
    "trust_score": (integer between 0-100, where 100 is perfectly safe and 0 is predatory),
    "gotchas": ["list of strings", "each string is a specific unfair or dangerous clause found", "e.g. 'Class Action Waiver'"]
}}

Analyze specifically for:
- Data selling to third parties
- Forced arbitration / Waiver of right to sue
- Auto-renewal traps
- IP ownership (does the app own user content?)
- Hidden fees

Here is the text to analyze:
{text}"#
    )
}
