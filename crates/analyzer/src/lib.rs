//! Agreement analysis for ClauseCheck.
//!
//! Three pieces, composed linearly per request:
//! - `prompt` — input validation and the fixed analysis prompt template
//! - `interpret` — coercing the model's free-form reply into an [`AnalysisReport`]
//! - `engine` — the one-hop pipeline tying a `TextModel` to the two above

pub mod engine;
pub mod interpret;
pub mod prompt;

pub use engine::AnalysisEngine;
pub use interpret::interpret_reply;
pub use prompt::{MIN_AGREEMENT_CHARS, build_prompt, validate_text};
