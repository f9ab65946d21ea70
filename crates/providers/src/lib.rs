//! Generative-model providers for ClauseCheck.
//!
//! One real backend (Gemini) and one deterministic fake for tests.

pub mod fake;
pub mod gemini;

pub use fake::FakeModel;
pub use gemini::GeminiProvider;
