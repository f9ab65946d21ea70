//! TextModel trait — the abstraction over generative-model backends.
//!
//! A `TextModel` takes a fully rendered prompt and returns the model's raw
//! textual reply. Keeping the surface this narrow means the analyzer's
//! parsing and defaulting logic can be tested against a deterministic fake
//! with no network in the loop.

use async_trait::async_trait;

use crate::error::ProviderError;

/// A generative-text backend: prompt in, free-form text out.
///
/// Implementations own transport, serialization, and vendor-specific API
/// details. A single call maps to a single provider invocation; no retries
/// happen at this level.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// A human-readable name for this backend (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send the prompt and return the model's raw text reply.
    async fn generate(&self, prompt: &str) -> std::result::Result<String, ProviderError>;
}
