//! Deterministic fake backend for tests.
//!
//! Returns a canned reply (or canned failure) and records every prompt it
//! receives, so callers can assert on call counts and prompt contents
//! without any network in the loop.

use std::sync::Mutex;

use async_trait::async_trait;

use clausecheck_core::error::ProviderError;
use clausecheck_core::model::TextModel;

/// A `TextModel` that replays a scripted response.
pub struct FakeModel {
    reply: std::result::Result<String, ProviderError>,
    prompts: Mutex<Vec<String>>,
}

impl FakeModel {
    /// A fake that always succeeds with the given raw text.
    pub fn replying(raw: impl Into<String>) -> Self {
        Self {
            reply: Ok(raw.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A fake that always fails with the given provider error.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            reply: Err(error),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Number of `generate` calls received so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Copies of all prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl TextModel for FakeModel {
    fn name(&self) -> &str {
        "fake"
    }

    async fn generate(&self, prompt: &str) -> std::result::Result<String, ProviderError> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt.to_string());
        self.reply.clone()
    }
}
