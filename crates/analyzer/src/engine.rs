//! The analysis pipeline: validate, render, invoke, interpret.
//!
//! One provider call per valid request, no retries, no cross-request state.
//! The engine holds the only long-lived handle in the system, the shared
//! `TextModel`, and is cheap to clone into handlers.

use std::sync::Arc;

use tracing::{debug, error};

use clausecheck_core::error::Result;
use clausecheck_core::model::TextModel;
use clausecheck_core::report::AnalysisReport;

use crate::interpret::interpret_reply;
use crate::prompt::{build_prompt, validate_text};

/// Runs agreement analyses against a generative-model backend.
#[derive(Clone)]
pub struct AnalysisEngine {
    model: Arc<dyn TextModel>,
}

impl AnalysisEngine {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Analyze an agreement text end to end.
    ///
    /// Rejects short input before touching the provider. A failed invocation
    /// or unparseable reply is returned as-is; the caller decides how to
    /// surface it. Nothing is retried.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        validate_text(text)?;

        let prompt = build_prompt(text);
        debug!(backend = self.model.name(), text_len = text.len(), "Invoking model");

        let raw = self.model.generate(&prompt).await.inspect_err(|e| {
            error!(backend = self.model.name(), error = %e, "Model invocation failed");
        })?;

        interpret_reply(&raw)
    }
}
