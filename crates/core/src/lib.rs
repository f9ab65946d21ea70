//! Core domain types for ClauseCheck.
//!
//! Defines the shapes every other crate agrees on: the analysis request and
//! report, the error taxonomy, and the `TextModel` trait abstracting the
//! generative-model backend.

pub mod error;
pub mod model;
pub mod report;

pub use error::{AnalysisError, ProviderError};
pub use model::TextModel;
pub use report::{AnalysisReport, AnalyzeRequest};
