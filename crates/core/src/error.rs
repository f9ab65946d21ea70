//! Error types for the ClauseCheck domain.
//!
//! Uses `thiserror` for ergonomic error definitions. The gateway maps each
//! variant to exactly one HTTP error shape, so the taxonomy here is the whole
//! client-facing error contract.

use thiserror::Error;

/// Failures that can occur while analyzing an agreement.
///
/// `Display` strings are client-facing: the gateway serves them verbatim as
/// the `detail` field of error responses.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input text is missing or below the minimum length. Rejected locally,
    /// before any provider call.
    #[error("Text is too short to analyze.")]
    TextTooShort,

    /// The model replied, but the reply could not be coerced into the agreed
    /// schema. Operationally distinct from a provider failure: the model was
    /// reachable, it just didn't hold up its end of the contract.
    ///
    /// The raw model text is deliberately NOT carried here so it can never
    /// leak into a client response; it is logged at the point of failure.
    #[error("AI response format error.")]
    ResponseFormat,

    /// The model collaborator could not be reached or returned an error.
    /// The provider's own message is passed through as the detail.
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Failures raised by a generative-model backend.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}
