//! HTTP API gateway for ClauseCheck.
//!
//! Exposes the analysis endpoint, a health check, and the embedded web UI:
//!
//! - `POST /analyze` — analyze an agreement text
//! - `GET  /health`  — liveness probe
//! - `GET  /`        — embedded frontend (paste box, trust wheel, red flags)
//!
//! Built on Axum. Every per-request failure is translated at the handler
//! boundary into a `{"detail": "<message>"}` error body; nothing is retried
//! and nothing escalates past the response.

pub mod frontend;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing::info;

use clausecheck_analyzer::AnalysisEngine;
use clausecheck_core::error::AnalysisError;
use clausecheck_core::report::{AnalysisReport, AnalyzeRequest};
use clausecheck_providers::GeminiProvider;

/// Shared application state for the gateway.
#[derive(Clone)]
pub struct GatewayState {
    pub engine: AnalysisEngine,
}

pub type SharedState = Arc<GatewayState>;

/// Error body shape: `{"detail": "<message>"}`.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Build the Axum router with all gateway routes.
///
/// CORS is wide open — all origins, methods, headers, and credentials. That
/// is the documented posture for a public demo endpoint and a hardening gap
/// for anything beyond one.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .merge(frontend::frontend_router()) // Serve embedded frontend
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1 MB body limit
        .layer(CorsLayer::very_permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
///
/// The API key has already been validated by the caller; a missing key never
/// reaches this point.
pub async fn start(
    config: clausecheck_config::AppConfig,
    api_key: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let model = Arc::new(GeminiProvider::new(api_key, config.model.clone()));
    let state = Arc::new(GatewayState {
        engine: AnalysisEngine::new(model),
    });

    let app = build_router(state);

    info!(addr = %addr, model = %config.model, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn analyze_handler(
    State(state): State<SharedState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, (StatusCode, Json<ErrorResponse>)> {
    info!(text_len = payload.text.len(), "Analyze request");

    match state.engine.analyze(&payload.text).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => Err(error_response(e)),
    }
}

/// Map a domain error onto its HTTP shape.
///
/// Validation failures are the client's fault; everything else is a server
/// failure. The provider's message is passed through as the detail, the raw
/// model text never is.
fn error_response(err: AnalysisError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        AnalysisError::TextTooShort => StatusCode::BAD_REQUEST,
        AnalysisError::ResponseFormat | AnalysisError::Provider(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorResponse {
            detail: err.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use clausecheck_core::error::ProviderError;
    use clausecheck_core::model::TextModel;
    use clausecheck_providers::FakeModel;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app_with(model: Arc<dyn TextModel>) -> Router {
        let state = Arc::new(GatewayState {
            engine: AnalysisEngine::new(model),
        });
        build_router(state)
    }

    fn analyze_request(text: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("Content-Type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&serde_json::json!({ "text": text })).unwrap(),
            ))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = app_with(Arc::new(FakeModel::replying("{}")));
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn root_serves_embedded_ui() {
        let app = app_with(Arc::new(FakeModel::replying("{}")));
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("ClauseCheck"));
        assert!(text.contains("/static/app.js"));
    }

    #[tokio::test]
    async fn short_text_returns_400_without_model_call() {
        let fake = Arc::new(FakeModel::replying("{}"));
        let app = app_with(fake.clone());

        let response = app.oneshot(analyze_request("short")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "Text is too short to analyze.");
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn fenced_model_reply_returns_full_report() {
        let fake = Arc::new(FakeModel::replying(
            "```json\n{\"summary\":\"ok\",\"trust_score\":80,\"gotchas\":[\"Arbitration clause\"]}\n```",
        ));
        let app = app_with(fake.clone());

        let response = app
            .oneshot(analyze_request("a long enough agreement text"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({
                "summary": "ok",
                "trust_score": 80,
                "gotchas": ["Arbitration clause"]
            })
        );
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn unparseable_model_reply_returns_500_fixed_detail() {
        let fake = Arc::new(FakeModel::replying("Sorry, I cannot help."));
        let app = app_with(fake);

        let response = app
            .oneshot(analyze_request("a long enough agreement text"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "AI response format error.");
    }

    #[tokio::test]
    async fn provider_failure_returns_500_with_provider_message() {
        let fake = Arc::new(FakeModel::failing(ProviderError::AuthenticationFailed(
            "Invalid Gemini API key".into(),
        )));
        let app = app_with(fake);

        let response = app
            .oneshot(analyze_request("a long enough agreement text"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(
            body["detail"],
            "Authentication failed: Invalid Gemini API key"
        );
    }

    #[tokio::test]
    async fn missing_fields_take_documented_defaults() {
        let fake = Arc::new(FakeModel::replying("{}"));
        let app = app_with(fake);

        let response = app
            .oneshot(analyze_request("a long enough agreement text"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["summary"], "No summary provided.");
        assert_eq!(body["trust_score"], 50);
        assert_eq!(body["gotchas"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn cors_preflight_allows_any_origin() {
        let app = app_with(Arc::new(FakeModel::replying("{}")));

        let req = Request::builder()
            .method("OPTIONS")
            .uri("/analyze")
            .header("Origin", "https://example.com")
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "content-type")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("https://example.com")
        );
    }
}
