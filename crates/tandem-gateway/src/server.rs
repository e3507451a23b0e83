//! Gateway HTTP server — Axum-based completion endpoint with CORS

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error, info};

use tandem_core::{ChatBody, CompletionResult, CompletionRouter, GatewayError};

/// Shared state for all request handlers
#[derive(Clone)]
pub struct GatewayState {
    pub router: Arc<CompletionRouter>,
}

/// The gateway server
pub struct GatewayServer {
    state: GatewayState,
    bind: SocketAddr,
}

impl GatewayServer {
    /// Create a new gateway server
    pub fn new(bind: SocketAddr, router: Arc<CompletionRouter>) -> Self {
        Self {
            state: GatewayState { router },
            bind,
        }
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::OPTIONS, Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        Router::new()
            .route("/", post(complete_handler).options(preflight_handler))
            .route("/healthz", get(health_handler))
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Start the server (blocks until shutdown)
    pub async fn run(self) -> anyhow::Result<()> {
        let router = self.router();
        let listener = tokio::net::TcpListener::bind(self.bind).await?;
        info!("Gateway listening on {}", self.bind);

        axum::serve(listener, router).await?;
        Ok(())
    }
}

// ── HTTP Handlers ──

async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

async fn health_handler(State(state): State<GatewayState>) -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
        "primary": state.router.primary_name(),
        "fallback": state.router.fallback_name(),
    }))
}

/// The body is taken as a raw string so malformed JSON produces our own
/// 400 response instead of Axum's extractor rejection.
async fn complete_handler(State(state): State<GatewayState>, body: String) -> Response {
    match handle_completion(&state, &body).await {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(err) => {
            error!("Completion request failed: {}", err);
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                axum::Json(serde_json::json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

async fn handle_completion(
    state: &GatewayState,
    raw: &str,
) -> Result<CompletionResult, GatewayError> {
    let body: ChatBody = serde_json::from_str(raw)
        .map_err(|e| GatewayError::InvalidRequest(format!("invalid JSON body: {}", e)))?;

    let messages = body.into_messages();
    debug!("Completion request with {} messages", messages.len());

    state
        .router
        .complete(&messages)
        .await
        .map_err(GatewayError::from)
}
