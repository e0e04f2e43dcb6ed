//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the catch-all strip handler
//! - Wire up middleware (tracing, request timeout)
//! - Serve on a caller-supplied listener until shutdown
//! - Map forwarding errors to HTTP 500 with the error text as body
//!
//! # Design Decisions
//! - One handler invocation per request, no shared mutable state; the
//!   forwarder is shared read-only behind an Arc
//! - A per-request failure never touches the accept loop

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::StripConfig;
use crate::http::forward::Forwarder;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<Forwarder>,
}

/// Plaintext HTTP server fronting the forwarder.
pub struct StripServer {
    router: Router,
    config: StripConfig,
}

impl StripServer {
    /// Create a new server with the given configuration.
    pub fn new(config: StripConfig) -> Self {
        let forwarder = Arc::new(Forwarder::new(config.addressing.mode()));
        let state = AppState { forwarder };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &StripConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(strip_handler))
            .route("/{*path}", any(strip_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            mode = %self.config.addressing.mode(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &StripConfig {
        &self.config
    }
}

/// Catch-all handler: every inbound request makes exactly one trip through
/// the forwarder.
async fn strip_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    match state.forwarder.forward(request).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(error = %err, "Forwarding failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
