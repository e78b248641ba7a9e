//! Default service: a small HTTP status endpoint.
//!
//! # Responsibilities
//! - Bind to `listener.bind_address`
//! - Answer `GET /health` and `GET /status`
//! - Stop accepting and drain when the cancellation handle fires

use std::time::Instant;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::service::{Service, ServiceContext, ServiceError};

/// State injected into handlers.
#[derive(Debug, Clone)]
pub struct StatusState {
    pub verbose: bool,
    pub bind_address: String,
    pub started: Instant,
}

/// Body of `GET /status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub verbose: bool,
    pub bind_address: String,
    pub uptime_secs: u64,
}

/// HTTP status server.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusServer;

impl StatusServer {
    /// Build the router with its middleware.
    pub fn router(state: StatusState) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/status", get(status))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }
}

impl Service for StatusServer {
    async fn run(&self, ctx: ServiceContext) -> Result<(), ServiceError> {
        let config = ctx.config.get();
        let address = config.listener.bind_address.clone();

        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ServiceError::Bind {
                address: address.clone(),
                source,
            })?;
        let local_addr = listener.local_addr()?;

        crate::infof!("status server listening on {local_addr}");

        let state = StatusState {
            verbose: ctx.verbose,
            bind_address: local_addr.to_string(),
            started: Instant::now(),
        };

        let shutdown = ctx.shutdown.clone();
        axum::serve(listener, Self::router(state))
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;

        tracing::info!("Status server stopped");
        Ok(())
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn status(State(state): State<StatusState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running",
        verbose: state.verbose,
        bind_address: state.bind_address,
        uptime_secs: state.started.elapsed().as_secs(),
    })
}
