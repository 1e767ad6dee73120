use std::future::Future;

use axum::{Router, extract::DefaultBodyLimit, http::StatusCode, routing::get};
use tokio::net::TcpListener;
use tracing::info;

use crate::{application::state::SharedState, domain::error::DomainError, interfaces::webhook};

/// Webhook deliveries above this size are acked without being read.
const WEBHOOK_BODY_LIMIT_BYTES: usize = 16 * 1024 * 1024;

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route(
            "/webhook",
            get(webhook::verify_handler).post(webhook::receive_handler),
        )
        .layer(DefaultBodyLimit::max(WEBHOOK_BODY_LIMIT_BYTES))
        .route("/health", get(health_handler))
        .with_state(state)
}

pub async fn serve(
    listener: TcpListener,
    state: SharedState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), DomainError> {
    let local_addr = listener.local_addr().map_err(|error| {
        DomainError::Unavailable(format!("failed to read listener address: {error}"))
    })?;

    info!(
        "redco-relay listening on http://{}:{}, ai_enabled={}",
        local_addr.ip(),
        local_addr.port(),
        state.replies().ai_enabled(),
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|error| DomainError::Unavailable(format!("server runtime error: {error}")))
}

async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
