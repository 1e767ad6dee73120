use std::{any::Any, future::Future, panic::AssertUnwindSafe};

use axum::{
    body::Bytes,
    extract::{
        Query, State,
        rejection::{BytesRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures_util::FutureExt;
use serde_json::Value;
use tracing::{error, warn};

use crate::{
    application::{pipeline, state::SharedState},
    domain::{error::DomainError, models::VerificationRequest},
    security::verify::verify_subscription,
};

pub async fn verify_handler(
    State(state): State<SharedState>,
    query: Result<Query<VerificationRequest>, QueryRejection>,
) -> Response {
    let Ok(Query(request)) = query else {
        warn!("webhook verification rejected: unreadable query");
        return StatusCode::FORBIDDEN.into_response();
    };

    match verify_subscription(&request, &state.config().verify_token) {
        Ok(challenge) => (StatusCode::OK, challenge.to_owned()).into_response(),
        Err(reason) => {
            warn!(mode = %request.mode, "webhook verification rejected: {reason:?}");
            StatusCode::FORBIDDEN.into_response()
        }
    }
}

/// Acknowledges every delivery with 200. The platform retries and eventually
/// disables webhooks that report failures, so errors only reach the logs.
pub async fn receive_handler(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> StatusCode {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("ignoring unreadable webhook body: {rejection}");
            return StatusCode::OK;
        }
    };

    let payload = match serde_json::from_slice::<Value>(&body) {
        Ok(payload) => payload,
        Err(error) => {
            warn!("ignoring webhook body that is not json: {error}");
            return StatusCode::OK;
        }
    };

    if let Err(error) = guarded(pipeline::handle_webhook_event(&state, &payload)).await {
        error!("webhook processing failed: {error}");
    }

    StatusCode::OK
}

/// Turns a panic inside `future` into [`DomainError::Panicked`].
async fn guarded<T>(
    future: impl Future<Output = Result<T, DomainError>>,
) -> Result<T, DomainError> {
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| Err(DomainError::Panicked(panic_message(&*panic))))
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}
