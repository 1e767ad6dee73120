use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    application::state::SharedState,
    domain::{error::DomainError, models::DispatchAck},
    interfaces::whatsapp::extract_inbound_message,
};

/// How a POST delivery ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// Status callbacks, read receipts and anything else without a message.
    NoMessage,
    /// A message arrived without a sender to reply to.
    MissingSender,
    Replied { to: String, ack: DispatchAck },
}

/// Runs one webhook delivery through extraction, reply generation and
/// dispatch. Dispatch failures come back as errors for the caller to log.
pub async fn handle_webhook_event(
    state: &SharedState,
    payload: &Value,
) -> Result<WebhookOutcome, DomainError> {
    let Some(message) = extract_inbound_message(payload) else {
        debug!("webhook event carries no message");
        return Ok(WebhookOutcome::NoMessage);
    };

    if message.from.trim().is_empty() {
        warn!("inbound message has no sender; skipping reply");
        return Ok(WebhookOutcome::MissingSender);
    }

    let reply = state.replies().generate(&message.text).await;
    let ack = state.whatsapp().send_text(&message.from, &reply).await?;

    debug!(to = %message.from, "reply sent to sender");
    info!(
        message_id = ack.message_id.as_deref().unwrap_or("-"),
        "reply dispatched"
    );
    Ok(WebhookOutcome::Replied {
        to: message.from,
        ack,
    })
}
