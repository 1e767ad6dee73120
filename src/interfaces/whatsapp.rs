use reqwest::Client;
use serde_json::Value;

use crate::{
    application::config::RuntimeConfig,
    domain::{
        error::UpstreamError,
        models::{DispatchAck, InboundMessage, OutboundMessage},
    },
};

/// Pulls the first message out of `entry[0].changes[0].value.messages[0]`.
///
/// Status callbacks and read receipts carry no `messages` array and yield
/// `None`. Non-text messages keep their sender but get an empty body.
#[must_use]
pub fn extract_inbound_message(payload: &Value) -> Option<InboundMessage> {
    let message = first_whatsapp_message(payload)?;

    let from = message
        .get("from")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    let text = message
        .get("text")
        .and_then(|text| text.get("body"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    Some(InboundMessage { from, text })
}

fn first_whatsapp_message(payload: &Value) -> Option<&Value> {
    payload
        .get("entry")?
        .as_array()?
        .first()?
        .get("changes")?
        .as_array()?
        .first()?
        .get("value")?
        .get("messages")?
        .as_array()?
        .first()
        .filter(|message| message.is_object())
}

/// Cloud API client for the send-message endpoint.
#[derive(Debug, Clone)]
pub struct WhatsAppClient {
    http: Client,
    messages_url: String,
    access_token: String,
}

impl WhatsAppClient {
    #[must_use]
    pub fn new(http: Client, config: &RuntimeConfig) -> Self {
        let base_url = config.graph_api_base_url.trim_end_matches('/');
        Self {
            http,
            messages_url: format!(
                "{base_url}/{}/{}/messages",
                config.graph_api_version, config.phone_number_id
            ),
            access_token: config.whatsapp_token.clone(),
        }
    }

    pub async fn send_text(&self, to: &str, body: &str) -> Result<DispatchAck, UpstreamError> {
        let response = self
            .http
            .post(&self.messages_url)
            .bearer_auth(&self.access_token)
            .json(&OutboundMessage::text(to, body))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamError::from_response(response).await);
        }

        // The ack body is informational; a 2xx with an odd body still counts.
        let payload = response.json::<Value>().await.unwrap_or(Value::Null);
        Ok(DispatchAck {
            message_id: payload
                .get("messages")
                .and_then(Value::as_array)
                .and_then(|messages| messages.first())
                .and_then(|message| message.get("id"))
                .and_then(Value::as_str)
                .map(str::to_owned),
        })
    }
}
