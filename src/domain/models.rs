use serde::{Deserialize, Serialize};

/// Query parameters of the platform's GET handshake.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct VerificationRequest {
    #[serde(rename = "hub.mode", default)]
    pub mode: String,
    #[serde(rename = "hub.verify_token", default)]
    pub token: String,
    #[serde(rename = "hub.challenge", default)]
    pub challenge: String,
}

/// A user text message pulled out of an inbound webhook envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub from: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutboundMessage {
    pub messaging_product: &'static str,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: OutboundText,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutboundText {
    pub body: String,
}

impl OutboundMessage {
    #[must_use]
    pub fn text(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            messaging_product: "whatsapp",
            to: to.into(),
            kind: "text",
            text: OutboundText { body: body.into() },
        }
    }
}

/// Platform acknowledgement of a sent message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchAck {
    pub message_id: Option<String>,
}
