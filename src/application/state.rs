use std::sync::Arc;

use crate::{
    application::{config::RuntimeConfig, replies::ReplyGenerator},
    domain::error::DomainError,
    interfaces::{openai::OpenAiClient, whatsapp::WhatsAppClient},
};

/// Read-only state shared by every request handler.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: RuntimeConfig,
    replies: ReplyGenerator,
    whatsapp: WhatsAppClient,
}

impl SharedState {
    pub fn new(config: RuntimeConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|error| {
                DomainError::Unavailable(format!("failed to construct http client: {error}"))
            })?;

        let backend = config
            .openai
            .clone()
            .map(|openai| OpenAiClient::new(http.clone(), openai));
        let whatsapp = WhatsAppClient::new(http, &config);

        Ok(Self {
            inner: Arc::new(InnerState {
                replies: ReplyGenerator::new(backend),
                whatsapp,
                config,
            }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn replies(&self) -> &ReplyGenerator {
        &self.inner.replies
    }

    #[must_use]
    pub fn whatsapp(&self) -> &WhatsAppClient {
        &self.inner.whatsapp
    }
}
