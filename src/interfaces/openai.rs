use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::{application::config::OpenAiConfig, domain::error::UpstreamError};

const PROJECT_HEADER: &str = "OpenAI-Project";

#[derive(Debug, Serialize)]
struct CreateResponseRequest<'a> {
    model: &'a str,
    input: [InputMessage<'a>; 2],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct InputMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Minimal client for the Responses API.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    #[must_use]
    pub fn new(http: Client, config: OpenAiConfig) -> Self {
        Self { http, config }
    }

    /// Sends one system instruction plus one user turn and returns the
    /// concatenated output text, untrimmed.
    pub async fn complete(
        &self,
        model: &str,
        system_prompt: &str,
        user_text: &str,
        temperature: f32,
    ) -> Result<String, UpstreamError> {
        let url = format!("{}/responses", self.config.base_url.trim_end_matches('/'));
        let body = CreateResponseRequest {
            model,
            input: [
                InputMessage {
                    role: "system",
                    content: system_prompt,
                },
                InputMessage {
                    role: "user",
                    content: user_text,
                },
            ],
            temperature,
        };

        let mut request = self
            .http
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&body);
        if let Some(project) = &self.config.project {
            request = request.header(PROJECT_HEADER, project);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(UpstreamError::from_response(response).await);
        }

        let payload = response
            .json::<Value>()
            .await
            .map_err(|error| UpstreamError::Decode(error.to_string()))?;

        extract_output_text(&payload).ok_or_else(|| {
            UpstreamError::Decode("response carries neither output_text nor output".to_owned())
        })
    }
}

/// Reads `output_text` when present, otherwise joins every `output_text`
/// content part of the `output` items.
fn extract_output_text(payload: &Value) -> Option<String> {
    if let Some(text) = payload.get("output_text").and_then(Value::as_str) {
        return Some(text.to_owned());
    }

    let output = payload.get("output")?.as_array()?;
    Some(
        output
            .iter()
            .filter_map(|item| item.get("content").and_then(Value::as_array))
            .flatten()
            .filter(|part| part.get("type").and_then(Value::as_str) == Some("output_text"))
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join(""),
    )
}
