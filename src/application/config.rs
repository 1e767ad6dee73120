use std::{
    net::{IpAddr, SocketAddr},
    time::Duration,
};

use clap::Parser;

pub const DEFAULT_GRAPH_API_BASE_URL: &str = "https://graph.facebook.com";
pub const DEFAULT_GRAPH_API_VERSION: &str = "v23.0";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "redco-relay",
    version,
    about = "REDCO relay: answers WhatsApp Business messages with AI-generated replies"
)]
pub struct Args {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(long, env = "VERIFY_TOKEN", default_value = "redco123")]
    pub verify_token: String,

    #[arg(long, env = "WHATSAPP_TOKEN", default_value = "")]
    pub whatsapp_token: String,

    #[arg(long, env = "PHONE_NUMBER_ID", default_value = "")]
    pub phone_number_id: String,

    #[arg(long, env = "GRAPH_API_BASE_URL", default_value = DEFAULT_GRAPH_API_BASE_URL)]
    pub graph_api_base_url: String,

    #[arg(long, env = "GRAPH_API_VERSION", default_value = DEFAULT_GRAPH_API_VERSION)]
    pub graph_api_version: String,

    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_PROJECT")]
    pub openai_project: Option<String>,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_OPENAI_BASE_URL)]
    pub openai_base_url: String,

    #[arg(long, env = "HTTP_TIMEOUT_MS", default_value_t = 30_000)]
    pub http_timeout_ms: u64,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "JSON_LOGS", default_value_t = false)]
    pub json_logs: bool,
}

/// Credentials for the completion backend. Absent when no API key is set,
/// which disables AI replies without failing startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub project: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub host: IpAddr,
    pub port: u16,
    pub verify_token: String,
    pub whatsapp_token: String,
    pub phone_number_id: String,
    pub graph_api_base_url: String,
    pub graph_api_version: String,
    pub openai: Option<OpenAiConfig>,
    pub http_timeout: Duration,
    pub log_filter: String,
    pub json_logs: bool,
}

impl RuntimeConfig {
    pub fn from_args(args: Args) -> Result<Self, String> {
        if args.port == 0 {
            return Err("port must be greater than 0".to_owned());
        }
        if args.http_timeout_ms == 0 {
            return Err("http_timeout_ms must be greater than 0".to_owned());
        }
        let graph_api_version = args.graph_api_version.trim().trim_matches('/').to_owned();
        if graph_api_version.is_empty() {
            return Err("graph_api_version must not be empty".to_owned());
        }

        let openai = normalize_secret(args.openai_api_key).map(|api_key| OpenAiConfig {
            api_key,
            project: normalize_secret(args.openai_project),
            base_url: args.openai_base_url,
        });

        Ok(Self {
            host: args.host,
            port: args.port,
            verify_token: args.verify_token,
            whatsapp_token: args.whatsapp_token.trim().to_owned(),
            phone_number_id: args.phone_number_id.trim().to_owned(),
            graph_api_base_url: args.graph_api_base_url,
            graph_api_version,
            openai,
            http_timeout: Duration::from_millis(args.http_timeout_ms),
            log_filter: args.log_filter,
            json_logs: args.json_logs,
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    #[must_use]
    pub fn ai_enabled(&self) -> bool {
        self.openai.is_some()
    }

    #[must_use]
    pub fn for_test(host: IpAddr, port: u16) -> Self {
        Self {
            host,
            port,
            verify_token: "redco123".to_owned(),
            whatsapp_token: "test-whatsapp-token".to_owned(),
            phone_number_id: "1234567890".to_owned(),
            graph_api_base_url: DEFAULT_GRAPH_API_BASE_URL.to_owned(),
            graph_api_version: DEFAULT_GRAPH_API_VERSION.to_owned(),
            openai: None,
            http_timeout: Duration::from_millis(3_000),
            log_filter: "warn".to_owned(),
            json_logs: false,
        }
    }
}

fn normalize_secret(input: Option<String>) -> Option<String> {
    input.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}
