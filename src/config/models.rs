use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1/";
pub const DEFAULT_HANDSHAKE_MESSAGE: &str = "Heyflow Webhook API successfully initialized";

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Upper bound for inbound webhook bodies
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_max_body_bytes() -> usize {
    1024 * 1024 // 1 MB
}

/// Board API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// OAuth consumer key (loaded from environment, not from config file)
    #[serde(skip)]
    pub consumer_key: Option<String>,
    /// OAuth access token (loaded from environment, not from config file)
    #[serde(skip)]
    pub access_token: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            consumer_key: None,
            access_token: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("cardhook/{}", env!("CARGO_PKG_VERSION"))
}

/// Inbound webhook configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebhookConfig {
    /// Text the form service sends once when the webhook is registered
    #[serde(default = "default_handshake_message")]
    pub handshake_message: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            handshake_message: default_handshake_message(),
        }
    }
}

fn default_handshake_message() -> String {
    DEFAULT_HANDSHAKE_MESSAGE.to_string()
}
