use super::models::Config;
use reqwest::Url;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid board base_url '{url}', expected an http:// or https:// URL")]
    InvalidBaseUrl { url: String },

    #[error("server.max_body_bytes must be positive")]
    InvalidBodyLimit,

    #[error("webhook.handshake_message must not be empty")]
    EmptyHandshakeMessage,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_board(config)?;
    validate_server(config)?;
    validate_webhook(config)?;
    Ok(())
}

fn validate_board(config: &Config) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidBaseUrl {
        url: config.board.base_url.clone(),
    };

    let url = Url::parse(config.board.base_url.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none_or(str::is_empty) {
        return Err(invalid());
    }

    Ok(())
}

fn validate_server(config: &Config) -> Result<(), ValidationError> {
    if config.server.max_body_bytes == 0 {
        return Err(ValidationError::InvalidBodyLimit);
    }
    Ok(())
}

fn validate_webhook(config: &Config) -> Result<(), ValidationError> {
    if config.webhook.handshake_message.trim().is_empty() {
        return Err(ValidationError::EmptyHandshakeMessage);
    }
    Ok(())
}
