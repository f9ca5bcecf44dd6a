use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("remote call failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("board API responded with HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("could not decode board API response: {0}")]
    Decode(String),

    #[error("invalid board base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid path segment '{0}'")]
    InvalidPathSegment(String),

    #[error("invalid board credentials: {0}")]
    InvalidCredentials(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
