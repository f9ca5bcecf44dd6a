use bytes::Bytes;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::error::{BoardError, Result};

/// Raw outcome of a board API call. Status codes are not interpreted here.
#[derive(Debug, Clone)]
pub struct RemoteResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl RemoteResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| BoardError::Decode(e.to_string()))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the body, treating any non-2xx status as an error
    pub(crate) fn expect_json<T: DeserializeOwned>(&self) -> Result<T> {
        if !self.is_success() {
            return Err(BoardError::UnexpectedStatus {
                status: self.status.as_u16(),
                body: self.text(),
            });
        }
        self.json()
    }
}

/// Any board API object reduced to its identifier
#[derive(Debug, Clone, Deserialize)]
pub struct IdRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteLabel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl RemoteLabel {
    pub fn matches(&self, value: &str) -> bool {
        self.name.as_deref() == Some(value) || self.color.as_deref() == Some(value)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BoardLabels {
    #[serde(default)]
    pub labels: Vec<RemoteLabel>,
}
