//! HTTP client for the board API

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Url};
use serde::Serialize;
use tracing::{debug, warn};

use super::error::{BoardError, Result};
use super::models::{BoardLabels, IdRef, RemoteLabel, RemoteResponse};
use crate::config::BoardConfig;

/// OAuth credentials sent with every board API call
#[derive(Clone, Default)]
pub struct BoardCredentials {
    pub consumer_key: String,
    pub access_token: String,
}

impl BoardCredentials {
    pub fn new(consumer_key: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            access_token: access_token.into(),
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self {
            consumer_key: config.consumer_key.clone().unwrap_or_default(),
            access_token: config.access_token.clone().unwrap_or_default(),
        }
    }

    fn authorization(&self) -> String {
        format!(
            "OAuth oauth_consumer_key=\"{}\", oauth_token=\"{}\"",
            self.consumer_key, self.access_token
        )
    }
}

impl std::fmt::Debug for BoardCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardCredentials")
            .field("consumer_key", &"<redacted>")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Board API client
#[derive(Debug, Clone)]
pub struct BoardClient {
    client: Client,
    base_url: Url,
}

impl BoardClient {
    /// Create a new client. No request timeout is configured.
    pub fn new(config: &BoardConfig, credentials: BoardCredentials) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| BoardError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BoardError::InvalidBaseUrl(config.base_url.clone()));
        }

        let mut authorization = HeaderValue::from_str(&credentials.authorization())
            .map_err(|e| BoardError::InvalidCredentials(e.to_string()))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Appends percent-encoded path segments to the base URL
    fn url(&self, segments: &[&str]) -> Result<Url> {
        // dot segments would be dropped rather than encoded
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(BoardError::InvalidPathSegment(segment.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BoardError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue one request against `base_url/segments..?params`
    pub async fn call<P>(&self, segments: &[&str], params: &P, method: Method) -> Result<RemoteResponse>
    where
        P: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        let path = url.path().to_string();
        debug!(%method, %path, "Calling board API");

        let response = self
            .client
            .request(method.clone(), url)
            .query(params)
            .send()
            .await
            .inspect_err(|e| warn!(%method, %path, error = %e, "Board API call failed"))?;

        let status = response.status();
        let body = response.bytes().await?;

        debug!(%method, %path, status = status.as_u16(), size = body.len(), "Board API responded");

        Ok(RemoteResponse { status, body })
    }

    /// `GET lists/{list_id}/board`, returns the owning board id
    pub async fn board_of_list(&self, list_id: &str) -> Result<String> {
        let no_params: [(&str, &str); 0] = [];
        let board: IdRef = self
            .call(&["lists", list_id, "board"], &no_params, Method::GET)
            .await?
            .expect_json()?;
        Ok(board.id)
    }

    /// All labels of a board, in the order the API lists them
    pub async fn board_labels(&self, board_id: &str) -> Result<Vec<RemoteLabel>> {
        let params = [("labels", "all"), ("label_fields", "name,color")];
        let board: BoardLabels = self
            .call(&["boards", board_id], &params, Method::GET)
            .await?
            .expect_json()?;
        Ok(board.labels)
    }

    /// Create a colorless label on a board, returns the new label id
    pub async fn create_label(&self, board_id: &str, name: &str) -> Result<String> {
        let params = [("name", name), ("color", "null"), ("idBoard", board_id)];
        let label: IdRef = self
            .call(&["labels"], &params, Method::POST)
            .await?
            .expect_json()?;
        Ok(label.id)
    }

    /// `POST cards` with the given form parameters. The response is returned as is.
    pub async fn create_card(&self, params: &[(String, String)]) -> Result<RemoteResponse> {
        self.call(&["cards"], params, Method::POST).await
    }
}
