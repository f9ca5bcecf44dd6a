use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use thiserror::Error;

use super::models::ErrorResponse;
use crate::board::BoardError;
use crate::normalize::TransformError;
use crate::submission::SubmissionError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Only 'POST' requests are allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    InvalidPayload(String),
    #[error("payload too large: body exceeds {0} bytes")]
    PayloadTooLarge(usize),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        let mut response = (status, Json(body)).into_response();
        if matches!(self, ApiError::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        ApiError::InvalidPayload(format!("invalid JSON body: {value}"))
    }
}

impl From<SubmissionError> for ApiError {
    fn from(value: SubmissionError) -> Self {
        ApiError::InvalidPayload(value.to_string())
    }
}

impl From<BoardError> for ApiError {
    fn from(value: BoardError) -> Self {
        ApiError::Internal(value.to_string())
    }
}

impl From<TransformError> for ApiError {
    fn from(value: TransformError) -> Self {
        ApiError::Internal(value.to_string())
    }
}
