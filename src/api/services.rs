use axum::{
    Json,
    body::Body,
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::{error::ApiError, state::AppState, utils};
use crate::submission::{Submission, WebhookBody};

const LIST_ID_PARAM: &str = "listId";
const MISSING_LIST_ID: &str = "The search param listId is not given";
const MISSING_NAME: &str = "Request body is missing name";

/// Webhook endpoint (POST, any path)
///
/// ## Flow:
/// 1. Reject anything but POST with 405
/// 2. Read the body (size-limited); a non-JSON or empty body counts as `{}`
/// 3. Parse the submission; malformed field entries are a 400
/// 4. With a `name` field and a `listId` query parameter, normalize the
///    fields and create the card, passing the board API's status through
/// 5. Otherwise acknowledge the form service's handshake with 201, or
///    reject with 400 naming what is missing
pub async fn receive_submission(
    State(state): State<AppState>,
    method: Method,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: Body,
) -> Result<Response, ApiError> {
    info!(%method, ?query, "Webhook received");

    if method != Method::POST {
        state.metrics.submission_rejected();
        return Err(ApiError::MethodNotAllowed);
    }

    let body = read_json_body(&headers, body, state.config.server.max_body_bytes).await?;
    debug!(%body, "Webhook body");

    let webhook = WebhookBody::from_value(&body)?;
    let submission = Submission::from_fields(&webhook.fields);

    match utils::single_query_value(&query, LIST_ID_PARAM) {
        Some(list_id) if submission.is_valid() => {
            create_card(&state, &submission, list_id).await.inspect_err(|e| {
                state.metrics.remote_failed();
                error!(list_id, error = %e, "Card creation failed");
            })
        }
        _ if webhook.is_handshake(&state.config.webhook.handshake_message) => {
            state.metrics.handshake_acknowledged();
            info!("Webhook handshake acknowledged");
            Ok(StatusCode::CREATED.into_response())
        }
        _ => {
            let reason = if submission.is_valid() {
                MISSING_LIST_ID
            } else {
                MISSING_NAME
            };
            state.metrics.submission_rejected();
            warn!(reason, fields = submission.len(), "Rejecting submission");
            Err(ApiError::InvalidPayload(reason.to_string()))
        }
    }
}

/// Normalizes the submission, creates the card and mirrors the board API's answer
async fn create_card(
    state: &AppState,
    submission: &Submission,
    list_id: &str,
) -> Result<Response, ApiError> {
    let params = state
        .registry
        .normalize(submission, list_id, &state.board)
        .await?;

    let remote = state.board.create_card(&params).await?;

    // a non-success answer is the board's, not ours: pass it through as text
    let payload = if remote.is_success() {
        remote.json::<Value>()?
    } else {
        Value::String(remote.text())
    };

    if remote.is_success() {
        state.metrics.card_created();
        info!(list_id, status = remote.status.as_u16(), "Card created");
    } else {
        warn!(list_id, status = remote.status.as_u16(), "Board API refused card");
    }

    Ok((remote.status, Json(payload)).into_response())
}

/// Reads the request body as JSON. Reading stops as soon as `max_size` bytes
/// are exceeded.
async fn read_json_body(
    headers: &HeaderMap,
    body: Body,
    max_size: usize,
) -> Result<Value, ApiError> {
    let data = Limited::new(body, max_size)
        .collect()
        .await
        .map_err(|err| {
            if err.downcast_ref::<LengthLimitError>().is_some() {
                ApiError::PayloadTooLarge(max_size)
            } else {
                ApiError::Internal(err.to_string())
            }
        })?
        .to_bytes();

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    if data.is_empty() || !utils::is_json_content_type(content_type) {
        debug!(?content_type, size = data.len(), "Body is not JSON, treating as empty object");
        return Ok(Value::Object(Default::default()));
    }

    Ok(serde_json::from_slice(&data)?)
}
