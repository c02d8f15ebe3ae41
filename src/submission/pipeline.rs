use axum::body::Body;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::auth::nonce;
use crate::db::StoreError;
use crate::models::ContactFields;
use crate::state::SharedState;

use super::fields;
use super::parser;

pub const ACCEPTED_MESSAGE: &str = "Thank you for your email";
pub const NOT_SENT_MESSAGE: &str = "Message not sent";
pub const INVALID_INPUT_MESSAGE: &str = "invalid input";

/// Rejections of the public submission endpoint. Rendered as plain text;
/// callers only ever see a generic message.
#[derive(Debug)]
pub enum SubmitError {
    InvalidToken,
    TooLarge,
    InvalidInput(String),
    Storage(StoreError),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::InvalidToken => write!(f, "Invalid token"),
            SubmitError::TooLarge => write!(f, "Request body too large"),
            SubmitError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            SubmitError::Storage(err) => write!(f, "Storage failure: {err}"),
        }
    }
}

impl From<StoreError> for SubmitError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidInput(msg) => SubmitError::InvalidInput(msg),
            other => SubmitError::Storage(other),
        }
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        match &self {
            SubmitError::InvalidToken => {
                tracing::debug!("Rejected submission: {self}");
                (StatusCode::UNPROCESSABLE_ENTITY, NOT_SENT_MESSAGE).into_response()
            }
            SubmitError::TooLarge => {
                tracing::debug!("Rejected submission: {self}");
                (StatusCode::PAYLOAD_TOO_LARGE, NOT_SENT_MESSAGE).into_response()
            }
            SubmitError::InvalidInput(_) => {
                tracing::debug!("Rejected submission: {self}");
                (StatusCode::BAD_REQUEST, INVALID_INPUT_MESSAGE).into_response()
            }
            SubmitError::Storage(_) => {
                tracing::error!("Failed to store submission: {self}");
                (StatusCode::INTERNAL_SERVER_ERROR, NOT_SENT_MESSAGE).into_response()
            }
        }
    }
}

/// Validate a submission request and persist it.
///
/// The nonce is checked before the body is read, so a forged request is
/// rejected with 422 whatever its size or content. The body is then buffered
/// up to `max_body_size`.
pub async fn run(
    state: &SharedState,
    headers: &HeaderMap,
    jar: &CookieJar,
    body: Body,
) -> Result<Uuid, SubmitError> {
    if !nonce::verify_request(headers, jar, &state.config.secret) {
        return Err(SubmitError::InvalidToken);
    }

    let body = axum::body::to_bytes(body, state.config.max_body_size)
        .await
        .map_err(|_| SubmitError::TooLarge)?;

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let raw = if content_type.is_some_and(|ct| ct.contains("multipart/form-data")) {
        parser::parse_multipart(headers, body).await
    } else {
        parser::parse_body(content_type, &body)
    }
    .map_err(SubmitError::InvalidInput)?;

    let fields = fields::flatten(raw, state.config.max_fields).map_err(SubmitError::InvalidInput)?;
    let contact = ContactFields::from_fields(fields).map_err(SubmitError::InvalidInput)?;

    tracing::debug!(
        has_email = contact.email.is_some(),
        extra_fields = contact.extra.len(),
        "Validated submission"
    );

    let id = state.store.create(contact.into_fields()).await?;
    tracing::info!(submission_id = %id, "Stored contact form submission");

    Ok(id)
}
