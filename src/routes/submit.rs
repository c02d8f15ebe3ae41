use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;

use crate::state::SharedState;
use crate::submission::pipeline::{self, ACCEPTED_MESSAGE};

/// The raw body is taken unread so the nonce is checked before any of it is
/// buffered or size-checked.
pub async fn send_email(
    State(state): State<SharedState>,
    jar: CookieJar,
    headers: HeaderMap,
    body: Body,
) -> Response {
    match pipeline::run(&state, &headers, &jar, body).await {
        Ok(_) => (StatusCode::OK, ACCEPTED_MESSAGE).into_response(),
        Err(e) => e.into_response(),
    }
}
