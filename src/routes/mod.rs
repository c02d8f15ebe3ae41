pub mod auth;
pub mod submissions;
pub mod submit;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub const SEND_EMAIL_PATH: &str = "/simple-contact-form/v1/send-email";

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        // Submissions
        .route("/api/v1/submissions", get(submissions::list))
        .route("/api/v1/submissions/{id}", get(submissions::get))
}

/// The public write endpoint. POST only; other methods get 405.
pub fn submit_routes() -> Router<SharedState> {
    Router::new().route(SEND_EMAIL_PATH, post(submit::send_email))
}
