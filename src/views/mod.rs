pub mod admin;
pub mod auth;
pub mod contact;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

/// Public pages. No authentication.
pub fn public_routes() -> Router<SharedState> {
    Router::new()
        .route("/contact", get(contact::page))
        .route("/contact/form", get(contact::form_fragment))
}

/// Admin pages. Unauthenticated requests are redirected to the login page
/// by the caller's middleware.
pub fn admin_routes() -> Router<SharedState> {
    Router::new()
        .route("/admin", get(admin::index))
        .route("/admin/login", get(auth::login_page))
        .route("/admin/submissions", get(admin::submissions_page))
        .route("/admin/submissions/{id}", get(admin::submission_page))
}
