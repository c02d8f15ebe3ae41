use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

pub const LOGIN_PAGE: &str = "/admin/login";

/// Middleware that redirects 401 responses to the admin login page for
/// browser requests.
pub async fn redirect_unauthorized(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    if response.status() == StatusCode::UNAUTHORIZED {
        Redirect::to(LOGIN_PAGE).into_response()
    } else {
        response
    }
}
