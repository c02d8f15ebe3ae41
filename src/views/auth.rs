use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::auth::extractor::ACCESS_COOKIE;
use crate::auth::jwt::{self, ADMIN_SUBJECT, Claims};
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    error: Option<String>,
}

pub async fn login_page(State(state): State<SharedState>, jar: CookieJar) -> Response {
    // Already logged in
    if let Some(cookie) = jar.get(ACCESS_COOKIE) {
        if jwt::decode_token::<Claims>(cookie.value(), &state.config.secret)
            .is_ok_and(|claims| claims.sub == ADMIN_SUBJECT)
        {
            return Redirect::to("/admin/submissions").into_response();
        }
    }

    let error = state
        .config
        .admin_password_hash
        .is_none()
        .then(|| "Admin login is disabled: SCF_ADMIN_PASSWORD_HASH is not set".to_string());

    let template = LoginTemplate { error };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => AppError::Internal(format!("Template error: {e}")).into_response(),
    }
}
