use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::CookieJar;

use crate::auth::nonce;
use crate::error::AppError;
use crate::form;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "contact/page.html")]
struct ContactPageTemplate {
    form: String,
    script: String,
}

/// Full contact page: the form plus the footer script carrying a nonce
/// bound to the visitor's session cookie.
pub async fn page(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (jar, session_id) = nonce::ensure_session(jar, state.config.secure_cookies);
    let nonce = nonce::issue(
        &session_id,
        nonce::REST_ACTION,
        &state.config.secret,
        state.config.nonce_ttl_secs,
    )
    .map_err(AppError::Internal)?;

    let template = ContactPageTemplate {
        form: form::render().map_err(template_error)?,
        script: form::render_script(&nonce).map_err(template_error)?,
    };
    let html = template.render().map_err(template_error)?;

    Ok((jar, Html(html)))
}

/// Bare form markup for embedding in another page.
pub async fn form_fragment() -> Result<impl IntoResponse, AppError> {
    let html = form::render().map_err(template_error)?;
    Ok(Html(html))
}

fn template_error(e: askama::Error) -> AppError {
    AppError::Internal(format!("Template error: {e}"))
}
