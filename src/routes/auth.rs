use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::auth::extractor::ACCESS_COOKIE;
use crate::auth::jwt::{Claims, encode_token};
use crate::auth::password;
use crate::client_ip;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub access_token: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn access_cookie(token: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((ACCESS_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .build()
}

pub async fn login(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let ip = client_ip::resolve(&headers, addr.ip(), &state.config.trusted_proxies);

    if let Err(retry_after) = state.login_limiter.check(ip) {
        return Err(AppError::RateLimited(format!(
            "Too many failed login attempts. Retry after {retry_after}s"
        )));
    }

    let Some(hash) = state.config.admin_password_hash.as_deref() else {
        return Err(AppError::Unauthorized("Admin login is disabled".to_string()));
    };

    if req.password.is_empty() {
        return Err(AppError::BadRequest("Password is required".to_string()));
    }

    let valid = password::verify(&req.password, hash).map_err(AppError::Internal)?;
    if !valid {
        state.login_limiter.record_failure(ip);
        tracing::warn!(%ip, "Failed admin login");
        return Err(AppError::Unauthorized("Invalid password".to_string()));
    }

    state.login_limiter.clear(ip);

    let access_token = encode_token(&Claims::admin(), &state.config.secret)
        .map_err(AppError::Internal)?;
    tracing::info!(%ip, "Admin logged in");

    let jar = jar.add(access_cookie(&access_token, state.config.secure_cookies));
    Ok((jar, Json(AuthResponse { access_token })))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build(ACCESS_COOKIE).path("/"));
    (
        jar,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}
