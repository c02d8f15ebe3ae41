//! Anti-forgery nonces for the public submission endpoint.
//!
//! A visitor gets a random session id in an `HttpOnly` cookie. The nonce
//! embedded in the page is a signed, expiring token bound to that session id
//! and to the action it authorizes. A request passes only when the nonce
//! header and the session cookie belong together.

use axum::http::HeaderMap;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use super::jwt::{decode_token, encode_token};

pub const SESSION_COOKIE: &str = "scf_session";

/// Headers the client may echo the nonce back in, in lookup order.
pub const NONCE_HEADERS: [&str; 2] = ["x-wp-nonce", "x-csrf-token"];

/// Action every nonce issued by the form page authorizes.
pub const REST_ACTION: &str = "wp_rest";

#[derive(Debug, Serialize, Deserialize)]
struct NonceClaims {
    sid: String,
    act: String,
    exp: i64,
}

pub fn new_session_id() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

/// Return the caller's session id, minting a cookie for first-time visitors.
pub fn ensure_session(jar: CookieJar, secure: bool) -> (CookieJar, String) {
    if let Some(existing) = jar.get(SESSION_COOKIE) {
        if !existing.value().is_empty() {
            let sid = existing.value().to_string();
            return (jar, sid);
        }
    }

    let sid = new_session_id();
    let cookie = Cookie::build((SESSION_COOKIE, sid.clone()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .build();
    (jar.add(cookie), sid)
}

pub fn issue(session_id: &str, action: &str, secret: &str, ttl_secs: i64) -> Result<String, String> {
    let claims = NonceClaims {
        sid: session_id.to_string(),
        act: action.to_string(),
        exp: (Utc::now() + Duration::seconds(ttl_secs)).timestamp(),
    };
    encode_token(&claims, secret)
}

pub fn verify(nonce: &str, session_id: &str, action: &str, secret: &str) -> bool {
    let Ok(claims) = decode_token::<NonceClaims>(nonce, secret) else {
        return false;
    };

    claims.act == action && bool::from(claims.sid.as_bytes().ct_eq(session_id.as_bytes()))
}

/// Check the nonce echoed in the request headers against the session cookie.
pub fn verify_request(headers: &HeaderMap, jar: &CookieJar, secret: &str) -> bool {
    let Some(nonce) = NONCE_HEADERS
        .iter()
        .find_map(|name| headers.get(*name).and_then(|v| v.to_str().ok()))
    else {
        return false;
    };

    let Some(session) = jar.get(SESSION_COOKIE) else {
        return false;
    };

    verify(nonce, session.value(), REST_ACTION, secret)
}
