use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::auth::jwt::{self, ADMIN_SUBJECT, Claims};
use crate::error::AppError;
use crate::state::SharedState;

pub const ACCESS_COOKIE: &str = "access_token";

/// An authenticated administrator. Accepts a Bearer token or the
/// `access_token` cookie set at login.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub claims: Claims,
}

impl AdminUser {
    fn from_token(token: &str, secret: &str) -> Result<Self, AppError> {
        let claims: Claims = jwt::decode_token(token, secret)
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

        if claims.sub != ADMIN_SUBJECT {
            return Err(AppError::Unauthorized("Invalid or expired token".to_string()));
        }

        Ok(AdminUser { claims })
    }
}

impl FromRequestParts<SharedState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        // Bearer token from Authorization header first
        if let Some(auth_header) = parts.headers.get("authorization") {
            let auth_str = auth_header
                .to_str()
                .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return AdminUser::from_token(token, &state.config.secret);
            }
        }

        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get(ACCESS_COOKIE) {
            return AdminUser::from_token(cookie.value(), &state.config.secret);
        }

        Err(AppError::Unauthorized(
            "Missing authentication token".to_string(),
        ))
    }
}
