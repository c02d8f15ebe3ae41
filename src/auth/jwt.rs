use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Hours an admin access token stays valid.
pub const ADMIN_TOKEN_HOURS: i64 = 8;

pub const ADMIN_SUBJECT: &str = "admin";

/// Claims carried by an admin access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

impl Claims {
    pub fn admin() -> Self {
        Self {
            sub: ADMIN_SUBJECT.to_string(),
            exp: (Utc::now() + Duration::hours(ADMIN_TOKEN_HOURS)).timestamp(),
        }
    }
}

pub fn encode_token<T: Serialize>(claims: &T, secret: &str) -> Result<String, String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("JWT encode failed: {e}"))
}

pub fn decode_token<T: DeserializeOwned>(token: &str, secret: &str) -> Result<T, String> {
    decode::<T>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| format!("JWT decode failed: {e}"))
}
