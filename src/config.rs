use std::net::IpAddr;

use ipnet::IpNet;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub secret: String,
    pub admin_password_hash: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub max_fields: usize,
    pub nonce_ttl_secs: i64,
    pub secure_cookies: bool,
    pub trusted_proxies: Vec<IpNet>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let secret = env_required("SCF_SECRET")?;
        if secret.len() < 16 {
            return Err("SCF_SECRET must be at least 16 characters".to_string());
        }

        let admin_password_hash = std::env::var("SCF_ADMIN_PASSWORD_HASH")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let host: IpAddr = env_or("SCF_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SCF_HOST: {e}"))?;

        let port: u16 = env_or("SCF_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid SCF_PORT: {e}"))?;

        let max_body_size: usize = env_or("SCF_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid SCF_MAX_BODY_SIZE: {e}"))?;

        let max_fields: usize = env_or("SCF_MAX_FIELDS", "50")
            .parse()
            .map_err(|e| format!("Invalid SCF_MAX_FIELDS: {e}"))?;

        let nonce_ttl_secs: i64 = env_or("SCF_NONCE_TTL_SECS", "86400")
            .parse()
            .map_err(|e| format!("Invalid SCF_NONCE_TTL_SECS: {e}"))?;

        let secure_cookies = matches!(
            env_or("SCF_SECURE_COOKIES", "false").as_str(),
            "true" | "1" | "yes"
        );

        let trusted_proxies: Vec<IpNet> = env_or("SCF_TRUSTED_PROXIES", "")
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|e| format!("Invalid SCF_TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let log_level = env_or("SCF_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            secret,
            admin_password_hash,
            host,
            port,
            max_body_size,
            max_fields,
            nonce_ttl_secs,
            secure_cookies,
            trusted_proxies,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
