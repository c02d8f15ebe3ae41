#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use simple_contact_form::auth::password;
use simple_contact_form::config::Config;
use simple_contact_form::db::{MemorySubmissionStore, SubmissionStore};

pub const ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const SEND_EMAIL: &str = "/simple-contact-form/v1/send-email";

/// A running test server instance backed by an in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<dyn SubmissionStore>,
    pub client: Client,
}

/// Session cookie plus the nonce the contact page issued for it.
pub struct Visitor {
    pub cookie: String,
    pub nonce: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Load the contact page like a browser would and capture the session.
    pub async fn visit_contact_page(&self) -> Visitor {
        let resp = self
            .client
            .get(self.url("/contact"))
            .send()
            .await
            .expect("contact page request failed");
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp
            .headers()
            .get_all("set-cookie")
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("scf_session="))
            .and_then(|v| v.split(';').next())
            .expect("contact page did not set a session cookie")
            .to_string();

        let html = resp.text().await.unwrap();
        let nonce = extract_nonce(&html).expect("contact page did not embed a nonce");

        Visitor { cookie, nonce }
    }

    /// Submit form-urlencoded data with the visitor's cookie and nonce.
    pub async fn submit_form(&self, visitor: &Visitor, data: &[(&str, &str)]) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url(SEND_EMAIL))
            .header("cookie", &visitor.cookie)
            .header("x-wp-nonce", &visitor.nonce)
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    /// Submit a JSON body with the visitor's cookie and nonce.
    pub async fn submit_json(&self, visitor: &Visitor, data: &Value) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url(SEND_EMAIL))
            .header("cookie", &visitor.cookie)
            .header("x-wp-nonce", &visitor.nonce)
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    /// Log in as admin and return the access token.
    pub async fn admin_token(&self) -> String {
        let (body, status) = self.login(ADMIN_PASSWORD).await;
        assert_eq!(status, StatusCode::OK, "admin login failed: {body}");
        body["access_token"].as_str().unwrap().to_string()
    }

    pub async fn login(&self, password: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/v1/auth/login"))
            .json(&json!({ "password": password }))
            .send()
            .await
            .expect("login request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Authenticated GET returning JSON.
    pub async fn get_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Authenticated GET returning the raw body (HTML pages).
    pub async fn get_html(&self, path: &str, token: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }
}

pub fn extract_nonce(html: &str) -> Option<String> {
    let start = html.find("const nonce = '")? + "const nonce = '".len();
    let len = html[start..].find('\'')?;
    Some(html[start..start + len].to_string())
}

pub fn test_config() -> Config {
    Config {
        database_url: None,
        secret: "test-secret-that-is-long-enough".to_string(),
        admin_password_hash: Some(password::hash(ADMIN_PASSWORD).expect("hash admin password")),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 65_536,
        max_fields: 50,
        nonce_ttl_secs: 3600,
        secure_cookies: false,
        trusted_proxies: vec![],
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app with a fresh in-memory store.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_store(Arc::new(MemorySubmissionStore::new())).await
}

pub async fn spawn_app_with_store(store: Arc<dyn SubmissionStore>) -> TestApp {
    let app = simple_contact_form::build_app(store.clone(), test_config());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        store,
        client,
    }
}
