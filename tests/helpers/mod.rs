//! Shared setup for router-level tests: configuration pointing at a mock
//! provider, a ready router and a helper to run one request through it.

#![allow(dead_code)]

use a1day1::{
    AppState, Config,
    config::{ContactCta, LoggingConfig, ServerConfig, SiteConfig},
};
use a1day1_notification::{ContactConfig, ProviderKind, RelayConfig, WebhookConfig};
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde::Serialize;
use tower::ServiceExt;

pub fn config(contact: ContactConfig) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        logging: LoggingConfig::default(),
        site: SiteConfig::default(),
        contact,
    }
}

pub fn webhook_config(url: Option<String>) -> Config {
    config(ContactConfig {
        provider: ProviderKind::Webhook,
        webhook: WebhookConfig { url },
        ..Default::default()
    })
}

pub fn direct_relay_config(url: &str) -> Config {
    config(ContactConfig {
        provider: ProviderKind::Relay,
        relay: RelayConfig {
            url: Some(url.to_owned()),
            direct: true,
        },
        ..Default::default()
    })
}

pub fn mailto_config() -> Config {
    let mut config = webhook_config(None);
    config.site.contact_cta = ContactCta::Mailto;
    config
}

pub fn app(config: Config) -> Router {
    a1day1::router(AppState::new(config))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

/// Form post as the browser sends it; `partial` adds the twinspark header.
pub fn post_form<T: Serialize>(uri: &str, form: &T, partial: bool) -> Request<Body> {
    let mut builder = Request::post(uri).header(
        header::CONTENT_TYPE,
        "application/x-www-form-urlencoded",
    );

    if partial {
        builder = builder.header("ts-request", "true");
    }

    builder
        .body(Body::from(serde_urlencoded::to_string(form).unwrap()))
        .unwrap()
}

pub const INQUIRY_JSON: &str = r#"{
    "name": "Jane Doe",
    "email": "jane@example.com",
    "phone": "555-0100",
    "projectType": "Commercials",
    "message": "We need a 30 second spot"
}"#;

pub fn inquiry_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("phone", ""),
        ("projectType", "Narrative & Doc Films"),
        ("message", "A short film about our founders"),
    ]
}
