use a1day1_notification::Forwarder;
use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::template::{NotFoundTemplate, Template};

pub mod api;
pub mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub forwarder: Forwarder,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        let forwarder = Forwarder::new(config.contact.clone());

        Self { config, forwarder }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .route("/contact/form", get(contact::form))
        .route("/api/contact", post(api::contact))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
