use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

/// Header twinspark adds to the requests it makes.
pub const PARTIAL_HEADER: &str = "ts-request";

pub(crate) mod filters {
    /// Versioned path to an embedded static file.
    #[askama::filter_fn]
    pub fn asset(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let version = askama::get_value::<String>(values, "version")?;

        Ok(format!(
            "/static/{}?v={version}",
            value.trim_start_matches('/')
        ))
    }
}

pub struct Template {
    partial: bool,
}

impl Template {
    pub fn new(partial: bool) -> Self {
        Self { partial }
    }

    /// True when the request came from twinspark and expects a fragment
    /// instead of a full page.
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert(
            "version",
            Box::new(env!("CARGO_PKG_VERSION").to_owned()),
        );

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "Failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let partial = parts
            .headers
            .get(PARTIAL_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        Ok(Template::new(partial))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
