use a1day1_shared::{Error, Inquiry, ProjectType, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde_json::Value;

use crate::Provider;

/// Hosted form relay (Formspree and friends). Receives the same fields the
/// browser form would post.
pub struct RelayProvider {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RelayForm<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    project_type: ProjectType,
    message: &'a str,
}

impl RelayProvider {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Provider for RelayProvider {
    fn name(&self) -> &'static str {
        "relay"
    }

    async fn deliver(&self, inquiry: &Inquiry) -> Result<Option<Value>> {
        let form = RelayForm {
            name: &inquiry.name,
            email: &inquiry.email,
            phone: inquiry.phone.as_deref().unwrap_or_default(),
            project_type: inquiry.project_type,
            message: &inquiry.message,
        };

        let response = self
            .client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body = %body, "Form relay rejected inquiry");

            return Err(Error::Provider {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body).ok())
    }
}
