use a1day1_shared::{Error, Inquiry, ProjectType, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use time::{OffsetDateTime, macros::format_description};

use crate::Provider;

/// Posts inquiries as JSON to a spreadsheet ingestion script.
pub struct WebhookProvider {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub project_type: ProjectType,
    pub message: &'a str,
    pub timestamp: String,
}

impl<'a> WebhookPayload<'a> {
    pub fn new(inquiry: &'a Inquiry, at: OffsetDateTime) -> Result<Self> {
        Ok(Self {
            name: &inquiry.name,
            email: &inquiry.email,
            phone: inquiry.phone_or_placeholder(),
            project_type: inquiry.project_type,
            message: &inquiry.message,
            timestamp: timestamp(at)?,
        })
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2025-03-01T10:15:30.042Z`.
pub fn timestamp(at: OffsetDateTime) -> Result<String> {
    let format =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

    at.to_offset(time::UtcOffset::UTC)
        .format(format)
        .map_err(|e| Error::Unknown(e.into()))
}

impl WebhookProvider {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Provider for WebhookProvider {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn deliver(&self, inquiry: &Inquiry) -> Result<Option<Value>> {
        let payload = WebhookPayload::new(inquiry, OffsetDateTime::now_utc())?;

        let response = self.client.post(&self.url).json(&payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Webhook rejected inquiry");

            return Err(Error::Provider {
                status: status.as_u16(),
                body,
            });
        }

        Ok(None)
    }
}
