use a1day1_shared::{Error, Inquiry, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::{EmailConfig, EmailService, EmailTransport, Provider, template::InquiryEmail};

/// Sends the inquiry to the business inbox with a fixed sender and
/// recipient, replying to the submitter.
pub struct EmailProvider {
    mailer: Mailer,
    from: String,
    to: String,
}

enum Mailer {
    Api(ApiMailer),
    Smtp(EmailService),
}

impl EmailProvider {
    pub fn from_config(client: reqwest::Client, config: &EmailConfig) -> Result<Self> {
        let mailer = match config.transport {
            EmailTransport::Api => Mailer::Api(ApiMailer {
                client,
                api_url: config.api_url.trim_end_matches('/').to_owned(),
                api_key: config.api_key()?.to_owned(),
            }),
            EmailTransport::Smtp => Mailer::Smtp(EmailService::new(config)?),
        };

        Ok(Self {
            mailer,
            from: config.from.to_owned(),
            to: config.to.to_owned(),
        })
    }
}

#[async_trait]
impl Provider for EmailProvider {
    fn name(&self) -> &'static str {
        match self.mailer {
            Mailer::Api(_) => "email-api",
            Mailer::Smtp(_) => "email-smtp",
        }
    }

    async fn deliver(&self, inquiry: &Inquiry) -> Result<Option<Value>> {
        let email = InquiryEmail::render(inquiry)?;

        match &self.mailer {
            Mailer::Api(api) => api.send(&self.from, &self.to, &inquiry.email, &email).await,
            Mailer::Smtp(smtp) => {
                smtp.send(&self.from, &self.to, &inquiry.email, &email).await?;

                Ok(None)
            }
        }
    }
}

/// Transactional email HTTP API (Resend compatible).
struct ApiMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

impl ApiMailer {
    #[tracing::instrument(skip(self, email), fields(subject = %email.subject))]
    async fn send(
        &self,
        from: &str,
        to: &str,
        reply_to: &str,
        email: &InquiryEmail,
    ) -> Result<Option<Value>> {
        let request = SendEmailRequest {
            from,
            to: [to],
            reply_to,
            subject: &email.subject,
            html: &email.html,
            text: &email.plain,
        };

        tracing::info!("Sending email through api");

        let response = self
            .client
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body = %body, "Email api rejected inquiry");

            return Err(Error::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let data: Option<Value> = serde_json::from_str(&body).ok();

        let error = data
            .as_ref()
            .and_then(|d| d.get("error"))
            .filter(|e| !e.is_null());

        if let Some(error) = error {
            tracing::warn!(status = status.as_u16(), error = %error, "Email api returned an error");

            return Err(Error::Provider {
                status: status.as_u16(),
                body: error.to_string(),
            });
        }

        Ok(data)
    }
}
