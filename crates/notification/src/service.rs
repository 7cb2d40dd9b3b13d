//! SMTP delivery using lettre

use a1day1_shared::Result;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};

use crate::{EmailConfig, template::InquiryEmail};

/// SMTP mailer for sending inquiry notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let smtp_host = config.smtp_host()?;

        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }

    pub fn build_message(
        from: &str,
        to: &str,
        reply_to: &str,
        email: &InquiryEmail,
    ) -> Result<Message> {
        Ok(Message::builder()
            .from(from.parse::<Mailbox>()?)
            .reply_to(reply_to.parse::<Mailbox>()?)
            .to(to.parse::<Mailbox>()?)
            .subject(email.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(
                email.plain.to_owned(),
                email.html.to_owned(),
            ))?)
    }

    #[tracing::instrument(skip(self, email), fields(subject = %email.subject))]
    pub async fn send(
        &self,
        from: &str,
        to: &str,
        reply_to: &str,
        email: &InquiryEmail,
    ) -> Result<()> {
        let message = Self::build_message(from, to, reply_to, email)?;
        let mailer = self.mailer.clone();

        tracing::info!("Sending email over SMTP");

        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .map_err(anyhow::Error::from)??;

        Ok(())
    }
}
