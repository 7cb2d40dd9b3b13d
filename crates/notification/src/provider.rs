use a1day1_shared::{Inquiry, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::{ContactConfig, EmailProvider, ProviderKind, RelayProvider, WebhookProvider};

/// An external service that stores or delivers an inquiry.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Delivers the inquiry once. Returns whatever the provider answered
    /// with when it is worth handing back to the caller.
    async fn deliver(&self, inquiry: &Inquiry) -> Result<Option<Value>>;
}

/// Resolves the configured provider and forwards inquiries to it.
///
/// The provider is looked up on every call so a missing secret surfaces as
/// a failed submission rather than a startup crash.
#[derive(Clone)]
pub struct Forwarder {
    config: ContactConfig,
    client: reqwest::Client,
}

impl Forwarder {
    pub fn new(config: ContactConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: ContactConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    pub fn kind(&self) -> ProviderKind {
        self.config.provider
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    pub fn provider(&self) -> Result<Box<dyn Provider>> {
        let provider: Box<dyn Provider> = match self.config.provider {
            ProviderKind::Webhook => Box::new(WebhookProvider::new(
                self.client.clone(),
                self.config.webhook.url()?,
            )),
            ProviderKind::Email => Box::new(EmailProvider::from_config(
                self.client.clone(),
                &self.config.email,
            )?),
            ProviderKind::Relay => Box::new(RelayProvider::new(
                self.client.clone(),
                self.config.relay.url()?,
            )),
        };

        Ok(provider)
    }

    pub fn is_configured(&self) -> bool {
        self.provider().is_ok()
    }

    #[tracing::instrument(
        skip_all,
        fields(provider = %self.config.provider, project_type = %inquiry.project_type)
    )]
    pub async fn forward(&self, inquiry: &Inquiry) -> Result<Option<Value>> {
        let provider = self.provider()?;
        let data = provider.deliver(inquiry).await?;

        tracing::info!(provider = provider.name(), "Inquiry forwarded");

        Ok(data)
    }
}
