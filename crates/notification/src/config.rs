use a1day1_shared::{Error, Result};
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

/// Which provider receives inquiries. Chosen by configuration only.
#[derive(
    Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Webhook,
    Email,
    Relay,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ContactConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    #[serde(default)]
    pub webhook: WebhookConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub relay: RelayConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WebhookConfig {
    /// Spreadsheet ingestion script, e.g. a Google Apps Script web app.
    #[serde(default)]
    pub url: Option<String>,
}

impl WebhookConfig {
    pub fn url(&self) -> Result<&str> {
        required(&self.url, "webhook url")
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RelayConfig {
    #[serde(default)]
    pub url: Option<String>,
    /// The page posts straight to the relay instead of this server.
    #[serde(default)]
    pub direct: bool,
}

impl RelayConfig {
    pub fn url(&self) -> Result<&str> {
        required(&self.url, "relay url")
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmailTransport {
    #[default]
    Api,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub transport: EmailTransport,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub smtp_host: Option<String>,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from")]
    pub from: String,
    #[serde(default = "default_to")]
    pub to: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            transport: EmailTransport::default(),
            api_url: default_api_url(),
            api_key: None,
            smtp_host: None,
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from: default_from(),
            to: default_to(),
        }
    }
}

impl EmailConfig {
    pub fn api_key(&self) -> Result<&str> {
        required(&self.api_key, "email api key")
    }

    pub fn smtp_host(&self) -> Result<&str> {
        required(&self.smtp_host, "smtp host")
    }
}

fn default_api_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from() -> String {
    "A1 Day1 Productions <noreply@a1day1productions.com>".to_string()
}

fn default_to() -> String {
    "info@a1day1productions.com".to_string()
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::Config(name)),
    }
}
