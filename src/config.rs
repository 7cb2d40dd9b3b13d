use a1day1_notification::ContactConfig;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// What the landing page shows in its contact section.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactCta {
    #[default]
    Form,
    Mailto,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_site_email")]
    pub email: String,
    #[serde(default = "default_site_domain")]
    pub domain: String,
    #[serde(default)]
    pub contact_cta: ContactCta,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            email: default_site_email(),
            domain: default_site_domain(),
            contact_cta: ContactCta::default(),
        }
    }
}

fn default_site_name() -> String {
    "A1 Day1 Productions".to_string()
}

fn default_site_email() -> String {
    "info@a1day1productions.com".to_string()
}

fn default_site_domain() -> String {
    "a1day1productions.com".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Deployment variables (GOOGLE_SCRIPT_URL, RESEND_API_KEY, ...)
    /// 2. Environment variables (A1DAY1__CONTACT__PROVIDER, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("A1DAY1")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("CONTACT_PROVIDER", "contact.provider"),
            ("GOOGLE_SCRIPT_URL", "contact.webhook.url"),
            ("RESEND_API_KEY", "contact.email.api_key"),
            ("FORMSPREE_URL", "contact.relay.url"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Provider secrets are not checked here; a missing one only fails the
    /// submissions that need it.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.email.from.trim().is_empty() {
            return Err("Email sender must not be empty".to_string());
        }
        if self.contact.email.to.trim().is_empty() {
            return Err("Email recipient must not be empty".to_string());
        }
        Ok(())
    }
}
