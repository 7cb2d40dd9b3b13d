mod config;
mod email;
mod provider;
mod relay;
mod service;
pub mod template;
mod webhook;

pub use config::*;
pub use email::EmailProvider;
pub use provider::*;
pub use relay::RelayProvider;
pub use service::EmailService;
pub use webhook::{WebhookPayload, WebhookProvider, timestamp};
