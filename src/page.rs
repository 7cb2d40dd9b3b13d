//! UI state owned by the landing page: the mobile menu and the contact form.

use std::{str::FromStr, time::Duration};

use a1day1_notification::Forwarder;
use a1day1_shared::{Inquiry, ProjectType};
use async_trait::async_trait;
use serde::Deserialize;
use strum::{AsRefStr, Display, VariantArray};
use tokio::{sync::watch, time::Instant};

/// How long the success banner stays before the form returns to idle.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    Home,
    Portfolio,
    Services,
    Testimonials,
    About,
    Contact,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Portfolio => "Portfolio",
            Section::Services => "Services",
            Section::Testimonials => "Testimonials",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    open: bool,
}

impl Menu {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Jumping to a section always closes the menu.
    pub fn navigate(&mut self, section: Section) -> Section {
        self.open = false;
        section
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Raw form values as the browser posts them.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    pub fn to_inquiry(&self) -> a1day1_shared::Result<Inquiry> {
        let Ok(project_type) = ProjectType::from_str(&self.project_type) else {
            a1day1_shared::bail!("unknown project type '{}'", self.project_type);
        };

        let phone = Some(&self.phone).filter(|p| !p.is_empty()).cloned();

        Ok(Inquiry {
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            phone,
            project_type,
            message: self.message.to_owned(),
        })
    }
}

/// The single network call a submission makes.
#[async_trait]
pub trait Submit: Send + Sync {
    async fn submit(&self, inquiry: Inquiry) -> a1day1_shared::Result<()>;
}

#[async_trait]
impl Submit for Forwarder {
    async fn submit(&self, inquiry: Inquiry) -> a1day1_shared::Result<()> {
        self.forward(&inquiry).await.map(|_| ())
    }
}

/// Contact form with its visible status banner.
///
/// Double submissions are not guarded: each call to [`ContactForm::submit`]
/// makes its own request.
#[derive(Debug)]
pub struct ContactForm {
    pub fields: ContactFields,
    status: watch::Sender<SubmissionStatus>,
    succeeded_at: Option<Instant>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(ContactFields::default())
    }
}

impl ContactForm {
    pub fn new(fields: ContactFields) -> Self {
        Self {
            fields,
            status: watch::Sender::new(SubmissionStatus::Idle),
            succeeded_at: None,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        *self.status.borrow()
    }

    #[cfg(test)]
    fn watch(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    /// Status as it should appear at `now`, accounting for the success reset.
    pub fn status_at(&self, now: Instant) -> SubmissionStatus {
        match (self.status(), self.succeeded_at) {
            (SubmissionStatus::Success, Some(at)) if now >= at + SUCCESS_RESET_DELAY => {
                SubmissionStatus::Idle
            }
            (status, _) => status,
        }
    }

    /// Time left before a success banner expires.
    pub fn reset_in(&self, now: Instant) -> Option<Duration> {
        match (self.status(), self.succeeded_at) {
            (SubmissionStatus::Success, Some(at)) => {
                Some((at + SUCCESS_RESET_DELAY).saturating_duration_since(now))
            }
            _ => None,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.status() == SubmissionStatus::Success
            && self.status_at(now) == SubmissionStatus::Idle
        {
            self.succeeded_at = None;
            self.status.send_replace(SubmissionStatus::Idle);
        }
    }

    pub async fn submit<S: Submit + ?Sized>(&mut self, submitter: &S) -> SubmissionStatus {
        self.succeeded_at = None;
        self.status.send_replace(SubmissionStatus::Submitting);

        let result = match self.fields.to_inquiry() {
            Ok(inquiry) => submitter.submit(inquiry).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.succeeded_at = Some(Instant::now());
                self.status.send_replace(SubmissionStatus::Success);
            }
            Err(err) => {
                tracing::error!(err = %err, "Error submitting contact form");
                self.status.send_replace(SubmissionStatus::Error);
            }
        }

        self.status()
    }
}
