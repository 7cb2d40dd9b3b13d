use a1day1_notification::{ContactConfig, ProviderKind};
use a1day1_shared::ProjectType;
use axum::{
    extract::{Form, State},
    response::{IntoResponse, Response},
};
use strum::VariantArray;
use tokio::time::Instant;

use crate::{
    config::SiteConfig,
    page::{ContactFields, ContactForm, Menu, SUCCESS_RESET_DELAY, SubmissionStatus},
    routes::{AppState, index::IndexTemplate},
    template::{Template, filters},
};

/// Accept header the relay needs to answer with JSON instead of a redirect.
pub const RELAY_ACCEPT: &str = "application/json";

pub struct ProjectOption {
    pub value: &'static str,
    pub selected: bool,
}

/// Everything the contact form markup needs for one render.
pub struct ContactFormView {
    pub fields: ContactFields,
    pub status: SubmissionStatus,
    pub action: String,
    /// The browser posts to a third-party relay with `relay-form.js` and
    /// updates the banners itself.
    pub direct: bool,
    pub accept: &'static str,
    pub business_email: String,
    pub options: Vec<ProjectOption>,
    /// Whole seconds until a success banner resets.
    pub reset_after_secs: u64,
}

impl ContactFormView {
    pub fn new(form: &mut ContactForm, site: &SiteConfig, contact: &ContactConfig) -> Self {
        let now = Instant::now();
        form.tick(now);

        let reset_after = form.reset_in(now).unwrap_or(SUCCESS_RESET_DELAY);
        let reset_after_secs = reset_after.as_secs() + u64::from(reset_after.subsec_nanos() > 0);

        let direct_url = match contact.provider {
            ProviderKind::Relay if contact.relay.direct => contact.relay.url().ok(),
            _ => None,
        };

        let options = ProjectType::VARIANTS
            .iter()
            .map(|p| {
                let value: &'static str = p.as_ref();

                ProjectOption {
                    value,
                    selected: value == form.fields.project_type,
                }
            })
            .collect();

        Self {
            fields: form.fields.clone(),
            status: form.status(),
            action: direct_url.unwrap_or("/contact").to_owned(),
            direct: direct_url.is_some(),
            accept: RELAY_ACCEPT,
            business_email: site.email.to_owned(),
            options,
            reset_after_secs,
        }
    }

    pub fn reset_after_ms(&self) -> u64 {
        self.reset_after_secs * 1000
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == SubmissionStatus::Error
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub form: ContactFormView,
}

/// POST /contact
///
/// twinspark swaps the returned fragment in place; plain form posts get the
/// whole page back with the form scrolled into view.
pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(fields): Form<ContactFields>,
) -> Response {
    let mut form = ContactForm::new(fields);
    form.submit(&app.forwarder).await;

    if template.is_partial() {
        return template
            .render(ContactFormTemplate {
                form: ContactFormView::new(&mut form, &app.config.site, &app.config.contact),
            })
            .into_response();
    }

    template
        .render(IndexTemplate::new(
            &app.config.site,
            &app.config.contact,
            Menu::default(),
            &mut form,
        ))
        .into_response()
}

/// GET /contact/form - Idle form, requested once the success banner expires
pub async fn form(template: Template, State(app): State<AppState>) -> Response {
    template
        .render(ContactFormTemplate {
            form: ContactFormView::new(
                &mut ContactForm::default(),
                &app.config.site,
                &app.config.contact,
            ),
        })
        .into_response()
}
