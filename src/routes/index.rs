use a1day1_notification::ContactConfig;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use strum::VariantArray;
use time::OffsetDateTime;

use crate::config::{ContactCta, SiteConfig};
use crate::content::{self, Service, Testimonial};
use crate::page::{ContactForm, Menu, Section, SubmissionStatus};
use crate::routes::{AppState, contact::ContactFormView};
use crate::template::{Template, filters};

pub struct NavLink {
    pub href: String,
    pub label: &'static str,
    pub cta: bool,
}

fn menu_query(menu: Menu) -> String {
    format!("/?menu={}", if menu.is_open() { "open" } else { "closed" })
}

/// Section links carry the menu state that follows the jump, so following
/// one from an open mobile menu closes it.
fn nav_links(menu: Menu) -> Vec<NavLink> {
    Section::VARIANTS
        .iter()
        .map(|&section| {
            let mut menu = menu;
            let target = menu.navigate(section);
            let cta = target == Section::Contact;

            NavLink {
                href: format!("{}#{target}", menu_query(menu)),
                label: if cta { "Get Started" } else { target.label() },
                cta,
            }
        })
        .collect()
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site: SiteConfig,
    pub menu_open: bool,
    pub menu_toggle: String,
    pub nav: Vec<NavLink>,
    pub portfolio: &'static [&'static str],
    pub vimeo_hash: &'static str,
    pub services: &'static [Service],
    pub testimonials: &'static [Testimonial],
    pub show_form: bool,
    pub form: ContactFormView,
    /// Seconds before a full-page success view reloads to an idle form.
    pub refresh_after: Option<u64>,
    pub year: i32,
}

impl IndexTemplate {
    pub fn new(
        site: &SiteConfig,
        contact: &ContactConfig,
        menu: Menu,
        form: &mut ContactForm,
    ) -> Self {
        let form = ContactFormView::new(form, site, contact);
        let refresh_after =
            (form.status == SubmissionStatus::Success).then_some(form.reset_after_secs);

        let mut toggled = menu;
        toggled.toggle();

        Self {
            site: site.clone(),
            menu_open: menu.is_open(),
            menu_toggle: menu_query(toggled),
            nav: nav_links(menu),
            portfolio: content::PORTFOLIO,
            vimeo_hash: content::VIMEO_HASH,
            services: content::SERVICES,
            testimonials: content::TESTIMONIALS,
            show_form: site.contact_cta == ContactCta::Form,
            form,
            refresh_after,
            year: OffsetDateTime::now_utc().year(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub menu: Option<String>,
}

/// GET / - Landing page
///
/// `?menu=open` renders the mobile menu expanded; it works without JavaScript.
pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let mut menu = Menu::default();
    if query.menu.as_deref() == Some("open") {
        menu.toggle();
    }

    template
        .render(IndexTemplate::new(
            &app.config.site,
            &app.config.contact,
            menu,
            &mut ContactForm::default(),
        ))
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_menu_links_close_it() {
        let mut menu = Menu::default();
        menu.toggle();

        let links = nav_links(menu);

        assert_eq!(links.len(), Section::VARIANTS.len());
        assert_eq!(links[2].href, "/?menu=closed#services");
        assert_eq!(links[2].label, "Services");
        assert!(links.last().is_some_and(|l| l.cta && l.label == "Get Started"));
    }
}
