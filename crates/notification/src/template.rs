use a1day1_shared::{Inquiry, Result};
use askama::Template;

#[derive(Template)]
#[template(path = "inquiry.html")]
pub struct InquiryHtmlTemplate<'a> {
    pub inquiry: &'a Inquiry,
}

#[derive(Template)]
#[template(path = "inquiry.txt")]
pub struct InquiryPlainTemplate<'a> {
    pub inquiry: &'a Inquiry,
}

/// Rendered notification for the business inbox.
#[derive(Debug, Clone)]
pub struct InquiryEmail {
    pub subject: String,
    pub html: String,
    pub plain: String,
}

impl InquiryEmail {
    pub fn render(inquiry: &Inquiry) -> Result<Self> {
        let html = InquiryHtmlTemplate { inquiry }
            .render()
            .map_err(|e| anyhow::anyhow!("failed to render inquiry html email: {e}"))?;

        let plain = InquiryPlainTemplate { inquiry }
            .render()
            .map_err(|e| anyhow::anyhow!("failed to render inquiry plain email: {e}"))?;

        Ok(Self {
            subject: format!(
                "New inquiry from {} ({})",
                inquiry.name, inquiry.project_type
            ),
            html,
            plain,
        })
    }
}
