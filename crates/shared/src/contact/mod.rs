use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const PHONE_PLACEHOLDER: &str = "Not provided";

/// Service categories offered on the landing page.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum ProjectType {
    #[default]
    #[serde(rename = "Branded Content")]
    #[strum(serialize = "Branded Content")]
    BrandedContent,
    #[serde(rename = "Brand Documentaries")]
    #[strum(serialize = "Brand Documentaries")]
    BrandDocumentaries,
    #[serde(rename = "Narrative & Doc Films")]
    #[strum(serialize = "Narrative & Doc Films")]
    NarrativeDocFilms,
    #[serde(rename = "Corporate Shoots")]
    #[strum(serialize = "Corporate Shoots")]
    CorporateShoots,
    Commercials,
    #[serde(rename = "Full Production")]
    #[strum(serialize = "Full Production")]
    FullProduction,
    Other,
}

/// A single contact-form submission. Never stored, forwarded once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    pub project_type: ProjectType,
    pub message: String,
}

impl Inquiry {
    pub fn phone_or_placeholder(&self) -> &str {
        self.phone.as_deref().unwrap_or(PHONE_PLACEHOLDER)
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.filter(|v| !v.is_empty()))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn project_type_uses_display_names_on_the_wire() {
        assert_eq!(
            ProjectType::NarrativeDocFilms.to_string(),
            "Narrative & Doc Films"
        );
        assert_eq!(
            ProjectType::from_str("Corporate Shoots").ok(),
            Some(ProjectType::CorporateShoots)
        );
        assert_eq!(
            serde_json::to_string(&ProjectType::FullProduction).unwrap(),
            r#""Full Production""#
        );
        assert_eq!(ProjectType::VARIANTS.len(), 7);
    }

    #[test]
    fn inquiry_reads_camel_case_payload() {
        let inquiry: Inquiry = serde_json::from_str(
            r#"{
                "name": "Jane",
                "email": "jane@example.com",
                "phone": "555-0100",
                "projectType": "Commercials",
                "message": "Hello"
            }"#,
        )
        .unwrap();

        assert_eq!(inquiry.project_type, ProjectType::Commercials);
        assert_eq!(inquiry.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn missing_or_empty_phone_falls_back_to_placeholder() {
        let missing: Inquiry = serde_json::from_str(
            r#"{"name":"a","email":"a@b.c","projectType":"Other","message":"m"}"#,
        )
        .unwrap();
        let empty: Inquiry = serde_json::from_str(
            r#"{"name":"a","email":"a@b.c","phone":"","projectType":"Other","message":"m"}"#,
        )
        .unwrap();
        let null: Inquiry = serde_json::from_str(
            r#"{"name":"a","email":"a@b.c","phone":null,"projectType":"Other","message":"m"}"#,
        )
        .unwrap();

        assert_eq!(missing.phone_or_placeholder(), PHONE_PLACEHOLDER);
        assert_eq!(empty.phone_or_placeholder(), PHONE_PLACEHOLDER);
        assert_eq!(null.phone, None);
    }

    #[test]
    fn whitespace_phone_is_forwarded_as_typed() {
        let spaces: Inquiry = serde_json::from_str(
            r#"{"name":"a","email":"a@b.c","phone":"  ","projectType":"Other","message":"m"}"#,
        )
        .unwrap();

        assert_eq!(spaces.phone.as_deref(), Some("  "));
        assert_eq!(spaces.phone_or_placeholder(), "  ");
    }

    #[test]
    fn unknown_project_type_is_rejected() {
        let result = serde_json::from_str::<Inquiry>(
            r#"{"name":"a","email":"a@b.c","projectType":"Wedding","message":"m"}"#,
        );

        assert!(result.is_err());
    }
}
