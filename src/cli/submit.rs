use a1day1::{Config, routes::api::forward_inquiry};
use a1day1_notification::Forwarder;
use a1day1_shared::{Inquiry, ProjectType};
use anyhow::Result;

/// Sends one inquiry through the configured provider without starting the
/// server and prints the response the endpoint would have returned.
pub async fn submit(config: Config, inquiry: Inquiry) -> Result<()> {
    let forwarder = Forwarder::new(config.contact);
    let (status, response) = forward_inquiry(&forwarder, &inquiry).await;

    println!("{}", serde_json::to_string_pretty(&response)?);

    if !status.is_success() {
        anyhow::bail!("submission failed with status {status}");
    }

    Ok(())
}

pub fn parse_project_type(value: &str) -> Result<ProjectType, String> {
    value.parse::<ProjectType>().map_err(|_| {
        let names: Vec<String> = <ProjectType as strum::VariantArray>::VARIANTS
            .iter()
            .map(ToString::to_string)
            .collect();

        format!("expected one of: {}", names.join(", "))
    })
}
