use a1day1_notification::{
    ContactConfig, EmailConfig, Forwarder, ProviderKind, RelayConfig, WebhookConfig,
};
use a1day1_shared::{Error, Inquiry, ProjectType};
use mockito::Matcher;
use serde_json::json;

fn inquiry() -> Inquiry {
    Inquiry {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        phone: None,
        project_type: ProjectType::BrandDocumentaries,
        message: "Tell our story".to_owned(),
    }
}

fn webhook(url: Option<String>) -> Forwarder {
    Forwarder::new(ContactConfig {
        provider: ProviderKind::Webhook,
        webhook: WebhookConfig { url },
        ..Default::default()
    })
}

#[tokio::test]
async fn webhook_posts_json_with_placeholder_phone_and_timestamp() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/exec")
        .match_header("content-type", "application/json")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "phone": "Not provided",
                "projectType": "Brand Documentaries",
                "message": "Tell our story",
            })),
            Matcher::Regex(r#""timestamp":"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z""#.to_owned()),
        ]))
        .with_status(200)
        .with_body(r#"{"result":"success"}"#)
        .expect(1)
        .create_async()
        .await;

    let data = webhook(Some(format!("{}/exec", server.url())))
        .forward(&inquiry())
        .await?;

    assert!(data.is_none());
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn webhook_non_success_status_is_a_provider_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/exec")
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let result = webhook(Some(format!("{}/exec", server.url())))
        .forward(&inquiry())
        .await;

    let err = result.unwrap_err();
    assert!(matches!(&err, Error::Provider { status: 502, body } if body == "bad gateway"));
    assert!(err.to_string().ends_with("502: bad gateway"));
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_webhook_url_never_reaches_the_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let forwarder = webhook(None);
    let result = forwarder.forward(&inquiry()).await;

    assert!(matches!(result, Err(Error::Config("webhook url"))));
    assert!(!forwarder.is_configured());
    mock.assert_async().await;
}

#[tokio::test]
async fn email_api_sends_fixed_sender_and_recipient_with_reply_to() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/emails")
        .match_header("authorization", "Bearer re_test")
        .match_body(Matcher::PartialJson(json!({
            "from": "Studio <noreply@studio.test>",
            "to": ["inbox@studio.test"],
            "reply_to": "jane@example.com",
            "subject": "New inquiry from Jane Doe (Brand Documentaries)",
        })))
        .with_status(200)
        .with_body(r#"{"id":"49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"}"#)
        .create_async()
        .await;

    let forwarder = Forwarder::new(ContactConfig {
        provider: ProviderKind::Email,
        email: EmailConfig {
            api_url: server.url(),
            api_key: Some("re_test".to_owned()),
            from: "Studio <noreply@studio.test>".to_owned(),
            to: "inbox@studio.test".to_owned(),
            ..Default::default()
        },
        ..Default::default()
    });

    let data = forwarder.forward(&inquiry()).await?;

    assert_eq!(
        data,
        Some(json!({"id":"49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"}))
    );
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn email_api_error_response_is_a_provider_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/emails")
        .with_status(422)
        .with_body(r#"{"statusCode":422,"name":"validation_error","message":"Invalid `from` field."}"#)
        .create_async()
        .await;

    let forwarder = Forwarder::new(ContactConfig {
        provider: ProviderKind::Email,
        email: EmailConfig {
            api_url: server.url(),
            api_key: Some("re_test".to_owned()),
            ..Default::default()
        },
        ..Default::default()
    });

    let result = forwarder.forward(&inquiry()).await;

    assert!(matches!(result, Err(Error::Provider { status: 422, .. })));
    mock.assert_async().await;
}

#[tokio::test]
async fn email_without_api_key_is_a_configuration_error() {
    let forwarder = Forwarder::new(ContactConfig {
        provider: ProviderKind::Email,
        ..Default::default()
    });

    let result = forwarder.forward(&inquiry()).await;

    assert!(matches!(result, Err(Error::Config("email api key"))));
}

#[tokio::test]
async fn relay_posts_form_fields_accepting_json() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/f/abcd")
        .match_header("accept", "application/json")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("name".to_owned(), "Jane Doe".to_owned()),
            Matcher::UrlEncoded("email".to_owned(), "jane@example.com".to_owned()),
            Matcher::UrlEncoded("projectType".to_owned(), "Brand Documentaries".to_owned()),
            Matcher::UrlEncoded("message".to_owned(), "Tell our story".to_owned()),
        ]))
        .with_status(200)
        .with_body(r#"{"next":"/thanks","ok":true}"#)
        .create_async()
        .await;

    let forwarder = Forwarder::new(ContactConfig {
        provider: ProviderKind::Relay,
        relay: RelayConfig {
            url: Some(format!("{}/f/abcd", server.url())),
            direct: false,
        },
        ..Default::default()
    });

    let data = forwarder.forward(&inquiry()).await?;

    assert_eq!(data, Some(json!({"next":"/thanks","ok":true})));
    mock.assert_async().await;

    Ok(())
}
