use a1day1_notification::Forwarder;
use a1day1_shared::Inquiry;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::routes::AppState;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully";
pub const CONFIGURATION_ERROR_MESSAGE: &str = "Configuration error";
pub const ERROR_MESSAGE: &str = "Error submitting form";

/// Uniform answer of the contact endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ContactResponse {
    pub fn ok(data: Option<Value>) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_owned(),
            data,
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_owned(),
            data: None,
        }
    }
}

/// Forwards one inquiry and maps the outcome to a status and body.
///
/// Every failure is logged here and becomes a 500; callers cannot tell a
/// provider rejection from a network error.
pub async fn forward_inquiry(
    forwarder: &Forwarder,
    inquiry: &Inquiry,
) -> (StatusCode, ContactResponse) {
    match forwarder.forward(inquiry).await {
        Ok(data) => (StatusCode::OK, ContactResponse::ok(data)),
        Err(err) if err.is_config() => {
            tracing::error!(err = %err, "Contact provider not configured");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ContactResponse::failure(CONFIGURATION_ERROR_MESSAGE),
            )
        }
        Err(err) => {
            tracing::error!(err = %err, "Error processing contact form");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ContactResponse::failure(ERROR_MESSAGE),
            )
        }
    }
}

/// POST /api/contact
pub async fn contact(
    State(app): State<AppState>,
    payload: Result<Json<Inquiry>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let inquiry = match payload {
        Ok(Json(inquiry)) => inquiry,
        Err(rejection) => {
            tracing::error!(err = %rejection, "Error processing contact form");

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse::failure(ERROR_MESSAGE)),
            );
        }
    };

    let (status, response) = forward_inquiry(&app.forwarder, &inquiry).await;

    (status, Json(response))
}
