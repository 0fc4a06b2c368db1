//! Outbound mail — a thin client for the transactional email provider.
//!
//! The intake flow only sees the [`MailSender`] trait, so tests can swap in
//! a recording fake; [`ResendMailer`] is the production implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Mail API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl MailError {
    /// Provider-supplied message when there is one, for surfacing to the
    /// caller of the contact endpoint.
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            MailError::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SendError {
    message: String,
}

#[async_trait]
pub trait MailSender: Send + Sync {
    /// Dispatches one email; returns the provider's message id.
    async fn send(&self, email: &OutboundEmail) -> Result<String, MailError>;
}

#[derive(Clone)]
pub struct ResendMailer {
    client: Client,
    api_key: String,
}

impl ResendMailer {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl MailSender for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<String, MailError> {
        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<SendError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(MailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let sent: SendResponse = response.json().await?;
        debug!("mail send accepted (id: {})", sent.id);
        Ok(sent.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbound_email_wire_shape() {
        let email = OutboundEmail {
            from: "Studio <hello@example.com>".to_string(),
            to: "sam@example.com".to_string(),
            subject: "Hi".to_string(),
            html: "<p>Hi</p>".to_string(),
            reply_to: None,
        };
        let value = serde_json::to_value(&email).unwrap();
        assert_eq!(value["from"], "Studio <hello@example.com>");
        assert!(value.get("reply_to").is_none());
    }

    #[test]
    fn test_provider_message_only_from_api_errors() {
        let api = MailError::Api {
            status: 422,
            message: "Invalid `to` address".to_string(),
        };
        assert_eq!(api.provider_message(), Some("Invalid `to` address"));

        let blank = MailError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(blank.provider_message(), None);
    }
}
