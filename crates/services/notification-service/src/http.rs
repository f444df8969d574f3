//! Standard HTTP email backend adapter.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::map_transport_err;
use common::EmailServiceConfig;
use domain::{DeliveryReceipt, DomainError, DomainResult, EmailMessage, EmailSender};

const SEND_PATH: &str = "/send";
const DEFAULT_FAILURE: &str = "Failed to send email";

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendResponse {
    success: bool,
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Email sender for the standard backend.
///
/// The backend fails a share of requests on purpose and answers with HTTP
/// 500 and a JSON body when it does. Failures are returned, not retried.
pub struct HttpEmailSender {
    client: Client,
    base_url: String,
}

impl HttpEmailSender {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> DomainResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(map_transport_err)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &EmailServiceConfig) -> DomainResult<Self> {
        Self::new(
            config.base_url(),
            Duration::from_millis(config.request_timeout_ms),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health`
    pub async fn health_check(&self) -> DomainResult<()> {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(map_transport_err)?;
        Ok(())
    }
}

/// Id used when the backend accepts a message without naming it.
fn client_message_id() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("client-{}-{}", Utc::now().timestamp_millis(), &random[..9])
}

#[async_trait]
impl EmailSender for HttpEmailSender {
    async fn send_email(&self, message: &EmailMessage) -> DomainResult<DeliveryReceipt> {
        message.validate()?;

        tracing::debug!(to = %message.to, subject = %message.subject, "Sending email");

        let response = self
            .client
            .post(format!("{}{}", self.base_url, SEND_PATH))
            .json(&SendRequest {
                to: &message.to,
                subject: &message.subject,
                body: &message.body,
            })
            .send()
            .await
            .map_err(map_transport_err)?;

        let status = response.status();
        let result: SendResponse = response.json().await.map_err(map_transport_err)?;

        if !result.success {
            let reason = result.error.unwrap_or_else(|| DEFAULT_FAILURE.to_string());
            tracing::warn!(to = %message.to, status = status.as_u16(), error = %reason, "Email rejected");
            return Err(DomainError::email(reason));
        }

        let message_id = result.message_id.unwrap_or_else(client_message_id);
        tracing::info!(to = %message.to, %message_id, "Email sent");
        Ok(DeliveryReceipt::new(message_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_id_shape() {
        let id = client_message_id();
        let parts: Vec<&str> = id.splitn(3, '-').collect();

        assert_eq!(parts[0], "client");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
        assert_ne!(client_message_id(), id);
    }

    #[test]
    fn test_response_decoding() {
        let ok: SendResponse =
            serde_json::from_str(r#"{"success":true,"messageId":"1700000000000-abc"}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.message_id.as_deref(), Some("1700000000000-abc"));

        let failed: SendResponse = serde_json::from_str(
            r#"{"success":false,"error":"SMTP server temporarily unavailable"}"#,
        )
        .unwrap();
        assert!(!failed.success);
        assert_eq!(failed.message_id, None);
        assert_eq!(failed.error.as_deref(), Some("SMTP server temporarily unavailable"));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let sender = HttpEmailSender::new("http://localhost:3002/", Duration::from_secs(1)).unwrap();
        assert_eq!(sender.base_url(), "http://localhost:3002");
    }
}
