//! Reliable HTTP email backend adapter.
//!
//! The backend names the fields differently: `to`, `subject` and `body` are
//! sent as `recipient`, `title` and `content`, and the receipt comes back as
//! `{"sent", "id", "message"}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::map_transport_err;
use common::EmailServiceConfig;
use domain::{DeliveryReceipt, DomainError, DomainResult, EmailMessage, EmailSender};

const SEND_PATH: &str = "/sendMessage";
const DEFAULT_FAILURE: &str = "Failed to send message";

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    recipient: &'a str,
    title: &'a str,
    content: &'a str,
}

impl<'a> From<&'a EmailMessage> for SendMessageRequest<'a> {
    fn from(message: &'a EmailMessage) -> Self {
        Self {
            recipient: &message.to,
            title: &message.subject,
            content: &message.body,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    sent: bool,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Email sender for the reliable backend (HTTP 400 with a JSON body on
/// rejection).
pub struct ReliableHttpEmailSender {
    client: Client,
    base_url: String,
}

impl ReliableHttpEmailSender {
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

#[async_trait]
impl EmailSender for ReliableHttpEmailSender {
    async fn send_email(&self, message: &EmailMessage) -> DomainResult<DeliveryReceipt> {
        message.validate()?;

        tracing::debug!(recipient = %message.to, title = %message.subject, "Sending message");

        let response = self
            .client
            .post(format!("{}{}", self.base_url, SEND_PATH))
            .json(&SendMessageRequest::from(message))
            .send()
            .await
            .map_err(map_transport_err)?;

        let status = response.status();
        let result: SendMessageResponse = response.json().await.map_err(map_transport_err)?;

        if !result.sent {
            let reason = result.message.unwrap_or_else(|| DEFAULT_FAILURE.to_string());
            tracing::warn!(recipient = %message.to, status = status.as_u16(), error = %reason, "Message rejected");
            return Err(DomainError::email(reason));
        }

        let message_id = result
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| DomainError::email("Response missing message id"))?;

        tracing::info!(recipient = %message.to, %message_id, "Message sent");
        Ok(DeliveryReceipt::new(message_id))
    }
}
