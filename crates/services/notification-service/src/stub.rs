//! In-memory email sender.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use domain::{DeliveryReceipt, DomainResult, EmailMessage, EmailSender};

/// A message accepted by [`EmailSenderStub`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub message: EmailMessage,
    pub message_id: String,
}

struct Outbox {
    sent: Vec<SentEmail>,
    next_id: u64,
}

impl Outbox {
    fn empty() -> Self {
        Self {
            sent: Vec::new(),
            next_id: 1,
        }
    }
}

/// Email sender that records messages instead of delivering them.
///
/// Applies the same checks as the HTTP backends. Ids look like
/// `stub-msg-{n}-{unix_millis}`.
pub struct EmailSenderStub {
    outbox: Mutex<Outbox>,
}

impl Default for EmailSenderStub {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailSenderStub {
    pub fn new() -> Self {
        Self {
            outbox: Mutex::new(Outbox::empty()),
        }
    }

    /// Every accepted message, oldest first.
    pub async fn sent_emails(&self) -> Vec<SentEmail> {
        self.outbox.lock().await.sent.clone()
    }

    pub async fn last_sent_email(&self) -> Option<SentEmail> {
        self.outbox.lock().await.sent.last().cloned()
    }

    /// Forget recorded messages and restart the id sequence.
    pub async fn clear(&self) {
        *self.outbox.lock().await = Outbox::empty();
    }
}

#[async_trait]
impl EmailSender for EmailSenderStub {
    async fn send_email(&self, message: &EmailMessage) -> DomainResult<DeliveryReceipt> {
        message.validate()?;

        let mut outbox = self.outbox.lock().await;
        let message_id = format!("stub-msg-{}-{}", outbox.next_id, Utc::now().timestamp_millis());
        outbox.next_id += 1;
        outbox.sent.push(SentEmail {
            message: message.clone(),
            message_id: message_id.clone(),
        });

        tracing::debug!(to = %message.to, %message_id, "Email recorded by stub");
        Ok(DeliveryReceipt::new(message_id))
    }
}
