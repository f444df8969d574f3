//! Behaviour every `EmailSender` implementation must share.

mod support;

use std::time::Duration;

use async_trait::async_trait;
use tokio_test::assert_err;

use domain::{DomainError, EmailMessage, EmailSender};
use notification_service_lib::{EmailSenderStub, HttpEmailSender, ReliableHttpEmailSender};
use support::{reliable_backend, standard_backend, Behaviour, FakeBackend};

/// A sender plus a view of what reached its destination.
#[async_trait]
trait Harness: Send + Sync {
    fn sender(&self) -> &dyn EmailSender;
    async fn delivered(&self) -> Vec<EmailMessage>;
}

struct StubHarness(EmailSenderStub);

#[async_trait]
impl Harness for StubHarness {
    fn sender(&self) -> &dyn EmailSender {
        &self.0
    }

    async fn delivered(&self) -> Vec<EmailMessage> {
        self.0.sent_emails().await.into_iter().map(|s| s.message).collect()
    }
}

struct HttpHarness<S> {
    sender: S,
    backend: FakeBackend,
}

#[async_trait]
impl<S: EmailSender + 'static> Harness for HttpHarness<S> {
    fn sender(&self) -> &dyn EmailSender {
        &self.sender
    }

    async fn delivered(&self) -> Vec<EmailMessage> {
        self.backend.received()
    }
}

mod contract {
    use super::*;

    pub async fn sends_valid_message(h: &dyn Harness) {
        let message = EmailMessage::new("recipient@example.com", "Test Subject", "Test email body content");

        let receipt = h.sender().send_email(&message).await.unwrap();
        assert!(!receipt.message_id.is_empty());

        let delivered = h.delivered().await;
        assert!(delivered.contains(&message));
    }

    pub async fn sends_multiple_with_distinct_ids(h: &dyn Harness) {
        let first = EmailMessage::new("user1@example.com", "First Email", "First email body");
        let second = EmailMessage::new("user2@example.com", "Second Email", "Second email body");

        let a = h.sender().send_email(&first).await.unwrap();
        let b = h.sender().send_email(&second).await.unwrap();
        assert_ne!(a.message_id, b.message_id);

        let delivered = h.delivered().await;
        assert!(delivered.contains(&first));
        assert!(delivered.contains(&second));
    }

    pub async fn keeps_special_characters(h: &dyn Harness) {
        let message = EmailMessage::new("test@example.com", "Test: Special & Characters! #123", "Body content");

        h.sender().send_email(&message).await.unwrap();
        assert_eq!(h.delivered().await.last(), Some(&message));
    }

    pub async fn sends_long_body(h: &dyn Harness) {
        let message = EmailMessage::new("test@example.com", "Long Email", "Lorem ipsum ".repeat(100));

        h.sender().send_email(&message).await.unwrap();
        assert_eq!(h.delivered().await.last().map(|m| m.body.len()), Some(1200));
    }

    pub async fn rejects_invalid_recipient(h: &dyn Harness) {
        let err = h
            .sender()
            .send_email(&EmailMessage::new("invalid-email", "Test", "Test body"))
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::email("Invalid email address"));
        assert!(h.delivered().await.is_empty());
    }

    pub async fn rejects_empty_recipient(h: &dyn Harness) {
        assert_err!(
            h.sender()
                .send_email(&EmailMessage::new("", "Test", "Test body"))
                .await
        );
    }

    pub async fn rejects_empty_subject(h: &dyn Harness) {
        let err = h
            .sender()
            .send_email(&EmailMessage::new("test@example.com", "", "Test body"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("required fields"));
    }

    pub async fn rejects_empty_body(h: &dyn Harness) {
        let err = h
            .sender()
            .send_email(&EmailMessage::new("test@example.com", "Test Subject", ""))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Email service error: Missing required fields");
        assert!(h.delivered().await.is_empty());
    }
}

macro_rules! email_sender_contract {
    ($factory:path) => {
        email_sender_contract!(@cases $factory,
            sends_valid_message,
            sends_multiple_with_distinct_ids,
            keeps_special_characters,
            sends_long_body,
            rejects_invalid_recipient,
            rejects_empty_recipient,
            rejects_empty_subject,
            rejects_empty_body,
        );
    };
    (@cases $factory:path, $($case:ident),+ $(,)?) => {
        $(
            #[tokio::test]
            async fn $case() {
                let harness = $factory().await;
                crate::contract::$case(&harness).await;
            }
        )+
    };
}

mod stub {
    use super::*;

    async fn harness() -> StubHarness {
        StubHarness(EmailSenderStub::new())
    }

    email_sender_contract!(harness);
}

mod standard_http {
    use super::*;

    async fn harness() -> HttpHarness<HttpEmailSender> {
        let backend = standard_backend(Behaviour::Accept).await;
        let sender = HttpEmailSender::new(&backend.base_url, Duration::from_secs(5)).unwrap();
        HttpHarness { sender, backend }
    }

    email_sender_contract!(harness);
}

mod reliable_http {
    use super::*;

    async fn harness() -> HttpHarness<ReliableHttpEmailSender> {
        let backend = reliable_backend(Behaviour::Accept).await;
        let sender = ReliableHttpEmailSender::new(&backend.base_url, Duration::from_secs(5)).unwrap();
        HttpHarness { sender, backend }
    }

    email_sender_contract!(harness);
}
