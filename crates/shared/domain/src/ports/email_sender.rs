//! Notification port.

use async_trait::async_trait;

use crate::email::{DeliveryReceipt, EmailMessage};
use crate::error::DomainResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Delivers a single email and reports one outcome.
///
/// Fails with [`DomainError::Email`](crate::DomainError::Email) when the
/// message is incomplete, the recipient is not email shaped, or the backend
/// rejects the delivery.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send an email and return its delivery identifier
    async fn send_email(&self, message: &EmailMessage) -> DomainResult<DeliveryReceipt>;
}
