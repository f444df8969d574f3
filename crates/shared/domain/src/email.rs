//! Notification message types.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{INVALID_RECIPIENT_MESSAGE, MISSING_FIELDS_MESSAGE, WELCOME_SUBJECT};
use crate::error::{DomainError, DomainResult};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Check that a string has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Outbound email handed to an [`EmailSender`](crate::ports::EmailSender)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Recipient email address
    pub to: String,
    /// Email subject line
    pub subject: String,
    /// Email body content
    pub body: String,
}

impl EmailMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Welcome email sent once a user record has been created.
    pub fn welcome(to: impl Into<String>, name: &str) -> Self {
        let body = format!(
            "Hello {},\n\n\
             Thank you for registering with our service. \
             Your account has been created successfully.\n\n\
             Best regards,\nThe Team",
            name
        );
        Self::new(to, WELCOME_SUBJECT, body)
    }

    /// Apply the delivery preconditions every sender enforces.
    pub fn validate(&self) -> DomainResult<()> {
        if self.to.is_empty() || self.subject.is_empty() || self.body.is_empty() {
            return Err(DomainError::email(MISSING_FIELDS_MESSAGE));
        }
        if !is_valid_email(&self.to) {
            return Err(DomainError::email(INVALID_RECIPIENT_MESSAGE));
        }
        Ok(())
    }
}

/// Result of a successful send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Opaque identifier assigned by the sender
    pub message_id: String,
}

impl DeliveryReceipt {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
        }
    }
}
