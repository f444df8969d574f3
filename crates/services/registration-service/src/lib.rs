//! User registration workflow.
//!
//! Validates the submitted data, rejects known emails, derives the stored
//! credential, persists the user and sends a welcome email, all through the
//! [`domain::UserRepository`] and [`domain::EmailSender`] ports.

mod service;

pub use service::{RegistrationService, UserRegistrationService};
