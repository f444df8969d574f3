//! Domain layer - Core registration entities, value objects and ports.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The port traits in [`ports`] are implemented by the adapter crates and
//! consumed by the registration orchestrator.

pub mod constants;
pub mod email;
pub mod error;
pub mod password;
pub mod ports;
pub mod registration;
pub mod user;

pub use constants::*;
pub use email::{is_valid_email, DeliveryReceipt, EmailMessage};
pub use error::{DomainError, DomainResult};
pub use password::{Argon2Hasher, CredentialHasher, SuffixHasher};
pub use ports::{EmailSender, UserRepository};
pub use registration::{RegistrationInput, RegistrationResult};
pub use user::{NewUser, User, UserResponse};

#[cfg(any(test, feature = "test-utils"))]
pub use ports::{MockEmailSender, MockUserRepository};
