//! Ports - capabilities the registration orchestrator depends on.
//!
//! Adapters in the service crates implement these traits; the orchestrator
//! only ever sees them as `Arc<dyn ...>` trait objects.

mod email_sender;
mod user_repository;

pub use email_sender::EmailSender;
pub use user_repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use email_sender::MockEmailSender;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
