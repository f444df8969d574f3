//! User store port.

use async_trait::async_trait;

use crate::error::DomainResult;
use crate::user::{NewUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User store keyed by email.
///
/// Implementations enforce email uniqueness themselves: a second
/// `create_user` for an existing email fails with
/// [`DomainError::Conflict`](crate::DomainError::Conflict), whether or not the
/// caller checked first.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by exact (case-sensitive) email address
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Create a new user, assigning its id and timestamps
    async fn create_user(&self, new_user: NewUser) -> DomainResult<User>;

    /// List all users, newest first
    async fn get_all_users(&self) -> DomainResult<Vec<User>>;

    /// Delete user by email, returning whether a record was removed
    async fn delete_user(&self, email: &str) -> DomainResult<bool>;

    /// Release held resources (connections). Call once at shutdown.
    async fn close(&self) -> DomainResult<()> {
        Ok(())
    }
}
