//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MISSING_FIELDS_MESSAGE;
use crate::error::{DomainError, DomainResult};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a user record from creation data, stamping both timestamps
    pub fn new(id: i32, data: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: data.email,
            name: data.name,
            password_hash: data.password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

/// User creation data handed to a user store
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    /// User email address (unique key)
    pub email: String,
    /// User display name
    pub name: String,
    /// Derived credential, never the plaintext password
    pub password_hash: String,
}

impl NewUser {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Reject creation data with an empty email, name or credential.
    pub fn ensure_complete(&self) -> DomainResult<()> {
        if self.email.is_empty() || self.name.is_empty() || self.password_hash.is_empty() {
            return Err(DomainError::validation(MISSING_FIELDS_MESSAGE));
        }
        Ok(())
    }
}

/// User response (safe to print, no credential)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: i32,
    /// User email address
    pub email: String,
    /// User display name
    pub name: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
