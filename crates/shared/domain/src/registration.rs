//! Registration input and outcome.

use serde::{Deserialize, Serialize};

use crate::constants::{
    password_too_short_message, INVALID_EMAIL_FORMAT_MESSAGE, MIN_PASSWORD_LENGTH,
    MISSING_FIELDS_MESSAGE,
};
use crate::email::is_valid_email;
use crate::error::{DomainError, DomainResult};

/// Data submitted by someone registering
#[derive(Clone, Deserialize)]
pub struct RegistrationInput {
    /// User email address
    pub email: String,
    /// User display name
    pub name: String,
    /// Plaintext password (minimum 6 characters)
    pub password: String,
}

// Don't expose the plaintext in debug output
impl std::fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl RegistrationInput {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password: password.into(),
        }
    }

    /// Check required fields, then email shape, then password length.
    ///
    /// The first failing rule wins.
    pub fn validate(&self) -> DomainResult<()> {
        if self.email.is_empty() || self.name.is_empty() || self.password.is_empty() {
            return Err(DomainError::validation(MISSING_FIELDS_MESSAGE));
        }

        if !is_valid_email(&self.email) {
            return Err(DomainError::validation(INVALID_EMAIL_FORMAT_MESSAGE));
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(password_too_short_message()));
        }

        Ok(())
    }
}

/// Uniform outcome of a registration attempt.
///
/// Exactly one of `user_id` (on success) and `error` (on failure) is set.
/// Deserialization rejects any other combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawRegistrationResult")]
pub struct RegistrationResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRegistrationResult {
    success: bool,
    #[serde(default)]
    user_id: Option<i32>,
    #[serde(default)]
    error: Option<String>,
}

impl TryFrom<RawRegistrationResult> for RegistrationResult {
    type Error = String;

    fn try_from(raw: RawRegistrationResult) -> Result<Self, Self::Error> {
        match (raw.success, raw.user_id, raw.error) {
            (true, Some(user_id), None) => Ok(Self::succeeded(user_id)),
            (false, None, Some(error)) => Ok(Self::failed(error)),
            (true, _, _) => Err("successful result needs a userId and no error".to_string()),
            (false, _, _) => Err("failed result needs an error and no userId".to_string()),
        }
    }
}

impl RegistrationResult {
    /// Successful registration of the user with the given id
    pub fn succeeded(user_id: i32) -> Self {
        Self {
            success: true,
            user_id: Some(user_id),
            error: None,
        }
    }

    /// Failed registration with a human-readable reason
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            user_id: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user_id
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl From<DomainError> for RegistrationResult {
    fn from(err: DomainError) -> Self {
        RegistrationResult::failed(err.to_string())
    }
}
