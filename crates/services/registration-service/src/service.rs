//! Registration orchestrator.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use domain::{
    CredentialHasher, DomainError, DomainResult, EmailMessage, EmailSender, NewUser,
    RegistrationInput, RegistrationResult, SuffixHasher, User, UserRepository, USER_ENTITY,
};

/// Registration use case.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a user. Failures are reported in the result, never as a panic.
    async fn register_user(&self, input: RegistrationInput) -> RegistrationResult;
}

/// Orchestrates the store and the email sender for one registration.
///
/// Steps run strictly in order: validate, duplicate check, derive the
/// credential, persist, send the welcome email. The first failure ends the
/// attempt. A failed email does not remove the stored user.
pub struct UserRegistrationService {
    users: Arc<dyn UserRepository>,
    email: Arc<dyn EmailSender>,
    hasher: Arc<dyn CredentialHasher>,
}

impl UserRegistrationService {
    /// Use the reference `-hashed` credential transform.
    pub fn new(users: Arc<dyn UserRepository>, email: Arc<dyn EmailSender>) -> Self {
        Self::with_hasher(users, email, Arc::new(SuffixHasher))
    }

    pub fn with_hasher(
        users: Arc<dyn UserRepository>,
        email: Arc<dyn EmailSender>,
        hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self {
            users,
            email,
            hasher,
        }
    }

    async fn try_register(&self, input: RegistrationInput) -> DomainResult<User> {
        input.validate()?;

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(DomainError::conflict(USER_ENTITY));
        }

        let password_hash = self.hasher.hash(&input.password)?;
        let user = self
            .users
            .create_user(NewUser::new(input.email, input.name, password_hash))
            .await?;

        let welcome = EmailMessage::welcome(user.email.clone(), &user.name);
        let receipt = self.email.send_email(&welcome).await.map_err(|err| {
            warn!(user_id = user.id, error = %err, "Welcome email failed after user was stored");
            err
        })?;

        info!(user_id = user.id, message_id = %receipt.message_id, "Welcome email sent");
        Ok(user)
    }
}

#[async_trait]
impl RegistrationService for UserRegistrationService {
    async fn register_user(&self, input: RegistrationInput) -> RegistrationResult {
        let email = input.email.clone();

        match self.try_register(input).await {
            Ok(user) => {
                info!(user_id = user.id, email = %user.email, "User registered");
                RegistrationResult::succeeded(user.id)
            }
            Err(err) => {
                warn!(email = %email, error = %err, "Registration rejected");
                RegistrationResult::from(err)
            }
        }
    }
}
