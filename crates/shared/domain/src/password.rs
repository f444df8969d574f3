//! Credential derivation - turns a plaintext password into the stored hash.
//!
//! [`SuffixHasher`] is the reference transform used by the registration
//! workflow by default. [`Argon2Hasher`] produces salted Argon2id hashes for
//! deployments that store real credentials.

use argon2::Argon2;
use password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::constants::CREDENTIAL_SUFFIX;
use crate::error::{DomainError, DomainResult};

/// Derives and checks stored credentials.
pub trait CredentialHasher: Send + Sync {
    /// Derive the stored credential from a plaintext password.
    fn hash(&self, plain_text: &str) -> DomainResult<String>;

    /// Check a plaintext password against a stored credential.
    fn verify(&self, plain_text: &str, hash: &str) -> bool;
}

/// Reference transform: appends [`CREDENTIAL_SUFFIX`] to the plaintext.
///
/// Deterministic and reversible. Not a security-grade hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixHasher;

impl CredentialHasher for SuffixHasher {
    fn hash(&self, plain_text: &str) -> DomainResult<String> {
        Ok(format!("{}{}", plain_text, CREDENTIAL_SUFFIX))
    }

    fn verify(&self, plain_text: &str, hash: &str) -> bool {
        hash.strip_suffix(CREDENTIAL_SUFFIX) == Some(plain_text)
    }
}

/// Salted Argon2id hashing with the crate's default parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, plain_text: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
