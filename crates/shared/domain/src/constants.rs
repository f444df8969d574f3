//! Domain-level constants.
//!
//! These constants define business rules and the user-facing messages tied
//! to them.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Returned when email, name or password is empty
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Returned when the registration email is not `local@domain.tld` shaped
pub const INVALID_EMAIL_FORMAT_MESSAGE: &str = "Invalid email format";

/// Returned by email senders when the recipient is not email shaped
pub const INVALID_RECIPIENT_MESSAGE: &str = "Invalid email address";

// =============================================================================
// Users
// =============================================================================

/// Entity name used in duplicate-user conflicts
pub const USER_ENTITY: &str = "User";

// =============================================================================
// Credentials
// =============================================================================

/// Suffix appended by the reference credential transform
pub const CREDENTIAL_SUFFIX: &str = "-hashed";

// =============================================================================
// Notifications
// =============================================================================

/// Subject of the welcome email sent after registration
pub const WELCOME_SUBJECT: &str = "Welcome to Our Service!";

/// Build the password length error message
pub fn password_too_short_message() -> String {
    format!(
        "Password must be at least {} characters long",
        MIN_PASSWORD_LENGTH
    )
}
