use domain::DomainError;

/// Translate a transport or decoding failure into an email error.
pub(crate) fn map_transport_err(err: reqwest::Error) -> DomainError {
    let reason = if err.is_timeout() {
        "Request timed out".to_string()
    } else if err.is_connect() {
        format!("Connection failed: {}", err)
    } else if err.is_decode() {
        format!("Unreadable response: {}", err)
    } else {
        err.to_string()
    };

    tracing::warn!(error = %err, "Email backend request failed");
    DomainError::email(reason)
}
