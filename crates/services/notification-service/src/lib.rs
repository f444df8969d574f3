//! Email sender adapters.
//!
//! - [`EmailSenderStub`] keeps messages in memory for tests.
//! - [`HttpEmailSender`] talks to the standard backend (`POST /send`).
//! - [`ReliableHttpEmailSender`] talks to the reliable backend (`POST /sendMessage`).

mod error;
pub mod http;
pub mod http_reliable;
pub mod stub;

use std::sync::Arc;

use common::{EmailBackend, EmailServiceConfig};
use domain::{DomainResult, EmailSender};

pub use http::HttpEmailSender;
pub use http_reliable::ReliableHttpEmailSender;
pub use stub::{EmailSenderStub, SentEmail};

/// Build the HTTP sender for the selected backend.
pub fn sender_for(
    backend: EmailBackend,
    config: &EmailServiceConfig,
) -> DomainResult<Arc<dyn EmailSender>> {
    tracing::info!(%backend, base_url = %config.base_url(), "Using HTTP email backend");

    Ok(match backend {
        EmailBackend::Standard => Arc::new(HttpEmailSender::from_config(config)?),
        EmailBackend::Reliable => Arc::new(ReliableHttpEmailSender::from_config(config)?),
    })
}
