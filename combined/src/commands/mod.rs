//! Command implementations, one module per subcommand.

pub mod migrate;
pub mod register;
pub mod users;

use std::error::Error;
use std::sync::Arc;

use common::HasherKind;
use domain::{Argon2Hasher, CredentialHasher, SuffixHasher};

pub type CommandResult = Result<(), Box<dyn Error>>;

pub(crate) fn hasher_for(kind: HasherKind) -> Arc<dyn CredentialHasher> {
    match kind {
        HasherKind::Suffix => Arc::new(SuffixHasher),
        HasherKind::Argon2 => Arc::new(Argon2Hasher),
    }
}

/// Combine a command's outcome with the shutdown that follows it.
///
/// The command's own error wins; a close failure is reported only when the
/// command succeeded.
pub(crate) fn settle<T, E, C>(outcome: Result<T, E>, closed: Result<(), C>) -> Result<T, Box<dyn Error>>
where
    E: Into<Box<dyn Error>>,
    C: Into<Box<dyn Error>>,
{
    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close)) => Err(close.into()),
        (Err(err), closed) => {
            if let Err(close) = closed {
                let close: Box<dyn Error> = close.into();
                tracing::warn!(error = %close, "Closing the database also failed");
            }
            Err(err.into())
        }
    }
}
