use domain::{DomainError, USER_ENTITY};
use sea_orm::{DbErr, SqlErr};

/// Translate a SeaORM error into the store's error vocabulary.
///
/// A unique-key violation on insert means another writer registered the
/// same email first.
pub(crate) fn map_db_err(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(%detail, "Unique constraint violated");
            DomainError::conflict(USER_ENTITY)
        }
        _ => DomainError::database(err.to_string()),
    }
}
