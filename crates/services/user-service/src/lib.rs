//! User store adapters.
//!
//! Two implementations of [`domain::UserRepository`]: a PostgreSQL store
//! backed by SeaORM and an in-memory store for tests and local runs.

pub mod infra;
pub mod repository;

pub use infra::{Database, Migrator};
pub use repository::{InMemoryUserRepository, PostgresUserRepository};

use common::DatabaseConfig;
use sea_orm::DbErr;

/// Connect to PostgreSQL, apply pending migrations and build the store.
pub async fn connect_postgres(config: &DatabaseConfig) -> Result<PostgresUserRepository, DbErr> {
    let db = Database::connect(config).await?;
    Ok(PostgresUserRepository::new(db.into_connection()))
}
