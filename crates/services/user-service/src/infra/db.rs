//! Database connection and initialization.

use std::collections::HashSet;

use common::DatabaseConfig;
use sea_orm::{
    ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};
use sea_orm_migration::{seaql_migrations, MigratorTrait};

use super::migrations::Migrator;

/// Database wrapper for connection management
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the pool and run pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Self::connect_without_migrations(config).await?;

        db.run_migrations().await?;
        tracing::info!("Database connected and migrations applied");

        Ok(db)
    }

    /// Open the pool only (for migration commands).
    pub async fn connect_without_migrations(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(connect_options(config)).await?;
        tracing::debug!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Database pool opened"
        );
        Ok(Self { connection })
    }

    /// Hand the pool over to a store.
    pub fn into_connection(self) -> DatabaseConnection {
        self.connection
    }

    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Roll back the most recent migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Every known migration paired with whether it has been applied.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        let applied: HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        Ok(Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect())
    }

    /// Drop all tables and re-apply every migration.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Close the pool.
    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await
    }
}

fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(false);
    options
}
