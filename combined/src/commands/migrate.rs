//! Migrate command - Database migration management.

use common::AppConfig;
use sea_orm::DbErr;
use user_service_lib::Database;

use super::{settle, CommandResult};
use crate::cli::{MigrateAction, MigrateArgs};

pub async fn execute(args: MigrateArgs, config: AppConfig) -> CommandResult {
    tracing::info!("Running migration command...");

    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config.database).await?;

    let outcome = run(&db, args.action).await;
    let closed = db.close().await;
    settle(outcome, closed)
}

async fn run(db: &Database, action: MigrateAction) -> Result<(), DbErr> {
    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            tracing::info!("Migrations applied");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            tracing::info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let status = if applied { "applied" } else { "pending" };
                println!("{}: {}", name, status);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            db.fresh_migrations().await?;
            tracing::info!("Fresh migrations completed");
        }
    }
    Ok(())
}
