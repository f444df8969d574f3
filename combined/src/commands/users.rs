//! Users command - inspect and remove stored users.

use common::AppConfig;
use domain::{UserRepository, UserResponse};
use serde_json::json;

use super::{settle, CommandResult};
use crate::cli::{UsersAction, UsersArgs};

pub async fn execute(args: UsersArgs, config: AppConfig) -> CommandResult {
    let users = user_service_lib::connect_postgres(&config.database).await?;

    let outcome = match args.action {
        UsersAction::List => users.get_all_users().await.map(|all| {
            let listed: Vec<UserResponse> = all.iter().map(UserResponse::from).collect();
            tracing::info!(count = listed.len(), "Listed users");
            json!(listed)
        }),
        UsersAction::Delete { email } => users.delete_user(&email).await.map(|deleted| {
            tracing::info!(%email, deleted, "Delete requested");
            json!({ "email": email, "deleted": deleted })
        }),
    };

    // Close even when the query failed
    let closed = users.close().await;
    if let Ok(value) = &outcome {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    settle(outcome, closed).map(|_| ())
}
