//! Register command.

use std::sync::Arc;

use common::AppConfig;
use domain::{RegistrationInput, UserRepository};
use registration_service_lib::{RegistrationService, UserRegistrationService};

use super::{hasher_for, settle, CommandResult};
use crate::cli::RegisterArgs;

/// Run one registration and print its result as JSON.
pub async fn execute(args: RegisterArgs, config: AppConfig) -> CommandResult {
    let email = notification_service_lib::sender_for(
        config.email_backend,
        config.selected_email_service(),
    )?;
    let users = Arc::new(user_service_lib::connect_postgres(&config.database).await?);

    let service = UserRegistrationService::with_hasher(
        users.clone(),
        email,
        hasher_for(config.password_hasher),
    );
    let result = service
        .register_user(RegistrationInput::new(args.email, args.name, args.password))
        .await;

    let closed = users.close().await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    let outcome: Result<(), String> = match result.error() {
        None => Ok(()),
        Some(reason) => Err(format!("Registration failed: {}", reason)),
    };
    settle(outcome, closed)
}
