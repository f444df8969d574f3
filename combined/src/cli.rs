//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use common::EmailBackend;

/// Register users and manage the user store
#[derive(Parser, Debug)]
#[command(name = "user-registration")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Email backend to send through (overrides EMAIL_BACKEND)
    #[arg(long, global = true)]
    pub backend: Option<EmailBackend>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new user and send the welcome email
    Register(RegisterArgs),

    /// Inspect or remove stored users
    Users(UsersArgs),

    /// Run database migrations
    Migrate(MigrateArgs),
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub name: String,

    /// Plaintext password (minimum 6 characters)
    #[arg(long, env = "REGISTRATION_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// List users, newest first
    List,
    /// Delete the user with this email
    Delete { email: String },
}

#[derive(Args, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}
