//! User registration entry point.
//!
//! Wires the PostgreSQL store and the configured email backend into the
//! registration workflow and exposes it as a command-line tool.

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};
use common::AppConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load .env before the subscriber reads RUST_LOG
    let mut config = AppConfig::from_env();
    common::init_tracing(cli.verbose);

    if let Some(backend) = cli.backend {
        config.email_backend = backend;
    }
    tracing::debug!(
        email_backend = %config.email_backend,
        password_hasher = %config.password_hasher,
        database = ?config.database,
        "Configuration loaded"
    );

    let result = match cli.command {
        Commands::Register(args) => commands::register::execute(args, config).await,
        Commands::Users(args) => commands::users::execute(args, config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}
