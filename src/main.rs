use clap::Parser;
use club_dues::commands::{self, Cli};
use club_dues::config;
use club_dues::storage::Storage;
use dotenvy::dotenv;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Parse the command line before touching any storage
    let cli = Cli::parse();

    // 4. Load the application configuration
    let app_config = match config::load_app_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load application configuration: {e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // 5. Build the configured storage backend and run the command
    let storage = Storage::from_config(&app_config.storage);
    match commands::run(cli, &storage, &app_config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
