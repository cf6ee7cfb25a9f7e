//! Archivist CLI entrypoint for migrating pull requests into Notion.

use std::io::{self, Write};
use std::process::ExitCode;

use archivist::telemetry::init_tracing;
use archivist::{ArchivistConfig, MigrationError};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), MigrationError> {
    let config = load_config()?;
    let mut stdout = io::stdout().lock();
    cli::migrate::run(&config, &mut stdout).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`MigrationError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ArchivistConfig, MigrationError> {
    ArchivistConfig::load().map_err(|error| MigrationError::Configuration {
        message: error.to_string(),
    })
}
