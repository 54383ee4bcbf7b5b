//! Command executor for dispatching CLI commands
//!
//! Main entry point for executing CLI commands after parsing and
//! configuration loading.

use super::handlers::{CheckCommandHandler, SendCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::{AppError, AppResult};

/// Execute a CLI command with the given settings
///
/// # Errors
/// Returns errors from command handlers unchanged
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    match &cli.command {
        Commands::Send(args) => {
            let outcome = SendCommandHandler::new(settings).execute(args).await?;
            let rendered = serde_json::to_string_pretty(&outcome)
                .map_err(|e| AppError::Internal { source: e.into() })?;
            println!("{rendered}");
        }
        Commands::Check => {
            let checked = CheckCommandHandler::new(settings).execute().await?;
            for (channel, provider) in checked {
                println!("✓ {channel}: {provider} sender configuration is valid");
            }
            println!("Configuration is valid");
        }
    }

    Ok(())
}
