//! CLI module for isp-notify
//!
//! - Argument parsing with clap
//! - Configuration loading with CLI overrides
//! - Command execution through per-command handlers

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use executor::execute_command;
pub use parser::{ChannelKind, Cli, Commands, Environment, SendArgs};

use crate::config::{ConfigError, ConfigLoader, Settings};
use crate::logger::{LoggerConfig, init_logger};

/// Load configuration and apply CLI overrides
///
/// `--config` selects single-file mode, `--env` picks the environment layer,
/// and the CLI flags win over anything loaded from files or the environment.
///
/// # Errors
/// Returns error if configuration loading or validation fails
pub fn load_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::from_file(path.clone()),
        None => ConfigLoader::new()?,
    };

    let loader = match cli.env {
        Some(env) => loader.with_environment(env.into()),
        None => loader,
    };

    let mut settings = loader.load()?;
    apply_cli_overrides(&mut settings, cli);

    Ok(settings)
}

/// Apply flag overrides to already loaded settings
///
/// `--verbose` and `--quiet` are applied when the logger is built, see
/// [`init_logger_from_settings`].
pub fn apply_cli_overrides(settings: &mut Settings, cli: &Cli) {
    if let Commands::Send(args) = &cli.command {
        if args.dry_run {
            settings.notifications.dry_run = true;
        }
    }
}

/// Initialize logger from settings, honouring `--verbose` / `--quiet`
pub fn init_logger_from_settings(settings: &Settings, cli: &Cli) -> anyhow::Result<()> {
    init_logger(logger_config_for(settings, cli)?)
}

fn logger_config_for(settings: &Settings, cli: &Cli) -> anyhow::Result<LoggerConfig> {
    let config = settings.logger.clone().into_logger_config()?;
    Ok(match cli.log_level_override() {
        Some(level) => config.with_level(level),
        None => config,
    })
}
