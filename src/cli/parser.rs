//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

use crate::config::Environment as AppEnvironment;

/// Send notifications over email, SMS or push
#[derive(Parser, Debug)]
#[command(name = "isp-notify")]
#[command(about = "Send notifications over email, SMS or push")]
#[command(long_about = "
isp-notify sends a single notification through the sender configured for a
channel. Senders are chosen in the [notifications.<channel>] section of the
configuration; the console provider only logs the payload.

EXAMPLES:
    # Send an email with the configured provider
    isp-notify send --channel email --to a@b.com --subject Hi --body Hello

    # Send an SMS without contacting the gateway
    isp-notify send --channel sms --to +15551234567 --body 'Code 1234' --dry-run

    # Push with extra Bark parameters
    isp-notify send --channel push --title Deploy --body Done --field badge=1

    # Validate configuration and every configured sender
    isp-notify --config /etc/isp-notify/production.toml check
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Load exactly this TOML file instead of the layered config directory.
    /// NOTIFY_* environment variables still apply on top of it.
    #[arg(short, long, global = true, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` is layered over `default.toml`.
    #[arg(short, long, global = true, value_enum)]
    pub env: Option<Environment>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log level forced by `--verbose` or `--quiet`
    pub fn log_level_override(&self) -> Option<Level> {
        if self.verbose {
            Some(Level::DEBUG)
        } else if self.quiet {
            Some(Level::ERROR)
        } else {
            None
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one notification
    ///
    /// Builds a payload from the arguments and dispatches it through the
    /// sender configured for the chosen channel. Prints the delivery outcome
    /// as JSON.
    Send(SendArgs),

    /// Validate configuration and every configured sender, then exit
    Check,
}

/// Arguments of the `send` subcommand
#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    /// Channel to deliver on
    #[arg(long, value_enum)]
    pub channel: ChannelKind,

    /// Recipient address or phone number (ignored for push)
    #[arg(long)]
    pub to: Option<String>,

    /// Email subject
    #[arg(long)]
    pub subject: Option<String>,

    /// Push title
    #[arg(long)]
    pub title: Option<String>,

    /// Message body
    #[arg(long, value_parser = super::validation::validate_non_blank)]
    pub body: String,

    /// Extra payload field, repeatable
    ///
    /// Example: --field campaign=spring --field badge=1
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = super::validation::parse_field)]
    pub fields: Vec<(String, String)>,

    /// Log the payload instead of delivering it
    #[arg(long)]
    pub dry_run: bool,
}

/// Channel selector
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    Email,
    Sms,
    Push,
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<Environment> for AppEnvironment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => AppEnvironment::Development,
            Environment::Test => AppEnvironment::Test,
            Environment::Staging => AppEnvironment::Staging,
            Environment::Production => AppEnvironment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_send() {
        let cli = Cli::try_parse_from([
            "isp-notify",
            "send",
            "--channel",
            "email",
            "--to",
            "a@b.com",
            "--subject",
            "Hi",
            "--body",
            "Hello",
            "--field",
            "campaign=spring",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.log_level_override(), Some(Level::DEBUG));
        match cli.command {
            Commands::Send(args) => {
                assert_eq!(args.channel, ChannelKind::Email);
                assert_eq!(args.to.as_deref(), Some("a@b.com"));
                assert_eq!(args.subject.as_deref(), Some("Hi"));
                assert_eq!(args.body, "Hello");
                assert_eq!(
                    args.fields,
                    vec![("campaign".to_string(), "spring".to_string())]
                );
                assert!(!args.dry_run);
            }
            other => panic!("Expected Send, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_check_with_env_alias() {
        let cli = Cli::try_parse_from(["isp-notify", "check", "--env", "prod"]).unwrap();
        assert!(matches!(cli.command, Commands::Check));
        assert_eq!(cli.env, Some(Environment::Production));
        assert_eq!(
            AppEnvironment::from(Environment::Production),
            AppEnvironment::Production
        );
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["isp-notify", "-v", "-q", "check"]).is_err());
    }

    #[test]
    fn test_send_requires_channel_and_body() {
        assert!(Cli::try_parse_from(["isp-notify", "send", "--body", "x"]).is_err());
        assert!(Cli::try_parse_from(["isp-notify", "send", "--channel", "sms"]).is_err());
        assert!(
            Cli::try_parse_from(["isp-notify", "send", "--channel", "fax", "--body", "x"])
                .is_err()
        );
    }

    #[test]
    fn test_malformed_field_rejected() {
        let result = Cli::try_parse_from([
            "isp-notify",
            "send",
            "--channel",
            "push",
            "--body",
            "x",
            "--field",
            "oops",
        ]);
        assert!(result.is_err());
    }
}
