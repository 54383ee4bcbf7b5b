//! Configuration settings structures for isp-notify
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "isp-notify".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/isp-notify.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_provider() -> String {
    "console".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_sms_max_length() -> usize {
    1600
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_log_path")]
    pub path: String,

    /// Append to an existing file instead of truncating it
    #[serde(default = "default_true")]
    pub append: bool,

    /// One of: full, compact, json
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: true,
            format: default_log_format(),
        }
    }
}

/// Logger section of the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub console: ConsoleSettings,

    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert file-level settings into the logger's runtime configuration
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format: LogFormat = self
            .file
            .format
            .parse()
            .map_err(|e: anyhow::Error| ConfigError::validation("logger.file.format", e.to_string()))?;

        Ok(LoggerConfig {
            level: self.level,
            console: ConsoleConfig::new(self.console.enabled, self.console.colored),
            file: FileConfig {
                enabled: self.file.enabled,
                path: PathBuf::from(self.file.path),
                append: self.file.append,
                format,
            },
        })
    }
}

// ============================================================================
// Notification Configuration
// ============================================================================

/// Email relay settings (`[notifications.email]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Sender implementation: "http" or "console"
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Relay endpoint accepting a JSON message
    #[serde(default)]
    pub endpoint: String,

    /// Bearer token for the relay
    #[serde(default)]
    pub api_token: String,

    /// Envelope sender address
    #[serde(default)]
    pub from: String,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: String::new(),
            api_token: String::new(),
            from: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// SMS gateway settings (`[notifications.sms]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsConfig {
    /// Sender implementation: "http" or "console"
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default)]
    pub endpoint: String,

    /// Sent as the `X-Api-Key` header
    #[serde(default)]
    pub api_key: String,

    /// Originating number or alphanumeric sender id
    #[serde(default)]
    pub from: String,

    /// Longest body accepted before the gateway is contacted
    #[serde(default = "default_sms_max_length")]
    pub max_length: usize,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: String::new(),
            api_key: String::new(),
            from: String::new(),
            max_length: default_sms_max_length(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Bark push settings (`[notifications.push]`)
///
/// Bark API Reference: https://github.com/Finb/Bark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushConfig {
    /// Sender implementation: "bark" or "console"
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default)]
    pub server_url: String,

    #[serde(default)]
    pub device_key: String,

    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub sound: Option<String>,

    /// passive, active or timeSensitive
    #[serde(default)]
    pub level: Option<String>,

    /// Deep link opened when the notification is tapped
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub group: Option<String>,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl PushConfig {
    /// Full push endpoint: `{server_url}/push/{device_key}`
    pub fn build_api_url(&self) -> String {
        format!(
            "{}/push/{}",
            self.server_url.trim_end_matches('/'),
            self.device_key
        )
    }
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            server_url: String::new(),
            device_key: String::new(),
            icon: None,
            sound: None,
            level: None,
            url: None,
            group: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// `[notifications]` section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Replace every configured sender with the console sender
    #[serde(default)]
    pub dry_run: bool,

    #[serde(default)]
    pub email: EmailConfig,

    #[serde(default)]
    pub sms: SmsConfig,

    #[serde(default)]
    pub push: PushConfig,
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub logger: LoggerSettings,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}
