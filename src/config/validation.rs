//! Configuration validation logic
//!
//! Range and format checks run right after loading. Provider-specific checks
//! (endpoint URLs, credentials) belong to each sender's `validate_config`,
//! since they only matter for the provider actually selected.

use crate::config::error::ConfigError;
use crate::config::settings::{
    EmailConfig, LoggerSettings, NotificationsConfig, PushConfig, Settings, SmsConfig,
};
use crate::notifications::factory::PROVIDER_CHANNELS;

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Provider must be one the sender factory can build
///
/// Whether it serves the section's channel is left to the factory, which
/// reports a mismatch as a contract violation.
fn validate_provider(field: &str, provider: &str) -> Result<(), ConfigError> {
    if PROVIDER_CHANNELS.iter().any(|(name, _)| *name == provider) {
        return Ok(());
    }
    let known: Vec<&str> = PROVIDER_CHANNELS.iter().map(|(name, _)| *name).collect();
    Err(ConfigError::validation(
        field,
        format!(
            "Unknown provider '{}'. Valid providers are: {}",
            provider,
            known.join(", ")
        ),
    ))
}

fn validate_timeout(field: &str, timeout_seconds: u64) -> Result<(), ConfigError> {
    if timeout_seconds == 0 {
        return Err(ConfigError::validation(
            field,
            "Timeout must be greater than 0 seconds.",
        ));
    }
    Ok(())
}

impl LoggerSettings {
    /// Validate logger configuration
    ///
    /// # Validation Rules
    /// - Level must be one of trace, debug, info, warn, error
    /// - File format must be one of full, compact, json
    /// - At least one output must be enabled
    /// - File path must not be empty when file output is enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.file.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.file.format",
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.file.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        if self.file.enabled && self.file.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file output is enabled.",
            ));
        }

        Ok(())
    }
}

impl EmailConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_provider("notifications.email.provider", &self.provider)?;
        validate_timeout("notifications.email.timeout_seconds", self.timeout_seconds)
    }
}

impl SmsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_provider("notifications.sms.provider", &self.provider)?;
        validate_timeout("notifications.sms.timeout_seconds", self.timeout_seconds)?;

        if self.max_length == 0 {
            return Err(ConfigError::validation(
                "notifications.sms.max_length",
                "Maximum SMS length must be greater than 0.",
            ));
        }

        Ok(())
    }
}

impl PushConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_provider("notifications.push.provider", &self.provider)?;
        validate_timeout("notifications.push.timeout_seconds", self.timeout_seconds)
    }
}

impl NotificationsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.email.validate()?;
        self.sms.validate()?;
        self.push.validate()
    }
}

impl Settings {
    /// Validate every section of the merged settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.application.name.trim().is_empty() {
            return Err(ConfigError::validation(
                "application.name",
                "Application name must not be empty.",
            ));
        }

        self.logger.validate()?;
        self.notifications.validate()
    }
}
