use crate::config::error::ConfigError;
use thiserror::Error;

/// Failure reported by a sender when its transport could not deliver a payload.
///
/// Carries enough context for the caller to decide what to do next; the
/// notifier passes it through untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{channel} delivery via {provider} failed: {reason}")]
pub struct TransportError {
    /// Channel the sender is bound to (e.g. "email")
    pub channel: String,
    /// Provider that attempted the delivery (e.g. "http", "bark")
    pub provider: String,
    /// HTTP status code or gateway-specific status, when one was received
    pub status_code: Option<u16>,
    /// Network error text or rejection body
    pub reason: String,
}

impl TransportError {
    pub fn new(
        channel: impl Into<String>,
        provider: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            channel: channel.into(),
            provider: provider.into(),
            status_code: None,
            reason: reason.into(),
        }
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }
}

/// Application-wide error type.
///
/// Senders raise `Transport`; the sender factory raises `ContractViolation`
/// when configuration asks a provider to serve a channel it does not implement.
#[derive(Error, Debug)]
pub enum AppError {
    /// The underlying channel failed to deliver
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A sender was requested for a channel its provider does not implement
    #[error("Contract violation: expected a {expected} sender, got {actual}")]
    ContractViolation { expected: String, actual: String },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Shorthand for a validation failure on a named field
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::ValidationError { field, .. } => field.clone(),
            ConfigError::FileNotFound(_) => "config_file".to_string(),
            ConfigError::EnvVarError(_) | ConfigError::MutualExclusivityError(_) => {
                "environment".to_string()
            }
            ConfigError::ParseError(_) | ConfigError::Other(_) => "settings".to_string(),
        };
        AppError::Configuration {
            key,
            source: anyhow::Error::new(error),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
