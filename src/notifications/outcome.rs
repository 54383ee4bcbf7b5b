use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a successful delivery
///
/// Failures never produce an `Outcome`; senders return
/// `AppError::Transport` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Channel the payload went out on
    pub channel: String,
    /// Provider that delivered it
    pub provider: String,
    /// Identifier assigned by the provider, when it returns one
    pub message_id: Option<String>,
    /// HTTP status code or provider-specific status
    pub status_code: Option<u16>,
    /// Raw response body
    pub response: Option<String>,
    /// Time taken for the operation in milliseconds
    pub duration_ms: u64,
    pub sent_at: Timestamp,
}

impl Outcome {
    pub fn new(channel: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            provider: provider.into(),
            message_id: None,
            status_code: None,
            response: None,
            duration_ms: 0,
            sent_at: Timestamp::now(),
        }
    }

    pub fn with_message_id(mut self, message_id: Option<String>) -> Self {
        self.message_id = message_id;
        self
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn with_response(mut self, response: Option<String>) -> Self {
        self.response = response;
        self
    }

    pub fn with_duration(mut self, elapsed: Duration) -> Self {
        self.duration_ms = elapsed.as_millis().try_into().unwrap_or(u64::MAX);
        self
    }
}
