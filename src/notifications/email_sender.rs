//! Email delivery through an HTTP mail relay.
//!
//! The relay accepts one JSON message per request and authenticates with a
//! bearer token. Uses the global `HTTP_CLIENT` for connection pooling.

use super::channel::{Channel, Email};
use super::http::{deliver, require_setting, validate_http_url};
use super::outcome::Outcome;
use super::payload::{Payload, keys};
use super::sender::Sender;
use crate::config::EmailConfig;
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use std::time::Duration;

const RESERVED_KEYS: &[&str] = &[keys::TO, keys::SUBJECT, keys::BODY];

/// Email sender backed by an HTTP relay
///
/// Requires `to` and `body` in the payload; `subject` is optional. Remaining
/// payload keys travel in a `metadata` object.
///
/// # Example
/// ```ignore
/// let config = EmailConfig {
///     provider: "http".to_string(),
///     endpoint: "https://mail.example.com/v1/messages".to_string(),
///     api_token: "token".to_string(),
///     from: "noreply@example.com".to_string(),
///     timeout_seconds: 30,
/// };
/// let sender = HttpEmailSender::new(config);
/// let outcome = Notifier::new().notify(&payload, &sender).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpEmailSender {
    config: EmailConfig,
}

impl HttpEmailSender {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// JSON body for the relay
    fn build_request_body(&self, payload: &Payload) -> AppResult<Value> {
        let to = payload.require_str(keys::TO)?;
        if !to.contains('@') {
            return Err(AppError::validation(keys::TO, "must be an email address"));
        }
        let text = payload.require_str(keys::BODY)?;

        let mut body = json!({
            "from": self.config.from,
            "to": to,
            "text": text,
        });

        if let Some(subject) = payload.get_str(keys::SUBJECT) {
            body["subject"] = json!(subject);
        }

        let metadata: Map<String, Value> = payload
            .extra_fields(RESERVED_KEYS)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        if !metadata.is_empty() {
            body["metadata"] = Value::Object(metadata);
        }

        Ok(body)
    }
}

#[async_trait]
impl Sender<Email> for HttpEmailSender {
    async fn send(&self, payload: &Payload) -> AppResult<Outcome> {
        let body = self.build_request_body(payload)?;

        let request = HTTP_CLIENT
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_token)
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .json(&body);

        deliver(request, Email::NAME, self.name()).await
    }

    fn name(&self) -> &'static str {
        "http"
    }

    /// Checks that:
    /// - endpoint is an http(s) URL
    /// - api_token is not empty
    /// - from looks like an email address
    async fn validate_config(&self) -> AppResult<()> {
        validate_http_url("notifications.email.endpoint", &self.config.endpoint)?;
        require_setting("notifications.email.api_token", &self.config.api_token)?;
        require_setting("notifications.email.from", &self.config.from)?;

        if !self.config.from.contains('@') {
            return Err(AppError::validation(
                "notifications.email.from",
                "must be an email address",
            ));
        }

        Ok(())
    }
}
