//! SMS delivery through an HTTP gateway.

use super::channel::{Channel, Sms};
use super::http::{deliver, require_setting, validate_http_url};
use super::outcome::Outcome;
use super::payload::{Payload, keys};
use super::sender::Sender;
use crate::config::SmsConfig;
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::time::Duration;

/// SMS sender backed by an HTTP gateway
///
/// Posts `{from, to, text}` with the API key in an `X-Api-Key` header. Bodies
/// longer than `max_length` characters are rejected before the gateway is
/// contacted.
#[derive(Debug, Clone)]
pub struct HttpSmsSender {
    config: SmsConfig,
}

impl HttpSmsSender {
    pub fn new(config: SmsConfig) -> Self {
        Self { config }
    }

    fn build_request_body(&self, payload: &Payload) -> AppResult<Value> {
        let to = payload.require_str(keys::TO)?;
        let text = payload.require_str(keys::BODY)?;

        let length = text.chars().count();
        if length > self.config.max_length {
            return Err(AppError::validation(
                keys::BODY,
                format!(
                    "is {} characters, longer than the {} allowed",
                    length, self.config.max_length
                ),
            ));
        }

        Ok(json!({
            "from": self.config.from,
            "to": to,
            "text": text,
        }))
    }
}

#[async_trait]
impl Sender<Sms> for HttpSmsSender {
    async fn send(&self, payload: &Payload) -> AppResult<Outcome> {
        let body = self.build_request_body(payload)?;

        let request = HTTP_CLIENT
            .post(&self.config.endpoint)
            .header("X-Api-Key", &self.config.api_key)
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .json(&body);

        deliver(request, Sms::NAME, self.name()).await
    }

    fn name(&self) -> &'static str {
        "http"
    }

    async fn validate_config(&self) -> AppResult<()> {
        validate_http_url("notifications.sms.endpoint", &self.config.endpoint)?;
        require_setting("notifications.sms.api_key", &self.config.api_key)?;
        require_setting("notifications.sms.from", &self.config.from)
    }
}
