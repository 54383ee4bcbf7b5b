//! Bark push sender.
//!
//! Sends push notifications to iOS devices via Bark server API.
//! Uses the global `HTTP_CLIENT` for connection pooling and efficiency.
//!
//! Bark API Reference: https://github.com/Finb/Bark

use super::channel::{Channel, Push};
use super::http::{deliver, require_setting, validate_http_url};
use super::outcome::Outcome;
use super::payload::{Payload, keys};
use super::sender::Sender;
use crate::config::PushConfig;
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

/// Levels accepted by the Bark API
const VALID_LEVELS: &[&str] = &["passive", "active", "timeSensitive"];

/// Payload keys with a fixed meaning; everything else becomes a custom parameter
const RESERVED_KEYS: &[&str] = &[keys::TO, keys::TITLE, keys::SUBJECT, keys::BODY];

/// Bark push sender
///
/// Bark is an open-source iOS push notification service that supports
/// custom icons, sounds, deep links, and more. The device is fixed by
/// configuration, so a payload `to` is ignored.
///
/// # Example
/// ```ignore
/// let config = PushConfig {
///     provider: "bark".to_string(),
///     server_url: "https://bark.example.com".to_string(),
///     device_key: "YourDeviceKey".to_string(),
///     sound: Some("notification.wav".to_string()),
///     ..PushConfig::default()
/// };
/// let sender = BarkSender::new(config);
/// let outcome = Notifier::new().notify(&payload, &sender).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BarkSender {
    config: PushConfig,
}

impl BarkSender {
    pub fn new(config: PushConfig) -> Self {
        Self { config }
    }

    /// Builds the request body for Bark API
    ///
    /// The title comes from `title`, then `subject`, then a generic default.
    fn build_request_body(&self, payload: &Payload) -> AppResult<serde_json::Value> {
        let title = payload
            .get_str(keys::TITLE)
            .or_else(|| payload.get_str(keys::SUBJECT))
            .unwrap_or("Notification");

        let mut body = json!({
            "title": title,
            "body": payload.require_str(keys::BODY)?,
        });

        if let Some(icon) = &self.config.icon {
            body["icon"] = json!(icon);
        }

        if let Some(sound) = &self.config.sound {
            body["sound"] = json!(sound);
        }

        if let Some(level) = &self.config.level {
            body["level"] = json!(level);
        }

        if let Some(url) = &self.config.url {
            body["url"] = json!(url);
        }

        if let Some(group) = &self.config.group {
            body["group"] = json!(group);
        }

        for (key, value) in payload.extra_fields(RESERVED_KEYS) {
            body[key.as_str()] = value.clone();
        }

        Ok(body)
    }
}

#[async_trait]
impl Sender<Push> for BarkSender {
    async fn send(&self, payload: &Payload) -> AppResult<Outcome> {
        let body = self.build_request_body(payload)?;

        let request = HTTP_CLIENT
            .post(self.config.build_api_url())
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .json(&body);

        deliver(request, Push::NAME, self.name()).await
    }

    fn name(&self) -> &'static str {
        "bark"
    }

    /// Checks that:
    /// - server_url is a valid URL
    /// - device_key is not empty
    /// - level, if set, is one Bark understands
    async fn validate_config(&self) -> AppResult<()> {
        validate_http_url("notifications.push.server_url", &self.config.server_url)?;
        require_setting("notifications.push.device_key", &self.config.device_key)?;

        if let Some(level) = &self.config.level {
            if !VALID_LEVELS.contains(&level.as_str()) {
                return Err(AppError::validation(
                    "notifications.push.level",
                    "Level must be one of: passive, active, timeSensitive",
                ));
            }
        }

        Ok(())
    }
}
