use super::channel::Channel;
use super::outcome::Outcome;
use super::payload::Payload;
use super::sender::Sender;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Writes the payload to the log instead of delivering it
///
/// Bound to a single channel like every other sender; a
/// `ConsoleSender<Email>` implements `Sender<Email>` only. Backs dry runs and
/// `provider = "console"`.
pub struct ConsoleSender<C> {
    _channel: PhantomData<fn() -> C>,
}

impl<C: Channel> ConsoleSender<C> {
    pub fn new() -> Self {
        Self {
            _channel: PhantomData,
        }
    }
}

impl<C: Channel> Default for ConsoleSender<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Channel> Clone for ConsoleSender<C> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<C: Channel> fmt::Debug for ConsoleSender<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSender")
            .field("channel", &C::NAME)
            .finish()
    }
}

#[async_trait]
impl<C: Channel> Sender<C> for ConsoleSender<C> {
    async fn send(&self, payload: &Payload) -> AppResult<Outcome> {
        let message_id = Uuid::new_v4().to_string();
        let rendered = serde_json::to_string(payload).map_err(|e| AppError::Internal {
            source: e.into(),
        })?;

        tracing::info!(
            channel = C::NAME,
            message_id = %message_id,
            payload = %rendered,
            "console delivery"
        );

        Ok(Outcome::new(C::NAME, self.name()).with_message_id(Some(message_id)))
    }

    fn name(&self) -> &'static str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{Email, Push};

    #[tokio::test]
    async fn test_console_send_succeeds() {
        let sender = ConsoleSender::<Email>::new();
        let payload = Payload::new().with("to", "a@b.com").with("body", "Hello");

        let outcome = sender.send(&payload).await.unwrap();
        assert_eq!(outcome.channel, "email");
        assert_eq!(outcome.provider, "console");
        assert!(outcome.message_id.is_some());
    }

    #[tokio::test]
    async fn test_console_message_ids_are_unique() {
        let sender = ConsoleSender::<Push>::default();
        let payload = Payload::new().with("body", "ping");

        let first = sender.send(&payload).await.unwrap();
        let second = sender.send(&payload).await.unwrap();
        assert_ne!(first.message_id, second.message_id);
        assert_eq!(format!("{sender:?}"), r#"ConsoleSender { channel: "push" }"#);
    }
}
