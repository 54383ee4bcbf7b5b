use super::channel::Channel;
use super::outcome::Outcome;
use super::payload::Payload;
use super::sender::Sender;
use crate::error::AppResult;
use tracing::Instrument;

/// Stateless dispatcher between "deciding to notify" and "how to send"
///
/// Holds no sender; one is supplied on every call. The notifier has no
/// channel-specific code, so new channels work without changes here.
///
/// # Example
/// ```ignore
/// let sender = HttpEmailSender::new(config);
/// let payload = Payload::new().with("to", "a@b.com").with("body", "Hello");
/// let outcome = Notifier::new().notify(&payload, &sender).await?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Notifier;

impl Notifier {
    pub fn new() -> Self {
        Self
    }

    /// Forward `payload` to `sender` exactly once
    ///
    /// Resolves when the send resolves, and returns its result unchanged,
    /// errors included. Dropping the returned future drops the in-flight send.
    pub async fn notify<C, S>(&self, payload: &Payload, sender: &S) -> AppResult<Outcome>
    where
        C: Channel,
        S: Sender<C> + ?Sized,
    {
        let span = tracing::debug_span!("notify", channel = C::NAME, provider = sender.name());

        let result = sender.send(payload).instrument(span).await;

        match &result {
            Ok(outcome) => tracing::debug!(
                channel = C::NAME,
                provider = sender.name(),
                duration_ms = outcome.duration_ms,
                "notification sent"
            ),
            Err(error) => tracing::debug!(
                channel = C::NAME,
                provider = sender.name(),
                %error,
                "notification failed"
            ),
        }

        result
    }
}
